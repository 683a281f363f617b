mod backend_bridge;
mod controller;
mod ui;

use clap::Parser;
use crossbeam_channel::bounded;

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::UiEvent;
use crate::ui::DesktopGuiApp;

/// Desktop client for the users REST API.
#[derive(Debug, Parser)]
struct Cli {
    /// Override the API base URL assembled from configuration,
    /// e.g. `http://127.0.0.1:8080/api`.
    #[arg(long)]
    base_url: Option<String>,

    /// Tracing filter, e.g. `info` or `client_core=debug`.
    #[arg(long, default_value = "info")]
    log_filter: String,
}

fn main() -> eframe::Result<()> {
    let cli = Cli::parse();
    tracing_subscriber::fmt()
        .with_env_filter(cli.log_filter.as_str())
        .init();

    let base_url = cli
        .base_url
        .unwrap_or_else(|| client_core::load_settings().base_url());
    tracing::info!(%base_url, "starting user management client");

    let (cmd_tx, cmd_rx) = bounded::<BackendCommand>(256);
    let (ui_tx, ui_rx) = bounded::<UiEvent>(2048);
    backend_bridge::runtime::launch(base_url, cmd_rx, ui_tx);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Gestión de Usuarios")
            .with_inner_size([960.0, 640.0])
            .with_min_inner_size([640.0, 480.0]),
        ..Default::default()
    };
    eframe::run_native(
        "Gestión de Usuarios",
        options,
        Box::new(|_cc| Ok(Box::new(DesktopGuiApp::bootstrap(cmd_tx, ui_rx)))),
    )
}

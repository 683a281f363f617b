//! Command orchestration helpers from UI actions to backend command queue.

use crossbeam_channel::{Sender, TrySendError};

use crate::backend_bridge::commands::BackendCommand;

pub fn dispatch_backend_command(
    cmd_tx: &Sender<BackendCommand>,
    cmd: BackendCommand,
    status: &mut String,
) {
    let cmd_name = match &cmd {
        BackendCommand::LoadUsers => "load_users",
        BackendCommand::CreateUser { .. } => "create_user",
        BackendCommand::UpdateUser { .. } => "update_user",
        BackendCommand::DeleteUser { .. } => "delete_user",
    };

    match cmd_tx.try_send(cmd) {
        Ok(()) => tracing::debug!(command = cmd_name, "queued ui->backend command"),
        Err(TrySendError::Full(_)) => {
            *status = "La cola de comandos está llena; inténtalo de nuevo".to_string();
        }
        Err(TrySendError::Disconnected(_)) => {
            *status =
                "El procesador de comandos se desconectó (posible fallo de arranque); reinicia la aplicación"
                    .to_string();
        }
    }
}

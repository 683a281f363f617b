//! Backend worker: a dedicated thread owning a tokio runtime that serves
//! queued commands against the users API, one at a time, and reports back
//! through the UI event queue. After every successful mutation the full list
//! is re-fetched; records are never patched locally.

use std::sync::Arc;

use client_core::{RequestError, RestUserDirectory, UserDirectory};
use crossbeam_channel::{Receiver, Sender};
use tracing::{error, info};

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::{UiError, UiEvent, UserOp};

pub fn launch(base_url: String, cmd_rx: Receiver<BackendCommand>, ui_tx: Sender<UiEvent>) {
    std::thread::spawn(move || {
        let runtime = match tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .build()
        {
            Ok(runtime) => runtime,
            Err(err) => {
                error!("failed to build backend runtime: {err}");
                let _ = ui_tx.try_send(UiEvent::Error(UiError::new(
                    UserOp::Load,
                    format!("failed to build backend runtime: {err}"),
                )));
                return;
            }
        };

        let directory: Arc<dyn UserDirectory> = Arc::new(RestUserDirectory::new(base_url.clone()));
        let _ = ui_tx.try_send(UiEvent::Info(format!("Cliente listo: {base_url}")));
        runtime.block_on(run_worker(directory, cmd_rx, ui_tx));
    });
}

async fn run_worker(
    directory: Arc<dyn UserDirectory>,
    cmd_rx: Receiver<BackendCommand>,
    ui_tx: Sender<UiEvent>,
) {
    while let Ok(cmd) = cmd_rx.recv() {
        match cmd {
            BackendCommand::LoadUsers => {
                info!("backend: load_users");
                reload_users(directory.as_ref(), &ui_tx).await;
            }
            BackendCommand::CreateUser { draft } => {
                info!("backend: create_user");
                match directory.create_user(&draft).await {
                    Ok(record) => {
                        let _ = ui_tx.try_send(UiEvent::UserSaved(record));
                        reload_users(directory.as_ref(), &ui_tx).await;
                    }
                    Err(err) => send_op_error(&ui_tx, UserOp::Create, err),
                }
            }
            BackendCommand::UpdateUser { user_id, draft } => {
                info!(user_id = user_id.0, "backend: update_user");
                match directory.update_user(user_id, &draft).await {
                    Ok(record) => {
                        let _ = ui_tx.try_send(UiEvent::UserSaved(record));
                        reload_users(directory.as_ref(), &ui_tx).await;
                    }
                    Err(err) => send_op_error(&ui_tx, UserOp::Update, err),
                }
            }
            BackendCommand::DeleteUser { user_id } => {
                info!(user_id = user_id.0, "backend: delete_user");
                match directory.delete_user(user_id).await {
                    Ok(_) => {
                        let _ = ui_tx.try_send(UiEvent::UserDeleted(user_id));
                        reload_users(directory.as_ref(), &ui_tx).await;
                    }
                    Err(err) => send_op_error(&ui_tx, UserOp::Delete, err),
                }
            }
        }
    }
}

/// Refreshing the list is its own operation: a reload failure after a
/// successful mutation surfaces as a load error, matching the UI contract.
async fn reload_users(directory: &dyn UserDirectory, ui_tx: &Sender<UiEvent>) {
    match directory.list_users().await {
        Ok(users) => {
            let _ = ui_tx.try_send(UiEvent::UsersLoaded(users));
        }
        Err(err) => send_op_error(ui_tx, UserOp::Load, err),
    }
}

fn send_op_error(ui_tx: &Sender<UiEvent>, op: UserOp, err: RequestError) {
    error!(?op, "backend request failed: {err}");
    let _ = ui_tx.try_send(UiEvent::Error(UiError::new(op, err.to_string())));
}

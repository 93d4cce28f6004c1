//! Runtime bridge between UI command queue and backend event intake.

use std::{sync::Arc, thread};

use client_core::{ChatsApi, HttpChatsApi};
use crossbeam_channel::{Receiver, Sender};

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::UiEvent;

/// Spawns the backend worker against the HTTP chats API at `api_base_url`.
pub fn launch(cmd_rx: Receiver<BackendCommand>, ui_tx: Sender<UiEvent>, api_base_url: String) {
    thread::spawn(move || {
        let api = match HttpChatsApi::new(&api_base_url) {
            Ok(api) => api,
            Err(err) => {
                let _ = ui_tx.try_send(UiEvent::BackendStartupFailed(err.to_string()));
                tracing::error!("failed to build chats api client: {err}");
                return;
            }
        };
        tracing::info!(url = api.chats_url(), "backend worker using chats api");
        run_worker(cmd_rx, ui_tx, Arc::new(api));
    });
}

/// Spawns the backend worker against any [`ChatsApi`].
pub fn launch_with_api(
    cmd_rx: Receiver<BackendCommand>,
    ui_tx: Sender<UiEvent>,
    api: Arc<dyn ChatsApi>,
) -> thread::JoinHandle<()> {
    thread::spawn(move || run_worker(cmd_rx, ui_tx, api))
}

fn run_worker(cmd_rx: Receiver<BackendCommand>, ui_tx: Sender<UiEvent>, api: Arc<dyn ChatsApi>) {
    let runtime = match tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
    {
        Ok(runtime) => runtime,
        Err(err) => {
            let _ = ui_tx.try_send(UiEvent::BackendStartupFailed(format!(
                "failed to build runtime: {err}"
            )));
            tracing::error!("failed to build backend runtime: {err}");
            return;
        }
    };

    runtime.block_on(async move {
        let _ = ui_tx.try_send(UiEvent::WorkerReady);

        while let Ok(cmd) = cmd_rx.recv() {
            match cmd {
                BackendCommand::CreateChat { seq, title } => {
                    let api = Arc::clone(&api);
                    let ui_tx = ui_tx.clone();
                    tokio::spawn(async move {
                        let outcome = api.create_chat(&title).await;
                        if ui_tx
                            .send(UiEvent::SubmissionResolved { seq, outcome })
                            .is_err()
                        {
                            tracing::warn!(seq, "ui closed before submission resolved");
                        }
                    });
                }
            }
        }
        tracing::debug!("command queue closed; backend worker exiting");
    });
}

//! Runtime bridge between UI command queue and backend event intake.

use std::thread;

use client_core::BriefFetcher;
use crossbeam_channel::{Receiver, Sender};

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::{UiError, UiErrorContext, UiEvent};

/// Spawns the backend worker. Commands are handled one at a time, so brief
/// fetches never overlap. `wake` is called after every event sent to the UI.
pub fn launch(
    cmd_rx: Receiver<BackendCommand>,
    ui_tx: Sender<UiEvent>,
    fetcher: BriefFetcher,
    wake: impl Fn() + Send + 'static,
) -> thread::JoinHandle<()> {
    thread::spawn(move || {
        let runtime = match tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .build()
        {
            Ok(runtime) => runtime,
            Err(err) => {
                let _ = ui_tx.try_send(UiEvent::Error(UiError::from_message(
                    UiErrorContext::BackendStartup,
                    format!("backend worker startup failure: failed to build runtime: {err}"),
                )));
                wake();
                tracing::error!("failed to build backend runtime: {err}");
                return;
            }
        };

        runtime.block_on(async move {
            let _ = ui_tx.try_send(UiEvent::Info("Backend worker ready".to_string()));
            wake();

            while let Ok(cmd) = cmd_rx.recv() {
                match cmd {
                    BackendCommand::FetchBrief { request_id, today } => {
                        tracing::info!(request_id, %today, "backend: fetch_brief");
                        let items = fetcher.fetch_brief(today).await;
                        // Blocks while the UI queue is full; the UI drains it every frame.
                        let sent = ui_tx.send(UiEvent::BriefLoaded { request_id, items });
                        wake();
                        if sent.is_err() {
                            tracing::info!("backend: UI event queue closed, worker exiting");
                            return;
                        }
                    }
                }
            }

            tracing::info!("backend: command queue closed, worker exiting");
        });
    })
}

//! Runtime bridge between UI command queue and backend event intake.

use std::{sync::Arc, thread};

use client_core::{
    HttpRelayTransport, MemoryFlagStore, Session, SubmissionController, SubmissionFlagStore,
};
use crossbeam_channel::{Receiver, Sender};
use storage::Storage;

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::{UiError, UiErrorContext, UiEvent};

#[derive(Debug, Clone)]
pub struct BackendConfig {
    pub relay_url: String,
    pub database_url: String,
}

pub fn launch(cmd_rx: Receiver<BackendCommand>, ui_tx: Sender<UiEvent>, config: BackendConfig) {
    thread::spawn(move || {
        let _ = ui_tx.try_send(UiEvent::Info("Backend worker starting...".to_string()));
        let runtime = match tokio::runtime::Builder::new_multi_thread()
            .worker_threads(1)
            .enable_all()
            .build()
        {
            Ok(runtime) => runtime,
            Err(err) => {
                let _ = ui_tx.try_send(UiEvent::Error(UiError::from_message(
                    UiErrorContext::BackendStartup,
                    format!("backend worker startup failure: failed to build runtime: {err}"),
                )));
                tracing::error!("failed to build backend runtime: {err}");
                return;
            }
        };

        runtime.block_on(run_worker(cmd_rx, ui_tx, config));
    });
}

async fn open_flag_store(
    database_url: &str,
    ui_tx: &Sender<UiEvent>,
) -> Arc<dyn SubmissionFlagStore> {
    match Storage::new(database_url).await {
        Ok(storage) => {
            tracing::info!(database_url, "backend: profile storage ready");
            Arc::new(storage)
        }
        Err(err) => {
            tracing::error!(database_url, "backend: profile storage unavailable: {err:#}");
            let _ = ui_tx.try_send(UiEvent::Error(UiError::from_message(
                UiErrorContext::BackendStartup,
                format!(
                    "profile storage unavailable ({err:#}); a sent message is only remembered until the app closes"
                ),
            )));
            Arc::new(MemoryFlagStore::default())
        }
    }
}

/// Blocks until the UI has room; the form waits on these events to leave its
/// loading state.
fn deliver(ui_tx: &Sender<UiEvent>, event: UiEvent) -> bool {
    match ui_tx.send(event) {
        Ok(()) => true,
        Err(_) => {
            tracing::error!("backend: ui event queue disconnected, result dropped");
            false
        }
    }
}

async fn run_worker(
    cmd_rx: Receiver<BackendCommand>,
    ui_tx: Sender<UiEvent>,
    config: BackendConfig,
) {
    let flags = open_flag_store(&config.database_url, &ui_tx).await;
    let controller = SubmissionController::new(
        Arc::new(HttpRelayTransport::new(config.relay_url)),
        flags.clone(),
    );
    let _ = ui_tx.try_send(UiEvent::Info("Backend worker ready".to_string()));

    while let Ok(cmd) = cmd_rx.recv() {
        match cmd {
            BackendCommand::LoadSession => {
                let submitted = match Session::load(flags.as_ref()).await {
                    Ok(session) => session.is_submitted(),
                    Err(err) => {
                        tracing::error!("backend: load_session failed: {err:#}");
                        let _ = ui_tx.try_send(UiEvent::Error(UiError::from_message(
                            UiErrorContext::Session,
                            format!("{err:#}"),
                        )));
                        false
                    }
                };
                tracing::info!(submitted, "backend: session loaded");
                deliver(&ui_tx, UiEvent::SessionLoaded { submitted });
            }
            BackendCommand::Submit { fields } => {
                tracing::info!("backend: submit");
                let outcome = controller.submit(&fields).await;
                deliver(&ui_tx, UiEvent::SubmissionFinished(outcome));
            }
        }
    }
    tracing::info!("backend: command queue closed, worker exiting");
}

use std::sync::{mpsc, Arc};
use std::thread;

use scan_logging::{scan_error, scan_info};
use shield_core::{BackendStatus, ScanId, ScanOutcome, ScanPayload};

use crate::scanner::{execute, ReqwestScanner, Scanner, ScannerSettings};
use crate::{EngineError, EngineEvent};

enum EngineCommand {
    Scan { scan_id: ScanId, payload: ScanPayload },
    Probe,
}

/// Runs scanner calls on a background tokio runtime and reports back over `event_tx`.
///
/// The handle does not queue or de-duplicate: every `submit` becomes one call.
/// Keeping a single scan in flight is the session's job.
pub struct EngineHandle {
    cmd_tx: mpsc::Sender<EngineCommand>,
}

impl EngineHandle {
    pub fn new(
        settings: ScannerSettings,
        event_tx: mpsc::Sender<EngineEvent>,
    ) -> Result<Self, EngineError> {
        Self::with_scanner(Arc::new(ReqwestScanner::new(settings)), event_tx)
    }

    pub fn with_scanner(
        scanner: Arc<dyn Scanner>,
        event_tx: mpsc::Sender<EngineEvent>,
    ) -> Result<Self, EngineError> {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(1)
            .thread_name("scan-worker")
            .enable_all()
            .build()?;

        thread::spawn(move || {
            while let Ok(command) = cmd_rx.recv() {
                let scanner = scanner.clone();
                let event_tx = event_tx.clone();
                runtime.spawn(async move {
                    handle_command(scanner, command, event_tx).await;
                });
            }
            scan_info!("Engine command channel closed; stopping scan runtime");
        });

        Ok(Self { cmd_tx })
    }

    pub fn submit(&self, scan_id: ScanId, payload: ScanPayload) {
        let _ = self.cmd_tx.send(EngineCommand::Scan { scan_id, payload });
    }

    pub fn probe(&self) {
        let _ = self.cmd_tx.send(EngineCommand::Probe);
    }
}

async fn handle_command(
    scanner: Arc<dyn Scanner>,
    command: EngineCommand,
    event_tx: mpsc::Sender<EngineEvent>,
) {
    match command {
        EngineCommand::Scan { scan_id, payload } => {
            // A panicking scanner must still resolve the scan, or the session stays Submitting.
            let task = tokio::spawn(async move { execute(scanner.as_ref(), &payload).await });
            let outcome = task.await.unwrap_or_else(|err| {
                scan_error!("Scan {} task aborted: {}", scan_id, err);
                ScanOutcome::Failure(format!("The scan stopped unexpectedly. ({err})"))
            });
            let _ = event_tx.send(EngineEvent::ScanCompleted { scan_id, outcome });
        }
        EngineCommand::Probe => {
            let status = match scanner.health().await {
                Ok(()) => BackendStatus::Reachable,
                Err(err) => BackendStatus::Unreachable(err.to_string()),
            };
            let _ = event_tx.send(EngineEvent::HealthChecked(status));
        }
    }
}

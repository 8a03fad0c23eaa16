use std::sync::mpsc;
use std::thread;

use anyhow::{Context, Result};
use chrono::Utc;
use scan_logging::{input_preview, scan_info, PREVIEW_CHARS};
use shield_core::{Effect, Msg};
use shield_engine::{EngineEvent, EngineHandle, ScannerSettings};

use super::app::Inbox;

pub struct EffectRunner {
    engine: EngineHandle,
}

impl EffectRunner {
    pub fn new(settings: ScannerSettings, inbox: mpsc::Sender<Inbox>) -> Result<Self> {
        let (event_tx, event_rx) = mpsc::channel();
        let engine = EngineHandle::new(settings, event_tx).context("starting scan engine")?;
        spawn_event_forwarder(event_rx, inbox);
        Ok(Self { engine })
    }

    pub fn enqueue(&self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::SubmitScan { scan_id, payload } => {
                    scan_info!(
                        "SubmitScan scan_id={} mode={} input={}",
                        scan_id,
                        payload.mode(),
                        input_preview(payload.input(), PREVIEW_CHARS)
                    );
                    self.engine.submit(scan_id, payload);
                }
                Effect::ProbeBackend => self.engine.probe(),
            }
        }
    }
}

fn spawn_event_forwarder(event_rx: mpsc::Receiver<EngineEvent>, inbox: mpsc::Sender<Inbox>) {
    thread::spawn(move || {
        while let Ok(event) = event_rx.recv() {
            let msg = map_event(event, Utc::now().to_rfc3339());
            if inbox.send(Inbox::Msg(msg)).is_err() {
                break;
            }
        }
    });
}

/// Translates an engine event into a core message, stamping completions with `now`.
pub(crate) fn map_event(event: EngineEvent, now: String) -> Msg {
    match event {
        EngineEvent::ScanCompleted { scan_id, outcome } => {
            scan_info!(
                "Scan {} finished: {}",
                scan_id,
                if outcome.is_success() { "success" } else { "failure" }
            );
            Msg::ScanFinished {
                scan_id,
                outcome,
                finished_at: now,
            }
        }
        EngineEvent::HealthChecked(status) => Msg::BackendProbed(status),
    }
}

#[cfg(test)]
mod tests {
    use shield_core::{BackendStatus, ScanOutcome};

    use super::*;

    #[test]
    fn completion_is_stamped_with_the_given_time() {
        let msg = map_event(
            EngineEvent::ScanCompleted {
                scan_id: 4,
                outcome: ScanOutcome::Failure("timeout".to_string()),
            },
            "2026-10-16T12:00:00+00:00".to_string(),
        );
        assert_eq!(
            msg,
            Msg::ScanFinished {
                scan_id: 4,
                outcome: ScanOutcome::Failure("timeout".to_string()),
                finished_at: "2026-10-16T12:00:00+00:00".to_string(),
            }
        );
    }

    #[test]
    fn health_maps_to_backend_probe() {
        let msg = map_event(
            EngineEvent::HealthChecked(BackendStatus::Reachable),
            String::new(),
        );
        assert_eq!(msg, Msg::BackendProbed(BackendStatus::Reachable));
    }
}

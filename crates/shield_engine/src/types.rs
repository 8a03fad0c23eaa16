use std::fmt;
use std::io;

use shield_core::{BackendStatus, ScanId, ScanOutcome};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq)]
pub enum EngineEvent {
    ScanCompleted {
        scan_id: ScanId,
        outcome: ScanOutcome,
    },
    HealthChecked(BackendStatus),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind}: {message}")]
pub struct ScanError {
    pub kind: FailureKind,
    pub message: String,
}

impl ScanError {
    pub(crate) fn new(kind: FailureKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    /// Diagnostic shown to the user in place of a result.
    pub fn user_message(&self) -> String {
        match self.kind {
            FailureKind::Network => format!(
                "Error connecting to the scoring service. Make sure it is running. ({})",
                self.message
            ),
            FailureKind::Timeout => "The scoring service did not answer in time.".to_string(),
            FailureKind::HttpStatus(code) => {
                format!("The scoring service rejected the request (HTTP {code}).")
            }
            FailureKind::Decode => format!(
                "The scoring service sent a response that could not be read. ({})",
                self.message
            ),
            FailureKind::InvalidEndpoint => {
                format!("The scoring service address is invalid. ({})", self.message)
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    InvalidEndpoint,
    Network,
    Timeout,
    HttpStatus(u16),
    Decode,
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureKind::InvalidEndpoint => write!(f, "invalid endpoint"),
            FailureKind::Network => write!(f, "network error"),
            FailureKind::Timeout => write!(f, "timeout"),
            FailureKind::HttpStatus(code) => write!(f, "http status {code}"),
            FailureKind::Decode => write!(f, "malformed response"),
        }
    }
}

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("failed to start scan runtime: {0}")]
    Runtime(#[from] io::Error),
}

use serde::Serialize;
use thiserror::Error;

use crate::ScanMode;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("input is empty")]
    EmptyInput,
}

/// Body sent to the scoring service. Serializes as `{"content": ..}` or
/// `{"url": ..}` depending on the mode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ScanPayload {
    Text { content: String },
    Url { url: String },
}

impl ScanPayload {
    pub fn mode(&self) -> ScanMode {
        match self {
            ScanPayload::Text { .. } => ScanMode::Text,
            ScanPayload::Url { .. } => ScanMode::Url,
        }
    }

    /// The raw input exactly as the user supplied it.
    pub fn input(&self) -> &str {
        match self {
            ScanPayload::Text { content } => content,
            ScanPayload::Url { url } => url,
        }
    }
}

/// Validates the raw input and wraps it in the payload for `mode`.
///
/// Only emptiness (after trimming) is checked; the input itself is passed
/// through untouched.
pub fn build_request(mode: ScanMode, raw_input: &str) -> Result<ScanPayload, ValidationError> {
    if raw_input.trim().is_empty() {
        return Err(ValidationError::EmptyInput);
    }
    let raw = raw_input.to_owned();
    Ok(match mode {
        ScanMode::Text => ScanPayload::Text { content: raw },
        ScanMode::Url => ScanPayload::Url { url: raw },
    })
}

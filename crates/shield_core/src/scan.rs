use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

/// Identifier handed out by the session for every accepted scan request.
pub type ScanId = u64;

/// Which input the user is scanning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScanMode {
    #[default]
    Text,
    Url,
}

impl ScanMode {
    /// Short tag used in history rows.
    pub fn tag(self) -> &'static str {
        match self {
            ScanMode::Text => "Text",
            ScanMode::Url => "URL",
        }
    }
}

impl fmt::Display for ScanMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScanMode::Text => write!(f, "text"),
            ScanMode::Url => write!(f, "url"),
        }
    }
}

/// Verdict returned by the scoring service.
///
/// `label` and `explanation` may be missing or `null` on the wire; an empty
/// label is displayed as "Unknown". `risk_score` is nominally 0..=100 but is never
/// rejected when it falls outside that range.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ScanResult {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub label: String,
    #[serde(alias = "riskScore")]
    pub risk_score: f64,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub explanation: String,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// Outcome of one executor call, as seen by the session.
#[derive(Debug, Clone, PartialEq)]
pub enum ScanOutcome {
    Success(ScanResult),
    Failure(String),
}

impl ScanOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, ScanOutcome::Success(_))
    }
}

use crate::{
    classify, risk_percent, BackendStatus, HistoryEntry, ScanId, ScanMode, ScanResult,
    SessionState, Tier,
};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppViewModel {
    pub session: SessionState,
    pub mode: ScanMode,
    /// Draft of the active mode.
    pub draft: String,
    pub busy: bool,
    pub action_label: &'static str,
    pub headline: &'static str,
    pub result: Option<ResultView>,
    pub error: Option<String>,
    pub prompt: Option<String>,
    pub backend: BackendStatus,
    pub history_summary: String,
    pub history: Vec<HistoryRowView>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LabelIcon {
    Alert,
    Warning,
    Ok,
}

impl LabelIcon {
    pub fn for_label(label: &str) -> Self {
        match label.to_lowercase().as_str() {
            "phishing" => LabelIcon::Alert,
            "suspicious" => LabelIcon::Warning,
            _ => LabelIcon::Ok,
        }
    }

    pub fn glyph(self) -> &'static str {
        match self {
            LabelIcon::Alert => "🚨",
            LabelIcon::Warning => "⚠️",
            LabelIcon::Ok => "✅",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultView {
    pub label: String,
    pub icon: LabelIcon,
    pub risk_percent: i64,
    pub tier: Tier,
    pub explanation: String,
}

impl ResultView {
    pub(crate) fn from_result(result: &ScanResult) -> Self {
        Self {
            label: display_label(&result.label),
            icon: LabelIcon::for_label(&result.label),
            risk_percent: risk_percent(result.risk_score),
            tier: classify(result.risk_score),
            explanation: result.explanation.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryRowView {
    pub id: ScanId,
    pub mode_tag: &'static str,
    pub label: String,
    pub snippet: String,
    pub risk_percent: i64,
    pub tier: Tier,
    pub recorded_at: String,
}

impl HistoryRowView {
    pub(crate) fn from_entry(entry: &HistoryEntry) -> Self {
        Self {
            id: entry.id,
            mode_tag: entry.mode.tag(),
            label: display_label(&entry.label),
            snippet: entry.snippet.clone(),
            risk_percent: risk_percent(entry.risk_score),
            tier: entry.tier(),
            recorded_at: entry.recorded_at.clone(),
        }
    }
}

/// Capitalizes the first letter; an empty label reads "Unknown".
pub fn display_label(label: &str) -> String {
    let mut chars = label.chars();
    match chars.next() {
        None => "Unknown".to_string(),
        Some(first) => first.to_uppercase().chain(chars).collect(),
    }
}

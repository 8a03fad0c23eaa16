//! ShadowShield core: pure scan session state machine, classifier, history and view-model helpers.
mod classify;
mod effect;
mod history;
mod msg;
mod request;
mod scan;
mod state;
mod update;
mod view_model;

pub use classify::{classify, risk_percent, Tier, HIGH_THRESHOLD, MEDIUM_THRESHOLD};
pub use effect::Effect;
pub use history::{
    snippet_for, HistoryCache, HistoryEntry, HISTORY_CAPACITY, SNIPPET_MAX_CHARS,
};
pub use msg::Msg;
pub use request::{build_request, ScanPayload, ValidationError};
pub use scan::{ScanId, ScanMode, ScanOutcome, ScanResult};
pub use state::{AppState, BackendStatus, InFlightScan, SessionState};
pub use update::update;
pub use view_model::{display_label, AppViewModel, HistoryRowView, LabelIcon, ResultView};

use crate::{BackendStatus, ScanId, ScanMode, ScanOutcome};

#[derive(Debug, Clone, PartialEq)]
pub enum Msg {
    /// The client finished starting up.
    Started,
    /// Result of the startup health probe.
    BackendProbed(BackendStatus),
    /// User edited the draft for `mode`.
    DraftChanged { mode: ScanMode, text: String },
    /// User picked the text or URL tab.
    ModeSelected(ScanMode),
    /// User asked to scan the current draft of `mode`.
    ScanRequested(ScanMode),
    /// Executor finished the scan identified by `scan_id`.
    ScanFinished {
        scan_id: ScanId,
        outcome: ScanOutcome,
        /// RFC3339 completion time, stamped by the caller.
        finished_at: String,
    },
    /// Fallback for placeholder wiring.
    NoOp,
}

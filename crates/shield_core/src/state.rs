use crate::view_model::{AppViewModel, HistoryRowView, ResultView};
use crate::{HistoryCache, HistoryEntry, ScanId, ScanMode, ScanOutcome, ScanPayload, ScanResult};

/// Phase of the scan lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SessionState {
    /// No scan yet, or the mode was just switched.
    #[default]
    Idle,
    /// A request is outstanding; new requests and mode switches are ignored.
    Submitting,
    Completed,
    Failed,
}

/// Reachability of the scoring service, as last probed.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum BackendStatus {
    #[default]
    Unknown,
    Reachable,
    Unreachable(String),
}

/// The request currently owned by the executor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InFlightScan {
    pub scan_id: ScanId,
    pub mode: ScanMode,
    pub input: String,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct AppState {
    session: SessionState,
    mode: ScanMode,
    text_draft: String,
    url_draft: String,
    in_flight: Option<InFlightScan>,
    result: Option<ScanResult>,
    last_error: Option<String>,
    prompt: Option<String>,
    history: HistoryCache,
    backend: BackendStatus,
    last_scan_id: ScanId,
    dirty: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn session(&self) -> SessionState {
        self.session
    }

    pub fn mode(&self) -> ScanMode {
        self.mode
    }

    pub fn draft(&self, mode: ScanMode) -> &str {
        match mode {
            ScanMode::Text => &self.text_draft,
            ScanMode::Url => &self.url_draft,
        }
    }

    pub fn result(&self) -> Option<&ScanResult> {
        self.result.as_ref()
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    pub fn prompt(&self) -> Option<&str> {
        self.prompt.as_deref()
    }

    pub fn in_flight(&self) -> Option<&InFlightScan> {
        self.in_flight.as_ref()
    }

    pub fn history(&self) -> &HistoryCache {
        &self.history
    }

    /// Returns whether anything visible changed since the last call, and resets the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    /// Takes the pending validation prompt. Prompts are shown once, like an alert.
    pub fn take_prompt(&mut self) -> Option<String> {
        self.prompt.take()
    }

    pub fn view(&self) -> AppViewModel {
        let busy = self.session == SessionState::Submitting;
        let history_summary = if self.history.is_empty() {
            "No scans yet".to_string()
        } else {
            format!("{} scanned", self.history.len())
        };
        AppViewModel {
            session: self.session,
            mode: self.mode,
            draft: self.draft(self.mode).to_owned(),
            busy,
            action_label: action_label(self.mode, busy),
            headline: if self.result.is_some() {
                "Here's what we found"
            } else {
                "Run a scan to see results"
            },
            result: self.result.as_ref().map(ResultView::from_result),
            error: self.last_error.clone(),
            prompt: self.prompt.clone(),
            backend: self.backend.clone(),
            history_summary,
            history: self.history.entries().map(HistoryRowView::from_entry).collect(),
        }
    }

    pub(crate) fn set_draft(&mut self, mode: ScanMode, text: String) {
        let slot = match mode {
            ScanMode::Text => &mut self.text_draft,
            ScanMode::Url => &mut self.url_draft,
        };
        if *slot != text {
            *slot = text;
            self.dirty = true;
        }
    }

    pub(crate) fn switch_mode(&mut self, mode: ScanMode) {
        self.mode = mode;
        self.session = SessionState::Idle;
        self.result = None;
        self.last_error = None;
        self.prompt = None;
        self.dirty = true;
    }

    pub(crate) fn set_prompt(&mut self, prompt: impl Into<String>) {
        self.prompt = Some(prompt.into());
        self.dirty = true;
    }

    pub(crate) fn set_backend(&mut self, status: BackendStatus) {
        if self.backend != status {
            self.backend = status;
            self.dirty = true;
        }
    }

    /// Moves to `Submitting` and returns the id the executor must report back.
    pub(crate) fn begin_scan(&mut self, payload: &ScanPayload) -> ScanId {
        self.last_scan_id += 1;
        let scan_id = self.last_scan_id;
        self.in_flight = Some(InFlightScan {
            scan_id,
            mode: payload.mode(),
            input: payload.input().to_owned(),
        });
        self.mode = payload.mode();
        self.session = SessionState::Submitting;
        self.result = None;
        self.last_error = None;
        self.prompt = None;
        self.dirty = true;
        scan_id
    }

    /// Applies an executor outcome. Returns false when `scan_id` is not the
    /// scan in flight, in which case nothing changes.
    pub(crate) fn finish_scan(
        &mut self,
        scan_id: ScanId,
        outcome: ScanOutcome,
        finished_at: String,
    ) -> bool {
        let scan = match self.in_flight.take() {
            Some(scan) if scan.scan_id == scan_id => scan,
            other => {
                self.in_flight = other;
                return false;
            }
        };

        match outcome {
            ScanOutcome::Success(result) => {
                self.history.record(HistoryEntry::from_result(
                    scan.scan_id,
                    scan.mode,
                    &scan.input,
                    &result,
                    finished_at,
                ));
                self.result = Some(result);
                self.session = SessionState::Completed;
            }
            ScanOutcome::Failure(reason) => {
                self.last_error = Some(reason);
                self.session = SessionState::Failed;
            }
        }
        self.dirty = true;
        true
    }
}

fn action_label(mode: ScanMode, busy: bool) -> &'static str {
    match (busy, mode) {
        (true, _) => "Analyzing…",
        (false, ScanMode::Text) => "Analyze Text",
        (false, ScanMode::Url) => "Analyze URL",
    }
}

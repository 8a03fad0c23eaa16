use crate::{build_request, AppState, Effect, Msg, ScanMode, SessionState, ValidationError};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::Started => vec![Effect::ProbeBackend],
        Msg::BackendProbed(status) => {
            state.set_backend(status);
            Vec::new()
        }
        Msg::DraftChanged { mode, text } => {
            state.set_draft(mode, text);
            Vec::new()
        }
        Msg::ModeSelected(mode) => {
            if state.session() == SessionState::Submitting {
                return (state, Vec::new());
            }
            state.switch_mode(mode);
            Vec::new()
        }
        Msg::ScanRequested(mode) => {
            // Single-flight: a request arriving while one is outstanding is dropped, not queued.
            if state.session() == SessionState::Submitting {
                return (state, Vec::new());
            }
            match build_request(mode, state.draft(mode)) {
                Ok(payload) => {
                    let scan_id = state.begin_scan(&payload);
                    vec![Effect::SubmitScan { scan_id, payload }]
                }
                Err(ValidationError::EmptyInput) => {
                    state.set_prompt(empty_input_prompt(mode));
                    Vec::new()
                }
            }
        }
        Msg::ScanFinished {
            scan_id,
            outcome,
            finished_at,
        } => {
            state.finish_scan(scan_id, outcome, finished_at);
            Vec::new()
        }
        Msg::NoOp => Vec::new(),
    };

    (state, effects)
}

fn empty_input_prompt(mode: ScanMode) -> &'static str {
    match mode {
        ScanMode::Text => "Please enter some text.",
        ScanMode::Url => "Please enter a URL.",
    }
}

use shield_core::{
    update, AppState, Msg, ScanMode, ScanOutcome, ScanResult, HISTORY_CAPACITY,
};

fn scan(state: AppState, mode: ScanMode, input: &str, outcome: ScanOutcome) -> AppState {
    let (state, _) = update(
        state,
        Msg::DraftChanged {
            mode,
            text: input.to_string(),
        },
    );
    let (state, _) = update(state, Msg::ModeSelected(mode));
    let (state, _) = update(state, Msg::ScanRequested(mode));
    let scan_id = state.in_flight().expect("scan in flight").scan_id;
    let (state, _) = update(
        state,
        Msg::ScanFinished {
            scan_id,
            outcome,
            finished_at: format!("2026-01-01T00:00:{scan_id:02}Z"),
        },
    );
    state
}

fn scored(score: f64) -> ScanOutcome {
    ScanOutcome::Success(ScanResult {
        label: "suspicious".to_string(),
        risk_score: score,
        explanation: String::new(),
    })
}

#[test]
fn history_keeps_six_newest_first() {
    let mut state = AppState::new();
    for n in 1..=7 {
        state = scan(state, ScanMode::Text, &format!("message {n}"), scored(f64::from(n)));
    }

    let snippets: Vec<_> = state.history().entries().map(|e| e.snippet.clone()).collect();
    assert_eq!(snippets.len(), HISTORY_CAPACITY);
    assert_eq!(snippets[0], "message 7");
    assert_eq!(snippets[5], "message 2");
    assert!(!snippets.contains(&"message 1".to_string()));
    assert_eq!(state.view().history_summary, "6 scanned");
}

#[test]
fn failed_scans_are_not_recorded() {
    let state = scan(AppState::new(), ScanMode::Text, "ok", scored(10.0));
    let state = scan(
        state,
        ScanMode::Url,
        "http://down.example",
        ScanOutcome::Failure("http status 500".to_string()),
    );
    assert_eq!(state.history().len(), 1);
}

#[test]
fn entries_snapshot_the_scan_that_produced_them() {
    let long_text = "a".repeat(65);
    let state = scan(AppState::new(), ScanMode::Text, &long_text, scored(70.0));
    let long_url = format!("https://example.com/{}", "b".repeat(100));
    let state = scan(state, ScanMode::Url, &long_url, scored(20.0));

    let entries: Vec<_> = state.history().entries().cloned().collect();
    assert_eq!(entries[0].mode, ScanMode::Url);
    assert_eq!(entries[0].snippet, long_url);
    assert_eq!(entries[0].risk_score, 20.0);
    assert_eq!(entries[1].mode, ScanMode::Text);
    assert_eq!(entries[1].snippet, format!("{}...", "a".repeat(57)));
    assert_eq!(entries[1].risk_score, 70.0);
    assert_ne!(entries[0].id, entries[1].id);
    assert_eq!(entries[1].recorded_at, "2026-01-01T00:00:01Z");
}

#[test]
fn snippet_uses_input_at_submission_time() {
    let (state, _) = update(
        AppState::new(),
        Msg::DraftChanged {
            mode: ScanMode::Text,
            text: "original".to_string(),
        },
    );
    let (state, _) = update(state, Msg::ScanRequested(ScanMode::Text));
    let (state, _) = update(
        state,
        Msg::DraftChanged {
            mode: ScanMode::Text,
            text: "edited while waiting".to_string(),
        },
    );
    let (state, _) = update(
        state,
        Msg::ScanFinished {
            scan_id: 1,
            outcome: scored(40.0),
            finished_at: String::new(),
        },
    );
    let entry = state.history().entries().next().unwrap();
    assert_eq!(entry.snippet, "original");
}

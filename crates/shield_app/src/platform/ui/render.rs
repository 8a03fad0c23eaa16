use colored::{ColoredString, Colorize};
use shield_core::{AppViewModel, BackendStatus, ResultView, ScanMode, Tier};

use super::constants::{HELP_LINES, INPUT_MARKER_TEXT, INPUT_MARKER_URL, SUBTITLE, TIPS, TITLE};

pub fn banner() -> Vec<String> {
    let mut lines = vec![
        format!("{} {}", TITLE.bold(), "· Cybersecurity AI Assistant".dimmed()),
        SUBTITLE.to_string(),
        String::new(),
        "Quick safety tips".bold().to_string(),
    ];
    lines.extend(TIPS.iter().map(|tip| format!("  • {tip}")));
    lines.push(String::new());
    lines
}

pub fn help() -> Vec<String> {
    HELP_LINES.iter().map(|line| line.to_string()).collect()
}

pub fn input_marker(mode: ScanMode) -> &'static str {
    match mode {
        ScanMode::Text => INPUT_MARKER_TEXT,
        ScanMode::Url => INPUT_MARKER_URL,
    }
}

pub fn prompt_line(prompt: &str) -> String {
    format!("{} {}", "!".yellow().bold(), prompt)
}

pub fn mode_line(mode: ScanMode) -> String {
    let name = match mode {
        ScanMode::Text => "Text / Email",
        ScanMode::Url => "URL Check",
    };
    format!("Mode: {}", name.bold())
}

/// Lines describing what changed between two views.
pub fn render_changes(prev: &AppViewModel, next: &AppViewModel) -> Vec<String> {
    let mut lines = Vec::new();

    if prev.backend != next.backend {
        lines.extend(backend_line(&next.backend));
    }
    if prev.mode != next.mode {
        lines.push(mode_line(next.mode));
    }
    if next.busy && !prev.busy {
        lines.push(next.action_label.dimmed().to_string());
    }
    if prev.result != next.result {
        if let Some(result) = &next.result {
            lines.push(next.headline.bold().to_string());
            lines.extend(render_result(result));
        }
    }
    if prev.error != next.error {
        if let Some(error) = &next.error {
            lines.push(format!("{} {}", "✗".red().bold(), error));
        }
    }
    if prev.history != next.history && !next.history.is_empty() {
        lines.extend(render_history(next));
    }

    lines
}

pub fn render_result(result: &ResultView) -> Vec<String> {
    vec![
        format!(
            "{} {}  {}",
            result.icon.glyph(),
            result.label.bold(),
            tier_paint(result.tier, &format!("{}%", result.risk_percent)),
        ),
        "Why this score?".dimmed().to_string(),
        format!("  {}", result.explanation),
    ]
}

pub fn render_history(view: &AppViewModel) -> Vec<String> {
    let mut lines = vec![format!(
        "{} ({})",
        "Recent checks".bold(),
        view.history_summary
    )];
    for row in &view.history {
        lines.push(format!(
            "  {:<4} {:>5}  {}",
            row.mode_tag,
            tier_paint(row.tier, &format!("{}%", row.risk_percent)),
            row.snippet.replace('\n', " ")
        ));
    }
    lines
}

fn backend_line(status: &BackendStatus) -> Option<String> {
    match status {
        BackendStatus::Unknown => None,
        BackendStatus::Reachable => Some(format!("{} scoring service is up", "●".green())),
        BackendStatus::Unreachable(detail) => Some(format!(
            "{} scoring service is not reachable ({detail}); scans will fail until it is running",
            "●".red()
        )),
    }
}

fn tier_paint(tier: Tier, text: &str) -> ColoredString {
    match tier {
        Tier::High => text.red().bold(),
        Tier::Medium => text.yellow().bold(),
        Tier::Low => text.green().bold(),
    }
}

#[cfg(test)]
mod tests {
    use shield_core::{update, AppState, Msg, ScanOutcome, ScanResult};

    use super::*;

    fn plain() {
        colored::control::set_override(false);
    }

    fn completed(label: &str, score: f64, input: &str) -> AppState {
        let (state, _) = update(
            AppState::new(),
            Msg::DraftChanged {
                mode: ScanMode::Text,
                text: input.to_string(),
            },
        );
        let (state, _) = update(state, Msg::ScanRequested(ScanMode::Text));
        let (state, _) = update(
            state,
            Msg::ScanFinished {
                scan_id: 1,
                outcome: ScanOutcome::Success(ScanResult {
                    label: label.to_string(),
                    risk_score: score,
                    explanation: "Asks for OTP.".to_string(),
                }),
                finished_at: String::new(),
            },
        );
        state
    }

    #[test]
    fn completed_scan_renders_result_and_history() {
        plain();
        let submitting = {
            let (state, _) = update(
                AppState::new(),
                Msg::DraftChanged {
                    mode: ScanMode::Text,
                    text: "send me the otp".to_string(),
                },
            );
            update(state, Msg::ScanRequested(ScanMode::Text)).0
        };
        let done = completed("suspicious", 40.0, "send me the otp");

        let lines = render_changes(&submitting.view(), &done.view());
        assert_eq!(lines[0], "Here's what we found");
        assert_eq!(lines[1], "⚠️ Suspicious  40%");
        assert_eq!(lines[3], "  Asks for OTP.");
        assert_eq!(lines[4], "Recent checks (1 scanned)");
        assert!(lines[5].contains("Text"));
        assert!(lines[5].ends_with("send me the otp"));
    }

    #[test]
    fn submitting_shows_busy_label() {
        plain();
        let idle = AppState::new();
        let (state, _) = update(
            idle.clone(),
            Msg::DraftChanged {
                mode: ScanMode::Text,
                text: "x".to_string(),
            },
        );
        let (busy, _) = update(state, Msg::ScanRequested(ScanMode::Text));
        let lines = render_changes(&idle.view(), &busy.view());
        assert_eq!(lines, vec!["Analyzing…".to_string()]);
    }

    #[test]
    fn unchanged_view_renders_nothing() {
        plain();
        let view = completed("safe", 10.0, "hello").view();
        assert!(render_changes(&view, &view).is_empty());
    }

    #[test]
    fn unreachable_backend_is_announced() {
        plain();
        let before = AppState::new();
        let (after, _) = update(
            before.clone(),
            Msg::BackendProbed(BackendStatus::Unreachable("network error".to_string())),
        );
        let lines = render_changes(&before.view(), &after.view());
        assert_eq!(lines.len(), 1);
        assert!(lines[0].contains("not reachable (network error)"));
    }

    #[test]
    fn multi_line_snippets_stay_on_one_row() {
        plain();
        let view = completed("safe", 5.0, "line one\nline two").view();
        let lines = render_history(&view);
        assert!(lines[1].ends_with("line one line two"));
    }
}

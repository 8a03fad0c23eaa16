use shield_core::{AppState, Msg, ScanMode};

/// One line of user input, parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    SelectMode(ScanMode),
    Scan(Option<String>),
    ClearDraft,
    ShowHistory,
    Help,
    Quit,
    /// Plain line that edits the active draft.
    Draft(String),
    Unknown(String),
    Empty,
}

pub fn parse_command(line: &str) -> Command {
    let line = line.trim_end_matches(['\r', '\n']);
    if line.trim().is_empty() {
        return Command::Empty;
    }
    let Some(rest) = line.trim_start().strip_prefix('/') else {
        return Command::Draft(line.to_string());
    };

    let (name, argument) = match rest.split_once(char::is_whitespace) {
        Some((name, argument)) => (name, argument.trim_start()),
        None => (rest, ""),
    };

    match name.to_ascii_lowercase().as_str() {
        "text" => Command::SelectMode(ScanMode::Text),
        "url" => Command::SelectMode(ScanMode::Url),
        "scan" | "analyze" if argument.is_empty() => Command::Scan(None),
        "scan" | "analyze" => Command::Scan(Some(argument.to_string())),
        "clear" => Command::ClearDraft,
        "history" => Command::ShowHistory,
        "help" | "?" => Command::Help,
        "quit" | "exit" | "q" => Command::Quit,
        _ => Command::Unknown(name.to_string()),
    }
}

/// Messages a command sends to the session, given its current state.
///
/// Commands that only affect the terminal map to no messages.
pub fn command_msgs(command: Command, state: &AppState) -> Vec<Msg> {
    let mode = state.mode();
    match command {
        Command::SelectMode(mode) => vec![Msg::ModeSelected(mode)],
        Command::Scan(None) => vec![Msg::ScanRequested(mode)],
        Command::Scan(Some(input)) => vec![
            Msg::DraftChanged { mode, text: input },
            Msg::ScanRequested(mode),
        ],
        Command::ClearDraft => vec![Msg::DraftChanged {
            mode,
            text: String::new(),
        }],
        Command::Draft(line) => {
            let text = match mode {
                ScanMode::Url => line,
                ScanMode::Text => {
                    let draft = state.draft(ScanMode::Text);
                    if draft.is_empty() {
                        line
                    } else {
                        format!("{draft}\n{line}")
                    }
                }
            };
            vec![Msg::DraftChanged { mode, text }]
        }
        Command::ShowHistory
        | Command::Help
        | Command::Quit
        | Command::Unknown(_)
        | Command::Empty => Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use shield_core::update;

    use super::*;

    #[test]
    fn slash_commands_are_recognized() {
        assert_eq!(parse_command("/text"), Command::SelectMode(ScanMode::Text));
        assert_eq!(parse_command("  /URL "), Command::SelectMode(ScanMode::Url));
        assert_eq!(parse_command("/scan"), Command::Scan(None));
        assert_eq!(
            parse_command("/scan http://bad.example"),
            Command::Scan(Some("http://bad.example".to_string()))
        );
        assert_eq!(parse_command("/quit"), Command::Quit);
        assert_eq!(parse_command("/history"), Command::ShowHistory);
        assert_eq!(parse_command("/frobnicate"), Command::Unknown("frobnicate".to_string()));
    }

    #[test]
    fn plain_and_blank_lines() {
        assert_eq!(
            parse_command("Your account is locked\r"),
            Command::Draft("Your account is locked".to_string())
        );
        assert_eq!(parse_command("   "), Command::Empty);
    }

    #[test]
    fn text_lines_accumulate_and_url_lines_replace() {
        let state = AppState::new();
        let mut msgs = command_msgs(Command::Draft("line one".into()), &state);
        let (state, _) = update(state, msgs.remove(0));
        let mut msgs = command_msgs(Command::Draft("line two".into()), &state);
        let (state, _) = update(state, msgs.remove(0));
        assert_eq!(state.draft(ScanMode::Text), "line one\nline two");

        let (state, _) = update(state, Msg::ModeSelected(ScanMode::Url));
        let mut msgs = command_msgs(Command::Draft("http://a.example".into()), &state);
        let (state, _) = update(state, msgs.remove(0));
        let mut msgs = command_msgs(Command::Draft("http://b.example".into()), &state);
        let (state, _) = update(state, msgs.remove(0));
        assert_eq!(state.draft(ScanMode::Url), "http://b.example");
        assert_eq!(state.draft(ScanMode::Text), "line one\nline two");
    }

    #[test]
    fn scan_with_argument_sets_draft_then_requests() {
        let state = AppState::new();
        assert_eq!(
            command_msgs(Command::Scan(Some("hi".into())), &state),
            vec![
                Msg::DraftChanged {
                    mode: ScanMode::Text,
                    text: "hi".to_string()
                },
                Msg::ScanRequested(ScanMode::Text),
            ]
        );
        assert!(command_msgs(Command::Help, &state).is_empty());
    }
}

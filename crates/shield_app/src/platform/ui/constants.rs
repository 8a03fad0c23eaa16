pub const DEFAULT_CONFIG_FILE: &str = "shadowshield.ron";
pub const DEFAULT_LOG_FILE: &str = "shadowshield.log";

pub const INPUT_MARKER_TEXT: &str = "text> ";
pub const INPUT_MARKER_URL: &str = "url> ";

pub const TITLE: &str = "ShadowShield";
pub const SUBTITLE: &str = "Scan messages & links before you click.";

pub const HELP_LINES: &[&str] = &[
    "Paste a message or URL, then run /scan.",
    "  /text          switch to text / email mode",
    "  /url           switch to URL mode",
    "  /scan [input]  analyze the current draft (or the given input)",
    "  /clear         discard the current draft",
    "  /history       show recent checks",
    "  /help          show this help",
    "  /quit          exit",
    "In text mode each line is appended to the draft; in URL mode a line replaces it.",
];

pub const TIPS: &[&str] = &[
    "Never share OTP or passwords with anyone.",
    "Always check the full URL before logging in.",
    "Be careful with messages that sound too urgent or too good to be true.",
];

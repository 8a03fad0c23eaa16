//! Client configuration: an optional RON file overridden by command-line flags.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use log::LevelFilter;
use serde::{Deserialize, Serialize};
use shield_engine::{ScannerSettings, DEFAULT_API_PREFIX, DEFAULT_BASE_URL};

use super::logging::LogDestination;
use super::ui::constants::{DEFAULT_CONFIG_FILE, DEFAULT_LOG_FILE};

#[derive(Debug, Parser)]
#[command(
    name = "shadowshield",
    version,
    about = "Scan messages and links for phishing before you click"
)]
pub struct Cli {
    /// Path to a RON config file (defaults to ./shadowshield.ron when present)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Base URL of the scoring service, e.g. http://127.0.0.1:8000
    #[arg(long)]
    pub backend: Option<String>,

    /// Write the log to this file instead of the configured one
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Log at debug level
    #[arg(short, long)]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub backend_url: String,
    pub api_prefix: String,
    pub connect_timeout_secs: u64,
    /// `None` lets a scan wait for the service indefinitely.
    pub request_timeout_secs: Option<u64>,
    pub log_file: PathBuf,
    /// Also echo log lines to the terminal.
    pub log_to_terminal: bool,
    pub log_level: String,
    pub color: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            backend_url: DEFAULT_BASE_URL.to_string(),
            api_prefix: DEFAULT_API_PREFIX.to_string(),
            connect_timeout_secs: 10,
            request_timeout_secs: Some(30),
            log_file: PathBuf::from(DEFAULT_LOG_FILE),
            log_to_terminal: false,
            log_level: "info".to_string(),
            color: true,
        }
    }
}

impl AppConfig {
    /// Loads `path` if given, otherwise the default file in the working
    /// directory. Only a missing default file falls back to defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => {
                let default_path = Path::new(DEFAULT_CONFIG_FILE);
                match fs::read_to_string(default_path) {
                    Ok(text) => Self::parse(&text)
                        .with_context(|| format!("parsing {}", default_path.display())),
                    Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(Self::default()),
                    Err(err) => Err(anyhow::Error::from(err)
                        .context(format!("reading {}", default_path.display()))),
                }
            }
        }
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("reading config file {}", path.display()))?;
        Self::parse(&text).with_context(|| format!("parsing config file {}", path.display()))
    }

    pub fn parse(text: &str) -> Result<Self> {
        Ok(ron::from_str(text)?)
    }

    pub fn apply_cli(&mut self, cli: &Cli) {
        if let Some(backend) = &cli.backend {
            self.backend_url = backend.clone();
        }
        if let Some(log_file) = &cli.log_file {
            self.log_file = log_file.clone();
        }
        if cli.verbose {
            self.log_level = "debug".to_string();
        }
        if cli.no_color {
            self.color = false;
        }
    }

    pub fn scanner_settings(&self) -> ScannerSettings {
        ScannerSettings {
            base_url: self.backend_url.clone(),
            api_prefix: self.api_prefix.clone(),
            connect_timeout: Duration::from_secs(self.connect_timeout_secs),
            request_timeout: self.request_timeout_secs.map(Duration::from_secs),
        }
    }

    /// The configured level, or `None` when `log_level` names no level.
    pub fn level_filter(&self) -> Option<LevelFilter> {
        LevelFilter::from_str(&self.log_level).ok()
    }

    pub fn log_destination(&self) -> LogDestination {
        if self.log_to_terminal {
            LogDestination::Both(self.log_file.clone())
        } else {
            LogDestination::File(self.log_file.clone())
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    fn cli(args: &[&str]) -> Cli {
        Cli::parse_from(std::iter::once("shadowshield").chain(args.iter().copied()))
    }

    #[test]
    fn partial_file_keeps_defaults_for_missing_fields() {
        let config =
            AppConfig::parse(r#"(backend_url: "http://scanner.lan:9000", request_timeout_secs: None)"#)
                .unwrap();
        assert_eq!(config.backend_url, "http://scanner.lan:9000");
        assert_eq!(config.request_timeout_secs, None);
        assert_eq!(config.api_prefix, "/api");
        assert_eq!(config.connect_timeout_secs, 10);
        assert!(config.color);
    }

    #[test]
    fn explicit_file_is_loaded() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, r#"(log_level: "warn", request_timeout_secs: Some(5))"#).unwrap();

        let config = AppConfig::load(Some(file.path())).unwrap();
        assert_eq!(config.level_filter(), Some(LevelFilter::Warn));
        assert_eq!(
            config.scanner_settings().request_timeout,
            Some(Duration::from_secs(5))
        );
    }

    #[test]
    fn missing_explicit_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.ron");
        assert!(AppConfig::load(Some(&missing)).is_err());
    }

    #[test]
    fn invalid_file_is_an_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "(backend_url: 42)").unwrap();
        assert!(AppConfig::load(Some(file.path())).is_err());
    }

    #[test]
    fn cli_flags_override_file_values() {
        let mut config = AppConfig::default();
        config.apply_cli(&cli(&[
            "--backend",
            "http://10.0.0.5:8000",
            "--verbose",
            "--no-color",
            "--log-file",
            "/tmp/scan.log",
        ]));

        assert_eq!(config.backend_url, "http://10.0.0.5:8000");
        assert_eq!(config.level_filter(), Some(LevelFilter::Debug));
        assert!(!config.color);
        assert_eq!(config.log_file, PathBuf::from("/tmp/scan.log"));
        assert_eq!(config.scanner_settings().base_url, "http://10.0.0.5:8000");
    }

    #[test]
    fn unknown_level_is_reported_as_none() {
        let config = AppConfig {
            log_level: "chatty".to_string(),
            ..AppConfig::default()
        };
        assert_eq!(config.level_filter(), None);
        assert_eq!(AppConfig::default().level_filter(), Some(LevelFilter::Info));
    }
}

use std::io::{self, BufRead, Write};
use std::sync::mpsc;
use std::thread;

use anyhow::Result;
use clap::Parser;
use log::LevelFilter;
use scan_logging::{scan_info, scan_warn};
use shield_core::{update, AppState, AppViewModel, Msg, SessionState};

use super::config::{AppConfig, Cli};
use super::effects::EffectRunner;
use super::logging;
use super::ui::commands::{command_msgs, parse_command, Command};
use super::ui::render;

/// Everything the event loop reacts to, funnelled through one channel.
pub enum Inbox {
    Line(String),
    Msg(Msg),
    InputClosed,
}

pub fn run_app() -> Result<()> {
    let cli = Cli::parse();
    let mut config = AppConfig::load(cli.config.as_deref())?;
    config.apply_cli(&cli);

    let level = config.level_filter();
    logging::initialize(config.log_destination(), level.unwrap_or(LevelFilter::Info));
    if level.is_none() {
        scan_warn!("Unknown log level {:?}; using info", config.log_level);
    }
    if !config.color {
        colored::control::set_override(false);
    }
    scan_info!(
        "ShadowShield client starting; scoring service at {}",
        config.backend_url
    );

    let (inbox_tx, inbox_rx) = mpsc::channel::<Inbox>();
    let effects = EffectRunner::new(config.scanner_settings(), inbox_tx.clone())?;
    spawn_input_reader(inbox_tx);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    for line in render::banner().into_iter().chain(render::help()) {
        writeln!(out, "{line}")?;
    }

    let mut app = App::new(effects);
    app.dispatch(Msg::Started, &mut out)?;
    app.show_marker(&mut out)?;

    while let Ok(item) = inbox_rx.recv() {
        match item {
            Inbox::Msg(msg) => app.dispatch(msg, &mut out)?,
            Inbox::Line(line) => match parse_command(&line) {
                Command::Quit => break,
                command => app.handle_command(command, &mut out)?,
            },
            Inbox::InputClosed => {
                app.input_closed = true;
            }
        }
        // Piped input may end while a scan is still out; wait for its result before leaving.
        if app.input_closed && app.state.session() != SessionState::Submitting {
            break;
        }
        app.show_marker(&mut out)?;
    }

    writeln!(out)?;
    scan_info!("ShadowShield client exiting");
    Ok(())
}

struct App {
    state: AppState,
    last_view: AppViewModel,
    effects: EffectRunner,
    input_closed: bool,
}

impl App {
    fn new(effects: EffectRunner) -> Self {
        let state = AppState::new();
        let last_view = state.view();
        Self {
            state,
            last_view,
            effects,
            input_closed: false,
        }
    }

    fn handle_command(&mut self, command: Command, out: &mut impl Write) -> io::Result<()> {
        match &command {
            Command::Help => {
                for line in render::help() {
                    writeln!(out, "{line}")?;
                }
            }
            Command::ShowHistory => {
                for line in render::render_history(&self.state.view()) {
                    writeln!(out, "{line}")?;
                }
            }
            Command::Unknown(name) => {
                writeln!(out, "Unknown command /{name}; try /help")?;
            }
            _ => {}
        }
        for msg in command_msgs(command, &self.state) {
            self.dispatch(msg, out)?;
        }
        Ok(())
    }

    fn dispatch(&mut self, msg: Msg, out: &mut impl Write) -> io::Result<()> {
        let state = std::mem::take(&mut self.state);
        let (mut state, effects) = update(state, msg);
        let prompt = state.take_prompt();
        let was_dirty = state.consume_dirty();
        let view = state.view();
        self.state = state;
        self.effects.enqueue(effects);

        if let Some(prompt) = prompt {
            scan_warn!("Scan not started: {}", prompt);
            writeln!(out, "{}", render::prompt_line(&prompt))?;
        }
        if was_dirty {
            for line in render::render_changes(&self.last_view, &view) {
                writeln!(out, "{line}")?;
            }
            self.last_view = view;
        }
        Ok(())
    }

    fn show_marker(&self, out: &mut impl Write) -> io::Result<()> {
        write!(out, "{}", render::input_marker(self.state.mode()))?;
        out.flush()
    }
}

fn spawn_input_reader(inbox: mpsc::Sender<Inbox>) {
    thread::spawn(move || {
        let stdin = io::stdin();
        for line in stdin.lock().lines() {
            match line {
                Ok(line) => {
                    if inbox.send(Inbox::Line(line)).is_err() {
                        return;
                    }
                }
                Err(err) => {
                    scan_warn!("Failed to read input: {}", err);
                    break;
                }
            }
        }
        let _ = inbox.send(Inbox::InputClosed);
    });
}

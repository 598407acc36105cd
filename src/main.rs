//! Signalhub demo entry point.
//!
//! A small publish/subscribe demo built on:
//! - **subject** – the state-change registry at the heart of the crate
//! - **observers** – a health HUD, a score HUD, and an event logger
//! - **config** + **script** – INI settings and JSON stimulus scripts
//!
//! The binary plays the role of the external driver loop: it constructs
//! one [`Subject`], registers the three bundled observers, and turns each
//! incoming stimulus into a counter update published via `set_state`.
//!
//! # Running
//!
//! Interactive mode reads commands from stdin (`+`/`raise`, `-`/`lower`,
//! `reset`, `quit`):
//!
//! ```sh
//! cargo run --release
//! ```
//!
//! Scripted mode applies a JSON stimulus script and exits:
//!
//! ```sh
//! cargo run --release -- --script demo.json
//! ```

use clap::Parser;
use log::{info, warn};
use signalhub::config::HubConfig;
use signalhub::observers::eventlog::EventLog;
use signalhub::observers::health::HealthHud;
use signalhub::observers::score::ScoreHud;
use signalhub::script::{Stimulus, StimulusScript};
use signalhub::subject::{ObserverRef, Subject};
use std::cell::RefCell;
use std::io::BufRead;
use std::path::PathBuf;
use std::rc::Rc;

/// Signalhub demo
#[derive(Parser)]
#[command(version, about = "Publish/subscribe state notification demo")]
struct Cli {
    /// Path to the INI configuration file (default: ./signalhub.ini).
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Apply a JSON stimulus script and exit instead of reading stdin.
    #[arg(long, value_name = "PATH")]
    script: Option<PathBuf>,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => HubConfig::with_path(path),
        None => HubConfig::new(),
    };
    config.load_from_file().ok(); // ignore errors, use defaults

    // --------------- Subject & observers ---------------
    let health = Rc::new(RefCell::new(HealthHud::new()));
    let score = Rc::new(RefCell::new(ScoreHud::new()));
    let eventlog = Rc::new(RefCell::new(match &config.eventlog_file {
        Some(path) => EventLog::with_sink(path).unwrap_or_else(|e| {
            warn!("{e}; falling back to in-memory event log");
            EventLog::new()
        }),
        None => EventLog::new(),
    }));

    let health_handle: ObserverRef = health.clone();
    let score_handle: ObserverRef = score.clone();
    let eventlog_handle: ObserverRef = eventlog.clone();

    let mut subject = Subject::new();
    subject.add_observer(&health_handle);
    subject.add_observer(&score_handle);
    // Registered last, so the logger sees every update first.
    subject.add_observer(&eventlog_handle);

    let mut counter = config.initial_state;
    info!("Demo starting with counter at {counter}");

    // --------------- Drive the subject ---------------
    if let Some(path) = &cli.script {
        match StimulusScript::load_from_file(path) {
            Ok(script) => {
                info!("Applying {} scripted stimuli", script.steps.len());
                for step in script.steps {
                    counter = step.apply(counter, &config);
                    subject.set_state(counter);
                }
            }
            Err(e) => {
                eprintln!("Error: {e}");
                std::process::exit(1);
            }
        }
    } else {
        info!("Reading commands from stdin: +/raise, -/lower, reset, quit");
        let stdin = std::io::stdin();
        for line in stdin.lock().lines() {
            let line = match line {
                Ok(line) => line,
                Err(e) => {
                    warn!("Failed to read stdin: {e}");
                    break;
                }
            };
            let trimmed = line.trim();
            if trimmed.is_empty() {
                continue;
            }
            if trimmed == "quit" || trimmed == "q" {
                break;
            }
            match Stimulus::parse_command(trimmed) {
                Some(stimulus) => {
                    counter = stimulus.apply(counter, &config);
                    subject.set_state(counter);
                }
                None => {
                    warn!("Unknown command {trimmed:?}; try +, -, reset or quit");
                }
            }
        }
    }

    // --------------- Summary ---------------
    info!(
        "Demo finished: state={}, health shows {:?}, score shows {}, {} events logged ({} sink errors)",
        subject.state(),
        health.borrow().displayed(),
        score.borrow().score(),
        eventlog.borrow().history().len(),
        eventlog.borrow().write_errors()
    );
}

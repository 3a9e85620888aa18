//! Strictly Timetravel - terminal tic-tac-toe with a jumpable move list.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod app;
mod cli;
mod config;
mod input;
mod terminal;
mod ui;

use anyhow::{Context, Result};
use app::App;
use clap::Parser;
use cli::Cli;
use config::TuiConfig;
use crossterm::event::{self, Event, KeyEventKind};
use std::time::Duration;
use terminal::{TerminalGuard, Tui};
use tracing::{error, info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = load_config(&cli)?;
    initialize_tracing(&config)?;

    info!(config_path = %cli.config.display(), order = ?config.order(), "Starting Strictly Timetravel");

    let guard = TerminalGuard;
    let res = terminal::init().and_then(|mut tui| run_app(&mut tui, App::new(*config.order())));
    drop(guard);

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }

    info!("Exiting");
    res
}

/// Draw, wait for a key, forward it, repeat.
fn run_app(terminal: &mut Tui, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| ui::draw(f, &app))?;

        if event::poll(Duration::from_millis(250))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    app.handle_key(key.code);
                }
            }
        }

        if app.should_quit() {
            info!(moves = app.session().history().last_index(), "User quit");
            return Ok(());
        }
    }
}

#[instrument(skip(cli))]
fn load_config(cli: &Cli) -> Result<TuiConfig> {
    let mut config = TuiConfig::load_or_default(&cli.config)?;

    if cli.descending {
        config = config.with_descending();
    }
    if let Some(log_file) = &cli.log_file {
        config = config.with_log_file(log_file.clone());
    }

    Ok(config)
}

/// Logs go to a file so they don't draw over the TUI.
fn initialize_tracing(config: &TuiConfig) -> Result<()> {
    let log_file = std::fs::File::create(config.log_file())
        .with_context(|| format!("Failed to create log file {}", config.log_file().display()))?;

    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.log_filter())),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .try_init(); // Don't panic if already initialized

    Ok(())
}

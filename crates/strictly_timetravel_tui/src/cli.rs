//! Command-line interface for strictly_timetravel.

use clap::Parser;
use std::path::PathBuf;

/// Strictly Timetravel - tic-tac-toe with a jumpable move list
#[derive(Parser, Debug)]
#[command(name = "strictly_timetravel")]
#[command(about = "Tic-tac-toe in the terminal with full move history", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the TOML config file (defaults are used if it doesn't exist)
    #[arg(short, long, default_value = "strictly_timetravel.toml")]
    pub config: PathBuf,

    /// List moves latest-first
    #[arg(long)]
    pub descending: bool,

    /// Write logs to this file instead of the configured one
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

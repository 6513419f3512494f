//! Command-line interface for the terminal frontend.

use clap::Parser;
use std::path::PathBuf;

/// Two-player tic-tac-toe in the terminal
#[derive(Parser, Debug)]
#[command(name = "tictactoe-tui")]
#[command(about = "Two-player tic-tac-toe in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Pre-filled name for player one (X)
    #[arg(long)]
    pub player_one: Option<String>,

    /// Pre-filled name for player two (O)
    #[arg(long)]
    pub player_two: Option<String>,

    /// TOML config file (defaults to tictactoe.toml, skipped if absent)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// File that receives log output
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

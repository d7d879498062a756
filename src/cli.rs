//! Command-line interface for strictly_history.

use clap::Parser;
use strictly_history::HistoryOrder;

/// Strictly History - tic-tac-toe with a time-travel move list
#[derive(Parser, Debug)]
#[command(name = "strictly_history")]
#[command(about = "Play tic-tac-toe and jump back to any earlier move", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML session config
    #[arg(short, long)]
    pub config: Option<std::path::PathBuf>,

    /// Order the move list starts in (overrides the config file)
    #[arg(long, value_enum)]
    pub order: Option<HistoryOrder>,

    /// Hide the board, printing only status and move list
    #[arg(short, long)]
    pub quiet: bool,
}

//! Strictly History - terminal driver
//!
//! Reads one command per line from stdin and prints the resulting status,
//! board and move list.

#![warn(missing_docs)]

mod cli;

use anyhow::Result;
use clap::Parser;
use cli::Cli;
use std::io::{BufRead, Write};
use strictly_history::{GameSession, HELP, Reply, SessionConfig};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let mut config = SessionConfig::load(cli.config.as_deref())?;
    if let Some(order) = cli.order {
        config = config.with_initial_order(order);
    }
    if cli.quiet {
        config = config.with_show_board(false);
    }

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.log_filter())),
        )
        .with_writer(std::io::stderr)
        .init();

    run(&config)
}

/// Runs the read-eval-print loop until EOF or `quit`.
fn run(config: &SessionConfig) -> Result<()> {
    let mut session = GameSession::new(config);
    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout().lock();

    writeln!(stdout, "{}\n", HELP)?;
    writeln!(stdout, "{}", session.render())?;

    for line in stdin.lock().lines() {
        let line = line?;
        match session.handle_line(&line) {
            Ok(Reply::Show(text)) => writeln!(stdout, "\n{}", text)?,
            Ok(Reply::Quit) => break,
            Err(e) => {
                warn!(input = %line, error = %e.message, "Rejected input");
                writeln!(stdout, "{}", e.message)?;
            }
        }
        stdout.flush()?;
    }

    info!(steps = session.game().history().len() - 1, "Session ended");
    Ok(())
}

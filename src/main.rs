//! Console tic-tac-toe for two local players.

use std::io;

use anyhow::Result;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use tictactoe::cli::Cli;
use tictactoe::GameSession;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr; stdout carries only the game transcript.
    let filter = match &cli.log {
        Some(directive) => EnvFilter::new(directive),
        None => EnvFilter::from_default_env(),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    info!("Starting tic-tac-toe");

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut session = GameSession::new(stdin.lock(), stdout.lock());
    session.run()?;

    Ok(())
}

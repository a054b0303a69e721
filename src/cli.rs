//! Command-line interface for the tic-tac-toe binary.

use clap::Parser;

/// Console tic-tac-toe for two local players.
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Two-player tic-tac-toe on the console", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Log filter directive written to stderr, overriding RUST_LOG
    /// (for example "debug" or "tictactoe=trace").
    #[arg(long)]
    pub log: Option<String>,
}

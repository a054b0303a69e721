//! Console tic-tac-toe for two local players.
//!
//! # Architecture
//!
//! - **game**: board storage, coordinate parsing, and outcome rules
//! - **console**: text rendering and the interactive move loop
//!
//! The game core is pure: boards are immutable values, moves produce new
//! boards, and [`evaluate`] classifies any board without side effects. The
//! console layer owns the streams and drives the turn sequence.
//!
//! # Example
//!
//! ```
//! use tictactoe::{evaluate, Board, GameState};
//!
//! let board = Board::new();
//! assert_eq!(evaluate(&board), GameState::NotFinished);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod console;
mod game;

pub mod cli;

// Crate-level exports - console front end
pub use console::{render_board, GameSession};

// Crate-level exports - game core
pub use game::rules::{evaluate, winning_marks};
pub use game::{parse_coordinates, Board, Coordinates, GameState, MoveError, Player, Square};

//! Core domain types for tic-tac-toe.

use derive_getters::Getters;
use derive_new::new;
use serde::{Deserialize, Serialize};

/// Player in the game.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
    strum::EnumIter,
)]
pub enum Player {
    /// Player X (goes first).
    #[display("X")]
    X,
    /// Player O (goes second).
    #[display("O")]
    O,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }
}

/// A square on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Square {
    /// Empty square.
    Empty,
    /// Square occupied by a player.
    Occupied(Player),
}

/// Zero-based board coordinates, row then column, both in `0..3`.
///
/// [`parse_coordinates`](crate::parse_coordinates) is the validating
/// constructor for player input; values built with [`Coordinates::new`] are
/// trusted to be in range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Getters, new)]
pub struct Coordinates {
    /// Row index, top to bottom.
    row: usize,
    /// Column index, left to right.
    column: usize,
}

impl Coordinates {
    /// Flat row-major index into the board.
    pub(crate) fn index(&self) -> usize {
        self.row * 3 + self.column
    }
}

/// 3x3 tic-tac-toe board with value semantics.
///
/// Writing a square never mutates in place: [`Board::apply`] returns a new
/// board and leaves the original untouched, so callers can hold onto earlier
/// positions freely.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    /// Squares in row-major order (0-8).
    squares: [Square; 9],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            squares: [Square::Empty; 9],
        }
    }

    /// Gets the square at the given coordinates.
    pub fn get(&self, coordinates: Coordinates) -> Square {
        self.squares[coordinates.index()]
    }

    /// Checks if the square at the given coordinates is empty.
    pub fn is_empty(&self, coordinates: Coordinates) -> bool {
        self.get(coordinates) == Square::Empty
    }

    /// Returns a new board with `square` written at `coordinates`.
    ///
    /// Coordinates are assumed already validated by the caller; this is a
    /// pure structural copy with one square replaced.
    pub fn apply(self, square: Square, coordinates: Coordinates) -> Self {
        let mut squares = self.squares;
        squares[coordinates.index()] = square;
        Self { squares }
    }

    /// Number of squares occupied by `player`.
    pub fn count(&self, player: Player) -> usize {
        self.squares
            .iter()
            .filter(|square| **square == Square::Occupied(player))
            .count()
    }

    /// Checks if the board is full.
    pub fn is_full(&self) -> bool {
        self.squares.iter().all(|square| *square != Square::Empty)
    }

    /// Returns all squares as a slice.
    pub fn squares(&self) -> &[Square; 9] {
        &self.squares
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

/// Outcome classification of a board.
///
/// Derived purely from board contents by
/// [`evaluate`](crate::evaluate); the display string of each variant
/// is the phrase printed at the end of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, derive_more::Display)]
pub enum GameState {
    /// Playable board with no winner yet.
    #[display("Game not finished")]
    NotFinished,
    /// Full board with no winner.
    #[display("Draw")]
    Draw,
    /// X completed a line.
    #[display("X wins")]
    XWins,
    /// O completed a line.
    #[display("O wins")]
    OWins,
    /// Board unreachable by alternating play.
    #[display("Impossible")]
    Impossible,
}

//! Interactive move loop over a pair of console streams.

use std::io::{BufRead, Write};

use anyhow::{bail, Context, Result};
use strum::IntoEnumIterator;
use tracing::{debug, info, instrument};

use super::render::render_board;
use crate::game::rules::evaluate;
use crate::game::{parse_coordinates, Board, Coordinates, GameState, Player, Square};

/// Number of squares on the board, and so the most moves a game can take.
const MAX_TURNS: usize = 9;

/// Drives one game of tic-tac-toe over a reader and writer.
///
/// Generic over the streams so tests can run scripted games against
/// in-memory buffers; the binary hands it locked stdin and stdout.
pub struct GameSession<R, W> {
    input: R,
    output: W,
    board: Board,
}

impl<R: BufRead, W: Write> GameSession<R, W> {
    /// Creates a session over the given streams with an empty board.
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            board: Board::new(),
        }
    }

    /// Plays a full game and returns the final outcome.
    ///
    /// The empty board is rendered first, then players alternate X, O, ...
    /// for at most nine accepted moves. The turn sequence breaks early only
    /// on a decisive win; a drawn board exhausts it naturally. The outcome
    /// phrase is printed once at the end.
    ///
    /// # Errors
    ///
    /// Fails only on console I/O errors, including end of input while a
    /// move is still expected. Invalid moves are reported to the player
    /// and retried, never returned.
    #[instrument(skip(self))]
    pub fn run(&mut self) -> Result<GameState> {
        info!("Starting a new game");
        self.render()?;

        for player in Player::iter().cycle().take(MAX_TURNS) {
            let coordinates = self.prompt_move(player)?;
            self.board = self.board.apply(Square::Occupied(player), coordinates);
            debug!(
                %player,
                row = coordinates.row(),
                column = coordinates.column(),
                "Move accepted"
            );
            self.render()?;

            if matches!(evaluate(&self.board), GameState::XWins | GameState::OWins) {
                break;
            }
        }

        let state = evaluate(&self.board);
        writeln!(self.output, "{state}").context("Failed to write to console")?;
        info!(outcome = %state, "Game over");
        Ok(state)
    }

    /// Prompts until the player enters an accepted move.
    ///
    /// Each rejection prints exactly the error message on its own line and
    /// re-issues the prompt; the board is not reprinted and the player does
    /// not change.
    fn prompt_move(&mut self, player: Player) -> Result<Coordinates> {
        loop {
            write!(self.output, "Enter the coordinates: ")
                .context("Failed to write to console")?;
            self.output.flush().context("Failed to flush console")?;

            let mut line = String::new();
            let read = self
                .input
                .read_line(&mut line)
                .context("Failed to read from console")?;
            if read == 0 {
                bail!("Input closed before the game finished");
            }

            match parse_coordinates(&self.board, &line) {
                Ok(coordinates) => return Ok(coordinates),
                Err(error) => {
                    debug!(%player, %error, input = line.trim(), "Rejected move");
                    writeln!(self.output, "{error}").context("Failed to write to console")?;
                }
            }
        }
    }

    fn render(&mut self) -> Result<()> {
        writeln!(self.output, "{}", render_board(&self.board))
            .context("Failed to write to console")
    }
}

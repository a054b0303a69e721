//! Board classification into game outcomes.

use tracing::instrument;

use super::win::winning_marks;
use crate::game::types::{Board, GameState, Player};

/// Classifies a board into its game outcome.
///
/// A mark-count imbalance greater than one cannot result from alternating
/// play and short-circuits the line scan. The two impossibility checks are
/// complementary: the count check catches lopsided boards with no winning
/// line, the line scan catches boards where both marks complete a line.
#[instrument]
pub fn evaluate(board: &Board) -> GameState {
    let count_x = board.count(Player::X);
    let count_o = board.count(Player::O);
    if count_x.abs_diff(count_o) > 1 {
        return GameState::Impossible;
    }

    match winning_marks(board).as_slice() {
        [] if board.is_full() => GameState::Draw,
        [] => GameState::NotFinished,
        [Player::X] => GameState::XWins,
        [Player::O] => GameState::OWins,
        _ => GameState::Impossible,
    }
}

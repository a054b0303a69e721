//! Board rendering for the console transcript.

use crate::game::{Board, Player, Square};

/// Formats the board as a bordered text grid.
///
/// Nine dashes above and below, each row as `| a b c |` with single spaces
/// between glyphs. Empty squares render as a blank, not a placeholder.
pub fn render_board(board: &Board) -> String {
    let mut out = String::with_capacity(64);
    out.push_str("---------\n");
    for row in board.squares().chunks(3) {
        out.push('|');
        for square in row {
            out.push(' ');
            out.push(glyph(*square));
        }
        out.push_str(" |\n");
    }
    out.push_str("---------");
    out
}

fn glyph(square: Square) -> char {
    match square {
        Square::Empty => ' ',
        Square::Occupied(Player::X) => 'X',
        Square::Occupied(Player::O) => 'O',
    }
}

//! Tests for board evaluation through the public API.

use tictactoe::{evaluate, winning_marks, Board, Coordinates, GameState, Player, Square};

/// Builds a board from three rows of `X`, `O`, or `_` characters.
fn board_of(rows: [&str; 3]) -> Board {
    let mut board = Board::new();
    for (row, marks) in rows.iter().enumerate() {
        for (column, glyph) in marks.chars().enumerate() {
            let square = match glyph {
                'X' => Square::Occupied(Player::X),
                'O' => Square::Occupied(Player::O),
                _ => Square::Empty,
            };
            board = board.apply(square, Coordinates::new(row, column));
        }
    }
    board
}

#[test]
fn test_empty_board_not_finished() {
    assert_eq!(evaluate(&Board::new()), GameState::NotFinished);
}

#[test]
fn test_partial_board_not_finished() {
    let board = board_of(["X__", "_O_", "___"]);
    assert_eq!(evaluate(&board), GameState::NotFinished);
}

#[test]
fn test_x_wins_top_row() {
    let board = board_of(["XXX", "OO_", "___"]);
    assert_eq!(evaluate(&board), GameState::XWins);
}

#[test]
fn test_o_wins_column() {
    // Counts differ by one, so the line scan decides.
    let board = board_of(["OXX", "OX_", "O_X"]);
    assert_eq!(evaluate(&board), GameState::OWins);
}

#[test]
fn test_full_board_without_line_is_draw() {
    let board = board_of(["XOX", "XOO", "OXX"]);
    assert_eq!(evaluate(&board), GameState::Draw);
}

#[test]
fn test_lopsided_counts_are_impossible() {
    // Five X marks against one O cannot come from alternating play.
    let board = board_of(["XX_", "XO_", "XX_"]);
    assert_eq!(evaluate(&board), GameState::Impossible);
}

#[test]
fn test_two_simultaneous_winners_are_impossible() {
    let board = board_of(["XXX", "___", "OOO"]);
    assert_eq!(evaluate(&board), GameState::Impossible);
}

#[test]
fn test_winning_marks_reports_both_players() {
    let board = board_of(["XXX", "___", "OOO"]);
    let winners = winning_marks(&board);
    assert!(winners.contains(&Player::X));
    assert!(winners.contains(&Player::O));
}

#[test]
fn test_evaluation_symmetric_under_mark_swap() {
    let cases = [
        (["XXX", "OO_", "___"], GameState::XWins),
        (["OOO", "XX_", "___"], GameState::OWins),
        (["XOX", "XOO", "OXX"], GameState::Draw),
        (["___", "___", "___"], GameState::NotFinished),
        (["XXX", "___", "OOO"], GameState::Impossible),
    ];

    for (rows, expected) in cases {
        assert_eq!(evaluate(&board_of(rows)), expected);

        let swapped = rows.map(|row| {
            row.chars()
                .map(|glyph| match glyph {
                    'X' => 'O',
                    'O' => 'X',
                    other => other,
                })
                .collect::<String>()
        });
        let swapped = board_of([
            swapped[0].as_str(),
            swapped[1].as_str(),
            swapped[2].as_str(),
        ]);
        let mirrored = match expected {
            GameState::XWins => GameState::OWins,
            GameState::OWins => GameState::XWins,
            symmetric => symmetric,
        };
        assert_eq!(evaluate(&swapped), mirrored);
    }
}

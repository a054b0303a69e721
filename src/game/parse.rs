//! Coordinate parsing for player input.

use derive_more::{Display, Error};
use tracing::instrument;

use super::types::{Board, Coordinates};

/// Reasons a move can be rejected at the prompt.
///
/// The display string of each variant is the exact message shown to the
/// player. Checks run in a fixed order (numeric form, then range, then
/// occupancy), so input failing several checks reports only the first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum MoveError {
    /// Input did not split into exactly two integers.
    #[display("You should enter numbers!")]
    NotNumeric,
    /// Row or column outside the 3x3 grid.
    #[display("Coordinates should be from 1 to 3")]
    OutOfRange,
    /// Target square already holds a mark.
    #[display("This cell is occupied!")]
    CellOccupied,
}

/// Parses one line of input into validated board coordinates.
///
/// Expects two whitespace-separated 1-based integers, `"<row> <col>"`.
/// On success the returned coordinates are zero-based and reference a
/// square that is empty on `board`.
#[instrument(skip(board))]
pub fn parse_coordinates(board: &Board, raw: &str) -> Result<Coordinates, MoveError> {
    let mut tokens = raw.split_whitespace();
    let (Some(row), Some(column), None) = (tokens.next(), tokens.next(), tokens.next()) else {
        return Err(MoveError::NotNumeric);
    };
    let row: i32 = row.parse().map_err(|_| MoveError::NotNumeric)?;
    let column: i32 = column.parse().map_err(|_| MoveError::NotNumeric)?;

    // Convert 1-based input to 0-based indices.
    let (row, column) = (row - 1, column - 1);
    if !(0..3).contains(&row) || !(0..3).contains(&column) {
        return Err(MoveError::OutOfRange);
    }

    let coordinates = Coordinates::new(row as usize, column as usize);
    if !board.is_empty(coordinates) {
        return Err(MoveError::CellOccupied);
    }

    Ok(coordinates)
}

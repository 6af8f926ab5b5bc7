//! King single steps and castling shape.

use crate::board::Board;
use crate::castle_rights::CastleSide;
use crate::square::Square;

use super::target_not_allied;

/// Validate a single king step to any of the eight neighbours.
///
/// Castling is not a single step; see [`castle_side_of_step`].
pub fn validate_king_move(from: Square, to: Square, board: &Board) -> bool {
    let (d_row, d_col) = from.delta(to);
    d_row.abs() <= 1 && d_col.abs() <= 1 && target_not_allied(from, to, board)
}

/// If `from -> to` is a two-column step along a row, the side it castles toward.
pub fn castle_side_of_step(from: Square, to: Square) -> Option<CastleSide> {
    match from.delta(to) {
        (0, 2) => Some(CastleSide::KingSide),
        (0, -2) => Some(CastleSide::QueenSide),
        _ => None,
    }
}

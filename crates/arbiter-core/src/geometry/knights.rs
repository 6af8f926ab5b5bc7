//! Knight moves.

use crate::board::Board;
use crate::square::Square;

use super::target_not_allied;

/// Validate a knight move: an L-shaped jump, no path check.
pub fn validate_knight_move(from: Square, to: Square, board: &Board) -> bool {
    let (d_row, d_col) = from.delta(to);
    matches!((d_row.abs(), d_col.abs()), (2, 1) | (1, 2)) && target_not_allied(from, to, board)
}

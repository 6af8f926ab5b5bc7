//! Sliding piece moves (bishops, rooks, queens).

use crate::board::Board;
use crate::square::Square;

use super::target_not_allied;

/// Validate a rook move: same row or column, clear path, no ally on the destination.
pub fn validate_rook_move(from: Square, to: Square, board: &Board) -> bool {
    let (d_row, d_col) = from.delta(to);
    let straight = (d_row == 0) != (d_col == 0);
    straight && board.is_path_clear(from, to) && target_not_allied(from, to, board)
}

/// Validate a bishop move: a diagonal of non-zero length, clear path, no ally
/// on the destination.
pub fn validate_bishop_move(from: Square, to: Square, board: &Board) -> bool {
    let (d_row, d_col) = from.delta(to);
    let diagonal = d_row != 0 && d_row.abs() == d_col.abs();
    diagonal && board.is_path_clear(from, to) && target_not_allied(from, to, board)
}

/// Validate a queen move: rook-legal or bishop-legal.
pub fn validate_queen_move(from: Square, to: Square, board: &Board) -> bool {
    validate_rook_move(from, to, board) || validate_bishop_move(from, to, board)
}

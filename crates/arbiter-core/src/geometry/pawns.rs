//! Pawn pushes and diagonal captures.

use crate::board::Board;
use crate::color::Color;
use crate::square::Square;

/// Validate a pawn move: single push, double push from the starting row, or
/// diagonal capture of an opposing piece.
///
/// En passant is a diagonal step onto an empty square and is therefore
/// rejected here; [`special::en_passant_capture`](crate::special::en_passant_capture)
/// decides it.
pub fn validate_pawn_move(from: Square, to: Square, board: &Board) -> bool {
    let Some(pawn) = board.piece_at(from) else {
        return false;
    };
    let color = pawn.color();
    let forward = color.forward();
    let (d_row, d_col) = from.delta(to);

    // Single push: the destination must be empty, pawns never capture straight ahead.
    if d_col == 0 && d_row == forward {
        return board.is_empty(to);
    }

    if is_double_push(from, to, color) {
        let skipped_empty = from
            .offset(forward, 0)
            .is_some_and(|skipped| board.is_empty(skipped));
        return skipped_empty && board.is_empty(to);
    }

    if pawn_attacks(color, from, to) {
        return board
            .piece_at(to)
            .is_some_and(|target| !target.is_ally_of(pawn));
    }

    false
}

/// Does a pawn of `color` on `from` attack `to`?
///
/// Occupancy is ignored: this is the capture shape only.
#[inline]
pub fn pawn_attacks(color: Color, from: Square, to: Square) -> bool {
    let (d_row, d_col) = from.delta(to);
    d_row == color.forward() && d_col.abs() == 1
}

/// Is `from -> to` a two-row advance from the starting row of `color`?
///
/// Shape only; the squares are not inspected.
#[inline]
pub fn is_double_push(from: Square, to: Square, color: Color) -> bool {
    let (d_row, d_col) = from.delta(to);
    d_col == 0 && d_row == 2 * color.forward() && from.row() == color.pawn_row()
}

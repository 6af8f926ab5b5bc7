//! Shape-and-obstruction validators, one per piece kind.
//!
//! Every validator reads the moving piece from `board[from]`, so an empty
//! origin is never shape-legal. Check and turn are ignored here; en passant
//! and castling live in [`special`](crate::special).

mod king;
mod knights;
mod pawns;
mod sliders;

use crate::board::Board;
use crate::piece_kind::PieceKind;
use crate::square::Square;

pub use self::king::{castle_side_of_step, validate_king_move};
pub use self::knights::validate_knight_move;
pub use self::pawns::{is_double_push, pawn_attacks, validate_pawn_move};
pub use self::sliders::{validate_bishop_move, validate_queen_move, validate_rook_move};

/// Dispatch to the validator for `kind`.
///
/// For kings this covers single steps only.
pub fn validate_shape(kind: PieceKind, from: Square, to: Square, board: &Board) -> bool {
    match kind {
        PieceKind::Pawn => validate_pawn_move(from, to, board),
        PieceKind::Knight => validate_knight_move(from, to, board),
        PieceKind::Bishop => validate_bishop_move(from, to, board),
        PieceKind::Rook => validate_rook_move(from, to, board),
        PieceKind::Queen => validate_queen_move(from, to, board),
        PieceKind::King => validate_king_move(from, to, board),
    }
}

/// `to` is empty or holds an opponent of the piece on `from`.
///
/// False when `from` is empty or when `from == to`.
fn target_not_allied(from: Square, to: Square, board: &Board) -> bool {
    if from == to {
        return false;
    }
    match (board.piece_at(from), board.piece_at(to)) {
        (Some(mover), Some(target)) => !mover.is_ally_of(target),
        (Some(_), None) => true,
        (None, _) => false,
    }
}

//! Attack detection: which squares a side reaches, and whether a king is in check.
//!
//! Attack reach is a narrower predicate set than move legality. Pawns reach
//! their two forward diagonals whether or not anything stands there, and a
//! king never counts as an attacker, so probing square safety can never loop
//! back through castling.

use crate::board::Board;
use crate::color::Color;
use crate::geometry::{
    pawn_attacks, validate_bishop_move, validate_knight_move, validate_queen_move,
    validate_rook_move,
};
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::square::Square;

/// Does `attacker`, standing on `from`, reach `target`?
///
/// `attacker` must be the piece on `from`.
pub fn attacks_square(attacker: Piece, from: Square, target: Square, board: &Board) -> bool {
    match attacker.kind() {
        PieceKind::Pawn => pawn_attacks(attacker.color(), from, target),
        PieceKind::Knight => validate_knight_move(from, target, board),
        PieceKind::Bishop => validate_bishop_move(from, target, board),
        PieceKind::Rook => validate_rook_move(from, target, board),
        PieceKind::Queen => validate_queen_move(from, target, board),
        PieceKind::King => false,
    }
}

/// Return `true` if `sq` is attacked by any piece of `by_color`.
pub fn is_square_attacked(sq: Square, board: &Board, by_color: Color) -> bool {
    board
        .pieces_of(by_color)
        .any(|(from, attacker)| attacks_square(attacker, from, sq, board))
}

/// Return every square holding a piece of `by_color` that attacks `sq`.
pub fn attackers_of(sq: Square, board: &Board, by_color: Color) -> Vec<Square> {
    board
        .pieces_of(by_color)
        .filter(|&(from, attacker)| attacks_square(attacker, from, sq, board))
        .map(|(from, _)| from)
        .collect()
}

/// Return `true` if the king of `color` is attacked.
///
/// A board without a king of `color` is never in check.
pub fn is_king_in_check(color: Color, board: &Board) -> bool {
    board
        .king_square(color)
        .is_some_and(|king| is_square_attacked(king, board, color.flip()))
}

//! The move legality engine: one entry point deciding whether a proposed move is legal.
//!
//! Two independent passes must both succeed:
//!
//! 1. **Shape.** The per-piece validator, or the castling / en passant
//!    resolver for the special cases. This pass also classifies the move.
//! 2. **Self-check.** The classified move is applied to a copy of the board,
//!    with every side effect (en passant removal, rook relocation), and the
//!    mover's king must not be attacked on the result.
//!
//! When both passes would fail, the shape failure is the reason reported.

use tracing::debug;

use crate::attacks::{attackers_of, is_king_in_check};
use crate::board::Board;
use crate::castle_rights::RookMoved;
use crate::chess_move::{LastMove, Move, MoveKind};
use crate::error::IllegalMove;
use crate::geometry::{castle_side_of_step, is_double_push, pawn_attacks, validate_shape};
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::special::{en_passant_capture, is_promotion, validate_castle};
use crate::square::Square;

/// Validate `piece` moving `from -> to` and classify the move.
///
/// `piece` must be the piece standing on `from`. `king_moved` and
/// `rook_moved` are the castling flags of the mover's color. Off-board
/// coordinates cannot be expressed as a [`Square`]; they are rejected with
/// [`IllegalMove::OutOfBounds`] when a
/// [`MoveRequest`](crate::chess_move::MoveRequest) is resolved.
///
/// The board is never modified; calling this twice with the same inputs gives
/// the same answer.
pub fn validate_move(
    piece: Piece,
    from: Square,
    to: Square,
    board: &Board,
    last_move: Option<&LastMove>,
    king_moved: bool,
    rook_moved: RookMoved,
) -> Result<Move, IllegalMove> {
    let kind = classify(piece, from, to, board, last_move, king_moved, rook_moved)?;
    let mv = Move::new(from, to, kind);

    // The promotion piece never affects the mover's own king.
    let hypothetical = board.make_move(mv, PieceKind::Queen);
    let color = piece.color();
    if is_king_in_check(color, &hypothetical) {
        let checkers = hypothetical
            .king_square(color)
            .map(|king| attackers_of(king, &hypothetical, color.flip()))
            .unwrap_or_default();
        debug!(%from, %to, ?piece, ?checkers, "rejected: self-check");
        return Err(IllegalMove::SelfCheck { color });
    }

    Ok(mv)
}

/// Boolean form of [`validate_move`].
pub fn is_move_valid(
    piece: Piece,
    from: Square,
    to: Square,
    board: &Board,
    last_move: Option<&LastMove>,
    king_moved: bool,
    rook_moved: RookMoved,
) -> bool {
    validate_move(piece, from, to, board, last_move, king_moved, rook_moved).is_ok()
}

/// Shape pass: decide whether the move is geometrically legal and what kind it is.
fn classify(
    piece: Piece,
    from: Square,
    to: Square,
    board: &Board,
    last_move: Option<&LastMove>,
    king_moved: bool,
    rook_moved: RookMoved,
) -> Result<MoveKind, IllegalMove> {
    let shape_invalid = || IllegalMove::ShapeInvalid { piece, from, to };
    let capture = board.piece_at(to).is_some();

    match piece.kind() {
        PieceKind::Pawn => {
            if validate_shape(PieceKind::Pawn, from, to, board) {
                return Ok(if is_promotion(piece, to) {
                    MoveKind::Promotion { capture }
                } else if is_double_push(from, to, piece.color()) {
                    MoveKind::DoublePush
                } else if capture {
                    MoveKind::Capture
                } else {
                    MoveKind::Quiet
                });
            }

            // A diagonal step onto an empty square can only be en passant.
            if pawn_attacks(piece.color(), from, to) && !capture {
                let captured = en_passant_capture(from, to, piece.color(), last_move)?;
                return Ok(MoveKind::EnPassant { captured });
            }

            Err(shape_invalid())
        }

        PieceKind::King => {
            if validate_shape(PieceKind::King, from, to, board) {
                return Ok(if capture { MoveKind::Capture } else { MoveKind::Quiet });
            }

            if let Some(side) = castle_side_of_step(from, to) {
                validate_castle(from, to, side, board, king_moved, rook_moved)?;
                return Ok(MoveKind::Castle(side));
            }

            Err(shape_invalid())
        }

        kind => {
            if validate_shape(kind, from, to, board) {
                Ok(if capture { MoveKind::Capture } else { MoveKind::Quiet })
            } else {
                Err(shape_invalid())
            }
        }
    }
}

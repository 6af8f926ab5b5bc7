//! En passant, castling and promotion.
//!
//! Each resolver is a pure check that returns what the application step needs
//! (the captured square, the castling side). Nothing here writes to a board.

use crate::attacks::is_square_attacked;
use crate::board::Board;
use crate::castle_rights::{CastleSide, KING_HOME_COL, RookMoved};
use crate::chess_move::LastMove;
use crate::color::Color;
use crate::error::{CastlingFailure, EnPassantFailure};
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::square::Square;

/// How pawns reaching the last row are promoted.
///
/// Only one option is recognised today: the piece every promotion produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PromotionConfig {
    default_promotion: PieceKind,
}

impl PromotionConfig {
    /// Promote to `kind`, or `None` if a pawn cannot become that piece.
    pub const fn new(kind: PieceKind) -> Option<PromotionConfig> {
        if kind.is_promotable() {
            Some(PromotionConfig {
                default_promotion: kind,
            })
        } else {
            None
        }
    }

    #[inline]
    pub const fn default_promotion(self) -> PieceKind {
        self.default_promotion
    }
}

impl Default for PromotionConfig {
    fn default() -> Self {
        PromotionConfig {
            default_promotion: PieceKind::Queen,
        }
    }
}

/// Does `piece` moving to `to` promote?
#[inline]
pub fn is_promotion(piece: Piece, to: Square) -> bool {
    piece.kind() == PieceKind::Pawn && to.row() == piece.color().promotion_row()
}

/// Check an en passant capture by the pawn of `color` on `from` moving to `to`.
///
/// Returns the square of the pawn being captured: the destination of the
/// opponent's two-square advance, directly behind `to`.
pub fn en_passant_capture(
    from: Square,
    to: Square,
    color: Color,
    last_move: Option<&LastMove>,
) -> Result<Square, EnPassantFailure> {
    let last = last_move.ok_or(EnPassantFailure::NoLastMove)?;
    if !last.is_double_pawn_advance() || last.piece.color() == color {
        return Err(EnPassantFailure::NotDoublePawnAdvance);
    }

    let victim = last.to;
    let (d_row, d_col) = from.delta(to);
    let beside_victim = from.row() == victim.row() && from.col().abs_diff(victim.col()) == 1;
    let onto_skipped_square =
        d_row == color.forward() && d_col.abs() == 1 && to.col() == victim.col();

    if beside_victim && onto_skipped_square {
        Ok(victim)
    } else {
        Err(EnPassantFailure::NotAdjacent)
    }
}

/// Check a castling move: the king of `color` stepping two columns from `from` to `to`.
///
/// The caller has already established the two-column shape (see
/// [`castle_side_of_step`](crate::geometry::castle_side_of_step)); `side` is
/// the result.
pub fn validate_castle(
    from: Square,
    to: Square,
    side: CastleSide,
    board: &Board,
    king_moved: bool,
    rook_moved: RookMoved,
) -> Result<(), CastlingFailure> {
    let Some(king) = board.piece_at(from) else {
        return Err(CastlingFailure::KingMoved);
    };
    let color = king.color();

    if from != Square::from_parts_unchecked(color.back_row(), KING_HOME_COL) {
        return Err(CastlingFailure::KingNotHome);
    }
    if king_moved {
        return Err(CastlingFailure::KingMoved);
    }

    let rook_sq = from
        .with_col(side.rook_col())
        .ok_or(CastlingFailure::RookMissing)?;
    if board.piece_at(rook_sq) != Some(Piece::new(PieceKind::Rook, color)) {
        return Err(CastlingFailure::RookMissing);
    }
    if rook_moved.get(side) {
        return Err(CastlingFailure::RookMoved);
    }

    // Everything strictly between king and rook must be empty.
    let mut sq = from;
    while let Some(next) = sq.offset(0, side.direction()) {
        if next == rook_sq {
            break;
        }
        if !board.is_empty(next) {
            return Err(CastlingFailure::PathBlocked(next));
        }
        sq = next;
    }

    // The king may not start on, cross, or land on an attacked square.
    let mut sq = from;
    loop {
        if is_square_attacked(sq, board, color.flip()) {
            return Err(CastlingFailure::PathAttacked(sq));
        }
        if sq == to {
            return Ok(());
        }
        sq = sq
            .offset(0, side.direction())
            .ok_or(CastlingFailure::PathBlocked(sq))?;
    }
}

#[cfg(test)]
mod tests {
    use super::{PromotionConfig, en_passant_capture, is_promotion, validate_castle};
    use crate::board::Board;
    use crate::castle_rights::{CastleSide, RookMoved};
    use crate::chess_move::LastMove;
    use crate::color::Color;
    use crate::error::{CastlingFailure, EnPassantFailure};
    use crate::piece::Piece;
    use crate::piece_kind::PieceKind;
    use crate::square::Square;

    fn sq(row: u8, col: u8) -> Square {
        Square::at(row, col)
    }

    const UNMOVED: RookMoved = RookMoved {
        kingside: false,
        queenside: false,
    };

    #[test]
    fn promotion_config_defaults_to_queen() {
        assert_eq!(PromotionConfig::default().default_promotion(), PieceKind::Queen);
        assert_eq!(
            PromotionConfig::new(PieceKind::Knight).map(PromotionConfig::default_promotion),
            Some(PieceKind::Knight)
        );
        assert_eq!(PromotionConfig::new(PieceKind::King), None);
        assert_eq!(PromotionConfig::new(PieceKind::Pawn), None);
    }

    #[test]
    fn promotion_rows() {
        assert!(is_promotion(Piece::WHITE_PAWN, sq(0, 3)));
        assert!(!is_promotion(Piece::WHITE_PAWN, sq(7, 3)));
        assert!(is_promotion(Piece::BLACK_PAWN, sq(7, 3)));
        assert!(!is_promotion(Piece::WHITE_ROOK, sq(0, 3)));
    }

    #[test]
    fn en_passant_after_double_advance() {
        let last = LastMove {
            from: sq(1, 3),
            to: sq(3, 3),
            piece: Piece::BLACK_PAWN,
        };
        assert_eq!(
            en_passant_capture(sq(3, 4), sq(2, 3), Color::White, Some(&last)),
            Ok(sq(3, 3))
        );
        assert_eq!(
            en_passant_capture(sq(3, 2), sq(2, 3), Color::White, Some(&last)),
            Ok(sq(3, 3))
        );
    }

    #[test]
    fn en_passant_requires_a_last_move() {
        assert_eq!(
            en_passant_capture(sq(3, 4), sq(2, 3), Color::White, None),
            Err(EnPassantFailure::NoLastMove)
        );
    }

    #[test]
    fn en_passant_requires_opposing_double_advance() {
        let single = LastMove {
            from: sq(2, 3),
            to: sq(3, 3),
            piece: Piece::BLACK_PAWN,
        };
        assert_eq!(
            en_passant_capture(sq(3, 4), sq(2, 3), Color::White, Some(&single)),
            Err(EnPassantFailure::NotDoublePawnAdvance)
        );

        let own = LastMove {
            from: sq(6, 3),
            to: sq(4, 3),
            piece: Piece::WHITE_PAWN,
        };
        assert_eq!(
            en_passant_capture(sq(4, 4), sq(3, 3), Color::White, Some(&own)),
            Err(EnPassantFailure::NotDoublePawnAdvance)
        );
    }

    #[test]
    fn en_passant_requires_adjacency() {
        let last = LastMove {
            from: sq(1, 3),
            to: sq(3, 3),
            piece: Piece::BLACK_PAWN,
        };
        // Two columns away.
        assert_eq!(
            en_passant_capture(sq(3, 5), sq(2, 4), Color::White, Some(&last)),
            Err(EnPassantFailure::NotAdjacent)
        );
        // Wrong row.
        assert_eq!(
            en_passant_capture(sq(4, 4), sq(3, 3), Color::White, Some(&last)),
            Err(EnPassantFailure::NotAdjacent)
        );
        // Beside the victim but capturing away from it.
        assert_eq!(
            en_passant_capture(sq(3, 4), sq(2, 5), Color::White, Some(&last)),
            Err(EnPassantFailure::NotAdjacent)
        );
    }

    #[test]
    fn black_en_passant() {
        let last = LastMove {
            from: sq(6, 6),
            to: sq(4, 6),
            piece: Piece::WHITE_PAWN,
        };
        assert_eq!(
            en_passant_capture(sq(4, 7), sq(5, 6), Color::Black, Some(&last)),
            Ok(sq(4, 6))
        );
    }

    #[test]
    fn kingside_castle_on_clear_row() {
        let board: Board = "4k3/8/8/8/8/8/8/4K2R".parse().unwrap();
        assert_eq!(
            validate_castle(sq(7, 4), sq(7, 6), CastleSide::KingSide, &board, false, UNMOVED),
            Ok(())
        );
    }

    #[test]
    fn queenside_needs_b_file_empty() {
        let board: Board = "4k3/8/8/8/8/8/8/RN2K3".parse().unwrap();
        assert_eq!(
            validate_castle(sq(7, 4), sq(7, 2), CastleSide::QueenSide, &board, false, UNMOVED),
            Err(CastlingFailure::PathBlocked(sq(7, 1)))
        );

        let board: Board = "4k3/8/8/8/8/8/8/R3K3".parse().unwrap();
        assert_eq!(
            validate_castle(sq(7, 4), sq(7, 2), CastleSide::QueenSide, &board, false, UNMOVED),
            Ok(())
        );
    }

    #[test]
    fn king_off_home_square_cannot_castle() {
        // King on f1 stepping onto its own rook on h1.
        let board: Board = "4k3/8/8/8/8/8/8/5K1R".parse().unwrap();
        assert_eq!(
            validate_castle(sq(7, 5), sq(7, 7), CastleSide::KingSide, &board, false, UNMOVED),
            Err(CastlingFailure::KingNotHome)
        );
        // Right column, wrong row.
        let board: Board = "4k3/8/8/8/8/8/4K2R/8".parse().unwrap();
        assert_eq!(
            validate_castle(sq(6, 4), sq(6, 6), CastleSide::KingSide, &board, false, UNMOVED),
            Err(CastlingFailure::KingNotHome)
        );
    }

    #[test]
    fn moved_pieces_cannot_castle() {
        let board: Board = "4k3/8/8/8/8/8/8/4K2R".parse().unwrap();
        assert_eq!(
            validate_castle(sq(7, 4), sq(7, 6), CastleSide::KingSide, &board, true, UNMOVED),
            Err(CastlingFailure::KingMoved)
        );
        let rook_moved = RookMoved {
            kingside: true,
            queenside: false,
        };
        assert_eq!(
            validate_castle(sq(7, 4), sq(7, 6), CastleSide::KingSide, &board, false, rook_moved),
            Err(CastlingFailure::RookMoved)
        );
    }

    #[test]
    fn rook_must_be_an_allied_rook() {
        let board: Board = "4k3/8/8/8/8/8/8/4K2N".parse().unwrap();
        assert_eq!(
            validate_castle(sq(7, 4), sq(7, 6), CastleSide::KingSide, &board, false, UNMOVED),
            Err(CastlingFailure::RookMissing)
        );
        let board: Board = "4k3/8/8/8/8/8/8/4K2r".parse().unwrap();
        assert_eq!(
            validate_castle(sq(7, 4), sq(7, 6), CastleSide::KingSide, &board, false, UNMOVED),
            Err(CastlingFailure::RookMissing)
        );
    }

    #[test]
    fn attacked_transit_square_blocks_castling() {
        // Black rook on f8 covers f1.
        let board: Board = "4kr2/8/8/8/8/8/8/4K2R".parse().unwrap();
        assert_eq!(
            validate_castle(sq(7, 4), sq(7, 6), CastleSide::KingSide, &board, false, UNMOVED),
            Err(CastlingFailure::PathAttacked(sq(7, 5)))
        );
    }

    #[test]
    fn king_in_check_cannot_castle() {
        let board: Board = "4r1k1/8/8/8/8/8/8/4K2R".parse().unwrap();
        assert_eq!(
            validate_castle(sq(7, 4), sq(7, 6), CastleSide::KingSide, &board, false, UNMOVED),
            Err(CastlingFailure::PathAttacked(sq(7, 4)))
        );
    }

    #[test]
    fn queenside_b_file_may_be_attacked() {
        // Black rook on b8 covers b1, which the king never crosses.
        let board: Board = "1r2k3/8/8/8/8/8/8/R3K3".parse().unwrap();
        assert_eq!(
            validate_castle(sq(7, 4), sq(7, 2), CastleSide::QueenSide, &board, false, UNMOVED),
            Ok(())
        );
    }
}

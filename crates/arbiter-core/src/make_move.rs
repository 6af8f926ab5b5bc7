//! Move execution via copy-make.

use crate::board::Board;
use crate::chess_move::{Move, MoveKind};
use crate::piece_kind::PieceKind;
use crate::square::Square;

impl Board {
    /// Apply a classified move and return the resulting board. Copy-make:
    /// `self` is not modified.
    ///
    /// `promote_to` is used only for [`MoveKind::Promotion`]. No legality is
    /// checked here; the move must come from the legality engine. If the
    /// source square is empty the board is returned unchanged.
    pub fn make_move(&self, mv: Move, promote_to: PieceKind) -> Board {
        let mut b = *self;
        let src = mv.source();
        let dst = mv.dest();

        let Some(moving) = b.clear(src) else {
            return b;
        };

        match mv.kind() {
            MoveKind::Quiet | MoveKind::Capture | MoveKind::DoublePush => {
                b.place(dst, moving);
            }

            MoveKind::EnPassant { captured } => {
                b.place(dst, moving);
                b.clear(captured);
            }

            MoveKind::Castle(side) => {
                b.place(dst, moving);
                let rook_src = Square::from_parts_unchecked(src.row(), side.rook_col());
                let rook_dst =
                    Square::from_parts_unchecked(src.row(), side.rook_dest_col(dst.col()));
                if let Some(rook) = b.clear(rook_src) {
                    b.place(rook_dst, rook);
                }
            }

            MoveKind::Promotion { .. } => {
                b.place(dst, moving.promoted(promote_to));
            }
        }

        b
    }
}

//! Move requests, classified moves and the last-move record.

use std::fmt;

use crate::castle_rights::CastleSide;
use crate::error::IllegalMove;
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::square::Square;

/// The category of a legal move, decided by the legality engine.
///
/// Application ([`Board::make_move`](crate::board::Board::make_move)) needs
/// the category to know which side effects to perform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoveKind {
    /// A move onto an empty square with no side effects.
    Quiet,
    /// A capture on the destination square.
    Capture,
    /// A pawn's two-square advance from its starting row.
    DoublePush,
    /// A pawn capture whose victim stands on `captured`, not on the destination.
    EnPassant { captured: Square },
    /// A king's two-column step; the rook of `side` jumps over it.
    Castle(CastleSide),
    /// A pawn reaching the farthest row.
    Promotion { capture: bool },
}

impl MoveKind {
    /// Does this move remove an opposing piece?
    #[inline]
    pub const fn is_capture(self) -> bool {
        matches!(
            self,
            MoveKind::Capture | MoveKind::EnPassant { .. } | MoveKind::Promotion { capture: true }
        )
    }
}

/// A legal move: origin, destination and category.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    from: Square,
    to: Square,
    kind: MoveKind,
}

impl Move {
    #[inline]
    pub const fn new(from: Square, to: Square, kind: MoveKind) -> Move {
        Move { from, to, kind }
    }

    /// Origin square.
    #[inline]
    pub const fn source(self) -> Square {
        self.from
    }

    /// Destination square.
    #[inline]
    pub const fn dest(self) -> Square {
        self.to
    }

    #[inline]
    pub const fn kind(self) -> MoveKind {
        self.kind
    }
}

impl fmt::Debug for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Move({}{} {:?})", self.from, self.to, self.kind)
    }
}

/// The move just played, kept for exactly one ply so the reply can be
/// checked for en passant.
///
/// `piece` is the piece that left `from`: after a promotion this is still the pawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LastMove {
    pub from: Square,
    pub to: Square,
    pub piece: Piece,
}

impl LastMove {
    /// Was this a pawn advancing two rows?
    #[inline]
    pub fn is_double_pawn_advance(&self) -> bool {
        self.piece.kind() == PieceKind::Pawn && self.from.row().abs_diff(self.to.row()) == 2
    }
}

/// A client-submitted move with untrusted coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MoveRequest {
    pub from: [i64; 2],
    pub to: [i64; 2],
}

impl MoveRequest {
    pub const fn new(from: [i64; 2], to: [i64; 2]) -> MoveRequest {
        MoveRequest { from, to }
    }

    /// Resolve both coordinates to squares.
    ///
    /// # Errors
    ///
    /// [`IllegalMove::OutOfBounds`] naming the first coordinate that is off the board.
    pub fn squares(&self) -> Result<(Square, Square), IllegalMove> {
        Ok((resolve(self.from)?, resolve(self.to)?))
    }
}

fn resolve([row, col]: [i64; 2]) -> Result<Square, IllegalMove> {
    Square::from_coords(row, col).ok_or(IllegalMove::OutOfBounds { row, col })
}

impl From<(Square, Square)> for MoveRequest {
    fn from((from, to): (Square, Square)) -> MoveRequest {
        MoveRequest {
            from: [i64::from(from.row()), i64::from(from.col())],
            to: [i64::from(to.row()), i64::from(to.col())],
        }
    }
}

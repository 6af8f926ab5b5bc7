//! Castling bookkeeping: which kings and rooks have left their home squares.

use std::fmt;

use crate::board::Board;
use crate::color::Color;
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::square::Square;

/// Column the king starts on; castling is only possible from here.
pub const KING_HOME_COL: u8 = 4;

/// Which side of the board to castle toward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CastleSide {
    KingSide,
    QueenSide,
}

impl CastleSide {
    pub const ALL: [CastleSide; 2] = [CastleSide::KingSide, CastleSide::QueenSide];

    /// Column the rook starts on.
    #[inline]
    pub const fn rook_col(self) -> u8 {
        match self {
            CastleSide::KingSide => 7,
            CastleSide::QueenSide => 0,
        }
    }

    /// Column direction the king travels.
    #[inline]
    pub const fn direction(self) -> i8 {
        match self {
            CastleSide::KingSide => 1,
            CastleSide::QueenSide => -1,
        }
    }

    /// Column the rook lands on: beside the king's destination, on the side
    /// it castled toward.
    #[inline]
    pub const fn rook_dest_col(self, king_dest_col: u8) -> u8 {
        match self {
            CastleSide::KingSide => king_dest_col - 1,
            CastleSide::QueenSide => king_dest_col + 1,
        }
    }

    /// Side whose rook starts on `col`, if `col` is a rook home column.
    #[inline]
    pub const fn from_rook_col(col: u8) -> Option<CastleSide> {
        match col {
            7 => Some(CastleSide::KingSide),
            0 => Some(CastleSide::QueenSide),
            _ => None,
        }
    }
}

/// Per-side "rook has moved" flags for one color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct RookMoved {
    pub kingside: bool,
    pub queenside: bool,
}

impl RookMoved {
    #[inline]
    pub const fn get(self, side: CastleSide) -> bool {
        match side {
            CastleSide::KingSide => self.kingside,
            CastleSide::QueenSide => self.queenside,
        }
    }
}

/// Moved-flags encoded as a 6-bit field.
///
/// Bits 0-2 are White (king, kingside rook, queenside rook), bits 3-5 the
/// same for Black. A set bit means the piece has moved. Flags are monotonic:
/// there is no way to clear one, only to start a new game.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct CastlingRights(u8);

impl CastlingRights {
    /// Start-of-game state: nothing has moved.
    pub const INITIAL: CastlingRights = CastlingRights(0);

    const KING: u8 = 0b001;
    const KINGSIDE_ROOK: u8 = 0b010;
    const QUEENSIDE_ROOK: u8 = 0b100;

    #[inline]
    const fn shift(color: Color) -> u8 {
        color.index() as u8 * 3
    }

    #[inline]
    const fn rook_bit(side: CastleSide) -> u8 {
        match side {
            CastleSide::KingSide => Self::KINGSIDE_ROOK,
            CastleSide::QueenSide => Self::QUEENSIDE_ROOK,
        }
    }

    /// Flags consistent with an arbitrary placement.
    ///
    /// A king away from its home square counts as moved, and so does a rook
    /// missing from its home corner. Everything else starts clear.
    pub fn from_board(board: &Board) -> CastlingRights {
        let mut rights = CastlingRights::INITIAL;
        for color in Color::ALL {
            let row = color.back_row();
            let king_home = Square::from_parts_unchecked(row, KING_HOME_COL);
            if board.piece_at(king_home) != Some(Piece::new(PieceKind::King, color)) {
                rights = rights.with_king_moved(color);
            }
            for side in CastleSide::ALL {
                let corner = Square::from_parts_unchecked(row, side.rook_col());
                if board.piece_at(corner) != Some(Piece::new(PieceKind::Rook, color)) {
                    rights = rights.with_rook_moved(color, side);
                }
            }
        }
        rights
    }

    /// Return the raw bits.
    #[inline]
    pub const fn bits(self) -> u8 {
        self.0
    }

    /// Has the king of `color` moved?
    #[inline]
    pub const fn king_moved(self, color: Color) -> bool {
        self.0 & (Self::KING << Self::shift(color)) != 0
    }

    /// Has the rook of `color` on `side` moved (or been captured at home)?
    #[inline]
    pub const fn rook_moved(self, color: Color, side: CastleSide) -> bool {
        self.0 & (Self::rook_bit(side) << Self::shift(color)) != 0
    }

    /// Both rook flags for `color`.
    #[inline]
    pub const fn rooks_moved(self, color: Color) -> RookMoved {
        RookMoved {
            kingside: self.rook_moved(color, CastleSide::KingSide),
            queenside: self.rook_moved(color, CastleSide::QueenSide),
        }
    }

    /// Return rights with the king of `color` marked as moved.
    #[inline]
    pub const fn with_king_moved(self, color: Color) -> CastlingRights {
        CastlingRights(self.0 | (Self::KING << Self::shift(color)))
    }

    /// Return rights with the rook of `color` on `side` marked as moved.
    #[inline]
    pub const fn with_rook_moved(self, color: Color, side: CastleSide) -> CastlingRights {
        CastlingRights(self.0 | (Self::rook_bit(side) << Self::shift(color)))
    }

    /// Could `color` still castle toward `side`, as far as move history goes?
    #[inline]
    pub const fn can_castle(self, color: Color, side: CastleSide) -> bool {
        !self.king_moved(color) && !self.rook_moved(color, side)
    }

    /// Remaining castling options in FEN notation ("KQkq", "Kq", "-").
    pub fn to_fen(self) -> String {
        let mut s = String::with_capacity(4);
        for (color, side, c) in [
            (Color::White, CastleSide::KingSide, 'K'),
            (Color::White, CastleSide::QueenSide, 'Q'),
            (Color::Black, CastleSide::KingSide, 'k'),
            (Color::Black, CastleSide::QueenSide, 'q'),
        ] {
            if self.can_castle(color, side) {
                s.push(c);
            }
        }
        if s.is_empty() {
            s.push('-');
        }
        s
    }
}

impl fmt::Display for CastlingRights {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_fen())
    }
}

impl fmt::Debug for CastlingRights {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CastlingRights({})", self.to_fen())
    }
}

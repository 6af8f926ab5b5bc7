//! Error types for move validation, placement parsing and board validation.

use std::fmt;

use crate::color::Color;
use crate::piece::Piece;
use crate::square::Square;

/// Errors that occur when parsing a piece-placement string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FenError {
    /// The placement does not have exactly 8 rows.
    WrongRankCount {
        /// Number of rows found.
        found: usize,
    },
    /// A row describes more or fewer than 8 squares.
    BadRankLength {
        /// Zero-based row index (0 = Black's back rank).
        rank_index: usize,
        /// Number of squares described.
        length: usize,
    },
    /// An unrecognized character appeared in the placement.
    InvalidPieceChar {
        /// The invalid character.
        character: char,
    },
}

impl fmt::Display for FenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FenError::WrongRankCount { found } => {
                write!(f, "expected 8 rows in piece placement, found {found}")
            }
            FenError::BadRankLength { rank_index, length } => {
                write!(f, "row {rank_index} describes {length} squares, expected 8")
            }
            FenError::InvalidPieceChar { character } => {
                write!(f, "invalid piece character: '{character}'")
            }
        }
    }
}

impl std::error::Error for FenError {}

/// Errors from structural validation of a [`Board`](crate::board::Board).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    /// A side does not have exactly one king.
    #[error("expected 1 king for {color}, found {count}")]
    InvalidKingCount {
        /// Which side has the wrong king count.
        color: Color,
        /// Number of kings found.
        count: usize,
    },
    /// Pawns occupy the first or eighth rank.
    #[error("pawns found on back rank")]
    PawnsOnBackRank,
}

/// Why a castling attempt was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum CastlingFailure {
    #[error("the king is not on its home square")]
    KingNotHome,
    #[error("the king has already moved")]
    KingMoved,
    #[error("the rook has already moved")]
    RookMoved,
    #[error("no rook of the same color on its home square")]
    RookMissing,
    #[error("{0} lies between king and rook and is occupied")]
    PathBlocked(Square),
    #[error("the king would cross {0}, which is attacked")]
    PathAttacked(Square),
}

/// Why a diagonal pawn move onto an empty square was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum EnPassantFailure {
    #[error("no move has been played yet")]
    NoLastMove,
    #[error("the last move was not a two-square advance by an opposing pawn")]
    NotDoublePawnAdvance,
    #[error("the capturing pawn is not beside the pawn that just advanced")]
    NotAdjacent,
}

/// A move the legality engine refuses.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum IllegalMove {
    /// A coordinate lies outside the 8x8 board.
    #[error("position [{row}, {col}] is outside the board")]
    OutOfBounds {
        /// Row as submitted.
        row: i64,
        /// Column as submitted.
        col: i64,
    },
    /// The piece cannot reach the destination: wrong shape, blocked path or
    /// an allied piece on the destination.
    #[error("{piece} cannot move from {from} to {to}")]
    ShapeInvalid {
        /// The moving piece.
        piece: Piece,
        /// Origin square.
        from: Square,
        /// Requested destination.
        to: Square,
    },
    /// The move would leave the mover's own king attacked.
    #[error("move would leave the {color} king in check")]
    SelfCheck {
        /// The mover's color.
        color: Color,
    },
    /// A two-column king step that does not satisfy the castling rules.
    #[error("castling not allowed: {0}")]
    CastlingPreconditionFailed(#[from] CastlingFailure),
    /// A diagonal pawn step onto an empty square that is not a valid en passant.
    #[error("en passant not allowed: {0}")]
    EnPassantPreconditionFailed(#[from] EnPassantFailure),
}

/// Errors returned by [`Game::play`](crate::game::Game::play).
///
/// Every variant is recoverable; the game state is untouched when one is returned.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    /// The origin square is empty.
    #[error("no piece at {square}")]
    NoPieceAtOrigin {
        /// The empty origin square.
        square: Square,
    },
    /// The piece on the origin square belongs to the side not on move.
    #[error("it is {turn}'s turn, but the piece at {square} is {found}")]
    WrongTurn {
        /// The side to move.
        turn: Color,
        /// The color of the selected piece.
        found: Color,
        /// The origin square.
        square: Square,
    },
    /// The legality engine rejected the move.
    #[error(transparent)]
    IllegalMove(#[from] IllegalMove),
}

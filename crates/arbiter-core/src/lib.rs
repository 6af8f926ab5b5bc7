//! Core chess rules: board representation, move legality, and game sessions.

pub mod attacks;
mod board;
mod castle_rights;
mod chess_move;
mod color;
mod error;
mod fen;
mod game;
pub mod geometry;
mod legality;
mod make_move;
mod piece;
mod piece_kind;
pub mod special;
mod square;

pub use attacks::{attackers_of, is_king_in_check, is_square_attacked};
pub use board::Board;
pub use castle_rights::{CastleSide, CastlingRights, RookMoved};
pub use chess_move::{LastMove, Move, MoveKind, MoveRequest};
pub use color::Color;
pub use error::{BoardError, CastlingFailure, EnPassantFailure, FenError, IllegalMove, MoveError};
pub use fen::STARTING_PLACEMENT;
pub use game::{AppliedMove, Game, GameConfig};
pub use legality::{is_move_valid, validate_move};
pub use piece::Piece;
pub use piece_kind::PieceKind;
pub use special::PromotionConfig;
pub use square::Square;

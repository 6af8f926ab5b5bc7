//! JSON shapes exchanged with clients.
//!
//! Boards travel as an 8x8 row-major grid (row 0 is Black's back rank) of
//! `null` or `{ "type": "pawn", "color": "white" }`.

use serde::{Deserialize, Serialize};

use arbiter_core::{Board, Color, Game, MoveRequest, Piece};

use crate::registry::GameId;

/// One occupied square on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct WirePiece {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub color: &'static str,
}

impl From<Piece> for WirePiece {
    fn from(piece: Piece) -> Self {
        Self {
            kind: piece.kind().name(),
            color: piece.color().name(),
        }
    }
}

/// The full grid.
pub type BoardState = [[Option<WirePiece>; 8]; 8];

/// Convert a board to its wire grid.
pub fn board_state(board: &Board) -> BoardState {
    board
        .rows()
        .map(|row| row.map(|square| square.map(WirePiece::from)))
}

/// Body of `POST /move`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MovePayload {
    pub from_position: [i64; 2],
    pub to_position: [i64; 2],
}

impl From<MovePayload> for MoveRequest {
    fn from(payload: MovePayload) -> Self {
        MoveRequest::new(payload.from_position, payload.to_position)
    }
}

/// Body of `POST /games/custom`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomGamePayload {
    /// Piece placement, FEN style ("rnbqkbnr/pppppppp/8/...").
    pub placement: String,
    /// Side to move; White when absent.
    #[serde(default)]
    pub current_turn: Option<String>,
}

/// Board and side to move.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GameView {
    pub board_state: BoardState,
    pub current_turn: &'static str,
}

impl GameView {
    pub fn of(game: &Game) -> Self {
        Self {
            board_state: board_state(game.board()),
            current_turn: game.turn().name(),
        }
    }
}

/// Reply to an accepted move.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MoveAccepted {
    pub valid: bool,
    #[serde(flatten)]
    pub view: GameView,
}

impl MoveAccepted {
    pub fn of(game: &Game) -> Self {
        Self {
            valid: true,
            view: GameView::of(game),
        }
    }
}

/// Reply to a newly created game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GameCreated {
    pub game_id: GameId,
    #[serde(flatten)]
    pub view: GameView,
}

/// Body of every error response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Rejection {
    pub valid: bool,
    pub message: String,
}

impl Rejection {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            valid: false,
            message: message.into(),
        }
    }
}

/// Parse an optional side-to-move name, defaulting to White.
pub fn parse_turn(name: Option<&str>) -> Option<Color> {
    match name {
        None => Some(Color::White),
        Some(name) => Color::from_name(name),
    }
}

//! A single game session: board, side to move, castling flags and last move.

use tracing::{debug, info};

use crate::board::Board;
use crate::castle_rights::{CastleSide, CastlingRights};
use crate::chess_move::{LastMove, Move, MoveKind, MoveRequest};
use crate::color::Color;
use crate::error::MoveError;
use crate::legality::validate_move;
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::special::PromotionConfig;
use crate::square::Square;

/// Per-game rule options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GameConfig {
    pub promotion: PromotionConfig,
}

/// The outcome of a successfully played move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppliedMove {
    /// The classified move.
    pub mv: Move,
    /// The piece that left the origin square.
    pub piece: Piece,
    /// The piece now on the destination square (differs from `piece` on promotion).
    pub placed: Piece,
    /// The opposing piece removed, if any.
    pub captured: Option<Piece>,
}

/// A two-player game from the start position (or a custom one).
///
/// Every field changes only through [`Game::play`]; a rejected move leaves the
/// game exactly as it was.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    board: Board,
    turn: Color,
    castling: CastlingRights,
    last_move: Option<LastMove>,
    config: GameConfig,
}

impl Game {
    /// New game at the standard start position, White to move.
    pub fn new() -> Game {
        Game::with_config(GameConfig::default())
    }

    pub fn with_config(config: GameConfig) -> Game {
        Game {
            board: Board::starting_position(),
            turn: Color::White,
            castling: CastlingRights::INITIAL,
            last_move: None,
            config,
        }
    }

    /// Game from an arbitrary placement with `turn` to move.
    ///
    /// Castling flags are derived from the placement (see
    /// [`CastlingRights::from_board`]) and there is no last move. The board is
    /// not validated; call [`Board::validate`] first when that matters.
    pub fn from_position(board: Board, turn: Color) -> Game {
        Game {
            board,
            turn,
            castling: CastlingRights::from_board(&board),
            last_move: None,
            config: GameConfig::default(),
        }
    }

    /// Replace the configuration, builder style.
    pub fn configured(mut self, config: GameConfig) -> Game {
        self.config = config;
        self
    }

    /// Return to the start position, keeping the configuration.
    pub fn reset(&mut self) {
        *self = Game::with_config(self.config);
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub fn turn(&self) -> Color {
        self.turn
    }

    #[inline]
    pub fn castling_rights(&self) -> CastlingRights {
        self.castling
    }

    #[inline]
    pub fn last_move(&self) -> Option<&LastMove> {
        self.last_move.as_ref()
    }

    #[inline]
    pub fn config(&self) -> GameConfig {
        self.config
    }

    /// Check `from -> to` for the side to move without playing it.
    pub fn validate(&self, from: Square, to: Square) -> Result<Move, MoveError> {
        let piece = self
            .board
            .piece_at(from)
            .ok_or(MoveError::NoPieceAtOrigin { square: from })?;

        if piece.color() != self.turn {
            return Err(MoveError::WrongTurn {
                turn: self.turn,
                found: piece.color(),
                square: from,
            });
        }

        let mv = validate_move(
            piece,
            from,
            to,
            &self.board,
            self.last_move.as_ref(),
            self.castling.king_moved(piece.color()),
            self.castling.rooks_moved(piece.color()),
        )?;
        Ok(mv)
    }

    /// Resolve untrusted coordinates and play the move.
    pub fn submit(&mut self, request: MoveRequest) -> Result<AppliedMove, MoveError> {
        let (from, to) = request.squares()?;
        self.play(from, to)
    }

    /// Validate and apply `from -> to`.
    ///
    /// # Errors
    ///
    /// Any [`MoveError`]; the game is unchanged when one is returned.
    pub fn play(&mut self, from: Square, to: Square) -> Result<AppliedMove, MoveError> {
        let mv = self.validate(from, to).inspect_err(|err| {
            debug!(%from, %to, turn = %self.turn, %err, "move rejected");
        })?;

        // validate() proved the origin is occupied.
        let Some(piece) = self.board.piece_at(from) else {
            return Err(MoveError::NoPieceAtOrigin { square: from });
        };
        let captured = match mv.kind() {
            MoveKind::EnPassant { captured } => self.board.piece_at(captured),
            kind if kind.is_capture() => self.board.piece_at(to),
            _ => None,
        };

        let promote_to = self.config.promotion.default_promotion();
        self.board = self.board.make_move(mv, promote_to);
        self.castling = updated_rights(self.castling, piece, mv, captured);
        self.last_move = Some(LastMove { from, to, piece });
        self.turn = !self.turn;

        let placed = self.board.piece_at(to).unwrap_or(piece);
        info!(
            %from,
            %to,
            kind = ?mv.kind(),
            piece = %piece,
            captured = ?captured.map(|p| p.to_string()),
            "move applied"
        );

        Ok(AppliedMove {
            mv,
            piece,
            placed,
            captured,
        })
    }
}

impl Default for Game {
    fn default() -> Self {
        Game::new()
    }
}

/// Mark kings and rooks that left (or were taken on) their home squares.
fn updated_rights(
    rights: CastlingRights,
    piece: Piece,
    mv: Move,
    captured: Option<Piece>,
) -> CastlingRights {
    let mut rights = rights;
    let color = piece.color();

    match piece.kind() {
        PieceKind::King => {
            rights = rights.with_king_moved(color);
            if let MoveKind::Castle(side) = mv.kind() {
                rights = rights.with_rook_moved(color, side);
            }
        }
        PieceKind::Rook => {
            if let Some(side) = home_rook_side(mv.source(), color) {
                rights = rights.with_rook_moved(color, side);
            }
        }
        _ => {}
    }

    if let Some(victim) = captured.filter(|p| p.kind() == PieceKind::Rook) {
        if let Some(side) = home_rook_side(mv.dest(), victim.color()) {
            rights = rights.with_rook_moved(victim.color(), side);
        }
    }

    rights
}

/// Which castling side's rook starts on `sq` for `color`, if any.
fn home_rook_side(sq: Square, color: Color) -> Option<CastleSide> {
    if sq.row() == color.back_row() {
        CastleSide::from_rook_col(sq.col())
    } else {
        None
    }
}

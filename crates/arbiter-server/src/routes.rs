//! HTTP routes.

use std::sync::Arc;

use axum::Router;
use axum::extract::{Json, Path, State};
use axum::http::StatusCode;
use axum::routing::{get, post};
use tracing::debug;

use arbiter_core::{Board, MoveRequest};

use crate::error::ServerError;
use crate::registry::{GameId, GameRegistry, SharedGame, lock_game};
use crate::wire::{
    CustomGamePayload, GameCreated, GameView, MoveAccepted, MovePayload, parse_turn,
};

/// Handler state: the registry of live games.
pub type AppState = Arc<GameRegistry>;

/// Build the application router over `registry`.
pub fn router(registry: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/board-state", get(default_board_state))
        .route("/move", post(default_move))
        .route("/games", post(create_game))
        .route("/games/custom", post(create_custom_game))
        .route("/games/{id}/board-state", get(board_state))
        .route("/games/{id}/move", post(play_move))
        .route("/games/{id}/reset", post(reset_game))
        .with_state(registry)
}

async fn health() -> &'static str {
    "ok"
}

async fn default_board_state(State(registry): State<AppState>) -> Json<GameView> {
    Json(view(&registry.default_game()))
}

async fn default_move(
    State(registry): State<AppState>,
    Json(payload): Json<MovePayload>,
) -> Result<Json<MoveAccepted>, ServerError> {
    submit(&registry.default_game(), payload.into()).map(Json)
}

async fn create_game(State(registry): State<AppState>) -> (StatusCode, Json<GameCreated>) {
    let (game_id, game) = registry.create();
    let view = view(&game);
    (StatusCode::CREATED, Json(GameCreated { game_id, view }))
}

async fn create_custom_game(
    State(registry): State<AppState>,
    Json(payload): Json<CustomGamePayload>,
) -> Result<(StatusCode, Json<GameCreated>), ServerError> {
    let board = Board::from_placement(&payload.placement)?;
    board.validate()?;
    let turn = parse_turn(payload.current_turn.as_deref()).ok_or_else(|| {
        ServerError::InvalidColor {
            value: payload.current_turn.clone().unwrap_or_default(),
        }
    })?;

    let (game_id, game) = registry.create_from(board, turn);
    let view = view(&game);
    Ok((StatusCode::CREATED, Json(GameCreated { game_id, view })))
}

async fn board_state(
    State(registry): State<AppState>,
    Path(id): Path<GameId>,
) -> Result<Json<GameView>, ServerError> {
    let game = registry.get(id)?;
    Ok(Json(view(&game)))
}

async fn play_move(
    State(registry): State<AppState>,
    Path(id): Path<GameId>,
    Json(payload): Json<MovePayload>,
) -> Result<Json<MoveAccepted>, ServerError> {
    let game = registry.get(id)?;
    submit(&game, payload.into()).map(Json)
}

async fn reset_game(
    State(registry): State<AppState>,
    Path(id): Path<GameId>,
) -> Result<Json<GameView>, ServerError> {
    let game = registry.get(id)?;
    let mut game = lock_game(&game);
    game.reset();
    debug!(game_id = %id, "game reset");
    Ok(Json(GameView::of(&game)))
}

fn view(game: &SharedGame) -> GameView {
    GameView::of(&lock_game(game))
}

/// Play `request` on `game` while holding its lock for the whole validate-and-apply step.
fn submit(game: &SharedGame, request: MoveRequest) -> Result<MoveAccepted, ServerError> {
    let mut game = lock_game(game);
    game.submit(request)?;
    Ok(MoveAccepted::of(&game))
}

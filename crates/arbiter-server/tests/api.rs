//! HTTP API integration tests.
//!
//! Drives the router in-process with `tower::ServiceExt::oneshot`.

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use serde_json::{Value, json};
use tower::ServiceExt;

use arbiter_server::{ServerConfig, app};

fn test_router() -> Router {
    app(&ServerConfig::default())
}

async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let mut request = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(json) => {
            request = request.header("content-type", "application/json");
            Body::from(json.to_string())
        }
        None => Body::empty(),
    };

    let response = app
        .clone()
        .oneshot(request.body(body).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, value)
}

fn move_body(from: [i64; 2], to: [i64; 2]) -> Option<Value> {
    Some(json!({ "fromPosition": from, "toPosition": to }))
}

fn piece_count(board_state: &Value) -> usize {
    board_state
        .as_array()
        .unwrap()
        .iter()
        .flat_map(|row| row.as_array().unwrap())
        .filter(|square| !square.is_null())
        .count()
}

#[tokio::test]
async fn health_check() {
    let app = test_router();
    let response = app
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    assert_eq!(&bytes[..], b"ok");
}

#[tokio::test]
async fn start_position_board_state() {
    let app = test_router();
    let (status, body) = send(&app, "GET", "/board-state", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["currentTurn"], "white");
    assert_eq!(piece_count(&body["boardState"]), 32);
    assert_eq!(body["boardState"][0][4], json!({ "type": "king", "color": "black" }));
}

#[tokio::test]
async fn legal_move_updates_default_game() {
    let app = test_router();
    let (status, body) = send(&app, "POST", "/move", move_body([6, 4], [4, 4])).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["valid"], true);
    assert_eq!(body["currentTurn"], "black");
    assert!(body["boardState"][6][4].is_null());
    assert_eq!(body["boardState"][4][4], json!({ "type": "pawn", "color": "white" }));

    let (_, state) = send(&app, "GET", "/board-state", None).await;
    assert_eq!(state["currentTurn"], "black");
}

#[tokio::test]
async fn wrong_turn_is_rejected() {
    let app = test_router();
    let (status, body) = send(&app, "POST", "/move", move_body([1, 4], [3, 4])).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["valid"], false);
    assert!(body["message"].as_str().unwrap().contains("turn"));

    let (_, state) = send(&app, "GET", "/board-state", None).await;
    assert_eq!(state["currentTurn"], "white");
}

#[tokio::test]
async fn rejection_messages_distinguish_reasons() {
    let app = test_router();

    let (status, empty) = send(&app, "POST", "/move", move_body([4, 4], [3, 4])).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, shape) = send(&app, "POST", "/move", move_body([7, 0], [5, 0])).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, bounds) = send(&app, "POST", "/move", move_body([6, 4], [9, 4])).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    assert_eq!(empty["message"], "no piece at e4");
    assert_eq!(shape["message"], "white rook cannot move from a1 to a3");
    assert_eq!(bounds["message"], "position [9, 4] is outside the board");
}

#[tokio::test]
async fn malformed_body_never_reaches_the_game() {
    let app = test_router();
    let (status, _) = send(&app, "POST", "/move", Some(json!({ "from": "e2" }))).await;
    assert!(status.is_client_error());

    let (_, state) = send(&app, "GET", "/board-state", None).await;
    assert_eq!(state["currentTurn"], "white");
}

#[tokio::test]
async fn separate_games_are_isolated() {
    let app = test_router();

    let (status, first) = send(&app, "POST", "/games", None).await;
    assert_eq!(status, StatusCode::CREATED);
    let (_, second) = send(&app, "POST", "/games", None).await;

    let first_id = first["gameId"].as_str().unwrap().to_owned();
    let second_id = second["gameId"].as_str().unwrap().to_owned();
    assert_ne!(first_id, second_id);

    let (status, _) = send(
        &app,
        "POST",
        &format!("/games/{first_id}/move"),
        move_body([6, 3], [4, 3]),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (_, first_state) = send(&app, "GET", &format!("/games/{first_id}/board-state"), None).await;
    let (_, second_state) =
        send(&app, "GET", &format!("/games/{second_id}/board-state"), None).await;
    let (_, default_state) = send(&app, "GET", "/board-state", None).await;

    assert_eq!(first_state["currentTurn"], "black");
    assert_eq!(second_state["currentTurn"], "white");
    assert_eq!(default_state["currentTurn"], "white");
}

#[tokio::test]
async fn reset_restores_start_position() {
    let app = test_router();
    let (_, created) = send(&app, "POST", "/games", None).await;
    let id = created["gameId"].as_str().unwrap().to_owned();

    send(&app, "POST", &format!("/games/{id}/move"), move_body([7, 6], [5, 5])).await;
    let (status, body) = send(&app, "POST", &format!("/games/{id}/reset"), None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["currentTurn"], "white");
    assert_eq!(body["boardState"], created["boardState"]);
}

#[tokio::test]
async fn unknown_game_is_not_found() {
    let app = test_router();
    let uri = "/games/00000000-0000-0000-0000-000000000000/board-state";
    let (status, body) = send(&app, "GET", uri, None).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["valid"], false);
}

#[tokio::test]
async fn custom_position_game() {
    let app = test_router();
    let (status, created) = send(
        &app,
        "POST",
        "/games/custom",
        Some(json!({ "placement": "4k3/8/8/8/8/8/8/4K2R", "currentTurn": "white" })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(piece_count(&created["boardState"]), 3);
    let id = created["gameId"].as_str().unwrap().to_owned();

    let uri = format!("/games/{id}/move");
    let (status, body) = send(&app, "POST", &uri, move_body([7, 4], [7, 6])).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["boardState"][7][5], json!({ "type": "rook", "color": "white" }));
    assert_eq!(body["boardState"][7][6], json!({ "type": "king", "color": "white" }));
}

#[tokio::test]
async fn custom_position_king_off_home_cannot_castle() {
    let app = test_router();
    let (_, created) = send(
        &app,
        "POST",
        "/games/custom",
        Some(json!({ "placement": "4k3/8/8/8/8/8/8/5K1R" })),
    )
    .await;
    let id = created["gameId"].as_str().unwrap().to_owned();

    let uri = format!("/games/{id}/move");
    let (status, body) = send(&app, "POST", &uri, move_body([7, 5], [7, 7])).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body["message"],
        "castling not allowed: the king is not on its home square"
    );

    let (_, state) = send(&app, "GET", &format!("/games/{id}/board-state"), None).await;
    assert_eq!(piece_count(&state["boardState"]), 3);
    assert_eq!(state["boardState"][7][7], json!({ "type": "rook", "color": "white" }));
}

#[tokio::test]
async fn custom_position_must_be_playable() {
    let app = test_router();
    let (status, body) = send(
        &app,
        "POST",
        "/games/custom",
        Some(json!({ "placement": "8/8/8/8/8/8/8/4K3" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "invalid position: expected 1 king for black, found 0");

    let (status, _) = send(
        &app,
        "POST",
        "/games/custom",
        Some(json!({ "placement": "4k3/8/8/8/8/8/8/4K3", "currentTurn": "green" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

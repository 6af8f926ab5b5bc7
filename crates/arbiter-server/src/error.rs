//! Server errors and their HTTP mapping.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use arbiter_core::{BoardError, FenError, MoveError};

use crate::registry::GameId;
use crate::wire::Rejection;

/// Errors that can occur while handling a request or starting the server.
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    /// The game refused the move.
    #[error(transparent)]
    Move(#[from] MoveError),

    /// No game is registered under the requested id.
    #[error("game not found: {id}")]
    GameNotFound {
        /// The requested id.
        id: GameId,
    },

    /// A custom position could not be parsed.
    #[error("invalid placement: {0}")]
    InvalidPlacement(#[from] FenError),

    /// A custom position parsed but is not a playable board.
    #[error("invalid position: {0}")]
    InvalidPosition(#[from] BoardError),

    /// A side name other than "white" or "black".
    #[error("invalid color: {value}")]
    InvalidColor {
        /// The rejected name.
        value: String,
    },

    /// An environment variable held a value that could not be parsed.
    #[error("invalid value for {var}: {value}")]
    Config {
        /// Variable name.
        var: &'static str,
        /// The rejected value.
        value: String,
    },

    /// Binding or serving failed.
    #[error("I/O error: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },
}

impl ServerError {
    /// HTTP status for this error.
    pub fn status(&self) -> StatusCode {
        match self {
            ServerError::Move(_)
            | ServerError::InvalidPlacement(_)
            | ServerError::InvalidPosition(_)
            | ServerError::InvalidColor { .. } => StatusCode::BAD_REQUEST,
            ServerError::GameNotFound { .. } => StatusCode::NOT_FOUND,
            ServerError::Config { .. } | ServerError::Io { .. } => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let status = self.status();
        (status, Json(Rejection::new(self.to_string()))).into_response()
    }
}

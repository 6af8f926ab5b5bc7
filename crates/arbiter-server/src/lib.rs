//! HTTP/JSON front end for arbiter games.

pub mod config;
pub mod error;
pub mod registry;
pub mod routes;
pub mod wire;

use std::sync::Arc;

use tokio::net::TcpListener;
use tracing::info;

pub use config::ServerConfig;
pub use error::ServerError;
pub use registry::{GameId, GameRegistry};
pub use routes::{AppState, router};

/// Build the router with a fresh registry configured by `config`.
pub fn app(config: &ServerConfig) -> axum::Router {
    router(Arc::new(GameRegistry::new(config.game_config())))
}

/// Bind `config.bind_addr` and serve until the process exits.
pub async fn serve(config: ServerConfig) -> Result<(), ServerError> {
    let listener = TcpListener::bind(config.bind_addr).await?;
    info!(addr = %listener.local_addr()?, "listening");
    axum::serve(listener, app(&config)).await?;
    Ok(())
}

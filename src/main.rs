use anyhow::{Context, Result};
use tracing::info;
use tracing_subscriber::EnvFilter;

use arbiter_server::ServerConfig;

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let config = ServerConfig::from_env().context("failed to read server configuration")?;
    info!(
        addr = %config.bind_addr,
        promotion = %config.default_promotion.default_promotion(),
        "arbiter starting"
    );

    arbiter_server::serve(config)
        .await
        .context("server terminated")?;
    Ok(())
}

//! Server configuration from the environment.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use arbiter_core::{GameConfig, PieceKind, PromotionConfig};

use crate::error::ServerError;

/// Default listening port when neither `ARBITER_ADDR` nor `PORT` is set.
pub const DEFAULT_PORT: u16 = 5000;

/// Knobs read once at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServerConfig {
    /// Address the HTTP listener binds to.
    pub bind_addr: SocketAddr,
    /// Piece every promotion produces, in every game this server creates.
    pub default_promotion: PromotionConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::new(IpAddr::V4(Ipv4Addr::UNSPECIFIED), DEFAULT_PORT),
            default_promotion: PromotionConfig::default(),
        }
    }
}

impl ServerConfig {
    /// Read `ARBITER_ADDR`, `PORT` and `ARBITER_PROMOTION` from the process environment.
    ///
    /// `ARBITER_ADDR` (a full socket address) wins over `PORT`. Unset
    /// variables keep their defaults.
    pub fn from_env() -> Result<ServerConfig, ServerError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Same as [`from_env`](Self::from_env) with an explicit variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<ServerConfig, ServerError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = ServerConfig::default();

        if let Some(value) = lookup("ARBITER_ADDR") {
            config.bind_addr = value.trim().parse().map_err(|_| ServerError::Config {
                var: "ARBITER_ADDR",
                value,
            })?;
        } else if let Some(value) = lookup("PORT") {
            let port: u16 = value.trim().parse().map_err(|_| ServerError::Config {
                var: "PORT",
                value,
            })?;
            config.bind_addr.set_port(port);
        }

        if let Some(value) = lookup("ARBITER_PROMOTION") {
            config.default_promotion = PieceKind::from_name(value.trim())
                .and_then(PromotionConfig::new)
                .ok_or(ServerError::Config {
                    var: "ARBITER_PROMOTION",
                    value,
                })?;
        }

        Ok(config)
    }

    /// Rule options for games created under this configuration.
    pub fn game_config(&self) -> GameConfig {
        GameConfig {
            promotion: self.default_promotion,
        }
    }
}

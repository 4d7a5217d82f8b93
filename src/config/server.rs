//! Server configuration.
//!
//! Static service metadata plus the bind address, which can be overridden
//! with the `HOST` and `PORT` environment variables.

use std::env;

use log::warn;

/// Interface the HTTP server binds to when `HOST` is unset.
pub const DEFAULT_HOST: &str = "127.0.0.1";

/// Port the HTTP server binds to when `PORT` is unset or invalid.
pub const DEFAULT_PORT: u16 = 3001;

/// Name reported by `GET /info`.
pub const SERVICE_NAME: &str = "ee-2048-backend";

/// Version reported by `GET /info`.
pub const SERVICE_VERSION: &str = "1.0.0";

/// Resolved bind address for the HTTP server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    /// Read `HOST` and `PORT` from the environment, falling back to defaults.
    pub fn from_env() -> Self {
        Self::from_values(env::var("HOST").ok(), env::var("PORT").ok())
    }

    /// Build a config from optional raw values.
    /// A port that does not parse as `u16` is logged and replaced by the default.
    pub fn from_values(host: Option<String>, port: Option<String>) -> Self {
        let host = host
            .map(|h| h.trim().to_string())
            .filter(|h| !h.is_empty())
            .unwrap_or_else(|| DEFAULT_HOST.to_string());

        let port = match port {
            Some(raw) => match raw.trim().parse::<u16>() {
                Ok(port) => port,
                Err(_) => {
                    warn!("[Config] Invalid PORT value '{}', falling back to {}", raw, DEFAULT_PORT);
                    DEFAULT_PORT
                }
            },
            None => DEFAULT_PORT,
        };

        ServerConfig { host, port }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        ServerConfig {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
        }
    }
}

// src/server/state.rs

//! Application state for the backend server.
//!
//! Holds the static service metadata reported by `/info`. Nothing here
//! touches game state; the engine runs entirely on the client.

use serde::{Serialize, Deserialize};

use crate::config::server::{SERVICE_NAME, SERVICE_VERSION};

/// Name and version of the running service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceInfo {
    pub name: String,
    pub version: String,
}

/// Shared application state, injected into HTTP handlers.
pub struct AppState {
    pub service: ServiceInfo,
}

impl AppState {
    /// Create a new AppState reporting the given name and version.
    pub fn new(name: &str, version: &str) -> Self {
        AppState {
            service: ServiceInfo {
                name: name.to_string(),
                version: version.to_string(),
            },
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        AppState::new(SERVICE_NAME, SERVICE_VERSION)
    }
}

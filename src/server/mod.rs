// src/server/mod.rs

//! Server layer root module.
//!
//! This module organizes the backend HTTP components:
//! - Application state (static service metadata)
//! - Routing and handlers for `/health` and `/info`
//! - JSON error responses

pub mod state;
pub mod router;
pub mod handlers;
pub mod http_error;

#[cfg(test)]
mod tests;

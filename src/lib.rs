//! 2048 on a square grid: a pure transition engine, a terminal front end
//! and a small HTTP service reporting health and version.

pub mod config;
pub mod game;
pub mod server;

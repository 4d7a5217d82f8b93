//! Grid engine for 2048.
//!
//! The engine is a set of pure transitions over [`GameState`]. Randomness
//! is always passed in as a `FnMut() -> f64` yielding values in `[0, 1)`;
//! the `new_game` / `play` / `restart_game` helpers supply the thread-local
//! generator for callers that do not care about reproducibility.

pub mod types;
pub mod state;
pub mod rng;
pub mod grid;
pub mod systems;
pub mod demo;


pub use state::GameState;
pub use types::{Direction, GameStatus, Grid, ParseDirectionError, Position};

use rng::thread_source;

/// Build a fresh board with two tiles.
pub fn initialize<R: FnMut() -> f64>(size: usize, rng: R) -> GameState {
    GameState::new(size, rng)
}

/// Apply one move. See [`GameState::advance`].
pub fn step<R: FnMut() -> f64>(state: &GameState, direction: Direction, rng: R) -> GameState {
    state.advance(direction, rng)
}

/// Start over. Same algorithm as [`initialize`]; a separate entry point for
/// the player's "new game" action.
pub fn restart<R: FnMut() -> f64>(size: usize, rng: R) -> GameState {
    initialize(size, rng)
}

pub fn new_game(size: usize) -> GameState {
    initialize(size, thread_source())
}

pub fn play(state: &GameState, direction: Direction) -> GameState {
    step(state, direction, thread_source())
}

pub fn restart_game(size: usize) -> GameState {
    restart(size, thread_source())
}

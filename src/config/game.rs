/// Game configuration constants.
///
/// This module defines the board dimensions offered to players and the
/// tile rules used by the engine.

/// Board dimension used when the caller does not pick one.
pub const DEFAULT_GRID_SIZE: usize = 4;

/// Smallest board a player can choose.
pub const MIN_GRID_SIZE: usize = 3;

/// Largest board a player can choose.
pub const MAX_GRID_SIZE: usize = 8;

/// Reaching this tile wins the game.
pub const WINNING_TILE: u32 = 2048;

/// Probability that a spawned tile is a 2 (otherwise a 4).
pub const TWO_TILE_PROBABILITY: f64 = 0.9;

/// Number of tiles placed on a fresh board.
pub const INITIAL_TILES: usize = 2;

/// Bound a caller-supplied board size to the supported range.
///
/// The engine trusts its `size` argument, so callers that take sizes from
/// users go through this first.
pub fn clamp_grid_size(size: usize) -> usize {
    size.clamp(MIN_GRID_SIZE, MAX_GRID_SIZE)
}

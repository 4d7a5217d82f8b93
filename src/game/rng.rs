//! Randomness sources for the engine.
//!
//! The engine never owns a generator. Every operation that places tiles
//! takes a `FnMut() -> f64` returning a uniform value in `[0, 1)`, so games
//! replay exactly when the same draws are supplied.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Production source backed by the thread-local generator.
pub fn thread_source() -> impl FnMut() -> f64 {
    let mut rng = rand::rng();
    move || rng.random::<f64>()
}

/// Reproducible source: the same seed always yields the same game.
pub fn seeded_source(seed: u64) -> impl FnMut() -> f64 {
    let mut rng = StdRng::seed_from_u64(seed);
    move || rng.random::<f64>()
}

/// Replays `values` in order, wrapping around at the end.
/// An empty sequence always yields `0.0`.
pub fn sequence_source(values: Vec<f64>) -> impl FnMut() -> f64 {
    let mut index = 0;
    move || {
        if values.is_empty() {
            return 0.0;
        }
        let value = values[index % values.len()];
        index += 1;
        value
    }
}

//! Standalone entry point for playing 2048 in the terminal.
//!
//! Usage: `play [size] [seed]`. The size is clamped to the supported range;
//! a seed makes the tile sequence reproducible.

use std::env;

use log::info;

use ee_2048::config::game::{clamp_grid_size, DEFAULT_GRID_SIZE};
use ee_2048::game::demo::game_loop::run_game_loop;
use ee_2048::game::rng::{seeded_source, thread_source};

fn main() -> std::io::Result<()> {
    env_logger::init();

    let mut args = env::args().skip(1);
    let size = args
        .next()
        .and_then(|arg| arg.parse::<usize>().ok())
        .map(clamp_grid_size)
        .unwrap_or(DEFAULT_GRID_SIZE);
    let seed = args.next().and_then(|arg| arg.parse::<u64>().ok());

    match seed {
        Some(seed) => {
            info!("[Play] Seeded game: size={} seed={}", size, seed);
            run_game_loop(size, seeded_source(seed))
        }
        None => run_game_loop(size, thread_source()),
    }
}

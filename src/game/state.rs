use serde::{Serialize, Deserialize};

use crate::config::game::{INITIAL_TILES, WINNING_TILE};
use crate::game::types::{Direction, GameStatus, Grid};
use crate::game::grid::{create_empty_grid, max_tile, tile_count};
use crate::game::systems::{has_moves, has_won, move_grid, spawn_random_tile};

/// Snapshot of a game. Transitions never mutate a snapshot; they return a
/// new one, so earlier states stay valid for whoever still holds them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    pub grid: Grid,
    pub score: u64,
    pub won: bool,
    pub over: bool,
    pub size: usize,
}

impl GameState {
    /// Fresh `size`×`size` board with two spawned tiles.
    ///
    /// `size` is not validated here; see `config::game::clamp_grid_size`.
    pub fn new<R: FnMut() -> f64>(size: usize, mut rng: R) -> Self {
        let mut grid = create_empty_grid(size);
        for _ in 0..INITIAL_TILES {
            spawn_random_tile(&mut grid, &mut rng);
        }

        GameState {
            grid,
            score: 0,
            won: false,
            over: false,
            size,
        }
    }

    /// Won or over. Terminal states ignore further moves.
    pub fn is_terminal(&self) -> bool {
        self.won || self.over
    }

    /// Apply one move and return the resulting state.
    ///
    /// A terminal state, or a move that leaves the board unchanged, yields a
    /// copy of `self` without drawing from `rng`. Otherwise one tile is
    /// spawned, merge points are added to the score and the terminal flags
    /// are recomputed. Winning also ends the game.
    pub fn advance<R: FnMut() -> f64>(&self, direction: Direction, mut rng: R) -> GameState {
        if self.is_terminal() {
            return self.clone();
        }

        let (mut grid, gained) = move_grid(&self.grid, direction);
        if grid == self.grid {
            return self.clone();
        }

        spawn_random_tile(&mut grid, &mut rng);
        let won = self.won || has_won(&grid);
        let over = won || !has_moves(&grid);

        GameState {
            grid,
            score: self.score + gained,
            won,
            over,
            size: self.size,
        }
    }

    pub fn status(&self) -> GameStatus {
        match (self.won, self.over) {
            (false, false) => GameStatus::Active,
            (true, false) => GameStatus::Won,
            (false, true) => GameStatus::Over,
            (true, true) => GameStatus::WonAndOver,
        }
    }

    /// Banner text for the current status, empty while the game is active.
    pub fn status_message(&self) -> String {
        if self.won {
            format!("You reached {}!", WINNING_TILE)
        } else if self.over {
            "No more moves.".to_string()
        } else {
            String::new()
        }
    }

    pub fn max_tile(&self) -> u32 {
        max_tile(&self.grid)
    }

    pub fn tile_count(&self) -> usize {
        tile_count(&self.grid)
    }
}

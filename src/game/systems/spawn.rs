//! Tile spawning.

use crate::config::game::TWO_TILE_PROBABILITY;
use crate::game::types::{Grid, Position};
use crate::game::grid::empty_cells;

/// Place a 2 or a 4 on a random empty cell.
///
/// Draws twice from `rng`: the first draw picks the cell among the empty
/// cells in row-major order, the second picks the value. A full board is
/// left untouched and consumes no draws.
pub fn spawn_random_tile<R: FnMut() -> f64>(grid: &mut Grid, rng: &mut R) -> Option<Position> {
    let empties = empty_cells(grid);
    if empties.is_empty() {
        return None;
    }

    let index = ((rng() * empties.len() as f64).floor() as usize).min(empties.len() - 1);
    let pos = empties[index];
    let value = if rng() < TWO_TILE_PROBABILITY { 2 } else { 4 };

    grid[pos.row][pos.col] = value;
    Some(pos)
}

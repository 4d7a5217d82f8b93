//! Slide and merge system.
//!
//! Every direction is reduced to "slide left": the board is reoriented so
//! the chosen direction points at the start of each row, rows are
//! compacted and merged independently, and the board is turned back.

use crate::game::types::{Direction, Grid};
use crate::game::grid::{reverse_rows, transpose};

/// Slide one line toward its start and merge equal neighbours.
///
/// Merging is a single pass: a tile produced by a merge never merges again
/// during the same move. Returns the new line (same length) and the sum of
/// the merged tiles.
pub fn slide_and_merge_line(line: &[u32]) -> (Vec<u32>, u64) {
    let tiles: Vec<u32> = line.iter().copied().filter(|&value| value != 0).collect();
    let mut merged = Vec::with_capacity(line.len());
    let mut gained = 0u64;

    let mut i = 0;
    while i < tiles.len() {
        if i + 1 < tiles.len() && tiles[i] == tiles[i + 1] {
            let sum = tiles[i] + tiles[i + 1];
            merged.push(sum);
            gained += u64::from(sum);
            i += 2;
        } else {
            merged.push(tiles[i]);
            i += 1;
        }
    }

    merged.resize(line.len(), 0);
    (merged, gained)
}

/// Turn the board so that `direction` becomes a slide to the left.
fn normalize(grid: &Grid, direction: Direction) -> Grid {
    match direction {
        Direction::Left => grid.clone(),
        Direction::Right => reverse_rows(grid),
        Direction::Up => transpose(grid),
        Direction::Down => reverse_rows(&transpose(grid)),
    }
}

/// Inverse of [`normalize`].
fn restore(grid: &Grid, direction: Direction) -> Grid {
    match direction {
        Direction::Left => grid.clone(),
        Direction::Right => reverse_rows(grid),
        Direction::Up => transpose(grid),
        Direction::Down => transpose(&reverse_rows(grid)),
    }
}

/// Apply a move to the whole board without spawning.
/// Returns the moved board and the score gained from merges.
pub fn move_grid(grid: &Grid, direction: Direction) -> (Grid, u64) {
    let mut gained = 0u64;
    let moved: Grid = normalize(grid, direction)
        .iter()
        .map(|row| {
            let (line, line_gain) = slide_and_merge_line(row);
            gained += line_gain;
            line
        })
        .collect();

    (restore(&moved, direction), gained)
}

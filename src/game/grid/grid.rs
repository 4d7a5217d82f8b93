//! Board construction and read-only queries.

use crate::game::types::{Grid, Position};

pub fn create_empty_grid(size: usize) -> Grid {
    vec![vec![0; size]; size]
}

/// Empty cells in row-major scan order.
pub fn empty_cells(grid: &Grid) -> Vec<Position> {
    grid.iter().enumerate()
        .flat_map(|(row, cells)| cells.iter().enumerate().filter_map(move |(col, value)| {
            if *value == 0 {
                Some(Position { row, col })
            } else {
                None
            }
        }))
        .collect()
}

/// Number of occupied cells.
pub fn tile_count(grid: &Grid) -> usize {
    grid.iter().flatten().filter(|&&value| value != 0).count()
}

pub fn max_tile(grid: &Grid) -> u32 {
    grid.iter().flatten().copied().max().unwrap_or(0)
}

pub fn contains_tile(grid: &Grid, value: u32) -> bool {
    grid.iter().flatten().any(|&cell| cell == value)
}

pub fn transpose(grid: &Grid) -> Grid {
    let size = grid.len();
    (0..size)
        .map(|row| (0..size).map(|col| grid[col][row]).collect())
        .collect()
}

pub fn reverse_rows(grid: &Grid) -> Grid {
    grid.iter()
        .map(|row| row.iter().rev().copied().collect())
        .collect()
}

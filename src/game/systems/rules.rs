use crate::config::game::WINNING_TILE;
use crate::game::types::Grid;
use crate::game::grid::contains_tile;

/// Whether any move is still possible: an empty cell, or two equal
/// horizontally or vertically adjacent tiles.
pub fn has_moves(grid: &Grid) -> bool {
    let size = grid.len();
    for row in 0..size {
        for col in 0..grid[row].len() {
            let value = grid[row][col];
            if value == 0 {
                return true;
            }
            if row + 1 < size && grid[row + 1][col] == value {
                return true;
            }
            if col + 1 < grid[row].len() && grid[row][col + 1] == value {
                return true;
            }
        }
    }
    false
}

pub fn has_won(grid: &Grid) -> bool {
    contains_tile(grid, WINNING_TILE)
}

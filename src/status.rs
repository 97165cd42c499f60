use crate::grid::{merged_value, Grid, Tile};

/// True if any cell holds `target`.
pub fn is_victory(grid: &Grid, target: Tile) -> bool {
    grid.rows().any(|row| row.contains(&target))
}

/// True once the grid is full and no two neighbouring cells are equal.
///
/// Only the free-slot counter decides whether the grid is full: a single free
/// cell means the game goes on, without looking ahead at what the next move
/// could do.
pub fn is_defeat(grid: &Grid) -> bool {
    if grid.count_free() != 0 {
        return false;
    }
    let size = grid.size();
    for row in 0..size {
        for col in 0..size {
            let val = grid.at((row, col));
            let right = col + 1 < size && merged_value(val, grid.at((row, col + 1))).is_some();
            let down = row + 1 < size && merged_value(val, grid.at((row + 1, col))).is_some();
            if right || down {
                return false;
            }
        }
    }
    true
}

#[inline]
pub fn is_game_over(grid: &Grid, target: Tile) -> bool {
    is_victory(grid, target) || is_defeat(grid)
}

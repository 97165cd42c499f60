//! Single-line slide-and-merge.
//!
//! Every direction reduces to the same pass over a [`LineView`]: the view
//! orders one row or column so that index 0 is the edge tiles travel toward.

use log::trace;

use crate::grid::{merged_value, Grid, Pos};
use crate::moves::Move;

/// One row or column of the grid, ordered front to back for a direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineView {
    size: usize,
    index: usize,
    dir: Move,
}

impl LineView {
    /// The line `index` (a row for Left/Right, a column for Up/Down) of a
    /// `size` x `size` grid, ordered so that tiles slide toward position 0.
    ///
    /// ```
    /// use tile_merge::line::LineView;
    /// use tile_merge::moves::Move;
    /// let right = LineView::new(4, Move::Right, 1);
    /// assert_eq!(right.cells().collect::<Vec<_>>(), vec![(1, 3), (1, 2), (1, 1), (1, 0)]);
    /// let up = LineView::new(4, Move::Up, 2);
    /// assert_eq!(up.cell(0), (0, 2));
    /// ```
    pub fn new(size: usize, dir: Move, index: usize) -> Self {
        assert!(index < size, "line {index} outside a {size}x{size} grid");
        LineView { size, index, dir }
    }

    #[inline]
    pub(crate) fn len(&self) -> usize { self.size }

    /// Grid coordinate of the `i`-th cell from the front.
    #[inline]
    pub fn cell(&self, i: usize) -> Pos {
        debug_assert!(i < self.size);
        let far = self.size - 1 - i;
        match self.dir {
            Move::Left => (self.index, i),
            Move::Right => (self.index, far),
            Move::Up => (i, self.index),
            Move::Down => (far, self.index),
        }
    }

    pub fn cells(&self) -> impl Iterator<Item = Pos> + '_ {
        (0..self.size).map(move |i| self.cell(i))
    }
}

/// Slide and merge the tiles of `line` toward its front.
///
/// Tiles are first packed against the front in their original order. Then
/// each pair of equal neighbours is merged into the front cell and the rest
/// of the line closes the gap; a merged tile is not compared again, so no
/// tile merges twice in one pass. Each merge frees one slot on the grid.
/// Tiles already at [`MAX_TILE`](crate::grid::MAX_TILE) stay unmerged.
///
/// Returns true if any tile moved or merged.
pub fn slide_line(grid: &mut Grid, line: &LineView) -> bool {
    let len = line.len();
    let mut moved = false;

    let mut cursor = 0;
    for i in 0..len {
        let val = grid.at(line.cell(i));
        if val != 0 {
            if i != cursor {
                grid.put(line.cell(cursor), val);
                grid.put(line.cell(i), 0);
                moved = true;
            }
            cursor += 1;
        }
    }

    // Only the packed prefix can hold equal neighbours.
    for i in 0..cursor.saturating_sub(1) {
        let front = grid.at(line.cell(i));
        let next = grid.at(line.cell(i + 1));
        if let Some(merged) = merged_value(front, next) {
            grid.put(line.cell(i), merged);
            grid.release_slot();
            for j in i + 1..len - 1 {
                let behind = grid.at(line.cell(j + 1));
                grid.put(line.cell(j), behind);
            }
            grid.put(line.cell(len - 1), 0);
            moved = true;
        }
    }

    if moved {
        trace!("line {:?} changed", line);
    }
    moved
}

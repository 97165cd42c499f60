use std::fmt;

/// A cell value: 0 for an empty slot, otherwise a power of two >= 2.
pub type Tile = u32;

/// A (row, column) coordinate on the grid.
pub type Pos = (usize, usize);

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    #[error("cell ({row}, {col}) is outside a {size}x{size} grid")]
    OutOfRange { row: usize, col: usize, size: usize },
    #[error("grid size must be at least 1")]
    InvalidSize,
    #[error("rows do not form a square grid")]
    InvalidShape,
    #[error("{0} is not a valid tile (expected 0 or a power of two >= 2)")]
    InvalidTile(Tile),
    #[error("{0} is not a valid target (expected a power of two >= 2)")]
    InvalidTarget(Tile),
}

/// Square n x n grid of tiles stored row-major, plus the number of free slots.
///
/// `free_slots` is maintained incrementally by the transforms that empty or
/// fill cells (merges and spawns); [`Grid::set`] never touches it.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Grid {
    size: usize,
    cells: Vec<Tile>,
    free_slots: usize,
}

impl Grid {
    /// Create an all-empty `size` x `size` grid.
    ///
    /// ```
    /// use tile_merge::grid::Grid;
    /// let g = Grid::new(4).unwrap();
    /// assert_eq!(g.count_free(), 16);
    /// ```
    pub fn new(size: usize) -> Result<Self, GridError> {
        if size == 0 {
            return Err(GridError::InvalidSize);
        }
        Ok(Grid { size, cells: vec![0; size * size], free_slots: size * size })
    }

    /// Build a grid from explicit rows. The free-slot counter is computed once by scanning.
    ///
    /// ```
    /// use tile_merge::grid::Grid;
    /// let g = Grid::from_rows(&[[2, 0], [0, 4]]).unwrap();
    /// assert_eq!(g.get(1, 1), Ok(4));
    /// assert_eq!(g.count_free(), 2);
    /// ```
    pub fn from_rows<R: AsRef<[Tile]>>(rows: &[R]) -> Result<Self, GridError> {
        let size = rows.len();
        if size == 0 {
            return Err(GridError::InvalidSize);
        }
        let mut cells = Vec::with_capacity(size * size);
        for row in rows {
            let row = row.as_ref();
            if row.len() != size {
                return Err(GridError::InvalidShape);
            }
            if let Some(&bad) = row.iter().find(|&&v| !is_valid_tile(v)) {
                return Err(GridError::InvalidTile(bad));
            }
            cells.extend_from_slice(row);
        }
        let free_slots = cells.iter().filter(|&&v| v == 0).count();
        Ok(Grid { size, cells, free_slots })
    }

    /// Side length `n` of the grid.
    #[inline]
    pub fn size(&self) -> usize { self.size }

    #[inline]
    pub fn get(&self, row: usize, col: usize) -> Result<Tile, GridError> {
        self.check(row, col)?;
        Ok(self.cells[row * self.size + col])
    }

    /// Write `value` at (row, col). Does not adjust the free-slot counter.
    #[inline]
    pub fn set(&mut self, row: usize, col: usize, value: Tile) -> Result<(), GridError> {
        self.check(row, col)?;
        self.cells[row * self.size + col] = value;
        Ok(())
    }

    #[inline]
    pub fn is_empty(&self, row: usize, col: usize) -> Result<bool, GridError> {
        self.get(row, col).map(|v| v == 0)
    }

    /// Number of empty cells, read from the maintained counter (O(1)).
    #[inline]
    pub fn count_free(&self) -> usize { self.free_slots }

    /// Number of empty cells, counted by scanning every cell.
    pub fn recount_free(&self) -> usize {
        self.cells.iter().filter(|&&v| v == 0).count()
    }

    /// Coordinates of every empty cell, row-major.
    pub fn empty_cells(&self) -> Vec<Pos> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, &v)| v == 0)
            .map(|(idx, _)| (idx / self.size, idx % self.size))
            .collect()
    }

    /// Iterate over the rows as slices, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Tile]> + '_ {
        self.cells.chunks(self.size)
    }

    /// Highest tile value on the grid (0 if empty).
    pub fn highest_tile(&self) -> Tile {
        self.cells.iter().copied().max().unwrap_or(0)
    }

    /// Sum of all tile values.
    pub fn tile_sum(&self) -> u64 {
        self.cells.iter().map(|&v| u64::from(v)).sum()
    }

    // Unchecked-by-Result access for transforms that only build in-range
    // coordinates. An out-of-range position here is a bug and panics.
    #[inline(always)]
    pub(crate) fn at(&self, (row, col): Pos) -> Tile {
        debug_assert!(row < self.size && col < self.size);
        self.cells[row * self.size + col]
    }

    #[inline(always)]
    pub(crate) fn put(&mut self, (row, col): Pos, value: Tile) {
        debug_assert!(row < self.size && col < self.size);
        self.cells[row * self.size + col] = value;
    }

    /// A tile disappeared (merge).
    #[inline]
    pub(crate) fn release_slot(&mut self) {
        self.free_slots += 1;
    }

    /// An empty cell was filled (spawn).
    #[inline]
    pub(crate) fn claim_slot(&mut self) {
        debug_assert!(self.free_slots > 0);
        self.free_slots -= 1;
    }

    fn check(&self, row: usize, col: usize) -> Result<(), GridError> {
        if row < self.size && col < self.size {
            Ok(())
        } else {
            Err(GridError::OutOfRange { row, col, size: self.size })
        }
    }
}

/// Largest tile a `Tile` can hold. Tiles of this value no longer merge.
pub const MAX_TILE: Tile = 1 << (Tile::BITS - 1);

/// True for 0 and for powers of two >= 2.
#[inline]
pub fn is_valid_tile(value: Tile) -> bool {
    value == 0 || (value >= 2 && value.is_power_of_two())
}

/// Value of the tile formed by merging `a` into `b`, if they can merge.
///
/// ```
/// use tile_merge::grid::{merged_value, MAX_TILE};
/// assert_eq!(merged_value(4, 4), Some(8));
/// assert_eq!(merged_value(4, 8), None);
/// assert_eq!(merged_value(0, 0), None);
/// assert_eq!(merged_value(MAX_TILE, MAX_TILE), None);
/// ```
#[inline]
pub fn merged_value(a: Tile, b: Tile) -> Option<Tile> {
    if a != 0 && a == b { a.checked_mul(2) } else { None }
}

impl fmt::Debug for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Grid")
            .field("size", &self.size)
            .field("free_slots", &self.free_slots)
            .field("cells", &self.rows().collect::<Vec<_>>())
            .finish()
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = self.highest_tile().to_string().len().max(1) + 2;
        let rule = "-".repeat((width + 1) * self.size - 1);
        for (idx, row) in self.rows().enumerate() {
            if idx > 0 {
                writeln!(f, "{}", rule)?;
            }
            let line: Vec<String> = row.iter().map(|&v| format_val(v, width)).collect();
            writeln!(f, "{}", line.join("|"))?;
        }
        Ok(())
    }
}

fn format_val(val: Tile, width: usize) -> String {
    match val {
        0 => format!("{:^width$}", ".", width = width),
        x => format!("{:^width$}", x, width = width),
    }
}

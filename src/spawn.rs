use log::debug;
use rand::Rng;

use crate::grid::{Grid, Tile};

/// Source of randomness for tile spawning.
///
/// Every [`rand::Rng`] is a `TileSource`; tests can supply a scripted one to
/// pin down exact placements and values.
pub trait TileSource {
    /// A uniformly chosen index in `0..bound`. `bound` is never 0.
    fn pick_slot(&mut self, bound: usize) -> usize;

    /// A fair coin flip.
    fn coin(&mut self) -> bool;
}

impl<R: Rng + ?Sized> TileSource for R {
    #[inline]
    fn pick_slot(&mut self, bound: usize) -> usize {
        self.gen_range(0..bound)
    }

    #[inline]
    fn coin(&mut self) -> bool {
        self.gen_bool(0.5)
    }
}

/// A tile placed by [`spawn`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Spawned {
    pub row: usize,
    pub col: usize,
    pub value: Tile,
}

/// Place a 2 or a 4 (even odds) on a uniformly chosen empty cell.
///
/// The value is drawn before the cell. Returns `None` and leaves the grid
/// alone when there is no free slot.
///
/// ```
/// use tile_merge::grid::Grid;
/// use tile_merge::spawn::spawn;
/// use rand::{rngs::StdRng, SeedableRng};
/// let mut rng = StdRng::seed_from_u64(7);
/// let mut g = Grid::new(4).unwrap();
/// let tile = spawn(&mut g, &mut rng).unwrap();
/// assert!(tile.value == 2 || tile.value == 4);
/// assert_eq!(g.count_free(), 15);
/// ```
pub fn spawn<S: TileSource + ?Sized>(grid: &mut Grid, source: &mut S) -> Option<Spawned> {
    if grid.count_free() == 0 {
        return None;
    }
    let empty = grid.empty_cells();
    debug_assert_eq!(empty.len(), grid.count_free());

    let value = generate_random_tile(source);
    let (row, col) = empty[source.pick_slot(empty.len())];
    grid.put((row, col), value);
    grid.claim_slot();
    debug!("spawned {} at ({}, {})", value, row, col);
    Some(Spawned { row, col, value })
}

#[inline]
fn generate_random_tile<S: TileSource + ?Sized>(source: &mut S) -> Tile {
    (u32::from(source.coin()) + 1) * 2
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};
    use std::collections::VecDeque;

    /// Replays fixed draws: slots are reduced modulo the bound.
    pub(crate) struct Scripted {
        pub slots: VecDeque<usize>,
        pub coins: VecDeque<bool>,
    }

    impl Scripted {
        pub(crate) fn new(slots: &[usize], coins: &[bool]) -> Self {
            Scripted { slots: slots.iter().copied().collect(), coins: coins.iter().copied().collect() }
        }
    }

    impl TileSource for Scripted {
        fn pick_slot(&mut self, bound: usize) -> usize {
            self.slots.pop_front().unwrap_or(0) % bound
        }

        fn coin(&mut self) -> bool {
            self.coins.pop_front().unwrap_or(false)
        }
    }

    #[test]
    fn it_fills_the_only_empty_cell() {
        let mut g = Grid::from_rows(&[[2, 4], [0, 8]]).unwrap();
        let mut rng = StdRng::seed_from_u64(3);
        let tile = spawn(&mut g, &mut rng).unwrap();
        assert_eq!((tile.row, tile.col), (1, 0));
        assert_eq!(g.get(1, 0), Ok(tile.value));
        assert_eq!(g.count_free(), 0);
        assert_eq!(g.recount_free(), 0);
    }

    #[test]
    fn it_is_a_noop_on_full_grid() {
        let mut g = Grid::from_rows(&[[2, 4], [4, 2]]).unwrap();
        let before = g.clone();
        assert_eq!(spawn(&mut g, &mut Scripted::new(&[], &[])), None);
        assert_eq!(g, before);
    }

    #[test]
    fn it_follows_the_source() {
        let mut g = Grid::new(3).unwrap();
        let mut src = Scripted::new(&[4, 0, 6], &[false, true, true]);
        assert_eq!(spawn(&mut g, &mut src), Some(Spawned { row: 1, col: 1, value: 2 }));
        assert_eq!(spawn(&mut g, &mut src), Some(Spawned { row: 0, col: 0, value: 4 }));
        // 7 empty cells left: (0,1) (0,2) (1,0) (1,2) (2,0) (2,1) (2,2)
        assert_eq!(spawn(&mut g, &mut src), Some(Spawned { row: 2, col: 2, value: 4 }));
        assert_eq!(g.count_free(), 6);
        assert_eq!(g.tile_sum(), 10);
    }

    #[test]
    fn it_fills_the_grid() {
        let mut g = Grid::new(4).unwrap();
        let mut rng = StdRng::seed_from_u64(11);
        for left in (0..16).rev() {
            let tile = spawn(&mut g, &mut rng).unwrap();
            assert!(tile.value == 2 || tile.value == 4);
            assert_eq!(g.count_free(), left);
            assert_eq!(g.recount_free(), left);
        }
        assert_eq!(spawn(&mut g, &mut rng), None);
    }

    #[test]
    fn it_spawns_both_values() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut seen = [false; 2];
        for _ in 0..64 {
            let mut g = Grid::new(2).unwrap();
            let tile = spawn(&mut g, &mut rng).unwrap();
            seen[(tile.value / 4) as usize] = true;
        }
        assert_eq!(seen, [true, true]);
    }
}

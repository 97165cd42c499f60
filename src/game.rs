use std::fmt;

use crate::grid::{Grid, GridError, Tile};
use crate::moves::{self, Move};
use crate::spawn::{self, Spawned, TileSource};
use crate::status;

/// Grid plus the tile value that wins the game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    grid: Grid,
    target: Tile,
}

impl Game {
    /// An empty `size` x `size` game won by reaching `target`.
    ///
    /// ```
    /// use tile_merge::game::Game;
    /// let game = Game::new(4, 2048).unwrap();
    /// assert_eq!(game.grid().count_free(), 16);
    /// assert!(Game::new(4, 1000).is_err());
    /// ```
    pub fn new(size: usize, target: Tile) -> Result<Self, GridError> {
        Game::from_grid(Grid::new(size)?, target)
    }

    pub fn from_grid(grid: Grid, target: Tile) -> Result<Self, GridError> {
        if target < 2 || !target.is_power_of_two() {
            return Err(GridError::InvalidTarget(target));
        }
        Ok(Game { grid, target })
    }

    #[inline]
    pub fn grid(&self) -> &Grid { &self.grid }

    #[inline]
    pub fn size(&self) -> usize { self.grid.size() }

    #[inline]
    pub fn target(&self) -> Tile { self.target }

    /// Slide/merge tiles toward `dir` without spawning. Returns true if anything moved.
    #[inline]
    pub fn shift(&mut self, dir: Move) -> bool {
        moves::apply(&mut self.grid, dir)
    }

    /// Place a random tile on a free cell, if any.
    #[inline]
    pub fn spawn<S: TileSource + ?Sized>(&mut self, source: &mut S) -> Option<Spawned> {
        spawn::spawn(&mut self.grid, source)
    }

    /// Shift, then spawn a tile only if the shift changed the grid.
    ///
    /// ```
    /// use tile_merge::game::Game;
    /// use tile_merge::grid::Grid;
    /// use tile_merge::moves::Move;
    /// use rand::{rngs::StdRng, SeedableRng};
    /// let mut rng = StdRng::seed_from_u64(1);
    /// let mut game = Game::from_grid(Grid::from_rows(&[[2, 0], [0, 0]]).unwrap(), 2048).unwrap();
    /// assert!(!game.make_move(Move::Left, &mut rng));
    /// assert_eq!(game.grid().count_free(), 3);
    /// assert!(game.make_move(Move::Right, &mut rng));
    /// assert_eq!(game.grid().count_free(), 2);
    /// ```
    pub fn make_move<S: TileSource + ?Sized>(&mut self, dir: Move, source: &mut S) -> bool {
        let moved = self.shift(dir);
        if moved {
            self.spawn(source);
        }
        moved
    }

    #[inline]
    pub fn is_victory(&self) -> bool { status::is_victory(&self.grid, self.target) }

    #[inline]
    pub fn is_defeat(&self) -> bool { status::is_defeat(&self.grid) }

    #[inline]
    pub fn is_game_over(&self) -> bool { status::is_game_over(&self.grid, self.target) }
}

impl fmt::Display for Game {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.grid, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spawn::tests::Scripted;
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn it_rejects_bad_targets() {
        assert_eq!(Game::new(4, 0), Err(GridError::InvalidTarget(0)));
        assert_eq!(Game::new(4, 1), Err(GridError::InvalidTarget(1)));
        assert_eq!(Game::new(4, 100), Err(GridError::InvalidTarget(100)));
        assert_eq!(Game::new(0, 2048), Err(GridError::InvalidSize));
        assert!(Game::new(3, 256).is_ok());
    }

    #[test]
    fn it_spawns_only_after_a_real_move() {
        let grid = Grid::from_rows(&[[2, 4, 8, 16], [0, 0, 0, 0], [0, 0, 0, 0], [0, 0, 0, 0]]).unwrap();
        let mut game = Game::from_grid(grid, 2048).unwrap();
        let before = game.clone();
        let mut src = Scripted::new(&[0], &[false]);
        assert!(!game.make_move(Move::Left, &mut src));
        assert_eq!(game, before);

        assert!(game.make_move(Move::Down, &mut src));
        // Tiles land on the bottom row; the first free cell is (0, 0)
        assert_eq!(game.grid().get(0, 0), Ok(2));
        assert_eq!(game.grid().get(3, 3), Ok(16));
        assert_eq!(game.grid().count_free(), 11);
    }

    #[test]
    fn it_keeps_free_count_in_sync() {
        let mut rng = StdRng::seed_from_u64(2024);
        let mut game = Game::new(4, 2048).unwrap();
        game.spawn(&mut rng);
        game.spawn(&mut rng);
        for i in 0..500 {
            let dir = Move::ALL[i % 4];
            let sum = game.grid().tile_sum();
            let moved = game.shift(dir);
            assert_eq!(game.grid().tile_sum(), sum);
            if moved {
                let tile = game.spawn(&mut rng).unwrap();
                assert_eq!(game.grid().tile_sum(), sum + u64::from(tile.value));
            }
            assert_eq!(game.grid().count_free(), game.grid().recount_free());
            if game.is_game_over() {
                break;
            }
        }
    }

    #[test]
    fn it_wins_when_target_appears() {
        let grid = Grid::from_rows(&[[8, 8], [0, 0]]).unwrap();
        let mut game = Game::from_grid(grid, 16).unwrap();
        assert!(!game.is_victory());
        assert!(game.shift(Move::Left));
        assert!(game.is_victory());
        assert!(game.is_game_over());
    }
}

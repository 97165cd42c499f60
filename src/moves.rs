use std::fmt;
use std::str::FromStr;

use log::debug;

use crate::grid::Grid;
use crate::line::{slide_line, LineView};

/// A direction to move/merge tiles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Move {
    Up,
    Down,
    Left,
    Right,
}

impl Move {
    pub const ALL: [Move; 4] = [Move::Up, Move::Down, Move::Left, Move::Right];

    /// Convert a u8 to a Move (0=Up, 1=Down, 2=Left, 3=Right).
    pub fn from_u8(value: u8) -> Option<Move> {
        match value {
            0 => Some(Move::Up),
            1 => Some(Move::Down),
            2 => Some(Move::Left),
            3 => Some(Move::Right),
            _ => None,
        }
    }

    #[inline]
    pub fn to_u8(self) -> u8 {
        match self {
            Move::Up => 0,
            Move::Down => 1,
            Move::Left => 2,
            Move::Right => 3,
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Move::Up => "up",
            Move::Down => "down",
            Move::Left => "left",
            Move::Right => "right",
        };
        f.write_str(name)
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("unrecognized move: {0:?}")]
pub struct ParseMoveError(pub String);

/// Accepts `w/a/s/d`, vi-style `k/h/j/l`, and the direction names.
impl FromStr for Move {
    type Err = ParseMoveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "w" | "k" | "up" => Ok(Move::Up),
            "s" | "j" | "down" => Ok(Move::Down),
            "a" | "h" | "left" => Ok(Move::Left),
            "d" | "l" | "right" => Ok(Move::Right),
            _ => Err(ParseMoveError(s.to_string())),
        }
    }
}

/// Slide/merge every row (Left/Right) or column (Up/Down) toward `dir`. No randomness.
///
/// All lines are processed even once one has moved. Returns true if any line changed;
/// when it returns false the grid is untouched.
///
/// ```
/// use tile_merge::grid::Grid;
/// use tile_merge::moves::{apply, Move};
/// let mut g = Grid::from_rows(&[[2, 2], [0, 4]]).unwrap();
/// assert!(apply(&mut g, Move::Left));
/// assert_eq!(g, Grid::from_rows(&[[4, 0], [4, 0]]).unwrap());
/// assert!(!apply(&mut g, Move::Left));
/// ```
pub fn apply(grid: &mut Grid, dir: Move) -> bool {
    let size = grid.size();
    let moved = (0..size).fold(false, |moved, idx| {
        let line_moved = slide_line(grid, &LineView::new(size, dir, idx));
        moved || line_moved
    });
    debug!("move {} -> moved={}, free={}", dir, moved, grid.count_free());
    moved
}

/// True if `dir` would change the grid. Works on a copy.
pub fn can_move(grid: &Grid, dir: Move) -> bool {
    let mut probe = grid.clone();
    apply(&mut probe, dir)
}

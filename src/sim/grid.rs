//! Grid cells and cardinal directions

use serde::{Deserialize, Serialize};

/// Integer grid coordinate. Valid cells lie in `[0, n)²`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Cell {
    pub x: i32,
    pub y: i32,
}

impl Cell {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Neighboring cell one step in `dir` (may leave the grid)
    pub fn shifted(self, dir: Direction) -> Self {
        let (dx, dy) = dir.offset();
        Self::new(self.x + dx, self.y + dy)
    }

    /// Wrap both coordinates into `[0, n)` (toroidal move under immortality)
    pub fn wrapped(self, n: i32) -> Self {
        Self::new(self.x.rem_euclid(n), self.y.rem_euclid(n))
    }

    pub fn in_bounds(self, n: i32) -> bool {
        self.x >= 0 && self.x < n && self.y >= 0 && self.y < n
    }
}

/// Cardinal movement direction. Y grows downward (screen convention).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub fn offset(self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }

    pub fn opposite(self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }
}

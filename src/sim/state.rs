//! Game state and core simulation types

use std::collections::VecDeque;

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::grid::{Cell, Direction};
use crate::consts::*;

/// Food category. Normal food grows the snake by one cell; bonus food by a
/// variable amount eaten over as many ticks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FoodKind {
    Normal,
    Bonus { growth: u8 },
}

impl FoodKind {
    pub fn growth(self) -> u8 {
        match self {
            FoodKind::Normal => 1,
            FoodKind::Bonus { growth } => growth,
        }
    }

    pub fn is_bonus(self) -> bool {
        matches!(self, FoodKind::Bonus { .. })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Food {
    pub cell: Cell,
    pub kind: FoodKind,
}

/// Signals emitted by the kernel each step; the effect subsystems and the
/// immortality machine consume these, nothing else crosses that boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    HeadAdvanced { cell: Cell },
    FoodEaten { cell: Cell, growth: u8 },
    GameOver,
}

/// Complete kernel state. Mutated only by [`super::tick::step`] (which clones
/// first) and by [`GameState::new`] on reset.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Grid dimension, fixed at construction
    pub grid_size: i32,
    /// Snake body, head first; length >= 1 while alive. Cells are distinct
    /// unless immortality tolerated a self-overlap.
    pub snake: VecDeque<Cell>,
    pub food: Food,
    pub direction: Direction,
    pub score: u32,
    pub game_over: bool,
    /// Simulation tick counter
    pub time_ticks: u64,
    /// Tail-retention debt from bonus food (growth spread over ticks)
    pub pending_growth: u8,
}

impl GameState {
    /// Fresh round: fixed starting snake in the grid center heading up,
    /// random food, zeroed score.
    pub fn new(grid_size: i32, rng: &mut impl Rng) -> Self {
        let mid = grid_size / 2;
        let snake: VecDeque<Cell> = (0..3).map(|i| Cell::new(mid, mid + i)).collect();

        let mut state = Self {
            grid_size,
            snake,
            food: Food {
                cell: Cell::new(0, 0),
                kind: FoodKind::Normal,
            },
            direction: Direction::Up,
            score: 0,
            game_over: false,
            time_ticks: 0,
            pending_growth: 0,
        };
        state.regenerate_food(rng);
        state
    }

    pub fn head(&self) -> Cell {
        self.snake[0]
    }

    pub fn occupies(&self, cell: Cell) -> bool {
        self.snake.iter().any(|&c| c == cell)
    }

    /// Place food at a uniformly random free cell. Rejection-sampled against
    /// the full body with a capped attempt budget; falls back to a linear
    /// scan, and ends the round if the grid is saturated.
    pub fn regenerate_food(&mut self, rng: &mut impl Rng) {
        let n = self.grid_size;
        let attempts = (n as u32 * n as u32) * 4;

        for _ in 0..attempts {
            let cell = Cell::new(rng.random_range(0..n), rng.random_range(0..n));
            if !self.occupies(cell) {
                self.food = Food {
                    cell,
                    kind: roll_food_kind(rng),
                };
                return;
            }
        }

        // Deterministic fallback: scan for any free cell
        for y in 0..n {
            for x in 0..n {
                let cell = Cell::new(x, y);
                if !self.occupies(cell) {
                    self.food = Food {
                        cell,
                        kind: roll_food_kind(rng),
                    };
                    return;
                }
            }
        }

        // Grid saturated by the snake: the round cannot continue
        log::info!("grid saturated, ending round at score {}", self.score);
        self.game_over = true;
    }
}

fn roll_food_kind(rng: &mut impl Rng) -> FoodKind {
    if rng.random_range(0..BONUS_FOOD_ODDS) == 0 {
        FoodKind::Bonus {
            growth: rng.random_range(BONUS_GROWTH_MIN..=BONUS_GROWTH_MAX),
        }
    } else {
        FoodKind::Normal
    }
}

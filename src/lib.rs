//! Aurora Snake - grid-snake simulation and visual-effects core
//!
//! Core modules:
//! - `sim`: Deterministic grid simulation (snake, food, collisions, immortality)
//! - `fx`: Particle-effect subsystems (bounded FIFO pools, spawn/update/draw)
//! - `surface`: Drawing capability the host passes in
//! - `game`: Frame orchestration (fixed-timestep ticks interleaved with render frames)
//! - `settings`: Effect toggles and quality presets

pub mod fx;
pub mod game;
pub mod settings;
pub mod sim;
pub mod surface;

pub use game::{FrameInput, Game, Snapshot};
pub use settings::{QualityPreset, Settings};
pub use surface::{Rgb, Surface};

/// Game configuration constants
pub mod consts {
    /// Grid dimension (cells per side); the board is `[0, GRID_SIZE)²`
    pub const GRID_SIZE: i32 = 20;
    /// Cell edge length in pixels (effect subsystems work in pixel space)
    pub const CELL_PX: f32 = 24.0;

    /// Fixed simulation timestep (8 Hz - the snake moves 8 cells per second)
    pub const TICK_DT: f32 = 1.0 / 8.0;
    /// Maximum ticks per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 4;

    /// Score awarded per food eaten
    pub const SCORE_PER_FOOD: u32 = 10;
    /// One food in BONUS_FOOD_ODDS is a bonus food
    pub const BONUS_FOOD_ODDS: u32 = 6;
    /// Bonus food growth range (inclusive)
    pub const BONUS_GROWTH_MIN: u8 = 2;
    pub const BONUS_GROWTH_MAX: u8 = 5;

    /// Immortality: tap window, tap count, duration, recharge economy
    pub const TAP_WINDOW_MS: u64 = 1200;
    pub const TAPS_REQUIRED: usize = 3;
    pub const IMMORTAL_DURATION_TICKS: u64 = 55;
    pub const RECHARGE_FOODS: u8 = 5;
    pub const INITIAL_CHARGES: u8 = 1;

    /// Effect pool capacities and spawn rates
    pub const AURORA_CAP: usize = 120;
    /// Wisps spawned per head advance (fractional accumulator)
    pub const AURORA_SPAWN_RATE: f32 = 3.0;
    pub const FIRE_CAP: usize = 90;
    pub const FIRE_SPAWN_MIN: u32 = 3;
    pub const FIRE_SPAWN_MAX: u32 = 8;
    pub const SPARK_CAP: usize = 40;
    pub const SPARK_BURST: usize = 14;
    pub const WEB_ANCHOR_CAP: usize = 40;
    pub const WEB_STRAND_CAP: usize = 80;
    pub const BONUS_PARTICLE_CAP: usize = 24;
    pub const SIGN_CAP: usize = 12;
    pub const POPUP_CAP: usize = 8;
}

use glam::Vec2;

/// Pixel-space center of a grid cell
#[inline]
pub fn cell_center(cell: sim::Cell) -> Vec2 {
    Vec2::new(
        (cell.x as f32 + 0.5) * consts::CELL_PX,
        (cell.y as f32 + 0.5) * consts::CELL_PX,
    )
}

/// Pixel-space top-left corner of a grid cell
#[inline]
pub fn cell_origin(cell: sim::Cell) -> Vec2 {
    Vec2::new(cell.x as f32 * consts::CELL_PX, cell.y as f32 * consts::CELL_PX)
}

/// Smoothstep easing: t² (3 − 2t), clamped to [0, 1]
#[inline]
pub fn smoothstep(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    t * t * (3.0 - 2.0 * t)
}

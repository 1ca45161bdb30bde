//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Injected RNG only
//! - No rendering or platform dependencies

pub mod grid;
pub mod immortal;
pub mod state;
pub mod tick;

pub use grid::{Cell, Direction};
pub use immortal::{Activation, ImmortalState};
pub use state::{Food, FoodKind, GameEvent, GameState};
pub use tick::{StepOutcome, TickInput, step};

//! Immortality state machine
//!
//! Rapid taps inside a sliding window convert one charge into a time-boxed
//! invulnerability period. Charges recharge by eating food while empty.

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// When the current activation started. Input timestamps and simulation
/// ticks are decoupled: the trigger arrives between ticks and the first
/// tick afterwards stamps the start.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Activation {
    #[default]
    NotActivated,
    ActivatedAt(u64),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImmortalState {
    /// Tap timestamps (ms) still inside the sliding window
    taps_ms: Vec<u64>,
    active: bool,
    activation: Activation,
    charges: u8,
    foods_since_use: u8,
}

impl Default for ImmortalState {
    fn default() -> Self {
        Self::new()
    }
}

impl ImmortalState {
    pub fn new() -> Self {
        Self {
            taps_ms: Vec::new(),
            active: false,
            activation: Activation::NotActivated,
            charges: INITIAL_CHARGES,
            foods_since_use: 0,
        }
    }

    /// Record a tap. Returns true when this tap triggered an activation.
    pub fn register_tap(&mut self, now_ms: u64) -> bool {
        // Strict cutoff: a tap exactly at the window boundary is dropped
        self.taps_ms
            .retain(|&t| now_ms.saturating_sub(t) < TAP_WINDOW_MS);
        self.taps_ms.push(now_ms);

        if self.taps_ms.len() >= TAPS_REQUIRED && self.charges > 0 && !self.active {
            self.charges -= 1;
            self.foods_since_use = 0;
            self.taps_ms.clear();
            self.active = true;
            self.activation = Activation::NotActivated;
            log::info!("immortality activated, {} charges left", self.charges);
            return true;
        }
        false
    }

    /// Stamp the activation instant on the first tick after the trigger
    pub fn activate_at_tick(&mut self, tick: u64) {
        if self.active && self.activation == Activation::NotActivated {
            self.activation = Activation::ActivatedAt(tick);
        }
    }

    /// Per-tick advance: expire the window once the duration has elapsed
    pub fn advance(&mut self, tick: u64) {
        if let (true, Activation::ActivatedAt(t0)) = (self.active, self.activation)
            && tick.saturating_sub(t0) >= IMMORTAL_DURATION_TICKS
        {
            self.active = false;
            self.activation = Activation::NotActivated;
            log::info!("immortality expired at tick {tick}");
        }
    }

    /// Recharge economy: eating while empty refills exactly one charge
    pub fn on_food_eaten(&mut self) {
        self.foods_since_use += 1;
        if self.charges == 0 && self.foods_since_use >= RECHARGE_FOODS {
            self.charges = 1;
            self.foods_since_use = 0;
            log::info!("immortality charge restored");
        }
    }

    pub fn is_immortal(&self) -> bool {
        self.active
    }

    pub fn charges(&self) -> u8 {
        self.charges
    }

    /// Ticks of immortality left; 0 when inactive or not yet stamped
    pub fn remaining_ticks(&self, tick: u64) -> u64 {
        match (self.active, self.activation) {
            (true, Activation::ActivatedAt(t0)) => {
                IMMORTAL_DURATION_TICKS.saturating_sub(tick.saturating_sub(t0))
            }
            _ => 0,
        }
    }

    /// Fraction of the duration elapsed, clamped to [0, 1]
    pub fn progress(&self, tick: u64) -> f32 {
        match (self.active, self.activation) {
            (true, Activation::ActivatedAt(t0)) => {
                (tick.saturating_sub(t0) as f32 / IMMORTAL_DURATION_TICKS as f32).clamp(0.0, 1.0)
            }
            _ => 0.0,
        }
    }
}

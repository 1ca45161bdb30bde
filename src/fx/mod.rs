//! Particle-effect subsystems
//!
//! Seven independent subsystems share one lifecycle: spawn on a trigger,
//! advance every frame, draw as layered translucent primitives. Each owns a
//! bounded FIFO pool and reads nothing but the kernel's events and snapshot.

pub mod aurora;
pub mod bonus;
pub mod fire;
pub mod pool;
pub mod popup;
pub mod protest;
pub mod sparks;
pub mod web;

pub use aurora::AuroraTrail;
pub use bonus::BonusPulse;
pub use fire::FireTrail;
pub use pool::Pool;
pub use popup::GrowthPopups;
pub use protest::ProtestSigns;
pub use sparks::SparkBurst;
pub use web::WebTrail;

use rand::Rng;

use crate::settings::Settings;
use crate::sim::{Cell, GameEvent, GameState};
use crate::surface::{Rgb, Surface};

/// HSL to RGB, hue in degrees
pub fn hsl(h: f32, s: f32, l: f32) -> Rgb {
    let h = h.rem_euclid(360.0) / 60.0;
    let c = (1.0 - (2.0 * l - 1.0).abs()) * s;
    let x = c * (1.0 - (h % 2.0 - 1.0).abs());
    let m = l - c / 2.0;
    let (r, g, b) = match h as u32 {
        0 => (c, x, 0.0),
        1 => (x, c, 0.0),
        2 => (0.0, c, x),
        3 => (0.0, x, c),
        4 => (x, 0.0, c),
        _ => (c, 0.0, x),
    };
    [r + m, g + m, b + m]
}

/// The full bank of effect subsystems. Replaced wholesale on restart so no
/// pool survives a round.
#[derive(Debug, Clone)]
pub struct Effects {
    pub aurora: AuroraTrail,
    pub fire: FireTrail,
    pub sparks: SparkBurst,
    pub web: WebTrail,
    pub bonus: BonusPulse,
    pub signs: ProtestSigns,
    pub popups: GrowthPopups,
}

impl Default for Effects {
    fn default() -> Self {
        Self::new()
    }
}

impl Effects {
    pub fn new() -> Self {
        Self {
            aurora: AuroraTrail::new(),
            fire: FireTrail::new(),
            sparks: SparkBurst::new(),
            web: WebTrail::new(),
            bonus: BonusPulse::new(),
            signs: ProtestSigns::new(),
            popups: GrowthPopups::new(),
        }
    }

    /// Fan a kernel event out to the subsystems it triggers
    pub fn handle_event(&mut self, event: &GameEvent, settings: &Settings, rng: &mut impl Rng) {
        match *event {
            GameEvent::HeadAdvanced { cell } => {
                if settings.auroras {
                    self.aurora.spawn_at_head(cell, rng);
                }
                if settings.effective_fire() {
                    self.fire.spawn_at(cell, rng);
                }
                if settings.webs {
                    self.web.anchor_at(cell, rng);
                }
            }
            GameEvent::FoodEaten { cell, growth } => {
                if settings.effective_sparks() {
                    self.sparks.burst_at(cell, rng);
                }
                if settings.signs {
                    self.signs.spawn_at(cell, rng);
                }
                if growth > 1 && settings.popups {
                    self.popups.spawn(cell, growth, rng);
                }
            }
            GameEvent::GameOver => {}
        }
    }

    /// Advance every subsystem one frame. Runs to completion before any draw.
    pub fn update(&mut self, state: &GameState, settings: &Settings, frame: u64, rng: &mut impl Rng) {
        self.aurora.update(frame);
        self.fire.update();
        self.sparks.update();
        self.web.update();
        self.bonus
            .update(bonus_cell(state, settings), frame, rng);
        self.signs.update();
        self.popups.update();
    }

    /// Draw every subsystem, back to front. Never mutates state.
    pub fn draw(
        &self,
        surface: &mut dyn Surface,
        state: &GameState,
        settings: &Settings,
        frame: u64,
    ) {
        self.aurora.draw(surface);
        self.web.draw(surface, frame);
        self.fire.draw(surface);
        self.bonus.draw(surface, bonus_cell(state, settings));
        self.sparks.draw(surface);
        self.signs.draw(surface);
        self.popups.draw(surface);
    }

    pub fn is_empty(&self) -> bool {
        self.aurora.is_empty()
            && self.fire.is_empty()
            && self.sparks.is_empty()
            && self.web.is_empty()
            && self.bonus.is_empty()
            && self.signs.is_empty()
            && self.popups.is_empty()
    }
}

fn bonus_cell(state: &GameState, settings: &Settings) -> Option<Cell> {
    (settings.bonus_pulse && !state.game_over && state.food.kind.is_bonus())
        .then_some(state.food.cell)
}

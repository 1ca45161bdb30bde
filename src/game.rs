//! Frame orchestration
//!
//! Interleaves the low-rate simulation tick with per-frame effect updates:
//! within one frame every kernel step runs first, then every subsystem's
//! update, and only then may the host call [`Game::render`].

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::Serialize;

use crate::consts::*;
use crate::fx::Effects;
use crate::settings::Settings;
use crate::sim::{self, Cell, Direction, Food, GameEvent, GameState, ImmortalState, TickInput};
use crate::surface::Surface;
use crate::{cell_origin, smoothstep};

/// Host input gathered since the previous frame
#[derive(Debug, Clone, Copy, Default)]
pub struct FrameInput {
    /// Most recent directional key, if any
    pub direction: Option<Direction>,
    /// Timestamp (ms) of a tap event for the immortality detector
    pub tap_ms: Option<u64>,
    pub restart: bool,
}

/// Read-only per-frame state for the host's scoreboard/UI layer
#[derive(Debug, Clone, Serialize)]
pub struct Snapshot {
    pub snake: Vec<Cell>,
    pub food: Food,
    pub score: u32,
    pub game_over: bool,
    pub immortal: bool,
    pub immortal_remaining: u64,
    pub immortal_progress: f32,
    pub charges: u8,
}

pub struct Game {
    state: GameState,
    immortal: ImmortalState,
    effects: Effects,
    settings: Settings,
    rng: Pcg32,
    accumulator: f32,
    frame: u64,
    pending_direction: Option<Direction>,
}

impl Game {
    pub fn new(seed: u64, settings: Settings) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let state = GameState::new(GRID_SIZE, &mut rng);
        Self {
            state,
            immortal: ImmortalState::new(),
            effects: Effects::new(),
            settings,
            rng,
            accumulator: 0.0,
            frame: 0,
            pending_direction: None,
        }
    }

    /// Discard the round: kernel state, immortality state and every effect
    /// pool are replaced together; nothing survives.
    pub fn restart(&mut self) {
        log::info!("restart at score {}", self.state.score);
        self.state = GameState::new(GRID_SIZE, &mut self.rng);
        self.immortal = ImmortalState::new();
        self.effects = Effects::new();
        self.accumulator = 0.0;
        self.pending_direction = None;
    }

    /// Advance one render frame: run any due simulation ticks, then update
    /// every effect subsystem.
    pub fn frame(&mut self, input: &FrameInput, dt: f32) {
        self.frame += 1;

        if input.restart {
            self.restart();
            return;
        }
        if let Some(ms) = input.tap_ms {
            self.immortal.register_tap(ms);
        }
        if let Some(dir) = input.direction {
            self.pending_direction = Some(dir);
        }

        self.accumulator += dt;
        let mut substeps = 0;
        while self.accumulator >= TICK_DT && substeps < MAX_SUBSTEPS {
            self.accumulator -= TICK_DT;
            substeps += 1;
            self.tick();
        }
        if substeps == MAX_SUBSTEPS {
            // Running behind; drop the backlog rather than spiral
            self.accumulator = 0.0;
        }

        self.effects
            .update(&self.state, &self.settings, self.frame, &mut self.rng);
    }

    fn tick(&mut self) {
        let tick = self.state.time_ticks;
        self.immortal.activate_at_tick(tick);
        self.immortal.advance(tick);

        let tick_input = TickInput {
            direction: self.pending_direction.take(),
            immortal: self.immortal.is_immortal(),
        };
        let out = sim::step(&self.state, &tick_input, &mut self.rng);
        self.state = out.state;

        for event in &out.events {
            if let GameEvent::FoodEaten { .. } = event {
                self.immortal.on_food_eaten();
            }
            self.effects.handle_event(event, &self.settings, &mut self.rng);
        }
    }

    /// Draw the board and every effect subsystem. Immutable: rendering
    /// observes the post-step state and changes nothing.
    pub fn render(&self, surface: &mut dyn Surface) {
        self.draw_board(surface);
        self.effects
            .draw(surface, &self.state, &self.settings, self.frame);
    }

    fn draw_board(&self, surface: &mut dyn Surface) {
        let cell = Vec2::splat(CELL_PX - 2.0);
        let inset = Vec2::splat(1.0);

        // Body fades toward the tail; immortality tints it
        let body_color = if self.immortal.is_immortal() {
            [0.95, 0.85, 0.3]
        } else {
            [0.3, 0.8, 0.45]
        };
        let len = self.state.snake.len() as f32;
        for (i, &c) in self.state.snake.iter().enumerate() {
            let fade = 1.0 - smoothstep(i as f32 / len) * 0.5;
            surface.fill_rect(cell_origin(c) + inset, cell, body_color, fade);
        }
        let head = self.state.head();
        surface.stroke_rect(cell_origin(head) + inset, cell, 2.0, [1.0, 1.0, 1.0], 0.9);

        let food = self.state.food;
        let center = crate::cell_center(food.cell);
        if food.kind.is_bonus() {
            surface.fill_circle(center, CELL_PX * 0.38, [1.0, 0.75, 0.2], 1.0);
        } else {
            surface.fill_circle(center, CELL_PX * 0.3, [0.95, 0.3, 0.35], 1.0);
        }
    }

    pub fn snapshot(&self) -> Snapshot {
        let tick = self.state.time_ticks;
        Snapshot {
            snake: self.state.snake.iter().copied().collect(),
            food: self.state.food,
            score: self.state.score,
            game_over: self.state.game_over,
            immortal: self.immortal.is_immortal(),
            immortal_remaining: self.immortal.remaining_ticks(tick),
            immortal_progress: self.immortal.progress(tick),
            charges: self.immortal.charges(),
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn immortal(&self) -> &ImmortalState {
        &self.immortal
    }

    pub fn effects(&self) -> &Effects {
        &self.effects
    }

    pub fn settings_mut(&mut self) -> &mut Settings {
        &mut self.settings
    }

    /// Deterministic helper for tests and headless hosts: run exactly one
    /// simulation tick regardless of wall-clock pacing.
    pub fn force_tick(&mut self) {
        self.tick();
        self.effects
            .update(&self.state, &self.settings, self.frame, &mut self.rng);
    }

    /// Injected randomness for subsystems the host drives directly
    pub fn rng(&mut self) -> &mut impl Rng {
        &mut self.rng
    }
}

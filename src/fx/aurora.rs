//! Aurora trail - drifting translucent wisps shed by the snake's head

use glam::Vec2;
use rand::Rng;

use super::hsl;
use super::pool::Pool;
use crate::consts::*;
use crate::sim::Cell;
use crate::surface::Surface;
use crate::{cell_center, smoothstep};

#[derive(Debug, Clone)]
struct Wisp {
    pos: Vec2,
    vel: Vec2,
    hue: f32,
    size: f32,
    phase: f32,
    life: f32,
}

#[derive(Debug, Clone)]
pub struct AuroraTrail {
    pool: Pool<Wisp>,
    /// Fractional spawn budget carried across head advances
    spawn_acc: f32,
}

impl Default for AuroraTrail {
    fn default() -> Self {
        Self::new()
    }
}

impl AuroraTrail {
    pub fn new() -> Self {
        Self {
            pool: Pool::new(AURORA_CAP),
            spawn_acc: 0.0,
        }
    }

    /// Called when the head advances to a new cell
    pub fn spawn_at_head(&mut self, cell: Cell, rng: &mut impl Rng) {
        self.spawn_wisps(cell, AURORA_SPAWN_RATE, rng);
    }

    /// Budgeted spawn: a fractional rate carries its remainder to the
    /// next call
    fn spawn_wisps(&mut self, cell: Cell, rate: f32, rng: &mut impl Rng) {
        self.spawn_acc += rate;
        let center = cell_center(cell);
        while self.spawn_acc >= 1.0 {
            self.spawn_acc -= 1.0;
            let jitter = Vec2::new(
                rng.random_range(-8.0f32..8.0),
                rng.random_range(-8.0f32..8.0),
            );
            self.pool.push(Wisp {
                pos: center + jitter,
                vel: Vec2::new(
                    rng.random_range(-0.2f32..0.2),
                    rng.random_range(-0.5f32..-0.1),
                ),
                hue: rng.random_range(120.0f32..300.0),
                size: rng.random_range(4.0f32..10.0),
                phase: rng.random_range(0.0f32..std::f32::consts::TAU),
                life: 1.0,
            });
        }
    }

    pub fn update(&mut self, frame: u64) {
        let t = frame as f32;
        for w in self.pool.iter_mut() {
            w.pos += w.vel;
            // Sideways shimmer, each wisp on its own phase
            w.pos.x += (t * 0.1 + w.phase).sin() * 0.4;
            w.life -= 0.02;
        }
        self.pool.retain(|w| w.life > 0.0);
    }

    pub fn draw(&self, surface: &mut dyn Surface) {
        for w in self.pool.iter() {
            let a = smoothstep(w.life);
            let glow = hsl(w.hue, 0.8, 0.6);
            surface.fill_circle(w.pos, w.size * 1.8, glow, a * 0.12);
            surface.fill_circle(w.pos, w.size * 1.1, glow, a * 0.30);
            surface.fill_circle(w.pos, w.size * 0.45, hsl(w.hue, 0.6, 0.85), a * 0.75);
        }
    }

    pub fn len(&self) -> usize {
        self.pool.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pool.is_empty()
    }
}

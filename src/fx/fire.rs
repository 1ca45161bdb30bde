//! Fire trail - buoyant flame particles behind the head

use glam::Vec2;
use rand::Rng;

use super::pool::Pool;
use crate::cell_center;
use crate::consts::*;
use crate::sim::Cell;
use crate::surface::Surface;

/// Flames smaller than this are invisible and get culled
const SIZE_FLOOR: f32 = 0.5;

#[derive(Debug, Clone)]
struct Flame {
    pos: Vec2,
    vel: Vec2,
    size: f32,
    life: f32,
}

#[derive(Debug, Clone)]
pub struct FireTrail {
    pool: Pool<Flame>,
}

impl Default for FireTrail {
    fn default() -> Self {
        Self::new()
    }
}

impl FireTrail {
    pub fn new() -> Self {
        Self {
            pool: Pool::new(FIRE_CAP),
        }
    }

    /// Called when the head advances to a new cell
    pub fn spawn_at(&mut self, cell: Cell, rng: &mut impl Rng) {
        let count = rng.random_range(FIRE_SPAWN_MIN..=FIRE_SPAWN_MAX);
        let center = cell_center(cell);
        for _ in 0..count {
            self.pool.push(Flame {
                pos: center
                    + Vec2::new(
                        rng.random_range(-6.0f32..6.0),
                        rng.random_range(-4.0f32..4.0),
                    ),
                vel: Vec2::new(
                    rng.random_range(-0.6f32..0.6),
                    rng.random_range(-1.4f32..-0.4),
                ),
                size: rng.random_range(3.0f32..7.0),
                life: 1.0,
            });
        }
    }

    pub fn update(&mut self) {
        for f in self.pool.iter_mut() {
            f.vel *= 0.92;
            // Buoyancy keeps flames rising against the damping
            f.vel.y -= 0.05;
            f.pos += f.vel;
            f.size *= 0.96;
            f.life -= 0.035;
        }
        self.pool.retain(|f| f.life > 0.0 && f.size >= SIZE_FLOOR);
    }

    pub fn draw(&self, surface: &mut dyn Surface) {
        for f in self.pool.iter() {
            let a = f.life;
            surface.fill_circle(f.pos, f.size * 1.6, [0.9, 0.25, 0.05], a * 0.18);
            surface.fill_circle(f.pos, f.size, [1.0, 0.45, 0.1], a * 0.45);
            surface.fill_circle(f.pos, f.size * 0.5, [1.0, 0.85, 0.4], a * 0.8);
        }
    }

    pub fn len(&self) -> usize {
        self.pool.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pool.is_empty()
    }
}

//! Growth popups - floating badges announcing multi-cell growth from
//! bonus food

use glam::Vec2;
use rand::Rng;

use super::pool::Pool;
use crate::cell_center;
use crate::consts::*;
use crate::sim::Cell;
use crate::surface::Surface;

#[derive(Debug, Clone)]
struct Popup {
    pos: Vec2,
    vel: Vec2,
    growth: u8,
    life: f32,
}

#[derive(Debug, Clone)]
pub struct GrowthPopups {
    pool: Pool<Popup>,
}

impl Default for GrowthPopups {
    fn default() -> Self {
        Self::new()
    }
}

impl GrowthPopups {
    pub fn new() -> Self {
        Self {
            pool: Pool::new(POPUP_CAP),
        }
    }

    /// Called when the snake grew by more than one cell. A growth of 0 is
    /// clamped to 1 so the pip layout math stays defined.
    pub fn spawn(&mut self, cell: Cell, growth: u8, rng: &mut impl Rng) {
        self.pool.push(Popup {
            pos: cell_center(cell),
            vel: Vec2::new(
                rng.random_range(-0.3f32..0.3),
                rng.random_range(-1.5f32..-0.8),
            ),
            growth: growth.max(1),
            life: 1.0,
        });
    }

    pub fn update(&mut self) {
        for p in self.pool.iter_mut() {
            p.pos += p.vel;
            p.vel *= 0.95;
            p.life -= 0.015;
        }
        self.pool.retain(|p| p.life > 0.0);
    }

    pub fn draw(&self, surface: &mut dyn Surface) {
        for p in self.pool.iter() {
            let a = p.life;
            let width = 10.0 + p.growth as f32 * 6.0;
            let origin = p.pos - Vec2::new(width / 2.0, 7.0);
            let size = Vec2::new(width, 14.0);
            surface.fill_round_rect(origin, size, 4.0, [0.1, 0.12, 0.2], a * 0.7);
            surface.stroke_round_rect(origin, size, 4.0, 1.0, [0.4, 0.9, 0.5], a);

            // One pip per cell of growth
            for i in 0..p.growth {
                let x = origin.x + width / 2.0 + (i as f32 - (p.growth - 1) as f32 / 2.0) * 6.0;
                surface.fill_circle(Vec2::new(x, p.pos.y), 2.0, [0.4, 0.9, 0.5], a);
            }
        }
    }

    pub fn len(&self) -> usize {
        self.pool.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pool.is_empty()
    }
}

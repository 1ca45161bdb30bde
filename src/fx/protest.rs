//! Food protest signs - tiny placards tossed up when food is eaten,
//! falling under gravity

use glam::Vec2;
use rand::Rng;

use super::pool::Pool;
use crate::cell_center;
use crate::consts::*;
use crate::sim::Cell;
use crate::surface::Surface;

#[derive(Debug, Clone)]
struct Sign {
    pos: Vec2,
    vel: Vec2,
    angle: f32,
    spin: f32,
    life: f32,
}

#[derive(Debug, Clone)]
pub struct ProtestSigns {
    pool: Pool<Sign>,
}

impl Default for ProtestSigns {
    fn default() -> Self {
        Self::new()
    }
}

impl ProtestSigns {
    pub fn new() -> Self {
        Self {
            pool: Pool::new(SIGN_CAP),
        }
    }

    /// Called when food is eaten at `cell`
    pub fn spawn_at(&mut self, cell: Cell, rng: &mut impl Rng) {
        let count = rng.random_range(1..=2);
        let center = cell_center(cell);
        for _ in 0..count {
            self.pool.push(Sign {
                pos: center,
                vel: Vec2::new(
                    rng.random_range(-1.0f32..1.0),
                    rng.random_range(-2.5f32..-1.0),
                ),
                angle: 0.0,
                spin: rng.random_range(-0.1f32..0.1),
                life: 1.0,
            });
        }
    }

    pub fn update(&mut self) {
        for s in self.pool.iter_mut() {
            s.vel.y += 0.25;
            s.pos += s.vel;
            s.angle += s.spin;
            s.life -= 0.02;
        }
        self.pool.retain(|s| s.life > 0.0);
    }

    pub fn draw(&self, surface: &mut dyn Surface) {
        for s in self.pool.iter() {
            let a = s.life;
            let wobble = s.angle.sin() * 3.0;
            let top = s.pos + Vec2::new(wobble, 0.0);

            // Stick, placard, slogan bar
            surface.line(top, top + Vec2::new(0.0, 12.0), 1.5, [0.5, 0.35, 0.2], a);
            let placard = top - Vec2::new(10.0, 14.0);
            let size = Vec2::new(20.0, 12.0);
            surface.fill_round_rect(placard, size, 3.0, [0.95, 0.92, 0.85], a);
            surface.stroke_round_rect(placard, size, 3.0, 1.0, [0.25, 0.2, 0.15], a);
            surface.fill_rect(
                placard + Vec2::new(4.0, 5.0),
                Vec2::new(12.0, 2.0),
                [0.25, 0.2, 0.15],
                a * 0.9,
            );
        }
    }

    pub fn len(&self) -> usize {
        self.pool.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pool.is_empty()
    }
}

//! Bonus-food pulse - expanding rings around an active bonus food plus
//! falling shrink particles it sheds

use glam::Vec2;
use rand::Rng;

use super::pool::Pool;
use crate::cell_center;
use crate::consts::*;
use crate::sim::Cell;
use crate::surface::Surface;

const SIZE_FLOOR: f32 = 0.3;

#[derive(Debug, Clone)]
struct Shrink {
    pos: Vec2,
    vel: Vec2,
    size: f32,
    life: f32,
}

#[derive(Debug, Clone)]
pub struct BonusPulse {
    pool: Pool<Shrink>,
    phase: f32,
}

impl Default for BonusPulse {
    fn default() -> Self {
        Self::new()
    }
}

impl BonusPulse {
    pub fn new() -> Self {
        Self {
            pool: Pool::new(BONUS_PARTICLE_CAP),
            phase: 0.0,
        }
    }

    /// `bonus_cell` is the bonus food's cell while one is on the board
    pub fn update(&mut self, bonus_cell: Option<Cell>, frame: u64, rng: &mut impl Rng) {
        if let Some(cell) = bonus_cell {
            self.phase += 0.15;
            // Shed one particle every fourth frame
            if frame % 4 == 0 {
                let angle = rng.random_range(0.0f32..std::f32::consts::TAU);
                self.pool.push(Shrink {
                    pos: cell_center(cell),
                    vel: Vec2::new(angle.cos(), angle.sin()) * rng.random_range(0.5f32..1.5),
                    size: rng.random_range(2.0f32..5.0),
                    life: 1.0,
                });
            }
        } else {
            self.phase = 0.0;
        }

        for p in self.pool.iter_mut() {
            p.vel.y += 0.2;
            p.pos += p.vel;
            p.size *= 0.97;
            p.life -= 0.04;
        }
        self.pool.retain(|p| p.life > 0.0 && p.size >= SIZE_FLOOR);
    }

    pub fn draw(&self, surface: &mut dyn Surface, bonus_cell: Option<Cell>) {
        if let Some(cell) = bonus_cell {
            let center = cell_center(cell);
            let r = CELL_PX * 0.5 + self.phase.sin() * 3.0;
            surface.stroke_circle(center, r, 2.0, [1.0, 0.8, 0.2], 0.8);
            surface.stroke_circle(center, r * 1.5, 1.0, [1.0, 0.8, 0.2], 0.35);
        }
        for p in self.pool.iter() {
            surface.fill_circle(p.pos, p.size, [1.0, 0.75, 0.25], p.life * 0.7);
        }
    }

    pub fn len(&self) -> usize {
        self.pool.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pool.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::recording::{Op, RecordingSurface};
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_sheds_particles_only_while_bonus_active() {
        let mut bonus = BonusPulse::new();
        let mut rng = Pcg32::seed_from_u64(21);

        for frame in 0..8 {
            bonus.update(None, frame, &mut rng);
        }
        assert!(bonus.is_empty());

        for frame in 0..8 {
            bonus.update(Some(Cell::new(5, 5)), frame, &mut rng);
        }
        assert_eq!(bonus.len(), 2); // frames 0 and 4
    }

    #[test]
    fn test_pool_capped() {
        let mut bonus = BonusPulse::new();
        let mut rng = Pcg32::seed_from_u64(21);
        // Spawn every 4th frame but never decay past the cap check
        for frame in 0..400 {
            bonus.update(Some(Cell::new(5, 5)), frame * 4, &mut rng);
            assert!(bonus.len() <= BONUS_PARTICLE_CAP);
        }
    }

    #[test]
    fn test_rings_drawn_only_with_active_bonus() {
        let bonus = BonusPulse::new();
        let mut surface = RecordingSurface::new();
        bonus.draw(&mut surface, None);
        assert_eq!(surface.count(Op::StrokeCircle), 0);

        let mut surface = RecordingSurface::new();
        bonus.draw(&mut surface, Some(Cell::new(5, 5)));
        assert_eq!(surface.count(Op::StrokeCircle), 2);
    }
}

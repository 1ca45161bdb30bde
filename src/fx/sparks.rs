//! Spark burst - a shower of golden streaks when food is eaten

use glam::Vec2;
use rand::Rng;

use super::pool::Pool;
use crate::cell_center;
use crate::consts::*;
use crate::sim::Cell;
use crate::surface::Surface;

#[derive(Debug, Clone)]
struct Spark {
    pos: Vec2,
    vel: Vec2,
    life: f32,
}

#[derive(Debug, Clone)]
pub struct SparkBurst {
    pool: Pool<Spark>,
}

impl Default for SparkBurst {
    fn default() -> Self {
        Self::new()
    }
}

impl SparkBurst {
    pub fn new() -> Self {
        Self {
            pool: Pool::new(SPARK_CAP),
        }
    }

    /// Called when food is eaten at `cell`
    pub fn burst_at(&mut self, cell: Cell, rng: &mut impl Rng) {
        let center = cell_center(cell);
        for _ in 0..SPARK_BURST {
            let angle = rng.random_range(0.0f32..std::f32::consts::TAU);
            let speed = rng.random_range(2.0f32..6.0);
            self.pool.push(Spark {
                pos: center,
                vel: Vec2::new(angle.cos(), angle.sin()) * speed,
                life: 1.0,
            });
        }
    }

    pub fn update(&mut self) {
        for s in self.pool.iter_mut() {
            s.vel *= 0.90;
            s.vel.y += 0.15;
            s.pos += s.vel;
            s.life -= 0.03;
        }
        self.pool.retain(|s| s.life > 0.0);
    }

    pub fn draw(&self, surface: &mut dyn Surface) {
        for s in self.pool.iter() {
            // Streak trailing opposite the velocity
            let tail = s.pos - s.vel * 2.0;
            surface.line(tail, s.pos, 1.5, [1.0, 0.9, 0.5], s.life);
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
    fn test_burst_spawns_fourteen() {
        let mut sparks = SparkBurst::new();
        let mut rng = Pcg32::seed_from_u64(3);
        sparks.burst_at(Cell::new(5, 5), &mut rng);
        assert_eq!(sparks.len(), SPARK_BURST);
    }

    #[test]
    fn test_triple_burst_caps_at_forty() {
        let mut sparks = SparkBurst::new();
        let mut rng = Pcg32::seed_from_u64(3);
        for _ in 0..3 {
            sparks.burst_at(Cell::new(5, 5), &mut rng);
        }
        // 42 spawned, capped at 40 with the oldest two evicted
        assert_eq!(sparks.len(), SPARK_CAP);
    }

    #[test]
    fn test_draw_one_line_per_spark() {
        let mut sparks = SparkBurst::new();
        let mut rng = Pcg32::seed_from_u64(3);
        sparks.burst_at(Cell::new(5, 5), &mut rng);

        let mut surface = RecordingSurface::new();
        sparks.draw(&mut surface);
        assert_eq!(surface.count(Op::Line), SPARK_BURST);
    }
}

//! Web trail - anchor points pinned along the snake's path, joined by
//! sagging shimmer strands

use glam::Vec2;
use rand::Rng;

use super::pool::Pool;
use crate::cell_center;
use crate::consts::*;
use crate::sim::Cell;
use crate::surface::Surface;

#[derive(Debug, Clone)]
struct Anchor {
    pos: Vec2,
    life: f32,
}

#[derive(Debug, Clone)]
struct Strand {
    a: Vec2,
    b: Vec2,
    sag: f32,
    phase: f32,
    life: f32,
}

#[derive(Debug, Clone)]
pub struct WebTrail {
    anchors: Pool<Anchor>,
    strands: Pool<Strand>,
    last_anchor: Option<Vec2>,
}

impl Default for WebTrail {
    fn default() -> Self {
        Self::new()
    }
}

impl WebTrail {
    pub fn new() -> Self {
        Self {
            anchors: Pool::new(WEB_ANCHOR_CAP),
            strands: Pool::new(WEB_STRAND_CAP),
            last_anchor: None,
        }
    }

    /// Pin an anchor at the cell the head just entered, stringing a strand
    /// back to the previous anchor
    pub fn anchor_at(&mut self, cell: Cell, rng: &mut impl Rng) {
        let pos = cell_center(cell)
            + Vec2::new(
                rng.random_range(-3.0f32..3.0),
                rng.random_range(-3.0f32..3.0),
            );
        if let Some(prev) = self.last_anchor {
            self.strands.push(Strand {
                a: prev,
                b: pos,
                sag: rng.random_range(2.0f32..8.0),
                phase: rng.random_range(0.0f32..std::f32::consts::TAU),
                life: 1.0,
            });
        }
        self.anchors.push(Anchor { pos, life: 1.0 });
        self.last_anchor = Some(pos);
    }

    pub fn update(&mut self) {
        for a in self.anchors.iter_mut() {
            a.life -= 0.008;
        }
        self.anchors.retain(|a| a.life > 0.0);
        for s in self.strands.iter_mut() {
            s.life -= 0.01;
        }
        self.strands.retain(|s| s.life > 0.0);
    }

    pub fn draw(&self, surface: &mut dyn Surface, frame: u64) {
        let t = frame as f32;
        for s in self.strands.iter() {
            // Shimmer rides the frame clock so strands twinkle out of step
            let shimmer = 0.35 + 0.25 * (t * 0.2 + s.phase).sin();
            let alpha = s.life * shimmer;
            let mid = (s.a + s.b) * 0.5 + Vec2::new(0.0, s.sag);
            surface.line(s.a, mid, 1.0, [0.85, 0.9, 1.0], alpha);
            surface.line(mid, s.b, 1.0, [0.85, 0.9, 1.0], alpha);
        }
        for a in self.anchors.iter() {
            surface.fill_circle(a.pos, 1.5, [0.9, 0.95, 1.0], a.life * 0.5);
        }
    }

    pub fn anchor_count(&self) -> usize {
        self.anchors.len()
    }

    pub fn strand_count(&self) -> usize {
        self.strands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.anchors.is_empty() && self.strands.is_empty()
    }
}

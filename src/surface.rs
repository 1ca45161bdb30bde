//! Drawing capability consumed by the core
//!
//! The host supplies an implementation backed by whatever renderer it uses.
//! The core only issues primitive fill/stroke calls and never reads back.

use glam::Vec2;

/// Opaque base color; alpha is always passed separately
pub type Rgb = [f32; 3];

/// Primitive drawing operations. Every call takes a color and an
/// independent alpha in [0, 1].
pub trait Surface {
    fn fill_rect(&mut self, pos: Vec2, size: Vec2, color: Rgb, alpha: f32);
    fn stroke_rect(&mut self, pos: Vec2, size: Vec2, line_width: f32, color: Rgb, alpha: f32);
    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Rgb, alpha: f32);
    fn stroke_circle(&mut self, center: Vec2, radius: f32, line_width: f32, color: Rgb, alpha: f32);
    fn fill_round_rect(&mut self, pos: Vec2, size: Vec2, corner: f32, color: Rgb, alpha: f32);
    fn stroke_round_rect(
        &mut self,
        pos: Vec2,
        size: Vec2,
        corner: f32,
        line_width: f32,
        color: Rgb,
        alpha: f32,
    );
    fn line(&mut self, from: Vec2, to: Vec2, width: f32, color: Rgb, alpha: f32);
}

//! Platform abstraction layer
//!
//! The simulation and render pass are backend agnostic; a shell supplies:
//! - A `RenderSink` that turns draw calls into pixels
//! - An `AudioService` (see `crate::audio`) for sound playback
//!
//! The shipped binary uses headless no-op implementations, which is enough
//! to run the demo loop and the test suite without a window system.

use crate::sim::{AlienKind, Rect};

/// An RGB color, 8 bits per channel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BLACK: Color = Color::new(0, 0, 0);
    pub const WHITE: Color = Color::new(255, 255, 255);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Linear interpolation toward `other`. `t` is clamped to [0, 1] so the
    /// endpoints are returned exactly at 0 and 1.
    pub fn lerp(self, other: Color, t: f32) -> Color {
        let t = t.clamp(0.0, 1.0);
        let mix = |a: u8, b: u8| (a as f32 + (b as f32 - a as f32) * t).round() as u8;
        Color::new(mix(self.r, other.r), mix(self.g, other.g), mix(self.b, other.b))
    }
}

/// Identifies which sprite sheet a draw call selects a frame from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sprite {
    Ship,
    Alien(AlienKind),
    Explosion,
}

/// Backend draw interface consumed by the render pass
pub trait RenderSink {
    /// Draw one frame of a sprite sheet stretched to `rect`
    fn draw_sprite(&mut self, sprite: Sprite, frame: usize, rect: &Rect);

    /// Fill a solid rectangle (shots)
    fn fill_rect(&mut self, rect: &Rect, color: Color);

    /// Fill a solid ellipse inscribed in `rect` (stars)
    fn fill_ellipse(&mut self, rect: &Rect, color: Color);
}

/// Sink that discards every draw call, for headless runs
#[derive(Debug, Default)]
pub struct NullSink;

impl RenderSink for NullSink {
    fn draw_sprite(&mut self, _sprite: Sprite, _frame: usize, _rect: &Rect) {}
    fn fill_rect(&mut self, _rect: &Rect, _color: Color) {}
    fn fill_ellipse(&mut self, _rect: &Rect, _color: Color) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lerp_endpoints_exact() {
        let a = Color::new(200, 100, 50);
        assert_eq!(a.lerp(Color::BLACK, 0.0), a);
        assert_eq!(a.lerp(Color::BLACK, 1.0), Color::BLACK);
        // Out-of-range t clamps instead of overshooting
        assert_eq!(a.lerp(Color::BLACK, 2.0), Color::BLACK);
        assert_eq!(a.lerp(Color::BLACK, -1.0), a);
    }

    #[test]
    fn test_lerp_midpoint() {
        let mid = Color::new(200, 100, 50).lerp(Color::BLACK, 0.5);
        assert_eq!(mid, Color::new(100, 50, 25));
    }
}

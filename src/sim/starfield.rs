//! Decorative background starfield
//!
//! Purely visual: stars never collide with anything. The field is an
//! explicitly constructed, seeded service owned by the game state for the
//! session's lifetime, not a process-wide global.

use rand::Rng;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::rect::Rect;
use crate::consts::{STAR_MAX_FLICKER, STAR_MIN_FLICKER};
use crate::platform::Color;

/// A single flickering star
///
/// Flicker is a ping-pong lerp between two colors over a fixed period.
#[derive(Debug, Clone)]
pub struct Star {
    pub rect: Rect,
    first_color: Color,
    second_color: Color,
    current_color: Color,
    flicker_timer: f32,
    total_flicker_time: f32,
    flicker_direction: f32,
}

impl Star {
    pub fn new(rect: Rect, color: Color) -> Self {
        Self {
            rect,
            first_color: color,
            second_color: Color::BLACK,
            current_color: color,
            flicker_timer: 0.0,
            total_flicker_time: 0.5,
            flicker_direction: 1.0,
        }
    }

    pub fn set_total_flicker_time(&mut self, time: f32) {
        self.total_flicker_time = time;
    }

    pub fn color(&self) -> Color {
        self.current_color
    }

    pub fn update(&mut self, dt: f32) {
        self.flicker_timer += dt * self.flicker_direction;
        let percent = (self.flicker_timer / self.total_flicker_time).clamp(0.0, 1.0);

        self.current_color = self.first_color.lerp(self.second_color, percent);

        // Reverse at either end of the fade
        if percent >= 1.0 {
            self.flicker_direction = -1.0;
        } else if percent <= 0.0 {
            self.flicker_direction = 1.0;
        }
    }
}

/// The full field of background stars
#[derive(Debug, Clone)]
pub struct Starfield {
    stars: Vec<Star>,
}

impl Starfield {
    /// Scatter `count` gray stars across the area, deterministically from
    /// the seed.
    pub fn new(seed: u64, area: &Rect, count: usize) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let mut stars = Vec::with_capacity(count);

        for _ in 0..count {
            let gray: u8 = rng.random_range(0..=255);
            let x = rng.random_range(0.0..area.size.x);
            let y = rng.random_range(0.0..area.size.y);
            let size = rng.random_range(1.0..=6.0f32).floor();

            let mut star = Star::new(
                Rect::new(x, y, size, size),
                Color::new(gray, gray, gray),
            );
            star.set_total_flicker_time(rng.random_range(STAR_MIN_FLICKER..STAR_MAX_FLICKER));
            stars.push(star);
        }

        Self { stars }
    }

    pub fn stars(&self) -> &[Star] {
        &self.stars
    }

    pub fn update(&mut self, dt: f32) {
        for star in &mut self.stars {
            star.update(dt);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn area() -> Rect {
        Rect::new(0.0, 0.0, 800.0, 600.0)
    }

    #[test]
    fn test_starfield_deterministic() {
        let a = Starfield::new(7, &area(), 50);
        let b = Starfield::new(7, &area(), 50);
        for (x, y) in a.stars().iter().zip(b.stars()) {
            assert_eq!(x.rect, y.rect);
            assert_eq!(x.color(), y.color());
        }
    }

    #[test]
    fn test_stars_inside_area() {
        let field = Starfield::new(3, &area(), 200);
        for star in field.stars() {
            assert!(star.rect.pos.x >= 0.0 && star.rect.pos.x < 800.0);
            assert!(star.rect.pos.y >= 0.0 && star.rect.pos.y < 600.0);
            assert!(star.rect.size.x >= 1.0 && star.rect.size.x <= 6.0);
        }
    }

    #[test]
    fn test_flicker_ping_pong() {
        let mut star = Star::new(Rect::new(0.0, 0.0, 2.0, 2.0), Color::new(200, 200, 200));
        star.set_total_flicker_time(1.0);

        // Fade all the way to the second color
        star.update(1.0);
        assert_eq!(star.color(), Color::BLACK);
        // Direction reversed: fades back toward the first color
        star.update(0.5);
        let mid = star.color();
        assert!(mid.r > 0);
        star.update(0.5);
        assert_eq!(star.color(), Color::new(200, 200, 200));
    }
}

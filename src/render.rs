//! Render pass
//!
//! Walks the final simulation state for the frame and emits draw calls to a
//! `RenderSink` in back-to-front order: starfield, ship, shots, aliens, then
//! explosion overlays. The background is drawn first so stars never occlude
//! actors.

use crate::platform::{Color, RenderSink, Sprite};
use crate::sim::GameState;

const SHOT_COLOR: Color = Color::WHITE;

/// Draw one frame of the game
pub fn render(state: &GameState, sink: &mut dyn RenderSink) {
    for star in state.starfield.stars() {
        sink.fill_ellipse(&star.rect, star.color());
    }

    if state.ship.is_alive() {
        sink.draw_sprite(Sprite::Ship, 0, &state.ship.rect);
    }
    for shot in &state.ship.shots {
        sink.fill_rect(&shot.rect, SHOT_COLOR);
    }

    // Dead aliens leave no sprite behind but their shots stay in flight
    for alien in state.wave.fleet().aliens() {
        if alien.is_alive() {
            sink.draw_sprite(
                Sprite::Alien(alien.kind),
                alien.anim.current_frame(),
                &alien.rect,
            );
        }
        for shot in &alien.shots {
            sink.fill_rect(&shot.rect, SHOT_COLOR);
        }
    }

    for explosion in &state.explosions {
        if !explosion.is_finished() {
            sink.draw_sprite(
                Sprite::Explosion,
                explosion.anim().current_frame(),
                &explosion.rect,
            );
        }
    }
}

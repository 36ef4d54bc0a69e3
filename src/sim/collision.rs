//! Per-frame collision resolution
//!
//! Runs after all movement for the frame. Order matters and is part of the
//! contract: aliens are tested in flat fleet order against player shots in
//! firing order, then alien shots in owner order against the ship. Both
//! the alive flag and the active flag are re-checked before every pairwise
//! test, so a shot registers at most one hit per frame.

use super::state::{Explosion, GameEvent, Ship};
use super::wave::Wave;

/// Resolve all projectile collisions for this frame, spawning explosion
/// effects and emitting events for each outcome.
pub fn resolve_collisions(
    ship: &mut Ship,
    wave: &mut Wave,
    explosions: &mut Vec<Explosion>,
    events: &mut Vec<GameEvent>,
) {
    // A destroyed ship ends the battle; nothing left to resolve
    if !ship.is_alive() {
        return;
    }

    // Player shots against living aliens
    for alien in wave.fleet_mut().aliens_mut() {
        for shot in &mut ship.shots {
            if alien.is_alive() && shot.active && shot.rect.intersects(&alien.rect) {
                alien.kill();
                shot.active = false;
                explosions.push(Explosion::at(alien.rect));
                events.push(GameEvent::AlienKilled { kind: alien.kind });
            }
        }
    }

    // Alien shots against the ship
    for alien in wave.fleet_mut().aliens_mut() {
        for shot in &mut alien.shots {
            if shot.active && shot.rect.intersects(&ship.rect) {
                shot.active = false;
                ship.reduce_hp(1);
                events.push(GameEvent::PlayerHit {
                    hp_left: ship.hp(),
                });

                if !ship.is_alive() {
                    explosions.push(Explosion::at(ship.rect));
                    events.push(GameEvent::PlayerKilled);
                }
            }
        }
    }
}

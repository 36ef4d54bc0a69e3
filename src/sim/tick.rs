//! Per-frame simulation step
//!
//! One `tick` advances the whole game by `dt` seconds in a fixed order:
//! player (input, movement, shots), wave, background, collision resolution,
//! then effects. The shell drives this at a fixed timestep and drains the
//! event queue afterwards.

use super::attack::SweepAttack;
use super::collision::resolve_collisions;
use super::deploy::GridDeployment;
use super::rect::Rect;
use super::state::{Alien, AlienKind, GameEvent, GameState, ShotOwner};
use super::wave::{FormationError, Wave};
use crate::consts::*;

/// Input commands for a single tick
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    /// Horizontal movement intent: -1.0, 0.0 or +1.0
    pub move_dir: f32,
    /// Fire intent, edge-triggered by the shell
    pub fire: bool,
}

/// Build the standard first wave: 22 octopuses, 22 crabs and 22 squids in
/// flat order, deploying 11 per row with the classic sweep attack.
pub fn standard_wave(seed: u64, area: Rect) -> Wave {
    let mut wave = Wave::new(area);

    let per_kind = ALIENS_PER_ROW * 2;
    for kind in [AlienKind::Octopus, AlienKind::Crab, AlienKind::Squid] {
        for _ in 0..per_kind {
            wave.fleet_mut().add_alien(Alien::new(kind));
        }
    }

    wave.set_deployment_strategy(Some(Box::new(GridDeployment::new(ALIENS_PER_ROW))));
    wave.set_attack_strategy(Some(Box::new(SweepAttack::new(seed))));
    wave
}

/// Create and start a full game session
pub fn new_game(seed: u64) -> Result<GameState, FormationError> {
    let area = Rect::new(0.0, 0.0, SCREEN_WIDTH, SCREEN_HEIGHT);
    let mut wave = standard_wave(seed, area);
    wave.start()?;
    Ok(GameState::with_wave(seed, area, wave))
}

/// Advance the game state by one timestep
pub fn tick(state: &mut GameState, input: &TickInput, dt: f32) {
    if state.ship.is_alive() {
        // Input is ignored while the wave is still deploying
        if !state.wave.is_deploying() {
            if input.fire && state.ship.fire() {
                state.events.push(GameEvent::ShotFired {
                    owner: ShotOwner::Player,
                });
            }
            if input.move_dir != 0.0 {
                state.ship.set_move_dir(input.move_dir);
            }
        }

        state.ship.update(dt, &state.area);
        state.wave.update(dt, &mut state.events);
    }

    state.starfield.update(dt);

    resolve_collisions(
        &mut state.ship,
        &mut state.wave,
        &mut state.explosions,
        &mut state.events,
    );

    // Effects advance last; finished ones are swept with a retain pass
    for explosion in &mut state.explosions {
        explosion.update(dt);
    }
    state.explosions.retain(|e| !e.is_finished());

    if !state.wave_cleared && state.wave.is_defeated() {
        state.wave_cleared = true;
        state.events.push(GameEvent::WaveCleared);
        log::info!("wave cleared at tick {}", state.time_ticks);
    }

    state.time_ticks += 1;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::Explosion;

    /// Run deployment to completion: 6 rows x 6 cycles = 36 row steps at
    /// DEPLOY_MOVE_DELAY apart, plus the transition tick.
    fn finish_deployment(state: &mut GameState) {
        let input = TickInput::default();
        let mut guard = 0;
        while state.wave.is_deploying() {
            tick(state, &input, DEPLOY_MOVE_DELAY);
            guard += 1;
            assert!(guard < 1000, "deployment never finished");
        }
        tick(state, &input, 0.0);
    }

    #[test]
    fn test_new_game_enters_deploy() {
        let state = new_game(1).unwrap();
        assert!(state.wave.is_deploying());
        assert!(!state.wave.is_attacking());
        assert_eq!(state.wave.fleet().total_aliens(), 66);
        assert_eq!(state.wave.fleet().rows(), Some(6));
        assert_eq!(state.wave.fleet().cols(), Some(11));
    }

    #[test]
    fn test_fire_blocked_while_deploying() {
        let mut state = new_game(1).unwrap();
        let input = TickInput {
            fire: true,
            ..Default::default()
        };
        for _ in 0..10 {
            tick(&mut state, &input, DEPLOY_MOVE_DELAY);
        }
        assert!(state.ship.shots.is_empty());

        finish_deployment(&mut state);
        tick(&mut state, &input, SIM_DT);
        assert_eq!(state.ship.shots.len(), 1);
        assert!(state
            .drain_events()
            .contains(&GameEvent::ShotFired {
                owner: ShotOwner::Player
            }));
    }

    #[test]
    fn test_attack_starts_without_idle_frame() {
        let mut state = new_game(1).unwrap();
        finish_deployment(&mut state);
        assert!(state.wave.is_attacking());
        assert!(state.drain_events().contains(&GameEvent::WaveDeployed));
    }

    #[test]
    fn test_determinism() {
        let mut a = new_game(99).unwrap();
        let mut b = new_game(99).unwrap();

        let inputs = [
            TickInput {
                move_dir: 1.0,
                ..Default::default()
            },
            TickInput {
                fire: true,
                ..Default::default()
            },
            TickInput {
                move_dir: -1.0,
                fire: true,
            },
            TickInput::default(),
        ];

        for i in 0..600 {
            let input = &inputs[i % inputs.len()];
            tick(&mut a, input, SIM_DT);
            tick(&mut b, input, SIM_DT);
        }

        assert_eq!(a.time_ticks, b.time_ticks);
        assert_eq!(a.ship.rect, b.ship.rect);
        assert_eq!(a.ship.shots.len(), b.ship.shots.len());
        for (x, y) in a
            .wave
            .fleet()
            .aliens()
            .iter()
            .zip(b.wave.fleet().aliens())
        {
            assert_eq!(x.rect, y.rect);
            assert_eq!(x.is_alive(), y.is_alive());
            assert_eq!(x.shots.len(), y.shots.len());
        }
    }

    #[test]
    fn test_wave_cleared_fires_once() {
        let mut state = new_game(5).unwrap();
        finish_deployment(&mut state);
        state.drain_events();

        for alien in state.wave.fleet_mut().aliens_mut() {
            alien.kill();
        }
        tick(&mut state, &TickInput::default(), SIM_DT);
        assert!(state.drain_events().contains(&GameEvent::WaveCleared));

        tick(&mut state, &TickInput::default(), SIM_DT);
        assert!(!state.drain_events().contains(&GameEvent::WaveCleared));
    }

    #[test]
    fn test_dead_ship_freezes_player_and_wave() {
        let mut state = new_game(3).unwrap();
        finish_deployment(&mut state);
        state.ship.reduce_hp(SHIP_HP);

        let ship_pos = state.ship.rect.pos;
        let alien_pos: Vec<_> = state
            .wave
            .fleet()
            .aliens()
            .iter()
            .map(|a| a.rect.pos)
            .collect();

        let input = TickInput {
            move_dir: 1.0,
            fire: true,
        };
        for _ in 0..10 {
            tick(&mut state, &input, ATTACK_MOVE_DELAY);
        }

        assert_eq!(state.ship.rect.pos, ship_pos);
        let after: Vec<_> = state
            .wave
            .fleet()
            .aliens()
            .iter()
            .map(|a| a.rect.pos)
            .collect();
        assert_eq!(alien_pos, after);
    }

    #[test]
    fn test_finished_explosions_swept() {
        let mut state = new_game(2).unwrap();
        state
            .explosions
            .push(Explosion::at(Rect::new(10.0, 10.0, 30.0, 30.0)));

        let input = TickInput::default();
        for _ in 0..4 {
            tick(&mut state, &input, 0.1);
            assert_eq!(state.explosions.len(), 1);
        }
        tick(&mut state, &input, 0.1);
        assert!(state.explosions.is_empty());
    }
}

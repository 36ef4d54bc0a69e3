//! Audio routing
//!
//! The simulation never plays sound directly; it emits `GameEvent`s and the
//! shell maps them to `SoundEffect`s through `route_events`. Playback is
//! behind the `AudioService` trait so headless runs and tests use the no-op
//! implementation. Audio failures are never fatal to the game.

use crate::sim::{GameEvent, ShotOwner};

/// Sound effect types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundEffect {
    /// Player fires
    PlayerShot,
    /// Alien fires
    AlienShot,
    /// Formation row step; the index cycles through the classic four-note
    /// march
    AlienMove(u8),
    /// Something blew up
    Explosion,
    /// Player ship destroyed
    GameOver,
    /// Wave fully cleared
    WaveClear,
}

/// Playback interface the shell implements
pub trait AudioService {
    /// Play a one-shot effect
    fn play(&mut self, effect: SoundEffect);

    /// Start the looping background track
    fn start_music(&mut self) {}

    /// Stop the looping background track
    fn stop_music(&mut self) {}
}

/// Service that discards all playback, for headless runs and tests
#[derive(Debug, Default)]
pub struct NullAudio;

impl AudioService for NullAudio {
    fn play(&mut self, _effect: SoundEffect) {}
}

/// Map one tick's drained events onto sound effects
pub fn route_events(events: &[GameEvent], audio: &mut dyn AudioService) {
    for event in events {
        match event {
            GameEvent::ShotFired {
                owner: ShotOwner::Player,
            } => audio.play(SoundEffect::PlayerShot),
            GameEvent::ShotFired {
                owner: ShotOwner::Alien,
            } => audio.play(SoundEffect::AlienShot),
            GameEvent::FormationStep { sound } => audio.play(SoundEffect::AlienMove(*sound)),
            GameEvent::AlienKilled { .. } => audio.play(SoundEffect::Explosion),
            // The killing hit already plays the explosion via PlayerKilled
            GameEvent::PlayerHit { hp_left } if *hp_left > 0 => {
                audio.play(SoundEffect::Explosion)
            }
            GameEvent::PlayerHit { .. } => {}
            GameEvent::PlayerKilled => {
                audio.play(SoundEffect::Explosion);
                audio.play(SoundEffect::GameOver);
            }
            GameEvent::WaveDeployed => {}
            GameEvent::WaveCleared => audio.play(SoundEffect::WaveClear),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::AlienKind;

    #[derive(Default)]
    struct RecordingAudio {
        played: Vec<SoundEffect>,
    }

    impl AudioService for RecordingAudio {
        fn play(&mut self, effect: SoundEffect) {
            self.played.push(effect);
        }
    }

    #[test]
    fn test_event_mapping() {
        let events = [
            GameEvent::ShotFired {
                owner: ShotOwner::Player,
            },
            GameEvent::FormationStep { sound: 2 },
            GameEvent::ShotFired {
                owner: ShotOwner::Alien,
            },
            GameEvent::AlienKilled {
                kind: AlienKind::Squid,
            },
            GameEvent::WaveCleared,
        ];
        let mut audio = RecordingAudio::default();
        route_events(&events, &mut audio);
        assert_eq!(
            audio.played,
            vec![
                SoundEffect::PlayerShot,
                SoundEffect::AlienMove(2),
                SoundEffect::AlienShot,
                SoundEffect::Explosion,
                SoundEffect::WaveClear,
            ]
        );
    }

    #[test]
    fn test_fatal_hit_plays_explosion_once() {
        let events = [
            GameEvent::PlayerHit { hp_left: 0 },
            GameEvent::PlayerKilled,
        ];
        let mut audio = RecordingAudio::default();
        route_events(&events, &mut audio);
        assert_eq!(
            audio.played,
            vec![SoundEffect::Explosion, SoundEffect::GameOver]
        );
    }

    #[test]
    fn test_nonfatal_hit_plays_explosion() {
        let mut audio = RecordingAudio::default();
        route_events(&[GameEvent::PlayerHit { hp_left: 2 }], &mut audio);
        assert_eq!(audio.played, vec![SoundEffect::Explosion]);
    }
}

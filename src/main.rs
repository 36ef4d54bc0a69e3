//! Retro Invaders entry point
//!
//! Headless demo: runs the fixed-timestep simulation with a simple autopilot
//! until the wave is cleared, the ship is destroyed, or a tick cap is hit.
//! Rendering and audio go to the no-op sinks; events are logged.

use std::path::Path;

use retro_invaders::Settings;
use retro_invaders::audio::{NullAudio, route_events};
use retro_invaders::consts::SIM_DT;
use retro_invaders::platform::NullSink;
use retro_invaders::render::render;
use retro_invaders::sim::{GameEvent, GameState, TickInput, new_game, tick};

/// Ten minutes of simulated time
const MAX_TICKS: u64 = (600.0 / SIM_DT) as u64;

fn main() {
    env_logger::init();

    let seed = std::env::args()
        .nth(1)
        .and_then(|s| s.parse().ok())
        .unwrap_or_else(|| {
            std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .map(|d| d.as_millis() as u64)
                .unwrap_or(0)
        });

    let settings = Settings::load(Path::new(Settings::DEFAULT_FILE));
    log::info!("Retro Invaders starting with seed {seed}");

    let mut state = match new_game(seed) {
        Ok(state) => state,
        Err(e) => {
            log::error!("Failed to set up wave: {e}");
            std::process::exit(1);
        }
    };

    let mut audio = NullAudio;
    let mut sink = NullSink;
    let mut game_over = false;

    while state.time_ticks < MAX_TICKS {
        let input = autopilot(&state);
        tick(&mut state, &input, SIM_DT);

        let events = state.drain_events();
        for event in &events {
            log::debug!("tick {}: {event:?}", state.time_ticks);
            match event {
                GameEvent::PlayerKilled => {
                    log::info!("Ship destroyed at tick {}", state.time_ticks);
                    game_over = true;
                }
                GameEvent::WaveCleared => game_over = true,
                _ => {}
            }
        }
        route_events(&events, &mut audio);

        if settings.starfield {
            render(&state, &mut sink);
        }

        if game_over {
            break;
        }
    }

    log::info!(
        "Demo finished after {} ticks, ship hp {}",
        state.time_ticks,
        state.ship.hp()
    );
}

/// Chase the nearest living alien's column and fire when lined up
fn autopilot(state: &GameState) -> TickInput {
    let ship_x = state.ship.rect.center().x;

    let target = state
        .wave
        .fleet()
        .aliens()
        .iter()
        .filter(|a| a.is_alive())
        .map(|a| a.rect.center().x)
        .min_by(|a, b| (a - ship_x).abs().total_cmp(&(b - ship_x).abs()));

    let Some(target_x) = target else {
        return TickInput::default();
    };

    let dx = target_x - ship_x;
    TickInput {
        move_dir: if dx.abs() > 4.0 { dx.signum() } else { 0.0 },
        fire: dx.abs() < 20.0,
    }
}

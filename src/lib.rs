//! Retro Invaders - a Space Invaders style arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (wave state machine, collisions, effects)
//! - `platform`: Rendering abstraction the shell implements
//! - `render`: Translates final sim state into draw calls
//! - `audio`: Sound effect routing from simulation events
//! - `settings`: Persisted preferences

pub mod audio;
pub mod platform;
pub mod render;
pub mod settings;
pub mod sim;

pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep (120 Hz)
    pub const SIM_DT: f32 = 1.0 / 120.0;

    /// Playfield dimensions
    pub const SCREEN_WIDTH: f32 = 800.0;
    pub const SCREEN_HEIGHT: f32 = 600.0;

    /// Alien grid cell and spacing
    pub const ALIEN_SIZE: f32 = 30.0;
    pub const ROW_SPACING: f32 = 10.0;
    pub const COL_SPACING: f32 = 5.0;
    /// Aliens per formation row in the standard wave
    pub const ALIENS_PER_ROW: usize = 11;
    /// Seconds per frame of the alien idle animation
    pub const ALIEN_ANIM_FRAME_TIME: f32 = 0.7;

    /// Deployment: delay between row steps
    pub const DEPLOY_MOVE_DELAY: f32 = 0.1;

    /// Attack: delay between row steps
    pub const ATTACK_MOVE_DELAY: f32 = 0.2;
    /// Attack: bounds of the randomized fire delay
    pub const MIN_ATTACK_DELAY: f32 = 0.4;
    pub const MAX_ATTACK_DELAY: f32 = 1.1;
    /// Number of cycling movement sound blips
    pub const MOVE_SOUND_STEPS: u8 = 4;

    /// Player ship defaults
    pub const SHIP_SIZE: f32 = 50.0;
    pub const SHIP_SPEED: f32 = 500.0;
    pub const SHIP_HP: u32 = 3;
    pub const SHIP_MAX_SHOTS: usize = 5;
    pub const SHIP_FIRE_COOLDOWN: f32 = 0.3;

    /// Shot sizes and speeds (positive y is down)
    pub const SHIP_SHOT_SIZE: (f32, f32) = (5.0, 10.0);
    pub const SHIP_SHOT_SPEED: f32 = -1300.0;
    pub const ALIEN_SHOT_SIZE: (f32, f32) = (4.0, 10.0);
    pub const ALIEN_SHOT_SPEED: f32 = 300.0;

    /// Explosion effect
    pub const EXPLOSION_DURATION: f32 = 0.5;
    pub const EXPLOSION_CYCLES: u32 = 1;
    pub const EXPLOSION_FRAMES: usize = 5;

    /// Background starfield
    pub const STAR_COUNT: usize = 400;
    pub const STAR_MIN_FLICKER: f32 = 0.6;
    pub const STAR_MAX_FLICKER: f32 = 1.2;
}

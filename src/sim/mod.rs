//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Seeded RNG only
//! - Stable iteration order (flat fleet order, formation row/column order)
//! - No rendering backend dependencies (plain value types like `Color` only)

pub mod animation;
pub mod attack;
pub mod collision;
pub mod deploy;
pub mod rect;
pub mod starfield;
pub mod state;
pub mod tick;
pub mod wave;

pub use animation::{Animation, PlayMode};
pub use attack::SweepAttack;
pub use collision::resolve_collisions;
pub use deploy::GridDeployment;
pub use rect::Rect;
pub use starfield::{Star, Starfield};
pub use state::{
    Alien, AlienKind, Explosion, GameEvent, GameState, Ship, Shot, ShotOwner,
};
pub use tick::{TickInput, new_game, standard_wave, tick};
pub use wave::{
    AttackStrategy, DeploymentStrategy, Fleet, Formation, FormationError, Wave, WavePhase,
};

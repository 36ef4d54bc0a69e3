//! The alien wave: a two-phase state machine over a fleet of aliens
//!
//! A wave owns every alien for one level plus the two strategies that govern
//! its behavior: a deployment strategy that moves the fleet into formation
//! and an attack strategy that drives movement and fire once deployed.
//! A wave without both strategies is Invalid and does nothing.

use std::fmt;

use thiserror::Error;

use super::rect::Rect;
use super::state::{Alien, GameEvent};

/// Formation setup failures. These are configuration errors and fail fast
/// rather than producing a degenerate grid.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormationError {
    #[error("wave has no aliens to deploy")]
    Empty,
    #[error("aliens per row must be greater than zero")]
    ZeroPerRow,
    #[error("{total} aliens cannot split evenly into rows of {per_row}")]
    UnevenRows { total: usize, per_row: usize },
}

/// Current phase of a wave
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WavePhase {
    /// Missing a strategy; update and render are no-ops
    Invalid,
    /// Aliens are moving into formation
    Deploy,
    /// Aliens sweep, advance and fire
    Attack,
}

/// Row/column grid view over a fleet's aliens
///
/// Slots hold flat fleet indices. The grid's shape is fixed once built;
/// dead aliens stay in their slot as conceptual holes.
#[derive(Debug, Clone)]
pub struct Formation {
    rows: usize,
    cols: usize,
    slots: Vec<usize>,
}

impl Formation {
    pub fn new(rows: usize, cols: usize, slots: Vec<usize>) -> Self {
        debug_assert_eq!(rows * cols, slots.len());
        Self { rows, cols, slots }
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Fleet index at the given cell, or None when out of range
    pub fn get(&self, row: usize, col: usize) -> Option<usize> {
        if row >= self.rows || col >= self.cols {
            return None;
        }
        Some(self.slots[row * self.cols + col])
    }
}

/// The aliens of one wave plus the grid view and playfield bounds
///
/// The flat list is the single owner of every alien; the formation refers to
/// them by index so alive/dead state has one source of truth.
#[derive(Debug)]
pub struct Fleet {
    aliens: Vec<Alien>,
    formation: Option<Formation>,
    area: Rect,
}

impl Fleet {
    pub fn new(area: Rect) -> Self {
        Self {
            aliens: Vec::new(),
            formation: None,
            area,
        }
    }

    pub fn add_alien(&mut self, alien: Alien) {
        self.aliens.push(alien);
    }

    #[inline]
    pub fn total_aliens(&self) -> usize {
        self.aliens.len()
    }

    /// Alien by flat index, insertion order
    pub fn alien(&self, index: usize) -> Option<&Alien> {
        self.aliens.get(index)
    }

    pub fn alien_mut(&mut self, index: usize) -> Option<&mut Alien> {
        self.aliens.get_mut(index)
    }

    pub fn aliens(&self) -> &[Alien] {
        &self.aliens
    }

    pub fn aliens_mut(&mut self) -> &mut [Alien] {
        &mut self.aliens
    }

    /// Alien at a formation cell; None before deployment or out of range
    pub fn alien_at(&self, row: usize, col: usize) -> Option<&Alien> {
        let idx = self.formation.as_ref()?.get(row, col)?;
        self.aliens.get(idx)
    }

    pub fn alien_at_mut(&mut self, row: usize, col: usize) -> Option<&mut Alien> {
        let idx = self.formation.as_ref()?.get(row, col)?;
        self.aliens.get_mut(idx)
    }

    pub fn formation(&self) -> Option<&Formation> {
        self.formation.as_ref()
    }

    pub fn set_formation(&mut self, formation: Formation) {
        self.formation = Some(formation);
    }

    /// Formation row count; None before deployment
    pub fn rows(&self) -> Option<usize> {
        self.formation.as_ref().map(Formation::rows)
    }

    /// Formation column count; None before deployment
    pub fn cols(&self) -> Option<usize> {
        self.formation.as_ref().map(Formation::cols)
    }

    pub fn area(&self) -> &Rect {
        &self.area
    }

    pub fn left_boundary(&self) -> f32 {
        self.area.left()
    }

    pub fn right_boundary(&self) -> f32 {
        self.area.right()
    }

    /// True once every alien is dead. Monotonic within a wave's lifetime.
    pub fn is_defeated(&self) -> bool {
        self.aliens.iter().all(|a| !a.is_alive())
    }

    /// Advance all aliens in formation: animations for the living, shots
    /// for everyone (shots fired before death keep flying).
    fn update_aliens(&mut self, dt: f32) {
        if self.formation.is_none() {
            return;
        }
        for alien in &mut self.aliens {
            alien.update(dt, &self.area);
        }
    }
}

/// Moves a fleet from off-screen into its formation positions
pub trait DeploymentStrategy: fmt::Debug {
    /// Build the formation grid and position every alien at its starting
    /// cell. Fails fast on a misconfigured fleet.
    fn start_deployment(&mut self, fleet: &mut Fleet) -> Result<(), FormationError>;

    /// True while the fleet is still moving into position
    fn is_deploying(&self) -> bool;

    fn update(&mut self, fleet: &mut Fleet, dt: f32);
}

/// Drives a deployed fleet's movement and fire scheduling
pub trait AttackStrategy: fmt::Debug {
    fn start_attack(&mut self, fleet: &mut Fleet);

    /// True while started and the fleet is not defeated
    fn is_attacking(&self, fleet: &Fleet) -> bool;

    fn update(&mut self, fleet: &mut Fleet, dt: f32, events: &mut Vec<GameEvent>);
}

/// One level's worth of aliens and the strategies that govern them
#[derive(Debug)]
pub struct Wave {
    phase: WavePhase,
    fleet: Fleet,
    deployment: Option<Box<dyn DeploymentStrategy>>,
    attack: Option<Box<dyn AttackStrategy>>,
}

impl Wave {
    pub fn new(area: Rect) -> Self {
        Self {
            phase: WavePhase::Invalid,
            fleet: Fleet::new(area),
            deployment: None,
            attack: None,
        }
    }

    pub fn fleet(&self) -> &Fleet {
        &self.fleet
    }

    pub fn fleet_mut(&mut self) -> &mut Fleet {
        &mut self.fleet
    }

    #[inline]
    pub fn phase(&self) -> WavePhase {
        self.phase
    }

    /// Clearing either strategy forces the wave Invalid immediately
    pub fn set_deployment_strategy(&mut self, strategy: Option<Box<dyn DeploymentStrategy>>) {
        if strategy.is_none() {
            self.phase = WavePhase::Invalid;
        }
        self.deployment = strategy;
    }

    pub fn set_attack_strategy(&mut self, strategy: Option<Box<dyn AttackStrategy>>) {
        if strategy.is_none() {
            self.phase = WavePhase::Invalid;
        }
        self.attack = strategy;
    }

    /// A wave missing either strategy cannot run
    pub fn is_invalid(&self) -> bool {
        self.deployment.is_none() || self.attack.is_none()
    }

    pub fn is_deploying(&self) -> bool {
        self.deployment.as_ref().is_some_and(|d| d.is_deploying())
    }

    pub fn is_attacking(&self) -> bool {
        self.attack.as_ref().is_some_and(|a| a.is_attacking(&self.fleet))
    }

    pub fn is_defeated(&self) -> bool {
        self.fleet.is_defeated()
    }

    /// Start the wave: validate both strategies, run deployment setup, and
    /// enter the Deploy phase. A missing strategy degrades to a no-op with
    /// the wave left Invalid; a misconfigured fleet is a hard error.
    pub fn start(&mut self) -> Result<(), FormationError> {
        let (Some(deployment), Some(_)) = (self.deployment.as_mut(), self.attack.as_ref()) else {
            self.phase = WavePhase::Invalid;
            return Ok(());
        };

        if let Err(err) = deployment.start_deployment(&mut self.fleet) {
            self.phase = WavePhase::Invalid;
            return Err(err);
        }

        self.phase = WavePhase::Deploy;
        log::info!(
            "wave started: {} aliens in {}x{} formation",
            self.fleet.total_aliens(),
            self.fleet.rows().unwrap_or(0),
            self.fleet.cols().unwrap_or(0),
        );
        Ok(())
    }

    /// Advance the current phase, then all aliens. No-op when Invalid or
    /// defeated.
    pub fn update(&mut self, dt: f32, events: &mut Vec<GameEvent>) {
        let (Some(deployment), Some(attack)) = (self.deployment.as_mut(), self.attack.as_mut())
        else {
            return;
        };
        if self.fleet.is_defeated() {
            return;
        }

        match self.phase {
            WavePhase::Deploy => {
                // The tick that observes deployment completion switches
                // phases and starts the attack, with no idle frame between.
                if !deployment.is_deploying() {
                    self.phase = WavePhase::Attack;
                    attack.start_attack(&mut self.fleet);
                    events.push(GameEvent::WaveDeployed);
                    log::info!("wave deployed, attack phase started");
                } else {
                    deployment.update(&mut self.fleet, dt);
                }
            }
            WavePhase::Attack => {
                if attack.is_attacking(&self.fleet) {
                    attack.update(&mut self.fleet, dt, events);
                }
            }
            WavePhase::Invalid => return,
        }

        self.fleet.update_aliens(dt);
    }
}

//! Sweep attack strategy
//!
//! The classic march: rows step side to side one at a time, front row first,
//! producing the staggered shuffle. When the sweep edge would leave the
//! playfield the whole formation advances one step toward the player, then
//! reverses direction. Fire is scheduled on a randomized delay and always
//! comes from the front-most living alien of a random living column.

use rand::Rng;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::state::{GameEvent, ShotOwner};
use super::wave::{AttackStrategy, Fleet};
use crate::consts::{
    ALIEN_SIZE, ATTACK_MOVE_DELAY, COL_SPACING, MAX_ATTACK_DELAY, MIN_ATTACK_DELAY,
    MOVE_SOUND_STEPS,
};

#[derive(Debug)]
pub struct SweepAttack {
    /// Row moved on the next step (front-to-back order)
    row_to_move: usize,
    /// +1.0 or -1.0
    x_direction: f32,
    x_step: f32,
    y_step: f32,

    move_delay: f32,
    move_timer: f32,
    /// Latched when the next sweep step would exit the bounds; the next
    /// full pass moves every row down instead of sideways
    move_forward: bool,

    current_attack_delay: f32,
    attack_timer: f32,

    attacking: bool,
    move_sound_index: u8,
    rng: Pcg32,
}

impl SweepAttack {
    pub fn new(seed: u64) -> Self {
        Self {
            row_to_move: 0,
            x_direction: 1.0,
            x_step: 0.0,
            y_step: 0.0,
            move_delay: ATTACK_MOVE_DELAY,
            move_timer: 0.0,
            move_forward: false,
            current_attack_delay: 0.0,
            attack_timer: 0.0,
            attacking: false,
            move_sound_index: 0,
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    /// Roll a fresh fire delay in [MIN_ATTACK_DELAY, MAX_ATTACK_DELAY)
    fn reset_attack_delay(&mut self) {
        self.current_attack_delay = self.rng.random_range(MIN_ATTACK_DELAY..MAX_ATTACK_DELAY);
        self.attack_timer = 0.0;
    }

    fn update_movement(&mut self, fleet: &mut Fleet, dt: f32, events: &mut Vec<GameEvent>) {
        self.move_timer += dt;
        if self.move_timer < self.move_delay {
            return;
        }
        self.move_timer -= self.move_delay;

        let (Some(rows), Some(cols)) = (fleet.rows(), fleet.cols()) else {
            return;
        };
        let front_row = rows - 1;

        // At the start of a pass, check whether the sweep edge alien has
        // room for another sideways step; if not, latch a forward advance.
        if !self.move_forward && self.row_to_move == front_row {
            let edge_col = if self.x_direction < 0.0 { 0 } else { cols - 1 };
            if let Some(edge) = fleet.alien_at(front_row, edge_col) {
                let new_x = edge.rect.pos.x + self.x_step * self.x_direction;
                if new_x < fleet.left_boundary()
                    || new_x + edge.rect.size.x > fleet.right_boundary()
                {
                    self.move_forward = true;
                }
            }
        }

        // One row per tick, sideways or forward
        for c in 0..cols {
            if let Some(alien) = fleet.alien_at_mut(self.row_to_move, c) {
                if self.move_forward {
                    alien.rect.pos.y += self.y_step;
                } else {
                    alien.rect.pos.x += self.x_step * self.x_direction;
                }
            }
        }

        // Walk to the row behind; wrapping back to the front ends the pass
        if self.row_to_move == 0 {
            self.row_to_move = front_row;
            if self.move_forward {
                self.x_direction = -self.x_direction;
                self.move_forward = false;
            }
        } else {
            self.row_to_move -= 1;
        }

        events.push(GameEvent::FormationStep {
            sound: self.move_sound_index,
        });
        self.move_sound_index = (self.move_sound_index + 1) % MOVE_SOUND_STEPS;
    }

    fn update_attacks(&mut self, fleet: &mut Fleet, dt: f32, events: &mut Vec<GameEvent>) {
        if fleet.is_defeated() {
            return;
        }

        self.attack_timer += dt;
        if self.attack_timer < self.current_attack_delay {
            return;
        }
        self.reset_attack_delay();

        let (Some(rows), Some(cols)) = (fleet.rows(), fleet.cols()) else {
            return;
        };

        // Enumerate columns that still hold a living alien so target
        // selection terminates even on a nearly-empty fleet.
        let live_cols: Vec<usize> = (0..cols)
            .filter(|&c| {
                (0..rows).any(|r| fleet.alien_at(r, c).is_some_and(|a| a.is_alive()))
            })
            .collect();
        if live_cols.is_empty() {
            return;
        }
        let col = live_cols[self.rng.random_range(0..live_cols.len())];

        // Front-most living alien of the chosen column fires
        let shooter_row =
            (0..rows).rev().find(|&r| fleet.alien_at(r, col).is_some_and(|a| a.is_alive()));
        if let Some(row) = shooter_row {
            if let Some(alien) = fleet.alien_at_mut(row, col) {
                alien.fire_shot();
                events.push(GameEvent::ShotFired {
                    owner: ShotOwner::Alien,
                });
            }
        }
    }
}

impl AttackStrategy for SweepAttack {
    fn start_attack(&mut self, fleet: &mut Fleet) {
        // Uniform step distance comes from the spacing of the first two
        // aliens in the formation; single-column waves fall back to the
        // grid cell pitch.
        let step = match (fleet.alien(0), fleet.alien(1)) {
            (Some(first), Some(second)) => (second.rect.pos.x - first.rect.pos.x).abs(),
            _ => 0.0,
        };
        let step = if step > 0.0 {
            step
        } else {
            ALIEN_SIZE + COL_SPACING
        };

        self.row_to_move = fleet.rows().map(|r| r - 1).unwrap_or(0);
        self.x_direction = 1.0;
        self.move_delay = ATTACK_MOVE_DELAY;
        self.move_timer = 0.0;
        self.x_step = step;
        self.y_step = step;
        self.attacking = true;
        self.move_forward = false;
        self.move_sound_index = 0;

        self.reset_attack_delay();
    }

    fn is_attacking(&self, fleet: &Fleet) -> bool {
        self.attacking && !fleet.is_defeated()
    }

    fn update(&mut self, fleet: &mut Fleet, dt: f32, events: &mut Vec<GameEvent>) {
        if !self.attacking {
            return;
        }

        self.update_movement(fleet, dt, events);
        self.update_attacks(fleet, dt, events);
    }
}

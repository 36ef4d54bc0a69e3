//! Grid deployment strategy
//!
//! Mimics the classic cabinet intro: the fleet starts fully above the
//! visible playfield in a centered grid and marches down one row at a time,
//! bottom row first, until every row has stepped down enough times to land
//! in its attack position.

use glam::Vec2;

use super::rect::Rect;
use super::wave::{DeploymentStrategy, Fleet, Formation, FormationError};
use crate::consts::{ALIEN_SIZE, COL_SPACING, DEPLOY_MOVE_DELAY, ROW_SPACING};

/// Deployment that forms a centered rows x columns grid above the playfield
/// and walks it down row by row.
#[derive(Debug)]
pub struct GridDeployment {
    aliens_per_row: usize,
    /// Extra full passes so later waves start closer to the player
    extra_rows: usize,

    /// Row moved on the next step (bottom-to-top order)
    row_to_move: usize,
    move_cycles_remaining: usize,
    move_distance: f32,
    move_delay: f32,
    move_timer: f32,
    deploying: bool,
}

impl GridDeployment {
    pub fn new(aliens_per_row: usize) -> Self {
        Self::with_advance(aliens_per_row, 0)
    }

    /// `extra_rows` adds that many full top-to-bottom move cycles, starting
    /// the wave already advanced down the playfield.
    pub fn with_advance(aliens_per_row: usize, extra_rows: usize) -> Self {
        Self {
            aliens_per_row,
            extra_rows,
            row_to_move: 0,
            move_cycles_remaining: 0,
            move_distance: 0.0,
            move_delay: DEPLOY_MOVE_DELAY,
            move_timer: 0.0,
            deploying: false,
        }
    }

    fn grid_shape(&self, total: usize) -> Result<(usize, usize), FormationError> {
        if total == 0 {
            return Err(FormationError::Empty);
        }
        if self.aliens_per_row == 0 {
            return Err(FormationError::ZeroPerRow);
        }
        if total % self.aliens_per_row != 0 {
            return Err(FormationError::UnevenRows {
                total,
                per_row: self.aliens_per_row,
            });
        }
        let rows = total / self.aliens_per_row;
        let cols = total / rows;
        Ok((rows, cols))
    }
}

impl DeploymentStrategy for GridDeployment {
    fn start_deployment(&mut self, fleet: &mut Fleet) -> Result<(), FormationError> {
        let total = fleet.total_aliens();
        let (rows, cols) = self.grid_shape(total)?;

        let size = ALIEN_SIZE;
        let wave_w = cols as f32 * size + (cols as f32 - 1.0) * COL_SPACING;
        let wave_h = rows as f32 * size + (rows as f32 - 1.0) * ROW_SPACING;
        let wave_x = (fleet.area().size.x - wave_w) / 2.0;
        // Start fully above the visible area
        let wave_y = -wave_h;
        let row_h = size + ROW_SPACING;

        // Run-state reset so a strategy can be reused across waves
        self.move_timer = 0.0;
        self.move_delay = DEPLOY_MOVE_DELAY;
        self.row_to_move = rows - 1;
        self.move_distance = row_h;
        self.move_cycles_remaining = rows + self.extra_rows;

        // Assign each alien its cell, flat order row-major
        let mut slots = Vec::with_capacity(total);
        for r in 0..rows {
            for c in 0..cols {
                let i = r * cols + c;
                let x = wave_x + (size + COL_SPACING) * c as f32;
                let y = wave_y + (size + ROW_SPACING) * r as f32;
                if let Some(alien) = fleet.alien_mut(i) {
                    alien.rect = Rect {
                        pos: Vec2::new(x, y),
                        size: Vec2::new(size, size),
                    };
                }
                slots.push(i);
            }
        }
        fleet.set_formation(Formation::new(rows, cols, slots));

        self.deploying = true;
        Ok(())
    }

    fn is_deploying(&self) -> bool {
        self.deploying
    }

    fn update(&mut self, fleet: &mut Fleet, dt: f32) {
        if !self.deploying {
            return;
        }

        // Subtract the delay rather than resetting the timer so fractional
        // leftover time carries into the next step. At most one row moves
        // per call.
        self.move_timer += dt;
        if self.move_timer < self.move_delay {
            return;
        }
        self.move_timer -= self.move_delay;

        let Some(cols) = fleet.cols() else { return };
        for c in 0..cols {
            if let Some(alien) = fleet.alien_at_mut(self.row_to_move, c) {
                alien.rect.pos.y += self.move_distance;
            }
        }

        // Walk upward; wrapping past the top row finishes one cycle
        if self.row_to_move == 0 {
            self.row_to_move = fleet.rows().unwrap_or(1) - 1;
            self.move_cycles_remaining -= 1;
        } else {
            self.row_to_move -= 1;
        }

        if self.move_cycles_remaining == 0 {
            self.deploying = false;
        }
    }
}

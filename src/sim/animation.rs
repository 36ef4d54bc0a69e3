//! Frame-cycling animations
//!
//! The simulation never touches image data. An `Animation` only tracks which
//! frame index is current; the render layer maps sprite id + frame index to
//! actual assets.

/// How an animation behaves when it passes its last frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayMode {
    /// Wrap back to the first frame forever
    Loop,
    /// Stop after one full play-through
    Once,
}

/// A fixed-rate frame cycler
#[derive(Debug, Clone)]
pub struct Animation {
    frame_count: usize,
    frame_duration: f32,
    mode: PlayMode,
    timer: f32,
    frame: usize,
    finished: bool,
}

impl Animation {
    pub fn new(frame_count: usize, frame_duration: f32, mode: PlayMode) -> Self {
        Self {
            frame_count,
            frame_duration,
            mode,
            timer: 0.0,
            frame: 0,
            finished: false,
        }
    }

    /// Index of the frame to draw this tick
    #[inline]
    pub fn current_frame(&self) -> usize {
        self.frame
    }

    #[inline]
    pub fn total_frames(&self) -> usize {
        self.frame_count
    }

    /// True once a `Once` animation has completed a full play-through
    #[inline]
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.frame_count == 0
    }

    /// Rewind to the first frame and clear the finished flag
    pub fn reset(&mut self) {
        self.timer = 0.0;
        self.frame = 0;
        self.finished = false;
    }

    /// Re-time the animation. Used when an effect's duration is reconfigured.
    pub fn set_frame_duration(&mut self, duration: f32) {
        self.frame_duration = duration;
    }

    pub fn frame_duration(&self) -> f32 {
        self.frame_duration
    }

    /// Advance by `dt` seconds. No-op when empty, untimed, or already done.
    pub fn update(&mut self, dt: f32) {
        if self.frame_count == 0 || self.frame_duration <= 0.0 || self.finished {
            return;
        }

        self.timer += dt;
        while self.timer >= self.frame_duration {
            self.timer -= self.frame_duration;
            if self.frame + 1 < self.frame_count {
                self.frame += 1;
            } else {
                match self.mode {
                    PlayMode::Loop => self.frame = 0,
                    PlayMode::Once => {
                        self.finished = true;
                        return;
                    }
                }
            }
        }
    }
}

//! Time management utilities

use crate::context::Context;

/// Fixed-step frame timer producing the per-frame [`Context`]
#[derive(Debug, Clone, Default)]
pub struct Timer {
    delta_time: f32,
    total_time: f32,
    frame_count: u64,
}

impl Timer {
    /// Create a new timer
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance by a fixed step. Negative steps are treated as zero.
    pub fn advance(&mut self, delta_time: f32) -> Context {
        self.delta_time = delta_time.max(0.0);
        self.total_time += self.delta_time;
        self.frame_count += 1;
        self.context()
    }

    /// Context describing the most recent frame
    pub fn context(&self) -> Context {
        Context::with_totals(self.delta_time, self.total_time, self.frame_count)
    }

    /// Get the time since the last frame in seconds
    pub fn delta_time(&self) -> f32 {
        self.delta_time
    }

    /// Get the total elapsed time since timer creation
    pub fn total_time(&self) -> f32 {
        self.total_time
    }

    /// Get the current frame count
    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    /// Get the average FPS since timer creation
    #[allow(clippy::cast_precision_loss)]
    pub fn average_fps(&self) -> f32 {
        if self.total_time > 0.0 {
            self.frame_count as f32 / self.total_time
        } else {
            0.0
        }
    }
}

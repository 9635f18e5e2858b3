//! Per-frame context handed to every component update

/// Timing information for the current frame
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TimeSlice {
    /// Seconds elapsed since the previous frame (never negative)
    pub delta_time: f32,

    /// Seconds elapsed since the driver started
    pub total_time: f32,

    /// Index of the current frame, starting at 1 for the first advanced frame
    pub frame: u64,
}

/// Read-only per-frame environment
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Context {
    /// Frame timing
    pub time: TimeSlice,
}

impl Context {
    /// Context for a single frame of `delta_time` seconds
    pub fn new(delta_time: f32) -> Self {
        Self::with_totals(delta_time, delta_time.max(0.0), 1)
    }

    /// Context with explicit running totals
    pub fn with_totals(delta_time: f32, total_time: f32, frame: u64) -> Self {
        debug_assert!(delta_time.is_finite(), "delta time must be finite");
        Self {
            time: TimeSlice {
                delta_time: delta_time.max(0.0),
                total_time,
                frame,
            },
        }
    }

    /// Shorthand for `self.time.delta_time`
    pub fn delta_time(&self) -> f32 {
        self.time.delta_time
    }
}

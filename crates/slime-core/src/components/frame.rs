//! Frame State
//!
//! Per-frame timing handed to the systems by the frame driver.

use bevy_ecs::prelude::*;

use crate::error::SimError;

/// Current frame number and the elapsed time it covers
#[derive(Resource, Debug, Clone, Copy, Default, PartialEq)]
pub struct FrameState {
    /// Frames completed so far
    pub frame: u64,
    dt: f32,
}

impl FrameState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the delta for the next frame. NaN and infinities are rejected;
    /// negative values (clock jitter) become zero.
    pub fn begin(&mut self, dt: f32) -> Result<f32, SimError> {
        if !dt.is_finite() {
            return Err(SimError::NonFiniteDelta(dt));
        }
        self.dt = dt.max(0.0);
        Ok(self.dt)
    }

    /// Mark the current frame as finished
    pub fn finish(&mut self) {
        self.frame += 1;
    }

    /// Seconds covered by the frame in progress
    pub fn dt(&self) -> f32 {
        self.dt
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_begin_validates_delta() {
        let mut state = FrameState::new();
        assert_eq!(state.begin(0.016).unwrap(), 0.016);
        assert_eq!(state.dt(), 0.016);

        assert_eq!(state.begin(-0.003).unwrap(), 0.0);
        assert_eq!(state.dt(), 0.0);

        assert!(matches!(state.begin(f32::NAN), Err(SimError::NonFiniteDelta(_))));
        assert!(matches!(state.begin(f32::INFINITY), Err(SimError::NonFiniteDelta(_))));
        // A rejected delta leaves the previous one in place
        assert_eq!(state.dt(), 0.0);
    }

    #[test]
    fn test_finish_counts_frames() {
        let mut state = FrameState::new();
        state.finish();
        state.finish();
        assert_eq!(state.frame, 2);
    }
}

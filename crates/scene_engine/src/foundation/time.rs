//! Time management utilities

use std::time::{Duration, Instant};

/// Delta actually applied for a frame: negative or non-finite values become 0
pub fn sanitize_delta(dt: f32) -> f32 {
    if dt.is_finite() && dt >= 0.0 {
        dt
    } else {
        log::warn!("Ignoring invalid frame delta {dt}");
        0.0
    }
}

/// Frame clock for the render loop
///
/// Each call to [`FrameClock::delta`] returns the seconds elapsed since the
/// previous call. The very first call returns `0.0`.
#[derive(Debug)]
pub struct FrameClock {
    last_frame: Option<Instant>,
    delta_time: f32,
    total_time: f32,
    frame_count: u64,
    max_delta: Option<f32>,
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameClock {
    /// Create a new clock with no delta clamp
    pub const fn new() -> Self {
        Self {
            last_frame: None,
            delta_time: 0.0,
            total_time: 0.0,
            frame_count: 0,
            max_delta: None,
        }
    }

    /// Clamp every reported delta to at most `max_delta` seconds.
    ///
    /// Non-positive or non-finite values disable the clamp.
    #[must_use]
    pub fn with_max_delta(mut self, max_delta: Option<f32>) -> Self {
        self.max_delta = max_delta.filter(|m| m.is_finite() && *m > 0.0);
        self
    }

    /// Sample the wall clock and return the delta since the previous sample
    pub fn delta(&mut self) -> f32 {
        let now = Instant::now();
        let elapsed = self
            .last_frame
            .map_or(Duration::ZERO, |last| now.duration_since(last));
        self.last_frame = Some(now);
        self.advance(elapsed)
    }

    /// Advance the clock by an explicit amount of time.
    ///
    /// Used by fixed-step drivers and tests; returns the (possibly clamped)
    /// delta in seconds.
    pub fn advance(&mut self, elapsed: Duration) -> f32 {
        let mut delta = elapsed.as_secs_f32();
        if let Some(max) = self.max_delta {
            delta = delta.min(max);
        }
        self.delta_time = delta;
        self.total_time += delta;
        self.frame_count += 1;
        delta
    }

    /// Get the most recent delta in seconds
    pub const fn delta_time(&self) -> f32 {
        self.delta_time
    }

    /// Get the total elapsed time since clock creation
    pub const fn total_time(&self) -> f32 {
        self.total_time
    }

    /// Get the current frame count
    pub const fn frame_count(&self) -> u64 {
        self.frame_count
    }

    /// Get the average FPS since clock creation
    #[allow(clippy::cast_precision_loss)]
    pub fn average_fps(&self) -> f32 {
        if self.total_time > 0.0 {
            self.frame_count as f32 / self.total_time
        } else {
            0.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_first_delta_is_zero() {
        let mut clock = FrameClock::new();
        assert_eq!(clock.delta(), 0.0);
        assert_eq!(clock.frame_count(), 1);
    }

    #[test]
    fn test_delta_is_never_negative() {
        let mut clock = FrameClock::new();
        clock.delta();
        assert!(clock.delta() >= 0.0);
    }

    #[test]
    fn test_advance_accumulates() {
        let mut clock = FrameClock::new();
        clock.advance(Duration::from_millis(250));
        clock.advance(Duration::from_millis(250));
        assert_relative_eq!(clock.total_time(), 0.5);
        assert_relative_eq!(clock.average_fps(), 4.0);
    }

    #[test]
    fn test_max_delta_clamps_long_pause() {
        let mut clock = FrameClock::new().with_max_delta(Some(0.1));
        assert_relative_eq!(clock.advance(Duration::from_secs(30)), 0.1);
        assert_relative_eq!(clock.delta_time(), 0.1);
    }

    #[test]
    fn test_sanitize_delta() {
        assert_eq!(sanitize_delta(0.25), 0.25);
        assert_eq!(sanitize_delta(0.0), 0.0);
        assert_eq!(sanitize_delta(-1.0), 0.0);
        assert_eq!(sanitize_delta(f32::NAN), 0.0);
        assert_eq!(sanitize_delta(f32::INFINITY), 0.0);
    }

    #[test]
    fn test_invalid_max_delta_disables_clamp() {
        let mut clock = FrameClock::new().with_max_delta(Some(-1.0));
        assert_relative_eq!(clock.advance(Duration::from_secs(2)), 2.0);
    }
}

//! Frame-timing statistics for the demo title overlay
//!
//! Accumulates per-frame delta times over an averaging window and produces
//! a summary (mean frame time, standard error, fps) once the window fills.
//! The window is resized after each summary so the overlay refreshes about
//! once per second regardless of frame rate.

use std::fmt;
use std::time::Duration;

/// Accumulator for frame delta times
///
/// Tracks the first and second moments of the delta-time distribution over
/// the current averaging window.
#[derive(Debug, Clone)]
pub struct FrameStats {
    /// Number of frames to average before emitting a summary
    window: u32,
    /// Frames recorded in the current window
    frames: u32,
    /// Sum of delta times (seconds)
    dt_sum: f64,
    /// Sum of squared delta times (seconds^2)
    dt_sq_sum: f64,
}

/// Summary of one completed averaging window
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameSummary {
    /// Mean frame time in milliseconds
    pub mean_ms: f64,
    /// Standard error of the mean frame time in milliseconds
    pub std_err_ms: f64,
    /// Frames per second (1 / mean frame time)
    pub fps: f64,
    /// Number of frames averaged
    pub frames: u32,
}

impl FrameStats {
    /// Initial averaging window before the first summary
    pub const DEFAULT_WINDOW: u32 = 100;

    /// Create stats with the default averaging window
    pub fn new() -> Self {
        Self::with_window(Self::DEFAULT_WINDOW)
    }

    /// Create stats with an explicit averaging window (clamped to >= 1)
    ///
    /// # Arguments
    ///
    /// * `window` - Number of frames to average before the first summary
    pub fn with_window(window: u32) -> Self {
        Self {
            window: window.max(1),
            frames: 0,
            dt_sum: 0.0,
            dt_sq_sum: 0.0,
        }
    }

    /// Current averaging window size
    pub fn window(&self) -> u32 {
        self.window
    }

    /// Record one frame's delta time
    ///
    /// Returns a summary once the averaging window fills, then resets the
    /// accumulator. The next window is sized to roughly one second of frames
    /// (1 / mean delta time).
    ///
    /// # Arguments
    ///
    /// * `dt` - Time elapsed since the previous frame
    pub fn record(&mut self, dt: Duration) -> Option<FrameSummary> {
        let dt = dt.as_secs_f64();
        self.frames += 1;
        self.dt_sum += dt;
        self.dt_sq_sum += dt * dt;

        if self.frames < self.window {
            return None;
        }

        let n = self.frames as f64;
        let mean = self.dt_sum / n;
        let mean_sq = self.dt_sq_sum / n;
        // Clamp: floating-point cancellation can push the variance slightly
        // below zero when all samples are equal
        let variance = (mean_sq - mean * mean).max(0.0);
        let std_err = variance.sqrt() / n.sqrt();

        let summary = FrameSummary {
            mean_ms: mean * 1000.0,
            std_err_ms: std_err * 1000.0,
            fps: 1.0 / mean,
            frames: self.frames,
        };

        // Refresh roughly once per second
        self.window = if mean > 0.0 {
            (1.0 / mean) as u32
        } else {
            Self::DEFAULT_WINDOW
        }
        .max(1);
        self.frames = 0;
        self.dt_sum = 0.0;
        self.dt_sq_sum = 0.0;

        Some(summary)
    }
}

impl Default for FrameStats {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for FrameSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "time frame = {:.3}ms +/- {:.4}ms, fps = {:.1}, {} frames",
            self.mean_ms, self.std_err_ms, self.fps, self.frames
        )
    }
}

#[cfg(test)]
#[path = "frame_stats_tests.rs"]
mod tests;

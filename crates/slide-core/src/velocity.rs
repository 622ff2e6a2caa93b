#![forbid(unsafe_code)]

//! Pointer velocity estimation.
//!
//! Keeps a short ring of timestamped positions for the active pointer and
//! fits a least-squares line through the ones inside the horizon. Velocity
//! is reported in pixels per second.

use std::collections::VecDeque;
use std::time::Duration;

use web_time::Instant;

/// Samples retained before the oldest are dropped.
const MAX_SAMPLES: usize = 20;

#[derive(Debug, Clone, Copy)]
struct Sample {
    time: Instant,
    x: f32,
    y: f32,
}

/// Least-squares velocity tracker for a single pointer.
#[derive(Debug, Clone)]
pub struct VelocityTracker {
    samples: VecDeque<Sample>,
    horizon: Duration,
}

impl VelocityTracker {
    /// Create a tracker that only considers samples within `horizon` of the
    /// newest one.
    #[must_use]
    pub fn new(horizon: Duration) -> Self {
        Self {
            samples: VecDeque::with_capacity(MAX_SAMPLES),
            horizon,
        }
    }

    /// Record a position.
    pub fn add(&mut self, time: Instant, x: f32, y: f32) {
        if self.samples.len() == MAX_SAMPLES {
            self.samples.pop_front();
        }
        self.samples.push_back(Sample { time, x, y });
    }

    /// Forget all samples.
    pub fn clear(&mut self) {
        self.samples.clear();
    }

    /// Number of stored samples.
    #[must_use]
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Whether no samples are stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Current velocity `(vx, vy)` in px/s, each component clamped to
    /// `±max_velocity`.
    ///
    /// Fewer than two samples in the horizon yield zero.
    #[must_use]
    pub fn velocity(&self, max_velocity: f32) -> (f32, f32) {
        let Some(newest) = self.samples.back() else {
            return (0.0, 0.0);
        };
        let window: Vec<(f32, f32, f32)> = self
            .samples
            .iter()
            .filter(|s| newest.time.saturating_duration_since(s.time) <= self.horizon)
            .map(|s| {
                // Seconds before the newest sample (<= 0).
                let t = -newest.time.saturating_duration_since(s.time).as_secs_f32();
                (t, s.x, s.y)
            })
            .collect();
        if window.len() < 2 {
            return (0.0, 0.0);
        }

        let n = window.len() as f32;
        let mean_t = window.iter().map(|w| w.0).sum::<f32>() / n;
        let mean_x = window.iter().map(|w| w.1).sum::<f32>() / n;
        let mean_y = window.iter().map(|w| w.2).sum::<f32>() / n;

        let mut var_t = 0.0f32;
        let mut cov_x = 0.0f32;
        let mut cov_y = 0.0f32;
        for (t, x, y) in &window {
            let dt = t - mean_t;
            var_t += dt * dt;
            cov_x += dt * (x - mean_x);
            cov_y += dt * (y - mean_y);
        }
        if var_t <= f32::EPSILON {
            return (0.0, 0.0);
        }

        let max = max_velocity.abs();
        (
            (cov_x / var_t).clamp(-max, max),
            (cov_y / var_t).clamp(-max, max),
        )
    }
}

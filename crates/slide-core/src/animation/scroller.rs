#![forbid(unsafe_code)]

//! Scroll animator: eased interpolation between two scroll offsets.
//!
//! A [`ScrollAnimator`] owns at most one [`AnimationRun`]. The host samples
//! it once per render tick with the frame timestamp; the animator never
//! schedules anything itself.
//!
//! # Invariants
//!
//! 1. Starting a run discards the previous one outright. The new run begins
//!    at whatever `from` the caller passes (normally the current, possibly
//!    mid-flight, offset).
//! 2. A run whose `from == to` never becomes active: [`ScrollAnimator::start`]
//!    reports [`StartOutcome::Settled`] synchronously.
//! 3. The final sample of a run is exactly `to` and carries `finished = true`;
//!    the run is dropped right after it.
//! 4. Durations are bounded by the animator's maximum (600ms by default).
//!
//! # Failure Modes
//!
//! - Zero duration (very fast fling, zero-size panel): the first sample is
//!   the final one.
//! - Timestamps earlier than the run start are treated as elapsed zero.

use std::time::Duration;

use web_time::Instant;

use super::{EasingFn, MAX_SCROLL_DURATION, ease_out_quint, snap_duration};
use crate::geometry::{Axis, ScrollOffset};

/// One in-flight snap animation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimationRun {
    pub from: ScrollOffset,
    pub to: ScrollOffset,
    pub start: Instant,
    pub duration: Duration,
    /// Fling velocity that started the run (0 for programmatic transitions).
    pub velocity: f32,
}

impl AnimationRun {
    /// Linear time progress at `now`, clamped to [0.0, 1.0].
    #[must_use]
    pub fn progress(&self, now: Instant) -> f32 {
        if self.duration.is_zero() {
            return 1.0;
        }
        let elapsed = now.saturating_duration_since(self.start);
        (elapsed.as_secs_f32() / self.duration.as_secs_f32()).clamp(0.0, 1.0)
    }

    /// Whether the run has reached its duration at `now`.
    #[must_use]
    pub fn is_finished_at(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.start) >= self.duration
    }

    /// Eased offset at `now`.
    #[must_use]
    pub fn offset_at(&self, now: Instant, easing: EasingFn) -> ScrollOffset {
        if self.is_finished_at(now) {
            return self.to;
        }
        let eased = easing(self.progress(now));
        let lerp = |from: i32, to: i32| from + ((to - from) as f32 * eased).round() as i32;
        ScrollOffset::new(lerp(self.from.x, self.to.x), lerp(self.from.y, self.to.y))
    }
}

/// Result of a frame sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnimationSample {
    pub offset: ScrollOffset,
    pub finished: bool,
}

/// Result of [`ScrollAnimator::start`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StartOutcome {
    /// Nothing to animate; the target is already reached.
    Settled,
    /// A run is active and will take the given duration.
    Running(Duration),
}

/// Time-based eased scroller holding at most one run.
#[derive(Debug, Clone)]
pub struct ScrollAnimator {
    easing: EasingFn,
    max_duration: Duration,
    run: Option<AnimationRun>,
}

impl Default for ScrollAnimator {
    fn default() -> Self {
        Self::new()
    }
}

impl ScrollAnimator {
    /// Create an idle animator using [`ease_out_quint`] and a 600ms cap.
    #[must_use]
    pub fn new() -> Self {
        Self {
            easing: ease_out_quint,
            max_duration: MAX_SCROLL_DURATION,
            run: None,
        }
    }

    /// Use a different easing curve (builder pattern).
    #[must_use]
    pub fn with_easing(mut self, easing: EasingFn) -> Self {
        self.easing = easing;
        self
    }

    /// Use a different duration cap (builder pattern).
    #[must_use]
    pub fn with_max_duration(mut self, max: Duration) -> Self {
        self.max_duration = max;
        self
    }

    /// Start animating from `from` to `to`, replacing any active run.
    ///
    /// `panel_size` is the container extent along `axis`; `velocity` is the
    /// release velocity in px/s along `axis` (0 when not a fling).
    pub fn start(
        &mut self,
        from: ScrollOffset,
        to: ScrollOffset,
        velocity: f32,
        panel_size: i32,
        axis: Axis,
        now: Instant,
    ) -> StartOutcome {
        self.run = None;
        if from == to {
            return StartOutcome::Settled;
        }

        let delta = to.along(axis) - from.along(axis);
        let duration = snap_duration(delta, panel_size, velocity, self.max_duration);

        #[cfg(feature = "tracing")]
        tracing::debug!(
            message = "animator.start",
            from = from.along(axis),
            to = to.along(axis),
            velocity,
            duration_ms = duration.as_millis() as u64
        );

        self.run = Some(AnimationRun {
            from,
            to,
            start: now,
            duration,
            velocity,
        });
        StartOutcome::Running(duration)
    }

    /// Sample the active run at `now`.
    ///
    /// Returns `None` when idle. The sample that reports `finished` carries
    /// the exact target and ends the run.
    pub fn sample(&mut self, now: Instant) -> Option<AnimationSample> {
        let run = self.run?;
        if run.is_finished_at(now) {
            self.run = None;
            return Some(AnimationSample {
                offset: run.to,
                finished: true,
            });
        }
        Some(AnimationSample {
            offset: run.offset_at(now, self.easing),
            finished: false,
        })
    }

    /// Discard the active run without reaching its target.
    pub fn cancel(&mut self) -> Option<AnimationRun> {
        self.run.take()
    }

    /// Finish the active run immediately, returning its target.
    pub fn abort(&mut self) -> Option<ScrollOffset> {
        self.run.take().map(|run| run.to)
    }

    /// Whether a run is in flight.
    #[inline]
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.run.is_some()
    }

    /// The active run, if any.
    #[must_use]
    pub fn run(&self) -> Option<&AnimationRun> {
        self.run.as_ref()
    }

    /// The easing curve in use.
    #[must_use]
    pub fn easing(&self) -> EasingFn {
        self.easing
    }
}

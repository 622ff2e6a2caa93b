#![forbid(unsafe_code)]

//! Easing curves and snap-duration math for panel motion.
//!
//! Easing functions are plain `fn(f32) -> f32` values, so they can be copied
//! into any animator without sharing state. [`ease_out_quint`] is the curve
//! used for every panel transition: fast start, gentle arrival.
//!
//! # Invariants
//!
//! 1. Every easing maps 0.0 to 0.0 and 1.0 to 1.0.
//! 2. [`snap_duration`] never exceeds [`MAX_SCROLL_DURATION`].

use std::time::Duration;

pub mod scroller;

pub use scroller::{AnimationRun, AnimationSample, ScrollAnimator, StartOutcome};

/// Upper bound for any snap animation.
pub const MAX_SCROLL_DURATION: Duration = Duration::from_millis(600);

/// An easing curve mapping normalized time to normalized progress.
pub type EasingFn = fn(f32) -> f32;

/// Identity curve.
#[inline]
#[must_use]
pub fn linear(t: f32) -> f32 {
    t
}

/// Quintic ease-out: `(t - 1)^5 + 1`.
#[inline]
#[must_use]
pub fn ease_out_quint(t: f32) -> f32 {
    let t = t - 1.0;
    t * t * t * t * t + 1.0
}

/// Bell-shaped moderation of how travel distance influences snap duration.
///
/// Centers `ratio` about 0 and maps it through a shallow sine so very short
/// and very long travels end up closer to the middle.
#[inline]
#[must_use]
pub fn snap_distance_influence(ratio: f32) -> f32 {
    let centered = ratio - 0.5;
    (centered * 0.3 * std::f32::consts::FRAC_PI_2).sin()
}

/// Duration of a snap covering `delta` pixels of a `panel_size` panel.
///
/// With a non-zero fling `velocity` (px/s) the duration scales with the
/// moderated distance over the velocity; otherwise the maximum is used.
#[must_use]
pub fn snap_duration(delta: i32, panel_size: i32, velocity: f32, max: Duration) -> Duration {
    let size = panel_size.max(0);
    let half = (size / 2) as f32;
    let ratio = if size > 0 {
        (delta.unsigned_abs() as f32 / size as f32).min(1.0)
    } else {
        1.0
    };
    let distance = half + half * snap_distance_influence(ratio);

    let max_ms = max.as_millis() as f32;
    let velocity = velocity.abs();
    let ms = if velocity > 0.0 {
        4.0 * (1000.0 * (distance / velocity).abs()).round()
    } else {
        max_ms
    };
    let ms = if ms.is_finite() { ms.clamp(0.0, max_ms) } else { max_ms };
    Duration::from_millis(ms as u64)
}

#![forbid(unsafe_code)]

//! Progress-driven visual effects.
//!
//! A [`TransformHook`] maps the layer's scroll progress to a handful of
//! visual properties collected in [`Visual`]. The controller calls
//! [`TransformHook::measure`] after every size change and
//! [`TransformHook::transform`] after every offset update, then hands the
//! resulting [`Visual`] to the host renderer.
//!
//! # Invariants
//!
//! 1. Progress values passed to `transform` lie in [0.0, 1.0].
//! 2. Hooks tolerate `transform` before any `measure` (zeroed constants).

use slide_core::Side;

pub mod cue;
mod fade;
mod joy;
mod rotation;

pub use fade::Fade;
pub use joy::SlideJoy;
pub use rotation::Rotation;

/// Visual properties a hook may set on the layer.
///
/// Angles are in degrees, pivots in layer-local pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Visual {
    pub alpha: f32,
    pub rotation: f32,
    pub rotation_x: f32,
    pub rotation_y: f32,
    pub scale_x: f32,
    pub scale_y: f32,
    pub pivot_x: f32,
    pub pivot_y: f32,
}

impl Default for Visual {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Visual {
    /// Fully opaque, unrotated, unscaled.
    pub const IDENTITY: Self = Self {
        alpha: 1.0,
        rotation: 0.0,
        rotation_x: 0.0,
        rotation_y: 0.0,
        scale_x: 1.0,
        scale_y: 1.0,
        pivot_x: 0.0,
        pivot_y: 0.0,
    };

    /// Set both scale factors.
    pub fn set_scale(&mut self, scale: f32) {
        self.scale_x = scale;
        self.scale_y = scale;
    }

    /// Set the pivot point.
    pub fn set_pivot(&mut self, x: f32, y: f32) {
        self.pivot_x = x;
        self.pivot_y = y;
    }
}

/// Pluggable mapping from scroll progress to visual properties.
pub trait TransformHook {
    /// Recompute per-size constants. Called after every size change.
    fn measure(&mut self, _width: i32, _height: i32, _side: Side, _visual: &mut Visual) {}

    /// Apply the effect for the given progress values.
    ///
    /// `preview_progress` is 0 when Preview is disabled.
    fn transform(&self, visual: &mut Visual, preview_progress: f32, layer_progress: f32, side: Side);
}

/// The progress value every built-in hook animates against.
#[inline]
#[must_use]
pub fn progress_to_animate(preview_progress: f32, layer_progress: f32) -> f32 {
    preview_progress.max(layer_progress)
}

#![forbid(unsafe_code)]

use slide_core::Side;

use super::{TransformHook, Visual, progress_to_animate};

/// Default maximum tilt in degrees.
pub const DEFAULT_MAX_ANGLE: f32 = 10.0;

/// Tilts the closed layer around a corner and straightens it as it opens.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rotation {
    max_angle: f32,
    /// Signed angle for the measured side; 0 until measured.
    angle: f32,
}

impl Default for Rotation {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_ANGLE)
    }
}

impl Rotation {
    #[must_use]
    pub fn new(max_angle: f32) -> Self {
        Self {
            max_angle,
            angle: 0.0,
        }
    }

    #[must_use]
    pub fn max_angle(&self) -> f32 {
        self.max_angle
    }

    fn pivot(width: i32, height: i32, side: Side) -> (f32, f32) {
        match side {
            Side::Left => (0.0, height as f32),
            Side::Top => (0.0, 0.0),
            Side::Right => (width as f32, height as f32),
            Side::Bottom => (0.0, height as f32),
        }
    }
}

impl TransformHook for Rotation {
    fn measure(&mut self, width: i32, height: i32, side: Side, visual: &mut Visual) {
        let (x, y) = Self::pivot(width, height, side);
        visual.set_pivot(x, y);
        let sign = match side {
            Side::Left | Side::Top => -1.0,
            Side::Right | Side::Bottom => 1.0,
        };
        self.angle = self.max_angle * sign;
    }

    fn transform(&self, visual: &mut Visual, preview_progress: f32, layer_progress: f32, _side: Side) {
        visual.rotation = self.angle * (1.0 - progress_to_animate(preview_progress, layer_progress));
    }
}

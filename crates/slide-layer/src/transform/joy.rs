#![forbid(unsafe_code)]

use slide_core::Side;

use super::cue::{value_for_cue_points, value_for_range};
use super::{TransformHook, Visual, progress_to_animate};

const CUE_POINTS: [f32; 3] = [0.7, 0.9, 1.0];
const SCALE_VALUES: [f32; 2] = [0.9, 1.0];
const ROTATION: f32 = -4.75;

/// Grows the layer to full size and gives it a short 3D wobble near the
/// end of opening.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SlideJoy {
    rotation_x: [f32; 3],
    rotation_y: [f32; 3],
}

impl SlideJoy {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Peak (x, y) rotation for a side.
    fn peak(side: Side) -> (f32, f32) {
        match side {
            Side::Left => (0.0, ROTATION),
            Side::Top => (-ROTATION, 0.0),
            Side::Right => (0.0, -ROTATION),
            Side::Bottom => (ROTATION, 0.0),
        }
    }

    /// Midpoint of the attached edge.
    fn pivot(width: i32, height: i32, side: Side) -> (f32, f32) {
        let (w, h) = (width as f32, height as f32);
        match side {
            Side::Left => (0.0, (height / 2) as f32),
            Side::Top => ((width / 2) as f32, 0.0),
            Side::Right => (w, (height / 2) as f32),
            Side::Bottom => ((width / 2) as f32, h),
        }
    }
}

impl TransformHook for SlideJoy {
    fn measure(&mut self, width: i32, height: i32, side: Side, visual: &mut Visual) {
        let (x, y) = Self::peak(side);
        self.rotation_x = [0.0, x, 0.0];
        self.rotation_y = [0.0, y, 0.0];
        let (px, py) = Self::pivot(width, height, side);
        visual.set_pivot(px, py);
    }

    fn transform(&self, visual: &mut Visual, preview_progress: f32, layer_progress: f32, _side: Side) {
        let progress = progress_to_animate(preview_progress, layer_progress);
        visual.set_scale(value_for_cue_points(progress, &SCALE_VALUES));
        visual.rotation_x = value_for_range(progress, &CUE_POINTS, &self.rotation_x);
        visual.rotation_y = value_for_range(progress, &CUE_POINTS, &self.rotation_y);
    }
}

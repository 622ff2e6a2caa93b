#![forbid(unsafe_code)]

use slide_core::Side;

use super::{TransformHook, Visual, progress_to_animate};

/// Fades the layer in as it opens.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Fade {
    multiplier: f32,
}

impl Default for Fade {
    fn default() -> Self {
        Self { multiplier: 1.0 }
    }
}

impl Fade {
    /// A multiplier above 1 reaches full opacity before fully open.
    #[must_use]
    pub fn new(multiplier: f32) -> Self {
        Self { multiplier }
    }

    #[must_use]
    pub fn multiplier(&self) -> f32 {
        self.multiplier
    }

    /// Opacity for the given progress values.
    #[must_use]
    pub fn alpha(&self, preview_progress: f32, layer_progress: f32) -> f32 {
        (progress_to_animate(preview_progress, layer_progress) * self.multiplier).clamp(0.0, 1.0)
    }
}

impl TransformHook for Fade {
    fn transform(&self, visual: &mut Visual, preview_progress: f32, layer_progress: f32, _side: Side) {
        visual.alpha = self.alpha(preview_progress, layer_progress);
    }
}

#![forbid(unsafe_code)]

//! Layer configuration.
//!
//! [`LayerConfig`] carries everything the controller reads at construction:
//! attachment side, rest distances, interaction toggles, and the embedded
//! gesture thresholds. With the `config` feature it can be loaded from TOML
//! or JSON:
//!
//! ```toml
//! side = "left"
//! offset_distance = 40
//! preview_offset_distance = 120
//! change_state_on_tap = false
//!
//! [gesture]
//! touch_slop = 24.0
//! ```
//!
//! ```rust,ignore
//! let config = LayerConfig::from_toml_file("layer.toml")?;
//! ```
//!
//! Every loader validates before returning.

#[cfg(feature = "config")]
use std::path::Path;

use slide_core::{GestureConfig, Side};

use crate::error::{LayerError, Result};

/// Default release speed above which a closing fling skips Preview.
pub const DEFAULT_HIGH_VELOCITY: f32 = 9000.0;

/// Construction-time configuration for a sliding layer.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "config", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "config", serde(default))]
pub struct LayerConfig {
    /// Screen edge the layer is attached to (default: right).
    pub side: Side,
    /// Shadow drawn along the inner edge; only the renderer reads it.
    pub shadow_size: i32,
    /// Pixels of the layer left visible when closed.
    pub offset_distance: i32,
    /// Pixels visible in Preview. `None` disables the Preview state.
    pub preview_offset_distance: Option<i32>,
    /// Whether a tap cycles the state.
    pub change_state_on_tap: bool,
    /// Whether pointer input can move the layer at all.
    pub sliding_enabled: bool,
    /// Whether a drag may start on the shadow strip.
    pub sliding_from_shadow_enabled: bool,
    /// Closing flings faster than this (px/s) skip Preview.
    pub high_velocity: f32,
    pub gesture: GestureConfig,
}

impl Default for LayerConfig {
    fn default() -> Self {
        Self {
            side: Side::Right,
            shadow_size: 0,
            offset_distance: 0,
            preview_offset_distance: None,
            change_state_on_tap: true,
            sliding_enabled: true,
            sliding_from_shadow_enabled: true,
            high_velocity: DEFAULT_HIGH_VELOCITY,
            gesture: GestureConfig::default(),
        }
    }
}

impl LayerConfig {
    /// Set the attachment side (builder pattern).
    #[must_use]
    pub fn with_side(mut self, side: Side) -> Self {
        self.side = side;
        self
    }

    /// Set the shadow size (builder pattern).
    #[must_use]
    pub fn with_shadow_size(mut self, size: i32) -> Self {
        self.shadow_size = size;
        self
    }

    /// Set the closed visible distance (builder pattern).
    #[must_use]
    pub fn with_offset_distance(mut self, distance: i32) -> Self {
        self.offset_distance = distance;
        self
    }

    /// Enable Preview with the given visible distance (builder pattern).
    #[must_use]
    pub fn with_preview_offset_distance(mut self, distance: i32) -> Self {
        self.preview_offset_distance = Some(distance);
        self
    }

    /// Set tap-to-toggle (builder pattern).
    #[must_use]
    pub fn with_change_state_on_tap(mut self, enabled: bool) -> Self {
        self.change_state_on_tap = enabled;
        self
    }

    /// Enable or disable pointer-driven sliding (builder pattern).
    #[must_use]
    pub fn with_sliding_enabled(mut self, enabled: bool) -> Self {
        self.sliding_enabled = enabled;
        self
    }

    /// Set whether drags may start on the shadow (builder pattern).
    #[must_use]
    pub fn with_sliding_from_shadow_enabled(mut self, enabled: bool) -> Self {
        self.sliding_from_shadow_enabled = enabled;
        self
    }

    /// Set the high-velocity cut-off (builder pattern).
    #[must_use]
    pub fn with_high_velocity(mut self, velocity: f32) -> Self {
        self.high_velocity = velocity;
        self
    }

    /// Set gesture thresholds (builder pattern).
    #[must_use]
    pub fn with_gesture(mut self, gesture: GestureConfig) -> Self {
        self.gesture = gesture;
        self
    }

    /// Whether the Preview state is available.
    #[inline]
    #[must_use]
    pub fn preview_enabled(&self) -> bool {
        self.preview_offset_distance.is_some()
    }

    /// Every violated constraint, as human-readable messages.
    ///
    /// An empty list means the config is valid.
    #[must_use]
    pub fn problems(&self) -> Vec<String> {
        let mut errors = Vec::new();

        if self.offset_distance < 0 {
            errors.push(format!(
                "offset_distance must be >= 0, got {}",
                self.offset_distance
            ));
        }
        if let Some(preview) = self.preview_offset_distance {
            if preview < 0 {
                errors.push(format!(
                    "preview_offset_distance must be >= 0, got {preview}"
                ));
            }
            if self.offset_distance > preview {
                errors.push(format!(
                    "offset_distance ({}) must not exceed preview_offset_distance ({preview})",
                    self.offset_distance
                ));
            }
        }
        if !(self.high_velocity.is_finite() && self.high_velocity > 0.0) {
            errors.push(format!(
                "high_velocity must be > 0, got {}",
                self.high_velocity
            ));
        }

        let g = &self.gesture;
        let non_negative = [
            ("gesture.touch_slop", g.touch_slop),
            ("gesture.min_fling_velocity", g.min_fling_velocity),
            ("gesture.fling_distance", g.fling_distance),
        ];
        for (name, value) in non_negative {
            if !(value.is_finite() && value >= 0.0) {
                errors.push(format!("{name} must be >= 0, got {value}"));
            }
        }
        if !(g.max_fling_velocity.is_finite() && g.max_fling_velocity > 0.0) {
            errors.push(format!(
                "gesture.max_fling_velocity must be > 0, got {}",
                g.max_fling_velocity
            ));
        }
        if g.velocity_horizon.is_zero() {
            errors.push("gesture.velocity_horizon must be > 0".into());
        }

        errors
    }

    /// Fail with [`LayerError::InvalidConfiguration`] if any constraint is
    /// violated.
    pub fn validate(&self) -> Result<()> {
        let problems = self.problems();
        if problems.is_empty() {
            Ok(())
        } else {
            Err(LayerError::invalid(problems.join("; ")))
        }
    }

    /// Load from a TOML string.
    #[cfg(feature = "config")]
    pub fn from_toml_str(s: &str) -> Result<Self> {
        let config: Self = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Load from a TOML file on disk.
    #[cfg(feature = "config")]
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        Self::from_toml_str(&content)
    }

    /// Load from a JSON string.
    #[cfg(feature = "config")]
    pub fn from_json_str(s: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Load from a JSON file on disk.
    #[cfg(feature = "config")]
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        Self::from_json_str(&content)
    }
}

#![forbid(unsafe_code)]

//! State resolution for released drags and taps.
//!
//! # Invariants
//!
//! 1. Both resolvers are total: every input maps to some [`PanelState`].
//! 2. [`PanelState::Preview`] is never returned when preview is disabled.
//! 3. A fling toward the opened position always resolves to Opened.

use slide_core::{DragRelease, ScrollOffset, Side};

use crate::config::LayerConfig;
use crate::state::PanelState;

/// Decides the next rest state from release kinematics or a tap.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StateResolver {
    pub side: Side,
    pub preview_offset_distance: Option<i32>,
    /// Minimum travel (px) for a release to count as a fling.
    pub fling_distance: f32,
    /// Minimum speed (px/s) for a release to count as a fling.
    pub min_fling_velocity: f32,
    /// Closing flings faster than this skip Preview.
    pub high_velocity: f32,
}

impl StateResolver {
    #[must_use]
    pub fn from_config(config: &LayerConfig) -> Self {
        Self {
            side: config.side,
            preview_offset_distance: config.preview_offset_distance,
            fling_distance: config.gesture.fling_distance,
            min_fling_velocity: config.gesture.min_fling_velocity,
            high_velocity: config.high_velocity,
        }
    }

    /// Resolve a released drag.
    ///
    /// `panel_size` is the container extent along the side's axis.
    #[must_use]
    pub fn next_state_for_drag(
        &self,
        panel_size: i32,
        offset: ScrollOffset,
        release: &DragRelease,
    ) -> PanelState {
        let axis = self.side.axis();
        self.resolve(
            panel_size,
            offset.along(axis),
            release.velocity.along(axis),
            (release.current.along(axis) - release.initial.along(axis)).abs(),
        )
    }

    /// Resolve from scalar inputs along the constrained axis.
    ///
    /// `velocity` is the raw axis velocity; `travel` the absolute distance
    /// between press and release.
    #[must_use]
    pub fn resolve(&self, panel_size: i32, scroll: i32, velocity: f32, travel: f32) -> PanelState {
        // Distance travelled from the closed rest position toward opened.
        let panel_offset = (panel_size - scroll.abs()).abs();
        let relative_velocity = velocity * self.side.opening_sign() as f32;
        let is_fling =
            travel > self.fling_distance && relative_velocity.abs() > self.min_fling_velocity;

        let next = if is_fling {
            if relative_velocity > 0.0 {
                PanelState::Opened
            } else {
                match self.preview_offset_distance {
                    Some(preview)
                        if panel_offset > preview
                            && relative_velocity.abs() < self.high_velocity =>
                    {
                        PanelState::Preview
                    }
                    _ => PanelState::Closed,
                }
            }
        } else {
            let open_threshold = (panel_size + self.preview_offset_distance.unwrap_or(0)) / 2;
            if panel_offset > open_threshold {
                PanelState::Opened
            } else {
                match self.preview_offset_distance {
                    Some(preview) if panel_offset > preview / 2 => PanelState::Preview,
                    _ => PanelState::Closed,
                }
            }
        };

        #[cfg(feature = "tracing")]
        tracing::debug!(
            message = "resolver.drag",
            panel_size,
            panel_offset,
            relative_velocity,
            travel,
            is_fling,
            next = ?next
        );

        next
    }

    /// Next state in the tap cycle.
    #[must_use]
    pub fn next_state_after_tap(&self, current: PanelState) -> PanelState {
        let preview = self.preview_offset_distance.is_some();
        match current {
            PanelState::Closed if preview => PanelState::Preview,
            PanelState::Closed => PanelState::Opened,
            PanelState::Preview => PanelState::Opened,
            PanelState::Opened if preview => PanelState::Preview,
            PanelState::Opened => PanelState::Closed,
        }
    }
}

#![forbid(unsafe_code)]

//! Discrete panel states and their persisted form.

use crate::error::LayerError;

/// Rest state of a sliding layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PanelState {
    #[default]
    Closed,
    /// Partially shown; only reachable with a preview offset configured.
    Preview,
    Opened,
}

impl PanelState {
    /// Persisted integer form: 0 Closed, 1 Preview, 2 Opened.
    #[must_use]
    pub const fn discriminant(self) -> i32 {
        match self {
            Self::Closed => 0,
            Self::Preview => 1,
            Self::Opened => 2,
        }
    }
}

impl TryFrom<i32> for PanelState {
    type Error = LayerError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::Closed),
            1 => Ok(Self::Preview),
            2 => Ok(Self::Opened),
            other => Err(LayerError::InvalidSavedState(other)),
        }
    }
}

/// Snapshot of a layer's state for a host persistence container.
///
/// Serializes as a bare integer with the `state-persistence` feature.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(
    feature = "state-persistence",
    derive(serde::Serialize, serde::Deserialize)
)]
#[cfg_attr(
    feature = "state-persistence",
    serde(into = "i32", try_from = "i32")
)]
pub struct SavedState {
    pub state: PanelState,
}

impl SavedState {
    #[must_use]
    pub const fn new(state: PanelState) -> Self {
        Self { state }
    }
}

impl From<SavedState> for i32 {
    fn from(saved: SavedState) -> Self {
        saved.state.discriminant()
    }
}

impl TryFrom<i32> for SavedState {
    type Error = LayerError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        PanelState::try_from(value).map(Self::new)
    }
}

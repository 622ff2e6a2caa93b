#![forbid(unsafe_code)]

use slide_core::GeometryError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, LayerError>;

#[derive(Debug, Error)]
pub enum LayerError {
    #[error("invalid layer configuration: {reason}")]
    InvalidConfiguration { reason: String },

    #[error(transparent)]
    IllegalAttachmentSide(#[from] GeometryError),

    #[error("unknown saved panel state: {0}")]
    InvalidSavedState(i32),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[cfg(feature = "config")]
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[cfg(feature = "config")]
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
}

impl LayerError {
    #[must_use]
    pub fn invalid(reason: impl Into<String>) -> Self {
        Self::InvalidConfiguration {
            reason: reason.into(),
        }
    }

    /// Whether this error comes from a rejected configuration value.
    #[must_use]
    pub fn is_configuration(&self) -> bool {
        matches!(self, Self::InvalidConfiguration { .. })
    }
}

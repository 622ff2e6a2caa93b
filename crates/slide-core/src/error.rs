#![forbid(unsafe_code)]

//! Errors raised by geometry resolution.

use thiserror::Error;

/// Failure to resolve panel geometry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GeometryError {
    /// A raw side value outside the four known attachment sides.
    ///
    /// Indicates a programming error upstream (bad persisted config or a
    /// host passing an unmapped constant).
    #[error("the layer has to be stuck to one of the sides of the screen, got {0}")]
    IllegalAttachmentSide(i32),
}

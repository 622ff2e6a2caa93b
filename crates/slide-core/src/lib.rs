#![forbid(unsafe_code)]

//! Core: pointer events, edge geometry, gesture classification, and eased
//! scroll animation for edge-attached sliding panels.
//!
//! # Role in slidekit
//! `slide-core` is the host-independent input and motion layer. It knows
//! nothing about panel states or callbacks; it turns pointer streams into
//! drag intents and turns target offsets into frame-by-frame samples.
//!
//! # Primary responsibilities
//! - **Event**: normalized pointer events with multi-touch and edge flags.
//! - **Geometry**: sides, axes, scroll bounds, and hit-testing of the
//!   visible strip.
//! - **Gesture**: slop, descendant scroll stealing, velocity, tap, cancel.
//! - **Animation**: quintic ease-out runs with velocity-scaled durations.
//!
//! # How it fits in the system
//! `slide-layer` owns the panel state machine and drives a
//! [`gesture::GestureClassifier`] and an [`animation::ScrollAnimator`] from
//! the host's event and frame callbacks.

pub mod animation;
pub mod error;
pub mod event;
pub mod geometry;
pub mod gesture;
pub mod logging;
pub mod probe;
pub mod velocity;

pub use error::GeometryError;
pub use event::{EdgeFlags, PointerEvent, PointerEventKind, PointerId, PointerSample};
pub use geometry::{Axis, Point, RectF, ScrollBounds, ScrollOffset, Side};
pub use gesture::{
    DragRelease, GestureClassifier, GestureConfig, GestureContext, GestureOutcome, GestureSignal,
};
pub use probe::ScrollNode;

// Re-export tracing macros at crate root for ergonomic use.
#[cfg(feature = "tracing")]
pub use logging::{
    debug, debug_span, error, error_span, info, info_span, trace, trace_span, warn, warn_span,
};

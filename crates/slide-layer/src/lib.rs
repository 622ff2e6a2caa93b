#![forbid(unsafe_code)]

//! Layer: an edge-attached sliding panel with Closed, Preview, and Opened
//! rest states.
//!
//! # Role in slidekit
//! `slide-layer` is the stateful half. [`SlidingLayer`] drives the gesture
//! classifier and scroll animator from `slide-core`, resolves releases and
//! taps into rest states, and reports motion to the embedding widget through
//! [`LayerHost`] and the listener traits.
//!
//! # Primary responsibilities
//! - **Controller**: state machine, drag tracking, snap animations.
//! - **Resolver**: fling versus slow-release decisions and the tap cycle.
//! - **Transforms**: fade, rotation, and "slide joy" effects.
//! - **Configuration and persistence**: validated [`LayerConfig`] and a
//!   single-integer [`SavedState`].

pub mod config;
pub mod error;
pub mod host;
pub mod layer;
pub mod resolver;
pub mod state;
pub mod transform;

pub use config::LayerConfig;
pub use error::{LayerError, Result};
pub use host::{InteractListener, LayerHost, ScrollListener};
pub use layer::SlidingLayer;
pub use resolver::StateResolver;
pub use state::{PanelState, SavedState};
pub use transform::{Fade, Rotation, SlideJoy, TransformHook, Visual};

#![forbid(unsafe_code)]

//! Structured logging hooks.
//!
//! With the `tracing` feature, every crate in the workspace emits events
//! named `<component>.<action>` (for example `gesture.drag_start`,
//! `animator.start`, `layer.state`) with their inputs as fields.
//! Without it, no logging code is compiled.
//!
//! The `tracing-json` feature adds [`init_json_subscriber`] for hosts that
//! want newline-delimited JSON output filtered by `RUST_LOG`.

#[cfg(feature = "tracing")]
pub use tracing::{
    debug, debug_span, error, error_span, info, info_span, trace, trace_span, warn, warn_span,
};

/// Filter used when `RUST_LOG` is unset.
#[cfg(feature = "tracing-json")]
pub const DEFAULT_FILTER: &str = "warn,slide_core=info,slide_layer=info";

/// Install a global JSON subscriber honoring `RUST_LOG`.
///
/// Fails if a global subscriber is already set.
#[cfg(feature = "tracing-json")]
pub fn init_json_subscriber() -> Result<(), tracing_subscriber::util::TryInitError> {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().json().with_target(true).with_current_span(true))
        .try_init()
}

#![forbid(unsafe_code)]

//! Gesture classification: turns raw pointer events into panel intents.
//!
//! [`GestureClassifier`] is a stateful processor that consumes the host's
//! [`PointerEvent`] stream and emits [`GestureSignal`]s (press, drag start,
//! scroll deltas, release with velocity, tap, cancel) together with a
//! consumed/intercepted decision for the host's dispatch layer.
//!
//! # State Machine
//!
//! ```text
//! Idle ──Down──▶ Down ──Move > slop──▶ Dragging ──Up──▶ Idle (Released)
//!                  │                      └──Cancel──▶ Idle (DragCancelled)
//!                  └──Up──▶ Idle (Tapped)
//! ```
//!
//! While not yet dragging, every move first asks the host's content tree
//! (see [`crate::probe`]) whether a scrollable descendant under the finger
//! can take the movement. If so the classifier yields: the event is not
//! consumed and the tracking anchors move to the current point.
//!
//! # Invariants
//!
//! 1. `DragStarted` precedes every `ScrollBy`, and a drag ends with exactly
//!    one `Released` or `DragCancelled`.
//! 2. `Tapped` and `Released` never both emit for the same session.
//! 3. A session that began outside the panel's visible strip never emits
//!    anything (it is latched "unable to drag" until the next `Down`).
//! 4. `ScrollBy` deltas are along the constrained axis only, already
//!    inverted (content moves opposite to the finger).
//!
//! # Failure Modes
//!
//! - A move that does not carry the active pointer is ignored.
//! - A `Down` carrying edge flags is left to the host.
//! - After a descendant has taken part of the gesture, the final `Up` is
//!   not reported as a tap.

use std::time::Duration;

use web_time::Instant;

use crate::event::{PointerEvent, PointerEventKind, PointerId, PointerSample};
use crate::geometry::{Axis, Point, ScrollOffset, Side, touch_within_panel};
use crate::probe::{ScrollNode, can_scroll};
use crate::velocity::VelocityTracker;

// ---------------------------------------------------------------------------
// Configuration
// ---------------------------------------------------------------------------

/// Thresholds for drag and fling detection, in pixels and pixels/second.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GestureConfig {
    /// Movement along the constrained axis before a drag starts (default: 16).
    pub touch_slop: f32,
    /// Minimum release speed for a fling (default: 50).
    pub min_fling_velocity: f32,
    /// Release speeds are capped to this magnitude (default: 8000).
    pub max_fling_velocity: f32,
    /// Minimum travel between press and release for a fling (default: 10).
    pub fling_distance: f32,
    /// Only pointer samples this recent feed the velocity estimate
    /// (default: 100ms).
    pub velocity_horizon: Duration,
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self {
            touch_slop: 16.0,
            min_fling_velocity: 50.0,
            max_fling_velocity: 8000.0,
            fling_distance: 10.0,
            velocity_horizon: Duration::from_millis(100),
        }
    }
}

impl GestureConfig {
    /// Scale all lengths and velocities by a display density.
    #[must_use]
    pub fn scaled(self, density: f32) -> Self {
        let density = if density.is_finite() && density > 0.0 {
            density
        } else {
            1.0
        };
        Self {
            touch_slop: self.touch_slop * density,
            min_fling_velocity: self.min_fling_velocity * density,
            max_fling_velocity: self.max_fling_velocity * density,
            fling_distance: self.fling_distance * density,
            velocity_horizon: self.velocity_horizon,
        }
    }
}

// ---------------------------------------------------------------------------
// Inputs and outputs
// ---------------------------------------------------------------------------

/// Panel geometry the classifier needs for one event.
#[derive(Clone, Copy)]
pub struct GestureContext<'a> {
    pub side: Side,
    pub width: i32,
    pub height: i32,
    /// Current scroll offset of the panel.
    pub offset: ScrollOffset,
    /// When false, nothing is intercepted.
    pub enabled: bool,
    /// Content tree probed for scrollable descendants.
    pub content: Option<&'a dyn ScrollNode>,
}

impl std::fmt::Debug for GestureContext<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GestureContext")
            .field("side", &self.side)
            .field("width", &self.width)
            .field("height", &self.height)
            .field("offset", &self.offset)
            .field("enabled", &self.enabled)
            .field("has_content", &self.content.is_some())
            .finish()
    }
}

/// End of a drag, handed to the state resolver.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragRelease {
    /// Release velocity in px/s, capped at the configured maximum.
    pub velocity: Point,
    /// Where the drag was anchored (view-local).
    pub initial: Point,
    /// Where the pointer lifted (view-local).
    pub current: Point,
}

/// High-level intent derived from the pointer stream.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GestureSignal {
    /// A contact landed on the panel's visible strip.
    Pressed,
    /// Movement crossed the touch slop; the panel now follows the finger.
    DragStarted,
    /// Move the panel by this many pixels along the constrained axis.
    ScrollBy(f32),
    /// The dragging pointer lifted.
    Released(DragRelease),
    /// The pointer lifted without dragging.
    Tapped,
    /// The host cancelled an active drag.
    DragCancelled,
}

/// Result of processing one event.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct GestureOutcome {
    /// Whether the panel claims this event.
    pub consumed: bool,
    pub signals: Vec<GestureSignal>,
}

impl GestureOutcome {
    fn ignored() -> Self {
        Self::default()
    }

    fn claimed(consumed: bool) -> Self {
        Self {
            consumed,
            signals: Vec::new(),
        }
    }
}

// ---------------------------------------------------------------------------
// Internal state
// ---------------------------------------------------------------------------

/// Per-gesture tracking record.
#[derive(Debug, Clone)]
struct PointerSession {
    active: Option<PointerId>,
    last: Point,
    initial: Point,
    dragging: bool,
    unable_to_drag: bool,
    /// A descendant took part of this gesture.
    yielded: bool,
    velocity: VelocityTracker,
}

// ---------------------------------------------------------------------------
// GestureClassifier
// ---------------------------------------------------------------------------

/// Stateful drag/tap/fling classifier for one panel.
///
/// Call [`process`](GestureClassifier::process) for each incoming
/// [`PointerEvent`], in delivery order.
pub struct GestureClassifier {
    config: GestureConfig,
    session: Option<PointerSession>,
}

impl std::fmt::Debug for GestureClassifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GestureClassifier")
            .field("dragging", &self.is_dragging())
            .field("active_pointer", &self.active_pointer())
            .finish()
    }
}

impl GestureClassifier {
    /// Create a classifier with the given configuration.
    #[must_use]
    pub fn new(config: GestureConfig) -> Self {
        Self {
            config,
            session: None,
        }
    }

    /// Process a pointer event, returning the consumed decision and any
    /// signals produced.
    pub fn process(
        &mut self,
        event: &PointerEvent,
        ctx: &GestureContext<'_>,
        now: Instant,
    ) -> GestureOutcome {
        match event.kind {
            PointerEventKind::Down => self.on_down(event, ctx, now),
            PointerEventKind::Move => self.on_move(event, ctx, now),
            PointerEventKind::Up => self.on_up(event, now),
            PointerEventKind::Cancel => self.on_cancel(),
            PointerEventKind::PointerDown => self.on_pointer_down(event),
            PointerEventKind::PointerUp => self.on_pointer_up(event),
        }
    }

    /// Whether a drag is currently in progress.
    #[inline]
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.session.as_ref().is_some_and(|s| s.dragging)
    }

    /// Whether the current session started outside the panel.
    #[must_use]
    pub fn is_unable_to_drag(&self) -> bool {
        self.session.as_ref().is_some_and(|s| s.unable_to_drag)
    }

    /// The pointer currently driving the gesture.
    #[must_use]
    pub fn active_pointer(&self) -> Option<PointerId> {
        self.session.as_ref().and_then(|s| s.active)
    }

    /// Drop any in-progress session without emitting signals.
    pub fn reset(&mut self) {
        self.session = None;
    }

    /// Get a reference to the current configuration.
    #[inline]
    #[must_use]
    pub fn config(&self) -> &GestureConfig {
        &self.config
    }

    /// Update the configuration.
    pub fn set_config(&mut self, config: GestureConfig) {
        self.config = config;
    }
}

// ---------------------------------------------------------------------------
// Internal event handlers
// ---------------------------------------------------------------------------

fn view_point(sample: &PointerSample) -> Point {
    Point::new(sample.x, sample.y)
}

impl GestureClassifier {
    fn on_down(
        &mut self,
        event: &PointerEvent,
        ctx: &GestureContext<'_>,
        now: Instant,
    ) -> GestureOutcome {
        // A new gesture always replaces the previous session.
        self.session = None;

        if !ctx.enabled || !event.edge_flags.is_empty() {
            return GestureOutcome::ignored();
        }
        let Some(primary) = event.primary() else {
            return GestureOutcome::ignored();
        };

        let point = view_point(primary);
        let mut velocity = VelocityTracker::new(self.config.velocity_horizon);
        velocity.add(now, point.x, point.y);

        let within = touch_within_panel(ctx.side, ctx.width, ctx.height, ctx.offset, point, true);
        self.session = Some(PointerSession {
            active: Some(primary.id),
            last: point,
            initial: point,
            dragging: false,
            unable_to_drag: !within,
            yielded: false,
            velocity,
        });

        if within {
            GestureOutcome {
                consumed: true,
                signals: vec![GestureSignal::Pressed],
            }
        } else {
            GestureOutcome::ignored()
        }
    }

    fn on_move(
        &mut self,
        event: &PointerEvent,
        ctx: &GestureContext<'_>,
        now: Instant,
    ) -> GestureOutcome {
        let slop = self.config.touch_slop;
        let Some(session) = self.session.as_mut() else {
            return GestureOutcome::ignored();
        };
        if !ctx.enabled || session.unable_to_drag {
            return GestureOutcome::ignored();
        }
        let Some(sample) = session.active.and_then(|id| event.pointer(id)) else {
            return GestureOutcome::claimed(session.dragging);
        };

        let point = view_point(sample);
        session.velocity.add(now, point.x, point.y);

        if session.dragging
            && !touch_within_panel(ctx.side, ctx.width, ctx.height, ctx.offset, point, false)
        {
            return GestureOutcome::ignored();
        }

        let axis = ctx.side.axis();
        let mut out = Vec::with_capacity(2);

        if !session.dragging {
            let dx = point.x - session.last.x;
            let dy = point.y - session.last.y;
            let descendant_scrolls = (dx != 0.0 || dy != 0.0)
                && ctx.content.is_some_and(|content| {
                    can_scroll(content, false, axis, dx, dy, sample.raw_x, sample.raw_y)
                });
            if descendant_scrolls {
                session.last = point;
                session.initial = point;
                session.yielded = true;

                #[cfg(feature = "tracing")]
                tracing::trace!(message = "gesture.yield", dx, dy);

                return GestureOutcome::ignored();
            }

            let primary = (point.along(axis) - session.initial.along(axis)).abs();
            let cross_axis = match axis {
                Axis::Horizontal => Axis::Vertical,
                Axis::Vertical => Axis::Horizontal,
            };
            let cross = (point.along(cross_axis) - session.initial.along(cross_axis)).abs();
            if primary > slop && primary > cross {
                session.dragging = true;
                out.push(GestureSignal::DragStarted);

                #[cfg(feature = "tracing")]
                tracing::debug!(
                    message = "gesture.drag_start",
                    side = ?ctx.side,
                    travel = primary,
                    slop
                );
            }
        }

        if session.dragging {
            let delta = session.last.along(axis) - point.along(axis);
            if delta != 0.0 {
                out.push(GestureSignal::ScrollBy(delta));
            }
        }
        session.last = point;

        GestureOutcome {
            consumed: session.dragging,
            signals: out,
        }
    }

    fn on_up(&mut self, event: &PointerEvent, now: Instant) -> GestureOutcome {
        let Some(mut session) = self.session.take() else {
            return GestureOutcome::ignored();
        };
        if session.unable_to_drag {
            return GestureOutcome::ignored();
        }

        if session.dragging {
            let current = session
                .active
                .and_then(|id| event.pointer(id))
                .or_else(|| event.action_pointer())
                .map_or(session.last, view_point);
            session.velocity.add(now, current.x, current.y);
            let (vx, vy) = session.velocity.velocity(self.config.max_fling_velocity);
            let release = DragRelease {
                velocity: Point::new(vx, vy),
                initial: session.initial,
                current,
            };

            #[cfg(feature = "tracing")]
            tracing::debug!(message = "gesture.release", vx, vy);

            return GestureOutcome {
                consumed: true,
                signals: vec![GestureSignal::Released(release)],
            };
        }

        if session.yielded {
            return GestureOutcome::ignored();
        }
        GestureOutcome {
            consumed: true,
            signals: vec![GestureSignal::Tapped],
        }
    }

    fn on_cancel(&mut self) -> GestureOutcome {
        match self.session.take() {
            Some(session) if session.dragging => GestureOutcome {
                consumed: true,
                signals: vec![GestureSignal::DragCancelled],
            },
            _ => GestureOutcome::ignored(),
        }
    }

    fn on_pointer_down(&mut self, event: &PointerEvent) -> GestureOutcome {
        let Some(session) = self.session.as_mut() else {
            return GestureOutcome::ignored();
        };
        if let Some(sample) = event.action_pointer() {
            session.active = Some(sample.id);
            session.last = view_point(sample);
        }
        GestureOutcome::claimed(session.dragging)
    }

    fn on_pointer_up(&mut self, event: &PointerEvent) -> GestureOutcome {
        let Some(session) = self.session.as_mut() else {
            return GestureOutcome::ignored();
        };
        let lifted = event.action_pointer().map(|p| p.id);
        if lifted.is_some() && lifted == session.active {
            let replacement = event
                .pointers
                .iter()
                .enumerate()
                .find(|(index, _)| *index != event.action_index)
                .map(|(_, sample)| sample);
            if let Some(sample) = replacement {
                session.active = Some(sample.id);
                session.last = view_point(sample);
            } else {
                session.active = None;
            }
            session.velocity.clear();
        }
        GestureOutcome::claimed(session.dragging)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

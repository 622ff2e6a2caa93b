#![forbid(unsafe_code)]

//! The panel controller.
//!
//! [`SlidingLayer`] owns the discrete [`PanelState`], the scroll offset, and
//! the single in-flight animation. The embedding widget feeds it pointer
//! events ([`SlidingLayer::handle_pointer`]), frame ticks
//! ([`SlidingLayer::tick`]), and size changes
//! ([`SlidingLayer::on_size_changed`]); the controller answers through the
//! [`LayerHost`] it was built with.
//!
//! # Invariants
//!
//! 1. The offset is always inside the side's scroll bounds and zero on the
//!    cross axis.
//! 2. `state()` is the *intended* state: it changes as soon as a transition
//!    starts, not when the layer settles.
//! 3. Every start notification is followed by at most one finish
//!    notification for the same state; a superseded transition never
//!    finishes.
//! 4. `Preview` is only entered when a preview offset is configured.
//!
//! # Failure Modes
//!
//! - Requesting Preview without a preview offset fails with
//!   [`LayerError::InvalidConfiguration`] and changes nothing.
//! - Listeners cannot reach the controller, so they cannot re-enter a
//!   transition.

use web_time::Instant;

use slide_core::animation::{ScrollAnimator, StartOutcome};
use slide_core::geometry::{bounds, rest_offset, visible_extent};
use slide_core::{
    Axis, GestureClassifier, GestureConfig, GestureContext, GestureSignal, PointerEvent,
    ScrollOffset, Side,
};

use crate::config::LayerConfig;
use crate::error::{LayerError, Result};
use crate::host::{InteractListener, LayerHost, ScrollListener};
use crate::resolver::StateResolver;
use crate::state::{PanelState, SavedState};
use crate::transform::{TransformHook, Visual};

// ---------------------------------------------------------------------------
// SlidingLayer
// ---------------------------------------------------------------------------

/// Edge-attached sliding panel controller.
pub struct SlidingLayer<H: LayerHost> {
    config: LayerConfig,
    host: H,
    width: i32,
    height: i32,
    offset: ScrollOffset,
    state: PanelState,
    classifier: GestureClassifier,
    animator: ScrollAnimator,
    drawing_cache: bool,
    visual: Visual,
    /// Fractional drag position not yet applied to the integer offset.
    drag_remainder: f32,
    transform: Option<Box<dyn TransformHook>>,
    interact: Option<Box<dyn InteractListener>>,
    scroll_listener: Option<Box<dyn ScrollListener>>,
}

impl<H: LayerHost> std::fmt::Debug for SlidingLayer<H> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SlidingLayer")
            .field("side", &self.config.side)
            .field("state", &self.state)
            .field("offset", &self.offset)
            .field("size", &(self.width, self.height))
            .field("animating", &self.animator.is_running())
            .field("dragging", &self.classifier.is_dragging())
            .finish()
    }
}

impl<H: LayerHost> SlidingLayer<H> {
    /// Create a closed layer. The size is zero until the host reports one
    /// through [`on_size_changed`](Self::on_size_changed).
    pub fn new(config: LayerConfig, host: H) -> Result<Self> {
        config.validate()?;
        let mut layer = Self {
            classifier: GestureClassifier::new(config.gesture),
            config,
            host,
            width: 0,
            height: 0,
            offset: ScrollOffset::ZERO,
            state: PanelState::Closed,
            animator: ScrollAnimator::new(),
            drawing_cache: false,
            visual: Visual::default(),
            drag_remainder: 0.0,
            transform: None,
            interact: None,
            scroll_listener: None,
        };
        layer.transition(PanelState::Closed, false, true, 0.0, Instant::now());
        Ok(layer)
    }

    // -----------------------------------------------------------------------
    // State transitions
    // -----------------------------------------------------------------------

    /// Open the layer fully.
    pub fn open(&mut self, animated: bool) {
        self.transition(PanelState::Opened, animated, false, 0.0, Instant::now());
    }

    /// Show the preview strip.
    pub fn open_preview(&mut self, animated: bool) -> Result<()> {
        self.set_state(PanelState::Preview, animated, false)
    }

    /// Close the layer, leaving only the offset distance visible.
    pub fn close(&mut self, animated: bool) {
        self.transition(PanelState::Closed, animated, false, 0.0, Instant::now());
    }

    /// Move to `state`. Without `force`, requesting the current state only
    /// refreshes the drawing-cache hint.
    pub fn set_state(&mut self, state: PanelState, animated: bool, force: bool) -> Result<()> {
        self.set_state_at(state, animated, force, Instant::now())
    }

    /// Like [`set_state`](Self::set_state) with an explicit start time for
    /// the animation.
    pub fn set_state_at(
        &mut self,
        state: PanelState,
        animated: bool,
        force: bool,
        now: Instant,
    ) -> Result<()> {
        self.ensure_reachable(state)?;
        self.transition(state, animated, force, 0.0, now);
        Ok(())
    }

    /// Snapshot the current state for persistence.
    #[must_use]
    pub fn save_state(&self) -> SavedState {
        SavedState::new(self.state)
    }

    /// Re-apply a saved state with an animated transition.
    pub fn restore_state(&mut self, saved: SavedState) -> Result<()> {
        self.set_state(saved.state, true, false)
    }

    fn ensure_reachable(&self, state: PanelState) -> Result<()> {
        if state == PanelState::Preview && !self.config.preview_enabled() {
            return Err(LayerError::invalid(
                "preview requested but no preview offset distance is set",
            ));
        }
        Ok(())
    }

    fn transition(
        &mut self,
        state: PanelState,
        animated: bool,
        force: bool,
        velocity: f32,
        now: Instant,
    ) {
        if !force && state == self.state {
            self.set_drawing_cache(false);
            return;
        }

        #[cfg(feature = "tracing")]
        let _span = tracing::debug_span!(
            "layer.set_state",
            from = ?self.state,
            to = ?state,
            animated,
            force
        )
        .entered();

        // A superseded run never reports completion.
        self.animator.cancel();
        self.notify_started(state);
        self.state = state;

        let target = self.rest_offset_for(state);
        if animated {
            self.smooth_scroll_to(target, velocity, now);
        } else {
            self.set_drawing_cache(false);
            self.scroll_to_and_notify(target);
            self.notify_finished();
        }

        #[cfg(feature = "tracing")]
        tracing::debug!(
            message = "layer.state",
            state = ?self.state,
            x = target.x,
            y = target.y
        );
    }

    fn smooth_scroll_to(&mut self, target: ScrollOffset, velocity: f32, now: Instant) {
        let axis = self.config.side.axis();
        let size = self.config.side.extent(self.width, self.height);
        match self
            .animator
            .start(self.offset, target, velocity, size, axis, now)
        {
            StartOutcome::Settled => {
                self.set_drawing_cache(false);
                self.scroll_to_and_notify(target);
                self.notify_finished();
            }
            StartOutcome::Running(_) => {
                self.set_drawing_cache(true);
                self.host.request_next_frame();
            }
        }
    }

    /// Jump an in-flight animation to its target and report it finished.
    fn complete_scroll(&mut self) {
        if let Some(target) = self.animator.abort() {
            self.set_drawing_cache(false);
            if target != self.offset {
                self.scroll_to_and_notify(target);
            }
            self.notify_finished();
        }
    }

    fn rest_offset_for(&self, state: PanelState) -> ScrollOffset {
        let visible = match state {
            PanelState::Opened => return ScrollOffset::ZERO,
            PanelState::Closed => self.config.offset_distance,
            PanelState::Preview => self
                .config
                .preview_offset_distance
                .unwrap_or(self.config.offset_distance),
        };
        rest_offset(self.config.side, self.width, self.height, visible)
    }

    // -----------------------------------------------------------------------
    // Host callbacks
    // -----------------------------------------------------------------------

    /// Advance the animation to `now`. Returns whether more frames are
    /// needed (a frame has then already been requested from the host).
    pub fn tick(&mut self, now: Instant) -> bool {
        let Some(sample) = self.animator.sample(now) else {
            return false;
        };
        if sample.offset != self.offset {
            self.scroll_to_and_notify(sample.offset);
        }
        if sample.finished {
            self.set_drawing_cache(false);
            self.notify_finished();
            false
        } else {
            self.host.request_next_frame();
            true
        }
    }

    /// Feed a pointer event. Returns whether the layer consumed it.
    pub fn handle_pointer(&mut self, event: &PointerEvent, now: Instant) -> bool {
        let outcome = {
            let ctx = GestureContext {
                side: self.config.side,
                width: self.width,
                height: self.height,
                offset: self.offset,
                enabled: self.config.sliding_enabled,
                content: self.host.content(),
            };
            self.classifier.process(event, &ctx, now)
        };

        for signal in outcome.signals {
            self.apply_signal(signal, now);
        }
        outcome.consumed
    }

    fn apply_signal(&mut self, signal: GestureSignal, now: Instant) {
        match signal {
            GestureSignal::Pressed => {
                // A press settles any running snap at its target.
                self.complete_scroll();
                self.set_drawing_cache(false);
                self.drag_remainder = 0.0;
            }
            GestureSignal::DragStarted => {
                self.animator.cancel();
                self.drag_remainder = 0.0;
                self.set_drawing_cache(true);
            }
            GestureSignal::ScrollBy(delta) => self.drag_by(delta),
            GestureSignal::Released(release) => {
                let size = self.config.side.extent(self.width, self.height);
                let next = self.resolver().next_state_for_drag(size, self.offset, &release);
                let velocity = release.velocity.along(self.config.side.axis());
                self.transition(next, true, true, velocity, now);
            }
            GestureSignal::Tapped => {
                if self.config.change_state_on_tap {
                    let next = self.resolver().next_state_after_tap(self.state);
                    self.transition(next, true, true, 0.0, now);
                }
            }
            GestureSignal::DragCancelled => {
                self.transition(self.state, true, true, 0.0, now);
            }
        }
    }

    fn drag_by(&mut self, delta: f32) {
        let side = self.config.side;
        let b = bounds(side, self.width, self.height);
        let current = self.offset.along(b.axis) as f32 + self.drag_remainder;
        let target = b.clamp_f32(current + delta);
        let whole = target.trunc();
        self.drag_remainder = target - whole;
        self.scroll_to_and_notify(ScrollOffset::on_axis(b.axis, whole as i32));
    }

    /// React to a new container size. The transform is re-measured; when the
    /// extent along the axis changed, any animation completes and the layer
    /// snaps to its current state's rest offset.
    pub fn on_size_changed(&mut self, width: i32, height: i32, old_width: i32, old_height: i32) {
        self.width = width;
        self.height = height;
        self.measure_transform();

        let changed = match self.config.side.axis() {
            Axis::Horizontal => width != old_width,
            Axis::Vertical => height != old_height,
        };
        if changed {
            self.complete_scroll();
            let target = self.rest_offset_for(self.state);
            self.scroll_to_and_notify(target);
        }
    }

    /// Convenience for [`on_size_changed`](Self::on_size_changed) using the
    /// current size as the old one.
    pub fn set_size(&mut self, width: i32, height: i32) {
        self.on_size_changed(width, height, self.width, self.height);
    }

    /// Re-attach to another side. Resets to Closed without animation.
    pub fn set_stick_side(&mut self, side: Side) {
        self.config.side = side;
        self.classifier.reset();
        self.measure_transform();
        self.transition(PanelState::Closed, false, true, 0.0, Instant::now());
    }

    /// [`set_stick_side`](Self::set_stick_side) from a raw side constant.
    pub fn set_stick_side_raw(&mut self, raw: i32) -> Result<()> {
        let side = Side::try_from(raw)?;
        self.set_stick_side(side);
        Ok(())
    }

    // -----------------------------------------------------------------------
    // Notification
    // -----------------------------------------------------------------------

    fn scroll_to_and_notify(&mut self, target: ScrollOffset) {
        if target != self.offset {
            self.offset = target;
            self.host.set_scroll_offset(target.x, target.y);
        }
        if self.scroll_listener.is_none() && self.transform.is_none() {
            return;
        }

        let side = self.config.side;
        let absolute = visible_extent(side, self.width, self.height, self.offset);
        if let Some(listener) = self.scroll_listener.as_mut() {
            listener.on_scroll(absolute);
        }
        if let Some(hook) = self.transform.as_ref() {
            let size = side.extent(self.width, self.height);
            let layer_progress = if size > 0 {
                (absolute as f32 / size as f32).clamp(0.0, 1.0)
            } else {
                0.0
            };
            let preview_progress = match self.config.preview_offset_distance {
                Some(preview) if preview > 0 => (absolute as f32 / preview as f32).min(1.0),
                _ => 0.0,
            };
            hook.transform(&mut self.visual, preview_progress, layer_progress, side);
            self.host.apply_visual(&self.visual);
        }
    }

    fn notify_started(&mut self, state: PanelState) {
        let Some(listener) = self.interact.as_mut() else {
            return;
        };
        match state {
            PanelState::Closed => listener.on_close(),
            PanelState::Preview => listener.on_show_preview(),
            PanelState::Opened => listener.on_open(),
        }
    }

    fn notify_finished(&mut self) {
        let Some(listener) = self.interact.as_mut() else {
            return;
        };
        match self.state {
            PanelState::Closed => listener.on_closed(),
            PanelState::Preview => listener.on_preview_shown(),
            PanelState::Opened => listener.on_opened(),
        }
    }

    fn set_drawing_cache(&mut self, enabled: bool) {
        if self.drawing_cache != enabled {
            self.drawing_cache = enabled;
            self.host.set_children_drawing_cache(enabled);
        }
    }

    fn measure_transform(&mut self) {
        if let Some(hook) = self.transform.as_mut() {
            hook.measure(self.width, self.height, self.config.side, &mut self.visual);
        }
    }

    fn resolver(&self) -> StateResolver {
        StateResolver::from_config(&self.config)
    }

    // -----------------------------------------------------------------------
    // Listeners and hooks
    // -----------------------------------------------------------------------

    /// Install the transition listener, replacing any previous one.
    pub fn set_interact_listener(&mut self, listener: impl InteractListener + 'static) {
        self.interact = Some(Box::new(listener));
    }

    /// Install the scroll listener, replacing any previous one.
    pub fn set_scroll_listener(&mut self, listener: impl ScrollListener + 'static) {
        self.scroll_listener = Some(Box::new(listener));
    }

    /// Install a transform hook and measure it against the current size.
    pub fn set_transform(&mut self, hook: impl TransformHook + 'static) {
        self.transform = Some(Box::new(hook));
        self.measure_transform();
    }

    /// Remove all listeners and the transform hook.
    pub fn clear_hooks(&mut self) {
        self.interact = None;
        self.scroll_listener = None;
        self.transform = None;
    }

    // -----------------------------------------------------------------------
    // Configuration
    // -----------------------------------------------------------------------

    /// Change the closed visible distance.
    pub fn set_offset_distance(&mut self, distance: i32) -> Result<()> {
        let candidate = self.config.clone().with_offset_distance(distance);
        candidate.validate()?;
        self.config = candidate;
        Ok(())
    }

    /// Change or disable the preview distance. While in Preview the layer
    /// animates to the new rest offset.
    pub fn set_preview_offset_distance(&mut self, distance: Option<i32>) -> Result<()> {
        if distance.is_none() && self.state == PanelState::Preview {
            return Err(LayerError::invalid(
                "cannot disable preview while the layer is in preview",
            ));
        }
        let mut candidate = self.config.clone();
        candidate.preview_offset_distance = distance;
        candidate.validate()?;
        self.config = candidate;

        if self.state == PanelState::Preview {
            let target = self.rest_offset_for(PanelState::Preview);
            self.animator.cancel();
            self.smooth_scroll_to(target, 0.0, Instant::now());
        }
        Ok(())
    }

    /// Replace the gesture thresholds.
    pub fn set_gesture_config(&mut self, gesture: GestureConfig) -> Result<()> {
        let candidate = self.config.clone().with_gesture(gesture);
        candidate.validate()?;
        self.config = candidate;
        self.classifier.set_config(gesture);
        Ok(())
    }

    /// Toggle whether a tap cycles the state.
    pub fn set_change_state_on_tap(&mut self, enabled: bool) {
        self.config.change_state_on_tap = enabled;
    }

    /// Enable or disable pointer interaction.
    pub fn set_sliding_enabled(&mut self, enabled: bool) {
        self.config.sliding_enabled = enabled;
    }

    /// Allow drags to start on the shadow.
    pub fn set_sliding_from_shadow_enabled(&mut self, enabled: bool) {
        self.config.sliding_from_shadow_enabled = enabled;
    }

    /// Set the cosmetic shadow size reported to the renderer.
    pub fn set_shadow_size(&mut self, size: i32) {
        self.config.shadow_size = size;
    }

    // -----------------------------------------------------------------------
    // Queries
    // -----------------------------------------------------------------------

    #[must_use]
    pub fn state(&self) -> PanelState {
        self.state
    }

    #[must_use]
    pub fn is_opened(&self) -> bool {
        self.state == PanelState::Opened
    }

    #[must_use]
    pub fn is_closed(&self) -> bool {
        self.state == PanelState::Closed
    }

    #[must_use]
    pub fn is_in_preview(&self) -> bool {
        self.state == PanelState::Preview
    }

    /// Current scroll offset.
    #[must_use]
    pub fn offset(&self) -> ScrollOffset {
        self.offset
    }

    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.animator.is_running()
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.classifier.is_dragging()
    }

    #[must_use]
    pub fn config(&self) -> &LayerConfig {
        &self.config
    }

    #[must_use]
    pub fn side(&self) -> Side {
        self.config.side
    }

    #[must_use]
    pub fn offset_distance(&self) -> i32 {
        self.config.offset_distance
    }

    #[must_use]
    pub fn preview_offset_distance(&self) -> Option<i32> {
        self.config.preview_offset_distance
    }

    #[must_use]
    pub fn shadow_size(&self) -> i32 {
        self.config.shadow_size
    }

    #[must_use]
    pub fn change_state_on_tap(&self) -> bool {
        self.config.change_state_on_tap
    }

    #[must_use]
    pub fn is_sliding_enabled(&self) -> bool {
        self.config.sliding_enabled
    }

    #[must_use]
    pub fn is_sliding_from_shadow_enabled(&self) -> bool {
        self.config.sliding_from_shadow_enabled
    }

    /// Whether the drawing-cache hint is currently on.
    #[must_use]
    pub fn drawing_cache_enabled(&self) -> bool {
        self.drawing_cache
    }

    /// Last visual properties produced by the transform hook.
    #[must_use]
    pub fn visual(&self) -> &Visual {
        &self.visual
    }

    /// The host receiving offsets and frame requests.
    #[must_use]
    pub fn host(&self) -> &H {
        &self.host
    }

    /// Mutable access to the host, e.g. to swap its content tree.
    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    /// Consume the layer, returning its host.
    pub fn into_host(self) -> H {
        self.host
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;
    use std::time::Duration;

    use super::*;
    use crate::transform::Fade;
    use slide_core::{PointerEventKind, PointerSample};

    const MS_16: Duration = Duration::from_millis(16);
    const SECOND: Duration = Duration::from_secs(1);

    #[derive(Debug, Default)]
    struct RecordingHost {
        offsets: Vec<(i32, i32)>,
        frames: usize,
        cache: Vec<bool>,
        visuals: usize,
    }

    impl LayerHost for RecordingHost {
        fn set_scroll_offset(&mut self, x: i32, y: i32) {
            self.offsets.push((x, y));
        }

        fn request_next_frame(&mut self) {
            self.frames += 1;
        }

        fn set_children_drawing_cache(&mut self, enabled: bool) {
            self.cache.push(enabled);
        }

        fn apply_visual(&mut self, _visual: &Visual) {
            self.visuals += 1;
        }
    }

    #[derive(Clone, Default)]
    struct Calls(Rc<RefCell<Vec<&'static str>>>);

    impl Calls {
        fn take(&self) -> Vec<&'static str> {
            std::mem::take(&mut *self.0.borrow_mut())
        }
    }

    impl InteractListener for Calls {
        fn on_open(&mut self) {
            self.0.borrow_mut().push("open");
        }
        fn on_show_preview(&mut self) {
            self.0.borrow_mut().push("show_preview");
        }
        fn on_close(&mut self) {
            self.0.borrow_mut().push("close");
        }
        fn on_opened(&mut self) {
            self.0.borrow_mut().push("opened");
        }
        fn on_preview_shown(&mut self) {
            self.0.borrow_mut().push("preview_shown");
        }
        fn on_closed(&mut self) {
            self.0.borrow_mut().push("closed");
        }
    }

    fn layer(config: LayerConfig) -> (SlidingLayer<RecordingHost>, Calls) {
        let mut layer = SlidingLayer::new(config, RecordingHost::default()).expect("valid config");
        layer.set_size(300, 600);
        let calls = Calls::default();
        layer.set_interact_listener(calls.clone());
        (layer, calls)
    }

    fn ev(kind: PointerEventKind, x: f32, y: f32) -> PointerEvent {
        PointerEvent::single(kind, PointerSample::new(0, x, y))
    }

    #[test]
    fn starts_closed_at_rest_offset() {
        let (layer, _) = layer(LayerConfig::default().with_offset_distance(20));
        assert!(layer.is_closed());
        assert_eq!(layer.offset(), ScrollOffset::new(-280, 0));
        assert_eq!(layer.host().offsets, vec![(-280, 0)]);
    }

    #[test]
    fn invalid_config_is_rejected() {
        let config = LayerConfig::default()
            .with_offset_distance(50)
            .with_preview_offset_distance(10);
        assert!(SlidingLayer::new(config, RecordingHost::default()).is_err());
    }

    #[test]
    fn unanimated_open_fires_start_and_finish() {
        let (mut layer, calls) = layer(LayerConfig::default());
        layer.open(false);
        assert!(layer.is_opened());
        assert_eq!(layer.offset(), ScrollOffset::ZERO);
        assert_eq!(calls.take(), vec!["open", "opened"]);
    }

    #[test]
    fn close_twice_is_idempotent() {
        let (mut layer, calls) = layer(LayerConfig::default());
        layer.open(false);
        calls.take();

        layer.close(false);
        let after_first = layer.offset();
        assert_eq!(calls.take(), vec!["close", "closed"]);

        layer.close(false);
        assert_eq!(layer.offset(), after_first);
        assert!(calls.take().is_empty());
    }

    #[test]
    fn animated_open_finishes_on_tick() {
        let (mut layer, calls) = layer(LayerConfig::default());
        let t = Instant::now();
        layer.set_state_at(PanelState::Opened, true, false, t).expect("open");
        assert!(layer.is_opened());
        assert!(layer.is_animating());
        assert!(layer.drawing_cache_enabled());
        assert_eq!(calls.take(), vec!["open"]);

        assert!(layer.tick(t + MS_16));
        let mid = layer.offset().x;
        assert!(mid > -300 && mid < 0, "mid = {mid}");

        assert!(!layer.tick(t + SECOND));
        assert_eq!(layer.offset(), ScrollOffset::ZERO);
        assert!(!layer.drawing_cache);
        assert_eq!(calls.take(), vec!["opened"]);
        assert!(!layer.tick(t + SECOND + MS_16));
    }

    #[test]
    fn superseded_animation_never_finishes() {
        let (mut layer, calls) = layer(LayerConfig::default());
        let t = Instant::now();
        layer.set_state_at(PanelState::Opened, true, false, t).expect("open");
        layer.tick(t + MS_16 * 3);
        layer.set_state_at(PanelState::Closed, true, false, t + MS_16 * 3).expect("close");
        layer.tick(t + SECOND * 2);
        assert_eq!(calls.take(), vec!["open", "close", "closed"]);
        assert_eq!(layer.offset(), ScrollOffset::new(-300, 0));
    }

    #[test]
    fn preview_requires_configuration() {
        let (mut layer, calls) = layer(LayerConfig::default());
        let err = layer.open_preview(false).expect_err("no preview");
        assert!(err.is_configuration());
        assert!(layer.is_closed());
        assert!(calls.take().is_empty());
    }

    #[test]
    fn preview_rest_offset() {
        let (mut layer, calls) = layer(LayerConfig::default().with_preview_offset_distance(100));
        layer.open_preview(false).expect("preview");
        assert!(layer.is_in_preview());
        assert_eq!(layer.offset(), ScrollOffset::new(-200, 0));
        assert_eq!(calls.take(), vec!["show_preview", "preview_shown"]);
    }

    #[test]
    fn changing_preview_distance_in_preview_reanimates() {
        let (mut layer, _) = layer(LayerConfig::default().with_preview_offset_distance(100));
        layer.open_preview(false).expect("preview");
        layer.set_preview_offset_distance(Some(150)).expect("valid");
        assert!(layer.is_animating());
        layer.tick(Instant::now() + SECOND);
        assert_eq!(layer.offset(), ScrollOffset::new(-150, 0));

        assert!(layer.set_preview_offset_distance(None).is_err());
    }

    #[test]
    fn offset_distance_is_revalidated() {
        let (mut layer, _) = layer(LayerConfig::default().with_preview_offset_distance(40));
        assert!(layer.set_offset_distance(60).is_err());
        assert_eq!(layer.offset_distance(), 0);
        layer.set_offset_distance(30).expect("valid");
        assert_eq!(layer.offset_distance(), 30);
    }

    #[test]
    fn tap_cycles_state() {
        let (mut layer, _) = layer(LayerConfig::default());
        let t = Instant::now();
        layer.open(false);
        assert!(layer.handle_pointer(&ev(PointerEventKind::Down, 100.0, 50.0), t));
        assert!(layer.handle_pointer(&ev(PointerEventKind::Up, 100.0, 50.0), t + MS_16));
        assert!(layer.is_closed());
    }

    #[test]
    fn tap_toggle_can_be_disabled() {
        let (mut layer, _) = layer(LayerConfig::default().with_change_state_on_tap(false));
        let t = Instant::now();
        layer.open(false);
        layer.handle_pointer(&ev(PointerEventKind::Down, 100.0, 50.0), t);
        layer.handle_pointer(&ev(PointerEventKind::Up, 100.0, 50.0), t + MS_16);
        assert!(layer.is_opened());
    }

    #[test]
    fn drag_moves_offset_and_release_resolves() {
        let (mut layer, calls) = layer(LayerConfig::default().with_offset_distance(40));
        let t = Instant::now();
        // Closed at -260: the visible strip is x >= 260.
        assert!(layer.handle_pointer(&ev(PointerEventKind::Down, 280.0, 50.0), t));
        for i in 1..=10u32 {
            let x = 280.0 - 20.0 * i as f32;
            layer.handle_pointer(&ev(PointerEventKind::Move, x, 50.0), t + MS_16 * i);
        }
        assert!(layer.is_dragging());
        assert!(layer.drawing_cache_enabled());
        // Ten 20px moves from the closed rest offset.
        assert_eq!(layer.offset(), ScrollOffset::new(-60, 0));

        layer.handle_pointer(&ev(PointerEventKind::Up, 80.0, 50.0), t + MS_16 * 11);
        assert!(layer.is_opened());
        assert_eq!(calls.take(), vec!["open"]);
        layer.tick(t + SECOND * 2);
        assert_eq!(layer.offset(), ScrollOffset::ZERO);
        assert_eq!(calls.take(), vec!["opened"]);
    }

    #[test]
    fn drag_is_clamped_to_bounds() {
        let (mut layer, _) = layer(LayerConfig::default());
        layer.open(false);
        let t = Instant::now();
        layer.handle_pointer(&ev(PointerEventKind::Down, 100.0, 50.0), t);
        // Dragging further open than fully opened.
        layer.handle_pointer(&ev(PointerEventKind::Move, 50.0, 50.0), t + MS_16);
        layer.handle_pointer(&ev(PointerEventKind::Move, 10.0, 50.0), t + MS_16 * 2);
        assert_eq!(layer.offset(), ScrollOffset::ZERO);
    }

    #[test]
    fn sub_pixel_moves_accumulate() {
        let (mut layer, _) = layer(LayerConfig::default());
        layer.open(false);
        let t = Instant::now();
        layer.handle_pointer(&ev(PointerEventKind::Down, 100.0, 50.0), t);
        layer.handle_pointer(&ev(PointerEventKind::Move, 120.0, 50.0), t + MS_16);
        assert_eq!(layer.offset(), ScrollOffset::new(-20, 0));
        for i in 0..4u32 {
            let x = 120.0 + 0.5 * (i + 1) as f32;
            layer.handle_pointer(&ev(PointerEventKind::Move, x, 50.0), t + MS_16 * (i + 2));
        }
        assert_eq!(layer.offset(), ScrollOffset::new(-22, 0));
    }

    #[test]
    fn cancel_returns_to_current_state() {
        let (mut layer, calls) = layer(LayerConfig::default());
        layer.open(false);
        calls.take();
        let t = Instant::now();
        layer.handle_pointer(&ev(PointerEventKind::Down, 100.0, 50.0), t);
        layer.handle_pointer(&ev(PointerEventKind::Move, 200.0, 50.0), t + MS_16);
        assert_eq!(layer.offset(), ScrollOffset::new(-100, 0));
        layer.handle_pointer(&ev(PointerEventKind::Cancel, 200.0, 50.0), t + MS_16 * 2);
        assert!(layer.is_opened());
        layer.tick(t + SECOND * 2);
        assert_eq!(layer.offset(), ScrollOffset::ZERO);
        assert_eq!(calls.take(), vec!["open", "opened"]);
    }

    #[test]
    fn disabled_sliding_ignores_pointer() {
        let (mut layer, _) = layer(LayerConfig::default());
        layer.open(false);
        layer.set_sliding_enabled(false);
        let t = Instant::now();
        assert!(!layer.handle_pointer(&ev(PointerEventKind::Down, 100.0, 50.0), t));
        assert!(!layer.is_sliding_enabled());
    }

    #[test]
    fn size_change_snaps_to_rest_offset() {
        let (mut layer, _) = layer(LayerConfig::default().with_offset_distance(20));
        layer.set_size(400, 600);
        assert_eq!(layer.offset(), ScrollOffset::new(-380, 0));
        // Height changes do not matter on a horizontal layer.
        let before = layer.host().offsets.len();
        layer.set_size(400, 800);
        assert_eq!(layer.host().offsets.len(), before);
    }

    #[test]
    fn size_change_completes_running_animation() {
        let (mut layer, calls) = layer(LayerConfig::default());
        let t = Instant::now();
        layer.set_state_at(PanelState::Opened, true, false, t).expect("open");
        layer.set_size(320, 600);
        assert!(!layer.is_animating());
        assert_eq!(layer.offset(), ScrollOffset::ZERO);
        assert_eq!(calls.take(), vec!["open", "opened"]);
    }

    #[test]
    fn stick_side_resets_closed() {
        let (mut layer, calls) = layer(LayerConfig::default().with_offset_distance(10));
        layer.open(false);
        calls.take();
        layer.set_stick_side(Side::Top);
        assert!(layer.is_closed());
        assert_eq!(layer.offset(), ScrollOffset::new(0, 590));
        assert_eq!(calls.take(), vec!["close", "closed"]);

        assert!(layer.set_stick_side_raw(Side::RAW_BOTTOM).is_ok());
        assert_eq!(layer.side(), Side::Bottom);
        assert!(matches!(
            layer.set_stick_side_raw(3),
            Err(LayerError::IllegalAttachmentSide(_))
        ));
    }

    #[test]
    fn restore_opened_state() {
        let (mut fresh, _) = layer(LayerConfig::default());
        let saved = SavedState::try_from(2).expect("known");
        fresh.restore_state(saved).expect("restore");
        assert!(fresh.is_opened());
        fresh.tick(Instant::now() + SECOND);
        assert_eq!(fresh.offset(), ScrollOffset::ZERO);
        assert_eq!(fresh.save_state(), saved);
    }

    #[test]
    fn zero_size_animation_settles_synchronously() {
        let mut layer =
            SlidingLayer::new(LayerConfig::default(), RecordingHost::default()).expect("valid");
        let calls = Calls::default();
        layer.set_interact_listener(calls.clone());
        layer.open(true);
        assert!(!layer.is_animating());
        assert_eq!(calls.take(), vec!["open", "opened"]);
    }

    #[test]
    fn scroll_listener_and_transform_see_every_update() {
        let (mut layer, _) = layer(LayerConfig::default());
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        layer.set_scroll_listener(move |v: i32| sink.borrow_mut().push(v));
        layer.set_transform(Fade::default());

        layer.open(false);
        assert_eq!(*seen.borrow(), vec![300]);
        assert_eq!(layer.visual().alpha, 1.0);

        // Same state, forced: offset unchanged but listeners still notified.
        layer.set_state(PanelState::Opened, false, true).expect("force");
        assert_eq!(*seen.borrow(), vec![300, 300]);
        assert_eq!(layer.host().visuals, 2);

        layer.close(false);
        assert_eq!(seen.borrow().last().copied(), Some(0));
        assert_eq!(layer.visual().alpha, 0.0);
    }

    #[test]
    fn press_during_animation_settles_at_target() {
        let (mut layer, calls) = layer(LayerConfig::default().with_change_state_on_tap(false));
        let t = Instant::now();
        layer.set_state_at(PanelState::Opened, true, false, t).expect("open");
        layer.tick(t + MS_16);
        let mid = layer.offset().x;
        assert!(mid > -300 && mid < 0, "mid = {mid}");

        assert!(layer.handle_pointer(&ev(PointerEventKind::Down, 295.0, 50.0), t + MS_16 * 2));
        assert!(!layer.is_animating());
        assert_eq!(layer.offset(), ScrollOffset::ZERO);
        assert!(!layer.drawing_cache);

        layer.handle_pointer(&ev(PointerEventKind::Up, 295.0, 50.0), t + MS_16 * 3);
        layer.tick(t + SECOND * 2);
        assert!(layer.is_opened());
        assert_eq!(layer.offset(), ScrollOffset::ZERO);
        assert_eq!(calls.take(), vec!["open", "opened"]);
    }

    #[test]
    fn drawing_cache_hint_toggles_only_on_change() {
        let (mut layer, _) = layer(LayerConfig::default());
        let t = Instant::now();
        layer.set_state_at(PanelState::Opened, true, false, t).expect("open");
        layer.tick(t + MS_16);
        layer.tick(t + MS_16 * 2);
        layer.tick(t + SECOND);
        layer.close(false);
        assert_eq!(layer.host().cache, vec![true, false]);
    }
}

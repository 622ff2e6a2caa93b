//! Property-based invariant tests for panel geometry and snap timing.
//!
//! 1. Clamped offsets always lie inside the side's scroll bounds
//! 2. Rest offsets are legal and expose the requested strip
//! 3. Snap durations never exceed the cap
//! 4. Easing stays within [0, 1] and is monotone
//! 5. Velocity estimates respect the cap
//! 6. Arbitrary pointer streams keep drag signals well nested

use std::time::Duration;

use proptest::prelude::*;
use slide_core::animation::{MAX_SCROLL_DURATION, ease_out_quint, snap_duration};
use slide_core::geometry::{ScrollOffset, Side, bounds, rest_offset, visible_extent};
use slide_core::gesture::{GestureClassifier, GestureConfig, GestureContext, GestureSignal};
use slide_core::velocity::VelocityTracker;
use slide_core::{PointerEvent, PointerEventKind, PointerSample};
use web_time::Instant;

// ── Strategies ──────────────────────────────────────────────────────────

fn side_strategy() -> impl Strategy<Value = Side> {
    prop_oneof![
        Just(Side::Left),
        Just(Side::Right),
        Just(Side::Top),
        Just(Side::Bottom),
    ]
}

fn kind_strategy() -> impl Strategy<Value = PointerEventKind> {
    prop_oneof![
        Just(PointerEventKind::Down),
        Just(PointerEventKind::Move),
        Just(PointerEventKind::Move),
        Just(PointerEventKind::Move),
        Just(PointerEventKind::Up),
        Just(PointerEventKind::Cancel),
    ]
}

// ═══════════════════════════════════════════════════════════════════════
// 1-2. Bounds
// ═══════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn clamp_lands_inside_bounds(
        side in side_strategy(),
        width in -50i32..2000,
        height in -50i32..2000,
        value in -5000i32..5000,
    ) {
        let b = bounds(side, width, height);
        let clamped = b.clamp(value);
        prop_assert!(b.contains(clamped), "{clamped} outside {b:?}");
        prop_assert!(b.low <= 0 && b.high >= 0);
    }

    #[test]
    fn rest_offset_is_legal(
        side in side_strategy(),
        width in 0i32..2000,
        height in 0i32..2000,
        visible in -100i32..2500,
    ) {
        let b = bounds(side, width, height);
        let offset = rest_offset(side, width, height, visible);
        prop_assert!(b.contains(offset.along(side.axis())));
        // The cross axis is never touched.
        let cross = match side.axis() {
            slide_core::Axis::Horizontal => offset.y,
            slide_core::Axis::Vertical => offset.x,
        };
        prop_assert_eq!(cross, 0);

        let extent = side.extent(width, height);
        let expected = visible.clamp(0, extent);
        prop_assert_eq!(visible_extent(side, width, height, offset), expected);
    }

    #[test]
    fn opened_offset_is_zero(
        side in side_strategy(),
        width in 0i32..2000,
        height in 0i32..2000,
    ) {
        let extent = side.extent(width, height);
        prop_assert_eq!(rest_offset(side, width, height, extent), ScrollOffset::ZERO);
    }
}

// ═══════════════════════════════════════════════════════════════════════
// 3-4. Timing
// ═══════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn snap_duration_is_capped(
        delta in -5000i32..5000,
        size in -10i32..5000,
        velocity in -20000.0f32..20000.0,
    ) {
        let d = snap_duration(delta, size, velocity, MAX_SCROLL_DURATION);
        prop_assert!(d <= MAX_SCROLL_DURATION, "{d:?}");
    }

    #[test]
    fn easing_is_monotone_and_bounded(a in 0.0f32..=1.0, b in 0.0f32..=1.0) {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        let (ea, eb) = (ease_out_quint(lo), ease_out_quint(hi));
        prop_assert!((0.0..=1.0).contains(&ea));
        prop_assert!((0.0..=1.0).contains(&eb));
        prop_assert!(ea <= eb + 1e-6);
    }
}

// ═══════════════════════════════════════════════════════════════════════
// 5-6. Input
// ═══════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn velocity_respects_cap(
        points in prop::collection::vec((0u64..200, -3000.0f32..3000.0, -3000.0f32..3000.0), 0..30),
        max in 1.0f32..10000.0,
    ) {
        let mut vt = VelocityTracker::new(Duration::from_millis(100));
        let base = Instant::now();
        let mut at = 0u64;
        for (dt, x, y) in points {
            at += dt;
            vt.add(base + Duration::from_millis(at), x, y);
        }
        let (vx, vy) = vt.velocity(max);
        prop_assert!(vx.abs() <= max && vy.abs() <= max);
    }

    #[test]
    fn drag_signals_are_well_nested(
        side in side_strategy(),
        events in prop::collection::vec((kind_strategy(), 0.0f32..400.0, 0.0f32..700.0), 0..80),
    ) {
        let mut gc = GestureClassifier::new(GestureConfig::default());
        let ctx = GestureContext {
            side,
            width: 300,
            height: 600,
            offset: ScrollOffset::ZERO,
            enabled: true,
            content: None,
        };
        let base = Instant::now();
        let mut open = false;
        for (i, (kind, x, y)) in events.into_iter().enumerate() {
            if kind == PointerEventKind::Down {
                open = false;
            }
            let ev = PointerEvent::single(kind, PointerSample::new(0, x, y));
            let out = gc.process(&ev, &ctx, base + Duration::from_millis(i as u64 * 8));
            for signal in out.signals {
                match signal {
                    GestureSignal::DragStarted => {
                        prop_assert!(!open, "drag started twice");
                        open = true;
                    }
                    GestureSignal::ScrollBy(_) => prop_assert!(open, "scroll outside a drag"),
                    GestureSignal::Released(_) | GestureSignal::DragCancelled => {
                        prop_assert!(open, "drag ended without starting");
                        open = false;
                    }
                    GestureSignal::Pressed | GestureSignal::Tapped => {
                        prop_assert!(!open);
                    }
                }
            }
            prop_assert_eq!(gc.is_dragging(), open);
        }
    }
}

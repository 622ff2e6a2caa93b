//! Benchmark: gesture classification and animation sampling hot paths.
//!
//! Run with: `cargo bench -p slide-core --bench gesture_bench`
//!
//! Both paths run once per input event or per frame, so they should stay
//! far below a frame budget.

use std::hint::black_box;
use std::time::Duration;

use criterion::{Criterion, criterion_group, criterion_main};
use slide_core::animation::ScrollAnimator;
use slide_core::geometry::{Axis, ScrollOffset, Side};
use slide_core::gesture::{GestureClassifier, GestureConfig, GestureContext};
use slide_core::{PointerEvent, PointerEventKind, PointerSample};
use web_time::Instant;

fn drag_stream() -> Vec<PointerEvent> {
    let mut events = Vec::with_capacity(66);
    events.push(PointerEvent::single(
        PointerEventKind::Down,
        PointerSample::new(0, 290.0, 300.0),
    ));
    for i in 1..=64u16 {
        events.push(PointerEvent::single(
            PointerEventKind::Move,
            PointerSample::new(0, 290.0 - f32::from(i) * 4.0, 300.0),
        ));
    }
    events.push(PointerEvent::single(
        PointerEventKind::Up,
        PointerSample::new(0, 30.0, 300.0),
    ));
    events
}

// ===========================================================================
// Gesture classification
// ===========================================================================

fn bench_classify_drag(c: &mut Criterion) {
    let events = drag_stream();
    let ctx = GestureContext {
        side: Side::Right,
        width: 300,
        height: 600,
        offset: ScrollOffset::ZERO,
        enabled: true,
        content: None,
    };

    c.bench_function("classify_full_drag", |b| {
        b.iter(|| {
            let mut gc = GestureClassifier::new(GestureConfig::default());
            let base = Instant::now();
            let mut signals = 0usize;
            for (i, ev) in events.iter().enumerate() {
                let now = base + Duration::from_millis(i as u64 * 8);
                signals += gc.process(black_box(ev), &ctx, now).signals.len();
            }
            black_box(signals)
        });
    });
}

// ===========================================================================
// Animation sampling
// ===========================================================================

fn bench_sample_run(c: &mut Criterion) {
    c.bench_function("sample_snap_run", |b| {
        b.iter(|| {
            let mut anim = ScrollAnimator::new();
            let t = Instant::now();
            anim.start(
                ScrollOffset::new(-300, 0),
                ScrollOffset::ZERO,
                0.0,
                300,
                Axis::Horizontal,
                t,
            );
            let mut now = t;
            while let Some(sample) = anim.sample(now) {
                black_box(sample.offset);
                if sample.finished {
                    break;
                }
                now += Duration::from_millis(16);
            }
        });
    });
}

criterion_group!(benches, bench_classify_drag, bench_sample_run);
criterion_main!(benches);

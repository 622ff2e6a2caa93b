#![forbid(unsafe_code)]

//! Descendant scroll-capability probe.
//!
//! Before a touch turns into a panel drag, the classifier asks whether some
//! scrollable descendant under the finger could consume the movement
//! instead. Hosts expose their view tree through [`ScrollNode`]; the probe
//! walks it depth-first, topmost child first, and stops at the first node
//! that can scroll in the requested direction.

use crate::geometry::{Axis, RectF};

/// Capability interface a host exposes for each node of its content tree.
pub trait ScrollNode {
    /// Bounding box in screen coordinates.
    fn screen_bounds(&self) -> RectF;

    /// Number of child nodes.
    fn child_count(&self) -> usize {
        0
    }

    /// Child at `index`, in drawing order (last is topmost).
    fn child(&self, _index: usize) -> Option<&dyn ScrollNode> {
        None
    }

    /// Whether this node can scroll its own content along `axis`.
    ///
    /// `direction < 0` asks about scrolling back toward the start of the
    /// content, `direction > 0` toward its end.
    fn can_scroll_in_direction(&self, _axis: Axis, _direction: f32) -> bool {
        false
    }
}

/// Whether `node` or one of its descendants under `(raw_x, raw_y)` can
/// consume a finger movement of `(dx, dy)` along `axis`.
///
/// `check_self` is false for the root, which is the panel itself.
#[must_use]
pub fn can_scroll(
    node: &dyn ScrollNode,
    check_self: bool,
    axis: Axis,
    dx: f32,
    dy: f32,
    raw_x: f32,
    raw_y: f32,
) -> bool {
    for index in (0..node.child_count()).rev() {
        let Some(child) = node.child(index) else {
            continue;
        };
        if child.screen_bounds().contains(raw_x, raw_y)
            && can_scroll(child, true, axis, dx, dy, raw_x, raw_y)
        {
            return true;
        }
    }

    // Content scrolls opposite to the finger.
    let direction = match axis {
        Axis::Horizontal => -dx,
        Axis::Vertical => -dy,
    };
    check_self && node.can_scroll_in_direction(axis, direction)
}

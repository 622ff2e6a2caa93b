#![forbid(unsafe_code)]

//! Seams between the controller and the embedding widget.
//!
//! The controller never draws. It pushes offsets, frame requests, cache
//! hints, and visual properties into a [`LayerHost`], and reports progress
//! through the listener traits.

use slide_core::ScrollNode;

use crate::transform::Visual;

/// Render hooks implemented by the widget that embeds a layer.
pub trait LayerHost {
    /// Move the layer's content. Only called when the offset changes.
    fn set_scroll_offset(&mut self, x: i32, y: i32);

    /// Ask for a frame tick; the host answers by calling
    /// [`SlidingLayer::tick`](crate::SlidingLayer::tick).
    fn request_next_frame(&mut self);

    /// Rendering hint: children may draw from a cache while moving.
    fn set_children_drawing_cache(&mut self, _enabled: bool) {}

    /// Apply properties computed by the transform hook.
    fn apply_visual(&mut self, _visual: &Visual) {}

    /// Content tree probed for scrollable descendants.
    fn content(&self) -> Option<&dyn ScrollNode> {
        None
    }
}

/// State transition notifications.
///
/// The `on_open`/`on_show_preview`/`on_close` callbacks fire when a
/// transition starts, the past-tense ones once the layer has settled.
pub trait InteractListener {
    fn on_open(&mut self) {}
    fn on_show_preview(&mut self) {}
    fn on_close(&mut self) {}
    fn on_opened(&mut self) {}
    fn on_preview_shown(&mut self) {}
    fn on_closed(&mut self) {}
}

/// Receives the visible extent of the layer after every offset update.
pub trait ScrollListener {
    fn on_scroll(&mut self, absolute_scroll: i32);
}

impl<F: FnMut(i32)> ScrollListener for F {
    fn on_scroll(&mut self, absolute_scroll: i32) {
        self(absolute_scroll);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn closures_are_scroll_listeners() {
        let mut seen = Vec::new();
        {
            let mut listener = |v: i32| seen.push(v);
            listener.on_scroll(12);
            listener.on_scroll(40);
        }
        assert_eq!(seen, vec![12, 40]);
    }

    #[test]
    fn interact_listener_defaults_are_noops() {
        struct Quiet;
        impl InteractListener for Quiet {}
        let mut quiet = Quiet;
        quiet.on_open();
        quiet.on_closed();
    }
}

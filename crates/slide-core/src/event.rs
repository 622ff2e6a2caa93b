#![forbid(unsafe_code)]

//! Canonical pointer event types.
//!
//! The host delivers one [`PointerEvent`] per platform touch callback. Each
//! event carries every pointer that is currently down, so a classifier never
//! needs to remember pointers it was not told about.
//!
//! # Design Notes
//!
//! - `x`/`y` are view-local (relative to the panel's container origin).
//! - `raw_x`/`raw_y` are screen-space and are used for hit testing
//!   descendants, which report screen-space bounds.
//! - `action_index` names the pointer that changed for `PointerDown` and
//!   `PointerUp`; it is 0 for every other kind.
//! - [`EdgeFlags`] use bitflags for easy combination.

use bitflags::bitflags;

/// Stable identifier of one contact for the lifetime of a gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PointerId(pub u32);

/// What happened in this event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointerEventKind {
    /// First pointer touched down; a new gesture begins.
    Down,
    /// One or more pointers moved.
    Move,
    /// Last pointer lifted; the gesture ends.
    Up,
    /// The host aborted the gesture (e.g. a parent stole it).
    Cancel,
    /// An additional pointer touched down during a gesture.
    PointerDown,
    /// A non-last pointer lifted during a gesture.
    PointerUp,
}

bitflags! {
    /// Screen edges the initial contact touched, as reported by the host.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct EdgeFlags: u8 {
        /// No edge.
        const NONE   = 0b0000;
        /// Contact began on the top edge.
        const TOP    = 0b0001;
        /// Contact began on the bottom edge.
        const BOTTOM = 0b0010;
        /// Contact began on the left edge.
        const LEFT   = 0b0100;
        /// Contact began on the right edge.
        const RIGHT  = 0b1000;
    }
}

impl Default for EdgeFlags {
    fn default() -> Self {
        Self::NONE
    }
}

/// Position of a single pointer within an event.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerSample {
    pub id: PointerId,
    /// View-local x.
    pub x: f32,
    /// View-local y.
    pub y: f32,
    /// Screen-space x.
    pub raw_x: f32,
    /// Screen-space y.
    pub raw_y: f32,
}

impl PointerSample {
    /// Create a sample whose screen position equals its view position.
    #[must_use]
    pub const fn new(id: u32, x: f32, y: f32) -> Self {
        Self {
            id: PointerId(id),
            x,
            y,
            raw_x: x,
            raw_y: y,
        }
    }

    /// Set the screen-space position (builder pattern).
    #[must_use]
    pub const fn with_raw(mut self, raw_x: f32, raw_y: f32) -> Self {
        self.raw_x = raw_x;
        self.raw_y = raw_y;
        self
    }
}

/// A pointer event as delivered by the host.
#[derive(Debug, Clone, PartialEq)]
pub struct PointerEvent {
    pub kind: PointerEventKind,
    /// All pointers currently down (including one lifting in this event).
    pub pointers: Vec<PointerSample>,
    /// Index into `pointers` of the pointer that changed.
    pub action_index: usize,
    pub edge_flags: EdgeFlags,
}

impl PointerEvent {
    /// Create an event with a single pointer.
    #[must_use]
    pub fn single(kind: PointerEventKind, sample: PointerSample) -> Self {
        Self {
            kind,
            pointers: vec![sample],
            action_index: 0,
            edge_flags: EdgeFlags::NONE,
        }
    }

    /// Create an event carrying several pointers.
    #[must_use]
    pub fn multi(kind: PointerEventKind, pointers: Vec<PointerSample>, action_index: usize) -> Self {
        Self {
            kind,
            pointers,
            action_index,
            edge_flags: EdgeFlags::NONE,
        }
    }

    /// Set edge flags (builder pattern).
    #[must_use]
    pub fn with_edge_flags(mut self, flags: EdgeFlags) -> Self {
        self.edge_flags = flags;
        self
    }

    /// Index of the pointer with the given id, if present.
    #[must_use]
    pub fn find_pointer(&self, id: PointerId) -> Option<usize> {
        self.pointers.iter().position(|p| p.id == id)
    }

    /// Sample of the pointer with the given id, if present.
    #[must_use]
    pub fn pointer(&self, id: PointerId) -> Option<&PointerSample> {
        self.pointers.iter().find(|p| p.id == id)
    }

    /// The pointer that changed in this event.
    #[must_use]
    pub fn action_pointer(&self) -> Option<&PointerSample> {
        self.pointers.get(self.action_index)
    }

    /// The first pointer, used as the primary contact.
    #[must_use]
    pub fn primary(&self) -> Option<&PointerSample> {
        self.pointers.first()
    }
}

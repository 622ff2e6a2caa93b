#![forbid(unsafe_code)]

//! Edge geometry for a panel attached to one side of its container.
//!
//! Scroll offsets follow the container-scroll convention: offset 0 means the
//! panel is fully opened, and moving toward the attachment edge grows the
//! offset's magnitude up to the container extent on the constrained axis.
//!
//! # Invariants
//!
//! 1. Only the component of a [`ScrollOffset`] along the side's [`Axis`] is
//!    ever non-zero.
//! 2. [`ScrollBounds::clamp`] always returns a value in `[low, high]`.
//! 3. [`rest_offset`] is clamped, so a distance larger than the container
//!    never produces an out-of-bounds rest position.
//!
//! # Failure Modes
//!
//! - Zero-sized container: bounds collapse to `[0, 0]`, every offset clamps
//!   to 0. No panics.
//! - Unknown raw side constant: [`Side::try_from`] returns
//!   [`GeometryError::IllegalAttachmentSide`].

use crate::error::GeometryError;

// ---------------------------------------------------------------------------
// Side / Axis
// ---------------------------------------------------------------------------

/// Container edge the panel is attached to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Side {
    Left,
    #[default]
    Right,
    Top,
    Bottom,
}

/// Axis along which the panel is allowed to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    Horizontal,
    Vertical,
}

impl Side {
    /// Platform constant for [`Side::Right`].
    pub const RAW_RIGHT: i32 = -1;
    /// Platform constant for [`Side::Left`].
    pub const RAW_LEFT: i32 = -2;
    /// Platform constant for [`Side::Top`].
    pub const RAW_TOP: i32 = -3;
    /// Platform constant for [`Side::Bottom`].
    pub const RAW_BOTTOM: i32 = -4;

    /// All sides, in declaration order.
    pub const ALL: [Side; 4] = [Side::Left, Side::Right, Side::Top, Side::Bottom];

    /// The constrained axis for this side.
    #[inline]
    #[must_use]
    pub const fn axis(self) -> Axis {
        match self {
            Side::Left | Side::Right => Axis::Horizontal,
            Side::Top | Side::Bottom => Axis::Vertical,
        }
    }

    /// Sign that turns a raw pointer velocity into "toward opened".
    ///
    /// Left and top panels open as the finger moves in the positive
    /// direction; right and bottom panels open the other way.
    #[inline]
    #[must_use]
    pub const fn opening_sign(self) -> i32 {
        match self {
            Side::Left | Side::Top => 1,
            Side::Right | Side::Bottom => -1,
        }
    }

    /// Container extent along the constrained axis.
    #[inline]
    #[must_use]
    pub const fn extent(self, width: i32, height: i32) -> i32 {
        match self.axis() {
            Axis::Horizontal => width,
            Axis::Vertical => height,
        }
    }

    /// The platform constant for this side.
    #[must_use]
    pub const fn raw(self) -> i32 {
        match self {
            Side::Right => Self::RAW_RIGHT,
            Side::Left => Self::RAW_LEFT,
            Side::Top => Self::RAW_TOP,
            Side::Bottom => Self::RAW_BOTTOM,
        }
    }
}

impl TryFrom<i32> for Side {
    type Error = GeometryError;

    fn try_from(raw: i32) -> Result<Self, Self::Error> {
        match raw {
            Self::RAW_RIGHT => Ok(Side::Right),
            Self::RAW_LEFT => Ok(Side::Left),
            Self::RAW_TOP => Ok(Side::Top),
            Self::RAW_BOTTOM => Ok(Side::Bottom),
            other => Err(GeometryError::IllegalAttachmentSide(other)),
        }
    }
}

// ---------------------------------------------------------------------------
// Points and rectangles
// ---------------------------------------------------------------------------

/// A 2D point in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    /// Create a new point.
    #[must_use]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Component along the given axis.
    #[inline]
    #[must_use]
    pub const fn along(self, axis: Axis) -> f32 {
        match axis {
            Axis::Horizontal => self.x,
            Axis::Vertical => self.y,
        }
    }
}

/// An axis-aligned rectangle in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RectF {
    /// Left edge (inclusive).
    pub x: f32,
    /// Top edge (inclusive).
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl RectF {
    /// Create a new rectangle.
    #[must_use]
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Right edge (exclusive).
    #[inline]
    #[must_use]
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    /// Bottom edge (exclusive).
    #[inline]
    #[must_use]
    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    /// Check if a point is inside the rectangle.
    #[inline]
    #[must_use]
    pub fn contains(&self, x: f32, y: f32) -> bool {
        x >= self.x && x < self.right() && y >= self.y && y < self.bottom()
    }
}

// ---------------------------------------------------------------------------
// Scroll offset and bounds
// ---------------------------------------------------------------------------

/// Signed displacement of the panel from its opened rest position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ScrollOffset {
    pub x: i32,
    pub y: i32,
}

impl ScrollOffset {
    /// The opened rest position.
    pub const ZERO: Self = Self { x: 0, y: 0 };

    /// Create an offset from raw components.
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Create an offset with `value` on `axis` and 0 on the other.
    #[inline]
    #[must_use]
    pub const fn on_axis(axis: Axis, value: i32) -> Self {
        match axis {
            Axis::Horizontal => Self { x: value, y: 0 },
            Axis::Vertical => Self { x: 0, y: value },
        }
    }

    /// Component along the given axis.
    #[inline]
    #[must_use]
    pub const fn along(self, axis: Axis) -> i32 {
        match axis {
            Axis::Horizontal => self.x,
            Axis::Vertical => self.y,
        }
    }
}

/// Legal scroll range along the constrained axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScrollBounds {
    pub axis: Axis,
    pub low: i32,
    pub high: i32,
}

impl ScrollBounds {
    /// Clamp a candidate position into `[low, high]`.
    #[inline]
    #[must_use]
    pub fn clamp(&self, value: i32) -> i32 {
        value.max(self.low).min(self.high)
    }

    /// Clamp a fractional candidate position into `[low, high]`.
    #[inline]
    #[must_use]
    pub fn clamp_f32(&self, value: f32) -> f32 {
        value.max(self.low as f32).min(self.high as f32)
    }

    /// Clamp the axis component of an offset and zero the other component.
    #[must_use]
    pub fn clamp_offset(&self, offset: ScrollOffset) -> ScrollOffset {
        ScrollOffset::on_axis(self.axis, self.clamp(offset.along(self.axis)))
    }

    /// Whether the value lies within the range.
    #[inline]
    #[must_use]
    pub fn contains(&self, value: i32) -> bool {
        value >= self.low && value <= self.high
    }
}

/// Resolve the axis and legal scroll range for a side and container size.
///
/// Negative sizes are treated as zero.
#[must_use]
pub fn bounds(side: Side, width: i32, height: i32) -> ScrollBounds {
    let width = width.max(0);
    let height = height.max(0);
    let (low, high) = match side {
        Side::Left => (0, width),
        Side::Right => (-width, 0),
        Side::Top => (0, height),
        Side::Bottom => (-height, 0),
    };
    ScrollBounds {
        axis: side.axis(),
        low,
        high,
    }
}

/// Offset at which exactly `visible` pixels of the panel stick out.
///
/// `visible == extent` yields the opened position (0).
#[must_use]
pub fn rest_offset(side: Side, width: i32, height: i32, visible: i32) -> ScrollOffset {
    let raw = match side {
        Side::Right => -width + visible,
        Side::Left => width - visible,
        Side::Top => height - visible,
        Side::Bottom => -height + visible,
    };
    bounds(side, width, height).clamp_offset(ScrollOffset::on_axis(side.axis(), raw))
}

/// Number of panel pixels currently visible at `offset`.
///
/// Reported to scroll listeners as the absolute scroll.
#[must_use]
pub fn visible_extent(side: Side, width: i32, height: i32, offset: ScrollOffset) -> i32 {
    (side.extent(width, height) - offset.along(side.axis()).abs()).abs()
}

/// Whether a touch lands on the part of the container occupied by the panel.
///
/// With `with_scroll` the current offset is taken into account, so only the
/// visible strip counts. Without it the whole container counts, which is
/// used to ignore moves that wander outside the container while dragging.
#[must_use]
pub fn touch_within_panel(
    side: Side,
    width: i32,
    height: i32,
    offset: ScrollOffset,
    touch: Point,
    with_scroll: bool,
) -> bool {
    let axis = side.axis();
    let scroll = if with_scroll {
        offset.along(axis) as f32
    } else {
        0.0
    };
    let touch = touch.along(axis);
    match side {
        Side::Right | Side::Bottom => touch >= -scroll,
        Side::Left => touch <= width as f32 - scroll,
        Side::Top => touch <= height as f32 - scroll,
    }
}

// Copyright 2026 the Viewshed Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=viewshed_frame --heading-base-level=0

//! Viewshed Frame: integer-rounded axis-aligned frame geometry.
//!
//! This crate provides [`Frame`], a small rectangle value type used throughout
//! Viewshed to describe element bounds, viewports, and their overlaps. A frame
//! lives on an integer grid: every constructor taking floating-point
//! coordinates rounds them before storing, so downstream area and ratio
//! arithmetic is exact.
//!
//! The operations are deliberately few:
//!
//! - [`Frame::intersection`]: the overlapping region of two frames, or `None`
//!   when they are disjoint on at least one axis. Frames that merely touch
//!   along an edge still intersect, with a zero-extent result.
//! - [`Frame::relative_to`]: re-expresses a frame's origin relative to another
//!   frame, leaving its extents unchanged. This is how an overlap computed in
//!   document coordinates is projected into viewport- or element-local space.
//! - [`Frame::area`]: width times height.
//!
//! Conversions to and from [`kurbo::Rect`] are provided so hosts can hand over
//! bounding boxes in the coordinate types they already use.
//!
//! ## Minimal example
//!
//! ```rust
//! use viewshed_frame::Frame;
//!
//! let viewport = Frame::new(0.0, 0.0, 1000.0, 800.0);
//! let element = Frame::new(900.0, 700.0, 300.0, 300.0);
//!
//! let overlap = element.intersection(viewport).unwrap();
//! assert_eq!(overlap, Frame::from_i64(900, 700, 100, 100));
//!
//! // Project the overlap into the element's own coordinate space.
//! let local = overlap.relative_to(element);
//! assert_eq!(local, Frame::from_i64(0, 0, 100, 100));
//! ```
//!
//! ## Design notes
//!
//! - Width and height are stored as given (after rounding) and may be negative
//!   only transiently inside intersection computation; a negative-extent
//!   result is reported as "no intersection" rather than returned.
//! - `right`/`bottom` are derived, keeping `right == left + width` and
//!   `bottom == top + height` true by construction.
//!
//! This crate is `no_std`.

#![no_std]

use kurbo::Rect;

/// Rounds to the nearest integer, halves toward positive infinity.
///
/// Implemented as `floor(x + 0.5)` over a plain truncating cast so it works
/// without `std` or `libm`.
fn round(x: f64) -> i64 {
    let shifted = x + 0.5;
    #[expect(
        clippy::cast_possible_truncation,
        reason = "Coordinates are well within i64 range; truncation is the floor building block"
    )]
    let truncated = shifted as i64;
    // Truncation rounds toward zero; step down when that overshot the floor.
    if truncated as f64 > shifted {
        truncated - 1
    } else {
        truncated
    }
}

/// An axis-aligned rectangle on an integer grid.
///
/// A `Frame` is described by its `left`/`top` origin and `width`/`height`
/// extents. The derived edges satisfy [`Frame::right`]` == left + width` and
/// [`Frame::bottom`]` == top + height`.
///
/// Constructors taking `f64` coordinates round each input to the nearest
/// integer (halves toward positive infinity) before storing it.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Frame {
    /// Minimum x coordinate.
    pub left: i64,
    /// Minimum y coordinate.
    pub top: i64,
    /// Horizontal extent.
    pub width: i64,
    /// Vertical extent.
    pub height: i64,
}

impl Frame {
    /// The zero frame: origin at the origin, zero extents.
    pub const ZERO: Self = Self::from_i64(0, 0, 0, 0);

    /// Creates a frame from floating-point coordinates, rounding each input
    /// to the nearest integer.
    #[must_use]
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left: round(left),
            top: round(top),
            width: round(width),
            height: round(height),
        }
    }

    /// Creates a frame directly from integer coordinates.
    #[must_use]
    pub const fn from_i64(left: i64, top: i64, width: i64, height: i64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    /// Creates a frame from a [`kurbo::Rect`], rounding origin and extents.
    ///
    /// The origin and the extents are rounded independently, so the derived
    /// `right`/`bottom` edges may differ by one from the rect's rounded
    /// `x1`/`y1` when both origin and extent carry a fractional half.
    #[must_use]
    pub fn from_rect(rect: Rect) -> Self {
        Self::new(rect.x0, rect.y0, rect.width(), rect.height())
    }

    /// Converts this frame into a [`kurbo::Rect`].
    #[must_use]
    pub fn to_rect(self) -> Rect {
        Rect::new(
            self.left as f64,
            self.top as f64,
            self.right() as f64,
            self.bottom() as f64,
        )
    }

    /// Maximum x coordinate (`left + width`).
    #[must_use]
    pub const fn right(self) -> i64 {
        self.left + self.width
    }

    /// Maximum y coordinate (`top + height`).
    #[must_use]
    pub const fn bottom(self) -> i64 {
        self.top + self.height
    }

    /// Width times height.
    #[must_use]
    pub const fn area(self) -> i64 {
        self.width * self.height
    }

    /// Returns `true` if either extent is zero.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Returns the overlapping region of `self` and `other`, or `None` when
    /// the frames are disjoint on at least one axis.
    ///
    /// Frames that only touch along an edge or at a corner still intersect;
    /// the result then has a zero extent on the touching axis. Callers that
    /// care about "really overlapping" can additionally check
    /// [`Frame::is_empty`] on the result.
    #[must_use]
    pub const fn intersection(self, other: Self) -> Option<Self> {
        let left = if self.left > other.left {
            self.left
        } else {
            other.left
        };
        let top = if self.top > other.top {
            self.top
        } else {
            other.top
        };
        let right = if self.right() < other.right() {
            self.right()
        } else {
            other.right()
        };
        let bottom = if self.bottom() < other.bottom() {
            self.bottom()
        } else {
            other.bottom()
        };

        let width = right - left;
        let height = bottom - top;
        if width >= 0 && height >= 0 {
            Some(Self::from_i64(left, top, width, height))
        } else {
            None
        }
    }

    /// Re-expresses this frame relative to `origin`'s top-left corner.
    ///
    /// Extents are unchanged; only the origin moves. Passing the frame a
    /// region was computed in yields local coordinates:
    ///
    /// ```rust
    /// use viewshed_frame::Frame;
    ///
    /// let element = Frame::from_i64(40, 30, 100, 100);
    /// let overlap = Frame::from_i64(40, 30, 60, 50);
    /// assert_eq!(overlap.relative_to(element), Frame::from_i64(0, 0, 60, 50));
    /// ```
    #[must_use]
    pub const fn relative_to(self, origin: Self) -> Self {
        Self::from_i64(
            self.left - origin.left,
            self.top - origin.top,
            self.width,
            self.height,
        )
    }
}

impl From<Rect> for Frame {
    fn from(rect: Rect) -> Self {
        Self::from_rect(rect)
    }
}

impl From<Frame> for Rect {
    fn from(frame: Frame) -> Self {
        frame.to_rect()
    }
}

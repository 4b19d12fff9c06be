// Copyright 2026 the Viewshed Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Viewport metrics and explicit viewport snapshots.

use kurbo::{Rect, Size, Vec2};
use viewshed_frame::Frame;

/// Source of viewport metrics, supplied by the host environment.
///
/// Implementations typically read the browser window (scroll offsets, inner
/// dimensions, document client edges) or an equivalent scrolling container.
/// All values are in logical pixels.
///
/// The library never polls a source behind the caller's back: a source is
/// read exactly when [`Viewport::sample`] is called, and the resulting
/// snapshot is what computations run against.
pub trait ViewportSource {
    /// Current scroll offset of the viewport origin in document coordinates.
    fn scroll_offset(&self) -> Vec2;

    /// Current inner dimensions of the viewport.
    fn inner_size(&self) -> Size;

    /// Document client-edge offsets (for example border widths on the root
    /// element). Zero for most hosts.
    fn client_edge(&self) -> Vec2 {
        Vec2::ZERO
    }
}

/// A fixed, in-memory [`ViewportSource`].
///
/// Useful for tests and for hosts that already track viewport metrics
/// themselves and only want to hand over a snapshot.
///
/// ```rust
/// use kurbo::{Size, Vec2};
/// use viewshed_visibility::{FixedViewport, Viewport};
///
/// let source = FixedViewport::new(Vec2::new(0.0, 250.0), Size::new(1000.0, 800.0));
/// let viewport = Viewport::sample(&source);
/// assert_eq!(viewport.frame.top, 250);
/// assert_eq!(viewport.frame.height, 800);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FixedViewport {
    scroll: Vec2,
    size: Size,
    client_edge: Vec2,
}

impl FixedViewport {
    /// Creates a source with the given scroll offset and inner size, and zero
    /// client-edge offsets.
    #[must_use]
    pub const fn new(scroll: Vec2, size: Size) -> Self {
        Self {
            scroll,
            size,
            client_edge: Vec2::ZERO,
        }
    }

    /// Sets the client-edge offsets.
    #[must_use]
    pub fn with_client_edge(mut self, client_edge: Vec2) -> Self {
        self.client_edge = client_edge;
        self
    }

    /// Updates the scroll offset.
    pub fn set_scroll(&mut self, scroll: Vec2) {
        self.scroll = scroll;
    }

    /// Updates the inner size.
    pub fn set_size(&mut self, size: Size) {
        self.size = size;
    }
}

impl ViewportSource for FixedViewport {
    fn scroll_offset(&self) -> Vec2 {
        self.scroll
    }

    fn inner_size(&self) -> Size {
        self.size
    }

    fn client_edge(&self) -> Vec2 {
        self.client_edge
    }
}

/// An explicit snapshot of the viewport, in absolute document coordinates.
///
/// A snapshot is taken with [`Viewport::sample`] and then threaded through
/// every computation that needs it. Nothing in this crate caches one: hosts
/// decide when a snapshot is fresh enough, typically re-sampling on each
/// scroll/resize notification and on direct queries.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    /// The visible region, positioned at the scroll offset.
    pub frame: Frame,
    /// Document client-edge offsets carried along for element-frame
    /// translation.
    pub client_edge: Vec2,
}

impl Viewport {
    /// Wraps an already-positioned frame with zero client-edge offsets.
    #[must_use]
    pub const fn new(frame: Frame) -> Self {
        Self {
            frame,
            client_edge: Vec2::ZERO,
        }
    }

    /// Reads `source` and builds a snapshot.
    ///
    /// The frame is `(scroll_x, scroll_y, inner_width, inner_height)`,
    /// rounded onto the integer grid.
    #[must_use]
    pub fn sample<S: ViewportSource + ?Sized>(source: &S) -> Self {
        let scroll = source.scroll_offset();
        let size = source.inner_size();
        Self {
            frame: Frame::new(scroll.x, scroll.y, size.width, size.height),
            client_edge: source.client_edge(),
        }
    }

    /// Translates a viewport-relative bounding box into a [`Frame`] in
    /// absolute document coordinates.
    ///
    /// `bounds` is the box a host reports for an element (origin relative to
    /// the viewport's top-left corner, the way
    /// `Element::getBoundingClientRect` does); the snapshot's scroll offset
    /// is added and the client-edge offsets subtracted.
    #[must_use]
    pub fn element_frame(&self, bounds: Rect) -> Frame {
        Frame::new(
            bounds.x0 + self.frame.left as f64 - self.client_edge.x,
            bounds.y0 + self.frame.top as f64 - self.client_edge.y,
            bounds.width(),
            bounds.height(),
        )
    }
}

#[cfg(test)]
mod tests {
    use kurbo::{Rect, Size, Vec2};
    use viewshed_frame::Frame;

    use super::{FixedViewport, Viewport, ViewportSource};

    #[test]
    fn sample_positions_frame_at_scroll_offset() {
        let source = FixedViewport::new(Vec2::new(120.0, 340.0), Size::new(1024.0, 768.0));
        let viewport = Viewport::sample(&source);
        assert_eq!(viewport.frame, Frame::from_i64(120, 340, 1024, 768));
        assert_eq!(viewport.client_edge, Vec2::ZERO);
    }

    #[test]
    fn element_frame_translates_into_document_coordinates() {
        let source = FixedViewport::new(Vec2::new(0.0, 500.0), Size::new(1000.0, 800.0))
            .with_client_edge(Vec2::new(2.0, 2.0));
        let viewport = Viewport::sample(&source);

        // An element reported 100px below the viewport's top edge sits at
        // document y = 100 + 500 - 2.
        let frame = viewport.element_frame(Rect::new(10.0, 100.0, 210.0, 250.0));
        assert_eq!(frame, Frame::from_i64(8, 598, 200, 150));
    }

    #[test]
    fn default_client_edge_is_zero() {
        struct Plain;
        impl ViewportSource for Plain {
            fn scroll_offset(&self) -> Vec2 {
                Vec2::ZERO
            }
            fn inner_size(&self) -> Size {
                Size::new(100.0, 100.0)
            }
        }
        assert_eq!(Plain.client_edge(), Vec2::ZERO);
    }
}

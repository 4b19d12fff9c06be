// Copyright 2026 the Viewshed Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-element visibility state: ratio triples and projected overlap frames.

use viewshed_frame::Frame;

use crate::viewport::Viewport;

/// A ratio reported for the combined area and for each axis separately.
///
/// `both` relates areas; `horizontal` and `vertical` relate widths and
/// heights. All three are `0.0` when the underlying overlap is undefined
/// (no intersection, or a zero-extent element).
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct AxisRatios {
    /// Area ratio.
    pub both: f64,
    /// Width ratio.
    pub horizontal: f64,
    /// Height ratio.
    pub vertical: f64,
}

impl AxisRatios {
    /// All three ratios zero.
    pub const ZERO: Self = Self {
        both: 0.0,
        horizontal: 0.0,
        vertical: 0.0,
    };
}

/// The element/viewport overlap expressed in three coordinate spaces.
///
/// All three are the same rectangle; only the origin differs. They are zero
/// frames whenever the overlap is undefined.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ProjectedFrames {
    /// Overlap in absolute document coordinates.
    pub document: Frame,
    /// Overlap relative to the viewport's top-left corner.
    pub viewport: Frame,
    /// Overlap relative to the element's own top-left corner.
    pub element: Frame,
}

impl ProjectedFrames {
    /// All three projections zero.
    pub const ZERO: Self = Self {
        document: Frame::ZERO,
        viewport: Frame::ZERO,
        element: Frame::ZERO,
    };
}

/// How much of an element is visible within a viewport, at one instant.
///
/// A state is computed fresh on every query or notification tick and never
/// mutated afterwards. `H` is an application-chosen handle identifying the
/// element; the state holds it for identification only and owns nothing else.
///
/// The three ratio triples answer different questions:
///
/// - [`visibility_rate`](Self::visibility_rate): how much of the *element* is
///   visible (overlap / element).
/// - [`occupied_viewport`](Self::occupied_viewport): how much of the
///   *viewport* the element covers (overlap / viewport).
/// - [`max_visibility`](Self::max_visibility): overlap normalized against the
///   smaller of element and viewport per axis. This is the triple to use for
///   "is at least X% visible" checks, because it still reaches `1.0` when the
///   element is larger than the viewport (a full-bleed banner taller than the
///   screen can be 100% visible).
///
/// ```rust
/// use viewshed_frame::Frame;
/// use viewshed_visibility::{Viewport, VisibilityState};
///
/// let viewport = Viewport::new(Frame::from_i64(0, 0, 1000, 800));
/// let state = VisibilityState::compute((), Frame::from_i64(100, 100, 200, 150), &viewport);
///
/// assert!(state.on_screen);
/// assert_eq!(state.visibility_rate.both, 1.0);
/// assert_eq!(state.occupied_viewport.both, (200.0 * 150.0) / (1000.0 * 800.0));
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct VisibilityState<H> {
    /// The handle this state was computed for.
    pub target: H,
    /// `true` iff the element's frame intersects the viewport frame at all.
    ///
    /// This uses pure frame overlap and is independent of the element's
    /// extents: a zero-size element inside the viewport is on screen even
    /// though every ratio is zero.
    pub on_screen: bool,
    /// Overlap relative to the element's own extents.
    pub visibility_rate: AxisRatios,
    /// Overlap relative to the viewport's extents.
    pub occupied_viewport: AxisRatios,
    /// Overlap relative to `min(element, viewport)` per axis; capped at `1.0`.
    pub max_visibility: AxisRatios,
    /// The overlap rectangle in document, viewport, and element coordinates.
    pub frames: ProjectedFrames,
}

/// Division that treats a zero denominator as a zero ratio.
fn ratio(numerator: i64, denominator: i64) -> f64 {
    if denominator == 0 {
        0.0
    } else {
        numerator as f64 / denominator as f64
    }
}

impl<H> VisibilityState<H> {
    /// Computes the state of `element` (in absolute document coordinates)
    /// against a viewport snapshot.
    ///
    /// When the element does not intersect the viewport, or has a zero
    /// extent on either axis, all ratios and projections are zero while
    /// [`on_screen`](Self::on_screen) still reflects pure frame overlap.
    #[must_use]
    pub fn compute(target: H, element: Frame, viewport: &Viewport) -> Self {
        let window = viewport.frame;
        let overlap = element.intersection(window);

        let mut state = Self {
            target,
            on_screen: overlap.is_some(),
            visibility_rate: AxisRatios::ZERO,
            occupied_viewport: AxisRatios::ZERO,
            max_visibility: AxisRatios::ZERO,
            frames: ProjectedFrames::ZERO,
        };

        let Some(overlap) = overlap else {
            return state;
        };
        if element.is_empty() {
            return state;
        }

        let min_width = element.width.min(window.width);
        let min_height = element.height.min(window.height);

        state.frames = ProjectedFrames {
            document: overlap,
            viewport: overlap.relative_to(window),
            element: overlap.relative_to(element),
        };
        state.visibility_rate = AxisRatios {
            both: ratio(overlap.area(), element.area()),
            horizontal: ratio(overlap.width, element.width),
            vertical: ratio(overlap.height, element.height),
        };
        state.occupied_viewport = AxisRatios {
            both: ratio(overlap.area(), window.area()),
            horizontal: ratio(overlap.width, window.width),
            vertical: ratio(overlap.height, window.height),
        };
        state.max_visibility = AxisRatios {
            both: ratio(overlap.area(), min_width * min_height),
            horizontal: ratio(overlap.width, min_width),
            vertical: ratio(overlap.height, min_height),
        };

        state
    }
}

#[cfg(test)]
mod tests {
    use viewshed_frame::Frame;

    use super::{AxisRatios, ProjectedFrames, VisibilityState};
    use crate::viewport::Viewport;

    fn viewport_1000x800() -> Viewport {
        Viewport::new(Frame::from_i64(0, 0, 1000, 800))
    }

    #[test]
    fn fully_contained_element_is_fully_visible() {
        let state = VisibilityState::compute(
            "banner",
            Frame::from_i64(100, 100, 200, 150),
            &viewport_1000x800(),
        );

        assert!(state.on_screen);
        assert_eq!(
            state.visibility_rate,
            AxisRatios {
                both: 1.0,
                horizontal: 1.0,
                vertical: 1.0
            }
        );
        assert_eq!(state.occupied_viewport.both, 0.0375);
        assert_eq!(state.occupied_viewport.horizontal, 0.2);
        assert_eq!(state.occupied_viewport.vertical, 0.1875);
        assert_eq!(state.max_visibility.both, 1.0);
    }

    #[test]
    fn corner_overlap_reports_partial_ratios_and_projections() {
        let element = Frame::from_i64(900, 700, 300, 300);
        let state = VisibilityState::compute((), element, &viewport_1000x800());

        assert!(state.on_screen);
        let expected = (100.0 * 100.0) / (300.0 * 300.0);
        assert!((state.visibility_rate.both - expected).abs() < 1e-12);
        assert_eq!(state.visibility_rate.horizontal, 1.0 / 3.0);
        assert_eq!(
            state.frames,
            ProjectedFrames {
                document: Frame::from_i64(900, 700, 100, 100),
                viewport: Frame::from_i64(900, 700, 100, 100),
                element: Frame::from_i64(0, 0, 100, 100),
            }
        );
    }

    #[test]
    fn element_outside_viewport_is_all_zero_and_off_screen() {
        let state =
            VisibilityState::compute((), Frame::from_i64(2000, 2000, 50, 50), &viewport_1000x800());

        assert!(!state.on_screen);
        assert_eq!(state.visibility_rate, AxisRatios::ZERO);
        assert_eq!(state.occupied_viewport, AxisRatios::ZERO);
        assert_eq!(state.max_visibility, AxisRatios::ZERO);
        assert_eq!(state.frames, ProjectedFrames::ZERO);
    }

    #[test]
    fn zero_size_element_is_on_screen_with_zero_ratios() {
        let state =
            VisibilityState::compute((), Frame::from_i64(500, 400, 0, 120), &viewport_1000x800());

        // Frame overlap is present, so the element counts as on screen even
        // though no ratio is defined for it.
        assert!(state.on_screen);
        assert_eq!(state.visibility_rate, AxisRatios::ZERO);
        assert_eq!(state.frames, ProjectedFrames::ZERO);
    }

    #[test]
    fn oversized_element_caps_max_visibility_at_one() {
        // Element twice as tall as the viewport, fully covering it.
        let element = Frame::from_i64(0, -400, 1000, 1600);
        let state = VisibilityState::compute((), element, &viewport_1000x800());

        assert_eq!(state.max_visibility.both, 1.0);
        assert_eq!(state.max_visibility.vertical, 1.0);
        assert_eq!(state.visibility_rate.both, 0.5);
        assert_eq!(state.occupied_viewport.both, 1.0);
    }

    #[test]
    fn max_visibility_stays_within_unit_interval() {
        let viewport = viewport_1000x800();
        let frames = [
            Frame::from_i64(-500, -500, 2000, 2000),
            Frame::from_i64(990, 790, 20, 20),
            Frame::from_i64(0, 0, 1, 1),
            Frame::from_i64(-100, 0, 150, 900),
        ];
        for element in frames {
            let state = VisibilityState::compute((), element, &viewport);
            assert!(
                (0.0..=1.0).contains(&state.max_visibility.both),
                "max visibility out of range for {element:?}"
            );
        }
    }

    #[test]
    fn edge_touching_element_is_on_screen_with_zero_ratios() {
        // Element sitting exactly at the right viewport edge.
        let state =
            VisibilityState::compute((), Frame::from_i64(1000, 0, 100, 100), &viewport_1000x800());

        assert!(state.on_screen);
        assert_eq!(state.visibility_rate, AxisRatios::ZERO);
        assert_eq!(state.max_visibility, AxisRatios::ZERO);
    }
}

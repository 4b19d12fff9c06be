// Copyright 2026 the Viewshed Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Aggregate visibility queries over sets of elements.

use alloc::vec::Vec;

use kurbo::Rect;

use crate::state::VisibilityState;
use crate::viewport::{Viewport, ViewportSource};

/// Source of element bounding boxes, supplied by the host environment.
///
/// `Handle` is whatever the host uses to identify elements (a node id, an
/// index, an interned key). Boxes are reported relative to the viewport's
/// top-left corner; [`Viewport::element_frame`] translates them into document
/// coordinates.
///
/// Returning `None` marks a handle as unresolvable; queries skip such
/// handles rather than failing.
pub trait BoundsSource {
    /// Host-chosen element identifier.
    type Handle: Copy;

    /// The viewport-relative bounding box of `handle`, or `None` when the
    /// handle no longer resolves to an element.
    fn bounding_box(&self, handle: Self::Handle) -> Option<Rect>;
}

/// Optional selector-resolution capability on top of [`BoundsSource`].
///
/// Hosts with a query language (CSS selectors, paths, ...) implement this to
/// let [`Target::Selector`] inputs be used. A selector that matches nothing
/// resolves to an empty sequence, never an error.
pub trait Resolver: BoundsSource {
    /// Resolves `selector` to an ordered sequence of handles.
    fn resolve(&self, selector: &str) -> Vec<Self::Handle>;
}

/// Tagged element input for queries.
///
/// Callers say explicitly whether they are passing a selector, a single
/// handle, or a sequence; there is no runtime shape-sniffing.
#[derive(Clone, Copy, Debug)]
pub enum Target<'a, H> {
    /// A selector string, resolved through [`Resolver::resolve`].
    Selector(&'a str),
    /// A single element handle.
    Handle(H),
    /// An explicit sequence of handles.
    Many(&'a [H]),
}

impl<'a, H: Copy> Target<'a, H> {
    /// Resolves this target into a handle sequence using `source`.
    #[must_use]
    pub fn resolve_with<R>(self, source: &R) -> Vec<H>
    where
        R: Resolver<Handle = H>,
    {
        match self {
            Self::Selector(selector) => source.resolve(selector),
            Self::Handle(handle) => alloc::vec![handle],
            Self::Many(handles) => handles.to_vec(),
        }
    }
}

impl<'a, H> From<&'a [H]> for Target<'a, H> {
    fn from(handles: &'a [H]) -> Self {
        Self::Many(handles)
    }
}

impl<'a, H> From<&'a str> for Target<'a, H> {
    fn from(selector: &'a str) -> Self {
        Self::Selector(selector)
    }
}

/// How per-element results are combined into one boolean.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Combine {
    /// Every element must pass. Vacuously `true` for an empty set.
    #[default]
    All,
    /// At least one element must pass. `false` for an empty set.
    Any,
}

impl Combine {
    /// Folds per-element outcomes into a single boolean.
    #[must_use]
    pub fn fold<I: IntoIterator<Item = bool>>(self, outcomes: I) -> bool {
        let mut outcomes = outcomes.into_iter();
        match self {
            Self::All => outcomes.all(|passed| passed),
            Self::Any => outcomes.any(|passed| passed),
        }
    }
}

/// Computes a fresh [`VisibilityState`] for each resolvable handle.
///
/// Unresolvable handles are skipped, so the output can be shorter than the
/// input. States are returned in input order.
#[must_use]
pub fn compute_states<B: BoundsSource>(
    bounds: &B,
    viewport: &Viewport,
    targets: &[B::Handle],
) -> Vec<VisibilityState<B::Handle>> {
    targets
        .iter()
        .filter_map(|&handle| {
            let frame = viewport.element_frame(bounds.bounding_box(handle)?);
            Some(VisibilityState::compute(handle, frame, viewport))
        })
        .collect()
}

/// Tests whether a single maximum-visibility rate passes `threshold`.
///
/// A rate passes when it is positive and at least `threshold`, or when it is
/// exactly `1.0` (so full visibility passes any threshold, including ones
/// above `1.0`).
#[must_use]
pub fn passes_threshold(rate: f64, threshold: f64) -> bool {
    (rate > 0.0 && rate >= threshold) || rate == 1.0
}

/// Returns whether the targets are visible at least `threshold` per
/// [`max_visibility`](VisibilityState::max_visibility) area, combined with
/// `combine`.
///
/// A `threshold` of `0.0` asks for any positive visibility; `1.0` asks for
/// exact full visibility.
#[must_use]
pub fn is_visible<B: BoundsSource>(
    bounds: &B,
    viewport: &Viewport,
    targets: &[B::Handle],
    threshold: f64,
    combine: Combine,
) -> bool {
    combine.fold(
        compute_states(bounds, viewport, targets)
            .iter()
            .map(|state| passes_threshold(state.max_visibility.both, threshold)),
    )
}

/// Returns whether the targets intersect the viewport at all, combined with
/// `combine`.
///
/// The viewport is re-sampled from `source` first, so the answer reflects
/// the host's current scroll position.
#[must_use]
pub fn is_on_screen<B, S>(
    bounds: &B,
    source: &S,
    targets: &[B::Handle],
    combine: Combine,
) -> bool
where
    B: BoundsSource,
    S: ViewportSource + ?Sized,
{
    let viewport = Viewport::sample(source);
    combine.fold(
        compute_states(bounds, &viewport, targets)
            .iter()
            .map(|state| state.on_screen),
    )
}

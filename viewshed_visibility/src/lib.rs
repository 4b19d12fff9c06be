// Copyright 2026 the Viewshed Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=viewshed_visibility --heading-base-level=0

//! Viewshed Visibility: element visibility within a viewport.
//!
//! This crate computes, for one or more elements, how much of each element is
//! currently visible within a viewport, expressed as several overlapping
//! ratios, plus aggregate boolean queries and an observer registry for
//! change notification. It is headless: hosts supply element bounding boxes
//! and viewport metrics through small traits, and wire their own scroll and
//! resize events into [`Observers::notify`].
//!
//! The core concepts are:
//!
//! - [`ViewportSource`] / [`BoundsSource`]: host-supplied providers for
//!   viewport metrics and viewport-relative element bounding boxes.
//! - [`Viewport`]: an explicit snapshot of the viewport, taken with
//!   [`Viewport::sample`] and threaded through every computation. There is
//!   no hidden global viewport state.
//! - [`VisibilityState`]: the per-element result; an on-screen flag, three
//!   ratio triples ([`AxisRatios`]), and the overlap rectangle projected into
//!   three coordinate spaces ([`ProjectedFrames`]).
//! - [`is_visible`] / [`is_on_screen`]: aggregate queries folding per-element
//!   outcomes with a [`Combine`] mode.
//! - [`Observers`]: explicit subscription handles; on each notification the
//!   registry recomputes states and invokes callbacks.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::Rect;
//! use viewshed_frame::Frame;
//! use viewshed_visibility::{BoundsSource, Combine, Viewport, is_visible};
//!
//! // A host with a single element, identified by `u32` handles.
//! struct Host;
//! impl BoundsSource for Host {
//!     type Handle = u32;
//!     fn bounding_box(&self, _: u32) -> Option<Rect> {
//!         // Viewport-relative box, e.g. from getBoundingClientRect.
//!         Some(Rect::new(100.0, 100.0, 300.0, 250.0))
//!     }
//! }
//!
//! let viewport = Viewport::new(Frame::from_i64(0, 0, 1000, 800));
//! assert!(is_visible(&Host, &viewport, &[0], 0.5, Combine::All));
//! ```
//!
//! ## Which ratio to use
//!
//! [`VisibilityState::visibility_rate`] answers "how much of the element is
//! visible" and [`VisibilityState::occupied_viewport`] answers "how much of
//! the viewport does it cover". Threshold checks should almost always use
//! [`VisibilityState::max_visibility`], which normalizes against the smaller
//! of element and viewport per axis: an element larger than the viewport can
//! still report 100% visibility, which is what "fully visible" means for a
//! full-bleed banner.
//!
//! ## Design notes
//!
//! - Computations are pure functions over an explicit [`Viewport`] snapshot;
//!   hosts decide when to re-sample.
//! - Unresolvable handles and unmatched selectors produce empty results, not
//!   errors. The only precondition the original domain validates (a callable
//!   callback) is enforced here by the type system.
//! - Everything is single-threaded and synchronous, cooperating with the
//!   host's event loop; a notification tick runs to completion.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod observers;
mod query;
mod state;
mod viewport;

pub use observers::{Observers, SubscriptionId};
pub use query::{
    BoundsSource, Combine, Resolver, Target, compute_states, is_on_screen, is_visible,
    passes_threshold,
};
pub use state::{AxisRatios, ProjectedFrames, VisibilityState};
pub use viewport::{FixedViewport, Viewport, ViewportSource};

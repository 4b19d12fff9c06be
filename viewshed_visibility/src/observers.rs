// Copyright 2026 the Viewshed Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Observer registry: subscriptions recomputed on viewport changes.

use alloc::boxed::Box;
use alloc::vec::Vec;
use core::fmt;

use hashbrown::HashMap;

use crate::query::{BoundsSource, compute_states};
use crate::state::VisibilityState;
use crate::viewport::{Viewport, ViewportSource};

/// Identifier for a subscription in an [`Observers`] registry.
///
/// This is a small, copyable handle that stays stable across updates but
/// becomes invalid when the underlying slot is reused. It consists of a slot
/// index and a generation counter.
///
/// ## Semantics
///
/// - On [`bind`](Observers::bind), a fresh slot is allocated with generation `1`.
/// - On [`unbind`](Observers::unbind), the slot is freed; any existing
///   `SubscriptionId` that pointed to that slot is now stale.
/// - On reuse of a freed slot, its generation is incremented, producing a
///   new, distinct `SubscriptionId`.
///
/// Stale ids never alias a different live subscription because the generation
/// must match; use [`Observers::is_bound`] to check liveness.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct SubscriptionId(u32, u32);

impl SubscriptionId {
    const fn new(slot: u32, generation: u32) -> Self {
        Self(slot, generation)
    }
}

/// Boxed notification callback for one subscription.
type Callback<'cb, H> = Box<dyn FnMut(&[VisibilityState<H>]) + 'cb>;

struct Subscription<'cb, H> {
    generation: u32,
    targets: Vec<H>,
    callback: Callback<'cb, H>,
}

/// Registry of visibility-change subscriptions.
///
/// Hosts wire their own "viewport changed" events (scroll, resize) to
/// [`Observers::notify`]; the registry then samples the viewport once,
/// recomputes each subscription's states, and invokes its callback. The
/// registry itself never registers host listeners. This replaces hidden
/// reference-counted global listeners with explicit handles: each
/// [`bind`](Observers::bind) returns a [`SubscriptionId`] the caller later
/// passes to [`unbind`](Observers::unbind).
///
/// All of this is single-threaded and synchronous; a `notify` call runs to
/// completion within the host's event handler.
///
/// ```rust
/// use std::cell::Cell;
///
/// use kurbo::{Rect, Size, Vec2};
/// use viewshed_visibility::{BoundsSource, FixedViewport, Observers};
///
/// struct OneBox;
/// impl BoundsSource for OneBox {
///     type Handle = u32;
///     fn bounding_box(&self, _: u32) -> Option<Rect> {
///         Some(Rect::new(10.0, 10.0, 110.0, 60.0))
///     }
/// }
///
/// let seen = Cell::new(0.0);
/// let mut observers = Observers::new();
/// let id = observers.bind(vec![7], |states| seen.set(states[0].visibility_rate.both));
///
/// let source = FixedViewport::new(Vec2::ZERO, Size::new(800.0, 600.0));
/// observers.notify(&OneBox, &source);
/// assert_eq!(seen.get(), 1.0);
///
/// assert!(observers.unbind(id));
/// assert!(!observers.unbind(id));
/// ```
pub struct Observers<'cb, H> {
    slots: HashMap<u32, Subscription<'cb, H>>,
    // Freed slots ready for reuse, with the generation their next tenant gets.
    free: Vec<(u32, u32)>,
    next_slot: u32,
}

impl<H> fmt::Debug for Observers<'_, H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Observers")
            .field("subscriptions", &self.slots.len())
            .field("free_slots", &self.free.len())
            .finish()
    }
}

impl<H> Default for Observers<'_, H> {
    fn default() -> Self {
        Self::new()
    }
}

impl<H> Observers<'_, H> {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self {
            slots: HashMap::new(),
            free: Vec::new(),
            next_slot: 0,
        }
    }

    /// Number of live subscriptions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Returns `true` when no subscription is live.
    ///
    /// Hosts commonly use this to attach their scroll/resize listeners on the
    /// first bind and detach them after the last unbind.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Returns `true` if `id` refers to a live subscription.
    #[must_use]
    pub fn is_bound(&self, id: SubscriptionId) -> bool {
        self.slots
            .get(&id.0)
            .is_some_and(|sub| sub.generation == id.1)
    }

    /// Removes a subscription.
    ///
    /// Returns `false` when `id` is stale or unknown; that is not an error,
    /// matching the absent-result convention used throughout the crate.
    pub fn unbind(&mut self, id: SubscriptionId) -> bool {
        if !self.is_bound(id) {
            return false;
        }
        self.slots.remove(&id.0);
        self.free.push((id.0, id.1 + 1));
        true
    }
}

impl<'cb, H: Copy> Observers<'cb, H> {
    /// Registers `callback` to be invoked with fresh states for `targets` on
    /// every [`notify`](Self::notify).
    ///
    /// The callback borrow lives as long as the registry's `'cb` parameter;
    /// use `'static` callbacks for registries kept in long-lived state.
    pub fn bind(
        &mut self,
        targets: Vec<H>,
        callback: impl FnMut(&[VisibilityState<H>]) + 'cb,
    ) -> SubscriptionId {
        let (slot, generation) = self.free.pop().unwrap_or_else(|| {
            let slot = self.next_slot;
            self.next_slot += 1;
            (slot, 1)
        });
        self.slots.insert(
            slot,
            Subscription {
                generation,
                targets,
                callback: Box::new(callback),
            },
        );
        SubscriptionId::new(slot, generation)
    }

    /// Samples the viewport from `source` once, then recomputes every
    /// subscription's states and invokes its callback.
    ///
    /// Hosts call this from their scroll and resize handlers. Unresolvable
    /// targets are skipped, so a callback can receive fewer states than it
    /// has targets (or none).
    pub fn notify<B, S>(&mut self, bounds: &B, source: &S)
    where
        B: BoundsSource<Handle = H>,
        S: ViewportSource + ?Sized,
    {
        let viewport = Viewport::sample(source);
        self.notify_with(bounds, &viewport);
    }

    /// Like [`notify`](Self::notify), but against an existing snapshot.
    pub fn notify_with<B>(&mut self, bounds: &B, viewport: &Viewport)
    where
        B: BoundsSource<Handle = H>,
    {
        for subscription in self.slots.values_mut() {
            let states = compute_states(bounds, viewport, &subscription.targets);
            (subscription.callback)(&states);
        }
    }
}

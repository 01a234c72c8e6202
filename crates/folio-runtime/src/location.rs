#![forbid(unsafe_code)]

//! The location cell: addressable fragment state with change signals.
//!
//! `Location` plays the part the address bar plays in a browser. It is the
//! one place the current fragment lives, and every navigation goes through
//! the same three-stage pipeline: something writes the fragment
//! ([`Location::set_fragment`]), the write enqueues a change signal, and
//! the runtime later drains the queue and delivers one event per signal per
//! live subscription, strictly in arrival order and strictly after the write
//! that caused it has fully finished.
//!
//! Writing the *same* fragment again still fires a signal. Consumers render
//! idempotently, so there is no short-circuit here.
//!
//! Subscriptions are scoped acquisitions: [`Location::subscribe`] returns a
//! guard whose drop marks the subscription dead on every exit path,
//! including unwinding. A dead subscription receives nothing, so a released
//! listener can never observe a late delivery.

use folio_core::event::SubId;
use folio_core::logging::debug;
use std::cell::Cell;
use std::collections::VecDeque;
use std::rc::Rc;

/// One fragment-change delivery, addressed to a specific subscription.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FragmentChange {
    /// The fragment value after the change.
    pub fragment: String,
    /// Subscription this delivery is addressed to.
    pub subscription: SubId,
}

/// Guard for a fragment-change subscription.
///
/// Dropping the guard releases the subscription.
#[derive(Debug)]
pub struct FragmentSubscription {
    id: SubId,
    alive: Rc<Cell<bool>>,
}

impl FragmentSubscription {
    /// The subscription id deliveries are addressed to.
    #[must_use]
    pub fn id(&self) -> SubId {
        self.id
    }

    /// Release the subscription without waiting for drop.
    pub fn cancel(&self) {
        self.alive.set(false);
    }

    /// Whether the subscription still receives deliveries.
    #[must_use]
    pub fn is_live(&self) -> bool {
        self.alive.get()
    }
}

impl Drop for FragmentSubscription {
    fn drop(&mut self) {
        self.alive.set(false);
    }
}

/// The fragment cell, its pending-signal queue, and its subscribers.
#[derive(Debug, Default)]
pub struct Location {
    fragment: String,
    pending: VecDeque<String>,
    subscribers: Vec<(SubId, Rc<Cell<bool>>)>,
    next_sub: SubId,
}

impl Location {
    /// Create a location holding the given initial fragment.
    ///
    /// Seeding does not enqueue a signal; consumers read the initial value
    /// directly at construction time.
    #[must_use]
    pub fn new(initial: &str) -> Self {
        Self {
            fragment: initial.to_string(),
            pending: VecDeque::new(),
            subscribers: Vec::new(),
            next_sub: 1,
        }
    }

    /// The current fragment.
    #[must_use]
    pub fn fragment(&self) -> &str {
        &self.fragment
    }

    /// Rewrite the fragment and enqueue a change signal.
    ///
    /// Fires unconditionally: writing the current value again still
    /// signals.
    pub fn set_fragment(&mut self, fragment: &str) {
        debug!(fragment, "fragment write");
        self.fragment = fragment.to_string();
        self.pending.push_back(fragment.to_string());
    }

    /// Register a listener for fragment changes.
    pub fn subscribe(&mut self) -> FragmentSubscription {
        let id = self.next_sub;
        self.next_sub += 1;
        let alive = Rc::new(Cell::new(true));
        self.subscribers.push((id, Rc::clone(&alive)));
        FragmentSubscription { id, alive }
    }

    /// Deliver all pending signals to all live subscriptions.
    ///
    /// Dead subscriptions are swept first. Pending signals are consumed
    /// whether or not anyone is listening: with no live subscription a
    /// change simply evaporates.
    pub fn drain(&mut self) -> Vec<FragmentChange> {
        self.subscribers.retain(|(_, alive)| alive.get());
        let mut out = Vec::new();
        for fragment in self.pending.drain(..) {
            for (id, _) in &self.subscribers {
                out.push(FragmentChange {
                    fragment: fragment.clone(),
                    subscription: *id,
                });
            }
        }
        out
    }
}

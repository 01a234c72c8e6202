#![forbid(unsafe_code)]

//! Navigation state: one cell, one writer.
//!
//! The `Router` owns the current [`Route`] and is the only thing that
//! writes it. It seeds from the location's fragment once at attach time,
//! then updates only in response to fragment-change deliveries addressed
//! to its own subscription. Everything else reads the route through
//! [`Router::route`].
//!
//! Detaching (or dropping) the router releases the subscription, after
//! which fragment changes can no longer reach it; there is no window
//! where a torn-down listener still mutates state.

use crate::routes::Route;
use folio_core::logging::debug;
use folio_runtime::location::{FragmentChange, FragmentSubscription, Location};

/// Navigation state store plus its fragment listener.
#[derive(Debug)]
pub struct Router {
    route: Route,
    sub: Option<FragmentSubscription>,
}

impl Router {
    /// Attach to a location: read the current fragment once, subscribe to
    /// changes.
    pub fn attach(location: &mut Location) -> Self {
        let route = Route::from_fragment(location.fragment());
        let sub = location.subscribe();
        Self {
            route,
            sub: Some(sub),
        }
    }

    /// The current route.
    #[must_use]
    pub fn route(&self) -> &Route {
        &self.route
    }

    /// Whether the listener is still subscribed.
    #[must_use]
    pub fn is_attached(&self) -> bool {
        self.sub.as_ref().is_some_and(FragmentSubscription::is_live)
    }

    /// React to a fragment-change delivery.
    ///
    /// Returns the new route when the delivery was addressed to this
    /// router's live subscription, including when the route is unchanged:
    /// since every signal produces exactly one state update and one
    /// (idempotent) re-render. Deliveries for other subscriptions, or
    /// arriving after detach, return `None` and leave the state alone.
    pub fn handle(&mut self, change: &FragmentChange) -> Option<Route> {
        let sub = self.sub.as_ref()?;
        if !sub.is_live() || change.subscription != sub.id() {
            return None;
        }
        let route = Route::from_fragment(&change.fragment);
        debug!(fragment = %change.fragment, route = ?route, "navigate");
        self.route = route.clone();
        Some(route)
    }

    /// Release the fragment subscription. Idempotent.
    pub fn detach(&mut self) {
        self.sub = None;
    }
}

#![forbid(unsafe_code)]

//! The folio portfolio application.
//!
//! Four static pages addressed by URL-style fragments. The interesting
//! machinery is the navigation layer: a [`router::Router`] keeps the
//! current [`routes::Route`] in sync with the runtime's location cell,
//! [`link`] activation rewrites the fragment (never the route state
//! directly), [`pages::select`] maps a route to exactly one page builder,
//! and [`overflow::OverflowInspector`] scans each committed layout for
//! elements running past the viewport.

pub mod app;
pub mod chrome;
pub mod cli;
pub mod content;
pub mod link;
pub mod overflow;
pub mod pages;
pub mod router;
pub mod routes;
pub mod theme;

pub use app::{Msg, PortfolioApp};
pub use routes::Route;

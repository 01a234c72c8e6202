#![forbid(unsafe_code)]

//! Rendering substrate for folio.
//!
//! Pages are composed into a retained [`element::ElementTree`], laid out by
//! [`layout::flow`] into content-coordinate boxes (overflow is representable,
//! not clipped away), and painted into a [`buffer::Buffer`] cell grid with
//! clipping and scroll applied at paint time.

pub mod buffer;
pub mod cell;
pub mod element;
pub mod layout;
pub mod paint;
pub mod style;

pub use buffer::{BorderChars, Buffer};
pub use cell::Cell;
pub use element::{Element, ElementId, ElementKind, ElementTree, Sizing};
pub use layout::{Layout, flow, wrap};
pub use paint::paint;
pub use style::{Attrs, Color, Outline, Style};

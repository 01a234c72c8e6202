#![forbid(unsafe_code)]

//! Core types for folio: geometry primitives, the canonical input event
//! enum, and the logging facade shared by the rest of the workspace.

pub mod event;
pub mod geometry;
pub mod logging;

pub use event::{Event, KeyCode, KeyEvent, Modifiers, MouseButton, MouseEvent, MouseEventKind, SubId};
pub use geometry::{Rect, Sides};

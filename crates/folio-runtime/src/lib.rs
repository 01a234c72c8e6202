#![forbid(unsafe_code)]

//! Runtime for folio: the addressable fragment state, the single-queue
//! event loop, a headless harness for tests, and the native terminal
//! session.

pub mod headless;
pub mod location;
pub mod program;
pub mod terminal;

pub use headless::Harness;
pub use location::{FragmentChange, FragmentSubscription, Location};
pub use program::{Cmd, Model, Program};
pub use terminal::{TerminalError, TerminalResult, TerminalSession};

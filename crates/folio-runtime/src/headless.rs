#![forbid(unsafe_code)]

//! Headless harness: drive a program without a terminal.
//!
//! Integration tests inject events, step the loop, and snapshot the
//! painted buffer as plain text.

use crate::location::Location;
use crate::program::{Model, Program};
use folio_core::event::{Event, KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};

/// Test driver around a [`Program`].
pub struct Harness<M: Model> {
    program: Program<M>,
}

impl<M: Model> Harness<M> {
    /// Wrap an already-wired model and location.
    pub fn new(model: M, location: Location, width: u16, height: u16) -> Self {
        Self {
            program: Program::new(model, location, width, height),
        }
    }

    /// Press a key and settle the loop.
    pub fn press(&mut self, code: KeyCode) {
        self.program.push(Event::Key(KeyEvent::new(code)));
        self.program.process();
    }

    /// Press a character key.
    pub fn press_char(&mut self, c: char) {
        self.press(KeyCode::Char(c));
    }

    /// Left-click a cell and settle the loop.
    pub fn click(&mut self, x: u16, y: u16) {
        self.program.push(Event::Mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            x,
            y,
        }));
        self.program.process();
    }

    /// Resize the viewport and settle the loop.
    pub fn resize(&mut self, width: u16, height: u16) {
        self.program.push(Event::Resize { width, height });
        self.program.process();
    }

    /// Edit the fragment directly (the address-bar path, not a link) and
    /// settle the loop.
    pub fn set_fragment(&mut self, fragment: &str) {
        self.program.location_mut().set_fragment(fragment);
        self.program.process();
    }

    /// Paint and return the screen as newline-joined rows.
    pub fn screen(&mut self) -> String {
        self.program.render().to_lines().join("\n")
    }

    /// Frames painted so far (without forcing a paint).
    #[must_use]
    pub fn frames(&self) -> u64 {
        self.program.frames()
    }

    /// The model.
    pub fn model(&self) -> &M {
        self.program.model()
    }

    /// The model, mutably.
    pub fn model_mut(&mut self) -> &mut M {
        self.program.model_mut()
    }

    /// The wrapped program.
    pub fn program_mut(&mut self) -> &mut Program<M> {
        &mut self.program
    }
}

#![forbid(unsafe_code)]

//! Canonical input and navigation events.
//!
//! Two external signal sources drive the application: user interaction
//! (keys, mouse, resize) delivered by the terminal backend, and fragment
//! changes delivered by the runtime's location cell. Both are folded into
//! one [`Event`] enum so the program loop can serialize them through a
//! single queue.

use bitflags::bitflags;
use crossterm::event as cte;

/// Identifier for a fragment-change subscription.
///
/// Fragment signals are addressed to a specific subscription so that a
/// released listener can never observe a stale delivery.
pub type SubId = u64;

/// Canonical event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// A keyboard event.
    Key(KeyEvent),

    /// A mouse event.
    Mouse(MouseEvent),

    /// Terminal was resized.
    Resize {
        /// New width in columns.
        width: u16,
        /// New height in rows.
        height: u16,
    },

    /// The location fragment changed.
    ///
    /// Carries the full new fragment and the subscription it is addressed
    /// to. Delivered in arrival order, one event per pending change per
    /// live subscription.
    Fragment {
        /// The new fragment value.
        fragment: String,
        /// Subscription this delivery is addressed to.
        subscription: SubId,
    },

    /// A periodic tick from the runtime.
    Tick,
}

impl Event {
    /// Convert a crossterm event into a folio [`Event`].
    ///
    /// Key releases and repeats are dropped; only presses produce events.
    /// Returns `None` for event types the application does not consume.
    #[must_use]
    pub fn from_crossterm(event: cte::Event) -> Option<Self> {
        match event {
            cte::Event::Key(key) if key.kind == cte::KeyEventKind::Press => {
                let code = KeyCode::from_crossterm(key.code)?;
                Some(Event::Key(KeyEvent {
                    code,
                    modifiers: Modifiers::from_crossterm(key.modifiers),
                }))
            }
            cte::Event::Mouse(mouse) => {
                let kind = match mouse.kind {
                    cte::MouseEventKind::Down(btn) => {
                        MouseEventKind::Down(MouseButton::from_crossterm(btn))
                    }
                    cte::MouseEventKind::ScrollUp => MouseEventKind::ScrollUp,
                    cte::MouseEventKind::ScrollDown => MouseEventKind::ScrollDown,
                    _ => return None,
                };
                Some(Event::Mouse(MouseEvent {
                    kind,
                    x: mouse.column,
                    y: mouse.row,
                }))
            }
            cte::Event::Resize(width, height) => Some(Event::Resize { width, height }),
            _ => None,
        }
    }
}

/// A keyboard event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyEvent {
    /// The key that was pressed.
    pub code: KeyCode,
    /// Modifier keys held during the event.
    pub modifiers: Modifiers,
}

impl KeyEvent {
    /// Create a key event with no modifiers.
    #[must_use]
    pub const fn new(code: KeyCode) -> Self {
        Self {
            code,
            modifiers: Modifiers::NONE,
        }
    }

    /// Check if this is a specific character key.
    #[must_use]
    pub fn is_char(&self, c: char) -> bool {
        matches!(self.code, KeyCode::Char(ch) if ch == c)
    }

    /// Check if Ctrl is held.
    #[must_use]
    pub const fn ctrl(&self) -> bool {
        self.modifiers.contains(Modifiers::CTRL)
    }
}

/// Key codes the application understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyCode {
    Char(char),
    Enter,
    Esc,
    Tab,
    Up,
    Down,
    PageUp,
    PageDown,
    Home,
    End,
}

impl KeyCode {
    fn from_crossterm(code: cte::KeyCode) -> Option<Self> {
        Some(match code {
            cte::KeyCode::Char(c) => KeyCode::Char(c),
            cte::KeyCode::Enter => KeyCode::Enter,
            cte::KeyCode::Esc => KeyCode::Esc,
            cte::KeyCode::Tab => KeyCode::Tab,
            cte::KeyCode::Up => KeyCode::Up,
            cte::KeyCode::Down => KeyCode::Down,
            cte::KeyCode::PageUp => KeyCode::PageUp,
            cte::KeyCode::PageDown => KeyCode::PageDown,
            cte::KeyCode::Home => KeyCode::Home,
            cte::KeyCode::End => KeyCode::End,
            _ => return None,
        })
    }
}

bitflags! {
    /// Modifier keys.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct Modifiers: u8 {
        const NONE  = 0;
        const SHIFT = 1 << 0;
        const CTRL  = 1 << 1;
        const ALT   = 1 << 2;
    }
}

impl Modifiers {
    fn from_crossterm(mods: cte::KeyModifiers) -> Self {
        let mut out = Modifiers::NONE;
        if mods.contains(cte::KeyModifiers::SHIFT) {
            out |= Modifiers::SHIFT;
        }
        if mods.contains(cte::KeyModifiers::CONTROL) {
            out |= Modifiers::CTRL;
        }
        if mods.contains(cte::KeyModifiers::ALT) {
            out |= Modifiers::ALT;
        }
        out
    }
}

/// A mouse event (0-indexed cell coordinates).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MouseEvent {
    pub kind: MouseEventKind,
    pub x: u16,
    pub y: u16,
}

/// Mouse event kinds the application consumes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MouseEventKind {
    Down(MouseButton),
    ScrollUp,
    ScrollDown,
}

/// Mouse buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
}

impl MouseButton {
    fn from_crossterm(btn: cte::MouseButton) -> Self {
        match btn {
            cte::MouseButton::Left => MouseButton::Left,
            cte::MouseButton::Right => MouseButton::Right,
            cte::MouseButton::Middle => MouseButton::Middle,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_event_char_check() {
        let ev = KeyEvent::new(KeyCode::Char('q'));
        assert!(ev.is_char('q'));
        assert!(!ev.is_char('x'));
        assert!(!ev.ctrl());
    }

    #[test]
    fn key_press_maps_release_dropped() {
        let press = cte::Event::Key(cte::KeyEvent::new(
            cte::KeyCode::Char('a'),
            cte::KeyModifiers::NONE,
        ));
        assert_eq!(
            Event::from_crossterm(press),
            Some(Event::Key(KeyEvent::new(KeyCode::Char('a'))))
        );

        let release = cte::Event::Key(cte::KeyEvent {
            code: cte::KeyCode::Char('a'),
            modifiers: cte::KeyModifiers::NONE,
            kind: cte::KeyEventKind::Release,
            state: cte::KeyEventState::NONE,
        });
        assert_eq!(Event::from_crossterm(release), None);
    }

    #[test]
    fn ctrl_modifier_maps() {
        let ev = cte::Event::Key(cte::KeyEvent::new(
            cte::KeyCode::Char('c'),
            cte::KeyModifiers::CONTROL,
        ));
        match Event::from_crossterm(ev) {
            Some(Event::Key(key)) => assert!(key.ctrl()),
            other => panic!("unexpected mapping: {other:?}"),
        }
    }

    #[test]
    fn resize_maps() {
        let ev = cte::Event::Resize(80, 24);
        assert_eq!(
            Event::from_crossterm(ev),
            Some(Event::Resize {
                width: 80,
                height: 24
            })
        );
    }

    #[test]
    fn mouse_down_maps_moves_dropped() {
        let down = cte::Event::Mouse(cte::MouseEvent {
            kind: cte::MouseEventKind::Down(cte::MouseButton::Left),
            column: 3,
            row: 7,
            modifiers: cte::KeyModifiers::NONE,
        });
        assert_eq!(
            Event::from_crossterm(down),
            Some(Event::Mouse(MouseEvent {
                kind: MouseEventKind::Down(MouseButton::Left),
                x: 3,
                y: 7,
            }))
        );

        let moved = cte::Event::Mouse(cte::MouseEvent {
            kind: cte::MouseEventKind::Moved,
            column: 0,
            row: 0,
            modifiers: cte::KeyModifiers::NONE,
        });
        assert_eq!(Event::from_crossterm(moved), None);
    }
}

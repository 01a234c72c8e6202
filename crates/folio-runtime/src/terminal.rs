#![forbid(unsafe_code)]

//! Native terminal session and present loop.
//!
//! Raw mode, alternate screen, and mouse capture are acquired together
//! and restored by [`TerminalSession`]'s drop on every exit path. On unix
//! a SIGINT/SIGTERM flag breaks the loop so the drop actually runs.

use crate::program::{Model, Program};
use folio_core::event::Event;
use folio_core::logging::info;
use folio_render::buffer::Buffer;
use folio_render::cell::Cell;
use folio_render::style::{Attrs, Style};
use std::fmt;
use std::io::{self, Write};
use std::time::Duration;

use crossterm::cursor::{Hide, MoveTo, Show};
use crossterm::event::{DisableMouseCapture, EnableMouseCapture, poll, read};
use crossterm::style::{
    Attribute, Color as CtColor, Print, ResetColor, SetAttribute, SetBackgroundColor,
    SetForegroundColor,
};
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode, size,
};
use crossterm::{execute, queue};

/// Errors from the terminal layer.
#[derive(Debug)]
pub enum TerminalError {
    /// I/O error talking to the terminal.
    Io(io::Error),
}

impl fmt::Display for TerminalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TerminalError::Io(e) => write!(f, "terminal I/O error: {e}"),
        }
    }
}

impl std::error::Error for TerminalError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            TerminalError::Io(e) => Some(e),
        }
    }
}

impl From<io::Error> for TerminalError {
    fn from(e: io::Error) -> Self {
        TerminalError::Io(e)
    }
}

/// Result type for terminal operations.
pub type TerminalResult<T> = Result<T, TerminalError>;

/// RAII guard for the terminal state.
pub struct TerminalSession;

impl TerminalSession {
    /// Enter raw mode, the alternate screen, and mouse capture.
    pub fn enter() -> TerminalResult<Self> {
        enable_raw_mode()?;
        let mut out = io::stdout();
        execute!(out, EnterAlternateScreen, EnableMouseCapture, Hide)?;
        Ok(Self)
    }

    /// Current terminal size in cells.
    pub fn size() -> TerminalResult<(u16, u16)> {
        Ok(size()?)
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        let mut out = io::stdout();
        let _ = execute!(out, LeaveAlternateScreen, DisableMouseCapture, Show, ResetColor);
        let _ = disable_raw_mode();
    }
}

#[cfg(unix)]
fn shutdown_flag() -> io::Result<std::sync::Arc<std::sync::atomic::AtomicBool>> {
    let flag = std::sync::Arc::new(std::sync::atomic::AtomicBool::new(false));
    signal_hook::flag::register(signal_hook::consts::SIGTERM, std::sync::Arc::clone(&flag))?;
    signal_hook::flag::register(signal_hook::consts::SIGINT, std::sync::Arc::clone(&flag))?;
    Ok(flag)
}

/// Run the program against the real terminal until it quits.
pub fn run<M: Model>(program: &mut Program<M>) -> TerminalResult<()> {
    let _session = TerminalSession::enter()?;
    #[cfg(unix)]
    let shutdown = shutdown_flag()?;

    let mut out = io::stdout();
    while program.is_running() {
        #[cfg(unix)]
        if shutdown.load(std::sync::atomic::Ordering::Relaxed) {
            info!("signal received, shutting down");
            break;
        }

        present(program.render(), &mut out)?;

        if poll(Duration::from_millis(100))? {
            if let Some(event) = Event::from_crossterm(read()?) {
                program.push(event);
            }
        }
        program.process();
    }
    Ok(())
}

/// Write one full frame, coalescing style changes between runs of cells.
fn present(buf: &Buffer, out: &mut impl Write) -> io::Result<()> {
    let mut last_style: Option<Style> = None;
    for y in 0..buf.height() {
        queue!(out, MoveTo(0, y))?;
        for x in 0..buf.width() {
            let cell = buf.get(x, y).copied().unwrap_or_else(Cell::default);
            if last_style != Some(cell.style) {
                apply_style(out, cell.style)?;
                last_style = Some(cell.style);
            }
            queue!(out, Print(cell.ch))?;
        }
    }
    queue!(out, ResetColor)?;
    out.flush()
}

fn apply_style(out: &mut impl Write, style: Style) -> io::Result<()> {
    queue!(out, SetAttribute(Attribute::Reset), ResetColor)?;
    if let Some(fg) = style.fg {
        queue!(
            out,
            SetForegroundColor(CtColor::Rgb {
                r: fg.r,
                g: fg.g,
                b: fg.b
            })
        )?;
    }
    if let Some(bg) = style.bg {
        queue!(
            out,
            SetBackgroundColor(CtColor::Rgb {
                r: bg.r,
                g: bg.g,
                b: bg.b
            })
        )?;
    }
    let attrs = style.attrs;
    if attrs.contains(Attrs::BOLD) {
        queue!(out, SetAttribute(Attribute::Bold))?;
    }
    if attrs.contains(Attrs::DIM) {
        queue!(out, SetAttribute(Attribute::Dim))?;
    }
    if attrs.contains(Attrs::ITALIC) {
        queue!(out, SetAttribute(Attribute::Italic))?;
    }
    if attrs.contains(Attrs::UNDERLINE) {
        queue!(out, SetAttribute(Attribute::Underlined))?;
    }
    if attrs.contains(Attrs::REVERSE) {
        queue!(out, SetAttribute(Attribute::Reverse))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_render::style::Color;

    #[test]
    fn present_writes_every_row() {
        let mut buf = Buffer::new(4, 2);
        buf.draw_text(0, 0, "ab", Style::new().fg(Color::rgb(1, 2, 3)), 4);
        let mut sink = Vec::new();
        present(&buf, &mut sink).unwrap();
        let text = String::from_utf8_lossy(&sink);
        assert!(text.contains('a'));
        assert!(text.contains('b'));
    }
}

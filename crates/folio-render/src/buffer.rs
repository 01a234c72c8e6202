#![forbid(unsafe_code)]

//! Buffer grid storage and drawing helpers.
//!
//! The `Buffer` is a row-major grid of [`Cell`]s sized to the viewport.
//! All access is bounds-checked; out-of-range writes are dropped, which
//! gives painting free clipping at the viewport edges.
//!
//! # Invariants
//!
//! 1. `cells.len() == width * height`
//! 2. Width and height never change after creation

use crate::cell::Cell;
use crate::style::Style;
use folio_core::geometry::Rect;
use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

/// Characters used to draw a border around a rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BorderChars {
    pub top_left: char,
    pub top_right: char,
    pub bottom_left: char,
    pub bottom_right: char,
    pub horizontal: char,
    pub vertical: char,
}

impl BorderChars {
    /// Simple box-drawing characters.
    pub const SQUARE: Self = Self {
        top_left: '┌',
        top_right: '┐',
        bottom_left: '└',
        bottom_right: '┘',
        horizontal: '─',
        vertical: '│',
    };

    /// Rounded corners.
    pub const ROUNDED: Self = Self {
        top_left: '╭',
        top_right: '╮',
        bottom_left: '╰',
        bottom_right: '╯',
        horizontal: '─',
        vertical: '│',
    };

    /// Heavy (thick) border.
    pub const HEAVY: Self = Self {
        top_left: '┏',
        top_right: '┓',
        bottom_left: '┗',
        bottom_right: '┛',
        horizontal: '━',
        vertical: '┃',
    };
}

/// A 2D grid of cells.
#[derive(Debug, Clone)]
pub struct Buffer {
    width: u16,
    height: u16,
    cells: Vec<Cell>,
}

impl Buffer {
    /// Create a new buffer with the given dimensions.
    ///
    /// # Panics
    ///
    /// Panics if width or height is 0.
    pub fn new(width: u16, height: u16) -> Self {
        assert!(width > 0, "buffer width must be > 0");
        assert!(height > 0, "buffer height must be > 0");

        let size = width as usize * height as usize;
        Self {
            width,
            height,
            cells: vec![Cell::default(); size],
        }
    }

    /// Buffer width in cells.
    #[inline]
    pub const fn width(&self) -> u16 {
        self.width
    }

    /// Buffer height in cells.
    #[inline]
    pub const fn height(&self) -> u16 {
        self.height
    }

    #[inline]
    fn index(&self, x: u16, y: u16) -> Option<usize> {
        if x < self.width && y < self.height {
            Some(y as usize * self.width as usize + x as usize)
        } else {
            None
        }
    }

    /// Get a cell, `None` when out of bounds.
    #[inline]
    pub fn get(&self, x: u16, y: u16) -> Option<&Cell> {
        self.index(x, y).map(|i| &self.cells[i])
    }

    /// Get a mutable cell, `None` when out of bounds.
    #[inline]
    pub fn get_mut(&mut self, x: u16, y: u16) -> Option<&mut Cell> {
        self.index(x, y).map(move |i| &mut self.cells[i])
    }

    /// Write a cell. Out-of-bounds writes are dropped.
    #[inline]
    pub fn set(&mut self, x: u16, y: u16, cell: Cell) {
        if let Some(i) = self.index(x, y) {
            self.cells[i] = cell;
        }
    }

    /// Reset every cell to the default blank.
    pub fn clear(&mut self) {
        self.cells.fill(Cell::default());
    }

    /// Fill a rectangular region with a cell, clipped to the buffer.
    pub fn fill(&mut self, area: Rect, cell: Cell) {
        for y in area.y..area.bottom().min(self.height) {
            for x in area.x..area.right().min(self.width) {
                self.set(x, y, cell);
            }
        }
    }

    /// Draw a text run at `(x, y)`, stopping at `max_x` (exclusive).
    ///
    /// Grapheme- and width-aware: a double-width grapheme occupies two
    /// cells, the second left blank with the same style. Returns the x
    /// position after the last drawn grapheme.
    pub fn draw_text(&mut self, mut x: u16, y: u16, content: &str, style: Style, max_x: u16) -> u16 {
        for grapheme in content.graphemes(true) {
            if x >= max_x {
                break;
            }
            let w = UnicodeWidthStr::width(grapheme) as u16;
            if w == 0 {
                continue;
            }
            if x.saturating_add(w) > max_x {
                break;
            }
            if let Some(c) = grapheme.chars().next() {
                self.set(x, y, Cell::styled(c, style));
                if w > 1 {
                    self.set(x + 1, y, Cell::styled(' ', style));
                }
            }
            x = x.saturating_add(w);
        }
        x
    }

    /// Draw a border on the perimeter of `area`, clipped to the buffer.
    pub fn draw_border(&mut self, area: Rect, chars: BorderChars, style: Style) {
        if area.width < 2 || area.height < 2 {
            return;
        }
        let right = area.right() - 1;
        let bottom = area.bottom() - 1;

        for x in (area.x + 1)..right {
            self.set(x, area.y, Cell::styled(chars.horizontal, style));
            self.set(x, bottom, Cell::styled(chars.horizontal, style));
        }
        for y in (area.y + 1)..bottom {
            self.set(area.x, y, Cell::styled(chars.vertical, style));
            self.set(right, y, Cell::styled(chars.vertical, style));
        }
        self.set(area.x, area.y, Cell::styled(chars.top_left, style));
        self.set(right, area.y, Cell::styled(chars.top_right, style));
        self.set(area.x, bottom, Cell::styled(chars.bottom_left, style));
        self.set(right, bottom, Cell::styled(chars.bottom_right, style));
    }

    /// Render the buffer contents as one string per row (for tests and
    /// snapshots; styling is discarded).
    pub fn to_lines(&self) -> Vec<String> {
        (0..self.height)
            .map(|y| {
                let mut line = String::with_capacity(self.width as usize);
                for x in 0..self.width {
                    if let Some(cell) = self.get(x, y) {
                        line.push(cell.ch);
                    }
                }
                line.trim_end().to_string()
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::Color;

    #[test]
    #[should_panic(expected = "width must be > 0")]
    fn zero_width_panics() {
        let _ = Buffer::new(0, 5);
    }

    #[test]
    fn set_get_roundtrip_and_bounds() {
        let mut buf = Buffer::new(4, 2);
        buf.set(3, 1, Cell::from_char('x'));
        assert_eq!(buf.get(3, 1).map(|c| c.ch), Some('x'));
        assert_eq!(buf.get(4, 1), None);
        assert_eq!(buf.get(3, 2), None);
        // out-of-bounds write is dropped, not a panic
        buf.set(9, 9, Cell::from_char('y'));
    }

    #[test]
    fn draw_text_basic_and_clip() {
        let mut buf = Buffer::new(10, 1);
        let end = buf.draw_text(0, 0, "ABCDEF", Style::new(), 3);
        assert_eq!(end, 3);
        assert_eq!(buf.get(2, 0).map(|c| c.ch), Some('C'));
        assert_eq!(buf.get(3, 0).map(|c| c.ch), Some(' '));
    }

    #[test]
    fn draw_text_wide_grapheme_takes_two_cells() {
        let mut buf = Buffer::new(6, 1);
        let end = buf.draw_text(0, 0, "日x", Style::new(), 6);
        assert_eq!(end, 3);
        assert_eq!(buf.get(0, 0).map(|c| c.ch), Some('日'));
        assert_eq!(buf.get(1, 0).map(|c| c.ch), Some(' '));
        assert_eq!(buf.get(2, 0).map(|c| c.ch), Some('x'));
    }

    #[test]
    fn draw_text_applies_style() {
        let mut buf = Buffer::new(4, 1);
        let style = Style::new().fg(Color::rgb(9, 8, 7));
        buf.draw_text(0, 0, "A", style, 4);
        assert_eq!(buf.get(0, 0).map(|c| c.style.fg), Some(Some(Color::rgb(9, 8, 7))));
    }

    #[test]
    fn border_is_clipped_at_buffer_edge() {
        let mut buf = Buffer::new(4, 4);
        buf.draw_border(Rect::new(2, 2, 6, 6), BorderChars::SQUARE, Style::new());
        assert_eq!(buf.get(2, 2).map(|c| c.ch), Some('┌'));
        // right/bottom edges fall outside the buffer and are dropped
        assert_eq!(buf.get(3, 3).map(|c| c.ch), Some(' '));
    }

    #[test]
    fn degenerate_border_is_noop() {
        let mut buf = Buffer::new(4, 4);
        buf.draw_border(Rect::new(0, 0, 1, 4), BorderChars::SQUARE, Style::new());
        assert!(buf.to_lines().iter().all(|l| l.is_empty()));
    }

    #[test]
    fn to_lines_trims_trailing_blanks() {
        let mut buf = Buffer::new(5, 2);
        buf.draw_text(1, 0, "hi", Style::new(), 5);
        assert_eq!(buf.to_lines(), vec![" hi".to_string(), String::new()]);
    }

    #[test]
    fn fill_and_clear() {
        let mut buf = Buffer::new(3, 3);
        buf.fill(Rect::new(0, 0, 3, 3), Cell::from_char('#'));
        assert_eq!(buf.get(2, 2).map(|c| c.ch), Some('#'));
        buf.clear();
        assert!(buf.get(2, 2).is_some_and(Cell::is_blank));
    }
}

#![forbid(unsafe_code)]

//! Painting: element tree + layout + scroll → buffer.
//!
//! Content coordinates map to screen rows by subtracting the scroll
//! offset; rows outside the viewport are skipped and the buffer's
//! bounds-checked writes clip the rest. A second pass draws outlines on
//! top so a flagged element stays visible over its own content.

use crate::buffer::{BorderChars, Buffer};
use crate::element::{Element, ElementKind, ElementTree};
use crate::layout::{Layout, wrap};
use crate::style::{Attrs, Outline, Style};
use folio_core::geometry::Rect;

/// Paint the laid-out tree into the buffer at the given scroll offset.
pub fn paint(tree: &ElementTree, layout: &Layout, scroll: u16, buf: &mut Buffer) {
    for (id, rect) in layout.iter() {
        if let Some(el) = tree.get(id) {
            paint_element(el, rect, scroll, buf);
        }
    }
    for (id, rect) in layout.iter() {
        if let Some(el) = tree.get(id)
            && let Some(outline) = el.outline
        {
            paint_outline(rect, outline, scroll, buf);
        }
    }
}

/// Map a content row to a screen row, `None` when outside the viewport.
fn screen_row(y: u16, scroll: u16, buf: &Buffer) -> Option<u16> {
    let sy = y.checked_sub(scroll)?;
    (sy < buf.height()).then_some(sy)
}

fn paint_element(el: &Element, rect: Rect, scroll: u16, buf: &mut Buffer) {
    let max_x = rect.right().min(buf.width());
    match &el.kind {
        ElementKind::Root | ElementKind::Spacer | ElementKind::Row => {}
        ElementKind::Section => {
            if el.boxed {
                paint_border(rect, BorderChars::ROUNDED, el.style, scroll, buf);
            }
            paint_wrapped_text(el, rect, scroll, buf);
        }
        ElementKind::Heading | ElementKind::Text => {
            paint_wrapped_text(el, rect, scroll, buf);
        }
        ElementKind::Link { .. } => {
            let mut style = el.style;
            style.attrs |= Attrs::UNDERLINE;
            if let Some(sy) = screen_row(rect.y, scroll, buf) {
                buf.draw_text(rect.x, sy, &el.text, style, max_x);
            }
        }
        ElementKind::Button => {
            if let Some(sy) = screen_row(rect.y, scroll, buf) {
                let label = format!("[ {} ]", el.text);
                buf.draw_text(rect.x, sy, &label, el.style, max_x);
            }
        }
        ElementKind::Field => {
            if let Some(sy) = screen_row(rect.y, scroll, buf) {
                buf.draw_text(rect.x, sy, &el.text, el.style.dim(), max_x);
            }
            if let Some(sy) = screen_row(rect.y + 1, scroll, buf) {
                let rule = "_".repeat(rect.width as usize);
                buf.draw_text(rect.x, sy, &rule, el.style, max_x);
            }
        }
        ElementKind::Tag => {
            if let Some(sy) = screen_row(rect.y, scroll, buf) {
                let label = format!(" {} ", el.text);
                buf.draw_text(rect.x, sy, &label, el.style.reverse(), max_x);
            }
        }
        ElementKind::Divider => {
            if let Some(sy) = screen_row(rect.y, scroll, buf) {
                let rule = "─".repeat(rect.width as usize);
                buf.draw_text(rect.x, sy, &rule, el.style, max_x);
            }
        }
        ElementKind::Image { src } => {
            paint_border(rect, BorderChars::SQUARE, el.style, scroll, buf);
            let mid = rect.y + rect.height / 2;
            if let Some(sy) = screen_row(mid, scroll, buf) {
                buf.draw_text(rect.x + 2, sy, src, el.style.dim(), max_x.saturating_sub(2));
            }
        }
    }
}

fn paint_wrapped_text(el: &Element, rect: Rect, scroll: u16, buf: &mut Buffer) {
    if el.text.is_empty() {
        return;
    }
    let inset = if el.boxed { 2 } else { 0 };
    let inner_w = rect.width.saturating_sub(inset * 2).max(1);
    let x = rect.x + inset;
    let top = rect.y + u16::from(el.boxed);
    let max_x = (x + inner_w).min(buf.width());
    for (i, line) in wrap(&el.text, inner_w).iter().enumerate() {
        if let Some(sy) = screen_row(top + i as u16, scroll, buf) {
            buf.draw_text(x, sy, line, el.style, max_x);
        }
    }
}

/// Draw a border row-by-row so partially scrolled-off borders still paint.
fn paint_border(rect: Rect, chars: BorderChars, style: Style, scroll: u16, buf: &mut Buffer) {
    if rect.width < 2 || rect.height < 2 {
        return;
    }
    let right = (rect.right() - 1).min(buf.width().saturating_sub(1));
    let bottom = rect.bottom() - 1;

    for y in rect.y..rect.bottom() {
        let Some(sy) = screen_row(y, scroll, buf) else {
            continue;
        };
        if y == rect.y || y == bottom {
            for x in rect.x..=right {
                let ch = if x == rect.x {
                    if y == rect.y { chars.top_left } else { chars.bottom_left }
                } else if x == rect.right() - 1 {
                    if y == rect.y { chars.top_right } else { chars.bottom_right }
                } else {
                    chars.horizontal
                };
                buf.set(x, sy, crate::cell::Cell::styled(ch, style));
            }
        } else {
            buf.set(rect.x, sy, crate::cell::Cell::styled(chars.vertical, style));
            if rect.right() - 1 <= right {
                buf.set(rect.right() - 1, sy, crate::cell::Cell::styled(chars.vertical, style));
            }
        }
    }
}

/// Restyle an element's visible perimeter with the outline color.
///
/// Content is left in place; only styling changes, so restoring the
/// element's `outline` field fully undoes the flag on the next paint.
fn paint_outline(rect: Rect, outline: Outline, scroll: u16, buf: &mut Buffer) {
    let apply = |buf: &mut Buffer, x: u16, sy: u16| {
        if let Some(cell) = buf.get_mut(x, sy) {
            cell.style.fg = Some(outline.color);
            cell.style.attrs |= Attrs::REVERSE;
        }
    };
    let bottom = rect.bottom().saturating_sub(1);
    for y in rect.y..rect.bottom() {
        let Some(sy) = screen_row(y, scroll, buf) else {
            continue;
        };
        if y == rect.y || y == bottom {
            for x in rect.x..rect.right().min(buf.width()) {
                apply(buf, x, sy);
            }
        } else {
            apply(buf, rect.x, sy);
            if rect.right() > 0 {
                apply(buf, rect.right() - 1, sy);
            }
        }
    }
}

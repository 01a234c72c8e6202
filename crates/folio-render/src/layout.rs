#![forbid(unsafe_code)]

//! Vertical flow layout.
//!
//! Computes one content-coordinate [`Rect`] per element: blocks stack top
//! to bottom, tag rows pack left to right with wrapping, boxed elements
//! inset their children. Fixed-width elements keep their intrinsic width
//! even when it runs past the available width; overflow stays visible to
//! diagnostics here and is only clipped at paint time.

use crate::element::{ElementId, ElementKind, ElementTree, Sizing};
use folio_core::geometry::{Rect, Sides};
use std::collections::HashMap;
use unicode_width::UnicodeWidthStr;

/// Rows an image placeholder occupies, border included.
const IMAGE_HEIGHT: u16 = 5;

/// The result of a layout pass: preorder element boxes plus total height.
#[derive(Debug, Default)]
pub struct Layout {
    boxes: Vec<(ElementId, Rect)>,
    index: HashMap<ElementId, usize>,
    /// Total laid-out height in rows; drives scrolling.
    pub content_height: u16,
}

impl Layout {
    /// The box computed for an element, if it was laid out.
    #[must_use]
    pub fn get(&self, id: ElementId) -> Option<Rect> {
        self.index.get(&id).map(|&i| self.boxes[i].1)
    }

    /// Boxes in paint order (preorder).
    pub fn iter(&self) -> impl Iterator<Item = (ElementId, Rect)> + '_ {
        self.boxes.iter().copied()
    }

    /// Number of laid-out elements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.boxes.len()
    }

    /// True when nothing was laid out.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.boxes.is_empty()
    }
}

/// Lay out the whole tree against the given content width.
#[must_use]
pub fn flow(tree: &ElementTree, content_width: u16) -> Layout {
    let mut boxes = Vec::with_capacity(tree.len());
    let height = layout_block(tree, tree.root(), 0, 0, content_width.max(1), &mut boxes);
    let index = boxes
        .iter()
        .enumerate()
        .map(|(i, &(id, _))| (id, i))
        .collect();
    Layout {
        boxes,
        index,
        content_height: height,
    }
}

fn layout_block(
    tree: &ElementTree,
    id: ElementId,
    x: u16,
    y: u16,
    avail: u16,
    out: &mut Vec<(ElementId, Rect)>,
) -> u16 {
    let Some(el) = tree.get(id) else {
        return 0;
    };

    let width = match el.sizing {
        Sizing::Fill => avail,
        Sizing::Content => intrinsic_width(&el.kind, &el.text),
        Sizing::Fixed(w) => w,
    }
    .max(1);

    // Reserve the slot now so parents precede children in paint order.
    out.push((id, Rect::default()));
    let slot = out.len() - 1;

    let inset = if el.boxed {
        Sides {
            top: 1,
            right: 2,
            bottom: 1,
            left: 2,
        }
    } else {
        Sides::default()
    };
    let inner_w = width.saturating_sub(inset.horizontal_sum()).max(1);
    let cx = x.saturating_add(inset.left);
    let mut cy = y.saturating_add(inset.top);

    match &el.kind {
        ElementKind::Spacer | ElementKind::Divider | ElementKind::Button => {
            cy = cy.saturating_add(1);
        }
        ElementKind::Field => {
            cy = cy.saturating_add(2);
        }
        ElementKind::Image { .. } => {
            cy = cy.saturating_add(IMAGE_HEIGHT);
        }
        ElementKind::Row => {
            cy = cy.saturating_add(layout_row(tree, el.children(), cx, cy, inner_w, out));
        }
        _ => {
            cy = cy.saturating_add(wrap(&el.text, inner_w).len() as u16);
        }
    }

    if !matches!(el.kind, ElementKind::Row) {
        for &child in el.children() {
            cy = cy.saturating_add(layout_block(tree, child, cx, cy, inner_w, out));
        }
    }

    let height = cy
        .saturating_sub(y)
        .saturating_add(inset.bottom)
        .max(if el.boxed { 2 } else { 0 });
    out[slot] = (id, Rect::new(x, y, width, height));
    height
}

/// Pack inline children left to right, wrapping onto new rows. Returns
/// rows used.
fn layout_row(
    tree: &ElementTree,
    items: &[ElementId],
    x: u16,
    y: u16,
    avail: u16,
    out: &mut Vec<(ElementId, Rect)>,
) -> u16 {
    let mut tx = x;
    let mut ty = y;
    let mut rows: u16 = 0;
    for &id in items {
        let Some(item) = tree.get(id) else {
            continue;
        };
        let tw = intrinsic_width(&item.kind, &item.text);
        if rows == 0 {
            rows = 1;
        }
        if tx > x && tx.saturating_add(tw) > x.saturating_add(avail) {
            ty = ty.saturating_add(1);
            tx = x;
            rows = rows.saturating_add(1);
        }
        out.push((id, Rect::new(tx, ty, tw, 1)));
        tx = tx.saturating_add(tw).saturating_add(1);
    }
    rows
}

fn intrinsic_width(kind: &ElementKind, text: &str) -> u16 {
    let text_w = UnicodeWidthStr::width(text) as u16;
    match kind {
        ElementKind::Tag => text_w.saturating_add(2),
        ElementKind::Button => text_w.saturating_add(4),
        _ => text_w,
    }
    .max(1)
}

/// Greedy word wrap at a display width, hard-splitting oversized words.
///
/// Blank text produces no lines (zero height).
#[must_use]
pub fn wrap(text: &str, width: u16) -> Vec<String> {
    let width = width.max(1) as usize;
    let mut lines = Vec::new();
    let mut line = String::new();
    let mut line_w = 0usize;

    for word in text.split_whitespace() {
        let mut word = word;
        let mut w = UnicodeWidthStr::width(word);

        if line_w > 0 && line_w + 1 + w > width {
            lines.push(std::mem::take(&mut line));
            line_w = 0;
        }
        while w > width {
            let mut take_bytes = 0usize;
            let mut take_w = 0usize;
            for g in unicode_segmentation::UnicodeSegmentation::graphemes(word, true) {
                let gw = UnicodeWidthStr::width(g);
                if take_w + gw > width {
                    break;
                }
                take_bytes += g.len();
                take_w += gw;
            }
            if take_bytes == 0 {
                break;
            }
            lines.push(word[..take_bytes].to_string());
            word = &word[take_bytes..];
            w = UnicodeWidthStr::width(word);
        }
        if word.is_empty() {
            continue;
        }
        if line_w == 0 {
            line.push_str(word);
            line_w = w;
        } else {
            line.push(' ');
            line.push_str(word);
            line_w += 1 + w;
        }
    }
    if !line.is_empty() {
        lines.push(line);
    }
    lines
}

#![forbid(unsafe_code)]

//! Retained element tree.
//!
//! Pages are composed as a tree of elements rooted at a single node.
//! Chrome subtrees (navbar, footer) persist across navigations; the main
//! region's subtree is dropped and rebuilt when the route changes. Element
//! ids are monotonic and never reused, so a stale id held across a rebuild
//! simply fails to resolve instead of aliasing a new element.
//!
//! Each element carries an inline [`Outline`] slot. Diagnostics mutate that
//! slot at runtime and are expected to capture the prior value and write it
//! back; the tree itself does not police that discipline.

use crate::style::{Outline, Style};
use std::collections::HashMap;

/// Unique element identifier. Monotonic per tree, never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ElementId(u64);

impl ElementId {
    /// Raw id value.
    #[must_use]
    pub const fn raw(self) -> u64 {
        self.0
    }
}

/// What an element is, and therefore how it lays out and paints.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ElementKind {
    /// The tree root.
    Root,
    /// Block container; draws a border when `boxed` is set.
    Section,
    /// Page or card heading.
    Heading,
    /// Body text, word-wrapped at the element's width.
    Text,
    /// Interactive link. Route hrefs start with `/`; anything else is an
    /// external target passed through opaquely.
    Link { href: String },
    /// Inert button placeholder.
    Button,
    /// Form field placeholder: label row plus an input rule.
    Field,
    /// One tag inside a `Row`.
    Tag,
    /// Inline container: children pack left to right, wrapping onto new
    /// rows as needed.
    Row,
    /// Full-width horizontal rule.
    Divider,
    /// One blank row.
    Spacer,
    /// Image placeholder referencing an asset by path.
    Image { src: String },
}

/// How an element's width is decided.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Sizing {
    /// Take the full available width.
    #[default]
    Fill,
    /// Use the text's intrinsic width.
    Content,
    /// Use exactly this width, even past the viewport edge.
    Fixed(u16),
}

/// A node in the element tree.
#[derive(Debug, Clone)]
pub struct Element {
    id: ElementId,
    parent: Option<ElementId>,
    pub kind: ElementKind,
    pub text: String,
    pub style: Style,
    /// Inline outline state, mutated by diagnostics.
    pub outline: Option<Outline>,
    pub sizing: Sizing,
    /// Draw a border and inset children.
    pub boxed: bool,
    children: Vec<ElementId>,
}

impl Element {
    /// Create a detached element of the given kind.
    #[must_use]
    pub fn new(kind: ElementKind) -> Self {
        Self {
            id: ElementId(0),
            parent: None,
            kind,
            text: String::new(),
            style: Style::new(),
            outline: None,
            sizing: Sizing::Fill,
            boxed: false,
            children: Vec::new(),
        }
    }

    /// Set the element text.
    #[must_use]
    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    /// Set the element style.
    #[must_use]
    pub fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    /// Set the sizing mode.
    #[must_use]
    pub fn sizing(mut self, sizing: Sizing) -> Self {
        self.sizing = sizing;
        self
    }

    /// Draw a border around this element.
    #[must_use]
    pub fn boxed(mut self) -> Self {
        self.boxed = true;
        self
    }

    /// This element's id (assigned on insert).
    #[must_use]
    pub fn id(&self) -> ElementId {
        self.id
    }

    /// Child ids in layout order.
    #[must_use]
    pub fn children(&self) -> &[ElementId] {
        &self.children
    }
}

/// The element tree: an id-keyed arena with ordered children.
#[derive(Debug)]
pub struct ElementTree {
    nodes: HashMap<ElementId, Element>,
    root: ElementId,
    next: u64,
}

impl ElementTree {
    /// Create a tree containing only a root element.
    #[must_use]
    pub fn new() -> Self {
        let root = ElementId(1);
        let mut root_el = Element::new(ElementKind::Root);
        root_el.id = root;
        let mut nodes = HashMap::new();
        nodes.insert(root, root_el);
        Self {
            nodes,
            root,
            next: 2,
        }
    }

    /// The root element id.
    #[must_use]
    pub fn root(&self) -> ElementId {
        self.root
    }

    /// Number of live elements, root included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// True when only the root remains.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.len() <= 1
    }

    /// Insert an element as the last child of `parent`, returning its id.
    ///
    /// # Panics
    ///
    /// Panics if `parent` is not in the tree. Builders only ever insert
    /// under elements they just created, so a dead parent is a logic bug,
    /// not a recoverable condition.
    pub fn insert(&mut self, parent: ElementId, mut element: Element) -> ElementId {
        assert!(
            self.nodes.contains_key(&parent),
            "parent element not in tree"
        );
        let id = ElementId(self.next);
        self.next += 1;
        element.id = id;
        element.parent = Some(parent);
        self.nodes.insert(id, element);
        if let Some(p) = self.nodes.get_mut(&parent) {
            p.children.push(id);
        }
        id
    }

    /// Get an element by id.
    #[must_use]
    pub fn get(&self, id: ElementId) -> Option<&Element> {
        self.nodes.get(&id)
    }

    /// Get a mutable element by id.
    pub fn get_mut(&mut self, id: ElementId) -> Option<&mut Element> {
        self.nodes.get_mut(&id)
    }

    /// Remove an element and its whole subtree.
    ///
    /// Removing the root or an already-removed id is a no-op.
    pub fn remove_subtree(&mut self, id: ElementId) {
        if id == self.root || !self.nodes.contains_key(&id) {
            return;
        }
        if let Some(parent) = self.nodes.get(&id).and_then(|el| el.parent)
            && let Some(p) = self.nodes.get_mut(&parent)
        {
            p.children.retain(|&c| c != id);
        }
        let mut stack = vec![id];
        while let Some(cur) = stack.pop() {
            if let Some(el) = self.nodes.remove(&cur) {
                stack.extend(el.children);
            }
        }
    }

    /// Remove every child subtree of `parent`, keeping `parent` itself.
    pub fn clear_children(&mut self, parent: ElementId) {
        let children = match self.nodes.get(&parent) {
            Some(el) => el.children.clone(),
            None => return,
        };
        for child in children {
            self.remove_subtree(child);
        }
    }

    /// Preorder walk of the subtree rooted at `from`.
    #[must_use]
    pub fn walk(&self, from: ElementId) -> Vec<ElementId> {
        let mut out = Vec::new();
        let mut stack = vec![from];
        while let Some(id) = stack.pop() {
            if let Some(el) = self.nodes.get(&id) {
                out.push(id);
                for &child in el.children.iter().rev() {
                    stack.push(child);
                }
            }
        }
        out
    }
}

impl Default for ElementTree {
    fn default() -> Self {
        Self::new()
    }
}

#![forbid(unsafe_code)]

//! Layout-overflow diagnostic.
//!
//! Advisory tooling, not correctness-critical: after a navigation commit
//! on an enabled route, every laid-out element whose right edge runs past
//! the viewport (minus a one-cell tolerance) gets a distinctive outline.
//! The element's prior outline is recorded first and written back at the
//! start of the next cycle. Restore always precedes re-flagging, so no
//! diagnostic artifact survives a route change or a disable.
//!
//! A flagged element that no longer exists at restore time (its page was
//! rebuilt) is skipped silently; ids are never reused, so the skip can
//! never hit the wrong element.

use crate::routes::Route;
use folio_core::logging::debug;
use folio_render::element::{ElementId, ElementTree};
use folio_render::layout::Layout;
use folio_render::style::{Color, Outline};

/// The outline applied to flagged elements.
const FLAG_OUTLINE: Outline = Outline::new(Color::rgb(38, 37, 37));

/// Post-commit hook over the laid-out tree.
///
/// Environments that want no diagnostics plug in [`NoopInspector`].
pub trait LayoutInspector {
    /// Called once per navigation commit, after layout, before paint.
    fn after_commit(
        &mut self,
        tree: &mut ElementTree,
        layout: &Layout,
        viewport_width: u16,
        route: &Route,
    );

    /// Restore any outstanding flags (teardown path).
    fn restore_all(&mut self, tree: &mut ElementTree);
}

/// Inspector that does nothing.
#[derive(Debug, Default)]
pub struct NoopInspector;

impl LayoutInspector for NoopInspector {
    fn after_commit(&mut self, _: &mut ElementTree, _: &Layout, _: u16, _: &Route) {}

    fn restore_all(&mut self, _: &mut ElementTree) {}
}

/// Flags elements whose layout box exceeds the viewport width.
#[derive(Debug)]
pub struct OverflowInspector {
    routes: Vec<Route>,
    flagged: Vec<(ElementId, Option<Outline>)>,
}

impl OverflowInspector {
    /// Inspect only on the given routes.
    #[must_use]
    pub fn new(routes: Vec<Route>) -> Self {
        Self {
            routes,
            flagged: Vec::new(),
        }
    }

    /// The default enabled set: home and contact.
    #[must_use]
    pub fn default_routes() -> Vec<Route> {
        vec![Route::Home, Route::Contact]
    }

    /// Number of currently flagged elements.
    #[must_use]
    pub fn flagged_len(&self) -> usize {
        self.flagged.len()
    }

    fn restore(&mut self, tree: &mut ElementTree) {
        for (id, prior) in self.flagged.drain(..) {
            if let Some(el) = tree.get_mut(id) {
                el.outline = prior;
            }
        }
    }
}

impl LayoutInspector for OverflowInspector {
    fn after_commit(
        &mut self,
        tree: &mut ElementTree,
        layout: &Layout,
        viewport_width: u16,
        route: &Route,
    ) {
        self.restore(tree);
        if !self.routes.contains(route) {
            return;
        }

        let limit = viewport_width.saturating_sub(1);
        for (id, rect) in layout.iter() {
            if rect.right() > limit
                && let Some(el) = tree.get_mut(id)
            {
                self.flagged.push((id, el.outline));
                el.outline = Some(FLAG_OUTLINE);
            }
        }
        if self.flagged.is_empty() {
            debug!("no overflowing elements detected");
        } else {
            debug!(count = self.flagged.len(), "overflowing elements flagged");
        }
    }

    fn restore_all(&mut self, tree: &mut ElementTree) {
        self.restore(tree);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_render::element::{Element, ElementKind, Sizing};
    use folio_render::layout::flow;

    /// One fill-width element (fits) and one fixed-width element (overflows
    /// a 40-cell viewport).
    fn sample_tree() -> (ElementTree, ElementId, ElementId) {
        let mut tree = ElementTree::new();
        let root = tree.root();
        let fits = tree.insert(root, Element::new(ElementKind::Text).text("fits"));
        let wide = tree.insert(
            root,
            Element::new(ElementKind::Divider).sizing(Sizing::Fixed(96)),
        );
        (tree, fits, wide)
    }

    #[test]
    fn flags_only_overflowing_elements() {
        let (mut tree, fits, wide) = sample_tree();
        let layout = flow(&tree, 39);
        let mut inspector = OverflowInspector::new(vec![Route::Home]);

        inspector.after_commit(&mut tree, &layout, 40, &Route::Home);
        assert_eq!(inspector.flagged_len(), 1);
        assert!(tree.get(wide).unwrap().outline.is_some());
        assert!(tree.get(fits).unwrap().outline.is_none());
    }

    #[test]
    fn disabled_route_restores_and_flags_nothing() {
        let (mut tree, _, wide) = sample_tree();
        let layout = flow(&tree, 39);
        let mut inspector = OverflowInspector::new(vec![Route::Home]);

        inspector.after_commit(&mut tree, &layout, 40, &Route::Home);
        assert!(tree.get(wide).unwrap().outline.is_some());

        inspector.after_commit(&mut tree, &layout, 40, &Route::About);
        assert_eq!(inspector.flagged_len(), 0);
        assert!(tree.get(wide).unwrap().outline.is_none());
    }

    #[test]
    fn prior_outline_is_captured_and_restored() {
        let (mut tree, _, wide) = sample_tree();
        let prior = Outline::new(Color::rgb(1, 2, 3));
        tree.get_mut(wide).unwrap().outline = Some(prior);

        let layout = flow(&tree, 39);
        let mut inspector = OverflowInspector::new(vec![Route::Home]);
        inspector.after_commit(&mut tree, &layout, 40, &Route::Home);
        assert_eq!(tree.get(wide).unwrap().outline, Some(FLAG_OUTLINE));

        inspector.restore_all(&mut tree);
        assert_eq!(tree.get(wide).unwrap().outline, Some(prior));
    }

    #[test]
    fn two_consecutive_cycles_accumulate_nothing() {
        let (mut tree, _, _) = sample_tree();
        let layout = flow(&tree, 39);
        let mut inspector = OverflowInspector::new(vec![Route::Home]);

        inspector.after_commit(&mut tree, &layout, 40, &Route::Home);
        let first = inspector.flagged_len();
        inspector.after_commit(&mut tree, &layout, 40, &Route::Home);
        assert_eq!(inspector.flagged_len(), first);

        // every flag still records a pristine prior state, not the
        // diagnostic outline itself
        inspector.restore_all(&mut tree);
        let outlined = tree
            .walk(tree.root())
            .into_iter()
            .filter(|&id| tree.get(id).is_some_and(|el| el.outline.is_some()))
            .count();
        assert_eq!(outlined, 0);
    }

    #[test]
    fn vanished_elements_are_skipped_silently() {
        let (mut tree, _, wide) = sample_tree();
        let layout = flow(&tree, 39);
        let mut inspector = OverflowInspector::new(vec![Route::Home]);

        inspector.after_commit(&mut tree, &layout, 40, &Route::Home);
        tree.remove_subtree(wide);

        // restoring against the rebuilt tree must not panic or misfire
        let layout = flow(&tree, 39);
        inspector.after_commit(&mut tree, &layout, 40, &Route::Home);
        assert!(tree.get(wide).is_none());
    }

    #[test]
    fn wide_viewport_flags_nothing() {
        let (mut tree, _, _) = sample_tree();
        let layout = flow(&tree, 119);
        let mut inspector = OverflowInspector::new(vec![Route::Home]);
        inspector.after_commit(&mut tree, &layout, 120, &Route::Home);
        assert_eq!(inspector.flagged_len(), 0);
    }

    #[test]
    fn noop_inspector_touches_nothing() {
        let (mut tree, _, wide) = sample_tree();
        let layout = flow(&tree, 39);
        let mut inspector = NoopInspector;
        inspector.after_commit(&mut tree, &layout, 40, &Route::Home);
        assert!(tree.get(wide).unwrap().outline.is_none());
    }
}

#![forbid(unsafe_code)]

//! Persistent chrome: navbar, compact menu overlay, and footer.
//!
//! Chrome subtrees are built once and survive navigation; only their
//! styling changes (the active nav link tracks the current route). The
//! menu overlay is the exception: it is inserted and removed as it is
//! toggled, and its links close it again through a follow-up message on
//! activation.

use crate::content::SiteContent;
use crate::routes::Route;
use crate::theme::Theme;
use folio_render::element::{Element, ElementId, ElementKind, ElementTree, Sizing};

/// Ids for the persistent chrome plus menu-overlay state.
#[derive(Debug)]
pub struct Chrome {
    navbar: ElementId,
    footer: ElementId,
    nav_links: Vec<(ElementId, Route)>,
    menu: Option<ElementId>,
    menu_links: Vec<(ElementId, Route)>,
}

impl Chrome {
    /// Build navbar, the (empty) main region, and footer under the root.
    ///
    /// Returns the chrome and the main region's id; pages build into the
    /// latter.
    pub fn build(
        tree: &mut ElementTree,
        theme: &Theme,
        content: &'static SiteContent,
    ) -> (Chrome, ElementId) {
        let root = tree.root();
        let profile = &content.profile;

        let navbar = tree.insert(root, Element::new(ElementKind::Section));
        let bar = tree.insert(navbar, Element::new(ElementKind::Row));
        tree.insert(
            bar,
            Element::new(ElementKind::Link { href: "/".into() })
                .text(profile.brand)
                .style(theme.brand)
                .sizing(Sizing::Content),
        );
        let mut nav_links = Vec::new();
        for route in Route::NAV {
            let id = tree.insert(
                bar,
                Element::new(ElementKind::Link {
                    href: route.path().to_string(),
                })
                .text(route.title())
                .style(theme.nav_idle)
                .sizing(Sizing::Content),
            );
            nav_links.push((id, route.clone()));
        }
        tree.insert(navbar, Element::new(ElementKind::Divider).style(theme.rule));

        let main = tree.insert(root, Element::new(ElementKind::Section));

        let footer = tree.insert(root, Element::new(ElementKind::Section));
        tree.insert(footer, Element::new(ElementKind::Divider).style(theme.rule));
        tree.insert(
            footer,
            Element::new(ElementKind::Heading)
                .text(profile.name)
                .style(theme.heading),
        );
        tree.insert(
            footer,
            Element::new(ElementKind::Text)
                .text(profile.blurb)
                .style(theme.dim),
        );
        let contact_row = tree.insert(footer, Element::new(ElementKind::Row));
        tree.insert(
            contact_row,
            Element::new(ElementKind::Link {
                href: format!("mailto:{}", profile.email),
            })
            .text(profile.email)
            .style(theme.link)
            .sizing(Sizing::Content),
        );
        tree.insert(
            contact_row,
            Element::new(ElementKind::Link {
                href: format!("tel:{}", profile.phone.replace(' ', "")),
            })
            .text(profile.phone)
            .style(theme.link)
            .sizing(Sizing::Content),
        );
        let social_row = tree.insert(footer, Element::new(ElementKind::Row));
        tree.insert(
            social_row,
            Element::new(ElementKind::Link {
                href: profile.github.to_string(),
            })
            .text("GitHub")
            .style(theme.link)
            .sizing(Sizing::Content),
        );
        tree.insert(
            social_row,
            Element::new(ElementKind::Link {
                href: profile.linkedin.to_string(),
            })
            .text("LinkedIn")
            .style(theme.link)
            .sizing(Sizing::Content),
        );
        tree.insert(
            footer,
            Element::new(ElementKind::Text)
                .text(format!("© 2026 {}. All rights reserved.", profile.name))
                .style(theme.dim),
        );

        (
            Chrome {
                navbar,
                footer,
                nav_links,
                menu: None,
                menu_links: Vec::new(),
            },
            main,
        )
    }

    /// Sync nav link styling with the current route.
    ///
    /// An unmatched route simply leaves no link active.
    pub fn set_active(&self, tree: &mut ElementTree, theme: &Theme, current: &Route) {
        let links = self.nav_links.iter().chain(self.menu_links.iter());
        for (id, route) in links {
            if let Some(el) = tree.get_mut(*id) {
                el.style = if route == current {
                    theme.nav_active
                } else {
                    theme.nav_idle
                };
            }
        }
    }

    /// Whether the menu overlay is open.
    #[must_use]
    pub fn menu_open(&self) -> bool {
        self.menu.is_some()
    }

    /// Toggle the menu overlay.
    pub fn toggle_menu(&mut self, tree: &mut ElementTree, theme: &Theme, current: &Route) {
        if self.menu.is_some() {
            self.close_menu(tree);
        } else {
            self.open_menu(tree, theme, current);
        }
    }

    fn open_menu(&mut self, tree: &mut ElementTree, theme: &Theme, current: &Route) {
        let menu = tree.insert(
            self.navbar,
            Element::new(ElementKind::Section)
                .boxed()
                .style(theme.card),
        );
        for route in Route::NAV {
            let id = tree.insert(
                menu,
                Element::new(ElementKind::Link {
                    href: route.path().to_string(),
                })
                .text(route.title())
                .style(theme.nav_idle)
                .sizing(Sizing::Content),
            );
            self.menu_links.push((id, route.clone()));
        }
        self.menu = Some(menu);
        self.set_active(tree, theme, current);
    }

    /// Close the menu overlay. Idempotent.
    pub fn close_menu(&mut self, tree: &mut ElementTree) {
        if let Some(menu) = self.menu.take() {
            tree.remove_subtree(menu);
        }
        self.menu_links.clear();
    }

    /// Whether an element is a link inside the menu overlay.
    #[must_use]
    pub fn is_menu_link(&self, id: ElementId) -> bool {
        self.menu_links.iter().any(|(link, _)| *link == id)
    }

    /// The navbar subtree root.
    #[must_use]
    pub fn navbar(&self) -> ElementId {
        self.navbar
    }

    /// The footer subtree root.
    #[must_use]
    pub fn footer(&self) -> ElementId {
        self.footer
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content;
    use folio_render::element::ElementTree;

    fn built() -> (ElementTree, Chrome, ElementId, Theme) {
        let mut tree = ElementTree::new();
        let theme = Theme::default();
        let (chrome, main) = Chrome::build(&mut tree, &theme, content::site());
        (tree, chrome, main, theme)
    }

    #[test]
    fn chrome_orders_navbar_main_footer() {
        let (tree, chrome, main, _) = built();
        let root_children = tree.get(tree.root()).unwrap().children().to_vec();
        assert_eq!(root_children, vec![chrome.navbar(), main, chrome.footer()]);
    }

    #[test]
    fn active_link_tracks_route() {
        let (mut tree, chrome, _, theme) = built();
        chrome.set_active(&mut tree, &theme, &Route::Projects);
        for (id, route) in &chrome.nav_links {
            let style = tree.get(*id).unwrap().style;
            if *route == Route::Projects {
                assert_eq!(style, theme.nav_active);
            } else {
                assert_eq!(style, theme.nav_idle);
            }
        }
    }

    #[test]
    fn unmatched_route_leaves_no_link_active() {
        let (mut tree, chrome, _, theme) = built();
        chrome.set_active(&mut tree, &theme, &Route::Other("/nope".into()));
        for (id, _) in &chrome.nav_links {
            assert_eq!(tree.get(*id).unwrap().style, theme.nav_idle);
        }
    }

    #[test]
    fn menu_toggle_builds_and_removes_links() {
        let (mut tree, mut chrome, _, theme) = built();
        assert!(!chrome.menu_open());

        chrome.toggle_menu(&mut tree, &theme, &Route::Home);
        assert!(chrome.menu_open());
        assert_eq!(chrome.menu_links.len(), Route::NAV.len());
        let (first_link, _) = chrome.menu_links[0];
        assert!(chrome.is_menu_link(first_link));

        chrome.toggle_menu(&mut tree, &theme, &Route::Home);
        assert!(!chrome.menu_open());
        assert!(tree.get(first_link).is_none());
        assert!(!chrome.is_menu_link(first_link));
    }

    #[test]
    fn close_menu_is_idempotent() {
        let (mut tree, mut chrome, _, _) = built();
        chrome.close_menu(&mut tree);
        chrome.close_menu(&mut tree);
        assert!(!chrome.menu_open());
    }
}

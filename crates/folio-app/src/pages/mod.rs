#![forbid(unsafe_code)]

//! Page selection and the four page builders.

pub mod about;
pub mod contact;
pub mod home;
pub mod projects;

use crate::content::SiteContent;
use crate::routes::Route;
use crate::theme::Theme;
use folio_render::element::{ElementId, ElementTree};

/// Builds one page's subtree under the main region.
pub type PageBuilder = fn(&mut ElementTree, ElementId, &Theme, &'static SiteContent);

/// Map a route to its page builder.
///
/// Pure and total: exactly one builder per known route, `None` for
/// everything else. An unmatched route renders an empty main region;
/// no error, no fallback page. All side effects (scroll, diagnostics)
/// belong to the caller.
#[must_use]
pub fn select(route: &Route) -> Option<PageBuilder> {
    match route {
        Route::Home => Some(home::build),
        Route::About => Some(about::build),
        Route::Projects => Some(projects::build),
        Route::Contact => Some(contact::build),
        Route::Other(_) => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content;

    #[test]
    fn every_known_route_selects_a_builder() {
        for route in Route::NAV {
            assert!(select(&route).is_some(), "no builder for {route:?}");
        }
    }

    #[test]
    fn unmatched_route_selects_nothing() {
        assert!(select(&Route::Other("/nope".into())).is_none());
        assert!(select(&Route::Other(String::new())).is_none());
    }

    #[test]
    fn builders_populate_the_main_region() {
        for route in Route::NAV {
            let mut tree = ElementTree::new();
            let root = tree.root();
            let main = tree.insert(
                root,
                folio_render::element::Element::new(folio_render::element::ElementKind::Section),
            );
            let build = select(&route).unwrap();
            build(&mut tree, main, &Theme::default(), content::site());
            assert!(
                !tree.get(main).unwrap().children().is_empty(),
                "{route:?} built nothing"
            );
        }
    }
}

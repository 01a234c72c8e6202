#![forbid(unsafe_code)]

//! Route keys and fragment derivation.

/// The page a fragment addresses.
///
/// Any fragment outside the four known paths is a legal value that
/// renders an empty page body; it is carried verbatim in [`Route::Other`]
/// rather than rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Home,
    About,
    Projects,
    Contact,
    Other(String),
}

impl Route {
    /// Navigation order for the navbar.
    pub const NAV: [Route; 4] = [Route::Home, Route::About, Route::Projects, Route::Contact];

    /// Derive the route from a fragment.
    ///
    /// Deterministic and total: the empty fragment normalizes to the root
    /// path, the four known paths map to their pages, and everything else
    /// becomes [`Route::Other`].
    #[must_use]
    pub fn from_fragment(fragment: &str) -> Route {
        match fragment {
            "" | "/" => Route::Home,
            "/about" => Route::About,
            "/projects" => Route::Projects,
            "/contact" => Route::Contact,
            other => Route::Other(other.to_string()),
        }
    }

    /// The canonical fragment for this route.
    #[must_use]
    pub fn path(&self) -> &str {
        match self {
            Route::Home => "/",
            Route::About => "/about",
            Route::Projects => "/projects",
            Route::Contact => "/contact",
            Route::Other(path) => path,
        }
    }

    /// Navbar label.
    #[must_use]
    pub fn title(&self) -> &str {
        match self {
            Route::Home => "Home",
            Route::About => "About",
            Route::Projects => "Projects",
            Route::Contact => "Contact",
            Route::Other(_) => "",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Route;
    use proptest::prelude::*;

    #[test]
    fn known_fragments_map_to_pages() {
        assert_eq!(Route::from_fragment("/"), Route::Home);
        assert_eq!(Route::from_fragment("/about"), Route::About);
        assert_eq!(Route::from_fragment("/projects"), Route::Projects);
        assert_eq!(Route::from_fragment("/contact"), Route::Contact);
    }

    #[test]
    fn empty_fragment_normalizes_to_root() {
        assert_eq!(Route::from_fragment(""), Route::Home);
    }

    #[test]
    fn unknown_fragment_is_carried_verbatim() {
        assert_eq!(
            Route::from_fragment("/nope"),
            Route::Other("/nope".to_string())
        );
        // close-but-not-equal paths are not fuzzily matched
        assert_eq!(
            Route::from_fragment("/About"),
            Route::Other("/About".to_string())
        );
        assert_eq!(
            Route::from_fragment("/about/"),
            Route::Other("/about/".to_string())
        );
    }

    #[test]
    fn nav_paths_roundtrip() {
        for route in Route::NAV {
            assert_eq!(Route::from_fragment(route.path()), route);
        }
    }

    proptest! {
        #[test]
        fn derivation_is_deterministic(fragment in ".*") {
            prop_assert_eq!(
                Route::from_fragment(&fragment),
                Route::from_fragment(&fragment)
            );
        }

        #[test]
        fn unknown_fragments_keep_their_text(fragment in "/[a-z]{5,12}") {
            prop_assume!(!matches!(
                fragment.as_str(),
                "/about" | "/projects" | "/contact"
            ));
            match Route::from_fragment(&fragment) {
                Route::Other(path) => prop_assert_eq!(path, fragment),
                other => prop_assert!(false, "expected Other, got {:?}", other),
            }
        }
    }
}

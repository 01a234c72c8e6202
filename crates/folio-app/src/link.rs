#![forbid(unsafe_code)]

//! Link activation.
//!
//! Activating a route link rewrites the fragment and nothing else: the
//! route state updates later, when the location delivers the change signal
//! to the router. That keeps a single write path to navigation state no
//! matter where the activation came from (mouse, keyboard accelerator,
//! menu overlay).
//!
//! The optional follow-up message runs synchronously after the fragment
//! write and before the signal is delivered: the command batch executes
//! in order and signal delivery waits for the current event to finish.

use crate::app::Msg;
use crate::routes::Route;
use folio_core::logging::info;
use folio_runtime::program::Cmd;

/// Where a link points.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LinkTarget {
    /// An in-app route.
    Route(Route),
    /// An external target (https:, mailto:, tel:, or an asset path),
    /// passed through opaquely.
    External(String),
}

impl LinkTarget {
    /// Classify an href. Fragment-shaped hrefs (`/...` or empty) become
    /// routes; everything else is external.
    #[must_use]
    pub fn from_href(href: &str) -> Self {
        if href.is_empty() || href.starts_with('/') {
            LinkTarget::Route(Route::from_fragment(href))
        } else {
            LinkTarget::External(href.to_string())
        }
    }
}

/// Build the activation command for a link.
///
/// Route links write the target's path into the fragment, even when it
/// equals the current route; the platform fires the signal either way and
/// the re-render is idempotent. External links are not navigation: they
/// are logged and otherwise left to the hosting environment.
#[must_use]
pub fn activate(target: &LinkTarget, follow_up: Option<Msg>) -> Cmd<Msg> {
    match target {
        LinkTarget::Route(route) => {
            let mut cmds = vec![Cmd::write_fragment(route.path())];
            if let Some(msg) = follow_up {
                cmds.push(Cmd::msg(msg));
            }
            Cmd::batch(cmds)
        }
        LinkTarget::External(href) => {
            info!(%href, "external link activated");
            Cmd::none()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hrefs_classify_by_shape() {
        assert_eq!(
            LinkTarget::from_href("/about"),
            LinkTarget::Route(Route::About)
        );
        assert_eq!(LinkTarget::from_href(""), LinkTarget::Route(Route::Home));
        assert_eq!(
            LinkTarget::from_href("/wherever"),
            LinkTarget::Route(Route::Other("/wherever".into()))
        );
        assert_eq!(
            LinkTarget::from_href("mailto:hello@kaistrand.dev"),
            LinkTarget::External("mailto:hello@kaistrand.dev".into())
        );
        assert_eq!(
            LinkTarget::from_href("https://github.com/kaistrand"),
            LinkTarget::External("https://github.com/kaistrand".into())
        );
    }

    #[test]
    fn route_activation_writes_fragment_then_follow_up() {
        let cmd = activate(&LinkTarget::Route(Route::Projects), Some(Msg::MenuClose));
        match cmd {
            Cmd::Batch(cmds) => {
                assert_eq!(cmds.len(), 2);
                assert!(matches!(&cmds[0], Cmd::WriteFragment(f) if f == "/projects"));
                assert!(matches!(&cmds[1], Cmd::Msg(Msg::MenuClose)));
            }
            _ => panic!("expected a batch"),
        }
    }

    #[test]
    fn route_activation_without_follow_up() {
        let cmd = activate(&LinkTarget::Route(Route::Home), None);
        match cmd {
            Cmd::Batch(cmds) => {
                assert_eq!(cmds.len(), 1);
                assert!(matches!(&cmds[0], Cmd::WriteFragment(f) if f == "/"));
            }
            _ => panic!("expected a batch"),
        }
    }

    #[test]
    fn external_activation_is_a_noop_command() {
        let cmd = activate(
            &LinkTarget::External("https://example.com".into()),
            Some(Msg::MenuClose),
        );
        assert!(matches!(cmd, Cmd::None));
    }
}

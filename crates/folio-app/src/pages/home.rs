#![forbid(unsafe_code)]

//! Home page: hero, calls to action, and a deliberately wide banner.

use crate::content::SiteContent;
use crate::theme::Theme;
use folio_render::element::{Element, ElementId, ElementKind, ElementTree, Sizing};

/// Width of the decorative hero rule. Wider than most terminals on
/// purpose; the overflow inspector is expected to notice it.
const BANNER_WIDTH: u16 = 96;

pub fn build(tree: &mut ElementTree, main: ElementId, theme: &Theme, content: &'static SiteContent) {
    let profile = &content.profile;

    tree.insert(main, Element::new(ElementKind::Spacer));
    tree.insert(
        main,
        Element::new(ElementKind::Heading)
            .text(profile.name)
            .style(theme.title),
    );
    tree.insert(
        main,
        Element::new(ElementKind::Text)
            .text(profile.tagline)
            .style(theme.text),
    );
    tree.insert(
        main,
        Element::new(ElementKind::Text)
            .text(profile.blurb)
            .style(theme.dim),
    );
    tree.insert(main, Element::new(ElementKind::Spacer));

    let cta = tree.insert(main, Element::new(ElementKind::Row));
    tree.insert(
        cta,
        Element::new(ElementKind::Link {
            href: "/projects".into(),
        })
        .text("View Projects")
        .style(theme.accent)
        .sizing(Sizing::Content),
    );
    tree.insert(
        cta,
        Element::new(ElementKind::Link {
            href: "/contact".into(),
        })
        .text("Contact Me")
        .style(theme.accent_alt)
        .sizing(Sizing::Content),
    );

    tree.insert(main, Element::new(ElementKind::Spacer));
    let hire = tree.insert(main, Element::new(ElementKind::Row));
    tree.insert(
        hire,
        Element::new(ElementKind::Link {
            href: profile.resume.to_string(),
        })
        .text("Hire Me (résumé)")
        .style(theme.link)
        .sizing(Sizing::Content),
    );
    tree.insert(
        hire,
        Element::new(ElementKind::Button)
            .text("Not Hire Me")
            .style(theme.dim)
            .sizing(Sizing::Content),
    );

    tree.insert(main, Element::new(ElementKind::Spacer));
    tree.insert(
        main,
        Element::new(ElementKind::Divider)
            .sizing(Sizing::Fixed(BANNER_WIDTH))
            .style(theme.rule),
    );
}

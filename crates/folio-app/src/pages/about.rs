#![forbid(unsafe_code)]

//! About page: paragraphs, skill cards, portrait reference.

use crate::content::SiteContent;
use crate::theme::Theme;
use folio_render::element::{Element, ElementId, ElementKind, ElementTree, Sizing};

pub fn build(tree: &mut ElementTree, main: ElementId, theme: &Theme, content: &'static SiteContent) {
    tree.insert(main, Element::new(ElementKind::Spacer));
    tree.insert(
        main,
        Element::new(ElementKind::Heading)
            .text("About Me")
            .style(theme.title),
    );
    tree.insert(main, Element::new(ElementKind::Spacer));

    for paragraph in content.about {
        tree.insert(
            main,
            Element::new(ElementKind::Text)
                .text(*paragraph)
                .style(theme.text),
        );
        tree.insert(main, Element::new(ElementKind::Spacer));
    }

    for card in content.skill_cards {
        let section = tree.insert(
            main,
            Element::new(ElementKind::Section).boxed().style(theme.card),
        );
        tree.insert(
            section,
            Element::new(ElementKind::Heading)
                .text(card.title)
                .style(theme.accent),
        );
        tree.insert(
            section,
            Element::new(ElementKind::Text)
                .text(card.skills)
                .style(theme.text),
        );
        tree.insert(main, Element::new(ElementKind::Spacer));
    }

    tree.insert(
        main,
        Element::new(ElementKind::Image {
            src: content.profile.portrait.to_string(),
        })
        .sizing(Sizing::Fixed(28))
        .style(theme.dim),
    );
}

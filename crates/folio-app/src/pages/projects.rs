#![forbid(unsafe_code)]

//! Projects page: two groups of project cards.

use crate::content::{Project, SiteContent};
use crate::theme::Theme;
use folio_render::element::{Element, ElementId, ElementKind, ElementTree, Sizing};

pub fn build(tree: &mut ElementTree, main: ElementId, theme: &Theme, content: &'static SiteContent) {
    tree.insert(main, Element::new(ElementKind::Spacer));
    tree.insert(
        main,
        Element::new(ElementKind::Heading)
            .text("Projects")
            .style(theme.title),
    );
    tree.insert(main, Element::new(ElementKind::Spacer));
    group(tree, main, theme, content.systems_projects);

    tree.insert(main, Element::new(ElementKind::Divider).style(theme.rule));
    tree.insert(main, Element::new(ElementKind::Spacer));
    tree.insert(
        main,
        Element::new(ElementKind::Heading)
            .text("Web Projects")
            .style(theme.accent_alt),
    );
    tree.insert(main, Element::new(ElementKind::Spacer));
    group(tree, main, theme, content.web_projects);
}

fn group(tree: &mut ElementTree, main: ElementId, theme: &Theme, projects: &[Project]) {
    for project in projects {
        let card = tree.insert(
            main,
            Element::new(ElementKind::Section).boxed().style(theme.card),
        );
        tree.insert(
            card,
            Element::new(ElementKind::Heading)
                .text(project.title)
                .style(theme.heading),
        );
        tree.insert(
            card,
            Element::new(ElementKind::Text)
                .text(project.description)
                .style(theme.text),
        );

        let tags = tree.insert(card, Element::new(ElementKind::Row));
        for tech in project.tech {
            tree.insert(
                tags,
                Element::new(ElementKind::Tag).text(*tech).style(theme.tag),
            );
        }

        let links = tree.insert(card, Element::new(ElementKind::Row));
        tree.insert(
            links,
            Element::new(ElementKind::Link {
                href: project.live.to_string(),
            })
            .text("Live Demo")
            .style(theme.link)
            .sizing(Sizing::Content),
        );
        tree.insert(
            links,
            Element::new(ElementKind::Link {
                href: project.source.to_string(),
            })
            .text("Source")
            .style(theme.link)
            .sizing(Sizing::Content),
        );

        tree.insert(main, Element::new(ElementKind::Spacer));
    }
}

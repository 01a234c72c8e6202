#![forbid(unsafe_code)]

//! Contact page: info cards, social links, and a form placeholder.
//!
//! The form is markup only. Its button does nothing and is meant to do
//! nothing; there is no submission or validation path behind it.

use crate::content::SiteContent;
use crate::theme::Theme;
use folio_render::element::{Element, ElementId, ElementKind, ElementTree, Sizing};

pub fn build(tree: &mut ElementTree, main: ElementId, theme: &Theme, content: &'static SiteContent) {
    let profile = &content.profile;

    tree.insert(main, Element::new(ElementKind::Spacer));
    tree.insert(
        main,
        Element::new(ElementKind::Heading)
            .text("Get In Touch")
            .style(theme.title),
    );
    tree.insert(main, Element::new(ElementKind::Spacer));

    tree.insert(
        main,
        Element::new(ElementKind::Heading)
            .text("Contact Information")
            .style(theme.heading),
    );
    let email_card = tree.insert(
        main,
        Element::new(ElementKind::Section).boxed().style(theme.card),
    );
    tree.insert(
        email_card,
        Element::new(ElementKind::Heading)
            .text("Email")
            .style(theme.accent),
    );
    tree.insert(
        email_card,
        Element::new(ElementKind::Link {
            href: format!("mailto:{}", profile.email),
        })
        .text(profile.email)
        .style(theme.link)
        .sizing(Sizing::Content),
    );
    let phone_card = tree.insert(
        main,
        Element::new(ElementKind::Section).boxed().style(theme.card),
    );
    tree.insert(
        phone_card,
        Element::new(ElementKind::Heading)
            .text("Phone")
            .style(theme.accent_alt),
    );
    tree.insert(
        phone_card,
        Element::new(ElementKind::Link {
            href: format!("tel:{}", profile.phone.replace(' ', "")),
        })
        .text(profile.phone)
        .style(theme.link)
        .sizing(Sizing::Content),
    );

    tree.insert(main, Element::new(ElementKind::Spacer));
    tree.insert(
        main,
        Element::new(ElementKind::Heading)
            .text("Social Links")
            .style(theme.heading),
    );
    let social = tree.insert(main, Element::new(ElementKind::Row));
    tree.insert(
        social,
        Element::new(ElementKind::Link {
            href: profile.github.to_string(),
        })
        .text("GitHub")
        .style(theme.link)
        .sizing(Sizing::Content),
    );
    tree.insert(
        social,
        Element::new(ElementKind::Link {
            href: profile.linkedin.to_string(),
        })
        .text("LinkedIn")
        .style(theme.link)
        .sizing(Sizing::Content),
    );

    tree.insert(main, Element::new(ElementKind::Spacer));
    tree.insert(
        main,
        Element::new(ElementKind::Heading)
            .text("Send a Message")
            .style(theme.heading),
    );
    tree.insert(
        main,
        Element::new(ElementKind::Field)
            .text("Name")
            .style(theme.text),
    );
    tree.insert(
        main,
        Element::new(ElementKind::Field)
            .text("Email")
            .style(theme.text),
    );
    tree.insert(
        main,
        Element::new(ElementKind::Field)
            .text("Message")
            .style(theme.text),
    );
    tree.insert(main, Element::new(ElementKind::Spacer));
    tree.insert(
        main,
        Element::new(ElementKind::Button)
            .text("Send Message")
            .style(theme.accent)
            .sizing(Sizing::Content),
    );
}

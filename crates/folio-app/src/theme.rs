#![forbid(unsafe_code)]

//! Semantic style slots for the portfolio.

use folio_render::style::{Color, Style};

/// Styles by role rather than by page, so pages stay consistent.
#[derive(Debug, Clone)]
pub struct Theme {
    /// Page titles.
    pub title: Style,
    /// Card and section headings.
    pub heading: Style,
    /// Body text.
    pub text: Style,
    /// De-emphasized text.
    pub dim: Style,
    /// Primary accent (CTAs, highlights).
    pub accent: Style,
    /// Secondary accent.
    pub accent_alt: Style,
    /// Navbar link, current route.
    pub nav_active: Style,
    /// Navbar link, other routes.
    pub nav_idle: Style,
    /// Brand mark in the navbar.
    pub brand: Style,
    /// In-page and outbound links.
    pub link: Style,
    /// Tech tags.
    pub tag: Style,
    /// Card borders.
    pub card: Style,
    /// Decorative rules and banners.
    pub rule: Style,
}

impl Default for Theme {
    fn default() -> Self {
        let ink = Color::rgb(226, 228, 235);
        let faint = Color::rgb(130, 135, 150);
        let teal = Color::rgb(94, 234, 212);
        let violet = Color::rgb(167, 139, 250);
        Self {
            title: Style::new().fg(teal).bold(),
            heading: Style::new().fg(ink).bold(),
            text: Style::new().fg(ink),
            dim: Style::new().fg(faint),
            accent: Style::new().fg(teal),
            accent_alt: Style::new().fg(violet),
            nav_active: Style::new().fg(teal).bold().underline(),
            nav_idle: Style::new().fg(faint),
            brand: Style::new().fg(violet).bold(),
            link: Style::new().fg(teal),
            tag: Style::new().fg(violet),
            card: Style::new().fg(faint),
            rule: Style::new().fg(faint).dim(),
        }
    }
}

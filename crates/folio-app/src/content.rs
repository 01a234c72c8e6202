#![forbid(unsafe_code)]

//! Static site content.
//!
//! Everything here is plain data: the pages render it, nothing processes
//! it. Asset references (portrait, résumé) are paths passed through to the
//! environment, not files this crate opens.

/// Who the portfolio is about.
#[derive(Debug)]
pub struct Profile {
    pub name: &'static str,
    pub brand: &'static str,
    pub tagline: &'static str,
    pub blurb: &'static str,
    pub email: &'static str,
    pub phone: &'static str,
    pub github: &'static str,
    pub linkedin: &'static str,
    pub resume: &'static str,
    pub portrait: &'static str,
}

/// One portfolio project entry.
#[derive(Debug)]
pub struct Project {
    pub title: &'static str,
    pub description: &'static str,
    pub tech: &'static [&'static str],
    pub live: &'static str,
    pub source: &'static str,
}

/// A titled skill card on the about page.
#[derive(Debug)]
pub struct SkillCard {
    pub title: &'static str,
    pub skills: &'static str,
}

/// The whole site's data.
#[derive(Debug)]
pub struct SiteContent {
    pub profile: Profile,
    pub about: &'static [&'static str],
    pub skill_cards: &'static [SkillCard],
    pub systems_projects: &'static [Project],
    pub web_projects: &'static [Project],
}

/// The site content.
#[must_use]
pub fn site() -> &'static SiteContent {
    &SITE
}

static SITE: SiteContent = SiteContent {
    profile: Profile {
        name: "Kai Strand",
        brand: "K·S",
        tagline: "Systems developer building fast, reliable services and the tools around them",
        blurb: "Focused on performance, correctness, and software that stays pleasant to operate",
        email: "hello@kaistrand.dev",
        phone: "+1 503 555 0164",
        github: "https://github.com/kaistrand",
        linkedin: "https://www.linkedin.com/in/kai-strand/",
        resume: "KAI_STRAND_resume.pdf",
        portrait: "kai.jpeg",
    },
    about: &[
        "I'm a systems developer who likes the unglamorous parts: the state \
         machines, the failure paths, the places where a program meets the \
         real world and has to keep its promises.",
        "Most of my work lives on the backend: network services, storage \
         plumbing, and the observability that makes both debuggable. I care \
         about designs with one obvious owner for every piece of state and \
         no surprises at teardown.",
        "That backend bias is balanced by enough frontend work to ship \
         complete things: dashboards, internal tools, and the occasional \
         terminal UI when a browser is more than the job needs.",
        "I learn in public, keep my tools sharp, and write the docs I wish \
         I had found. If a project page here links to source, the history \
         is honest.",
    ],
    skill_cards: &[
        SkillCard {
            title: "Backend",
            skills: "Rust, Tokio, Axum, PostgreSQL, Redis",
        },
        SkillCard {
            title: "Frontend & Tooling",
            skills: "TypeScript, React, WASM, Tailwind",
        },
    ],
    systems_projects: &[
        Project {
            title: "Ledgerline",
            description: "An expense-tracking service with categorized spending, budget \
                          planning, and streaming analytics over an append-only ledger. \
                          Secure sessions, per-user budgets, and chart-ready rollups \
                          computed incrementally instead of on demand.",
            tech: &["Rust", "Axum", "PostgreSQL", "React"],
            live: "https://ledgerline.kaistrand.dev",
            source: "https://github.com/kaistrand/ledgerline",
        },
        Project {
            title: "Hirelight",
            description: "A résumé screening API that scores documents against role \
                          profiles: skill extraction, gap reports, and formatting checks \
                          behind a stable REST surface, with a small React front end for \
                          reviewing structured feedback.",
            tech: &["Rust", "Axum", "REST API", "React"],
            live: "https://hirelight.kaistrand.dev",
            source: "https://github.com/kaistrand/hirelight",
        },
        Project {
            title: "Relay",
            description: "A real-time messaging server over WebSockets with presence, \
                          persistent history, and backpressure-aware fan-out. Built to \
                          stay responsive under slow consumers rather than fast ones.",
            tech: &["Rust", "Tokio", "WebSocket"],
            live: "#",
            source: "#",
        },
    ],
    web_projects: &[
        Project {
            title: "Cinescope",
            description: "A movie search front end over a third-party catalog API: \
                          debounced search, a detail view, and response caching tuned so \
                          the UI never blocks on the network.",
            tech: &["React", "TypeScript", "API Integration", "CSS"],
            live: "https://cinescope.kaistrand.dev",
            source: "https://github.com/kaistrand/cinescope",
        },
        Project {
            title: "Notewell",
            description: "A notes app with quick capture, tag-based organization, and \
                          an editor that autosaves without ever eating a keystroke. \
                          Small, fast, and deliberately boring.",
            tech: &["React", "TypeScript", "CSS"],
            live: "https://notewell.kaistrand.dev",
            source: "https://github.com/kaistrand/notewell",
        },
        Project {
            title: "Skycast",
            description: "A weather front end with current conditions and a five-day \
                          forecast, laid out to stay readable from phone widths up to \
                          ultrawide monitors.",
            tech: &["React", "TypeScript", "API Integration", "CSS"],
            live: "#",
            source: "#",
        },
    ],
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn project_groups_hold_three_entries_each() {
        let content = site();
        assert_eq!(content.systems_projects.len(), 3);
        assert_eq!(content.web_projects.len(), 3);
    }

    #[test]
    fn every_project_is_fully_described() {
        let content = site();
        for project in content
            .systems_projects
            .iter()
            .chain(content.web_projects.iter())
        {
            assert!(!project.title.is_empty());
            assert!(!project.description.is_empty());
            assert!(!project.tech.is_empty());
            assert!(!project.live.is_empty());
            assert!(!project.source.is_empty());
        }
    }
}

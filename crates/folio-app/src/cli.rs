#![forbid(unsafe_code)]

//! Command-line argument parsing.
//!
//! Parses args manually (no external dependencies) to keep the binary
//! lean. Environment variables with the `FOLIO_` prefix provide defaults;
//! flags win over them.

use std::env;
use std::process;

const VERSION: &str = env!("CARGO_PKG_VERSION");

const HELP_TEXT: &str = "\
folio, a terminal portfolio

USAGE:
    folio [OPTIONS]

OPTIONS:
    --route=PATH           Start on the page addressed by PATH (default: /)
    --no-overflow-debug    Disable the layout-overflow inspector
    --help, -h             Show this help message
    --version, -V          Show version

PAGES:
    /            Home
    /about       About
    /projects    Projects
    /contact     Contact

KEYBINDINGS:
    1-4             Open a page
    m               Toggle the menu overlay
    Esc             Close the menu overlay
    Up / Down       Scroll one row
    PgUp / PgDn     Scroll one screen
    Home / End      Jump to top / bottom
    q / Ctrl+C      Quit

ENVIRONMENT VARIABLES:
    FOLIO_ROUTE             Override --route
    FOLIO_OVERFLOW_DEBUG    Set to 0/false/off to disable the inspector
    FOLIO_LOG               tracing env-filter for stderr logs";

/// What a parse decided.
#[derive(Debug, PartialEq, Eq)]
pub enum Action {
    /// Run with the accumulated options.
    Run,
    /// Print help and exit.
    Help,
    /// Print the version and exit.
    Version,
}

/// Parsed command-line options.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Opts {
    /// Initial fragment.
    pub route: String,
    /// Whether the overflow inspector is wired in.
    pub overflow_debug: bool,
}

impl Default for Opts {
    fn default() -> Self {
        Self {
            route: "/".to_string(),
            overflow_debug: true,
        }
    }
}

impl Opts {
    /// Parse the process arguments, exiting on help/version/errors.
    #[must_use]
    pub fn parse() -> Opts {
        let mut opts = Opts::default();
        opts.apply_env();
        match opts.apply_args(env::args().skip(1)) {
            Ok(Action::Run) => opts,
            Ok(Action::Help) => {
                println!("{HELP_TEXT}");
                process::exit(0);
            }
            Ok(Action::Version) => {
                println!("folio {VERSION}");
                process::exit(0);
            }
            Err(msg) => {
                eprintln!("{msg}");
                eprintln!("Try --help.");
                process::exit(2);
            }
        }
    }

    fn apply_env(&mut self) {
        if let Ok(route) = env::var("FOLIO_ROUTE") {
            self.route = route;
        }
        if let Ok(v) = env::var("FOLIO_OVERFLOW_DEBUG") {
            self.overflow_debug = !matches!(v.as_str(), "0" | "false" | "off");
        }
    }

    /// Fold flags into the options. Returns what to do next.
    fn apply_args(&mut self, args: impl Iterator<Item = String>) -> Result<Action, String> {
        for arg in args {
            if let Some(route) = arg.strip_prefix("--route=") {
                self.route = route.to_string();
            } else if arg == "--no-overflow-debug" {
                self.overflow_debug = false;
            } else if arg == "--help" || arg == "-h" {
                return Ok(Action::Help);
            } else if arg == "--version" || arg == "-V" {
                return Ok(Action::Version);
            } else {
                return Err(format!("unknown option: {arg}"));
            }
        }
        Ok(Action::Run)
    }
}

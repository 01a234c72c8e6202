#![forbid(unsafe_code)]

//! folio binary entry point.

use folio_app::app::PortfolioApp;
use folio_app::cli;
use folio_runtime::location::Location;
use folio_runtime::program::Program;
use folio_runtime::terminal::{self, TerminalSession};

fn main() {
    let opts = cli::Opts::parse();
    init_logging();

    let (width, height) = TerminalSession::size().unwrap_or((80, 24));
    let mut location = Location::new(&opts.route);
    let app = PortfolioApp::new(&mut location, opts.overflow_debug, width, height);
    let mut program = Program::new(app, location, width, height);

    if let Err(e) = terminal::run(&mut program) {
        eprintln!("Runtime error: {e}");
        std::process::exit(1);
    }
    program.model_mut().teardown();
}

/// Stderr logging, enabled only when `FOLIO_LOG` is set (it doubles as
/// the filter, e.g. `FOLIO_LOG=folio_app=debug`).
fn init_logging() {
    if std::env::var_os("FOLIO_LOG").is_some() {
        use tracing_subscriber::EnvFilter;
        tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::from_env("FOLIO_LOG"))
            .with_writer(std::io::stderr)
            .init();
    }
}

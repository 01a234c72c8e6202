//! Overflow-diagnostic hygiene across navigation cycles.
//!
//! The inspector may only ever decorate the current commit: whatever it
//! flagged before must be restored before the next render commits, no
//! matter how the cycles are sequenced.

use folio_app::app::PortfolioApp;
use folio_runtime::headless::Harness;
use folio_runtime::location::Location;

/// Narrow enough that the home banner (96 cells) overflows.
const NARROW: u16 = 60;

fn harness(fragment: &str, overflow_debug: bool) -> Harness<PortfolioApp> {
    let mut location = Location::new(fragment);
    let app = PortfolioApp::new(&mut location, overflow_debug, NARROW, 24);
    Harness::new(app, location, NARROW, 24)
}

#[test]
fn home_flags_overflow_on_narrow_viewports() {
    let mut h = harness("/", true);
    assert!(h.model().outlined_elements() > 0);
    // the flag actually reaches the screen as restyled cells
    h.screen();
}

#[test]
fn disabled_route_restores_every_outline_before_commit() {
    let mut h = harness("/", true);
    assert!(h.model().outlined_elements() > 0);

    h.set_fragment("/about");
    assert_eq!(h.model().outlined_elements(), 0);
}

#[test]
fn navigate_navigate_cycles_do_not_accumulate() {
    let mut h = harness("/", true);
    let baseline = h.model().outlined_elements();
    assert!(baseline > 0);

    for _ in 0..2 {
        h.set_fragment("/about");
        assert_eq!(h.model().outlined_elements(), 0);
        h.set_fragment("/");
        assert_eq!(h.model().outlined_elements(), baseline);
    }
}

#[test]
fn same_route_recommit_keeps_a_single_flag_set() {
    let mut h = harness("/", true);
    let baseline = h.model().outlined_elements();
    h.set_fragment("/");
    assert_eq!(h.model().outlined_elements(), baseline);
}

#[test]
fn contact_is_enabled_but_clean_layouts_flag_nothing() {
    let mut h = harness("/contact", true);
    assert_eq!(h.model().outlined_elements(), 0);
    h.screen();
}

#[test]
fn disabled_inspector_never_flags() {
    let mut h = harness("/", false);
    assert_eq!(h.model().outlined_elements(), 0);
    h.set_fragment("/contact");
    h.set_fragment("/");
    assert_eq!(h.model().outlined_elements(), 0);
}

#[test]
fn wide_viewport_flags_nothing_on_home() {
    let mut location = Location::new("/");
    let app = PortfolioApp::new(&mut location, true, 120, 24);
    let h = Harness::new(app, location, 120, 24);
    assert_eq!(h.model().outlined_elements(), 0);
}

#[test]
fn teardown_mid_session_leaves_no_artifacts() {
    let mut h = harness("/", true);
    assert!(h.model().outlined_elements() > 0);
    h.model_mut().teardown();
    assert_eq!(h.model().outlined_elements(), 0);
}

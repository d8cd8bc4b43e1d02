// Host-side tests for navigation helpers and the preloader latch.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod nav {
    include!("../src/core/nav.rs");
}
mod preloader {
    include!("../src/core/preloader.rs");
}

use nav::*;
use preloader::*;

#[test]
fn preloader_hides_exactly_once() {
    let mut p = Preloader::default();
    assert!(p.hide());
    // the slower of the two timers is a no-op
    assert!(!p.hide());
    assert!(!p.hide());
}

#[test]
fn menu_toggles_and_closes() {
    let mut m = MenuState::default();
    assert!(m.toggle());
    assert!(m.is_open());
    assert!(m.close());
    assert!(!m.is_open());
    assert!(!m.close());
    assert!(m.toggle());
    assert!(!m.toggle());
}

#[test]
fn anchor_ids_are_extracted_from_in_page_links() {
    assert_eq!(anchor_target_id("#about"), Some("about"));
    assert_eq!(anchor_target_id("#"), None);
    assert_eq!(anchor_target_id("https://example.com/#about"), None);
    assert_eq!(anchor_target_id("files/report.pdf"), None);
}

#[test]
fn nav_links_match_sections_by_href() {
    assert!(is_link_for_section(Some("#projects"), "projects"));
    assert!(!is_link_for_section(Some("#projects"), "project"));
    assert!(!is_link_for_section(Some("projects"), "projects"));
    assert!(!is_link_for_section(None, "projects"));
}

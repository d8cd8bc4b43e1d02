// Host-side tests for the cursor follower and hover transforms.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod folio_core {
    pub mod constants {
        include!("../src/core/constants.rs");
    }
    pub mod cursor {
        include!("../src/core/cursor.rs");
    }
    pub mod hover {
        include!("../src/core/hover.rs");
    }
}

use folio_core::constants::RING_EASE;
use folio_core::cursor::*;
use folio_core::hover::*;
use glam::Vec2;

fn close(a: f32, b: f32) -> bool {
    (a - b).abs() < 1e-3
}

#[test]
fn ring_covers_fixed_fraction_per_frame() {
    let mut c = CursorFollower::default();
    c.pointer_moved(100.0, 0.0);
    let first = c.step();
    assert!(close(first.x, 100.0 * RING_EASE));
    let second = c.step();
    assert!(close(second.x, 12.0 + 88.0 * RING_EASE));
    assert_eq!(second.y, 0.0);
}

#[test]
fn ring_converges_on_a_still_pointer() {
    let mut c = CursorFollower::default();
    c.pointer_moved(640.0, 360.0);
    for _ in 0..200 {
        c.step();
    }
    assert!(c.ring.distance(Vec2::new(640.0, 360.0)) < 0.01);
}

#[test]
fn ring_never_overshoots() {
    let mut c = CursorFollower::default();
    c.pointer_moved(50.0, -50.0);
    for _ in 0..100 {
        let r = c.step();
        assert!(r.x <= 50.0 && r.y >= -50.0);
    }
}

#[test]
fn expand_flag_follows_hover() {
    let mut c = CursorFollower::default();
    assert!(!c.expanded);
    c.set_expanded(true);
    assert!(c.expanded);
    c.set_expanded(false);
    assert!(!c.expanded);
}

#[test]
fn tilt_is_neutral_at_card_center() {
    let rect = ElementRect::new(0.0, 0.0, 200.0, 100.0);
    let t = Tilt::from_pointer(rect.center(), rect);
    assert!(close(t.rotate_x, 0.0));
    assert!(close(t.rotate_y, 0.0));
}

#[test]
fn tilt_scales_with_offset_from_center() {
    let rect = ElementRect::new(10.0, 20.0, 200.0, 100.0);
    // bottom-right corner: offset (100, 50)
    let t = Tilt::from_pointer(Vec2::new(210.0, 120.0), rect);
    assert!(close(t.rotate_x, 2.5));
    assert!(close(t.rotate_y, -5.0));
    assert_eq!(
        t.css(),
        "perspective(1000px) rotateX(2.5deg) rotateY(-5deg) translateY(-8px)"
    );
}

#[test]
fn magnet_pulls_a_fifth_of_the_offset() {
    let rect = ElementRect::new(10.0, 10.0, 100.0, 40.0);
    let off = magnet_offset(Vec2::new(110.0, 0.0), rect);
    assert!(close(off.x, 10.0));
    assert!(close(off.y, -6.0));
    assert_eq!(magnet_css(Vec2::new(10.0, -4.5)), "translate(10px, -4.5px)");
}

#[test]
fn reset_transforms_are_neutral() {
    assert_eq!(TILT_RESET_CSS, "perspective(1000px) rotateX(0) rotateY(0) translateY(0)");
    assert_eq!(MAGNET_RESET_CSS, "translate(0, 0)");
    assert!(INTERACTIVE_SELECTORS.contains(".filter-btn"));
}

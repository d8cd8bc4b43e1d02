// Host-side tests for the scroll dispatcher math.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod folio_core {
    pub mod constants {
        include!("../src/core/constants.rs");
    }
    pub mod scroll {
        include!("../src/core/scroll.rs");
    }
}

use folio_core::scroll::*;

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

fn sections() -> Vec<SectionBounds> {
    vec![
        SectionBounds {
            id: "hero".into(),
            top: 0.0,
            height: 800.0,
        },
        SectionBounds {
            id: "about".into(),
            top: 800.0,
            height: 800.0,
        },
        SectionBounds {
            id: "projects".into(),
            top: 1600.0,
            height: 1000.0,
        },
    ]
}

#[test]
fn progress_is_linear_between_top_and_bottom() {
    assert_eq!(progress_percent(0.0, 2000.0, 1000.0), Some(0.0));
    assert_eq!(progress_percent(500.0, 2000.0, 1000.0), Some(50.0));
    assert_eq!(progress_percent(1000.0, 2000.0, 1000.0), Some(100.0));
}

#[test]
fn progress_clamps_past_either_end() {
    for y in [1000.0, 1000.5, 1500.0, 1e9] {
        assert_eq!(progress_percent(y, 2000.0, 1000.0), Some(100.0), "y={}", y);
    }
    for y in [0.0, -0.5, -300.0] {
        assert_eq!(progress_percent(y, 2000.0, 1000.0), Some(0.0), "y={}", y);
    }
}

#[test]
fn progress_undefined_when_document_fits_viewport() {
    assert_eq!(progress_percent(0.0, 1000.0, 1000.0), None);
    assert_eq!(progress_percent(0.0, 800.0, 1000.0), None);
    assert_eq!(progress_percent(0.0, f64::NAN, 1000.0), None);
}

#[test]
fn navbar_and_back_to_top_thresholds_are_strict() {
    assert!(!navbar_scrolled(80.0));
    assert!(navbar_scrolled(80.5));
    assert!(!back_to_top_visible(600.0));
    assert!(back_to_top_visible(601.0));
}

#[test]
fn active_section_uses_lookahead_probe() {
    let s = sections();
    assert_eq!(active_section(&s, 0.0), Some("hero"));
    // 599 + 200 = 799 is still inside the hero window
    assert_eq!(active_section(&s, 599.0), Some("hero"));
    // 600 + 200 = 800 is the first pixel of `about`
    assert_eq!(active_section(&s, 600.0), Some("about"));
    assert_eq!(active_section(&s, 1400.0), Some("projects"));
}

#[test]
fn active_section_none_outside_all_windows() {
    let s = vec![SectionBounds {
        id: "about".into(),
        top: 500.0,
        height: 400.0,
    }];
    assert_eq!(active_section(&s, 0.0), None);
    assert_eq!(active_section(&s, 299.0), None);
    assert_eq!(active_section(&s, 300.0), Some("about"));
    assert_eq!(active_section(&s, 700.0), None);
    assert_eq!(active_section(&[], 100.0), None);
}

#[test]
fn active_section_prefers_last_overlapping_section() {
    let s = vec![
        SectionBounds {
            id: "outer".into(),
            top: 0.0,
            height: 2000.0,
        },
        SectionBounds {
            id: "inner".into(),
            top: 500.0,
            height: 200.0,
        },
    ];
    assert_eq!(active_section(&s, 400.0), Some("inner"));
    assert_eq!(active_section(&s, 600.0), Some("outer"));
}

#[test]
fn parallax_speeds_increase_per_shape() {
    let offsets = parallax_offsets(100.0, 800.0, 3).unwrap();
    assert_eq!(offsets.len(), 3);
    assert!(approx(offsets[0], 3.0));
    assert!(approx(offsets[1], 4.5));
    assert!(approx(offsets[2], 6.0));
}

#[test]
fn parallax_stops_after_first_viewport() {
    assert!(parallax_offsets(799.0, 800.0, 2).is_some());
    assert_eq!(parallax_offsets(800.0, 800.0, 2), None);
    assert_eq!(parallax_offsets(0.0, 800.0, 0), Some(vec![]));
}

#[test]
fn timeline_fill_tracks_visible_fraction() {
    let vh = 800.0;
    let half = TimelineRect {
        top: 600.0,
        height: 400.0,
    };
    assert!(approx(timeline_fill(half, vh).unwrap(), 50.0));

    let passed_top = TimelineRect {
        top: -100.0,
        height: 400.0,
    };
    assert!(approx(timeline_fill(passed_top, vh).unwrap(), 100.0));
}

#[test]
fn timeline_fill_none_when_offscreen_or_empty() {
    let vh = 800.0;
    let below = TimelineRect {
        top: 800.0,
        height: 400.0,
    };
    let above = TimelineRect {
        top: -500.0,
        height: 400.0,
    };
    let flat = TimelineRect {
        top: 100.0,
        height: 0.0,
    };
    assert_eq!(timeline_fill(below, vh), None);
    assert_eq!(timeline_fill(above, vh), None);
    assert_eq!(timeline_fill(flat, vh), None);
}

#[test]
fn anchor_target_leaves_room_for_navbar() {
    assert_eq!(anchor_scroll_top(500.0, 1000.0), 1420.0);
}

#[test]
fn compute_combines_every_effect() {
    let input = ScrollInput {
        metrics: ScrollMetrics {
            scroll_y: 700.0,
            scroll_height: 2600.0,
            client_height: 800.0,
            viewport_height: 800.0,
        },
        sections: sections(),
        shape_count: 2,
        timeline: Some(TimelineRect {
            top: 400.0,
            height: 800.0,
        }),
    };
    let u = compute(&input);
    assert!(approx(u.progress.unwrap(), 700.0 / 1800.0 * 100.0));
    assert!(u.navbar_scrolled);
    assert_eq!(u.active_section.as_deref(), Some("about"));
    assert!(u.back_to_top_visible);
    assert_eq!(u.parallax.as_ref().map(Vec::len), Some(2));
    assert!(approx(u.timeline_fill.unwrap(), 50.0));
}

#[test]
fn compute_at_top_of_short_page() {
    let input = ScrollInput {
        metrics: ScrollMetrics {
            scroll_y: 0.0,
            scroll_height: 600.0,
            client_height: 800.0,
            viewport_height: 800.0,
        },
        ..Default::default()
    };
    let u = compute(&input);
    assert_eq!(u.progress, None);
    assert!(!u.navbar_scrolled);
    assert_eq!(u.active_section, None);
    assert!(!u.back_to_top_visible);
    assert_eq!(u.timeline_fill, None);
}

#[test]
fn frame_throttle_collapses_bursts() {
    let mut t = FrameThrottle::default();
    assert!(t.request());
    for _ in 0..50 {
        assert!(!t.request());
    }
    t.complete();
    assert!(t.request());
    assert!(!t.request());
}

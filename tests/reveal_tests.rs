// Host-side tests for counters and the one-shot reveal helpers.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod folio_core {
    pub mod constants {
        include!("../src/core/constants.rs");
    }
    pub mod counter {
        include!("../src/core/counter.rs");
    }
    pub mod reveal {
        include!("../src/core/reveal.rs");
    }
}

use folio_core::constants::*;
use folio_core::counter::*;
use folio_core::reveal::*;

const FRAME_MS: f64 = 1000.0 / 60.0;

#[test]
fn ease_out_cubic_endpoints_and_midpoint() {
    assert_eq!(ease_out_cubic(0.0), 0.0);
    assert_eq!(ease_out_cubic(1.0), 1.0);
    assert!((ease_out_cubic(0.5) - 0.875).abs() < 1e-12);
    // Out-of-range inputs clamp
    assert_eq!(ease_out_cubic(-1.0), 0.0);
    assert_eq!(ease_out_cubic(2.0), 1.0);
}

#[test]
fn counter_samples_along_the_curve() {
    let anim = CounterAnimation::new(100, 1000.0);
    assert_eq!(anim.sample(1000.0), CounterFrame { value: 0, done: false });
    // halfway: 0.875 * 100
    assert_eq!(anim.sample(2000.0), CounterFrame { value: 88, done: false });
    assert_eq!(anim.sample(3000.0), CounterFrame { value: 100, done: true });
    assert_eq!(anim.sample(9000.0), CounterFrame { value: 100, done: true });
}

#[test]
fn counter_before_start_shows_zero() {
    let anim = CounterAnimation::new(50, 1000.0);
    assert_eq!(anim.sample(990.0).value, 0);
}

#[test]
fn counter_always_terminates_on_target() {
    for target in [0i64, 1, 7, 42, 150, 1234, -5] {
        let start = 123.4;
        let anim = CounterAnimation::new(target, start);
        let mut now = start;
        let mut last = anim.sample(now);
        let mut frames = 0;
        while !last.done {
            now += FRAME_MS;
            let next = anim.sample(now);
            if target >= 0 {
                assert!(next.value >= last.value, "target {} went backwards", target);
            }
            last = next;
            frames += 1;
            assert!(frames < 1000, "counter for {} never finished", target);
        }
        assert_eq!(last.value, target);
        assert!(now - start >= COUNTER_DURATION_MS);
    }
}

#[test]
fn zero_duration_finishes_immediately() {
    let anim = CounterAnimation::with_duration(9, 0.0, 0.0);
    assert_eq!(anim.sample(0.0), CounterFrame { value: 9, done: true });
}

#[test]
fn parse_leading_int_is_lenient_like_parse_int() {
    assert_eq!(parse_leading_int("42"), Some(42));
    assert_eq!(parse_leading_int("  15+ "), Some(15));
    assert_eq!(parse_leading_int("3.7"), Some(3));
    assert_eq!(parse_leading_int("-8"), Some(-8));
    assert_eq!(parse_leading_int("+12"), Some(12));
    assert_eq!(parse_leading_int("abc"), None);
    assert_eq!(parse_leading_int(""), None);
    assert_eq!(parse_leading_int("+"), None);
}

#[test]
fn skill_width_is_clamped_percentage() {
    assert_eq!(skill_width_css("85").as_deref(), Some("85%"));
    assert_eq!(skill_width_css(" 85% ").as_deref(), Some("85%"));
    assert_eq!(skill_width_css("12.5").as_deref(), Some("12.5%"));
    assert_eq!(skill_width_css("120").as_deref(), Some("100%"));
    assert_eq!(skill_width_css("-3").as_deref(), Some("0%"));
    assert_eq!(skill_width_css("wide"), None);
    assert_eq!(skill_width_css("NaN"), None);
}

#[test]
fn reveal_kinds_have_distinct_selectors_and_thresholds() {
    assert_eq!(RevealKind::Fade.threshold(), REVEAL_THRESHOLD);
    assert_eq!(RevealKind::Counter.threshold(), COUNTER_THRESHOLD);
    assert_eq!(RevealKind::SkillBar.threshold(), SKILL_THRESHOLD);
    assert_eq!(RevealKind::Fade.root_margin(), Some("0px 0px -80px 0px"));
    assert_eq!(RevealKind::Counter.root_margin(), None);

    let selectors: Vec<&str> = RevealKind::ALL.iter().map(|k| k.selector()).collect();
    for (i, a) in selectors.iter().enumerate() {
        for b in &selectors[i + 1..] {
            assert_ne!(a, b);
        }
    }
}

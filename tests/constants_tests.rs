// Host-side tests for tuning constants and their relationships.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/core/constants.rs");
}

use constants::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn easing_factors_are_fractions() {
    assert!(RING_EASE > 0.0 && RING_EASE < 1.0);
    assert!(MAGNET_STRENGTH > 0.0 && MAGNET_STRENGTH < 1.0);
    assert!(TILT_DIVISOR > 0.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn observer_thresholds_are_ratios() {
    for t in [REVEAL_THRESHOLD, COUNTER_THRESHOLD, SKILL_THRESHOLD] {
        assert!((0.0..=1.0).contains(&t));
    }
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn preloader_grace_fires_before_fallback() {
    assert!(PRELOADER_GRACE_MS < PRELOADER_TIMEOUT_MS);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn typing_cadence_pauses_outlast_keystrokes() {
    assert!(DELETE_DELAY_MS < TYPE_DELAY_MS);
    assert!(PAUSE_EMPTY_MS > TYPE_DELAY_MS);
    assert!(PAUSE_FULL_MS > PAUSE_EMPTY_MS);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn scroll_thresholds_are_ordered() {
    assert!(NAVBAR_SCROLLED_THRESHOLD_PX < BACK_TO_TOP_THRESHOLD_PX);
    assert!(PARALLAX_BASE_SPEED > 0.0 && PARALLAX_SPEED_STEP > 0.0);
}

#[test]
fn default_prices_are_numeric() {
    assert!(DEFAULT_PRICE_BDT.parse::<u32>().is_ok());
    assert!(DEFAULT_PRICE_EUR.parse::<u32>().is_ok());
}

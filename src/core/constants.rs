/// Timing and interaction tuning constants.
///
/// These express intended behavior (delays, thresholds, easing factors) and
/// keep magic numbers out of the DOM wiring.

// Preloader
pub const PRELOADER_GRACE_MS: u32 = 2000; // after window `load`
pub const PRELOADER_TIMEOUT_MS: u32 = 4000; // absolute fallback

// Cursor follower
pub const RING_EASE: f32 = 0.12; // fraction of the remaining distance covered per frame

// Scroll dispatcher
pub const NAVBAR_SCROLLED_THRESHOLD_PX: f64 = 80.0;
pub const ACTIVE_SECTION_LOOKAHEAD_PX: f64 = 200.0;
pub const BACK_TO_TOP_THRESHOLD_PX: f64 = 600.0;
pub const PARALLAX_BASE_SPEED: f64 = 0.03;
pub const PARALLAX_SPEED_STEP: f64 = 0.015; // added per shape index
pub const RESIZE_DEBOUNCE_MS: u32 = 250;
pub const ANCHOR_SCROLL_OFFSET_PX: f64 = 80.0; // fixed navbar height

// Typing animator
pub const TYPING_START_DELAY_MS: u32 = 2600; // lets the hero entrance finish
pub const TYPE_DELAY_MS: u32 = 80;
pub const DELETE_DELAY_MS: u32 = 40;
pub const PAUSE_FULL_MS: u32 = 2500;
pub const PAUSE_EMPTY_MS: u32 = 400;

// Visibility-triggered animations
pub const REVEAL_THRESHOLD: f64 = 0.1;
pub const REVEAL_ROOT_MARGIN: &str = "0px 0px -80px 0px";
pub const COUNTER_THRESHOLD: f64 = 0.5;
pub const SKILL_THRESHOLD: f64 = 0.3;
pub const COUNTER_DURATION_MS: f64 = 2000.0;

// Hover effects
pub const TILT_DIVISOR: f32 = 20.0;
pub const TILT_PERSPECTIVE_PX: f32 = 1000.0;
pub const TILT_LIFT_PX: f32 = -8.0;
pub const MAGNET_STRENGTH: f32 = 0.2;

// Contact form
pub const FORM_SENDING_MS: u32 = 1500; // simulated network latency
pub const FORM_SUCCESS_MS: u32 = 3000;

// Payment modal
pub const VERIFY_DELAY_MS: u32 = 1500;
pub const VERIFIED_CLOSE_MS: u32 = 2000;
pub const DEFAULT_PRICE_BDT: &str = "500";
pub const DEFAULT_PRICE_EUR: &str = "5";

// DOM hooks and page content used by the wasm front-end.

// Element ids
pub const PRELOADER_ID: &str = "preloader";
pub const CURSOR_DOT_ID: &str = "cursorDot";
pub const CURSOR_RING_ID: &str = "cursorRing";
pub const SCROLL_PROGRESS_ID: &str = "scrollProgress";
pub const NAVBAR_ID: &str = "navbar";
pub const HAMBURGER_ID: &str = "hamburger";
pub const NAV_LINKS_ID: &str = "navLinks";
pub const HERO_TITLE_ID: &str = "heroTitle";
pub const CONTACT_FORM_ID: &str = "contactForm";
pub const BACK_TO_TOP_ID: &str = "backToTop";
pub const PAYMENT_MODAL_ID: &str = "payment-modal";
pub const CONFIRM_PAYMENT_ID: &str = "confirm-payment-btn";
pub const MODAL_FILENAME_ID: &str = "modal-filename";
pub const MODAL_PRICE_ID: &str = "modal-price";
pub const TRANSACTION_ID_INPUT: &str = "transaction-id";

// Selectors
pub const SECTIONS_SELECTOR: &str = "section[id]";
pub const NAV_LINK_SELECTOR: &str = ".nav-link";
pub const ACTIVE_NAV_LINK_SELECTOR: &str = ".nav-link:not(.nav-link-cta)";
pub const ANCHOR_SELECTOR: &str = "a[href^=\"#\"]";
pub const GEO_SHAPE_SELECTOR: &str = ".geo-shape";
pub const TIMELINE_SELECTOR: &str = ".experience-timeline";
pub const TIMELINE_LINE_SELECTOR: &str = ".exp-line";
pub const FILTER_BUTTON_SELECTOR: &str = ".filter-btn";
pub const PROJECT_CARD_SELECTOR: &str = ".project-card";
pub const MAGNETIC_BUTTON_SELECTOR: &str = ".magnetic-btn";
pub const SUBMIT_BUTTON_SELECTOR: &str = ".btn-submit";
pub const FORM_INPUTS_SELECTOR: &str = "input, textarea";
pub const CLOSE_MODAL_SELECTOR: &str = ".close-modal";
pub const TAB_BUTTON_SELECTOR: &str = ".tab-btn";
pub const TAB_CONTENT_SELECTOR: &str = ".tab-content";
pub const DOWNLOAD_LINK_SELECTOR: &str = ".repo-files a";

// Attributes
pub const DATA_COUNT: &str = "data-count";
pub const DATA_WIDTH: &str = "data-width";
pub const DATA_FILTER: &str = "data-filter";
pub const DATA_CATEGORY: &str = "data-category";
pub const DATA_TAB: &str = "data-tab";
pub const DATA_PRICE_BDT: &str = "data-price-bdt";
pub const DATA_PRICE_EUR: &str = "data-price-eur";

// Classes
pub const CLASS_HIDDEN: &str = "hidden";
pub const CLASS_LOADING: &str = "loading";
pub const CLASS_ACTIVE: &str = "active";
pub const CLASS_EXPAND: &str = "expand";
pub const CLASS_SCROLLED: &str = "scrolled";
pub const CLASS_VISIBLE: &str = "visible";
pub const CLASS_ANIMATED: &str = "animated";
pub const CLASS_SUCCESS: &str = "success";

// Inline styles
pub const POINTER_FINE_QUERY: &str = "(pointer: fine)";
pub const CARD_FADE_IN_ANIMATION: &str = "fadeInCard 0.5s ease forwards";
pub const TYPING_CARET_BORDER: &str = "2px solid var(--color-accent)";
pub const TIMELINE_TRANSITION: &str = "height 0.3s ease";
pub const VERIFIED_BACKGROUND: &str = "var(--color-green)";

// Confirm button labels
pub const LABEL_VERIFY: &str = "<i class=\"fas fa-check-circle\"></i> Verify &amp; Download";
pub const LABEL_VERIFYING: &str = "<i class=\"fas fa-spinner fa-spin\"></i> Verifying...";
pub const LABEL_VERIFIED: &str = "<i class=\"fas fa-check\"></i> Verified! Downloading...";

// Hero typing phrases, in display order
pub const HERO_PHRASES: [&str; 4] = [
    "Geotechnical Engineer",
    "M.Sc. Student — Politecnico di Milano",
    "Foundation Design Specialist",
    "Soil Mechanics Enthusiast",
];

//! Centralized layout and timing constants for the Showcase pages.
//!
//! These values mirror the stylesheet breakpoints and animation durations the
//! pages ship with. Keeping them together means a CSS change has exactly one
//! Rust counterpart to update.

// Filtering ----------------------------------------------------------------
pub const CATEGORY_ALL: &str = "all";

// Persistence keys ---------------------------------------------------------
pub const GALLERY_THEME_KEY: &str = "theme";
pub const REPLICA_THEME_KEY: &str = "darkMode";

// Layout -------------------------------------------------------------------
pub const MOBILE_BREAKPOINT_PX: f64 = 768.0;
pub const TOOLTIP_OFFSET_PX: i32 = 10;
pub const INPUT_MAX_HEIGHT_PX: u32 = 200;

// Timing -------------------------------------------------------------------
pub const HEADLINE_RESTORE_MS: u32 = 300;
pub const KEYBOARD_SCROLL_DELAY_MS: u32 = 300;
pub const RESIZE_DEBOUNCE_MS: u32 = 100;
pub const TOOLTIP_THROTTLE_MS: u32 = 16;

// Entrance animation stagger -----------------------------------------------
pub const SECTION_STAGGER_MS: u32 = 100;
pub const LIST_STAGGER_BASE_MS: u32 = 500;
pub const LIST_STAGGER_STEP_MS: u32 = 50;
pub const SECTION_OFFSET_PX: i32 = -20;
pub const LIST_OFFSET_PX: i32 = -10;

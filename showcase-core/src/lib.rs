//! Showcase core
//!
//! Platform-agnostic logic behind the Showcase gallery and chat replica pages.
//! This crate holds the card filter engine and the small UI state values the
//! pages toggle, without any DOM dependencies.

pub mod animation;
pub mod cards;
pub mod config;
pub mod constants;
pub mod conversation;
pub mod dropdown;
pub mod filter;
pub mod input;
pub mod layout;
pub mod theme;
pub mod timing;
pub mod tooltip;

// Re-export commonly used types
pub use animation::{Axis, Entrance, EntranceTarget};
pub use cards::{Card, CardCatalog, CatalogError, FilterOption};
pub use config::{ModelVersion, ReplicaConfig, ReplicaConfigError};
pub use conversation::{ConversationHistory, HeadlineSwap};
pub use dropdown::DropdownState;
pub use filter::{FilterState, compute_visibility, matches_filter, matches_search, visible_count};
pub use input::{FocusOutcome, InputBoxState, auto_height};
pub use layout::{SidebarState, is_mobile_width};
pub use theme::{
    MemoryPreferenceStore, PreferenceError, PreferenceStore, Theme, ThemeBinding, ThemeEncoding,
    load_theme, toggle_and_store,
};
pub use timing::{
    Debounced, ManualHandle, ManualTimers, Throttled, TimerHost, debounce, throttle,
};
pub use tooltip::{TooltipState, tooltip_position};

/// Trait for abstracting page content loading.
/// Platform-specific implementations should provide this.
pub trait ContentLoader {
    type Error: std::error::Error + 'static;

    /// Load the gallery card catalog.
    ///
    /// # Errors
    ///
    /// Returns an error if the catalog cannot be loaded or parsed.
    fn load_catalog(&self) -> Result<CardCatalog, Self::Error>;

    /// Load the chat replica content.
    ///
    /// # Errors
    ///
    /// Returns an error if the replica content cannot be loaded or parsed.
    fn load_replica(&self) -> Result<ReplicaConfig, Self::Error>;
}

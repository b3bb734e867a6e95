pub mod chat_input;
pub mod sidebar;
pub mod tooltip;
pub mod top_bar;
pub mod version_dropdown;
pub mod welcome;

pub use chat_input::ChatInput;
pub use sidebar::{RecentItem, Sidebar};
pub use tooltip::{FloatingTooltip, TooltipContext, TooltipTarget};
pub use top_bar::TopBar;
pub use version_dropdown::VersionDropdown;
pub use welcome::WelcomeMessage;

pub mod card_grid;
pub mod filter_bar;
pub mod search_bar;
pub mod theme_toggle;

pub use card_grid::{CardGrid, CardTile};
pub use filter_bar::FilterBar;
pub use search_bar::SearchBar;
pub use theme_toggle::ThemeToggle;

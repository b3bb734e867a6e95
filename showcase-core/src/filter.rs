//! Card filter engine.
//!
//! Visibility of a card is a pure function of the card and the current
//! [`FilterState`]. The free-text query and the category selector are
//! independent inputs; changing either one recomputes the whole vector from
//! the combined state, so a category click never drops a typed query.
use crate::cards::Card;
use crate::constants::CATEGORY_ALL;

/// Current search box text and active category button.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FilterState {
    pub query: String,
    pub active_category: String,
}

impl Default for FilterState {
    fn default() -> Self {
        Self {
            query: String::new(),
            active_category: CATEGORY_ALL.to_string(),
        }
    }
}

impl FilterState {
    #[must_use]
    pub fn new(query: impl Into<String>, active_category: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            active_category: active_category.into(),
        }
    }

    /// Replace the query, keeping the active category.
    #[must_use]
    pub fn with_query(&self, query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            active_category: self.active_category.clone(),
        }
    }

    /// Replace the active category, keeping the typed query.
    #[must_use]
    pub fn with_category(&self, category: impl Into<String>) -> Self {
        Self {
            query: self.query.clone(),
            active_category: category.into(),
        }
    }

    /// The query trimmed and lowercased, as used for matching.
    #[must_use]
    pub fn normalized_query(&self) -> String {
        self.query.trim().to_lowercase()
    }
}

/// True when `needle` (already normalized) occurs in any searchable field.
/// An empty needle matches every card.
#[must_use]
pub fn matches_search(card: &Card, needle: &str) -> bool {
    needle.is_empty()
        || card.title.to_lowercase().contains(needle)
        || card.body_text.to_lowercase().contains(needle)
        || card.technologies.to_lowercase().contains(needle)
}

/// True when the card belongs to `category`, or no specific category is set.
/// Cards without a category only pass the "all"/unset filter.
#[must_use]
pub fn matches_filter(card: &Card, category: &str) -> bool {
    category.is_empty() || category == CATEGORY_ALL || card.category == category
}

/// One visibility flag per card, in input order.
#[must_use]
pub fn compute_visibility(cards: &[Card], state: &FilterState) -> Vec<bool> {
    let needle = state.normalized_query();
    cards
        .iter()
        .map(|card| {
            matches_search(card, &needle) && matches_filter(card, &state.active_category)
        })
        .collect()
}

#[must_use]
pub fn visible_count(visibility: &[bool]) -> usize {
    visibility.iter().filter(|visible| **visible).count()
}

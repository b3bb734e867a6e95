//! Gallery card records and the catalog they are loaded from.
use serde::{Deserialize, Serialize};

use crate::constants::CATEGORY_ALL;

/// One gallery entry. Cards are read-only once loaded; only their visibility
/// changes at runtime.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Card {
    pub title: String,
    #[serde(default, rename = "body")]
    pub body_text: String,
    #[serde(default)]
    pub category: String,
    #[serde(default, alias = "tecnologias")]
    pub technologies: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
}

impl Card {
    #[must_use]
    pub fn new(title: impl Into<String>, body_text: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            body_text: body_text.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    #[must_use]
    pub fn with_technologies(mut self, technologies: impl Into<String>) -> Self {
        self.technologies = technologies.into();
        self
    }

    /// Individual technology tags, split on commas with blanks dropped.
    pub fn technology_tags(&self) -> impl Iterator<Item = &str> {
        self.technologies
            .split(',')
            .map(str::trim)
            .filter(|tag| !tag.is_empty())
    }
}

/// A category filter button.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterOption {
    pub label: String,
    pub value: String,
}

impl FilterOption {
    #[must_use]
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("Card catalog is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// The fixed collection of cards plus the filter buttons shown above them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct CardCatalog {
    #[serde(default)]
    pub filters: Vec<FilterOption>,
    pub cards: Vec<Card>,
}

impl CardCatalog {
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build a catalog from cards alone, deriving the filter buttons.
    #[must_use]
    pub fn from_cards(cards: Vec<Card>) -> Self {
        let filters = derive_filters(&cards);
        Self { filters, cards }
    }

    /// Load a catalog from JSON. Missing `filters` are derived from the cards.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON cannot be parsed into a catalog.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let mut catalog: Self = serde_json::from_str(json)?;
        if catalog.filters.is_empty() {
            catalog.filters = derive_filters(&catalog.cards);
            log::debug!(
                "derived {} filter buttons from {} cards",
                catalog.filters.len(),
                catalog.cards.len()
            );
        }
        Ok(catalog)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

/// "All" first, then each distinct non-empty category in first-seen order.
fn derive_filters(cards: &[Card]) -> Vec<FilterOption> {
    let mut filters = vec![FilterOption::new("All", CATEGORY_ALL)];
    for card in cards {
        if card.category.is_empty() || filters.iter().any(|f| f.value == card.category) {
            continue;
        }
        filters.push(FilterOption::new(
            capitalize(&card.category),
            card.category.clone(),
        ));
    }
    filters
}

fn capitalize(value: &str) -> String {
    let mut chars = value.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().chain(chars).collect()
    })
}

//! Browser-side implementations of the core loading and preference traits.
//!
//! Page content ships inside the wasm bundle as JSON assets; the theme flag
//! lives in `localStorage`.

use showcase_core::{
    CardCatalog, CatalogError, ContentLoader, PreferenceError, PreferenceStore, ReplicaConfig,
    ReplicaConfigError, Theme, ThemeBinding,
};

const CARDS_JSON: &str = include_str!("../static/assets/data/cards.json");
const REPLICA_JSON: &str = include_str!("../static/assets/data/replica.json");

/// Loads the bundled page content.
pub struct WebContentLoader;

#[derive(Debug, thiserror::Error)]
pub enum WebContentError {
    #[error(transparent)]
    Catalog(#[from] CatalogError),
    #[error(transparent)]
    Replica(#[from] ReplicaConfigError),
}

impl ContentLoader for WebContentLoader {
    type Error = WebContentError;

    fn load_catalog(&self) -> Result<CardCatalog, Self::Error> {
        Ok(CardCatalog::from_json(CARDS_JSON)?)
    }

    fn load_replica(&self) -> Result<ReplicaConfig, Self::Error> {
        Ok(ReplicaConfig::from_json(REPLICA_JSON)?)
    }
}

/// Bundled catalog, or an empty gallery if it fails to parse.
#[must_use]
pub fn catalog_or_empty() -> CardCatalog {
    WebContentLoader.load_catalog().unwrap_or_else(|err| {
        log::error!("Failed to load card catalog: {err}");
        CardCatalog::empty()
    })
}

/// Bundled replica content, or the built-in defaults if it fails to parse.
#[must_use]
pub fn replica_or_default() -> ReplicaConfig {
    WebContentLoader.load_replica().unwrap_or_else(|err| {
        log::error!("Failed to load replica content: {err}");
        ReplicaConfig::default()
    })
}

/// `localStorage`-backed preferences.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalPreferenceStore;

impl PreferenceStore for LocalPreferenceStore {
    fn get(&self, key: &str) -> Result<Option<String>, PreferenceError> {
        let storage = crate::dom::local_storage()
            .map_err(|e| PreferenceError::Unavailable(crate::dom::js_error_message(&e)))?;
        storage
            .get_item(key)
            .map_err(|e| PreferenceError::Unavailable(crate::dom::js_error_message(&e)))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), PreferenceError> {
        let storage = crate::dom::local_storage()
            .map_err(|e| PreferenceError::Unavailable(crate::dom::js_error_message(&e)))?;
        storage
            .set_item(key, value)
            .map_err(|e| PreferenceError::Write(crate::dom::js_error_message(&e)))
    }
}

/// Saved theme for a page. Outside the browser there is no storage, so the
/// default light theme is used.
#[must_use]
pub fn stored_theme(binding: ThemeBinding) -> Theme {
    if cfg!(target_arch = "wasm32") {
        showcase_core::load_theme(&LocalPreferenceStore, binding)
    } else {
        Theme::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_catalog_parses() {
        let catalog = WebContentLoader.load_catalog().unwrap();
        assert!(!catalog.cards.is_empty());
        assert_eq!(catalog.filters[0].value, "all");
        for card in &catalog.cards {
            assert!(
                catalog.filters.iter().any(|f| f.value == card.category),
                "{} has no filter button",
                card.title
            );
        }
    }

    #[test]
    fn bundled_replica_parses() {
        let config = WebContentLoader.load_replica().unwrap();
        assert_eq!(config.default_version, "2.5 Pro");
        assert!(!config.recent.is_empty());
    }

    #[test]
    fn native_builds_use_light_theme() {
        assert_eq!(stored_theme(ThemeBinding::GALLERY), Theme::Light);
    }
}

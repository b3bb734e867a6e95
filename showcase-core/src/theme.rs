//! Light/dark theme preference and its persisted encodings.
use serde::{Deserialize, Serialize};
use std::cell::RefCell;
use std::collections::HashMap;

use crate::constants::{GALLERY_THEME_KEY, REPLICA_THEME_KEY};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    #[must_use]
    pub const fn toggle(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    #[must_use]
    pub const fn is_dark(self) -> bool {
        matches!(self, Self::Dark)
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Font Awesome icon class for the gallery toggle button.
    #[must_use]
    pub const fn gallery_icon(self) -> &'static str {
        match self {
            Self::Light => "fa-moon",
            Self::Dark => "fa-sun",
        }
    }

    /// Material icon ligature for the replica toggle button.
    #[must_use]
    pub const fn replica_icon(self) -> &'static str {
        match self {
            Self::Light => "dark_mode",
            Self::Dark => "light_mode",
        }
    }

    /// Body class applied on the replica page.
    #[must_use]
    pub const fn body_class(self) -> &'static str {
        match self {
            Self::Light => "light-mode",
            Self::Dark => "dark-mode",
        }
    }
}

/// How a page stores its theme flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeEncoding {
    /// `"light"` / `"dark"`
    Named,
    /// `"true"` when dark, `"false"` otherwise
    Flag,
}

/// Storage key plus encoding for one page's theme preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThemeBinding {
    pub key: &'static str,
    pub encoding: ThemeEncoding,
}

impl ThemeBinding {
    pub const GALLERY: Self = Self {
        key: GALLERY_THEME_KEY,
        encoding: ThemeEncoding::Named,
    };
    pub const REPLICA: Self = Self {
        key: REPLICA_THEME_KEY,
        encoding: ThemeEncoding::Flag,
    };

    /// Decode a stored value. Anything unrecognized falls back to light.
    #[must_use]
    pub fn decode(self, raw: Option<&str>) -> Theme {
        let dark = match (self.encoding, raw) {
            (ThemeEncoding::Named, Some("dark")) | (ThemeEncoding::Flag, Some("true")) => true,
            (_, None) => false,
            (_, Some(other)) => {
                if !matches!(other, "light" | "false") {
                    log::debug!("ignoring unrecognized theme value {other:?} for {}", self.key);
                }
                false
            }
        };
        if dark { Theme::Dark } else { Theme::Light }
    }

    #[must_use]
    pub const fn encode(self, theme: Theme) -> &'static str {
        match self.encoding {
            ThemeEncoding::Named => theme.as_str(),
            ThemeEncoding::Flag => {
                if theme.is_dark() {
                    "true"
                } else {
                    "false"
                }
            }
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum PreferenceError {
    #[error("Preference storage unavailable: {0}")]
    Unavailable(String),
    #[error("Preference write rejected: {0}")]
    Write(String),
}

/// Key-value string storage for user preferences.
/// Platform-specific implementations should provide this.
pub trait PreferenceStore {
    /// Read a stored value.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing storage cannot be read.
    fn get(&self, key: &str) -> Result<Option<String>, PreferenceError>;

    /// Store a value, replacing any previous one.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing storage rejects the write.
    fn set(&self, key: &str, value: &str) -> Result<(), PreferenceError>;
}

/// In-memory store, used natively and in tests.
#[derive(Debug, Default)]
pub struct MemoryPreferenceStore {
    values: RefCell<HashMap<String, String>>,
}

impl MemoryPreferenceStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_value(key: &str, value: &str) -> Self {
        let store = Self::new();
        store
            .values
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        store
    }
}

impl PreferenceStore for MemoryPreferenceStore {
    fn get(&self, key: &str) -> Result<Option<String>, PreferenceError> {
        Ok(self.values.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), PreferenceError> {
        self.values
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Read the saved theme, defaulting to light when absent or unreadable.
pub fn load_theme<S: PreferenceStore + ?Sized>(store: &S, binding: ThemeBinding) -> Theme {
    match store.get(binding.key) {
        Ok(raw) => binding.decode(raw.as_deref()),
        Err(err) => {
            log::warn!("could not read theme preference: {err}");
            Theme::default()
        }
    }
}

/// Flip `current` and persist the result. The flipped theme is returned even
/// when the write fails so the page still responds to the click.
pub fn toggle_and_store<S: PreferenceStore + ?Sized>(
    store: &S,
    binding: ThemeBinding,
    current: Theme,
) -> Theme {
    let next = current.toggle();
    if let Err(err) = store.set(binding.key, binding.encode(next)) {
        log::warn!("could not persist theme preference: {err}");
    }
    next
}

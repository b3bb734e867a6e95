//! Single-select model version dropdown.

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DropdownState {
    pub open: bool,
    pub selected: String,
}

impl DropdownState {
    #[must_use]
    pub fn new(selected: impl Into<String>) -> Self {
        Self {
            open: false,
            selected: selected.into(),
        }
    }

    #[must_use]
    pub fn toggled(&self) -> Self {
        Self {
            open: !self.open,
            selected: self.selected.clone(),
        }
    }

    #[must_use]
    pub fn closed(&self) -> Self {
        Self {
            open: false,
            selected: self.selected.clone(),
        }
    }

    /// Choosing an option records it and closes the menu.
    #[must_use]
    pub fn select(&self, version: impl Into<String>) -> Self {
        Self {
            open: false,
            selected: version.into(),
        }
    }

    /// Document click outside the selector dismisses an open menu.
    #[must_use]
    pub fn on_document_click(&self, inside_selector: bool) -> Self {
        if self.open && !inside_selector {
            self.closed()
        } else {
            self.clone()
        }
    }

    #[must_use]
    pub fn is_selected(&self, version: &str) -> bool {
        self.selected == version
    }

    #[must_use]
    pub const fn aria_expanded(&self) -> &'static str {
        if self.open { "true" } else { "false" }
    }
}

//! Sidebar open/closed state, gated by viewport width.
use crate::constants::MOBILE_BREAKPOINT_PX;

#[must_use]
pub fn is_mobile_width(width: f64) -> bool {
    width <= MOBILE_BREAKPOINT_PX
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SidebarState {
    pub open: bool,
}

impl SidebarState {
    #[must_use]
    pub const fn toggled(self) -> Self {
        Self { open: !self.open }
    }

    #[must_use]
    pub const fn closed(self) -> Self {
        Self { open: false }
    }

    /// A click anywhere on the document. On mobile an open sidebar closes when
    /// the click lands outside both the sidebar and its menu button.
    #[must_use]
    pub fn on_document_click(self, viewport_width: f64, inside_sidebar_or_button: bool) -> Self {
        if self.open && is_mobile_width(viewport_width) && !inside_sidebar_or_button {
            self.closed()
        } else {
            self
        }
    }

    /// Growing past the mobile breakpoint always closes the drawer.
    #[must_use]
    pub fn on_resize(self, viewport_width: f64) -> Self {
        if is_mobile_width(viewport_width) {
            self
        } else {
            self.closed()
        }
    }

    #[must_use]
    pub const fn sidebar_class(self) -> &'static str {
        if self.open { "sidebar open" } else { "sidebar" }
    }

    #[must_use]
    pub const fn overlay_class(self) -> &'static str {
        if self.open {
            "sidebar-overlay active"
        } else {
            "sidebar-overlay"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const OPEN: SidebarState = SidebarState { open: true };

    #[test]
    fn breakpoint_is_inclusive() {
        assert!(is_mobile_width(768.0));
        assert!(!is_mobile_width(769.0));
    }

    #[test]
    fn toggle_flips_state() {
        assert!(SidebarState::default().toggled().open);
        assert!(!OPEN.toggled().open);
    }

    #[test]
    fn outside_click_closes_only_on_mobile() {
        assert!(!OPEN.on_document_click(600.0, false).open);
        assert!(OPEN.on_document_click(600.0, true).open);
        assert!(OPEN.on_document_click(1024.0, false).open);
    }

    #[test]
    fn resize_to_desktop_closes() {
        assert!(!OPEN.on_resize(1280.0).open);
        assert!(OPEN.on_resize(500.0).open);
    }

    #[test]
    fn classes_reflect_state() {
        assert_eq!(OPEN.sidebar_class(), "sidebar open");
        assert_eq!(OPEN.closed().overlay_class(), "sidebar-overlay");
    }
}

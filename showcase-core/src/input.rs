//! Auto-expanding chat input and the simulated mobile keyboard.
use crate::constants::{INPUT_MAX_HEIGHT_PX, KEYBOARD_SCROLL_DELAY_MS};
use crate::layout::is_mobile_width;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct InputBoxState {
    pub expanded: bool,
    pub keyboard_open: bool,
}

/// What the page should do after the input gains focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FocusOutcome {
    pub state: InputBoxState,
    /// Delay before scrolling the input into view, when the keyboard opened.
    pub scroll_after_ms: Option<u32>,
}

impl InputBoxState {
    #[must_use]
    pub fn on_focus(self, viewport_width: f64) -> FocusOutcome {
        let mobile = is_mobile_width(viewport_width);
        FocusOutcome {
            state: Self {
                expanded: true,
                keyboard_open: self.keyboard_open || mobile,
            },
            scroll_after_ms: mobile.then_some(KEYBOARD_SCROLL_DELAY_MS),
        }
    }

    /// Blur always drops the keyboard; the box only collapses when empty.
    #[must_use]
    pub fn on_blur(self, value: &str) -> Self {
        Self {
            expanded: self.expanded && !value.trim().is_empty(),
            keyboard_open: false,
        }
    }

    #[must_use]
    pub fn box_class(self) -> &'static str {
        if self.expanded {
            "input-box expanded"
        } else {
            "input-box"
        }
    }

    #[must_use]
    pub fn box_style(self) -> String {
        if self.expanded {
            format!("max-height: {INPUT_MAX_HEIGHT_PX}px;")
        } else {
            String::new()
        }
    }

    #[must_use]
    pub fn chat_area_class(self) -> &'static str {
        if self.keyboard_open {
            "chat-area keyboard-open"
        } else {
            "chat-area"
        }
    }
}

/// New textarea height when content overflows, capped at the max height.
#[must_use]
pub fn auto_height(scroll_height: u32, client_height: u32) -> Option<u32> {
    (scroll_height > client_height).then(|| scroll_height.min(INPUT_MAX_HEIGHT_PX))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn focus_expands_and_opens_keyboard_on_mobile() {
        let outcome = InputBoxState::default().on_focus(400.0);
        assert!(outcome.state.expanded);
        assert!(outcome.state.keyboard_open);
        assert_eq!(outcome.scroll_after_ms, Some(300));
        assert_eq!(outcome.state.box_style(), "max-height: 200px;");
    }

    #[test]
    fn desktop_focus_skips_keyboard() {
        let outcome = InputBoxState::default().on_focus(1200.0);
        assert!(!outcome.state.keyboard_open);
        assert_eq!(outcome.scroll_after_ms, None);
        assert_eq!(outcome.state.chat_area_class(), "chat-area");
    }

    #[test]
    fn blur_collapses_only_blank_input() {
        let focused = InputBoxState::default().on_focus(400.0).state;
        assert!(!focused.on_blur("   ").expanded);
        let kept = focused.on_blur("draft");
        assert!(kept.expanded);
        assert!(!kept.keyboard_open);
    }

    #[test]
    fn auto_height_clamps() {
        assert_eq!(auto_height(80, 40), Some(80));
        assert_eq!(auto_height(450, 40), Some(200));
        assert_eq!(auto_height(40, 40), None);
    }
}

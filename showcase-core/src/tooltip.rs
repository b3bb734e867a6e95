//! Pointer-following hover tooltip.
use crate::constants::TOOLTIP_OFFSET_PX;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TooltipState {
    pub text: String,
    pub visible: bool,
    pub left: i32,
    pub top: i32,
}

impl TooltipState {
    #[must_use]
    pub fn show(text: impl Into<String>, client_x: i32, client_y: i32) -> Self {
        let (left, top) = tooltip_position(client_x, client_y);
        Self {
            text: text.into(),
            visible: true,
            left,
            top,
        }
    }

    #[must_use]
    pub fn moved(&self, client_x: i32, client_y: i32) -> Self {
        let (left, top) = tooltip_position(client_x, client_y);
        Self {
            left,
            top,
            ..self.clone()
        }
    }

    /// Hiding keeps the last text and position so the fade-out stays in place.
    #[must_use]
    pub fn hidden(&self) -> Self {
        Self {
            visible: false,
            ..self.clone()
        }
    }

    #[must_use]
    pub fn style(&self) -> String {
        format!("left: {}px; top: {}px;", self.left, self.top)
    }
}

#[must_use]
pub const fn tooltip_position(client_x: i32, client_y: i32) -> (i32, i32) {
    (
        client_x.saturating_add(TOOLTIP_OFFSET_PX),
        client_y.saturating_add(TOOLTIP_OFFSET_PX),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn position_is_offset_from_pointer() {
        assert_eq!(tooltip_position(100, 40), (110, 50));
    }

    #[test]
    fn show_move_hide_cycle() {
        let shown = TooltipState::show("New chat", 5, 5);
        assert!(shown.visible);
        assert_eq!(shown.style(), "left: 15px; top: 15px;");
        let moved = shown.moved(20, 30);
        assert_eq!((moved.left, moved.top), (30, 40));
        assert_eq!(moved.text, "New chat");
        let hidden = moved.hidden();
        assert!(!hidden.visible);
        assert_eq!(hidden.left, 30);
    }
}

//! Staggered entrance animations for the replica page.
use crate::constants::{
    LIST_OFFSET_PX, LIST_STAGGER_BASE_MS, LIST_STAGGER_STEP_MS, SECTION_OFFSET_PX,
    SECTION_STAGGER_MS,
};

/// Page sections that fade in on load, in stagger order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntranceTarget {
    Sidebar,
    WelcomeMessage,
    InputContainer,
    TopBar,
}

impl EntranceTarget {
    pub const ORDER: [Self; 4] = [
        Self::Sidebar,
        Self::WelcomeMessage,
        Self::InputContainer,
        Self::TopBar,
    ];

    #[must_use]
    pub fn delay_ms(self) -> u32 {
        let index = Self::ORDER.iter().position(|t| *t == self).unwrap_or(0);
        u32::try_from(index).unwrap_or(0) * SECTION_STAGGER_MS
    }

    #[must_use]
    pub fn entrance(self) -> Entrance {
        let axis = if self == Self::Sidebar {
            Axis::X
        } else {
            Axis::Y
        };
        Entrance {
            delay_ms: self.delay_ms(),
            axis,
            offset_px: SECTION_OFFSET_PX,
            duration: "0.5s",
            settled_transform: "translateX(0) translateY(0)",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
}

/// One element's entrance: where it starts and when it settles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Entrance {
    pub delay_ms: u32,
    pub axis: Axis,
    pub offset_px: i32,
    pub duration: &'static str,
    pub settled_transform: &'static str,
}

impl Entrance {
    /// Entrance for the `index`-th recent conversation item.
    #[must_use]
    pub fn list_item(index: usize) -> Self {
        let step = u32::try_from(index)
            .unwrap_or(u32::MAX)
            .saturating_mul(LIST_STAGGER_STEP_MS);
        Self {
            delay_ms: LIST_STAGGER_BASE_MS.saturating_add(step),
            axis: Axis::X,
            offset_px: LIST_OFFSET_PX,
            duration: "0.3s",
            settled_transform: "translateX(0)",
        }
    }

    #[must_use]
    pub fn initial_style(self) -> String {
        let transform = match self.axis {
            Axis::X => format!("translateX({}px)", self.offset_px),
            Axis::Y => format!("translateY({}px)", self.offset_px),
        };
        format!("opacity: 0; transform: {transform};")
    }

    #[must_use]
    pub fn settled_style(self) -> String {
        format!(
            "transition: opacity {d} ease, transform {d} ease; opacity: 1; transform: {t};",
            d = self.duration,
            t = self.settled_transform
        )
    }

    #[must_use]
    pub fn style(self, entered: bool) -> String {
        if entered {
            self.settled_style()
        } else {
            self.initial_style()
        }
    }
}

//! Reducer wrappers around the core UI state values.
//!
//! Document and window listeners are registered once, so they dispatch
//! actions instead of capturing a state snapshot that would go stale.
use showcase_core::{DropdownState, SidebarState, TooltipState};
use std::rc::Rc;
use yew::prelude::*;

fn keep_or_replace<T: PartialEq>(current: Rc<T>, next: T) -> Rc<T> {
    if *current == next {
        current
    } else {
        Rc::new(next)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SidebarModel(pub SidebarState);

pub enum SidebarAction {
    Toggle,
    Close,
    DocumentClick { viewport_width: f64, inside: bool },
    Resize { viewport_width: f64 },
}

impl Reducible for SidebarModel {
    type Action = SidebarAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let state = self.0;
        let next = match action {
            SidebarAction::Toggle => state.toggled(),
            SidebarAction::Close => state.closed(),
            SidebarAction::DocumentClick {
                viewport_width,
                inside,
            } => state.on_document_click(viewport_width, inside),
            SidebarAction::Resize { viewport_width } => state.on_resize(viewport_width),
        };
        keep_or_replace(self, Self(next))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DropdownModel(pub DropdownState);

pub enum DropdownAction {
    Toggle,
    Select(AttrValue),
    DocumentClick { inside: bool },
}

impl Reducible for DropdownModel {
    type Action = DropdownAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let next = match action {
            DropdownAction::Toggle => self.0.toggled(),
            DropdownAction::Select(version) => self.0.select(version.as_str()),
            DropdownAction::DocumentClick { inside } => self.0.on_document_click(inside),
        };
        keep_or_replace(self, Self(next))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TooltipModel(pub TooltipState);

pub enum TooltipAction {
    Show { text: AttrValue, x: i32, y: i32 },
    Move { x: i32, y: i32 },
    Hide,
}

impl Reducible for TooltipModel {
    type Action = TooltipAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let next = match action {
            TooltipAction::Show { text, x, y } => TooltipState::show(text.as_str(), x, y),
            TooltipAction::Move { x, y } if self.0.visible => self.0.moved(x, y),
            TooltipAction::Move { .. } => return self,
            TooltipAction::Hide => self.0.hidden(),
        };
        keep_or_replace(self, Self(next))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sidebar_reducer_reuses_rc_when_unchanged() {
        let closed = Rc::new(SidebarModel::default());
        let same = Rc::clone(&closed).reduce(SidebarAction::Close);
        assert!(Rc::ptr_eq(&closed, &same));
        let open = closed.reduce(SidebarAction::Toggle);
        assert!(open.0.open);
        let resized = open.reduce(SidebarAction::Resize {
            viewport_width: 1400.0,
        });
        assert!(!resized.0.open);
    }

    #[test]
    fn dropdown_reducer_selects_and_closes() {
        let model = Rc::new(DropdownModel(DropdownState::new("2.5 Pro")));
        let open = model.reduce(DropdownAction::Toggle);
        assert!(open.0.open);
        let picked = open.reduce(DropdownAction::Select(AttrValue::from("2.5 Flash")));
        assert!(!picked.0.open);
        assert_eq!(picked.0.selected, "2.5 Flash");
    }

    #[test]
    fn tooltip_ignores_moves_while_hidden() {
        let hidden = Rc::new(TooltipModel::default());
        let still = Rc::clone(&hidden).reduce(TooltipAction::Move { x: 5, y: 5 });
        assert!(Rc::ptr_eq(&hidden, &still));
        let shown = hidden.reduce(TooltipAction::Show {
            text: AttrValue::from("Settings"),
            x: 1,
            y: 2,
        });
        assert_eq!((shown.0.left, shown.0.top), (11, 12));
        let moved = shown.reduce(TooltipAction::Move { x: 40, y: 50 });
        assert_eq!((moved.0.left, moved.0.top), (50, 60));
        assert!(!moved.reduce(TooltipAction::Hide).0.visible);
    }
}

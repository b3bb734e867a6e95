//! Custom hooks shared by the pages.
use crate::timers::BrowserTimers;
use showcase_core::{Theme, ThemeBinding, TimerHost};
use yew::prelude::*;

/// Theme state for one page plus a toggle that persists the flipped value.
///
/// `apply` pushes the theme onto the document whenever it changes.
#[hook]
pub fn use_theme(binding: ThemeBinding, apply: fn(Theme)) -> (Theme, Callback<()>) {
    let theme = use_state(|| crate::content::stored_theme(binding));
    {
        use_effect_with(*theme, move |current| {
            apply(*current);
            || {}
        });
    }
    let toggle = {
        let theme = theme.clone();
        Callback::from(move |()| {
            let next = showcase_core::toggle_and_store(
                &crate::content::LocalPreferenceStore,
                binding,
                *theme,
            );
            theme.set(next);
        })
    };
    (*theme, toggle)
}

/// Flips to `true` once `delay_ms` has passed after mount.
#[hook]
pub fn use_entrance(delay_ms: u32) -> bool {
    let entered = use_state(|| false);
    {
        let entered = entered.clone();
        use_effect_with(delay_ms, move |delay| {
            let timeout = BrowserTimers.schedule(*delay, Box::new(move || entered.set(true)));
            move || drop(timeout)
        });
    }
    *entered
}

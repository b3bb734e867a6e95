use showcase_core::Theme;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub theme: Theme,
    pub on_toggle: Callback<()>,
}

#[function_component(ThemeToggle)]
pub fn theme_toggle(p: &Props) -> Html {
    let onclick = {
        let cb = p.on_toggle.clone();
        Callback::from(move |_: MouseEvent| cb.emit(()))
    };
    let label = if p.theme.is_dark() {
        "Switch to light mode"
    } else {
        "Switch to dark mode"
    };
    html! {
        <button id="darkModeToggle" class="dark-mode-toggle" type="button" aria-label={label} {onclick}>
            <i class={classes!("fas", p.theme.gallery_icon())} aria-hidden="true"></i>
        </button>
    }
}

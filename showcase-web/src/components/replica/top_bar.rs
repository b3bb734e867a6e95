use crate::components::replica::{TooltipTarget, VersionDropdown};
use crate::hooks::use_entrance;
use showcase_core::{DropdownState, EntranceTarget, ModelVersion, Theme};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub theme: Theme,
    pub on_toggle_theme: Callback<()>,
    pub on_menu: Callback<()>,
    pub versions: Vec<ModelVersion>,
    pub dropdown: DropdownState,
    pub on_toggle_dropdown: Callback<()>,
    pub on_select_version: Callback<AttrValue>,
    #[prop_or_default]
    pub menu_ref: NodeRef,
    #[prop_or_default]
    pub selector_ref: NodeRef,
}

#[function_component(TopBar)]
pub fn top_bar(p: &Props) -> Html {
    let entrance = EntranceTarget::TopBar.entrance();
    let entered = use_entrance(entrance.delay_ms);
    let on_menu = {
        let cb = p.on_menu.clone();
        Callback::from(move |_: MouseEvent| cb.emit(()))
    };
    let on_theme = {
        let cb = p.on_toggle_theme.clone();
        Callback::from(move |_: MouseEvent| cb.emit(()))
    };
    html! {
        <header class="top-bar" style={entrance.style(entered)}>
            <button type="button" class="menu-btn" aria-label="Open menu" ref={p.menu_ref.clone()} onclick={on_menu}>
                <span class="material-icons" aria-hidden="true">{ "menu" }</span>
            </button>
            <VersionDropdown
                versions={p.versions.clone()}
                state={p.dropdown.clone()}
                on_toggle={p.on_toggle_dropdown.clone()}
                on_select={p.on_select_version.clone()}
                node_ref={p.selector_ref.clone()}
            />
            <TooltipTarget text="Toggle dark mode">
                <button type="button" class="dark-mode-toggle" aria-pressed={p.theme.is_dark().to_string()} onclick={on_theme}>
                    <span class="material-icons" aria-hidden="true">{ p.theme.replica_icon() }</span>
                </button>
            </TooltipTarget>
        </header>
    }
}

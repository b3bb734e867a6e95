use showcase_core::{DropdownState, ModelVersion};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub versions: Vec<ModelVersion>,
    pub state: DropdownState,
    pub on_toggle: Callback<()>,
    pub on_select: Callback<AttrValue>,
    #[prop_or_default]
    pub node_ref: NodeRef,
}

#[function_component(VersionDropdown)]
pub fn version_dropdown(p: &Props) -> Html {
    let toggle = {
        let cb = p.on_toggle.clone();
        Callback::from(move |_: MouseEvent| cb.emit(()))
    };
    html! {
        <div class="version-selector-wrapper" ref={p.node_ref.clone()}>
            <button
                id="versionSelector"
                type="button"
                class="version-selector"
                aria-haspopup="listbox"
                aria-expanded={p.state.aria_expanded()}
                onclick={toggle}
            >
                <span class="text">{ p.state.selected.clone() }</span>
                <span class="material-icons" aria-hidden="true">{ "arrow_drop_down" }</span>
            </button>
            <div
                id="versionDropdown"
                class={classes!("version-dropdown", p.state.open.then_some("open"))}
                role="listbox"
            >
                { for p.versions.iter().map(|version| {
                    let selected = p.state.is_selected(&version.id);
                    let onclick = {
                        let cb = p.on_select.clone();
                        let id = AttrValue::from(version.id.clone());
                        Callback::from(move |_: MouseEvent| cb.emit(id.clone()))
                    };
                    html! {
                        <button
                            type="button"
                            role="option"
                            class={classes!("version-option", selected.then_some("active"))}
                            data-version={version.id.clone()}
                            aria-selected={selected.to_string()}
                            {onclick}
                        >
                            <span class="version-name">{ version.id.clone() }</span>
                            if !version.description.is_empty() {
                                <span class="version-description">{ version.description.clone() }</span>
                            }
                        </button>
                    }
                }) }
            </div>
        </div>
    }
}

use showcase_core::FilterOption;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub options: Vec<FilterOption>,
    pub active: AttrValue,
    pub on_select: Callback<String>,
}

/// Single-select row of category buttons. Exactly one button carries `active`.
#[function_component(FilterBar)]
pub fn filter_bar(p: &Props) -> Html {
    html! {
        <div class="filter-buttons" role="group" aria-label="Filter by category">
            { for p.options.iter().map(|opt| {
                let active = p.active.as_str() == opt.value;
                let onclick = {
                    let cb = p.on_select.clone();
                    let value = opt.value.clone();
                    Callback::from(move |_: MouseEvent| cb.emit(value.clone()))
                };
                html! {
                    <button
                        type="button"
                        class={classes!("filter-btn", active.then_some("active"))}
                        data-filter={opt.value.clone()}
                        aria-pressed={active.to_string()}
                        {onclick}
                    >
                        { opt.label.clone() }
                    </button>
                }
            }) }
        </div>
    }
}

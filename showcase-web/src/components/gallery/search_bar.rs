use web_sys::HtmlInputElement;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub query: AttrValue,
    pub on_input: Callback<String>,
    #[prop_or(AttrValue::from("Search projects, technologies..."))]
    pub placeholder: AttrValue,
}

#[function_component(SearchBar)]
pub fn search_bar(p: &Props) -> Html {
    let oninput = {
        let cb = p.on_input.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            cb.emit(input.value());
        })
    };
    html! {
        <div class="search-container" role="search">
            <label for="searchInput" class="sr-only">{ "Search projects" }</label>
            <i class="fas fa-search search-icon" aria-hidden="true"></i>
            <input
                id="searchInput"
                type="search"
                autocomplete="off"
                placeholder={p.placeholder.clone()}
                value={p.query.clone()}
                {oninput}
            />
        </div>
    }
}

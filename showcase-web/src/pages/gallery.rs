//! Project gallery: search box, category buttons and the card grid.
use crate::components::gallery::{CardGrid, FilterBar, SearchBar, ThemeToggle};
use crate::hooks::use_theme;
use showcase_core::{CardCatalog, FilterState, ThemeBinding, compute_visibility, visible_count};
use std::rc::Rc;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct GalleryPageProps {
    pub catalog: Rc<CardCatalog>,
    #[prop_or_default]
    pub initial_filter: Option<FilterState>,
}

#[function_component(GalleryPage)]
pub fn gallery_page(props: &GalleryPageProps) -> Html {
    let (theme, toggle_theme) = use_theme(ThemeBinding::GALLERY, crate::dom::apply_gallery_theme);
    use_effect_with((), |_| crate::dom::clear_gallery_theme);
    let filter = {
        let initial = props.initial_filter.clone();
        use_state(move || initial.unwrap_or_default())
    };

    // Both triggers rebuild the full state, so neither input resets the other.
    let on_query = {
        let filter = filter.clone();
        Callback::from(move |query: String| filter.set(filter.with_query(query)))
    };
    let on_category = {
        let filter = filter.clone();
        Callback::from(move |category: String| filter.set(filter.with_category(category)))
    };

    let cards = Rc::new(props.catalog.cards.clone());
    let visibility = compute_visibility(&cards, &filter);
    let status = crate::a11y::results_status(visible_count(&visibility), cards.len());

    html! {
        <div class="gallery-page">
            <header class="gallery-header">
                <h1>{ "Projects" }</h1>
                <SearchBar query={AttrValue::from(filter.query.clone())} on_input={on_query} />
                <ThemeToggle {theme} on_toggle={toggle_theme} />
            </header>
            <FilterBar
                options={props.catalog.filters.clone()}
                active={AttrValue::from(filter.active_category.clone())}
                on_select={on_category}
            />
            <p id="gallery-status" class="sr-only" role="status" aria-live="polite">{ status }</p>
            <CardGrid {cards} visibility={Rc::new(visibility)} />
        </div>
    }
}

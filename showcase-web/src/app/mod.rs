use crate::pages::{GalleryPage, NotFoundPage, ReplicaPage};
use crate::router::Route;
use showcase_core::{CardCatalog, ReplicaConfig};
use std::rc::Rc;
use yew::prelude::*;
use yew_router::prelude::*;

pub mod state;

/// Bundled page content, loaded once per app instance.
#[derive(Clone, PartialEq)]
pub struct Content {
    pub catalog: Rc<CardCatalog>,
    pub replica: Rc<ReplicaConfig>,
}

impl Content {
    #[must_use]
    pub fn bundled() -> Self {
        Self {
            catalog: Rc::new(crate::content::catalog_or_empty()),
            replica: Rc::new(crate::content::replica_or_default()),
        }
    }
}

/// Main application component providing browser routing.
#[function_component(App)]
pub fn app() -> Html {
    let router_base = crate::paths::router_base().map(AttrValue::from);
    html! {
        <BrowserRouter basename={router_base}>
            <AppShell />
        </BrowserRouter>
    }
}

#[function_component(AppShell)]
pub fn app_shell() -> Html {
    let content = use_state(Content::bundled);
    let route = use_route::<Route>().unwrap_or(Route::Gallery);
    html! {
        <>
            <style>{ crate::a11y::visible_focus_css() }</style>
            <PageNav current={route.clone()} />
            { render_route(&route, &content) }
        </>
    }
}

/// Route switch, kept free of hooks so it can be rendered without a router.
#[must_use]
pub fn render_route(route: &Route, content: &Content) -> Html {
    match route {
        Route::Gallery => html! { <GalleryPage catalog={content.catalog.clone()} /> },
        Route::Replica => html! { <ReplicaPage config={content.replica.clone()} /> },
        Route::NotFound => html! { <NotFoundPage /> },
    }
}

#[derive(Properties, PartialEq, Clone)]
struct PageNavProps {
    current: Route,
}

#[function_component(PageNav)]
fn page_nav(p: &PageNavProps) -> Html {
    let pages = [Route::Gallery, Route::Replica];
    html! {
        <nav class="page-nav" aria-label="Pages">
            { for pages.into_iter().filter_map(|route| {
                let label = route.nav_label()?;
                let current = route == p.current;
                Some(html! {
                    <Link<Route>
                        to={route}
                        classes={classes!("page-nav__link", current.then_some("active"))}
                    >
                        { label }
                    </Link<Route>>
                })
            }) }
        </nav>
    }
}

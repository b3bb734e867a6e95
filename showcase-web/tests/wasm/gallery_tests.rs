use gloo::timers::future::TimeoutFuture;
use showcase_core::{Card, CardCatalog};
use showcase_web::dom;
use showcase_web::pages::GalleryPage;
use showcase_web::pages::gallery::GalleryPageProps;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::{Event, EventInit, HtmlElement, HtmlInputElement};
use yew::{AppHandle, Renderer};

fn fresh_root() -> web_sys::Element {
    let doc = dom::document().expect("document");
    if let Some(root) = doc.get_element_by_id("gallery-root") {
        root.set_inner_html("");
        return root;
    }
    let root = doc.create_element("div").expect("create root");
    root.set_id("gallery-root");
    doc.body()
        .expect("body")
        .append_child(&root)
        .expect("append root");
    root
}

fn render_gallery() -> AppHandle<GalleryPage> {
    let catalog = CardCatalog::from_cards(vec![
        Card::new("Portfolio", "Personal site")
            .with_category("web")
            .with_technologies("HTML,CSS"),
        Card::new("Chatbot", "Support helper")
            .with_category("ai")
            .with_technologies("Python"),
    ]);
    let props = GalleryPageProps {
        catalog: Rc::new(catalog),
        initial_filter: None,
    };
    Renderer::<GalleryPage>::with_root_and_props(fresh_root(), props).render()
}

fn hidden_titles() -> Vec<String> {
    let doc = dom::document().expect("document");
    let list = doc
        .query_selector_all("#gallery-root .card.hidden h2")
        .expect("query cards");
    (0..list.length())
        .filter_map(|i| list.get(i))
        .filter_map(|node| node.text_content())
        .collect()
}

fn bubbling(kind: &str) -> Event {
    let init = EventInit::new();
    init.set_bubbles(true);
    Event::new_with_event_init_dict(kind, &init).expect("event")
}

#[wasm_bindgen_test]
async fn typing_then_picking_category_keeps_query() {
    let _app = render_gallery();
    TimeoutFuture::new(0).await;
    let doc = dom::document().expect("document");

    let input: HtmlInputElement = doc
        .get_element_by_id("searchInput")
        .expect("search input")
        .dyn_into()
        .expect("input element");
    input.set_value("chat");
    input.dispatch_event(&bubbling("input")).expect("dispatch input");
    TimeoutFuture::new(0).await;
    assert_eq!(hidden_titles(), vec!["Portfolio".to_string()]);

    let web_button: HtmlElement = doc
        .query_selector("#gallery-root .filter-btn[data-filter='web']")
        .expect("query")
        .expect("web button")
        .dyn_into()
        .expect("button");
    web_button.click();
    TimeoutFuture::new(0).await;
    assert_eq!(
        hidden_titles(),
        vec!["Portfolio".to_string(), "Chatbot".to_string()]
    );
    assert_eq!(input.value(), "chat");
}

fn html_theme() -> Option<String> {
    dom::document()
        .and_then(|doc| doc.document_element())
        .and_then(|root| root.get_attribute("data-theme"))
}

#[wasm_bindgen_test]
async fn leaving_gallery_clears_html_theme() {
    let app = render_gallery();
    TimeoutFuture::new(0).await;
    assert!(html_theme().is_some(), "gallery themes the document root");

    app.destroy();
    TimeoutFuture::new(0).await;
    assert_eq!(html_theme(), None);
}

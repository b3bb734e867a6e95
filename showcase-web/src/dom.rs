use showcase_core::Theme;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, Event, Node, Storage, Window};
use yew::NodeRef;

/// Width assumed when the viewport cannot be measured.
const FALLBACK_VIEWPORT_WIDTH: f64 = 1024.0;

/// Retrieve the global `window` object, if running in a browser.
#[must_use]
pub fn window() -> Option<Window> {
    web_sys::window()
}

/// Retrieve the document object for DOM interactions.
#[must_use]
pub fn document() -> Option<Document> {
    window().and_then(|win| win.document())
}

/// Convert a JavaScript value into a readable string for error reporting.
#[must_use]
pub fn js_error_message(value: &JsValue) -> String {
    value
        .as_string()
        .or_else(|| {
            value
                .dyn_ref::<js_sys::Error>()
                .map(|err| err.message().into())
        })
        .unwrap_or_else(|| format!("{value:?}"))
}

/// Access the browser `localStorage` handle.
///
/// # Errors
/// Returns an error if the browser window cannot be accessed or `localStorage` is unavailable.
pub fn local_storage() -> Result<Storage, JsValue> {
    window()
        .ok_or_else(|| JsValue::from_str("window unavailable"))?
        .local_storage()?
        .ok_or_else(|| JsValue::from_str("localStorage unavailable"))
}

/// Current `innerWidth` in CSS pixels.
#[must_use]
pub fn viewport_width() -> f64 {
    window()
        .and_then(|win| win.inner_width().ok())
        .and_then(|width| width.as_f64())
        .unwrap_or(FALLBACK_VIEWPORT_WIDTH)
}

/// Whether the event target sits inside any of the referenced nodes.
#[must_use]
pub fn event_within(event: &Event, refs: &[&NodeRef]) -> bool {
    let Some(target) = event.target().and_then(|t| t.dyn_into::<Node>().ok()) else {
        return false;
    };
    refs.iter()
        .filter_map(|r| r.cast::<Node>())
        .any(|node| node.contains(Some(&target)))
}

/// Gallery theme lives on `<html data-theme>`.
pub fn apply_gallery_theme(theme: Theme) {
    if let Some(root) = document().and_then(|doc| doc.document_element()) {
        let _ = root.set_attribute("data-theme", theme.as_str());
    }
}

/// Drop the gallery's `data-theme` so other pages start unthemed.
pub fn clear_gallery_theme() {
    if let Some(root) = document().and_then(|doc| doc.document_element()) {
        let _ = root.remove_attribute("data-theme");
    }
}

/// Replica theme swaps `light-mode`/`dark-mode` on `<body>`.
pub fn apply_replica_theme(theme: Theme) {
    let Some(body) = document().and_then(|doc| doc.body()) else {
        return;
    };
    let classes = body.class_list();
    let _ = classes.remove_1(theme.toggle().body_class());
    let _ = classes.add_1(theme.body_class());
    let _ = body
        .style()
        .set_property("transition", "background-color 0.3s ease, color 0.3s ease");
}

pub fn clear_replica_theme() {
    if let Some(body) = document().and_then(|doc| doc.body()) {
        let _ = body
            .class_list()
            .remove_2(Theme::Light.body_class(), Theme::Dark.body_class());
    }
}

/// Scroll an element so its bottom edge lines up with the viewport.
pub fn scroll_into_view_end(node: &NodeRef) {
    if let Some(el) = node.cast::<Element>() {
        el.scroll_into_view_with_bool(false);
    }
}

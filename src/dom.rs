use anyhow::{anyhow, Result};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

pub fn element_by_id(document: &web::Document, id: &str) -> Result<web::Element> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| anyhow!("missing #{}", id))
}

/// Look up `#id` and cast it to a concrete element type.
pub fn typed_by_id<T: JsCast>(document: &web::Document, id: &str) -> Result<T> {
    element_by_id(document, id)?
        .dyn_into::<T>()
        .map_err(|e| anyhow!("#{} has unexpected type: {:?}", id, e))
}

pub fn query_all(document: &web::Document, selector: &str) -> Vec<web::Element> {
    match document.query_selector_all(selector) {
        Ok(list) => node_list_elements(&list),
        Err(e) => {
            log::warn!("bad selector {:?}: {:?}", selector, e);
            Vec::new()
        }
    }
}

pub fn query_all_in(root: &web::Element, selector: &str) -> Vec<web::Element> {
    match root.query_selector_all(selector) {
        Ok(list) => node_list_elements(&list),
        Err(e) => {
            log::warn!("bad selector {:?}: {:?}", selector, e);
            Vec::new()
        }
    }
}

pub fn query_one(document: &web::Document, selector: &str) -> Option<web::Element> {
    document.query_selector(selector).ok().flatten()
}

fn node_list_elements(list: &web::NodeList) -> Vec<web::Element> {
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<web::Element>().ok())
        .collect()
}

/// Attach a listener for the lifetime of the page.
pub fn listen(target: &web::EventTarget, event: &str, handler: impl FnMut(web::Event) + 'static) {
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(web::Event)>);
    let _ = target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
    closure.forget();
}

/// Like [`listen`], registered as passive so it never blocks scrolling.
pub fn listen_passive(
    target: &web::EventTarget,
    event: &str,
    handler: impl FnMut(web::Event) + 'static,
) {
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(web::Event)>);
    let options = web::AddEventListenerOptions::new();
    options.set_passive(true);
    let _ = target.add_event_listener_with_callback_and_add_event_listener_options(
        event,
        closure.as_ref().unchecked_ref(),
        &options,
    );
    closure.forget();
}

/// Pointer position of a mouse event, if it is one.
#[inline]
pub fn client_pos(ev: &web::Event) -> Option<glam::Vec2> {
    ev.dyn_ref::<web::MouseEvent>()
        .map(|m| glam::Vec2::new(m.client_x() as f32, m.client_y() as f32))
}

#[inline]
pub fn set_class(el: &web::Element, class: &str, on: bool) {
    let cl = el.class_list();
    if on {
        let _ = cl.add_1(class);
    } else {
        let _ = cl.remove_1(class);
    }
}

#[inline]
pub fn set_style(el: &web::Element, property: &str, value: &str) {
    if let Some(html) = el.dyn_ref::<web::HtmlElement>() {
        let _ = html.style().set_property(property, value);
    }
}

#[inline]
pub fn set_text(el: &web::Element, text: &str) {
    el.set_text_content(Some(text));
}

/// Whether the primary input reports high pointer precision (mouse/trackpad).
pub fn has_fine_pointer(window: &web::Window) -> bool {
    matches!(
        window.match_media(crate::constants::POINTER_FINE_QUERY),
        Ok(Some(mql)) if mql.matches()
    )
}

pub fn smooth_scroll_to(window: &web::Window, top: f64) {
    let options = web::ScrollToOptions::new();
    options.set_top(top);
    options.set_behavior(web::ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&options);
}

/// Current scroll offset, falling back to the root element for engines that
/// report 0 on the window.
pub fn scroll_top(window: &web::Window, document: &web::Document) -> f64 {
    let y = window.page_y_offset().unwrap_or(0.0);
    if y != 0.0 {
        return y;
    }
    document
        .document_element()
        .map(|root| root.scroll_top() as f64)
        .unwrap_or(0.0)
}

#[inline]
pub fn inner_height(window: &web::Window) -> f64 {
    window
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0)
}

use crate::constants::{CLASS_HIDDEN, CLASS_LOADING, PRELOADER_ID};
use crate::core::constants::{PRELOADER_GRACE_MS, PRELOADER_TIMEOUT_MS};
use crate::core::Preloader;
use crate::dom;
use gloo_timers::callback::Timeout;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

#[inline]
fn hide(document: &web::Document, el: &web::Element) {
    dom::set_class(el, CLASS_HIDDEN, true);
    if let Some(body) = document.body() {
        dom::set_class(&body, CLASS_LOADING, false);
    }
}

/// Hide the preloader on `load` + grace delay or after the fallback timeout,
/// whichever comes first.
pub fn wire(window: &web::Window, document: &web::Document) -> anyhow::Result<()> {
    let el = dom::element_by_id(document, PRELOADER_ID)?;
    if let Some(body) = document.body() {
        dom::set_class(&body, CLASS_LOADING, true);
    }

    let state = Rc::new(RefCell::new(Preloader::default()));
    let hide_once = {
        let document = document.clone();
        move || {
            if state.borrow_mut().hide() {
                hide(&document, &el);
                log::debug!("[preloader] hidden");
            }
        }
    };

    let on_load = hide_once.clone();
    dom::listen(window, "load", move |_| {
        let on_load = on_load.clone();
        Timeout::new(PRELOADER_GRACE_MS, on_load).forget();
    });
    Timeout::new(PRELOADER_TIMEOUT_MS, hide_once).forget();
    Ok(())
}

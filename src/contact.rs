use crate::constants::{
    CLASS_LOADING, CLASS_SUCCESS, CONTACT_FORM_ID, FORM_INPUTS_SELECTOR, SUBMIT_BUTTON_SELECTOR,
};
use crate::core::constants::{FORM_SENDING_MS, FORM_SUCCESS_MS};
use crate::core::{ContactFields, ContactForm};
use crate::dom;
use gloo_timers::future::TimeoutFuture;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

/// Value of a named input or textarea inside the form.
fn field_value(form: &web::HtmlFormElement, id: &str) -> String {
    let Ok(Some(el)) = form.query_selector(&format!("#{}", id)) else {
        return String::new();
    };
    if let Some(input) = el.dyn_ref::<web::HtmlInputElement>() {
        input.value()
    } else if let Some(area) = el.dyn_ref::<web::HtmlTextAreaElement>() {
        area.value()
    } else {
        String::new()
    }
}

fn read_fields(form: &web::HtmlFormElement) -> ContactFields {
    ContactFields {
        name: field_value(form, "name"),
        email: field_value(form, "email"),
        subject: field_value(form, "subject"),
        message: field_value(form, "message"),
    }
}

fn set_disabled(button: &web::Element, disabled: bool) {
    if let Some(b) = button.dyn_ref::<web::HtmlButtonElement>() {
        b.set_disabled(disabled);
    }
}

/// Loading -> success -> reset, with simulated latency. Nothing is sent.
async fn run_submission(
    form: web::HtmlFormElement,
    button: web::Element,
    state: Rc<RefCell<ContactForm>>,
) {
    dom::set_class(&button, CLASS_LOADING, true);
    set_disabled(&button, true);

    TimeoutFuture::new(FORM_SENDING_MS).await;
    state.borrow_mut().sent();
    dom::set_class(&button, CLASS_LOADING, false);
    dom::set_class(&button, CLASS_SUCCESS, true);

    TimeoutFuture::new(FORM_SUCCESS_MS).await;
    form.reset();
    dom::set_class(&button, CLASS_SUCCESS, false);
    set_disabled(&button, false);
    state.borrow_mut().reset();
    log::debug!("[contact] form reset");
}

pub fn wire(document: &web::Document) -> anyhow::Result<()> {
    let form: web::HtmlFormElement = dom::typed_by_id(document, CONTACT_FORM_ID)?;
    let button = form
        .query_selector(SUBMIT_BUTTON_SELECTOR)
        .ok()
        .flatten()
        .ok_or_else(|| anyhow::anyhow!("#{} has no {}", CONTACT_FORM_ID, SUBMIT_BUTTON_SELECTOR))?;

    // Floating labels key off `:not(:placeholder-shown)`.
    for input in dom::query_all_in(&form, FORM_INPUTS_SELECTOR) {
        let _ = input.set_attribute("placeholder", " ");
    }

    let state = Rc::new(RefCell::new(ContactForm::default()));
    let form_for_submit = form.clone();
    dom::listen(&form, "submit", move |ev| {
        ev.prevent_default();
        let fields = read_fields(&form_for_submit);
        if let Err(e) = state.borrow_mut().submit(&fields) {
            log::debug!("[contact] submission rejected: {}", e);
            return;
        }
        spawn_local(run_submission(
            form_for_submit.clone(),
            button.clone(),
            state.clone(),
        ));
    });
    Ok(())
}

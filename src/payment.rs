use crate::constants::{
    CLASS_ACTIVE, CLOSE_MODAL_SELECTOR, CONFIRM_PAYMENT_ID, DATA_PRICE_BDT, DATA_PRICE_EUR,
    DATA_TAB, DOWNLOAD_LINK_SELECTOR, LABEL_VERIFIED, LABEL_VERIFY, LABEL_VERIFYING,
    MODAL_FILENAME_ID, MODAL_PRICE_ID, PAYMENT_MODAL_ID, TAB_BUTTON_SELECTOR, TAB_CONTENT_SELECTOR,
    TRANSACTION_ID_INPUT, VERIFIED_BACKGROUND,
};
use crate::core::constants::{VERIFIED_CLOSE_MS, VERIFY_DELAY_MS};
use crate::core::payment::MISSING_TRANSACTION_ALERT;
use crate::core::{DownloadTarget, ModalState, PaymentError, PaymentModal, SessionId};
use crate::dom;
use gloo_timers::future::TimeoutFuture;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

/// The modal's elements plus its session state.
struct Gateway {
    window: web::Window,
    document: web::Document,
    state: RefCell<PaymentModal>,
    modal: web::Element,
    file_name: web::Element,
    price: web::Element,
    confirm: web::HtmlButtonElement,
    transaction: Option<web::HtmlInputElement>,
    tab_buttons: Vec<web::Element>,
    tab_contents: Vec<web::Element>,
}

impl Gateway {
    fn open(&self, link: &web::Element) {
        let file_name = link
            .dyn_ref::<web::HtmlElement>()
            .map(|h| h.inner_text())
            .unwrap_or_else(|| link.text_content().unwrap_or_default());
        let target = DownloadTarget::new(
            &file_name,
            &link.get_attribute("href").unwrap_or_default(),
            link.get_attribute(DATA_PRICE_BDT).as_deref(),
            link.get_attribute(DATA_PRICE_EUR).as_deref(),
        );
        let mut state = self.state.borrow_mut();
        match state.open(target) {
            Ok(session) => {
                if let Some(target) = state.target() {
                    dom::set_text(&self.file_name, &target.file_name);
                    dom::set_text(&self.price, &target.price_label());
                }
                dom::set_class(&self.modal, CLASS_ACTIVE, true);
                log::debug!("[payment] session {} opened", session);
            }
            Err(e) => log::debug!("[payment] open ignored: {}", e),
        }
    }

    fn close(&self) {
        let mut state = self.state.borrow_mut();
        if !state.is_open() {
            return;
        }
        state.close();
        dom::set_class(&self.modal, CLASS_ACTIVE, false);
    }

    fn select_tab(&self, clicked: &web::Element) {
        let Some(tab) = clicked.get_attribute(DATA_TAB) else {
            return;
        };
        let mut state = self.state.borrow_mut();
        if let Err(e) = state.select_tab(&tab) {
            log::debug!("[payment] {}", e);
            return;
        }
        let active = state.active_tab();
        for btn in &self.tab_buttons {
            dom::set_class(btn, CLASS_ACTIVE, btn == clicked);
        }
        for panel in &self.tab_contents {
            dom::set_class(panel, CLASS_ACTIVE, active == Some(panel.id().as_str()));
        }
    }

    fn transaction_id(&self) -> String {
        self.transaction
            .as_ref()
            .map(|i| i.value())
            .unwrap_or_default()
    }

    /// Confirm click. Returns the session now being verified.
    fn begin_verification(&self) -> Option<SessionId> {
        let result = self.state.borrow_mut().confirm(&self.transaction_id());
        match result {
            Ok(session) => {
                self.confirm.set_disabled(true);
                self.confirm.set_inner_html(LABEL_VERIFYING);
                Some(session)
            }
            Err(PaymentError::MissingTransactionId) => {
                let _ = self.window.alert_with_message(MISSING_TRANSACTION_ALERT);
                if let Some(input) = &self.transaction {
                    let _ = input.focus();
                }
                None
            }
            Err(e) => {
                log::debug!("[payment] confirm ignored: {}", e);
                None
            }
        }
    }

    /// Same-tab download through a temporary `<a download>`.
    fn trigger_download(&self, url: &str) {
        let Some(body) = self.document.body() else {
            return;
        };
        let Ok(anchor) = self
            .document
            .create_element("a")
            .map(|el| el.unchecked_into::<web::HtmlAnchorElement>())
        else {
            return;
        };
        anchor.set_href(url);
        anchor.set_download("");
        let _ = body.append_child(&anchor);
        anchor.click();
        let _ = body.remove_child(&anchor);
    }

    /// No session is mid-verification, so the confirm control may be reset.
    fn is_settled(&self) -> bool {
        !matches!(
            self.state.borrow().state(),
            ModalState::Verifying | ModalState::Verified
        )
    }

    /// Session over: confirm control back to its idle label, reference cleared.
    fn end_session(&self) {
        self.confirm.set_disabled(false);
        self.confirm.set_inner_html(LABEL_VERIFY);
        let _ = self.confirm.style().remove_property("background");
        if let Some(input) = &self.transaction {
            input.set_value("");
        }
    }
}

/// Verifying -> verified + download -> close. Verification is simulated and
/// always succeeds. A session closed mid-way still downloads, but only the
/// session on screen drives the modal.
async fn run_verification(gateway: Rc<Gateway>, session: SessionId) {
    TimeoutFuture::new(VERIFY_DELAY_MS).await;
    let verified = gateway.state.borrow_mut().verification_complete(session);
    let Some(verified) = verified else {
        log::warn!("[payment] session {} had no pending download", session);
        return;
    };
    if verified.visible {
        gateway.confirm.set_inner_html(LABEL_VERIFIED);
        let _ = gateway
            .confirm
            .style()
            .set_property("background", VERIFIED_BACKGROUND);
    }
    gateway.trigger_download(&verified.url);
    log::info!("[payment] session {} verified, downloading {}", session, verified.url);

    TimeoutFuture::new(VERIFIED_CLOSE_MS).await;
    let finished = gateway.state.borrow_mut().finish(session);
    if finished {
        dom::set_class(&gateway.modal, CLASS_ACTIVE, false);
    }
    if finished || gateway.is_settled() {
        gateway.end_session();
    }
}

pub fn wire(window: &web::Window, document: &web::Document) -> anyhow::Result<()> {
    let tab_buttons = dom::query_all(document, TAB_BUTTON_SELECTOR);
    let tab_ids: Vec<String> = tab_buttons
        .iter()
        .filter_map(|b| b.get_attribute(DATA_TAB))
        .collect();
    let gateway = Rc::new(Gateway {
        window: window.clone(),
        document: document.clone(),
        state: RefCell::new(PaymentModal::new(tab_ids)),
        modal: dom::element_by_id(document, PAYMENT_MODAL_ID)?,
        file_name: dom::element_by_id(document, MODAL_FILENAME_ID)?,
        price: dom::element_by_id(document, MODAL_PRICE_ID)?,
        confirm: dom::typed_by_id(document, CONFIRM_PAYMENT_ID)?,
        transaction: dom::typed_by_id(document, TRANSACTION_ID_INPUT).ok(),
        tab_buttons,
        tab_contents: dom::query_all(document, TAB_CONTENT_SELECTOR),
    });

    for link in dom::query_all(document, DOWNLOAD_LINK_SELECTOR) {
        let gateway = gateway.clone();
        let clicked = link.clone();
        dom::listen(&link, "click", move |ev| {
            ev.prevent_default();
            gateway.open(&clicked);
        });
    }

    if let Some(close) = dom::query_one(document, CLOSE_MODAL_SELECTOR) {
        let gateway = gateway.clone();
        dom::listen(&close, "click", move |_| gateway.close());
    }

    for btn in gateway.tab_buttons.clone() {
        let gateway = gateway.clone();
        let clicked = btn.clone();
        dom::listen(&btn, "click", move |_| gateway.select_tab(&clicked));
    }

    {
        let gateway = gateway.clone();
        let confirm = gateway.confirm.clone();
        dom::listen(&confirm, "click", move |_| {
            if let Some(session) = gateway.begin_verification() {
                spawn_local(run_verification(gateway.clone(), session));
            }
        });
    }

    // Backdrop click: only when the click lands on the modal element itself.
    {
        let gateway = gateway.clone();
        dom::listen(window, "click", move |ev| {
            let on_backdrop = ev
                .target()
                .and_then(|t| t.dyn_into::<web::Element>().ok())
                .is_some_and(|t| t == gateway.modal);
            if on_backdrop {
                gateway.close();
            }
        });
    }

    log::info!("[payment] modal wired");
    Ok(())
}

use crate::constants::{
    ANCHOR_SELECTOR, BACK_TO_TOP_ID, CLASS_ACTIVE, HAMBURGER_ID, NAV_LINKS_ID, NAV_LINK_SELECTOR,
};
use crate::core::nav::anchor_target_id;
use crate::core::scroll::anchor_scroll_top;
use crate::core::MenuState;
use crate::dom;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

struct Menu {
    state: RefCell<MenuState>,
    hamburger: web::Element,
    links: web::Element,
}

impl Menu {
    fn render(&self) {
        let open = self.state.borrow().is_open();
        dom::set_class(&self.hamburger, CLASS_ACTIVE, open);
        dom::set_class(&self.links, CLASS_ACTIVE, open);
    }

    fn toggle(&self) {
        self.state.borrow_mut().toggle();
        self.render();
    }

    fn close(&self) {
        if self.state.borrow_mut().close() {
            self.render();
        }
    }

    fn contains(&self, target: Option<&web::Node>) -> bool {
        self.links.contains(target) || self.hamburger.contains(target)
    }
}

/// Hamburger toggle; any nav-link click or click outside the menu closes it.
pub fn wire_menu(document: &web::Document) -> anyhow::Result<()> {
    let menu = Rc::new(Menu {
        state: RefCell::new(MenuState::default()),
        hamburger: dom::element_by_id(document, HAMBURGER_ID)?,
        links: dom::element_by_id(document, NAV_LINKS_ID)?,
    });

    {
        let menu = menu.clone();
        let hamburger = menu.hamburger.clone();
        dom::listen(&hamburger, "click", move |_| menu.toggle());
    }
    for link in dom::query_all_in(&menu.links, NAV_LINK_SELECTOR) {
        let menu = menu.clone();
        dom::listen(&link, "click", move |_| menu.close());
    }
    dom::listen(document, "click", move |ev| {
        let target = ev.target().and_then(|t| t.dyn_into::<web::Node>().ok());
        if !menu.contains(target.as_ref()) {
            menu.close();
        }
    });
    Ok(())
}

/// In-page links scroll smoothly, stopping short of the fixed navbar.
pub fn wire_anchors(window: &web::Window, document: &web::Document) {
    for anchor in dom::query_all(document, ANCHOR_SELECTOR) {
        let window = window.clone();
        let document = document.clone();
        let href = anchor.get_attribute("href").unwrap_or_default();
        dom::listen(&anchor, "click", move |ev| {
            ev.prevent_default();
            let Some(target) = anchor_target_id(&href).and_then(|id| document.get_element_by_id(id))
            else {
                return;
            };
            let rect_top = target.get_bounding_client_rect().top();
            let page_y = window.page_y_offset().unwrap_or(0.0);
            dom::smooth_scroll_to(&window, anchor_scroll_top(rect_top, page_y));
        });
    }
}

pub fn wire_back_to_top(window: &web::Window, document: &web::Document) -> anyhow::Result<()> {
    let btn = dom::element_by_id(document, BACK_TO_TOP_ID)?;
    let window = window.clone();
    dom::listen(&btn, "click", move |_| dom::smooth_scroll_to(&window, 0.0));
    Ok(())
}

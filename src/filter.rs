use crate::constants::{
    CARD_FADE_IN_ANIMATION, CLASS_ACTIVE, CLASS_HIDDEN, DATA_CATEGORY, DATA_FILTER,
    FILTER_BUTTON_SELECTOR, PROJECT_CARD_SELECTOR,
};
use crate::core::FilterState;
use crate::dom;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

struct ProjectGrid {
    state: RefCell<FilterState>,
    buttons: Vec<web::Element>,
    cards: Vec<web::Element>,
}

impl ProjectGrid {
    fn select(&self, clicked: &web::Element) {
        let raw = clicked.get_attribute(DATA_FILTER).unwrap_or_default();
        if let Err(e) = self.state.borrow_mut().select(&raw) {
            log::debug!("[filter] {}", e);
            return;
        }
        for btn in &self.buttons {
            dom::set_class(btn, CLASS_ACTIVE, btn == clicked);
        }
        let categories: Vec<Option<String>> = self
            .cards
            .iter()
            .map(|c| c.get_attribute(DATA_CATEGORY))
            .collect();
        let visible = self
            .state
            .borrow()
            .visibility(categories.iter().map(Option::as_deref));
        for (card, show) in self.cards.iter().zip(visible) {
            dom::set_class(card, CLASS_HIDDEN, !show);
            if show {
                dom::set_style(card, "animation", CARD_FADE_IN_ANIMATION);
            }
        }
    }
}

pub fn wire(document: &web::Document) {
    let buttons = dom::query_all(document, FILTER_BUTTON_SELECTOR);
    let declared: Vec<String> = buttons
        .iter()
        .filter_map(|b| b.get_attribute(DATA_FILTER))
        .collect();
    let grid = Rc::new(ProjectGrid {
        state: RefCell::new(FilterState::new(declared)),
        buttons,
        cards: dom::query_all(document, PROJECT_CARD_SELECTOR),
    });
    log::info!(
        "[filter] {} controls, {} cards, categories={:?}",
        grid.buttons.len(),
        grid.cards.len(),
        grid.state.borrow().categories()
    );
    for btn in grid.buttons.clone() {
        let grid = grid.clone();
        let clicked = btn.clone();
        dom::listen(&btn, "click", move |_| grid.select(&clicked));
    }
}

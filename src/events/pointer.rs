use crate::constants::{
    CLASS_EXPAND, CURSOR_DOT_ID, CURSOR_RING_ID, MAGNETIC_BUTTON_SELECTOR, PROJECT_CARD_SELECTOR,
};
use crate::core::cursor::INTERACTIVE_SELECTORS;
use crate::core::hover::{self, ElementRect, Tilt, MAGNET_RESET_CSS, TILT_RESET_CSS};
use crate::core::CursorFollower;
use crate::dom;
use crate::frame;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

#[inline]
fn element_rect(el: &web::Element) -> ElementRect {
    let r = el.get_bounding_client_rect();
    ElementRect::new(r.left() as f32, r.top() as f32, r.width() as f32, r.height() as f32)
}

#[inline]
fn px(v: f32) -> String {
    format!("{}px", v)
}

/// Dot snaps to the pointer; ring eases toward it once per frame.
pub fn wire_cursor(document: &web::Document) -> anyhow::Result<()> {
    let dot = dom::element_by_id(document, CURSOR_DOT_ID)?;
    let ring = dom::element_by_id(document, CURSOR_RING_ID)?;
    let cursor = Rc::new(RefCell::new(CursorFollower::default()));

    {
        let cursor = cursor.clone();
        dom::listen(document, "mousemove", move |ev| {
            if let Some(pos) = dom::client_pos(&ev) {
                cursor.borrow_mut().pointer_moved(pos.x, pos.y);
                dom::set_style(&dot, "left", &px(pos.x));
                dom::set_style(&dot, "top", &px(pos.y));
            }
        });
    }

    for el in dom::query_all(document, INTERACTIVE_SELECTORS) {
        let (enter_cursor, enter_ring) = (cursor.clone(), ring.clone());
        dom::listen(&el, "mouseenter", move |_| {
            enter_cursor.borrow_mut().set_expanded(true);
            dom::set_class(&enter_ring, CLASS_EXPAND, true);
        });
        let (leave_cursor, leave_ring) = (cursor.clone(), ring.clone());
        dom::listen(&el, "mouseleave", move |_| {
            leave_cursor.borrow_mut().set_expanded(false);
            dom::set_class(&leave_ring, CLASS_EXPAND, false);
        });
    }

    frame::start_loop(move |_| {
        let pos = cursor.borrow_mut().step();
        dom::set_style(&ring, "left", &px(pos.x));
        dom::set_style(&ring, "top", &px(pos.y));
    });
    log::info!("[cursor] follower active");
    Ok(())
}

/// 3-D tilt on project cards.
pub fn wire_tilt(document: &web::Document) {
    for card in dom::query_all(document, PROJECT_CARD_SELECTOR) {
        let target = card.clone();
        dom::listen(&card, "mousemove", move |ev| {
            if let Some(pos) = dom::client_pos(&ev) {
                let tilt = Tilt::from_pointer(pos, element_rect(&target));
                dom::set_style(&target, "transform", &tilt.css());
            }
        });
        let target = card.clone();
        dom::listen(&card, "mouseleave", move |_| {
            dom::set_style(&target, "transform", TILT_RESET_CSS);
        });
    }
}

/// Buttons that lean toward the pointer.
pub fn wire_magnetic(document: &web::Document) {
    for btn in dom::query_all(document, MAGNETIC_BUTTON_SELECTOR) {
        let target = btn.clone();
        dom::listen(&btn, "mousemove", move |ev| {
            if let Some(pos) = dom::client_pos(&ev) {
                let offset = hover::magnet_offset(pos, element_rect(&target));
                dom::set_style(&target, "transform", &hover::magnet_css(offset));
            }
        });
        let target = btn.clone();
        dom::listen(&btn, "mouseleave", move |_| {
            dom::set_style(&target, "transform", MAGNET_RESET_CSS);
        });
    }
}

use crate::constants::{HERO_PHRASES, HERO_TITLE_ID, TYPING_CARET_BORDER};
use crate::core::constants::TYPING_START_DELAY_MS;
use crate::core::Typewriter;
use crate::dom;
use gloo_timers::callback::Timeout;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

/// Schedule one tick; each tick reschedules itself with the delay of the
/// phase it leaves the typewriter in.
fn schedule(title: web::Element, typewriter: Rc<RefCell<Typewriter>>, delay_ms: u32) {
    Timeout::new(delay_ms, move || {
        let (text, next_delay) = {
            let mut tw = typewriter.borrow_mut();
            let text = tw.tick();
            (text, tw.delay_ms())
        };
        dom::set_text(&title, &text);
        dom::set_style(&title, "border-right", TYPING_CARET_BORDER);
        schedule(title, typewriter, next_delay);
    })
    .forget();
}

pub fn wire(document: &web::Document) -> anyhow::Result<()> {
    let title = dom::element_by_id(document, HERO_TITLE_ID)?;
    let typewriter = Typewriter::new(HERO_PHRASES)
        .ok_or_else(|| anyhow::anyhow!("typing animator needs at least one phrase"))?;
    schedule(title, Rc::new(RefCell::new(typewriter)), TYPING_START_DELAY_MS);
    Ok(())
}

#![cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;
use web_sys as web;

mod constants;
mod contact;
mod core;
mod dom;
mod events;
mod filter;
mod frame;
mod payment;
mod preloader;
mod reveal;
mod typing;

/// Log and skip a feature whose page structure is missing; the rest still wire.
fn wire_feature(name: &str, result: anyhow::Result<()>) {
    match result {
        Ok(()) => log::debug!("[init] {} wired", name),
        Err(e) => log::warn!("[init] {} skipped: {:#}", name, e),
    }
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("folio-web starting");

    // The module may load before the DOM is parsed.
    let document = dom::window_document().ok_or_else(|| JsValue::from_str("no document"))?;
    if document.ready_state() == "loading" {
        dom::listen(&document, "DOMContentLoaded", |_| {
            if let Err(e) = init() {
                log::error!("init error: {:?}", e);
            }
        });
    } else if let Err(e) = init() {
        log::error!("init error: {:?}", e);
    }
    Ok(())
}

fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    wire_feature("preloader", preloader::wire(&window, &document));

    // Hover-driven effects are meaningless on touch-only devices.
    if dom::has_fine_pointer(&window) {
        wire_feature("cursor", events::wire_cursor(&document));
        events::wire_tilt(&document);
        events::wire_magnetic(&document);
    } else {
        log::info!("[init] coarse pointer: cursor and hover effects disabled");
    }

    events::scroll::wire(&window, &document);
    wire_feature("menu", events::wire_menu(&document));
    events::wire_anchors(&window, &document);
    wire_feature("back-to-top", events::wire_back_to_top(&window, &document));
    wire_feature("typing", typing::wire(&document));
    wire_feature("reveal", reveal::wire(&document));
    filter::wire(&document);
    wire_feature("contact form", contact::wire(&document));
    wire_feature("payment modal", payment::wire(&window, &document));

    log::info!("folio-web ready");
    Ok(())
}

use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Run `tick` on every animation frame for the lifetime of the page.
pub fn start_loop(mut tick: impl FnMut(f64) + 'static) {
    let frame: Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>> = Rc::new(RefCell::new(None));
    let frame_clone = frame.clone();
    *frame.borrow_mut() = Some(Closure::wrap(Box::new(move |ts: f64| {
        tick(ts);
        if let (Some(w), Some(cb)) = (web::window(), frame_clone.borrow().as_ref()) {
            let _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
        }
    }) as Box<dyn FnMut(f64)>));
    if let (Some(w), Some(cb)) = (web::window(), frame.borrow().as_ref()) {
        let _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}

/// Schedule `f` for the next animation frame only.
pub fn request_frame(f: impl FnOnce(f64) + 'static) {
    if let Some(w) = web::window() {
        let cb = Closure::once_into_js(f);
        let _ = w.request_animation_frame(cb.unchecked_ref());
    }
}

/// High-resolution timestamp on the same clock as frame callbacks.
pub fn now_ms() -> f64 {
    web::window()
        .and_then(|w| w.performance())
        .map(|p| p.now())
        .unwrap_or(0.0)
}

use crate::constants::{CLASS_ANIMATED, DATA_COUNT, DATA_WIDTH};
use crate::core::counter::parse_leading_int;
use crate::core::reveal::skill_width_css;
use crate::core::{CounterAnimation, RevealKind};
use crate::dom;
use crate::frame;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

fn on_reveal(kind: RevealKind, el: &web::Element) {
    match kind {
        RevealKind::Fade => dom::set_class(el, CLASS_ANIMATED, true),
        RevealKind::Counter => {
            let target = el
                .get_attribute(DATA_COUNT)
                .as_deref()
                .and_then(parse_leading_int)
                .unwrap_or(0);
            animate_counter(el.clone(), CounterAnimation::new(target, frame::now_ms()));
        }
        RevealKind::SkillBar => {
            match el.get_attribute(DATA_WIDTH).as_deref().and_then(skill_width_css) {
                Some(width) => dom::set_style(el, "width", &width),
                None => log::debug!("[reveal] skill bar without a usable {}", DATA_WIDTH),
            }
        }
    }
}

/// Write one interpolated value per frame until the target is reached.
fn animate_counter(el: web::Element, anim: CounterAnimation) {
    frame::request_frame(move |ts| {
        let f = anim.sample(ts);
        dom::set_text(&el, &f.value.to_string());
        if !f.done {
            animate_counter(el, anim);
        }
    });
}

/// One observer per kind; each element fires once and is then unobserved.
fn observe(document: &web::Document, kind: RevealKind) -> anyhow::Result<usize> {
    let targets = dom::query_all(document, kind.selector());
    if targets.is_empty() {
        return Ok(0);
    }

    let callback = Closure::wrap(Box::new(
        move |entries: js_sys::Array, observer: web::IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<web::IntersectionObserverEntry>() else {
                    continue;
                };
                if !entry.is_intersecting() {
                    continue;
                }
                let el = entry.target();
                observer.unobserve(&el);
                on_reveal(kind, &el);
            }
        },
    ) as Box<dyn FnMut(js_sys::Array, web::IntersectionObserver)>);

    let options = web::IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(kind.threshold()));
    if let Some(margin) = kind.root_margin() {
        options.set_root_margin(margin);
    }
    let observer = web::IntersectionObserver::new_with_options(
        callback.as_ref().unchecked_ref(),
        &options,
    )
    .map_err(|e| anyhow::anyhow!("IntersectionObserver: {:?}", e))?;
    callback.forget();

    for el in &targets {
        observer.observe(el);
    }
    Ok(targets.len())
}

pub fn wire(document: &web::Document) -> anyhow::Result<()> {
    for kind in RevealKind::ALL {
        let n = observe(document, kind)?;
        log::info!("[reveal] {:?}: observing {} elements", kind, n);
    }
    Ok(())
}

use crate::constants::{
    ACTIVE_NAV_LINK_SELECTOR, BACK_TO_TOP_ID, CLASS_ACTIVE, CLASS_SCROLLED, CLASS_VISIBLE,
    GEO_SHAPE_SELECTOR, NAVBAR_ID, SCROLL_PROGRESS_ID, SECTIONS_SELECTOR, TIMELINE_LINE_SELECTOR,
    TIMELINE_SELECTOR, TIMELINE_TRANSITION,
};
use crate::core::constants::RESIZE_DEBOUNCE_MS;
use crate::core::nav::is_link_for_section;
use crate::core::scroll::{self, FrameThrottle, ScrollInput, ScrollMetrics, ScrollUpdate};
use crate::core::{SectionBounds, TimelineRect};
use crate::dom;
use crate::frame;
use gloo_timers::callback::Timeout;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Elements the dispatcher reads from and writes to, resolved once at startup.
pub struct ScrollTargets {
    window: web::Window,
    document: web::Document,
    progress_bar: Option<web::Element>,
    navbar: Option<web::Element>,
    back_to_top: Option<web::Element>,
    sections: Vec<web::Element>,
    nav_links: Vec<web::Element>,
    shapes: Vec<web::Element>,
    timeline: Option<web::Element>,
    timeline_line: Option<web::Element>,
}

impl ScrollTargets {
    pub fn resolve(window: &web::Window, document: &web::Document) -> Self {
        let optional = |id: &str| {
            let el = document.get_element_by_id(id);
            if el.is_none() {
                log::warn!("[scroll] missing #{}", id);
            }
            el
        };
        let timeline = dom::query_one(document, TIMELINE_SELECTOR);
        let timeline_line = dom::query_one(document, TIMELINE_LINE_SELECTOR);
        Self {
            window: window.clone(),
            document: document.clone(),
            progress_bar: optional(SCROLL_PROGRESS_ID),
            navbar: optional(NAVBAR_ID),
            back_to_top: optional(BACK_TO_TOP_ID),
            sections: dom::query_all(document, SECTIONS_SELECTOR),
            nav_links: dom::query_all(document, ACTIVE_NAV_LINK_SELECTOR),
            shapes: dom::query_all(document, GEO_SHAPE_SELECTOR),
            timeline,
            timeline_line,
        }
    }

    fn metrics(&self) -> ScrollMetrics {
        let (scroll_height, client_height) = self
            .document
            .document_element()
            .map(|root| (root.scroll_height() as f64, root.client_height() as f64))
            .unwrap_or_default();
        ScrollMetrics {
            scroll_y: dom::scroll_top(&self.window, &self.document),
            scroll_height,
            client_height,
            viewport_height: dom::inner_height(&self.window),
        }
    }

    fn sample(&self) -> ScrollInput {
        let sections = self
            .sections
            .iter()
            .filter_map(|el| {
                let html = el.dyn_ref::<web::HtmlElement>()?;
                Some(SectionBounds {
                    id: el.id(),
                    top: html.offset_top() as f64,
                    height: html.offset_height() as f64,
                })
            })
            .collect();
        let timeline = match (&self.timeline, &self.timeline_line) {
            (Some(t), Some(_)) => {
                let r = t.get_bounding_client_rect();
                Some(TimelineRect {
                    top: r.top(),
                    height: r.height(),
                })
            }
            _ => None,
        };
        ScrollInput {
            metrics: self.metrics(),
            sections,
            shape_count: self.shapes.len(),
            timeline,
        }
    }

    /// Recompute and apply every scroll-derived effect.
    pub fn tick(&self) {
        let update = scroll::compute(&self.sample());
        self.apply(&update);
    }

    /// Resize only touches the viewport-dependent effects.
    fn tick_resize(&self) {
        let input = self.sample();
        let update = scroll::compute(&input);
        self.apply_progress(update.progress);
        self.apply_timeline(update.timeline_fill);
    }

    fn apply(&self, u: &ScrollUpdate) {
        self.apply_progress(u.progress);
        if let Some(nav) = &self.navbar {
            dom::set_class(nav, CLASS_SCROLLED, u.navbar_scrolled);
        }
        for link in &self.nav_links {
            let active = u
                .active_section
                .as_deref()
                .is_some_and(|id| is_link_for_section(link.get_attribute("href").as_deref(), id));
            dom::set_class(link, CLASS_ACTIVE, active);
        }
        if let Some(btn) = &self.back_to_top {
            dom::set_class(btn, CLASS_VISIBLE, u.back_to_top_visible);
        }
        if let Some(offsets) = &u.parallax {
            for (shape, dy) in self.shapes.iter().zip(offsets) {
                dom::set_style(shape, "transform", &format!("translateY({}px)", dy));
            }
        }
        self.apply_timeline(u.timeline_fill);
    }

    fn apply_progress(&self, progress: Option<f64>) {
        if let (Some(bar), Some(pct)) = (&self.progress_bar, progress) {
            dom::set_style(bar, "width", &format!("{}%", pct));
        }
    }

    fn apply_timeline(&self, fill: Option<f64>) {
        if let (Some(line), Some(pct)) = (&self.timeline_line, fill) {
            dom::set_style(line, "height", &format!("{}%", pct));
            dom::set_style(line, "transition", TIMELINE_TRANSITION);
        }
    }
}

/// Frame-throttled scroll listener, debounced resize, and one synchronous
/// initial pass.
pub fn wire(window: &web::Window, document: &web::Document) {
    let targets = Rc::new(ScrollTargets::resolve(window, document));
    let throttle = Rc::new(RefCell::new(FrameThrottle::default()));

    {
        let targets = targets.clone();
        dom::listen_passive(window, "scroll", move |_| {
            if !throttle.borrow_mut().request() {
                return;
            }
            let targets = targets.clone();
            let throttle = throttle.clone();
            frame::request_frame(move |_| {
                targets.tick();
                throttle.borrow_mut().complete();
            });
        });
    }

    {
        let targets = targets.clone();
        let pending: Rc<RefCell<Option<Timeout>>> = Rc::new(RefCell::new(None));
        dom::listen(window, "resize", move |_| {
            let targets = targets.clone();
            // Replacing the handle drops, and so cancels, the previous timer.
            *pending.borrow_mut() = Some(Timeout::new(RESIZE_DEBOUNCE_MS, move || {
                targets.tick_resize();
            }));
        });
    }

    targets.tick();
    log::info!(
        "[scroll] dispatcher wired: {} sections, {} nav links, {} shapes",
        targets.sections.len(),
        targets.nav_links.len(),
        targets.shapes.len()
    );
}

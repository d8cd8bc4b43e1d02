use super::constants::{
    ACTIVE_SECTION_LOOKAHEAD_PX, ANCHOR_SCROLL_OFFSET_PX, BACK_TO_TOP_THRESHOLD_PX,
    NAVBAR_SCROLLED_THRESHOLD_PX, PARALLAX_BASE_SPEED, PARALLAX_SPEED_STEP,
};

/// Document and viewport measurements sampled once per tick.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScrollMetrics {
    pub scroll_y: f64,
    pub scroll_height: f64,
    pub client_height: f64,
    pub viewport_height: f64,
}

/// Vertical extent of a `section[id]` in document coordinates.
#[derive(Clone, Debug, PartialEq)]
pub struct SectionBounds {
    pub id: String,
    pub top: f64,
    pub height: f64,
}

/// Viewport-relative box of the experience timeline.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct TimelineRect {
    pub top: f64,
    pub height: f64,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ScrollInput {
    pub metrics: ScrollMetrics,
    pub sections: Vec<SectionBounds>,
    pub shape_count: usize,
    pub timeline: Option<TimelineRect>,
}

/// Everything the dispatcher writes back to the page for one tick.
/// `None` fields mean "leave the element as it is".
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ScrollUpdate {
    pub progress: Option<f64>,
    pub navbar_scrolled: bool,
    pub active_section: Option<String>,
    pub back_to_top_visible: bool,
    pub parallax: Option<Vec<f64>>,
    pub timeline_fill: Option<f64>,
}

/// Scroll progress in percent, clamped to [0, 100]. `None` when the document
/// is not taller than the viewport.
pub fn progress_percent(scroll_top: f64, scroll_height: f64, client_height: f64) -> Option<f64> {
    let scrollable = scroll_height - client_height;
    if scrollable.is_nan() || scrollable <= 0.0 {
        return None;
    }
    let pct = scroll_top / scrollable * 100.0;
    pct.is_finite().then_some(pct.clamp(0.0, 100.0))
}

#[inline]
pub fn navbar_scrolled(scroll_y: f64) -> bool {
    scroll_y > NAVBAR_SCROLLED_THRESHOLD_PX
}

#[inline]
pub fn back_to_top_visible(scroll_y: f64) -> bool {
    scroll_y > BACK_TO_TOP_THRESHOLD_PX
}

/// The last section whose `[top, top + height)` window contains the probe
/// point `scroll_y + 200`.
pub fn active_section(sections: &[SectionBounds], scroll_y: f64) -> Option<&str> {
    let probe = scroll_y + ACTIVE_SECTION_LOOKAHEAD_PX;
    sections
        .iter()
        .rev()
        .find(|s| probe >= s.top && probe < s.top + s.height)
        .map(|s| s.id.as_str())
}

#[inline]
pub fn parallax_speed(index: usize) -> f64 {
    PARALLAX_BASE_SPEED + index as f64 * PARALLAX_SPEED_STEP
}

/// Vertical offsets for each background shape, only while the hero is still
/// within the first viewport height.
pub fn parallax_offsets(scroll_y: f64, viewport_height: f64, shape_count: usize) -> Option<Vec<f64>> {
    if scroll_y >= viewport_height {
        return None;
    }
    Some((0..shape_count).map(|i| scroll_y * parallax_speed(i)).collect())
}

/// Percentage of the timeline that has entered the viewport from below.
pub fn timeline_fill(rect: TimelineRect, viewport_height: f64) -> Option<f64> {
    if rect.height <= 0.0 {
        return None;
    }
    let bottom = rect.top + rect.height;
    if rect.top >= viewport_height || bottom <= 0.0 {
        return None;
    }
    let visible = (viewport_height - rect.top).min(rect.height);
    Some((visible / rect.height * 100.0).clamp(0.0, 100.0))
}

/// Absolute scroll target for an in-page anchor, leaving room for the navbar.
#[inline]
pub fn anchor_scroll_top(target_rect_top: f64, page_y_offset: f64) -> f64 {
    target_rect_top + page_y_offset - ANCHOR_SCROLL_OFFSET_PX
}

/// One dispatcher tick. Order matches the order the page is updated in.
pub fn compute(input: &ScrollInput) -> ScrollUpdate {
    let m = input.metrics;
    ScrollUpdate {
        progress: progress_percent(m.scroll_y, m.scroll_height, m.client_height),
        navbar_scrolled: navbar_scrolled(m.scroll_y),
        active_section: active_section(&input.sections, m.scroll_y).map(str::to_owned),
        back_to_top_visible: back_to_top_visible(m.scroll_y),
        parallax: parallax_offsets(m.scroll_y, m.viewport_height, input.shape_count),
        timeline_fill: input
            .timeline
            .and_then(|rect| timeline_fill(rect, m.viewport_height)),
    }
}

/// Coalesces bursts of scroll events into at most one pending frame.
#[derive(Clone, Copy, Debug, Default)]
pub struct FrameThrottle {
    pending: bool,
}

impl FrameThrottle {
    /// Returns `true` when the caller should schedule a frame.
    pub fn request(&mut self) -> bool {
        if self.pending {
            return false;
        }
        self.pending = true;
        true
    }

    /// Called from the frame callback once the tick has run.
    pub fn complete(&mut self) {
        self.pending = false;
    }
}

/// Mobile navigation menu (hamburger) state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MenuState {
    open: bool,
}

impl MenuState {
    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn toggle(&mut self) -> bool {
        self.open = !self.open;
        self.open
    }

    /// Returns `true` if the menu was open.
    pub fn close(&mut self) -> bool {
        std::mem::replace(&mut self.open, false)
    }
}

/// Section id targeted by an in-page link, or `None` for a bare `#` or a
/// link that leaves the page.
pub fn anchor_target_id(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}

/// Nav links are matched to sections by `href="#<id>"`.
pub fn is_link_for_section(href: Option<&str>, section_id: &str) -> bool {
    href.and_then(anchor_target_id) == Some(section_id)
}

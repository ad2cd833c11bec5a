use shared::domain::SectionAnchor;
use tracing::debug;

#[derive(Debug, Clone)]
pub struct HeaderState {
    scroll_threshold: f32,
    scrolled: bool,
    mobile_menu_open: bool,
}

impl HeaderState {
    pub fn new(scroll_threshold: f32) -> Self {
        Self {
            scroll_threshold,
            scrolled: false,
            mobile_menu_open: false,
        }
    }

    /// Feeds the page's vertical scroll position. Returns true when the
    /// scrolled flag flipped.
    pub fn on_scroll(&mut self, scroll_y: f32) -> bool {
        let scrolled = scroll_y > self.scroll_threshold;
        if scrolled == self.scrolled {
            return false;
        }
        self.scrolled = scrolled;
        debug!(scrolled, scroll_y, "header: scroll state changed");
        true
    }

    pub fn toggle_menu(&mut self) -> bool {
        self.mobile_menu_open = !self.mobile_menu_open;
        self.mobile_menu_open
    }

    /// Closes the mobile menu and hands back the fragment to scroll to.
    pub fn navigate(&mut self, anchor: SectionAnchor) -> &'static str {
        self.mobile_menu_open = false;
        anchor.fragment()
    }

    pub fn is_scrolled(&self) -> bool {
        self.scrolled
    }

    pub fn is_menu_open(&self) -> bool {
        self.mobile_menu_open
    }
}

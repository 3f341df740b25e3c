// Scroll state shared by the output pane and the logs strip
//
// Each component owns its ScrollState; the view layer reports content and
// viewport sizes every frame and the component reacts to scroll keys.

/// Scroll position over a list of lines
#[derive(Debug, Clone)]
pub struct ScrollState {
    /// Line index at top of viewport
    offset: usize,
    total: usize,
    viewport: usize,
    /// Stick to the bottom as content grows
    /// Scrolling up disables this; reaching the bottom re-enables it
    pub auto_follow: bool,
}

impl ScrollState {
    /// Auto-following (logs)
    pub fn new() -> Self {
        Self {
            offset: 0,
            total: 0,
            viewport: 0,
            auto_follow: true,
        }
    }

    /// Pinned to the top until the user scrolls (panel output)
    pub fn manual() -> Self {
        Self {
            auto_follow: false,
            ..Self::new()
        }
    }

    /// Call each render frame with current sizes
    pub fn update_dimensions(&mut self, total: usize, viewport: usize) {
        self.total = total;
        self.viewport = viewport;

        if self.auto_follow {
            self.offset = self.max_offset();
        } else {
            self.offset = self.offset.min(self.max_offset());
        }
    }

    pub fn scroll_up(&mut self) {
        if self.offset > 0 {
            self.offset -= 1;
            self.auto_follow = false;
        }
    }

    pub fn scroll_down(&mut self) {
        if self.offset < self.max_offset() {
            self.offset += 1;
        }
    }

    pub fn page_up(&mut self) {
        let page = self.viewport.max(1);
        self.offset = self.offset.saturating_sub(page);
        self.auto_follow = false;
    }

    pub fn page_down(&mut self) {
        let page = self.viewport.max(1);
        self.offset = (self.offset + page).min(self.max_offset());
    }

    pub fn scroll_to_top(&mut self) {
        self.offset = 0;
        self.auto_follow = false;
    }

    pub fn scroll_to_bottom(&mut self) {
        self.offset = self.max_offset();
        self.auto_follow = true;
    }

    /// Back to the top for fresh content
    pub fn reset(&mut self) {
        self.offset = 0;
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    /// (start, end) indices of the visible lines
    pub fn visible_range(&self) -> (usize, usize) {
        let end = (self.offset + self.viewport).min(self.total);
        (self.offset.min(end), end)
    }

    pub fn can_scroll(&self) -> bool {
        self.total > self.viewport
    }

    pub fn max_offset(&self) -> usize {
        self.total.saturating_sub(self.viewport)
    }
}

impl Default for ScrollState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn auto_follow_snaps_to_bottom() {
        let mut s = ScrollState::new();
        s.update_dimensions(50, 10);
        assert_eq!(s.visible_range(), (40, 50));
        s.update_dimensions(60, 10);
        assert_eq!(s.offset(), 50);
    }

    #[test]
    fn scrolling_up_stops_following() {
        let mut s = ScrollState::new();
        s.update_dimensions(50, 10);
        s.scroll_up();
        assert!(!s.auto_follow);
        s.update_dimensions(60, 10);
        assert_eq!(s.offset(), 39);
    }

    #[test]
    fn manual_stays_at_top_and_clamps() {
        let mut s = ScrollState::manual();
        s.update_dimensions(25, 10);
        assert_eq!(s.offset(), 0);
        s.page_down();
        s.page_down();
        s.page_down();
        assert_eq!(s.offset(), 15);
        s.update_dimensions(12, 10);
        assert_eq!(s.offset(), 2);
        s.scroll_to_top();
        assert_eq!(s.visible_range(), (0, 10));
    }

    #[test]
    fn short_content_does_not_scroll() {
        let mut s = ScrollState::manual();
        s.update_dimensions(3, 10);
        s.scroll_down();
        assert_eq!(s.offset(), 0);
        assert!(!s.can_scroll());
    }
}

//! Vertical scrollbar drawn from a `ScrollState`

use crate::tui::scroll::ScrollState;
use ratatui::{
    layout::Rect,
    widgets::{Scrollbar, ScrollbarOrientation, ScrollbarState},
    Frame,
};

/// Thumb-only scrollbar on the right edge of `area`; nothing when content fits
pub fn render_scrollbar(f: &mut Frame, area: Rect, scroll: &ScrollState) {
    if !scroll.can_scroll() {
        return;
    }

    let scrollbar = Scrollbar::new(ScrollbarOrientation::VerticalRight)
        .begin_symbol(None)
        .end_symbol(None);
    let mut state = ScrollbarState::new(scroll.max_offset()).position(scroll.offset());

    f.render_stateful_widget(scrollbar, area, &mut state);
}

//! Scrollable trait for components whose content outgrows their pane

use super::Component;
use crate::tui::scroll::ScrollState;
use crossterm::event::{KeyCode, KeyEvent};

/// Navigation delegates to the component's [`ScrollState`]
pub trait Scrollable: Component {
    fn scroll_state(&self) -> &ScrollState;

    fn scroll_state_mut(&mut self) -> &mut ScrollState;

    fn scroll_up(&mut self) {
        self.scroll_state_mut().scroll_up();
    }

    fn scroll_down(&mut self) {
        self.scroll_state_mut().scroll_down();
    }

    fn page_up(&mut self) {
        self.scroll_state_mut().page_up();
    }

    fn page_down(&mut self) {
        self.scroll_state_mut().page_down();
    }

    fn scroll_to_top(&mut self) {
        self.scroll_state_mut().scroll_to_top();
    }

    fn scroll_to_bottom(&mut self) {
        self.scroll_state_mut().scroll_to_bottom();
    }

    /// Standard scroll keys; `false` if `key` isn't one
    fn handle_scroll_keys(&mut self, key: KeyEvent) -> bool {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => self.scroll_up(),
            KeyCode::Down | KeyCode::Char('j') => self.scroll_down(),
            KeyCode::PageUp => self.page_up(),
            KeyCode::PageDown => self.page_down(),
            KeyCode::Home => self.scroll_to_top(),
            KeyCode::End => self.scroll_to_bottom(),
            _ => return false,
        }
        true
    }
}

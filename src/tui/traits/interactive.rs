//! Interactive trait for components that handle keyboard input
//!
//! The App runs global keys first, then routes the rest to the focused
//! component. A component returning `Handled::No` lets the key bubble back
//! up for fallback handling.

use super::Component;
use crossterm::event::KeyEvent;

/// Result of handling a key event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Handled {
    Yes,
    No,
}

impl Handled {
    pub fn was_handled(self) -> bool {
        self == Self::Yes
    }
}

impl From<bool> for Handled {
    fn from(handled: bool) -> Self {
        if handled {
            Self::Yes
        } else {
            Self::No
        }
    }
}

pub trait Interactive: Component {
    fn handle_key(&mut self, key: KeyEvent) -> Handled;

    /// Keybind hints shown in the status bar while focused
    fn focus_hint(&self) -> Option<&'static str> {
        None
    }
}

//! Component trait system for the TUI
//!
//! Components declare their capabilities through traits instead of the App
//! knowing how to scroll or copy every pane:
//!
//! - [`Component`] - identity in the focus ring
//! - [`Scrollable`] - content taller than its pane
//! - [`Copyable`] - content worth putting on the clipboard
//! - [`Interactive`] - handles keys while focused

mod component;
mod copyable;
mod interactive;
mod scrollable;

pub use component::{Component, ComponentId};
pub use copyable::Copyable;
pub use interactive::{Handled, Interactive};
pub use scrollable::Scrollable;

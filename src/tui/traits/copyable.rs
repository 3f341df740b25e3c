//! Copyable trait for components that provide clipboard content

use super::Component;

/// Content for the clipboard
///
/// - **Text** (`Ctrl+Y`): human-readable, for pasting into docs or chat
/// - **Data** (`Y` on a focused pane): tab-separated rows for spreadsheets
pub trait Copyable: Component {
    /// `None` if there's nothing to copy
    fn copy_text(&self) -> Option<String>;

    fn copy_data(&self) -> Option<String> {
        None
    }

    /// Used in toast messages ("Copied output")
    fn copy_description(&self) -> &'static str;
}

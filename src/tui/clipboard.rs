//! System clipboard access for Ctrl+Y
//!
//! A fresh `arboard::Clipboard` per copy; holding one open keeps an X11
//! connection alive for the whole session.

use anyhow::{Context, Result};
use arboard::Clipboard;

/// Put `text` on the system clipboard
///
/// Fails on headless hosts with no display server.
pub fn copy_to_clipboard(text: &str) -> Result<()> {
    let mut clipboard = Clipboard::new().context("Clipboard unavailable")?;
    clipboard
        .set_text(text)
        .with_context(|| format!("Failed to copy {} bytes", text.len()))?;
    tracing::debug!(bytes = text.len(), "Copied to clipboard");
    Ok(())
}

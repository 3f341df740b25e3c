//! Toast notifications
//!
//! Short confirmations drawn over the bottom-right corner. The event loop
//! drops a toast on the first tick after it expires.

use crate::theme::Theme;
use ratatui::{
    layout::{Alignment, Rect},
    style::Style,
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};
use std::time::{Duration, Instant};
use unicode_width::UnicodeWidthStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Failure,
}

pub struct Toast {
    pub message: String,
    pub kind: ToastKind,
    created_at: Instant,
    duration: Duration,
}

impl Toast {
    /// Two-second confirmation
    pub fn success(message: impl Into<String>) -> Self {
        Self::with_kind(message, ToastKind::Success, Duration::from_secs(2))
    }

    /// Failures stay up a little longer
    pub fn failure(message: impl Into<String>) -> Self {
        Self::with_kind(message, ToastKind::Failure, Duration::from_secs(4))
    }

    fn with_kind(message: impl Into<String>, kind: ToastKind, duration: Duration) -> Self {
        Self {
            message: message.into(),
            kind,
            created_at: Instant::now(),
            duration,
        }
    }

    pub fn is_expired(&self) -> bool {
        self.created_at.elapsed() >= self.duration
    }

    pub fn render(&self, f: &mut Frame, area: Rect, theme: &Theme) {
        // Text plus a padding column and border on each side
        let width = (self.message.width() as u16 + 4).min(area.width.saturating_sub(4));
        let height = 3;

        let x = area.right().saturating_sub(width + 2);
        let y = area.bottom().saturating_sub(height + 2);
        let toast_area = Rect::new(x, y, width, height);

        let accent = match self.kind {
            ToastKind::Success => theme.success,
            ToastKind::Failure => theme.error,
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(theme.border_type)
            .border_style(Style::default().fg(accent))
            .style(Style::default().bg(theme.background));

        let text = Paragraph::new(self.message.as_str())
            .alignment(Alignment::Center)
            .style(Style::default().fg(theme.foreground))
            .block(block);

        f.render_widget(Clear, toast_area);
        f.render_widget(text, toast_area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_toast_is_live() {
        let toast = Toast::success("✓ Copied output");
        assert!(!toast.is_expired());
        assert_eq!(toast.kind, ToastKind::Success);
    }

    #[test]
    fn zero_duration_expires_immediately() {
        let toast = Toast::with_kind("gone", ToastKind::Failure, Duration::ZERO);
        assert!(toast.is_expired());
    }
}

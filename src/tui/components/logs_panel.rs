//! Logs strip: the tail of the in-memory log buffer
//!
//! The buffer is shared with the tracing layer, so the panel holds a clone
//! of the handle and reads it each frame rather than owning entries.

use super::scrollbar::render_scrollbar;
use crate::logging::{LogBuffer, LogEntry, LogLevel};
use crate::theme::Theme;
use crate::tui::scroll::ScrollState;
use crate::tui::traits::{Component, ComponentId, Copyable, Handled, Interactive, Scrollable};
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    widgets::{Block, Borders, List, ListItem},
    Frame,
};

pub struct LogsPanel {
    buffer: LogBuffer,
    scroll: ScrollState,
}

impl LogsPanel {
    pub fn new(buffer: LogBuffer) -> Self {
        Self {
            buffer,
            scroll: ScrollState::new(),
        }
    }

    pub fn render(&mut self, f: &mut Frame, area: Rect, theme: &Theme, focused: bool) {
        let entries = self.buffer.get_all();
        let height = area.height.saturating_sub(2) as usize;
        self.scroll.update_dimensions(entries.len(), height);

        let (start, end) = self.scroll.visible_range();
        let items: Vec<ListItem> = entries[start..end]
            .iter()
            .map(|entry| ListItem::new(entry.display_line()).style(level_style(entry.level, theme)))
            .collect();

        let border_color = if focused { theme.highlight } else { theme.border };
        let title = if self.scroll_state().auto_follow {
            " Logs "
        } else {
            " Logs [scroll] "
        };

        let list = List::new(items).block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(theme.border_type)
                .border_style(Style::default().fg(border_color))
                .title(title),
        );
        f.render_widget(list, area);
        render_scrollbar(f, area, self.scroll_state());
    }

    /// Lines currently in view, oldest first
    fn visible_entries(&self) -> Vec<LogEntry> {
        let entries = self.buffer.get_all();
        let (start, end) = self.scroll.visible_range();
        let end = end.min(entries.len());
        entries[start.min(end)..end].to_vec()
    }
}

impl Component for LogsPanel {
    fn id(&self) -> ComponentId {
        ComponentId::Logs
    }
}

impl Scrollable for LogsPanel {
    fn scroll_state(&self) -> &ScrollState {
        &self.scroll
    }

    fn scroll_state_mut(&mut self) -> &mut ScrollState {
        &mut self.scroll
    }
}

impl Copyable for LogsPanel {
    fn copy_text(&self) -> Option<String> {
        let lines: Vec<String> = self
            .visible_entries()
            .iter()
            .map(LogEntry::display_line)
            .collect();
        (!lines.is_empty()).then(|| lines.join("\n"))
    }

    fn copy_description(&self) -> &'static str {
        "log lines"
    }
}

impl Interactive for LogsPanel {
    fn handle_key(&mut self, key: KeyEvent) -> Handled {
        if key.code == KeyCode::Esc && !self.scroll_state().auto_follow {
            self.scroll_to_bottom();
            return Handled::Yes;
        }
        self.handle_scroll_keys(key).into()
    }

    fn focus_hint(&self) -> Option<&'static str> {
        Some("↑↓:scroll  End:follow  Ctrl+Y:copy")
    }
}

fn level_style(level: LogLevel, theme: &Theme) -> Style {
    match level {
        LogLevel::Error => Style::default()
            .fg(theme.error)
            .add_modifier(Modifier::BOLD),
        LogLevel::Warn => Style::default().fg(theme.warning),
        LogLevel::Info => Style::default().fg(theme.info),
        LogLevel::Debug | LogLevel::Trace => Style::default().fg(theme.muted),
    }
}

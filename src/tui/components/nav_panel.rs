//! Navigation sidebar: one entry per registered panel, in menu order

use crate::router::PanelRegistry;
use crate::theme::Theme;
use crate::tui::traits::{Component, ComponentId, Handled, Interactive};
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState},
    Frame,
};

struct NavEntry {
    label: String,
    gated: bool,
}

pub struct NavPanel {
    entries: Vec<NavEntry>,
    selected: usize,
}

impl NavPanel {
    pub fn new(registry: &PanelRegistry) -> Self {
        let entries = registry
            .iter()
            .map(|d| NavEntry {
                label: d.label().to_string(),
                gated: d.is_gated(),
            })
            .collect();
        Self {
            entries,
            selected: 0,
        }
    }

    pub fn selected_label(&self) -> &str {
        self.entries
            .get(self.selected)
            .map(|e| e.label.as_str())
            .unwrap_or_default()
    }

    /// Move the highlight to `label`; `false` if it isn't in the menu
    pub fn select_label(&mut self, label: &str) -> bool {
        match self.entries.iter().position(|e| e.label == label) {
            Some(idx) => {
                self.selected = idx;
                true
            }
            None => false,
        }
    }

    /// `locked` marks gated entries while no credential is set
    pub fn render(&self, f: &mut Frame, area: Rect, theme: &Theme, focused: bool, locked: bool) {
        let items: Vec<ListItem> = self
            .entries
            .iter()
            .map(|entry| {
                let marker = if entry.gated && locked {
                    Span::styled("🔒 ", Style::default().fg(theme.locked))
                } else {
                    Span::raw("   ")
                };
                ListItem::new(Line::from(vec![
                    marker,
                    Span::styled(entry.label.clone(), Style::default().fg(theme.foreground)),
                ]))
            })
            .collect();

        let border_color = if focused { theme.highlight } else { theme.border };
        let highlight = if focused {
            Style::default()
                .fg(theme.selection_fg)
                .bg(theme.selection)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().add_modifier(Modifier::BOLD)
        };

        let list = List::new(items)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(theme.border_type)
                    .border_style(Style::default().fg(border_color))
                    .title(" Navigation "),
            )
            .highlight_style(highlight)
            .highlight_symbol("▶");

        let mut state = ListState::default().with_selected(Some(self.selected));
        f.render_stateful_widget(list, area, &mut state);
    }
}

impl Component for NavPanel {
    fn id(&self) -> ComponentId {
        ComponentId::Nav
    }
}

impl Interactive for NavPanel {
    /// Up/Down move the selection and wrap at the ends
    fn handle_key(&mut self, key: KeyEvent) -> Handled {
        let len = self.entries.len();
        if len == 0 {
            return Handled::No;
        }
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => {
                self.selected = (self.selected + len - 1) % len;
                Handled::Yes
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.selected = (self.selected + 1) % len;
                Handled::Yes
            }
            KeyCode::Home => {
                self.selected = 0;
                Handled::Yes
            }
            KeyCode::End => {
                self.selected = len - 1;
                Handled::Yes
            }
            _ => Handled::No,
        }
    }

    fn focus_hint(&self) -> Option<&'static str> {
        Some("↑↓:choose  Enter/→:edit form  q:quit")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::panels::{SCRIPT_GENERATOR, SETTINGS};

    fn nav() -> NavPanel {
        NavPanel::new(&PanelRegistry::standard().unwrap())
    }

    #[test]
    fn starts_on_first_entry() {
        assert_eq!(nav().selected_label(), SCRIPT_GENERATOR);
    }

    #[test]
    fn up_from_top_wraps_to_settings() {
        let mut nav = nav();
        assert!(nav.handle_key(KeyEvent::from(KeyCode::Up)).was_handled());
        assert_eq!(nav.selected_label(), SETTINGS);
        nav.handle_key(KeyEvent::from(KeyCode::Down));
        assert_eq!(nav.selected_label(), SCRIPT_GENERATOR);
    }

    #[test]
    fn select_label_rejects_unknown() {
        let mut nav = nav();
        assert!(nav.select_label(SETTINGS));
        assert!(!nav.select_label("Nope"));
        assert_eq!(nav.selected_label(), SETTINGS);
    }
}

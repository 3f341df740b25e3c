//! Form pane: a panel's widgets drawn from its live `FormState`
//!
//! Main-column fields and the submit button go in the form pane; fields
//! flagged `aside` are drawn in the side column by the same code.

use super::formatters::mask;
use crate::panels::{Field, FieldKind};
use crate::theme::{Theme, TomlTheme};
use crate::tui::form::FormState;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

const SLIDER_CELLS: usize = 20;

/// Which fields a column shows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Column {
    /// Regular fields and the submit button
    Main,
    /// Fields flagged `aside`
    Aside,
    /// Everything, for terminals too narrow for a side column
    All,
}

impl Column {
    fn shows(self, field: &Field) -> bool {
        match self {
            Column::Main => !field.aside,
            Column::Aside => field.aside,
            Column::All => true,
        }
    }
}

/// Lines for the fields of one column, plus the submit button outside the aside column
pub fn form_lines(state: &FormState, column: Column, theme: &Theme, focused: bool) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    for (i, field) in state.spec().fields.iter().enumerate() {
        if !column.shows(field) {
            continue;
        }
        let active = focused && state.cursor() == i;
        let marker = if active { "▸ " } else { "  " };
        let label_style = if active {
            Style::default()
                .fg(theme.highlight)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(theme.subheader)
        };
        lines.push(Line::from(vec![
            Span::styled(marker, label_style),
            Span::styled(field.label.to_string(), label_style),
        ]));
        lines.extend(value_lines(state, field, active, theme));
        lines.push(Line::default());
    }

    if column != Column::Aside {
        if let Some(label) = state.spec().submit {
            let style = if focused && state.on_submit_button() {
                Style::default()
                    .fg(theme.selection_fg)
                    .bg(theme.selection)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(theme.highlight)
            };
            lines.push(Line::from(Span::styled(format!("  [ {} ]", label), style)));
        }
    }
    lines
}

fn value_lines(state: &FormState, field: &Field, active: bool, theme: &Theme) -> Vec<Line<'static>> {
    let values = state.values();
    let fg = Style::default().fg(theme.foreground);
    let muted = Style::default().fg(theme.muted);
    let caret = if active { "▏" } else { "" };

    match &field.kind {
        FieldKind::Text | FieldKind::Path | FieldKind::Date => {
            let text = values.text(field.key);
            if text.is_empty() && !active {
                let hint = match field.kind {
                    FieldKind::Date => "(today)",
                    _ => "(empty)",
                };
                vec![Line::from(Span::styled(format!("    {}", hint), muted))]
            } else {
                vec![Line::from(Span::styled(format!("    {}{}", text, caret), fg))]
            }
        }
        FieldKind::Password => {
            let text = values.text(field.key);
            vec![Line::from(Span::styled(
                format!("    {}{}", mask(text), caret),
                fg,
            ))]
        }
        FieldKind::TextArea => {
            let text = values.text(field.key);
            if text.is_empty() {
                let hint = if active { caret } else { "(empty)" };
                return vec![Line::from(Span::styled(format!("    {}", hint), muted))];
            }
            let mut lines: Vec<Line> = text
                .split('\n')
                .map(|l| Line::from(Span::styled(format!("    │ {}", l), fg)))
                .collect();
            if active {
                if let Some(last) = lines.last_mut() {
                    last.spans.push(Span::styled(caret, fg));
                }
            }
            lines
        }
        FieldKind::Color { .. } => {
            let text = values.text(field.key).to_string();
            let swatch = TomlTheme::try_parse_color(&text).unwrap_or(theme.muted);
            vec![Line::from(vec![
                Span::raw("    "),
                Span::styled("██ ", Style::default().fg(swatch)),
                Span::styled(format!("{}{}", text, caret), fg),
            ])]
        }
        FieldKind::Select { .. } => {
            let text = values.text(field.key);
            let arrows = if active { ("◂ ", " ▸") } else { ("", "") };
            vec![Line::from(Span::styled(
                format!("    {}{}{}", arrows.0, text, arrows.1),
                fg,
            ))]
        }
        FieldKind::MultiSelect { options } => {
            let selected = values.many(field.key);
            options
                .iter()
                .enumerate()
                .map(|(i, option)| {
                    let checked = selected.iter().any(|s| s == option);
                    let mark = if checked { "[x]" } else { "[ ]" };
                    let style = if active && state.option_cursor() == i {
                        Style::default().fg(theme.selection_fg).bg(theme.selection)
                    } else if checked {
                        fg
                    } else {
                        muted
                    };
                    Line::from(Span::styled(format!("    {} {}", mark, option), style))
                })
                .collect()
        }
        FieldKind::Slider { min, max, .. } => {
            let n = values.number(field.key);
            let span = (max - min).max(1) as f64;
            let filled = (((n - min) as f64 / span) * SLIDER_CELLS as f64).round() as usize;
            let filled = filled.min(SLIDER_CELLS);
            vec![Line::from(vec![
                Span::raw("    "),
                Span::styled("━".repeat(filled), Style::default().fg(theme.highlight)),
                Span::styled("●", fg),
                Span::styled("─".repeat(SLIDER_CELLS - filled), muted),
                Span::styled(format!("  {}", n), fg),
            ])]
        }
        FieldKind::Number { .. } => {
            vec![Line::from(Span::styled(
                format!("    {}{}", values.number(field.key), caret),
                fg,
            ))]
        }
    }
}

/// Draw the form pane
pub fn render(
    f: &mut Frame,
    area: Rect,
    state: &FormState,
    column: Column,
    theme: &Theme,
    focused: bool,
) {
    let border_color = if focused { theme.highlight } else { theme.border };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(theme.border_type)
        .border_style(Style::default().fg(border_color))
        .title(" Input ");

    let lines = form_lines(state, column, theme, focused);
    // Keep the focused widget in view on short terminals
    let inner_height = area.height.saturating_sub(2) as usize;
    let focus_row = if focused { focused_row(state, &lines) } else { 0 };
    let offset = focus_row.saturating_sub(inner_height.saturating_sub(2));

    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false })
        .scroll((offset as u16, 0));
    f.render_widget(paragraph, area);
}

/// Row of the `▸` marker, or the button when it has focus
fn focused_row(state: &FormState, lines: &[Line]) -> usize {
    if state.on_submit_button() {
        return lines.len().saturating_sub(1);
    }
    lines
        .iter()
        .position(|l| l.to_string().starts_with("▸ "))
        .unwrap_or(0)
}

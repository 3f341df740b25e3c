//! Output pane: the blocks a panel rendered, plus its chart if it has one
//!
//! Owns the last `RenderResult` so copy and scroll work without reaching
//! back into the App.

use super::chart_panel;
use super::formatters::{pad_to, wrapped_rows};
use crate::panels::{Block as OutputBlock, Metric};
use crate::router::RenderResult;
use crate::theme::{Theme, TomlTheme};
use crate::tui::scroll::ScrollState;
use crate::tui::traits::{Component, ComponentId, Copyable, Handled, Interactive, Scrollable};
use crossterm::event::KeyEvent;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};
use unicode_width::UnicodeWidthStr;

/// Widest a table column may grow before it stops padding
const MAX_COLUMN_WIDTH: usize = 28;

/// Height of the preview swatch for image blocks
const SWATCH_ROWS: usize = 4;

pub struct OutputPanel {
    result: Option<RenderResult>,
    scroll: ScrollState,
}

impl OutputPanel {
    pub fn new() -> Self {
        Self {
            result: None,
            scroll: ScrollState::manual(),
        }
    }

    /// Replace the shown result and jump back to the top
    pub fn set_result(&mut self, result: RenderResult) {
        self.result = Some(result);
        self.scroll.reset();
    }

    pub fn result(&self) -> Option<&RenderResult> {
        self.result.as_ref()
    }

    /// `with_aside` folds tips and other side-column blocks into the pane
    pub fn render(
        &mut self,
        f: &mut Frame,
        area: Rect,
        theme: &Theme,
        focused: bool,
        with_aside: bool,
    ) {
        let border_color = if focused { theme.highlight } else { theme.border };
        let title = match &self.result {
            Some(result) => format!(" {} ", result.shown_label()),
            None => " Output ".to_string(),
        };
        let outer = Block::default()
            .borders(Borders::ALL)
            .border_type(theme.border_type)
            .border_style(Style::default().fg(border_color))
            .title(title);
        let inner = outer.inner(area);
        f.render_widget(outer, area);

        let Some(result) = &self.result else {
            let hint = Paragraph::new(Line::from(Span::styled(
                "Select a panel from the menu.",
                Style::default().fg(theme.muted),
            )));
            f.render_widget(hint, inner);
            return;
        };

        let chart = result.output().chart();
        let (text_area, chart_area) = match chart {
            Some(_) if inner.height >= 12 => {
                let chunks = Layout::default()
                    .direction(Direction::Vertical)
                    .constraints([Constraint::Min(4), Constraint::Percentage(60)])
                    .split(inner);
                (chunks[0], Some(chunks[1]))
            }
            _ => (inner, None),
        };

        let lines = result_lines(result, theme, with_aside);
        let width = text_area.width as usize;
        let total: usize = lines
            .iter()
            .map(|l| wrapped_rows(&l.to_string(), width))
            .sum();
        self.scroll
            .update_dimensions(total, text_area.height as usize);

        let paragraph = Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .scroll((self.scroll.offset() as u16, 0));
        f.render_widget(paragraph, text_area);

        if let (Some(spec), Some(area)) = (chart, chart_area) {
            chart_panel::render(f, area, spec, theme);
        }
    }
}

impl Default for OutputPanel {
    fn default() -> Self {
        Self::new()
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Trait Implementations
// ═══════════════════════════════════════════════════════════════════════════

impl Component for OutputPanel {
    fn id(&self) -> ComponentId {
        ComponentId::Output
    }
}

impl Scrollable for OutputPanel {
    fn scroll_state(&self) -> &ScrollState {
        &self.scroll
    }

    fn scroll_state_mut(&mut self) -> &mut ScrollState {
        &mut self.scroll
    }
}

impl Copyable for OutputPanel {
    fn copy_text(&self) -> Option<String> {
        self.result.as_ref().and_then(|r| r.output().copy_text())
    }

    /// The first table or chart dataset as TSV
    fn copy_data(&self) -> Option<String> {
        let output = self.result.as_ref()?.output();
        output
            .table()
            .or_else(|| output.chart().map(|c| &c.table))
            .map(|t| t.to_tsv())
    }

    fn copy_description(&self) -> &'static str {
        "output"
    }
}

impl Interactive for OutputPanel {
    fn handle_key(&mut self, key: KeyEvent) -> Handled {
        self.handle_scroll_keys(key).into()
    }

    fn focus_hint(&self) -> Option<&'static str> {
        Some("↑↓/PgUp/PgDn:scroll  Ctrl+Y:copy  Y:copy table")
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Block rendering
// ═══════════════════════════════════════════════════════════════════════════

/// Every line for a result, redirect notice first
pub fn result_lines(result: &RenderResult, theme: &Theme, with_aside: bool) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    if let Some(notice) = result.notice() {
        lines.push(Line::from(Span::styled(
            format!("ℹ {}", notice),
            Style::default()
                .fg(theme.warning)
                .add_modifier(Modifier::BOLD),
        )));
        lines.push(Line::default());
    }
    for block in result.output().main_blocks() {
        lines.extend(block_lines(block, theme));
    }
    if with_aside {
        for block in result.output().aside_blocks() {
            lines.extend(block_lines(block, theme));
        }
    }
    lines
}

fn styled(text: impl Into<String>, style: Style) -> Line<'static> {
    Line::from(Span::styled(text.into(), style))
}

/// Lines for one block; charts are drawn separately
pub fn block_lines(block: &OutputBlock, theme: &Theme) -> Vec<Line<'static>> {
    let fg = Style::default().fg(theme.foreground);
    match block {
        OutputBlock::Header(s) => vec![
            styled(
                s.clone(),
                Style::default()
                    .fg(theme.header)
                    .add_modifier(Modifier::BOLD),
            ),
            Line::default(),
        ],
        OutputBlock::Subheader(s) => vec![
            styled(
                s.clone(),
                Style::default()
                    .fg(theme.subheader)
                    .add_modifier(Modifier::BOLD),
            ),
            Line::default(),
        ],
        OutputBlock::Text(s) => {
            let mut lines: Vec<Line> = s.lines().map(|l| styled(l.to_string(), fg)).collect();
            lines.push(Line::default());
            lines
        }
        OutputBlock::List(items) => {
            let mut lines: Vec<Line> = items
                .iter()
                .map(|item| {
                    // Items that carry their own marker keep it
                    if item.starts_with("- ") || item.starts_with(|c: char| c.is_ascii_digit()) {
                        styled(item.clone(), fg)
                    } else {
                        styled(format!("• {}", item), fg)
                    }
                })
                .collect();
            lines.push(Line::default());
            lines
        }
        OutputBlock::Info(s) => vec![styled(format!("ℹ {}", s), Style::default().fg(theme.info))],
        OutputBlock::Warning(s) => {
            vec![styled(format!("⚠ {}", s), Style::default().fg(theme.warning))]
        }
        OutputBlock::Error(s) => vec![styled(
            format!("✗ {}", s),
            Style::default().fg(theme.error).add_modifier(Modifier::BOLD),
        )],
        OutputBlock::Success(s) => {
            vec![styled(format!("✓ {}", s), Style::default().fg(theme.success))]
        }
        OutputBlock::Metrics(metrics) => metric_lines(metrics, theme),
        OutputBlock::Table(table) => {
            let columns: Vec<String> = table.columns().to_vec();
            let rows: Vec<Vec<String>> = table
                .rows()
                .iter()
                .map(|r| r.iter().map(ToString::to_string).collect())
                .collect();
            let mut lines = table_lines(&columns, &rows, theme);
            lines.push(Line::default());
            lines
        }
        OutputBlock::Chart(_) => Vec::new(),
        OutputBlock::Aside { title, lines: body } => {
            let mut lines = vec![styled(
                title.clone(),
                Style::default()
                    .fg(theme.subheader)
                    .add_modifier(Modifier::BOLD),
            )];
            lines.extend(body.iter().map(|l| styled(l.clone(), fg)));
            lines.push(Line::default());
            lines
        }
        OutputBlock::Image {
            reference,
            caption,
            tint,
        } => {
            let swatch = tint
                .as_deref()
                .and_then(TomlTheme::try_parse_color)
                .unwrap_or(theme.muted);
            let mut lines: Vec<Line> = (0..SWATCH_ROWS)
                .map(|_| styled("█".repeat(32), Style::default().fg(swatch)))
                .collect();
            lines.push(styled(
                caption.clone(),
                Style::default()
                    .fg(theme.foreground)
                    .add_modifier(Modifier::ITALIC),
            ));
            lines.push(styled(reference.clone(), Style::default().fg(theme.muted)));
            if let Some(color) = tint {
                lines.push(styled(format!("Primary color {}", color), Style::default().fg(theme.muted)));
            }
            lines.push(Line::default());
            lines
        }
    }
}

/// Two rows: muted labels over bold values, one column per metric
fn metric_lines(metrics: &[Metric], theme: &Theme) -> Vec<Line<'static>> {
    let mut labels = Vec::new();
    let mut values = Vec::new();
    for m in metrics {
        let width = m.label.width().max(m.value.width()) + 3;
        labels.push(Span::styled(
            pad_to(&m.label, width),
            Style::default().fg(theme.muted),
        ));
        values.push(Span::styled(
            pad_to(&m.value, width),
            Style::default()
                .fg(theme.foreground)
                .add_modifier(Modifier::BOLD),
        ));
    }
    vec![Line::from(labels), Line::from(values), Line::default()]
}

/// Aligned text table: bold header row, then data rows
pub fn table_lines(columns: &[String], rows: &[Vec<String>], theme: &Theme) -> Vec<Line<'static>> {
    let widths: Vec<usize> = columns
        .iter()
        .enumerate()
        .map(|(i, c)| {
            rows.iter()
                .filter_map(|r| r.get(i))
                .map(|s| s.width())
                .chain(std::iter::once(c.width()))
                .max()
                .unwrap_or(0)
                .min(MAX_COLUMN_WIDTH)
        })
        .collect();

    let render_row = |cells: &[String], style: Style| -> Line<'static> {
        let spans: Vec<Span> = cells
            .iter()
            .zip(&widths)
            .map(|(cell, w)| Span::styled(format!("{}  ", pad_to(cell, *w)), style))
            .collect();
        Line::from(spans)
    };

    let mut lines = vec![render_row(
        columns,
        Style::default()
            .fg(theme.subheader)
            .add_modifier(Modifier::BOLD),
    )];
    let fg = Style::default().fg(theme.foreground);
    lines.extend(rows.iter().map(|r| render_row(r, fg)));
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::panels::PanelOutput;

    fn theme() -> Theme {
        Theme::by_name("Studio Dark")
    }

    fn text_of(lines: &[Line]) -> Vec<String> {
        lines.iter().map(|l| l.to_string()).collect()
    }

    #[test]
    fn redirect_notice_leads_the_output() {
        let mut output = PanelOutput::new();
        output.header("Settings");
        let result = RenderResult::Redirected {
            requested: "SEO Optimizer".into(),
            output,
            notice: "Please set your API key in Settings first!".into(),
        };
        let lines = text_of(&result_lines(&result, &theme(), false));
        assert_eq!(lines[0], "ℹ Please set your API key in Settings first!");
        assert_eq!(lines[2], "Settings");
    }

    #[test]
    fn asides_fold_in_only_when_asked() {
        let mut output = PanelOutput::new();
        output.header("Trend Analysis").aside("Related Topics", ["1. Topic One"]);
        let result = RenderResult::Rendered {
            label: "Trend Analysis".into(),
            output,
        };
        let narrow = text_of(&result_lines(&result, &theme(), true));
        assert!(narrow.contains(&"Related Topics".to_string()));
        let wide = text_of(&result_lines(&result, &theme(), false));
        assert!(!wide.contains(&"Related Topics".to_string()));
    }

    #[test]
    fn list_items_keep_their_own_markers() {
        let block = OutputBlock::List(vec!["- Review: idea".into(), "Title Score: 8/10".into()]);
        let lines = text_of(&block_lines(&block, &theme()));
        assert_eq!(lines[0], "- Review: idea");
        assert_eq!(lines[1], "• Title Score: 8/10");
    }

    #[test]
    fn table_columns_align() {
        let columns = vec!["Metric".to_string(), "Count".to_string()];
        let rows = vec![
            vec!["Likes".to_string(), "5000".to_string()],
            vec!["Comments".to_string(), "1200".to_string()],
        ];
        let lines = text_of(&table_lines(&columns, &rows, &theme()));
        assert_eq!(lines[0], "Metric    Count  ");
        assert_eq!(lines[1], "Likes     5000   ");
        assert_eq!(lines[2], "Comments  1200   ");
    }

    #[test]
    fn copy_prefers_generated_text_and_data_is_tsv() {
        let mut output = PanelOutput::new();
        output.header("Engagement Analytics");
        output.push(OutputBlock::Table(crate::panels::mock::engagement()));
        let mut panel = OutputPanel::new();
        panel.set_result(RenderResult::Rendered {
            label: "Engagement Analytics".into(),
            output,
        });
        let data = panel.copy_data().unwrap();
        assert!(data.starts_with("Metric\t"));
        assert!(panel.copy_text().unwrap().contains("Engagement Analytics"));
    }
}

//! Chart pane: draws a panel's `ChartSpec` as a line or bar chart

use super::formatters::format_compact_number;
use crate::chart::{ChartKind, ChartSpec};
use crate::theme::Theme;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    symbols,
    text::{Line, Span},
    widgets::{Axis, Bar, BarChart, BarGroup, Block, Borders, Chart, Dataset, GraphType},
    Frame,
};

pub fn render(f: &mut Frame, area: Rect, spec: &ChartSpec, theme: &Theme) {
    let title = format!(" {} by {} ", spec.axes.y.join(" / "), spec.axes.x);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(theme.border_type)
        .border_style(Style::default().fg(theme.border))
        .title(Span::styled(title, Style::default().fg(theme.subheader)));

    match spec.kind {
        ChartKind::Line => render_line(f, area, spec, theme, block),
        ChartKind::Bar => render_bar(f, area, spec, theme, block),
    }
}

/// First, middle and last x labels
fn sparse_labels(labels: &[String]) -> Vec<String> {
    match labels.len() {
        0 => Vec::new(),
        1 | 2 => labels.to_vec(),
        n => vec![
            labels[0].clone(),
            labels[n / 2].clone(),
            labels[n - 1].clone(),
        ],
    }
}

/// y bounds with 5% headroom on either side
fn padded_bounds(spec: &ChartSpec) -> [f64; 2] {
    let (min, max) = spec.y_bounds();
    let padding = ((max - min).abs() * 0.05).max(1.0);
    // Non-negative data never dips below the zero line
    let lower = if min >= 0.0 {
        (min - padding).max(0.0)
    } else {
        min - padding
    };
    [lower, max + padding]
}

fn render_line(f: &mut Frame, area: Rect, spec: &ChartSpec, theme: &Theme, block: Block) {
    let series = spec.series();
    let x_max = spec.table.len().saturating_sub(1) as f64;
    let [y_min, y_max] = padded_bounds(spec);
    let muted = Style::default().fg(theme.axis);

    let datasets: Vec<Dataset> = series
        .iter()
        .enumerate()
        .map(|(i, s)| {
            Dataset::default()
                .name(s.name.clone())
                .marker(symbols::Marker::Braille)
                .graph_type(GraphType::Line)
                .style(Style::default().fg(theme.series_color(i)))
                .data(&s.points)
        })
        .collect();

    let x_labels: Vec<Span> = sparse_labels(&spec.x_labels())
        .into_iter()
        .map(|l| Span::styled(l, muted))
        .collect();
    let y_labels = vec![
        Span::styled(format_compact_number(y_min), muted),
        Span::styled(format_compact_number((y_min + y_max) / 2.0), muted),
        Span::styled(format_compact_number(y_max), muted),
    ];

    let chart = Chart::new(datasets)
        .block(block)
        .x_axis(
            Axis::default()
                .title(Span::styled(spec.axes.x.clone(), muted))
                .style(muted)
                .bounds([0.0, x_max.max(1.0)])
                .labels(x_labels),
        )
        .y_axis(
            Axis::default()
                .style(muted)
                .bounds([y_min, y_max])
                .labels(y_labels),
        );

    f.render_widget(chart, area);
}

fn render_bar(f: &mut Frame, area: Rect, spec: &ChartSpec, theme: &Theme, block: Block) {
    let labels = spec.x_labels();
    let Some(series) = spec.series().into_iter().next() else {
        f.render_widget(block, area);
        return;
    };

    let bars: Vec<Bar> = series
        .points
        .iter()
        .enumerate()
        .map(|(i, (_, y))| {
            let value = y.max(0.0).round() as u64;
            Bar::default()
                .label(Line::from(labels.get(i).cloned().unwrap_or_default()))
                .value(value)
                .text_value(format_compact_number(*y))
                .style(Style::default().fg(theme.series_color(i)))
                .value_style(
                    Style::default()
                        .fg(theme.background)
                        .bg(theme.series_color(i))
                        .add_modifier(Modifier::BOLD),
                )
        })
        .collect();

    // Spread bars across the pane, leaving a one-column gap between them
    let inner_width = area.width.saturating_sub(2);
    let count = bars.len().max(1) as u16;
    let bar_width = (inner_width / count).saturating_sub(1).clamp(3, 16);

    let chart = BarChart::default()
        .block(block)
        .data(BarGroup::default().bars(&bars))
        .bar_width(bar_width)
        .bar_gap(1)
        .style(Style::default().fg(theme.foreground));

    f.render_widget(chart, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sparse_labels_pick_ends_and_middle() {
        let labels: Vec<String> = (1..=5).map(|i| i.to_string()).collect();
        assert_eq!(sparse_labels(&labels), vec!["1", "3", "5"]);
        assert_eq!(sparse_labels(&labels[..2]), vec!["1", "2"]);
        assert!(sparse_labels(&[]).is_empty());
    }
}

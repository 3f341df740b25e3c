// Views module - screen layout
//
//   ┌ title ───────────────────────────────────────────┐
//   │ nav │ form │ output (+ chart)           │ aside  │
//   │     │      │                            │        │
//   ├ logs ────────────────────────────────────────────┤
//   └ status ──────────────────────────────────────────┘
//
// The aside column and the logs strip drop out on narrow terminals.

mod help;

use super::app::App;
use super::components::form_panel::{self, Column};
use super::components::{self, output_panel};
use super::layout::Breakpoint;
use super::traits::ComponentId;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::Style;
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

const LOGS_HEIGHT: u16 = 7;

pub fn draw(f: &mut Frame, app: &mut App) {
    let bg_block = Block::default().style(Style::default().bg(app.theme.background));
    f.render_widget(bg_block, f.area());

    let bp = Breakpoint::from_width(f.area().width);
    let logs_height = if bp.shows_logs() { LOGS_HEIGHT } else { 0 };

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(8),
            Constraint::Length(logs_height),
            Constraint::Length(2),
        ])
        .split(f.area());

    components::title_bar::render(f, rows[0], app);
    draw_body(f, rows[1], app, bp);
    if logs_height > 0 {
        let focused = app.focus == ComponentId::Logs;
        app.logs.render(f, rows[2], &app.theme, focused);
    }
    components::status_bar::render(f, rows[3], app);

    if app.show_help {
        help::render(f, app);
    }
    if let Some(toast) = &app.toast {
        let area = f.area();
        toast.render(f, area, &app.theme);
    }
}

fn draw_body(f: &mut Frame, area: Rect, app: &mut App, bp: Breakpoint) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(bp.sidebar_width()), Constraint::Min(20)])
        .split(area);

    let locked = !app.session.has_credential();
    app.nav
        .render(f, columns[0], &app.theme, app.focus == ComponentId::Nav, locked);

    let has_aside = app
        .output
        .result()
        .is_some_and(|r| r.output().aside_blocks().next().is_some())
        || app
            .current_form()
            .is_some_and(|s| s.spec().fields.iter().any(|f| f.aside));

    let (content, aside) = if has_aside && bp.shows_aside() {
        let split = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Min(30), Constraint::Length(32)])
            .split(columns[1]);
        (split[0], Some(split[1]))
    } else {
        (columns[1], None)
    };

    draw_content(f, content, app, aside.is_none());
    if let Some(area) = aside {
        draw_aside(f, area, app);
    }
}

/// Form to the left of the output when the panel has widgets
fn draw_content(f: &mut Frame, area: Rect, app: &mut App, narrow: bool) {
    let form_focused = app.focus == ComponentId::Form;
    let output_focused = app.focus == ComponentId::Output;
    // Without a side column, aside content folds into the main panes
    let column = if narrow { Column::All } else { Column::Main };

    let form = app.current_form().filter(|s| !s.spec().is_empty()).cloned();
    let Some(state) = form else {
        app.output.render(f, area, &app.theme, output_focused, narrow);
        return;
    };

    let form_width = (area.width * 2 / 5).clamp(24, 44);
    let split = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(form_width), Constraint::Min(20)])
        .split(area);

    form_panel::render(f, split[0], &state, column, &app.theme, form_focused);
    app.output
        .render(f, split[1], &app.theme, output_focused, narrow);
}

/// Side column: aside form fields, then aside blocks such as tips
fn draw_aside(f: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;
    let mut lines: Vec<Line> = Vec::new();

    if let Some(state) = app.current_form() {
        lines.extend(form_panel::form_lines(
            state,
            Column::Aside,
            theme,
            app.focus == ComponentId::Form,
        ));
    }
    if let Some(result) = app.output.result() {
        for block in result.output().aside_blocks() {
            lines.extend(output_panel::block_lines(block, theme));
        }
    }

    let paragraph = Paragraph::new(lines).wrap(Wrap { trim: false }).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(theme.border_type)
            .border_style(Style::default().fg(theme.border)),
    );
    f.render_widget(paragraph, area);
}

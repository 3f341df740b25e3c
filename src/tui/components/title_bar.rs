// Title bar component
//
// App name, a spinner while a submit is generating, and the help hint.

use crate::tui::app::App;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let indicator = if app.is_generating() {
        format!(" {} generating", app.spinner_char())
    } else {
        String::new()
    };
    let title_text = format!(
        " 🎬 Creator Suite{} ──── {}",
        indicator,
        app.current_label()
    );

    let title = Paragraph::new(title_text)
        .style(
            Style::default()
                .fg(app.theme.title)
                .add_modifier(Modifier::BOLD),
        )
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(app.theme.border_type)
                .border_style(Style::default().fg(app.theme.title))
                .title_top(Line::from(" ? ").right_aligned()),
        );

    f.render_widget(title, area);
}

// Help overlay - keyboard reference, toggled with ?

use crate::tui::app::App;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width.min(area.width), height.min(area.height))
}

pub fn render(f: &mut Frame, app: &App) {
    let key_style = Style::default().fg(app.theme.highlight);
    let desc_style = Style::default().fg(app.theme.foreground);
    let header_style = Style::default()
        .fg(app.theme.header)
        .add_modifier(Modifier::BOLD);

    let kb = |key: &str, desc: &str| -> Line {
        Line::from(vec![
            Span::raw("    "),
            Span::styled(format!("{:<14}", key), key_style),
            Span::styled(desc.to_string(), desc_style),
        ])
    };

    let content = Text::from(vec![
        Line::raw(""),
        Line::from(Span::styled("  Menu", header_style)),
        kb("↑/↓, j/k", "Choose a panel (opens immediately)"),
        kb("Enter, →", "Edit the panel's form"),
        kb("Tab", "Cycle focus: menu, form, output, logs"),
        kb("q", "Quit"),
        Line::raw(""),
        Line::from(Span::styled("  Form", header_style)),
        kb("Tab/↑↓", "Next / previous field"),
        kb("←/→", "Change choice or slider"),
        kb("Space", "Toggle a multi-choice option"),
        kb("Enter", "Submit (on the button)"),
        kb("Esc", "Back to the menu"),
        Line::raw(""),
        Line::from(Span::styled("  Output", header_style)),
        kb("PgUp/PgDn", "Scroll the output"),
        kb("Ctrl+Y", "Copy the focused pane"),
        kb("Y", "Copy table data (output focused)"),
        Line::raw(""),
        Line::from(Span::styled("  Anywhere", header_style)),
        kb("?, F1", "Toggle this help"),
        kb("Ctrl+C", "Quit"),
        Line::raw(""),
    ]);

    let height = content.lines.len() as u16 + 2;
    let area = centered_rect(56, height, f.area());
    let help = Paragraph::new(content).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(app.theme.border_type)
            .border_style(Style::default().fg(app.theme.highlight))
            .title(" Keys ")
            .style(Style::default().bg(app.theme.background)),
    );

    f.render_widget(Clear, area);
    f.render_widget(help, area);
}

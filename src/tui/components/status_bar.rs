// Status bar component
//
// Session id, uptime, credential state, the shown panel and the focused
// area's key hints. Narrow terminals get a compact form.

use crate::tui::app::App;
use crate::tui::layout::Breakpoint;
use crate::tui::traits::{ComponentId, Interactive};
use ratatui::{
    layout::Rect,
    style::Style,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Credential part of the status line; never shows the key itself
pub fn credential_status(app: &App) -> String {
    match app.session.credential_fingerprint() {
        Some(fp) => format!("🔑 {}", fp),
        None => "🔒 no API key".to_string(),
    }
}

fn focus_hint(app: &App) -> &'static str {
    let hint = match app.focus {
        ComponentId::Nav => app.nav.focus_hint(),
        ComponentId::Output => app.output.focus_hint(),
        ComponentId::Logs => app.logs.focus_hint(),
        ComponentId::Form => Some("Tab/↑↓:field  ←→:change  Space:toggle  Enter:submit  Esc:menu"),
    };
    hint.unwrap_or_default()
}

pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let bp = Breakpoint::from_width(area.width);

    let status_text = if !bp.at_least(Breakpoint::Wide) {
        format!(
            " {} │ {} │ {} │ {}",
            app.session.id().as_str(),
            app.uptime(),
            credential_status(app),
            app.current_label()
        )
    } else {
        format!(
            " session {} │ {} │ {} │ {} │ {} │ {}",
            app.session.id().as_str(),
            app.uptime(),
            credential_status(app),
            app.current_label(),
            app.backend_name(),
            focus_hint(app)
        )
    };

    let status = Paragraph::new(status_text)
        .style(Style::default().fg(app.theme.status_bar))
        .block(Block::default().borders(Borders::TOP));

    f.render_widget(status, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::API_CREDENTIAL;
    use crate::tui::app::tests::app;

    #[test]
    fn credential_state_hides_the_key() {
        let mut app = app();
        assert_eq!(credential_status(&app), "🔒 no API key");
        app.session.set(API_CREDENTIAL, "sk-secret-value");
        let status = credential_status(&app);
        assert!(status.starts_with("🔑 "));
        assert!(!status.contains("sk-secret-value"));
    }
}

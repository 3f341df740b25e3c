// TUI module - Terminal User Interface
//
// Owns the terminal for the lifetime of the dashboard:
// - Terminal initialization and cleanup
// - Event loop (keyboard input, timer ticks)
// - Layered key dispatch: help overlay → global keys → focused area

pub mod app;
pub mod clipboard;
pub mod components;
pub mod form;
pub mod layout;
pub mod scroll;
pub mod traits;
pub mod views;

use anyhow::{Context, Result};
use app::App;
use components::Toast;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use form::FormAction;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::time::Duration;
use traits::{ComponentId, Copyable, Interactive, Scrollable};

/// Run the dashboard until the user quits
pub async fn run_tui(mut app: App) -> Result<()> {
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("Failed to setup terminal")?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;

    let result = run_event_loop(&mut terminal, &mut app).await;

    disable_raw_mode().context("Failed to disable raw mode")?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)
        .context("Failed to restore terminal")?;
    terminal.show_cursor().context("Failed to show cursor")?;

    result
}

/// Draw, then either run a pending submit or wait for a key or tick
///
/// A submit blocks until generation finishes, so it runs right after the
/// frame that shows the spinner rather than inside the key handler.
async fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<()> {
    let mut tick_interval = tokio::time::interval(Duration::from_millis(200));

    loop {
        terminal
            .draw(|f| views::draw(f, app))
            .context("Failed to draw terminal")?;

        if app.is_generating() {
            app.run_pending_submit();
            continue;
        }

        tokio::select! {
            _ = async {
                if event::poll(Duration::from_millis(10)).unwrap_or(false) {
                    if let Ok(Event::Key(key_event)) = event::read() {
                        handle_key_event(app, key_event);
                    }
                }
            } => {}

            _ = tick_interval.tick() => {
                app.tick();
            }
        }

        if app.should_quit {
            break;
        }
    }

    tracing::info!("Dashboard closed");
    Ok(())
}

/// Layered dispatch: Help → Global → Focused area
pub fn handle_key_event(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if app.show_help {
        if matches!(
            key.code,
            KeyCode::Esc | KeyCode::Char('?') | KeyCode::Char('q') | KeyCode::F(1)
        ) {
            app.show_help = false;
        }
        return;
    }

    if handle_global_keys(app, key) {
        return;
    }

    match app.focus {
        ComponentId::Nav => handle_nav_key(app, key),
        ComponentId::Form => handle_form_key(app, key),
        ComponentId::Output => {
            if key.code == KeyCode::Char('Y') {
                copy_data(app);
            } else if !app.output.handle_key(key).was_handled() {
                handle_area_keys(app, key);
            }
        }
        ComponentId::Logs => {
            if !app.logs.handle_key(key).was_handled() {
                handle_area_keys(app, key);
            }
        }
    }
}

/// Keys that work the same in every area
fn handle_global_keys(app: &mut App, key: KeyEvent) -> bool {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    match key.code {
        KeyCode::Char('c') if ctrl => {
            app.should_quit = true;
            true
        }
        KeyCode::Char('y') if ctrl => {
            copy_focused(app);
            true
        }
        KeyCode::F(1) => {
            app.show_help = true;
            true
        }
        // Typing into a form must not trigger single-letter shortcuts
        KeyCode::Char('?') if app.focus != ComponentId::Form => {
            app.show_help = true;
            true
        }
        KeyCode::PageUp if app.focus != ComponentId::Logs => {
            app.output.page_up();
            true
        }
        KeyCode::PageDown if app.focus != ComponentId::Logs => {
            app.output.page_down();
            true
        }
        _ => false,
    }
}

fn handle_nav_key(app: &mut App, key: KeyEvent) {
    if app.nav.handle_key(key).was_handled() {
        // Selecting a panel renders it straight away
        app.refresh();
        return;
    }
    match key.code {
        KeyCode::Enter | KeyCode::Right => app.set_focus(ComponentId::Form),
        KeyCode::Char('q') => app.should_quit = true,
        _ => handle_area_keys(app, key),
    }
}

fn handle_form_key(app: &mut App, key: KeyEvent) {
    if key.code == KeyCode::Esc {
        app.focus = ComponentId::Nav;
        return;
    }
    if app.handle_form_key(key) == FormAction::Ignored {
        handle_area_keys(app, key);
    }
}

/// Fallback for keys no area consumed
fn handle_area_keys(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Tab if app.focus != ComponentId::Form => app.cycle_focus(true),
        KeyCode::BackTab if app.focus != ComponentId::Form => app.cycle_focus(false),
        KeyCode::Esc => app.focus = ComponentId::Nav,
        _ => {}
    }
}

fn copy_focused(app: &mut App) {
    let (text, what) = match app.focus {
        ComponentId::Logs => (app.logs.copy_text(), app.logs.copy_description()),
        _ => (app.output.copy_text(), app.output.copy_description()),
    };
    copy_with_toast(app, text, what);
}

fn copy_data(app: &mut App) {
    let data = app.output.copy_data();
    copy_with_toast(app, data, "table");
}

fn copy_with_toast(app: &mut App, text: Option<String>, what: &str) {
    let Some(text) = text else {
        app.toast = Some(Toast::failure(format!("Nothing to copy in {}", what)));
        return;
    };
    app.toast = Some(match clipboard::copy_to_clipboard(&text) {
        Ok(()) => Toast::success(format!("✓ Copied {}", what)),
        Err(e) => {
            tracing::warn!(error = %e, "Clipboard copy failed");
            Toast::failure("✗ Failed to copy")
        }
    });
}

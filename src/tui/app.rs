// App state - everything the dashboard shows, and the render cycle behind it
//
// One render cycle: ensure the shown panel has form state, dispatch the
// selected label through the router with the FormBook as toolkit, and keep
// the result for the output pane. Submits are two-phase so the title bar
// can show a spinner for one frame before a blocking generation call.

use super::components::{LogsPanel, NavPanel, OutputPanel, Toast};
use super::form::{FormAction, FormBook, FormState};
use super::traits::ComponentId;
use crate::config::Config;
use crate::logging::LogBuffer;
use crate::panels::settings::KEY_SAVED;
use crate::panels::SETTINGS;
use crate::router::{PanelRouter, RenderResult};
use crate::session::SessionState;
use crate::theme::Theme;
use crossterm::event::KeyEvent;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::time::Instant;

pub struct App {
    pub theme: Theme,
    pub session: SessionState,
    router: PanelRouter,
    pub forms: FormBook,

    pub nav: NavPanel,
    pub output: OutputPanel,
    pub logs: LogsPanel,
    pub focus: ComponentId,

    pub toast: Option<Toast>,
    pub show_help: bool,
    pub should_quit: bool,

    /// Gated panel the user asked for before being sent to Settings
    return_to: Option<String>,
    /// Submit requested; runs after the next draw
    pending_submit: bool,
    rng: StdRng,
    start_time: Instant,
    animation_frame: usize,
}

impl App {
    pub fn new(config: &Config, router: PanelRouter, log_buffer: LogBuffer) -> Self {
        let rng = match config.mock_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let session = SessionState::new();
        tracing::info!(session = %session.id().as_str(), "Session started");

        let mut app = Self {
            theme: Theme::by_name(&config.theme),
            nav: NavPanel::new(router.registry()),
            session,
            router,
            forms: FormBook::new(),
            output: OutputPanel::new(),
            logs: LogsPanel::new(log_buffer),
            focus: ComponentId::Nav,
            toast: None,
            show_help: false,
            should_quit: false,
            return_to: None,
            pending_submit: false,
            rng,
            start_time: Instant::now(),
            animation_frame: 0,
        };
        app.refresh();
        app
    }

    // ─────────────────────────────────────────────────────────────────────
    // Render cycle
    // ─────────────────────────────────────────────────────────────────────

    /// Label of the panel on screen (Settings while redirected)
    pub fn current_label(&self) -> &str {
        match self.output.result() {
            Some(result) => result.shown_label(),
            None => self.nav.selected_label(),
        }
    }

    /// Form of the panel on screen
    pub fn current_form(&self) -> Option<&FormState> {
        self.forms.get(self.current_label())
    }

    pub fn backend_name(&self) -> &'static str {
        self.router.generator().name()
    }

    /// Re-run the selected panel without submitting
    pub fn refresh(&mut self) {
        self.dispatch_selected();
        if self.focus == ComponentId::Form && !self.form_is_interactive() {
            self.focus = ComponentId::Nav;
        }
    }

    fn dispatch_selected(&mut self) {
        let label = self.nav.selected_label().to_string();

        // Make sure whichever form will render has state before dispatch
        let spec = match self.router.form_for(&label, &self.session) {
            Ok(spec) => spec,
            Err(e) => {
                tracing::error!(error = %e, "Cannot render panel");
                self.toast = Some(Toast::failure(format!("✗ {}", e)));
                return;
            }
        };
        let shown = if self.router.would_redirect(&label, &self.session).unwrap_or(false) {
            SETTINGS
        } else {
            label.as_str()
        };
        self.forms.entry(shown, spec);

        match self
            .router
            .dispatch(&label, &mut self.session, &self.forms, &mut self.rng)
        {
            Ok(result) => self.show(result),
            Err(e) => {
                tracing::error!(error = %e, "Dispatch failed");
                self.toast = Some(Toast::failure(format!("✗ {}", e)));
            }
        }
    }

    fn show(&mut self, result: RenderResult) {
        self.return_to = match &result {
            RenderResult::Redirected { requested, .. } => Some(requested.clone()),
            RenderResult::Rendered { .. } => None,
        };
        self.output.set_result(result);
    }

    /// Ask for a submit on the next loop iteration
    pub fn request_submit(&mut self) {
        self.pending_submit = true;
    }

    pub fn is_generating(&self) -> bool {
        self.pending_submit
    }

    /// Run a requested submit; a saved credential sends the user back to
    /// the panel they originally asked for
    pub fn run_pending_submit(&mut self) {
        if !std::mem::take(&mut self.pending_submit) {
            return;
        }

        let shown = self.current_label().to_string();
        tracing::debug!(panel = %shown, "Submit");
        self.forms.arm(&shown);
        self.dispatch_selected();
        self.forms.disarm();

        let saved = self
            .output
            .result()
            .is_some_and(|r| r.output().has_success(KEY_SAVED));
        if saved {
            self.toast = Some(Toast::success("✓ API key saved"));
            if let Some(target) = self.return_to.take() {
                if self.nav.select_label(&target) {
                    self.focus = ComponentId::Nav;
                    self.refresh();
                }
            }
        }
    }

    // ─────────────────────────────────────────────────────────────────────
    // Focus and input
    // ─────────────────────────────────────────────────────────────────────

    pub fn form_is_interactive(&self) -> bool {
        self.current_form().is_some_and(FormState::is_interactive)
    }

    pub fn set_focus(&mut self, target: ComponentId) {
        if target == ComponentId::Form && !self.form_is_interactive() {
            return;
        }
        self.focus = target;
    }

    /// Tab between areas, skipping a form with nothing to edit
    pub fn cycle_focus(&mut self, forward: bool) {
        let mut next = self.focus;
        for _ in 0..4 {
            next = if forward {
                next.next_focus()
            } else {
                next.prev_focus()
            };
            if next != ComponentId::Form || self.form_is_interactive() {
                break;
            }
        }
        self.focus = next;
    }

    /// Feed a key to the shown panel's form
    pub fn handle_form_key(&mut self, key: KeyEvent) -> FormAction {
        let label = self.current_label().to_string();
        let Some(state) = self.forms.get_mut(&label) else {
            return FormAction::Ignored;
        };
        let action = state.handle_key(key);
        if action == FormAction::Submit {
            self.request_submit();
        }
        action
    }

    // ─────────────────────────────────────────────────────────────────────
    // Animation and status
    // ─────────────────────────────────────────────────────────────────────

    pub fn tick(&mut self) {
        self.animation_frame = self.animation_frame.wrapping_add(1);
        if self.toast.as_ref().is_some_and(Toast::is_expired) {
            self.toast = None;
        }
    }

    pub fn spinner_char(&self) -> char {
        const SPINNER: [char; 4] = ['◐', '◓', '◑', '◒'];
        SPINNER[self.animation_frame % SPINNER.len()]
    }

    pub fn uptime(&self) -> String {
        let seconds = self.start_time.elapsed().as_secs();
        format!(
            "{:02}:{:02}:{:02}",
            seconds / 3600,
            (seconds % 3600) / 60,
            seconds % 60
        )
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::generation::testing::StubGenerator;
    use crate::panels::settings::API_KEY_FIELD;
    use crate::panels::{Value, SCRIPT_GENERATOR};
    use crate::router::{PanelRegistry, CREDENTIAL_NOTICE};

    pub fn app() -> App {
        let config = Config {
            mock_seed: Some(7),
            ..Config::default()
        };
        let router = PanelRouter::new(
            PanelRegistry::standard().unwrap(),
            Box::new(StubGenerator::ok("generated text")),
        );
        App::new(&config, router, LogBuffer::new())
    }

    fn save_key(app: &mut App, key: &str) {
        app.forms
            .get_mut(SETTINGS)
            .unwrap()
            .set(API_KEY_FIELD, Value::Text(key.into()));
        app.request_submit();
        app.run_pending_submit();
    }

    #[test]
    fn first_panel_redirects_without_a_key() {
        let app = app();
        assert_eq!(app.nav.selected_label(), SCRIPT_GENERATOR);
        assert_eq!(app.current_label(), SETTINGS);
        let result = app.output.result().unwrap();
        assert_eq!(result.notice(), Some(CREDENTIAL_NOTICE));
    }

    #[test]
    fn saving_a_key_returns_to_the_requested_panel() {
        let mut app = app();
        save_key(&mut app, "sk-test");
        assert!(app.session.has_credential());
        assert_eq!(app.current_label(), SCRIPT_GENERATOR);
        assert!(!app.output.result().unwrap().is_redirect());
        assert!(app.toast.is_some());
    }

    #[test]
    fn submit_runs_only_once() {
        let mut app = app();
        app.request_submit();
        assert!(app.is_generating());
        app.run_pending_submit();
        assert!(!app.is_generating());
        app.run_pending_submit();
        // An empty key clears rather than saves
        assert!(app.toast.is_none());
        assert!(!app.session.has_credential());
    }

    #[test]
    fn focus_skips_forms_without_widgets() {
        let mut app = app();
        save_key(&mut app, "sk-test");
        assert!(app.nav.select_label(crate::panels::ENGAGEMENT_ANALYTICS));
        app.refresh();
        app.cycle_focus(true);
        assert_eq!(app.focus, ComponentId::Output);
        app.set_focus(ComponentId::Form);
        assert_eq!(app.focus, ComponentId::Output);
    }
}

// Panel router
//
// Maps a navigation label to its handler and enforces the credential gate:
//
//   label ──> resolve ──> gated && no credential? ──yes──> Settings (Redirected)
//                                   │
//                                   no
//                                   ▼
//                             handler (Rendered)
//
// The gate is evaluated on every dispatch against the live session, so saving
// or clearing the credential takes effect on the very next selection.

mod error;
mod registry;

pub use error::RouterError;
pub use registry::{PanelDescriptor, PanelRegistry};

use crate::generation::TextGenerator;
use crate::panels::{FormSpec, PanelContext, PanelOutput, Toolkit};
use crate::session::SessionState;
use rand::RngCore;

/// Informational notice shown above Settings when a gated panel was requested
pub const CREDENTIAL_NOTICE: &str = "Please set your API key in Settings first!";

/// Outcome of one dispatch
#[derive(Debug, Clone, PartialEq)]
pub enum RenderResult {
    /// The requested panel's handler ran
    Rendered { label: String, output: PanelOutput },
    /// The requested panel is gated and no credential is set; Settings ran instead
    Redirected {
        requested: String,
        output: PanelOutput,
        notice: String,
    },
}

impl RenderResult {
    pub fn output(&self) -> &PanelOutput {
        match self {
            Self::Rendered { output, .. } | Self::Redirected { output, .. } => output,
        }
    }

    /// Label of the panel whose handler actually ran
    pub fn shown_label(&self) -> &str {
        match self {
            Self::Rendered { label, .. } => label,
            Self::Redirected { .. } => crate::panels::SETTINGS,
        }
    }

    pub fn notice(&self) -> Option<&str> {
        match self {
            Self::Rendered { .. } => None,
            Self::Redirected { notice, .. } => Some(notice),
        }
    }

    pub fn is_redirect(&self) -> bool {
        matches!(self, Self::Redirected { .. })
    }
}

/// Routes navigation selections to panel handlers
pub struct PanelRouter {
    registry: PanelRegistry,
    generator: Box<dyn TextGenerator>,
}

impl PanelRouter {
    pub fn new(registry: PanelRegistry, generator: Box<dyn TextGenerator>) -> Self {
        tracing::debug!(
            panels = registry.len(),
            backend = generator.name(),
            "Panel router ready"
        );
        Self {
            registry,
            generator,
        }
    }

    pub fn registry(&self) -> &PanelRegistry {
        &self.registry
    }

    pub fn generator(&self) -> &dyn TextGenerator {
        self.generator.as_ref()
    }

    /// Descriptor for `label`
    pub fn resolve(&self, label: &str) -> Result<&PanelDescriptor, RouterError> {
        self.registry.get(label).ok_or_else(|| {
            tracing::error!(label, "Dispatch to unregistered panel");
            RouterError::UnknownPanel(label.to_string())
        })
    }

    /// Form of the panel that would actually render for `label` right now
    pub fn form_for(&self, label: &str, state: &SessionState) -> Result<FormSpec, RouterError> {
        let descriptor = self.effective(self.resolve(label)?, state);
        Ok(descriptor.handler().form())
    }

    /// Whether selecting `label` right now would redirect to Settings
    pub fn would_redirect(&self, label: &str, state: &SessionState) -> Result<bool, RouterError> {
        let descriptor = self.resolve(label)?;
        Ok(descriptor.is_gated() && !state.has_credential())
    }

    /// Resolve `label`, apply the credential gate, and run one handler
    pub fn dispatch(
        &self,
        label: &str,
        state: &mut SessionState,
        toolkit: &dyn Toolkit,
        rng: &mut dyn RngCore,
    ) -> Result<RenderResult, RouterError> {
        let requested = self.resolve(label)?;

        if requested.is_gated() && !state.has_credential() {
            tracing::debug!(requested = label, "Credential required, showing Settings");
            let output = self.invoke(self.registry.settings(), state, toolkit, rng);
            return Ok(RenderResult::Redirected {
                requested: label.to_string(),
                output,
                notice: CREDENTIAL_NOTICE.to_string(),
            });
        }

        let output = self.invoke(requested, state, toolkit, rng);
        Ok(RenderResult::Rendered {
            label: label.to_string(),
            output,
        })
    }

    fn effective<'a>(
        &'a self,
        requested: &'a PanelDescriptor,
        state: &SessionState,
    ) -> &'a PanelDescriptor {
        if requested.is_gated() && !state.has_credential() {
            self.registry.settings()
        } else {
            requested
        }
    }

    fn invoke(
        &self,
        descriptor: &PanelDescriptor,
        state: &mut SessionState,
        toolkit: &dyn Toolkit,
        rng: &mut dyn RngCore,
    ) -> PanelOutput {
        let handler = descriptor.handler();
        let input = toolkit.input(descriptor.label(), &handler.form());
        let mut cx = PanelContext {
            state,
            input,
            generator: self.generator.as_ref(),
            rng,
            today: chrono::Local::now().date_naive(),
        };
        handler.render(&mut cx)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generation::testing::StubGenerator;
    use crate::generation::ApiError;
    use crate::panels::settings::{Settings, API_KEY_FIELD, KEY_SAVED};
    use crate::panels::testing::{seeded, StaticToolkit};
    use crate::panels::{
        FormSpec, PanelHandler, PanelInput, CHANNEL_ANALYTICS, SCRIPT_GENERATOR, SETTINGS,
    };
    use crate::session::API_CREDENTIAL;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    /// Handler that counts how often it runs
    struct Counting(Arc<AtomicUsize>);

    impl PanelHandler for Counting {
        fn title(&self) -> &'static str {
            "Counting"
        }

        fn form(&self) -> FormSpec {
            FormSpec::new()
        }

        fn render(&self, _cx: &mut PanelContext<'_>) -> PanelOutput {
            self.0.fetch_add(1, Ordering::SeqCst);
            let mut out = PanelOutput::new();
            out.header("Counting");
            out
        }
    }

    fn counting_router() -> (PanelRouter, Arc<AtomicUsize>) {
        let hits = Arc::new(AtomicUsize::new(0));
        let registry = PanelRegistry::new(vec![
            PanelDescriptor::gated("Gated A", Counting(hits.clone())),
            PanelDescriptor::gated("Gated B", Counting(hits.clone())),
            PanelDescriptor::open(SETTINGS, Settings),
        ])
        .unwrap();
        let router = PanelRouter::new(registry, Box::new(StubGenerator::ok("unused")));
        (router, hits)
    }

    fn standard_router(generator: StubGenerator) -> PanelRouter {
        PanelRouter::new(PanelRegistry::standard().unwrap(), Box::new(generator))
    }

    #[test]
    fn gated_panel_redirects_without_credential() {
        let (router, hits) = counting_router();
        let mut state = SessionState::new();

        let result = router
            .dispatch("Gated A", &mut state, &StaticToolkit::new(), &mut seeded())
            .unwrap();

        assert!(result.is_redirect());
        assert_eq!(result.shown_label(), SETTINGS);
        assert_eq!(result.notice(), Some(CREDENTIAL_NOTICE));
        assert_eq!(hits.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn no_selection_sequence_reaches_a_gated_handler_without_credential() {
        let (router, hits) = counting_router();
        let mut state = SessionState::new();
        let toolkit = StaticToolkit::new();
        let mut rng = seeded();

        for label in ["Gated A", SETTINGS, "Gated B", "Gated A", SETTINGS, "Gated B"] {
            let result = router.dispatch(label, &mut state, &toolkit, &mut rng).unwrap();
            if label != SETTINGS {
                assert!(result.is_redirect(), "{} should redirect", label);
            }
        }
        assert_eq!(hits.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn credential_unlocks_and_clearing_regates() {
        let (router, hits) = counting_router();
        let mut state = SessionState::new();
        let toolkit = StaticToolkit::new();
        let mut rng = seeded();

        state.set(API_CREDENTIAL, "sk-test");
        let result = router.dispatch("Gated B", &mut state, &toolkit, &mut rng).unwrap();
        assert!(!result.is_redirect());
        assert_eq!(result.notice(), None);
        assert_eq!(hits.load(Ordering::SeqCst), 1);

        state.set(API_CREDENTIAL, "");
        for label in ["Gated A", "Gated B"] {
            let result = router.dispatch(label, &mut state, &toolkit, &mut rng).unwrap();
            assert!(result.is_redirect());
        }
        assert_eq!(hits.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn settings_always_renders_settings() {
        let (router, _) = counting_router();
        let toolkit = StaticToolkit::new();
        let mut rng = seeded();

        let mut state = SessionState::new();
        let before = router.dispatch(SETTINGS, &mut state, &toolkit, &mut rng).unwrap();
        state.set(API_CREDENTIAL, "sk-test");
        let after = router.dispatch(SETTINGS, &mut state, &toolkit, &mut rng).unwrap();

        for result in [before, after] {
            assert!(!result.is_redirect());
            assert_eq!(result.shown_label(), SETTINGS);
        }
    }

    #[test]
    fn unknown_label_fails_without_side_effects() {
        let (router, hits) = counting_router();
        let mut state = SessionState::new();
        state.set(API_CREDENTIAL, "sk-test");

        let err = router
            .dispatch("Nonexistent", &mut state, &StaticToolkit::new(), &mut seeded())
            .unwrap_err();

        assert_eq!(err, RouterError::UnknownPanel("Nonexistent".into()));
        assert_eq!(hits.load(Ordering::SeqCst), 0);
        assert_eq!(state.credential(), "sk-test");
    }

    #[test]
    fn script_generator_scenario() {
        let router = standard_router(StubGenerator::ok("Your script"));
        let mut state = SessionState::new();
        let toolkit = StaticToolkit::new();
        let mut rng = seeded();

        let first = router
            .dispatch(SCRIPT_GENERATOR, &mut state, &toolkit, &mut rng)
            .unwrap();
        assert!(first.is_redirect());
        assert_eq!(first.notice(), Some(CREDENTIAL_NOTICE));

        // Save the key through the Settings panel itself
        let save = StaticToolkit::new().with(
            SETTINGS,
            PanelInput::default()
                .with_text(API_KEY_FIELD, "sk-test")
                .submitted(true),
        );
        let saved = router.dispatch(SETTINGS, &mut state, &save, &mut rng).unwrap();
        assert!(saved.output().has_success(KEY_SAVED));
        assert!(state.has_credential());

        let second = router
            .dispatch(SCRIPT_GENERATOR, &mut state, &toolkit, &mut rng)
            .unwrap();
        assert!(!second.is_redirect());
        assert_eq!(second.notice(), None);
        assert_eq!(second.shown_label(), SCRIPT_GENERATOR);
    }

    #[test]
    fn generated_text_is_rendered_verbatim() {
        let router = standard_router(StubGenerator::ok("Hello"));
        let mut state = SessionState::new();
        state.set(API_CREDENTIAL, "sk-test");
        let toolkit = StaticToolkit::new().with(
            SCRIPT_GENERATOR,
            PanelInput::default().with_text("topic", "Rust").submitted(true),
        );

        let result = router
            .dispatch(SCRIPT_GENERATOR, &mut state, &toolkit, &mut seeded())
            .unwrap();
        assert_eq!(result.output().texts(), vec!["Hello"]);
        assert!(result.output().errors().is_empty());
    }

    #[test]
    fn generation_failure_is_inline() {
        let router = standard_router(StubGenerator::failing(ApiError::Timeout(60)));
        let mut state = SessionState::new();
        state.set(API_CREDENTIAL, "sk-test");
        let toolkit = StaticToolkit::new().with(
            SCRIPT_GENERATOR,
            PanelInput::default().with_text("topic", "Rust").submitted(true),
        );

        let result = router
            .dispatch(SCRIPT_GENERATOR, &mut state, &toolkit, &mut seeded())
            .unwrap();
        assert_eq!(
            result.output().errors(),
            vec!["Error generating script: request timed out after 60s"]
        );
        assert!(result.output().texts().is_empty());
    }

    #[test]
    fn analytics_renders_without_submit_or_api_call() {
        let router = standard_router(StubGenerator::ok("ok"));
        let mut state = SessionState::new();
        state.set(API_CREDENTIAL, "sk-test");

        let result = router
            .dispatch(CHANNEL_ANALYTICS, &mut state, &StaticToolkit::new(), &mut seeded())
            .unwrap();
        assert!(result.output().chart().is_some());
    }

    #[test]
    fn form_follows_the_gate() {
        let router = standard_router(StubGenerator::ok("x"));
        let mut state = SessionState::new();

        let locked = router.form_for(SCRIPT_GENERATOR, &state).unwrap();
        assert!(locked.get(API_KEY_FIELD).is_some());
        assert!(router.would_redirect(SCRIPT_GENERATOR, &state).unwrap());

        state.set(API_CREDENTIAL, "sk-test");
        let unlocked = router.form_for(SCRIPT_GENERATOR, &state).unwrap();
        assert!(unlocked.get("topic").is_some());
        assert!(!router.would_redirect(SCRIPT_GENERATOR, &state).unwrap());
    }
}

// Panel handlers
//
// One handler per navigation entry. A handler declares its form, then renders
// from the current widget values and session state:
//
//   FormSpec ──> Toolkit ──> PanelInput ──┐
//                                         ├──> PanelHandler::render ──> PanelOutput
//   SessionState, TextGenerator, RNG ─────┘
//
// Handlers never fail. Generation errors and bad input become inline blocks
// in the output, so a render cycle always produces something to show.

pub mod analytics;
pub mod engagement;
pub mod form;
pub mod ideas;
pub mod marketing;
pub mod mock;
pub mod output;
pub mod repurpose;
pub mod script;
pub mod seo;
pub mod settings;
pub mod thumbnail;
pub mod trends;

pub use form::{Field, FieldKind, FormSpec, PanelInput, Toolkit, Value};
pub use output::{Block, Metric, PanelOutput};

use crate::generation::TextGenerator;
use crate::router::PanelDescriptor;
use crate::session::SessionState;
use chrono::NaiveDate;
use rand::RngCore;

// ─────────────────────────────────────────────────────────────────────────────
// Navigation labels (menu order)
// ─────────────────────────────────────────────────────────────────────────────

pub const SCRIPT_GENERATOR: &str = "Script Generator";
pub const CONTENT_REPURPOSING: &str = "Content Repurposing";
pub const CHANNEL_ANALYTICS: &str = "Channel Analytics";
pub const MARKETING_PLANNER: &str = "Marketing Planner";
pub const IDEA_GENERATOR: &str = "Idea Generator";
pub const TREND_ANALYSIS: &str = "Trend Analysis";
pub const THUMBNAIL_DESIGNER: &str = "Thumbnail Designer";
pub const ENGAGEMENT_ANALYTICS: &str = "Engagement Analytics";
pub const SEO_OPTIMIZER: &str = "SEO Optimizer";
pub const SETTINGS: &str = "Settings";

/// Everything a handler may touch during one render
pub struct PanelContext<'a> {
    /// Session store; only Settings writes to it
    pub state: &'a mut SessionState,
    /// Widget values and the submit flag for this cycle
    pub input: PanelInput,
    pub generator: &'a dyn TextGenerator,
    /// Source for placeholder datasets
    pub rng: &'a mut dyn RngCore,
    /// Local calendar date of this render
    pub today: NaiveDate,
}

/// Renders one panel
pub trait PanelHandler: Send + Sync {
    /// Heading shown above the panel
    fn title(&self) -> &'static str;

    /// Widgets this panel reads
    fn form(&self) -> FormSpec;

    fn render(&self, cx: &mut PanelContext<'_>) -> PanelOutput;
}

/// The standard menu: nine gated content panels followed by Settings
pub fn catalog() -> Vec<PanelDescriptor> {
    vec![
        PanelDescriptor::gated(SCRIPT_GENERATOR, script::ScriptGenerator),
        PanelDescriptor::gated(CONTENT_REPURPOSING, repurpose::ContentRepurposing),
        PanelDescriptor::gated(CHANNEL_ANALYTICS, analytics::ChannelAnalytics),
        PanelDescriptor::gated(MARKETING_PLANNER, marketing::MarketingPlanner),
        PanelDescriptor::gated(IDEA_GENERATOR, ideas::IdeaGenerator),
        PanelDescriptor::gated(TREND_ANALYSIS, trends::TrendAnalysis),
        PanelDescriptor::gated(THUMBNAIL_DESIGNER, thumbnail::ThumbnailDesigner),
        PanelDescriptor::gated(ENGAGEMENT_ANALYTICS, engagement::EngagementAnalytics),
        PanelDescriptor::gated(SEO_OPTIMIZER, seo::SeoOptimizer),
        PanelDescriptor::open(SETTINGS, settings::Settings),
    ]
}

#[cfg(test)]
pub mod testing {
    //! Fixtures shared by handler and router tests

    use super::*;
    use crate::generation::testing::StubGenerator;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashMap;

    /// Toolkit answering from a fixed table of inputs
    #[derive(Default)]
    pub struct StaticToolkit {
        inputs: HashMap<String, PanelInput>,
    }

    impl StaticToolkit {
        pub fn new() -> Self {
            Self::default()
        }

        /// Fixed input for `label`; unlisted panels get their form defaults
        pub fn with(mut self, label: &str, input: PanelInput) -> Self {
            self.inputs.insert(label.to_string(), input);
            self
        }
    }

    impl Toolkit for StaticToolkit {
        fn input(&self, label: &str, form: &FormSpec) -> PanelInput {
            self.inputs
                .get(label)
                .cloned()
                .unwrap_or_else(|| PanelInput::defaults(form))
        }
    }

    pub fn seeded() -> StdRng {
        StdRng::seed_from_u64(42)
    }

    pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    /// Render `handler` once with `input` layered over its form defaults
    pub fn render_with(
        handler: &dyn PanelHandler,
        state: &mut SessionState,
        generator: &StubGenerator,
        input: impl FnOnce(PanelInput) -> PanelInput,
    ) -> PanelOutput {
        let mut rng = seeded();
        let mut cx = PanelContext {
            state,
            input: input(PanelInput::defaults(&handler.form())),
            generator,
            rng: &mut rng,
            today: date(2024, 3, 1),
        };
        handler.render(&mut cx)
    }
}

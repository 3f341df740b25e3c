//! AI script generator

use super::{Field, FieldKind, FormSpec, PanelContext, PanelHandler, PanelOutput};
use crate::generation::GenerationRequest;

pub const STYLES: &[&str] = &["Tutorial", "Vlog", "Review", "Educational", "Entertainment"];
pub const AUDIENCES: &[&str] = &["Beginners", "Intermediate", "Advanced", "General"];

const ROLE: &str = "You are a professional content creator and scriptwriter.";
const MAX_TOKENS: u32 = 1000;

pub struct ScriptGenerator;

/// User prompt for one script
pub fn script_prompt(topic: &str, style: &str, duration: i64, audience: &str) -> String {
    format!(
        "Create a video script for a {duration}-minute {style} video about {topic}. \n\
         Target audience: {audience}.\n\
         Include sections for:\n\
         - Hook\n\
         - Introduction\n\
         - Main Points (3-5 key points)\n\
         - Call to Action\n\
         - Outro\n\
         Format each section clearly."
    )
}

impl PanelHandler for ScriptGenerator {
    fn title(&self) -> &'static str {
        "AI Script Generator"
    }

    fn form(&self) -> FormSpec {
        FormSpec::new()
            .field(Field::new("topic", "Video Topic", FieldKind::Text))
            .field(Field::new(
                "style",
                "Content Style",
                FieldKind::Select {
                    options: STYLES,
                    default: 0,
                },
            ))
            .field(Field::new(
                "duration",
                "Target Duration (minutes)",
                FieldKind::Slider {
                    min: 3,
                    max: 30,
                    default: 10,
                },
            ))
            .field(Field::new(
                "audience",
                "Target Audience",
                FieldKind::Select {
                    options: AUDIENCES,
                    default: 0,
                },
            ))
            .submit("Generate Script")
    }

    fn render(&self, cx: &mut PanelContext<'_>) -> PanelOutput {
        let mut out = PanelOutput::new();
        out.header(self.title());

        if cx.input.was_submitted() {
            let prompt = script_prompt(
                cx.input.text("topic"),
                cx.input.text("style"),
                cx.input.number("duration"),
                cx.input.text("audience"),
            );
            let request = GenerationRequest::new(ROLE, prompt)
                .with_temperature(0.7)
                .with_max_tokens(MAX_TOKENS);

            match cx.generator.generate(&request, cx.state.credential()) {
                Ok(script) => {
                    out.subheader("Generated Script");
                    out.text(script);
                }
                Err(e) => {
                    tracing::warn!(error = %e, "Script generation failed");
                    out.error(format!("Error generating script: {}", e));
                }
            }
        }

        out.aside(
            "Script Tips",
            [
                "Keep hooks under 15 seconds",
                "Include timestamps for editing",
                "Add b-roll suggestions",
                "Mark emphasis points",
            ],
        );
        out
    }
}

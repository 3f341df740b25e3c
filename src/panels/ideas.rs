//! Content idea generator

use super::{mock, Field, FieldKind, FormSpec, PanelContext, PanelHandler, PanelOutput};

pub const CONTENT_TYPES: &[&str] = &["Tutorial", "Review", "Behind the Scenes", "Interview", "Challenge"];

pub struct IdeaGenerator;

impl PanelHandler for IdeaGenerator {
    fn title(&self) -> &'static str {
        "Content Idea Generator"
    }

    fn form(&self) -> FormSpec {
        FormSpec::new()
            .field(Field::new("niche", "Your Content Niche", FieldKind::Text))
            .field(Field::new(
                "types",
                "Content Types",
                FieldKind::MultiSelect {
                    options: CONTENT_TYPES,
                },
            ))
            .submit("Generate Ideas")
    }

    fn render(&self, cx: &mut PanelContext<'_>) -> PanelOutput {
        let mut out = PanelOutput::new();
        out.header(self.title());

        if !cx.input.was_submitted() {
            return out;
        }

        let niche = cx.input.text("niche").trim().to_string();
        let types = cx.input.many("types").to_vec();
        if niche.is_empty() || types.is_empty() {
            out.warning("Enter a niche and pick at least one content type.");
            return out;
        }

        out.subheader("Content Ideas");
        out.list(mock::content_ideas(cx.rng, &niche, &types));
        out
    }
}

//! SEO optimizer (fixed recommendations)

use super::{Field, FieldKind, FormSpec, PanelContext, PanelHandler, PanelOutput};

pub struct SeoOptimizer;

/// Recommendation lines shown for any title/description pair
pub fn recommendations() -> Vec<String> {
    let tags = ["tag1", "tag2", "tag3"];
    vec![
        "Title Score: 8/10".to_string(),
        "Description Score: 7/10".to_string(),
        format!("Suggested Tags: {}", tags.join(", ")),
        "Keyword Density: 2.3%".to_string(),
    ]
}

impl PanelHandler for SeoOptimizer {
    fn title(&self) -> &'static str {
        "SEO Optimizer"
    }

    fn form(&self) -> FormSpec {
        FormSpec::new()
            .field(Field::new("title", "Video Title", FieldKind::Text))
            .field(Field::new(
                "description",
                "Video Description",
                FieldKind::TextArea,
            ))
            .submit("Optimize SEO")
    }

    fn render(&self, cx: &mut PanelContext<'_>) -> PanelOutput {
        let mut out = PanelOutput::new();
        out.header(self.title());

        if !cx.input.was_submitted() {
            return out;
        }

        if cx.input.text("title").trim().is_empty() || cx.input.text("description").trim().is_empty()
        {
            out.warning("Both a title and a description are needed.");
            return out;
        }

        out.subheader("SEO Recommendations");
        out.list(recommendations());
        out
    }
}

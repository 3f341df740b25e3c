//! Settings panel: the only writer of the session credential

use super::{Field, FieldKind, FormSpec, PanelContext, PanelHandler, PanelOutput};
use crate::session::{fingerprint, API_CREDENTIAL};

pub const API_KEY_FIELD: &str = "api_key";
pub const KEY_SAVED: &str = "API key set successfully!";
pub const KEY_CLEARED: &str = "API key cleared. Content panels are locked until a new key is set.";

pub struct Settings;

impl PanelHandler for Settings {
    fn title(&self) -> &'static str {
        "Settings"
    }

    fn form(&self) -> FormSpec {
        FormSpec::new()
            .field(Field::new(
                API_KEY_FIELD,
                "Enter OpenAI API Key",
                FieldKind::Password,
            ))
            .submit("Save")
    }

    fn render(&self, cx: &mut PanelContext<'_>) -> PanelOutput {
        let mut out = PanelOutput::new();
        out.header(self.title());

        if cx.input.was_submitted() {
            let key = cx.input.text(API_KEY_FIELD).trim().to_string();
            let cleared = key.is_empty();
            if cleared {
                tracing::info!("API credential cleared");
            } else {
                tracing::info!(fingerprint = %fingerprint(&key), "API credential saved");
            }
            cx.state.set(API_CREDENTIAL, key);

            if cleared {
                out.info(KEY_CLEARED);
            } else {
                out.success(KEY_SAVED);
            }
        } else if let Some(fp) = cx.state.credential_fingerprint() {
            out.info(format!("An API key is set for this session (fingerprint {}).", fp));
        } else {
            out.info("The key is kept in memory for this session only and never written to disk.");
        }

        out.aside(
            "Backend",
            [
                format!("Generator: {}", cx.generator.name()),
                format!("Model: {}", cx.generator.model()),
            ],
        );
        out
    }
}

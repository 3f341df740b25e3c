//! Thumbnail designer

use super::{Block, Field, FieldKind, FormSpec, PanelContext, PanelHandler, PanelOutput};
use regex::Regex;
use std::sync::OnceLock;

pub const STYLES: &[&str] = &["Minimal", "Bold", "Professional", "Dramatic"];
pub const DEFAULT_COLOR: &str = "#FF0000";
pub const PLACEHOLDER_IMAGE: &str = "https://via.placeholder.com/1280x720";

fn hex_color() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^#[0-9A-Fa-f]{6}$").expect("valid color regex"))
}

/// Whether `value` is a `#RRGGBB` color
pub fn is_hex_color(value: &str) -> bool {
    hex_color().is_match(value)
}

pub struct ThumbnailDesigner;

impl PanelHandler for ThumbnailDesigner {
    fn title(&self) -> &'static str {
        "Thumbnail Designer"
    }

    fn form(&self) -> FormSpec {
        FormSpec::new()
            .field(Field::new("title", "Video Title", FieldKind::Text))
            .field(Field::new(
                "style",
                "Thumbnail Style",
                FieldKind::Select {
                    options: STYLES,
                    default: 0,
                },
            ))
            .field(Field::new(
                "color",
                "Primary Color",
                FieldKind::Color {
                    default: DEFAULT_COLOR,
                },
            ))
            .submit("Generate Thumbnail")
    }

    fn render(&self, cx: &mut PanelContext<'_>) -> PanelOutput {
        let mut out = PanelOutput::new();
        out.header(self.title());

        if cx.input.was_submitted() {
            let color = cx.input.text("color").trim().to_string();
            if is_hex_color(&color) {
                let title = cx.input.text("title").trim();
                let caption = if title.is_empty() {
                    "Generated Thumbnail".to_string()
                } else {
                    format!("Generated Thumbnail: {} ({})", title, cx.input.text("style"))
                };
                out.push(Block::Image {
                    reference: PLACEHOLDER_IMAGE.to_string(),
                    caption,
                    tint: Some(color.to_uppercase()),
                });
            } else {
                out.error(format!("'{}' is not a color; use #RRGGBB", color));
            }
        }

        out.aside(
            "Thumbnail Tips",
            [
                "Use contrasting colors",
                "Include clear text",
                "Show emotion",
                "Use rule of thirds",
            ],
        );
        out
    }
}

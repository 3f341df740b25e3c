//! Content repurposing: adapt an existing script for social platforms

use super::{Field, FieldKind, FormSpec, PanelContext, PanelHandler, PanelOutput};
use crate::generation::GenerationRequest;
use std::path::Path;
use thiserror::Error;

pub const PLATFORMS: &[&str] = &["Instagram", "TikTok", "Twitter", "LinkedIn", "YouTube Shorts"];

const ROLE: &str = "You are a social media content adaptation expert.";

/// Why a source file could not be used
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("no file selected")]
    Missing,

    #[error(".{0} files are not supported; export the script as .txt or .md")]
    Unsupported(String),

    #[error("{0}")]
    Io(#[from] std::io::Error),
}

/// Read a plain-text script or transcript
pub fn load_source(path: &Path) -> Result<String, SourceError> {
    if path.as_os_str().is_empty() {
        return Err(SourceError::Missing);
    }

    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_lowercase)
        .unwrap_or_default();
    if !matches!(ext.as_str(), "txt" | "md") {
        return Err(SourceError::Unsupported(ext));
    }

    Ok(std::fs::read_to_string(path)?)
}

pub fn repurpose_prompt(platforms: &[String], content: &str) -> String {
    format!(
        "Repurpose this content for {}:\n\n{}",
        platforms.join(", "),
        content
    )
}

pub struct ContentRepurposing;

impl PanelHandler for ContentRepurposing {
    fn title(&self) -> &'static str {
        "Content Repurposing Tool"
    }

    fn form(&self) -> FormSpec {
        FormSpec::new()
            .field(Field::new(
                "source",
                "Video Script or Transcript (.txt, .md)",
                FieldKind::Path,
            ))
            .field(Field::new(
                "platforms",
                "Select Platforms",
                FieldKind::MultiSelect { options: PLATFORMS },
            ))
            .submit("Generate Content")
    }

    fn render(&self, cx: &mut PanelContext<'_>) -> PanelOutput {
        let mut out = PanelOutput::new();
        out.header(self.title());

        if !cx.input.was_submitted() {
            return out;
        }

        let path = cx.input.text("source").trim().to_string();
        let content = match load_source(Path::new(&path)) {
            Ok(content) => content,
            Err(SourceError::Missing) => {
                out.warning("Choose a script or transcript file first.");
                return out;
            }
            Err(e) => {
                tracing::warn!(path = %path, error = %e, "Could not load repurposing source");
                out.error(format!("Error reading file: {}", e));
                return out;
            }
        };

        if content.trim().is_empty() {
            out.warning("The selected file is empty.");
            return out;
        }

        let platforms = cx.input.many("platforms").to_vec();
        if platforms.is_empty() {
            out.warning("Select at least one platform.");
            return out;
        }

        let request =
            GenerationRequest::new(ROLE, repurpose_prompt(&platforms, &content)).with_temperature(0.7);

        match cx.generator.generate(&request, cx.state.credential()) {
            Ok(text) => {
                out.subheader("Repurposed Content");
                out.text(text);
            }
            Err(e) => {
                tracing::warn!(error = %e, "Repurposing failed");
                out.error(format!("Error generating content: {}", e));
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generation::testing::StubGenerator;
    use crate::generation::ApiError;
    use crate::panels::testing::render_with;
    use crate::session::{SessionState, API_CREDENTIAL};
    use std::io::Write;

    fn keyed() -> SessionState {
        let mut state = SessionState::new();
        state.set(API_CREDENTIAL, "sk-test");
        state
    }

    fn script_file(ext: &str, body: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new()
            .suffix(&format!(".{}", ext))
            .tempfile()
            .unwrap();
        file.write_all(body.as_bytes()).unwrap();
        file
    }

    #[test]
    fn prompt_lists_platforms_in_order() {
        let platforms = vec!["TikTok".to_string(), "LinkedIn".to_string()];
        assert_eq!(
            repurpose_prompt(&platforms, "body"),
            "Repurpose this content for TikTok, LinkedIn:\n\nbody"
        );
    }

    #[test]
    fn requires_platforms_before_calling() {
        let file = script_file("txt", "my script");
        let generator = StubGenerator::ok("x");
        let out = render_with(&ContentRepurposing, &mut keyed(), &generator, |i| {
            i.with_text("source", file.path().to_str().unwrap())
                .submitted(true)
        });
        assert_eq!(generator.calls(), 0);
        assert!(out.errors().is_empty());
    }

    #[test]
    fn sends_file_content_and_renders_reply() {
        let file = script_file("md", "# Episode 1\nHello");
        let generator = StubGenerator::ok("IG caption #rust");
        let out = render_with(&ContentRepurposing, &mut keyed(), &generator, |i| {
            i.with_text("source", file.path().to_str().unwrap())
                .with_many("platforms", &["Instagram"])
                .submitted(true)
        });

        let request = generator.last_request().unwrap();
        assert_eq!(request.role_context(), Some(ROLE));
        assert_eq!(request.max_tokens, None);
        assert_eq!(
            request.prompt(),
            "Repurpose this content for Instagram:\n\n# Episode 1\nHello"
        );
        assert_eq!(out.texts(), vec!["IG caption #rust"]);
    }

    #[test]
    fn docx_is_rejected_inline() {
        let file = script_file("docx", "binary-ish");
        let generator = StubGenerator::ok("x");
        let out = render_with(&ContentRepurposing, &mut keyed(), &generator, |i| {
            i.with_text("source", file.path().to_str().unwrap())
                .with_many("platforms", &["Twitter"])
                .submitted(true)
        });
        assert_eq!(generator.calls(), 0);
        assert_eq!(out.errors().len(), 1);
        assert!(out.errors()[0].contains(".docx files are not supported"));
    }

    #[test]
    fn api_failure_is_inline() {
        let file = script_file("txt", "content");
        let generator = StubGenerator::failing(ApiError::RateLimited);
        let out = render_with(&ContentRepurposing, &mut keyed(), &generator, |i| {
            i.with_text("source", file.path().to_str().unwrap())
                .with_many("platforms", &["TikTok"])
                .submitted(true)
        });
        assert_eq!(
            out.errors(),
            vec!["Error generating content: rate limited by provider"]
        );
    }

    #[test]
    fn missing_file_reports_io_error() {
        let err = load_source(Path::new("/definitely/not/here.txt")).unwrap_err();
        assert!(matches!(err, SourceError::Io(_)));
    }
}

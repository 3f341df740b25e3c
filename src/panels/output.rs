//! What a panel hands back to the view layer
//!
//! Output is a flat list of [`Block`]s rendered top to bottom. Blocks marked
//! as asides go to the side column, like the tips boxes next to a form.

use crate::chart::{ChartSpec, Table};

/// One headline number
#[derive(Debug, Clone, PartialEq)]
pub struct Metric {
    pub label: String,
    pub value: String,
}

/// A renderable unit of panel output
#[derive(Debug, Clone, PartialEq)]
pub enum Block {
    Header(String),
    Subheader(String),
    /// Verbatim text (generated scripts, repurposed posts)
    Text(String),
    /// Bullet or numbered lines
    List(Vec<String>),
    Info(String),
    Warning(String),
    Error(String),
    Success(String),
    /// Label/value pairs shown as a row of cards
    Metrics(Vec<Metric>),
    Table(Table),
    Chart(ChartSpec),
    /// Image placeholder: a reference plus a caption, optionally tinted
    Image {
        reference: String,
        caption: String,
        tint: Option<String>,
    },
    /// Side-column box: title plus lines
    Aside { title: String, lines: Vec<String> },
}

/// Ordered blocks for one render
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PanelOutput {
    blocks: Vec<Block>,
}

impl PanelOutput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, block: Block) -> &mut Self {
        self.blocks.push(block);
        self
    }

    pub fn header(&mut self, text: impl Into<String>) -> &mut Self {
        self.push(Block::Header(text.into()))
    }

    pub fn subheader(&mut self, text: impl Into<String>) -> &mut Self {
        self.push(Block::Subheader(text.into()))
    }

    pub fn text(&mut self, text: impl Into<String>) -> &mut Self {
        self.push(Block::Text(text.into()))
    }

    pub fn info(&mut self, text: impl Into<String>) -> &mut Self {
        self.push(Block::Info(text.into()))
    }

    pub fn warning(&mut self, text: impl Into<String>) -> &mut Self {
        self.push(Block::Warning(text.into()))
    }

    pub fn error(&mut self, text: impl Into<String>) -> &mut Self {
        self.push(Block::Error(text.into()))
    }

    pub fn success(&mut self, text: impl Into<String>) -> &mut Self {
        self.push(Block::Success(text.into()))
    }

    pub fn list<S: Into<String>>(&mut self, lines: impl IntoIterator<Item = S>) -> &mut Self {
        self.push(Block::List(lines.into_iter().map(Into::into).collect()))
    }

    pub fn aside<S: Into<String>>(
        &mut self,
        title: impl Into<String>,
        lines: impl IntoIterator<Item = S>,
    ) -> &mut Self {
        self.push(Block::Aside {
            title: title.into(),
            lines: lines.into_iter().map(Into::into).collect(),
        })
    }

    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    /// Blocks for the main column
    pub fn main_blocks(&self) -> impl Iterator<Item = &Block> {
        self.blocks
            .iter()
            .filter(|b| !matches!(b, Block::Aside { .. }))
    }

    /// Blocks for the side column
    pub fn aside_blocks(&self) -> impl Iterator<Item = &Block> {
        self.blocks
            .iter()
            .filter(|b| matches!(b, Block::Aside { .. }))
    }

    /// The header text, if any
    pub fn title(&self) -> Option<&str> {
        self.blocks.iter().find_map(|b| match b {
            Block::Header(s) => Some(s.as_str()),
            _ => None,
        })
    }

    /// Every inline error message, in order
    pub fn errors(&self) -> Vec<&str> {
        self.blocks
            .iter()
            .filter_map(|b| match b {
                Block::Error(s) => Some(s.as_str()),
                _ => None,
            })
            .collect()
    }

    /// Every verbatim text block, in order
    pub fn texts(&self) -> Vec<&str> {
        self.blocks
            .iter()
            .filter_map(|b| match b {
                Block::Text(s) => Some(s.as_str()),
                _ => None,
            })
            .collect()
    }

    pub fn has_success(&self, message: &str) -> bool {
        self.blocks
            .iter()
            .any(|b| matches!(b, Block::Success(s) if s == message))
    }

    pub fn table(&self) -> Option<&Table> {
        self.blocks.iter().find_map(|b| match b {
            Block::Table(t) => Some(t),
            _ => None,
        })
    }

    pub fn chart(&self) -> Option<&ChartSpec> {
        self.blocks.iter().find_map(|b| match b {
            Block::Chart(c) => Some(c),
            _ => None,
        })
    }

    pub fn metrics(&self) -> Option<&[Metric]> {
        self.blocks.iter().find_map(|b| match b {
            Block::Metrics(m) => Some(m.as_slice()),
            _ => None,
        })
    }

    /// Plain-text rendering of the main column, for clipboard copy.
    ///
    /// Generated text wins when present; otherwise every block is flattened.
    pub fn copy_text(&self) -> Option<String> {
        let texts = self.texts();
        if !texts.is_empty() {
            return Some(texts.join("\n\n"));
        }

        let parts: Vec<String> = self
            .main_blocks()
            .filter_map(|b| match b {
                Block::Header(s)
                | Block::Subheader(s)
                | Block::Info(s)
                | Block::Warning(s)
                | Block::Error(s)
                | Block::Success(s) => Some(s.clone()),
                Block::Text(s) => Some(s.clone()),
                Block::List(lines) => Some(lines.join("\n")),
                Block::Metrics(metrics) => Some(
                    metrics
                        .iter()
                        .map(|m| format!("{}: {}", m.label, m.value))
                        .collect::<Vec<_>>()
                        .join("\n"),
                ),
                Block::Table(table) => Some(table.to_tsv()),
                Block::Chart(chart) => Some(chart.table.to_tsv()),
                Block::Image {
                    reference, caption, ..
                } => Some(format!("{} ({})", caption, reference)),
                Block::Aside { .. } => None,
            })
            .collect();

        if parts.is_empty() {
            None
        } else {
            Some(parts.join("\n\n"))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn asides_are_split_from_main_column() {
        let mut out = PanelOutput::new();
        out.header("Title")
            .text("body")
            .aside("Tips", ["one", "two"]);
        assert_eq!(out.main_blocks().count(), 2);
        assert_eq!(out.aside_blocks().count(), 1);
        assert_eq!(out.title(), Some("Title"));
    }

    #[test]
    fn copy_prefers_generated_text() {
        let mut out = PanelOutput::new();
        out.header("AI Script Generator").text("Hello");
        assert_eq!(out.copy_text().as_deref(), Some("Hello"));
    }

    #[test]
    fn copy_flattens_structured_output() {
        let mut out = PanelOutput::new();
        out.header("SEO Optimizer")
            .list(["Title Score: 8/10"])
            .aside("ignored", ["x"]);
        assert_eq!(
            out.copy_text().as_deref(),
            Some("SEO Optimizer\n\nTitle Score: 8/10")
        );
    }

    #[test]
    fn empty_output_has_nothing_to_copy() {
        assert_eq!(PanelOutput::new().copy_text(), None);
    }
}

//! Keyword trend analysis (placeholder data)

use super::{mock, Block, Field, FieldKind, FormSpec, PanelContext, PanelHandler, PanelOutput};
use crate::chart::{render_chart, AxisMapping, ChartKind};

pub const TIMEFRAMES: &[&str] = &["Last 7 days", "Last 30 days", "Last 90 days"];

pub struct TrendAnalysis;

impl PanelHandler for TrendAnalysis {
    fn title(&self) -> &'static str {
        "Trend Analysis"
    }

    fn form(&self) -> FormSpec {
        FormSpec::new()
            .field(Field::new("keyword", "Track Keyword", FieldKind::Text))
            .field(Field::new(
                "timeframe",
                "Timeframe",
                FieldKind::Select {
                    options: TIMEFRAMES,
                    default: 0,
                },
            ))
            .submit("Analyze Trends")
    }

    fn render(&self, cx: &mut PanelContext<'_>) -> PanelOutput {
        let mut out = PanelOutput::new();
        out.header(self.title());

        if cx.input.was_submitted() {
            let keyword = cx.input.text("keyword").trim().to_string();
            if keyword.is_empty() {
                out.warning("Enter a keyword to track.");
            } else {
                // The placeholder series is always thirty days, whatever the timeframe
                let data = mock::keyword_trend(cx.rng);
                match render_chart(
                    data,
                    ChartKind::Line,
                    AxisMapping::new("Date", &["Search Volume", "Social Mentions"]),
                ) {
                    Ok(chart) => {
                        out.subheader(format!(
                            "\"{}\" ({})",
                            keyword,
                            cx.input.text("timeframe")
                        ));
                        out.push(Block::Chart(chart));
                    }
                    Err(e) => {
                        tracing::error!(error = %e, "Trend chart rejected");
                        out.error(format!("Could not draw chart: {}", e));
                    }
                }
            }
        }

        out.aside(
            "Related Topics",
            ["1. Topic One", "2. Topic Two", "3. Topic Three"],
        );
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generation::testing::StubGenerator;
    use crate::panels::testing::render_with;
    use crate::session::SessionState;

    #[test]
    fn keyword_is_required() {
        let out = render_with(
            &TrendAnalysis,
            &mut SessionState::new(),
            &StubGenerator::ok(""),
            |i| i.with_text("keyword", "   ").submitted(true),
        );
        assert!(out.chart().is_none());
    }

    #[test]
    fn charts_two_series() {
        let out = render_with(
            &TrendAnalysis,
            &mut SessionState::new(),
            &StubGenerator::ok(""),
            |i| i.with_text("keyword", "rust").submitted(true),
        );
        let chart = out.chart().unwrap();
        assert_eq!(chart.table.len(), 30);
        assert_eq!(chart.series().len(), 2);
    }

    #[test]
    fn related_topics_always_shown() {
        let out = render_with(
            &TrendAnalysis,
            &mut SessionState::new(),
            &StubGenerator::ok(""),
            |i| i,
        );
        assert_eq!(out.aside_blocks().count(), 1);
        assert!(out.chart().is_none());
    }
}

//! Engagement analytics (fixed snapshot)

use super::{mock, Block, FormSpec, PanelContext, PanelHandler, PanelOutput};
use crate::chart::{render_chart, AxisMapping, ChartKind};

pub struct EngagementAnalytics;

impl PanelHandler for EngagementAnalytics {
    fn title(&self) -> &'static str {
        "Engagement Analytics"
    }

    fn form(&self) -> FormSpec {
        FormSpec::new()
    }

    fn render(&self, _cx: &mut PanelContext<'_>) -> PanelOutput {
        let mut out = PanelOutput::new();
        out.header(self.title());

        let data = mock::engagement();
        out.push(Block::Table(data.clone()));

        match render_chart(data, ChartKind::Bar, AxisMapping::new("Metric", &["Count"])) {
            Ok(chart) => {
                out.push(Block::Chart(chart));
            }
            Err(e) => {
                tracing::error!(error = %e, "Engagement chart rejected");
                out.error(format!("Could not draw chart: {}", e));
            }
        }
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
    fn table_and_bar_chart() {
        let out = render_with(
            &EngagementAnalytics,
            &mut SessionState::new(),
            &StubGenerator::ok(""),
            |i| i,
        );
        assert_eq!(out.table().unwrap().len(), 4);
        let chart = out.chart().unwrap();
        assert_eq!(chart.kind, ChartKind::Bar);
        assert_eq!(chart.x_labels(), vec!["Comments", "Likes", "Shares", "Saves"]);
    }
}

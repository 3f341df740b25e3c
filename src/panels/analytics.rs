//! Channel analytics dashboard (placeholder data)

use super::{mock, Block, FormSpec, Metric, PanelContext, PanelHandler, PanelOutput};
use crate::chart::{render_chart, AxisMapping, ChartKind};
use crate::util::{format_money, format_number};

pub struct ChannelAnalytics;

impl PanelHandler for ChannelAnalytics {
    fn title(&self) -> &'static str {
        "Channel Analytics Dashboard"
    }

    fn form(&self) -> FormSpec {
        FormSpec::new()
    }

    fn render(&self, cx: &mut PanelContext<'_>) -> PanelOutput {
        let mut out = PanelOutput::new();
        out.header(self.title());

        let data = mock::channel_analytics(cx.rng);

        let last_subscribers = data
            .numeric_column("Subscribers")
            .and_then(|subs| subs.last().copied())
            .unwrap_or(0.0);

        out.push(Block::Metrics(vec![
            Metric {
                label: "Total Views".into(),
                value: format_number(data.sum("Views") as i64),
            },
            Metric {
                label: "Total Subscribers".into(),
                value: format_number(last_subscribers as i64),
            },
            Metric {
                label: "Watch Time".into(),
                value: format!("{}h", format_number(data.sum("Watch Time (hours)") as i64)),
            },
            Metric {
                label: "Revenue".into(),
                value: format_money(data.sum("Revenue ($)")),
            },
        ]));

        match render_chart(
            data,
            ChartKind::Line,
            AxisMapping::new("Date", &["Views", "Subscribers"]),
        ) {
            Ok(chart) => {
                out.push(Block::Chart(chart));
            }
            Err(e) => {
                tracing::error!(error = %e, "Analytics chart rejected");
                out.error(format!("Could not draw chart: {}", e));
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::Table;
    use crate::generation::testing::StubGenerator;
    use crate::panels::testing::render_with;
    use crate::session::SessionState;

    #[test]
    fn renders_metrics_and_line_chart_without_submit() {
        let generator = StubGenerator::ok("");
        let out = render_with(&ChannelAnalytics, &mut SessionState::new(), &generator, |i| i);

        let labels: Vec<&str> = out
            .metrics()
            .unwrap()
            .iter()
            .map(|m| m.label.as_str())
            .collect();
        assert_eq!(
            labels,
            vec!["Total Views", "Total Subscribers", "Watch Time", "Revenue"]
        );

        let chart = out.chart().unwrap();
        assert_eq!(chart.kind, ChartKind::Line);
        assert_eq!(chart.axes.y, vec!["Views", "Subscribers"]);
        assert_eq!(generator.calls(), 0);
    }

    #[test]
    fn metrics_agree_with_chart_data() {
        let out = render_with(
            &ChannelAnalytics,
            &mut SessionState::new(),
            &StubGenerator::ok(""),
            |i| i,
        );
        let table: &Table = &out.chart().unwrap().table;
        let metrics = out.metrics().unwrap();

        assert_eq!(metrics[0].value, format_number(table.sum("Views") as i64));
        let last = table.numeric_column("Subscribers").unwrap();
        assert_eq!(
            metrics[1].value,
            format_number(*last.last().unwrap() as i64)
        );
        assert!(metrics[2].value.ends_with('h'));
        assert!(metrics[3].value.starts_with('$'));
    }
}

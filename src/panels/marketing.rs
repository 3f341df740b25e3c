//! Marketing campaign planner

use super::{mock, Block, Field, FieldKind, FormSpec, PanelContext, PanelHandler, PanelOutput};
use crate::util::format_money;
use chrono::{Days, NaiveDate};

pub const CHANNELS: &[&str] = &["YouTube", "Instagram", "TikTok", "Twitter", "Facebook", "Email"];

/// Longest campaign the planner lays out (ten years)
pub const MAX_DURATION_DAYS: i64 = 3650;

pub struct MarketingPlanner;

/// Parse the start date; an empty field means `today`
fn start_date(raw: &str, today: NaiveDate) -> Result<NaiveDate, chrono::ParseError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(today);
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
}

/// Last day of a `days`-long campaign, if the calendar reaches it
fn campaign_end(start: NaiveDate, days: i64) -> Option<NaiveDate> {
    start.checked_add_days(Days::new(days.saturating_sub(1).max(0) as u64))
}

impl MarketingPlanner {
    /// Requested duration, clamped to what the planner lays out
    fn duration(&self, cx: &PanelContext<'_>) -> i64 {
        cx.input.number("duration").clamp(1, MAX_DURATION_DAYS)
    }
}

impl PanelHandler for MarketingPlanner {
    fn title(&self) -> &'static str {
        "Marketing Campaign Planner"
    }

    fn form(&self) -> FormSpec {
        FormSpec::new()
            .field(Field::new("name", "Campaign Name", FieldKind::Text))
            .field(Field::new("start", "Start Date", FieldKind::Date))
            .field(Field::new(
                "duration",
                "Duration (days)",
                FieldKind::Number {
                    min: 1,
                    max: MAX_DURATION_DAYS,
                    default: 30,
                },
            ))
            .field(Field::new(
                "channels",
                "Marketing Channels",
                FieldKind::MultiSelect { options: CHANNELS },
            ))
            .field(
                Field::new(
                    "daily_budget",
                    "Daily Budget ($)",
                    FieldKind::Slider {
                        min: 0,
                        max: 1000,
                        default: 50,
                    },
                )
                .aside(),
            )
            .field(
                Field::new(
                    "total_budget",
                    "Total Budget ($)",
                    FieldKind::Slider {
                        min: 0,
                        max: 10_000,
                        default: 1000,
                    },
                )
                .aside(),
            )
            .submit("Generate Marketing Plan")
    }

    fn render(&self, cx: &mut PanelContext<'_>) -> PanelOutput {
        let mut out = PanelOutput::new();
        out.header(self.title());

        if cx.input.was_submitted() {
            match start_date(cx.input.text("start"), cx.today) {
                Ok(start) if campaign_end(start, self.duration(cx)).is_none() => {
                    out.error(format!(
                        "A {}-day campaign starting {} runs past the last supported date",
                        self.duration(cx),
                        start
                    ));
                }
                Ok(start) => {
                    let days = self.duration(cx);
                    let channels = cx.input.many("channels").to_vec();
                    let timeline = mock::marketing_timeline(cx.rng, start, days, &channels);

                    let name = cx.input.text("name").trim();
                    if name.is_empty() {
                        out.subheader("Marketing Timeline");
                    } else {
                        out.subheader(format!("Marketing Timeline: {}", name));
                    }
                    if channels.is_empty() {
                        out.info("No marketing channels selected.");
                    }
                    out.push(Block::Table(timeline));
                }
                Err(e) => {
                    out.error(format!("Start date must be YYYY-MM-DD ({})", e));
                }
            }
        }

        out.aside(
            "Campaign Budget",
            [
                format!(
                    "Daily Budget: {}",
                    format_money(cx.input.number("daily_budget") as f64)
                ),
                format!(
                    "Total Budget: {}",
                    format_money(cx.input.number("total_budget") as f64)
                ),
            ],
        );
        out
    }
}

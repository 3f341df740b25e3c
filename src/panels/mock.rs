// Placeholder datasets for the analytics-style panels
//
// Shapes and ranges only: these stand in for real channel data and are drawn
// from whatever RNG the session was started with (seeded with --seed, fresh
// entropy otherwise).

use crate::chart::{Cell, Table};
use chrono::{Days, NaiveDate};
use rand::seq::SliceRandom;
use rand::{Rng, RngCore};

pub const TASK_TYPES: &[&str] = &["Post", "Story", "Live", "Community"];

fn jan_first_2024() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, 1).unwrap_or_default()
}

/// Up to `count` consecutive days from `start`, ending early at the last
/// representable date
fn days(start: NaiveDate, count: i64) -> impl Iterator<Item = NaiveDate> {
    (0..count.max(0) as u64).map_while(move |i| start.checked_add_days(Days::new(i)))
}

/// Daily channel metrics for calendar year 2024
///
/// Columns: Date, Views, Subscribers (cumulative), Watch Time (hours), Revenue ($)
pub fn channel_analytics(rng: &mut dyn RngCore) -> Table {
    let start = jan_first_2024();
    let count = NaiveDate::from_ymd_opt(2024, 12, 31)
        .map(|end| (end - start).num_days() + 1)
        .unwrap_or(366);

    let mut table = Table::new([
        "Date",
        "Views",
        "Subscribers",
        "Watch Time (hours)",
        "Revenue ($)",
    ]);
    let mut subscribers: i64 = 0;
    for date in days(start, count) {
        subscribers += rng.gen_range(10..50);
        table.push_row(vec![
            date.into(),
            rng.gen_range(1000i64..5000).into(),
            subscribers.into(),
            rng.gen_range(100i64..500).into(),
            rng.gen_range(50.0f64..200.0).into(),
        ]);
    }
    table
}

/// Posting schedule: each channel gets a task on a given day with 30% probability
pub fn marketing_timeline(
    rng: &mut dyn RngCore,
    start: NaiveDate,
    duration_days: i64,
    channels: &[String],
) -> Table {
    let mut table = Table::new(["Date", "Platform", "Task", "Type"]);
    for date in days(start, duration_days.max(0)) {
        for channel in channels {
            if rng.gen_bool(0.3) {
                let kind = TASK_TYPES.choose(&mut *rng).copied().unwrap_or("Post");
                table.push_row(vec![
                    date.into(),
                    channel.as_str().into(),
                    format!("Post content on {}", channel).into(),
                    kind.into(),
                ]);
            }
        }
    }
    table
}

/// Ten idea stubs, each tagged with a randomly chosen content type
pub fn content_ideas(rng: &mut dyn RngCore, niche: &str, types: &[String]) -> Vec<String> {
    (0..10)
        .filter_map(|_| types.choose(&mut *rng))
        .map(|kind| format!("- {}: {}-related content idea here", kind, niche))
        .collect()
}

/// Thirty days of keyword interest starting 2024-01-01
///
/// Columns: Date, Search Volume, Social Mentions
pub fn keyword_trend(rng: &mut dyn RngCore) -> Table {
    let mut table = Table::new(["Date", "Search Volume", "Social Mentions"]);
    for date in days(jan_first_2024(), 30) {
        table.push_row(vec![
            date.into(),
            rng.gen_range(1000i64..5000).into(),
            rng.gen_range(500i64..2000).into(),
        ]);
    }
    table
}

/// Fixed engagement snapshot
pub fn engagement() -> Table {
    let mut table = Table::new(["Metric", "Count", "Growth"]);
    for (metric, count, growth) in [
        ("Comments", 1200, "+15%"),
        ("Likes", 5000, "+22%"),
        ("Shares", 800, "+10%"),
        ("Saves", 300, "+5%"),
    ] {
        table.push_row(vec![metric.into(), Cell::Int(count), growth.into()]);
    }
    table
}

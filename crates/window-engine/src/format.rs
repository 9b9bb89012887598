//! Render a [`Schedule`] for display.

use crate::error::Result;
use crate::generator::Schedule;
use crate::interval::LabeledInterval;

/// `"<Label>: HH:MM - HH:MM"`, e.g. `"Free window: 09:00 - 09:30"`.
pub fn format_interval(interval: &LabeledInterval) -> String {
    format!(
        "{}: {} - {}",
        interval.kind.label(),
        interval.start,
        interval.stop
    )
}

/// One line per interval, in schedule order, newline-terminated.
pub fn format_schedule(schedule: &Schedule) -> String {
    schedule
        .intervals
        .iter()
        .map(|i| format_interval(i) + "\n")
        .collect()
}

/// Pretty-printed JSON with times as `HH:MM` and kinds as their labels.
pub fn to_json(schedule: &Schedule) -> Result<String> {
    Ok(serde_json::to_string_pretty(schedule)?)
}

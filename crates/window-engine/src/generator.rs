//! Generate fixed-size free windows around busy intervals.
//!
//! Sorts busy intervals by start time, anchors the walk with zero-length
//! sentinels at the day boundaries, then tiles every gap with whole slots.
//! Busy intervals are re-emitted as labeled entries so the result is a
//! complete, directly renderable day schedule.

use std::iter;

use chrono::Duration;
use serde::Serialize;
use tracing::{debug, trace};

use crate::config::{BusyRecord, GeneratorConfig, OverlapPolicy};
use crate::conflict::first_conflict;
use crate::error::{Result, WindowError};
use crate::interval::{IntervalKind, LabeledInterval};
use crate::time::TimeOfDay;

/// Slot size used when none is configured.
pub const DEFAULT_SLOT_MINUTES: i64 = 30;

/// The working day over which gaps are computed. `start < end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DayBounds {
    pub start: TimeOfDay,
    pub end: TimeOfDay,
}

impl DayBounds {
    pub fn new(start: TimeOfDay, end: TimeOfDay) -> Result<Self> {
        if start >= end {
            return Err(WindowError::Range(format!(
                "day start {} must be before day end {}",
                start, end
            )));
        }
        Ok(Self { start, end })
    }

    pub fn contains(&self, interval: &LabeledInterval) -> bool {
        interval.start >= self.start && interval.stop <= self.end
    }
}

/// Generator output: the day's intervals in chronological order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Schedule {
    pub day_start: TimeOfDay,
    pub day_end: TimeOfDay,
    pub slot_minutes: i64,
    pub intervals: Vec<LabeledInterval>,
}

impl Schedule {
    pub fn free_windows(&self) -> impl Iterator<Item = &LabeledInterval> {
        self.of_kind(IntervalKind::Free)
    }

    pub fn busy(&self) -> impl Iterator<Item = &LabeledInterval> {
        self.of_kind(IntervalKind::Busy)
    }

    pub fn first_free_window(&self) -> Option<&LabeledInterval> {
        self.free_windows().next()
    }

    /// Total bookable minutes across all free windows.
    pub fn free_minutes(&self) -> i64 {
        self.free_windows().map(LabeledInterval::duration_minutes).sum()
    }

    fn of_kind(&self, kind: IntervalKind) -> impl Iterator<Item = &LabeledInterval> {
        self.intervals.iter().filter(move |i| i.kind == kind)
    }
}

/// Generate the day schedule from raw `HH:MM` strings, using the default
/// slot size and overlap policy.
pub fn generate(day_start: &str, day_end: &str, busy: &[BusyRecord]) -> Result<Schedule> {
    generate_with(&GeneratorConfig::new(day_start, day_end, busy.to_vec()))
}

/// Generate the day schedule from an explicit configuration.
///
/// Parsing and validation happen before any output is built; on error no
/// partial schedule is returned.
pub fn generate_with(config: &GeneratorConfig) -> Result<Schedule> {
    let bounds = config.bounds()?;
    let busy = config.busy_intervals()?;
    let slot = config.slot()?;
    generate_windows(bounds, &busy, slot, config.overlap)
}

/// Generate the day schedule from already-parsed values.
///
/// # Arguments
///
/// * `bounds` — The working day.
/// * `busy` — Busy intervals in any order; each must lie inside `bounds`.
/// * `slot` — Length of every emitted free window. Must be positive.
/// * `policy` — Whether overlapping busy intervals are an error.
pub fn generate_windows(
    bounds: DayBounds,
    busy: &[LabeledInterval],
    slot: Duration,
    policy: OverlapPolicy,
) -> Result<Schedule> {
    if slot <= Duration::zero() {
        return Err(WindowError::Range(format!(
            "slot size must be positive, got {} minutes",
            slot.num_minutes()
        )));
    }

    for interval in busy {
        if interval.start > interval.stop {
            return Err(WindowError::Range(format!(
                "busy interval starts at {} after it stops at {}",
                interval.start, interval.stop
            )));
        }
        if !bounds.contains(interval) {
            return Err(WindowError::Range(format!(
                "busy interval {}-{} lies outside the day {}-{}",
                interval.start, interval.stop, bounds.start, bounds.end
            )));
        }
    }

    // Stable: ties keep their input order.
    let mut sorted: Vec<LabeledInterval> = busy
        .iter()
        .map(|b| LabeledInterval::busy(b.start, b.stop))
        .collect();
    sorted.sort_by_key(|b| b.start);

    if policy == OverlapPolicy::Reject {
        if let Some(conflict) = first_conflict(&sorted) {
            return Err(WindowError::Overlap {
                first: format!("{}-{}", conflict.first.start, conflict.first.stop),
                second: format!("{}-{}", conflict.second.start, conflict.second.stop),
                minutes: conflict.overlap_minutes,
            });
        }
    }

    debug!(
        day_start = %bounds.start,
        day_end = %bounds.end,
        busy = sorted.len(),
        slot_minutes = slot.num_minutes(),
        "generating free windows"
    );

    let mut intervals = Vec::with_capacity(sorted.len() * 2);

    // The leading sentinel (day_start, day_start) only seeds the cursor;
    // the trailing one (day_end, day_end) closes the last gap.
    let mut cursor = bounds.start;
    let trailing = LabeledInterval::busy(bounds.end, bounds.end);
    let entries = sorted
        .iter()
        .map(|b| (b, false))
        .chain(iter::once((&trailing, true)));

    for (entry, is_sentinel) in entries {
        push_free_windows(&mut intervals, cursor, entry.start, slot);
        if !is_sentinel {
            intervals.push(*entry);
        }
        cursor = cursor.max(entry.stop);
    }

    debug!(
        emitted = intervals.len(),
        free = intervals.len() - sorted.len(),
        "free window generation finished"
    );

    Ok(Schedule {
        day_start: bounds.start,
        day_end: bounds.end,
        slot_minutes: slot.num_minutes(),
        intervals,
    })
}

/// Tile `[cursor, until)` with whole slots starting at `cursor`.
/// A remainder shorter than `slot` is dropped.
fn push_free_windows(
    out: &mut Vec<LabeledInterval>,
    cursor: TimeOfDay,
    until: TimeOfDay,
    slot: Duration,
) {
    let gap = until - cursor;
    if gap < slot {
        return;
    }

    let count = gap.num_seconds() / slot.num_seconds();
    trace!(from = %cursor, to = %until, count, "tiling gap");

    let mut start = cursor;
    for _ in 0..count {
        let stop = start + slot;
        out.push(LabeledInterval::free(start, stop));
        start = stop;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn t(s: &str) -> TimeOfDay {
        TimeOfDay::parse("test", s).unwrap()
    }

    #[test]
    fn empty_day_is_fully_tiled() {
        let bounds = DayBounds::new(t("09:00"), t("10:40")).unwrap();
        let schedule =
            generate_windows(bounds, &[], Duration::minutes(30), OverlapPolicy::Reject).unwrap();
        let starts: Vec<String> = schedule.free_windows().map(|w| w.start.to_string()).collect();
        assert_eq!(starts, ["09:00", "09:30", "10:00"]);
        assert_eq!(schedule.free_minutes(), 90);
    }

    #[test]
    fn non_positive_slot_is_a_range_error() {
        let bounds = DayBounds::new(t("09:00"), t("10:00")).unwrap();
        let err = generate_windows(bounds, &[], Duration::zero(), OverlapPolicy::Reject)
            .unwrap_err();
        assert!(matches!(err, WindowError::Range(_)));
    }

    #[test]
    fn inverted_day_is_rejected() {
        assert!(DayBounds::new(t("10:00"), t("10:00")).is_err());
        assert!(DayBounds::new(t("11:00"), t("10:00")).is_err());
    }
}

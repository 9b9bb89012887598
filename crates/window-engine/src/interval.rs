//! Labeled intervals: the unit of generator output.

use chrono::Duration;
use serde::{Deserialize, Serialize};

use crate::time::TimeOfDay;

/// What an interval represents in the day schedule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IntervalKind {
    /// A bookable slot of exactly one slot size.
    #[serde(rename = "Free window")]
    Free,
    /// A pre-existing appointment.
    #[serde(rename = "Busy")]
    Busy,
}

impl IntervalKind {
    /// Human-readable label used by the formatter.
    pub fn label(&self) -> &'static str {
        match self {
            IntervalKind::Free => "Free window",
            IntervalKind::Busy => "Busy",
        }
    }
}

/// A `[start, stop]` span of the day tagged with its kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabeledInterval {
    pub start: TimeOfDay,
    pub stop: TimeOfDay,
    #[serde(rename = "label")]
    pub kind: IntervalKind,
}

impl LabeledInterval {
    pub fn busy(start: TimeOfDay, stop: TimeOfDay) -> Self {
        Self {
            start,
            stop,
            kind: IntervalKind::Busy,
        }
    }

    pub fn free(start: TimeOfDay, stop: TimeOfDay) -> Self {
        Self {
            start,
            stop,
            kind: IntervalKind::Free,
        }
    }

    pub fn duration(&self) -> Duration {
        self.stop - self.start
    }

    pub fn duration_minutes(&self) -> i64 {
        self.duration().num_minutes()
    }

    /// Two intervals overlap iff `a.start < b.stop && b.start < a.stop`.
    /// Touching intervals (one stops where the other starts) do not overlap.
    pub fn overlaps(&self, other: &LabeledInterval) -> bool {
        self.start < other.stop && other.start < self.stop
    }
}

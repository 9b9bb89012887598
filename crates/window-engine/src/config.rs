//! Generator configuration: day bounds, busy records, slot size, overlap policy.
//!
//! A [`GeneratorConfig`] is the explicit input to
//! [`generate_with`](crate::generator::generate_with). It deserializes from a
//! JSON document such as:
//!
//! ```json
//! {
//!   "day_start": "09:00",
//!   "day_end": "21:00",
//!   "slot_minutes": 30,
//!   "overlap": "reject",
//!   "busy": [
//!     { "start": "10:30", "stop": "10:50" }
//!   ]
//! }
//! ```
//!
//! `slot_minutes`, `overlap`, and `busy` are optional.

use std::path::Path;

use chrono::Duration;
use serde::{Deserialize, Serialize};

use crate::error::{Result, WindowError};
use crate::generator::{DayBounds, DEFAULT_SLOT_MINUTES};
use crate::interval::LabeledInterval;
use crate::time::TimeOfDay;

/// Slot sizes longer than a day can never fit.
const MAX_SLOT_MINUTES: i64 = 24 * 60;

/// A raw busy record as supplied by the caller.
///
/// Fields are optional so that a missing one surfaces as
/// [`WindowError::MissingField`] naming the record, not as a generic
/// deserialization failure.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BusyRecord {
    pub start: Option<String>,
    pub stop: Option<String>,
}

impl BusyRecord {
    pub fn new(start: impl Into<String>, stop: impl Into<String>) -> Self {
        Self {
            start: Some(start.into()),
            stop: Some(stop.into()),
        }
    }

    /// Parse a `HH:MM-HH:MM` span, as accepted on the command line.
    pub fn from_span(span: &str) -> Result<Self> {
        let (start, stop) = span.split_once('-').ok_or_else(|| WindowError::Parse {
            field: "busy".to_string(),
            value: span.to_string(),
        })?;
        Ok(Self::new(start.trim(), stop.trim()))
    }
}

/// How the generator treats busy intervals that share time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OverlapPolicy {
    /// Fail with [`WindowError::Overlap`] on the first overlapping pair.
    #[default]
    Reject,
    /// Emit every busy interval as given. The cursor never moves backwards,
    /// so no free window is placed inside any busy interval, but overlapping
    /// busy intervals are not merged.
    Allow,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GeneratorConfig {
    pub day_start: String,
    pub day_end: String,
    #[serde(default)]
    pub busy: Vec<BusyRecord>,
    #[serde(default = "default_slot_minutes")]
    pub slot_minutes: i64,
    #[serde(default)]
    pub overlap: OverlapPolicy,
}

fn default_slot_minutes() -> i64 {
    DEFAULT_SLOT_MINUTES
}

/// The reference working day: 09:00-21:00 with five appointments.
impl Default for GeneratorConfig {
    fn default() -> Self {
        Self::new(
            "09:00",
            "21:00",
            vec![
                BusyRecord::new("10:30", "10:50"),
                BusyRecord::new("18:40", "18:50"),
                BusyRecord::new("14:40", "15:50"),
                BusyRecord::new("16:40", "17:20"),
                BusyRecord::new("20:05", "20:20"),
            ],
        )
    }
}

impl GeneratorConfig {
    /// A config with the default slot size and overlap policy.
    pub fn new(
        day_start: impl Into<String>,
        day_end: impl Into<String>,
        busy: Vec<BusyRecord>,
    ) -> Self {
        Self {
            day_start: day_start.into(),
            day_end: day_end.into(),
            busy,
            slot_minutes: DEFAULT_SLOT_MINUTES,
            overlap: OverlapPolicy::default(),
        }
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| WindowError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json(&json)
    }

    /// Parse and validate the day boundary.
    pub fn bounds(&self) -> Result<DayBounds> {
        let start = TimeOfDay::parse("day_start", &self.day_start)?;
        let end = TimeOfDay::parse("day_end", &self.day_end)?;
        DayBounds::new(start, end)
    }

    /// Parse every busy record, in input order.
    ///
    /// Fails on the first record with a missing field, a malformed time,
    /// or a start after its stop.
    pub fn busy_intervals(&self) -> Result<Vec<LabeledInterval>> {
        self.busy
            .iter()
            .enumerate()
            .map(|(i, record)| parse_record(i, record))
            .collect()
    }

    pub fn slot(&self) -> Result<Duration> {
        if !(1..=MAX_SLOT_MINUTES).contains(&self.slot_minutes) {
            return Err(WindowError::Range(format!(
                "slot size must be between 1 and {} minutes, got {}",
                MAX_SLOT_MINUTES, self.slot_minutes
            )));
        }
        Ok(Duration::minutes(self.slot_minutes))
    }
}

fn parse_record(index: usize, record: &BusyRecord) -> Result<LabeledInterval> {
    let field = |name: &str| format!("busy[{}].{}", index, name);

    let raw_start = record.start.as_deref().ok_or_else(|| WindowError::MissingField {
        field: field("start"),
    })?;
    let raw_stop = record.stop.as_deref().ok_or_else(|| WindowError::MissingField {
        field: field("stop"),
    })?;

    let start = TimeOfDay::parse(&field("start"), raw_start)?;
    let stop = TimeOfDay::parse(&field("stop"), raw_stop)?;

    if start > stop {
        return Err(WindowError::Range(format!(
            "busy[{}] starts at {} after it stops at {}",
            index, start, stop
        )));
    }

    Ok(LabeledInterval::busy(start, stop))
}

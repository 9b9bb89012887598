//! Minute-resolution time of day.
//!
//! Input times are strict `HH:MM` strings: exactly two digits for the hour
//! (00-23) and two for the minute (00-59). `9:00` is rejected rather than
//! silently accepted.

use std::fmt;
use std::ops::{Add, Sub};
use std::str::FromStr;

use chrono::{Duration, NaiveTime, Timelike};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{Result, WindowError};

/// A point within a single calendar day, with minute resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimeOfDay(NaiveTime);

impl TimeOfDay {
    /// Build from an hour (0-23) and minute (0-59).
    pub fn from_hm(hour: u32, minute: u32) -> Option<Self> {
        NaiveTime::from_hms_opt(hour, minute, 0).map(Self)
    }

    /// Parse an `HH:MM` string. `field` names the input in the error.
    pub fn parse(field: &str, value: &str) -> Result<Self> {
        let err = || WindowError::Parse {
            field: field.to_string(),
            value: value.to_string(),
        };

        let bytes = value.as_bytes();
        let well_formed = bytes.len() == 5
            && bytes[2] == b':'
            && [0, 1, 3, 4].iter().all(|&i| bytes[i].is_ascii_digit());
        if !well_formed {
            return Err(err());
        }

        NaiveTime::parse_from_str(value, "%H:%M")
            .map(Self)
            .map_err(|_| err())
    }

    pub fn hour(&self) -> u32 {
        self.0.hour()
    }

    pub fn minute(&self) -> u32 {
        self.0.minute()
    }

    /// Add a duration, returning `None` if the result leaves the day.
    pub fn checked_add(self, rhs: Duration) -> Option<Self> {
        let (time, wrapped) = self.0.overflowing_add_signed(rhs);
        (wrapped == 0).then_some(Self(time))
    }
}

impl Sub for TimeOfDay {
    type Output = Duration;

    fn sub(self, rhs: Self) -> Duration {
        self.0 - rhs.0
    }
}

/// Wrapping addition; callers keep results inside the day bounds.
impl Add<Duration> for TimeOfDay {
    type Output = TimeOfDay;

    fn add(self, rhs: Duration) -> TimeOfDay {
        Self(self.0 + rhs)
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%H:%M"))
    }
}

impl FromStr for TimeOfDay {
    type Err = WindowError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse("time", s)
    }
}

impl Serialize for TimeOfDay {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for TimeOfDay {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_padded_time() {
        let t = TimeOfDay::parse("day_start", "09:05").unwrap();
        assert_eq!(t.hour(), 9);
        assert_eq!(t.minute(), 5);
        assert_eq!(t.to_string(), "09:05");
    }

    #[test]
    fn rejects_unpadded_and_out_of_range() {
        for bad in ["9:00", "25:00", "12:60", "12-30", "", "12:3a", "123:00"] {
            let err = TimeOfDay::parse("busy[0].start", bad).unwrap_err();
            assert!(
                matches!(err, WindowError::Parse { ref field, .. } if field == "busy[0].start"),
                "expected parse error for {bad:?}, got {err:?}"
            );
        }
    }

    #[test]
    fn subtraction_yields_duration() {
        let a = TimeOfDay::from_hm(10, 50).unwrap();
        let b = TimeOfDay::from_hm(14, 40).unwrap();
        assert_eq!((b - a).num_minutes(), 230);
    }

    #[test]
    fn checked_add_stops_at_midnight() {
        let late = TimeOfDay::from_hm(23, 45).unwrap();
        assert_eq!(
            late.checked_add(Duration::minutes(10)),
            TimeOfDay::from_hm(23, 55)
        );
        assert_eq!(late.checked_add(Duration::minutes(30)), None);
    }
}

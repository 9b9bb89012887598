//! # window-engine
//!
//! Deterministic free-window generation for a single working day.
//!
//! Given a day boundary and the appointments already booked, the engine
//! emits every bookable slot of a fixed size, interleaved with the busy
//! intervals themselves, in chronological order.
//!
//! ## Modules
//!
//! - [`generator`] — Day bounds + busy intervals → ordered schedule
//! - [`time`] — Strict `HH:MM` time-of-day values
//! - [`interval`] — Labeled busy/free intervals
//! - [`conflict`] — Detect overlapping busy intervals
//! - [`config`] — Generator configuration (JSON-loadable)
//! - [`format`] — Text and JSON rendering
//! - [`error`] — Error types

pub mod config;
pub mod conflict;
pub mod error;
pub mod format;
pub mod generator;
pub mod interval;
pub mod time;

pub use config::{BusyRecord, GeneratorConfig, OverlapPolicy};
pub use conflict::{first_conflict, Conflict};
pub use error::WindowError;
pub use generator::{generate, generate_with, generate_windows, DayBounds, Schedule};
pub use interval::{IntervalKind, LabeledInterval};
pub use time::TimeOfDay;

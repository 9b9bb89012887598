//! Detect overlapping busy intervals.
//!
//! A single pass over intervals sorted by start. Adjacent intervals (one
//! stops exactly when the next starts) are NOT conflicts. A zero-length
//! interval conflicts only when it sits strictly inside another interval;
//! at either edge it merely touches.

use crate::interval::LabeledInterval;

/// A detected overlap between two busy intervals.
#[derive(Debug, Clone, PartialEq)]
pub struct Conflict {
    pub first: LabeledInterval,
    pub second: LabeledInterval,
    pub overlap_minutes: i64,
}

/// Find the first interval in `sorted` that overlaps an earlier one.
///
/// `sorted` must be ordered by start. Each interval is compared against the
/// earlier interval reaching furthest into the day; while no conflict has
/// been found the earlier intervals are disjoint, so that one comparison
/// covers all of them.
///
/// The overlap duration is `min(a.stop, b.stop) - max(a.start, b.start)`.
pub fn first_conflict(sorted: &[LabeledInterval]) -> Option<Conflict> {
    let mut furthest: Option<&LabeledInterval> = None;

    for b in sorted {
        match furthest {
            Some(a) if a.overlaps(b) => {
                let overlap_start = a.start.max(b.start);
                let overlap_stop = a.stop.min(b.stop);

                return Some(Conflict {
                    first: *a,
                    second: *b,
                    overlap_minutes: (overlap_stop - overlap_start).num_minutes(),
                });
            }
            Some(a) if b.stop <= a.stop => {}
            _ => furthest = Some(b),
        }
    }

    None
}

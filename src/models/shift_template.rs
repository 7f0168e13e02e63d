//! Shift template model.
//!
//! A shift template is a reusable definition of a working interval
//! (start, end, capacity) not tied to any specific date. Templates are
//! immutable once roster assignments reference them, except for deletion
//! when unreferenced.

use chrono::{NaiveTime, Timelike};
use serde::{Deserialize, Serialize};

/// Represents a reusable shift definition with a wall-clock interval and capacity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShiftTemplate {
    /// Unique identifier for the template.
    pub id: String,
    /// Display name (e.g., "Ca sáng").
    pub name: String,
    /// Wall-clock start of the interval.
    pub start: NaiveTime,
    /// Wall-clock end of the interval. An end at or before the start means
    /// the shift crosses midnight.
    pub end: NaiveTime,
    /// Maximum concurrent assignments permitted per calendar date.
    pub max_capacity: u32,
}

impl ShiftTemplate {
    /// Returns true if the interval crosses midnight (end is not after start).
    pub fn is_overnight(&self) -> bool {
        self.end <= self.start
    }

    /// The wall-clock interval as half-open minute-of-day ranges.
    ///
    /// A same-day template yields one `[start, end)` range; an overnight
    /// template is split at midnight into `[start, 1440)` and `[0, end)`.
    pub fn minute_ranges(&self) -> Vec<(u32, u32)> {
        let start = self.start.hour() * 60 + self.start.minute();
        let end = self.end.hour() * 60 + self.end.minute();
        if self.is_overnight() {
            let mut ranges = vec![(start, 24 * 60)];
            if end > 0 {
                ranges.push((0, end));
            }
            ranges
        } else {
            vec![(start, end)]
        }
    }
}

//! Attendance punch model.
//!
//! Attendance records are produced by an external time-clock integration and
//! are read-only to this engine. Punch times arrive as raw wall-clock strings
//! and may be missing or malformed; the time accounting engine degrades such
//! rows to zero hours instead of failing the whole report.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A single attendance row: one staff member, one date, up to two punches.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceRecord {
    /// The staff member who punched.
    pub staff_id: String,
    /// The calendar date of the punches.
    pub date: NaiveDate,
    /// Raw check-in time ("HH:MM" or "HH:MM:SS"), if recorded.
    pub check_in: Option<String>,
    /// Raw check-out time ("HH:MM" or "HH:MM:SS"), if recorded.
    pub check_out: Option<String>,
    /// Check-in status tag emitted by the time clock (e.g., "Đúng giờ",
    /// "Trễ"). Passed through verbatim, never interpreted.
    pub status: Option<String>,
}

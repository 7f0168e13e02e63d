//! Time accounting over raw attendance punches.
//!
//! Converts (check-in, check-out) pairs into hour totals and assembles the
//! per-staff, per-date timesheet matrix. Shifts crossing midnight are handled
//! by adding 24 hours to the check-out before differencing. No lunch or break
//! deduction is applied: the raw elapsed interval is the answer.
//!
//! Malformed or missing punches never fail a report. They degrade that single
//! data point to zero hours and surface as a [`DataQualityNote`] on the
//! report, because one bad punch must not blank out an entire month.

use std::collections::BTreeMap;
use std::sync::Arc;

use chrono::{NaiveDate, NaiveTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::EngineResult;
use crate::models::{AttendanceRecord, DateRange, Staff};
use crate::store::{AttendanceRepository, BranchRepository, StaffRepository};

use super::branch_display;

const MINUTES_PER_DAY: i64 = 24 * 60;

/// Parses a raw wall-clock punch value.
///
/// The upstream time clock emits both "HH:MM" and "HH:MM:SS"; anything else
/// is treated as dirty data by the callers.
pub fn parse_clock(value: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(value, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(value, "%H:%M:%S"))
        .ok()
}

/// A note recording one attendance row that could not be fully accounted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DataQualityNote {
    /// The staff member the row belongs to.
    pub staff_id: String,
    /// The date of the row.
    pub date: NaiveDate,
    /// What was wrong (missing punch, unparsable value).
    pub detail: String,
}

/// Computes elapsed hours between two punches, rounded to one decimal place.
///
/// If the check-out is chronologically earlier than the check-in the shift is
/// treated as crossing midnight and 24 hours are added before differencing.
/// Malformed input yields 0.0 and a warning on the log; it never raises.
///
/// # Examples
///
/// ```
/// use rust_decimal::Decimal;
/// use workforce_engine::engine::hours_worked;
///
/// assert_eq!(hours_worked("08:00", "17:00"), Decimal::new(90, 1)); // 9.0
/// assert_eq!(hours_worked("22:00", "06:00"), Decimal::new(80, 1)); // overnight, 8.0
/// assert_eq!(hours_worked("09:00", "09:00"), Decimal::ZERO);
/// assert_eq!(hours_worked("garbage", "17:00"), Decimal::ZERO);
/// ```
pub fn hours_worked(check_in: &str, check_out: &str) -> Decimal {
    match punch_hours(check_in, check_out) {
        Some(hours) => hours,
        None => {
            warn!(check_in, check_out, "unparsable attendance punch, counting 0 hours");
            Decimal::ZERO
        }
    }
}

/// Like [`hours_worked`] but distinguishes a clean zero from a degraded one:
/// the second element describes what was wrong with the punches, if anything.
pub fn hours_worked_checked(
    check_in: Option<&str>,
    check_out: Option<&str>,
) -> (Decimal, Option<String>) {
    match (check_in, check_out) {
        (Some(ci), Some(co)) => match punch_hours(ci, co) {
            Some(hours) => (hours, None),
            None => (
                Decimal::ZERO,
                Some(format!("unparsable punch pair '{}' / '{}'", ci, co)),
            ),
        },
        (None, _) => (Decimal::ZERO, Some("missing check-in".to_string())),
        (_, None) => (Decimal::ZERO, Some("missing check-out".to_string())),
    }
}

fn punch_hours(check_in: &str, check_out: &str) -> Option<Decimal> {
    let start = parse_clock(check_in)?;
    let end = parse_clock(check_out)?;

    let mut minutes = end.signed_duration_since(start).num_minutes();
    if minutes < 0 {
        // Shift crossed midnight.
        minutes += MINUTES_PER_DAY;
    }

    let hours = Decimal::new(minutes, 0) / Decimal::new(60, 0);
    Some(hours.round_dp(1).max(Decimal::ZERO))
}

/// Sums the worked hours over a slice of attendance rows, collecting a
/// [`DataQualityNote`] for every row that degrades to zero. The total is
/// rounded to one decimal place after summation.
pub fn sum_row_hours(records: &[AttendanceRecord], notes: &mut Vec<DataQualityNote>) -> Decimal {
    let mut total = Decimal::ZERO;
    for record in records {
        let (hours, problem) =
            hours_worked_checked(record.check_in.as_deref(), record.check_out.as_deref());
        if let Some(detail) = problem {
            warn!(
                staff_id = %record.staff_id,
                date = %record.date,
                detail = %detail,
                "attendance row degraded to 0 hours"
            );
            notes.push(DataQualityNote {
                staff_id: record.staff_id.clone(),
                date: record.date,
                detail,
            });
        }
        total += hours;
    }
    total.round_dp(1)
}

/// One cell of the timesheet matrix: the punches and computed hours for one
/// staff member on one date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceCell {
    /// Raw check-in punch, if recorded.
    #[serde(rename = "in")]
    pub check_in: Option<String>,
    /// Raw check-out punch, if recorded.
    #[serde(rename = "out")]
    pub check_out: Option<String>,
    /// Elapsed hours for the cell, one decimal place; zero when degraded.
    pub hours: Decimal,
    /// Check-in status tag, passed through from the time clock.
    pub status: Option<String>,
}

/// One staff member's row in the timesheet matrix.
///
/// Emitted for every staff member in scope even when they have zero
/// attendance rows in range, so a roster listing never silently omits people
/// who didn't clock in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimesheetEntry {
    /// The staff member's identifier.
    pub staff_id: String,
    /// The staff member's display name.
    pub staff_name: String,
    /// Avatar for the display layer.
    pub avatar: Option<String>,
    /// The staff member's job role.
    pub role: String,
    /// Resolved branch name, or the unassigned-branch label.
    pub branch_name: String,
    /// Sum of valid hours across the range, one decimal place.
    pub total_hours: Decimal,
    /// Per-date cells, keyed by calendar date.
    pub attendance: BTreeMap<NaiveDate, AttendanceCell>,
}

/// A full timesheet report plus the data-quality notes gathered while
/// building it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimesheetReport {
    /// One entry per staff member in scope.
    pub entries: Vec<TimesheetEntry>,
    /// Rows that degraded to zero hours, for operators to chase.
    pub quality_notes: Vec<DataQualityNote>,
}

/// Restricts which staff a timesheet covers.
#[derive(Debug, Clone, Default)]
pub struct TimesheetFilter {
    /// Only this staff member, when set.
    pub staff_id: Option<String>,
    /// Only staff assigned to this branch, when set.
    pub branch_id: Option<String>,
}

impl TimesheetFilter {
    fn matches(&self, staff: &Staff) -> bool {
        let staff_ok = self.staff_id.as_deref().is_none_or(|id| staff.id == id);
        let branch_ok = self
            .branch_id
            .as_deref()
            .is_none_or(|id| staff.branch_id.as_deref() == Some(id));
        staff_ok && branch_ok
    }
}

/// Assembles per-staff, per-date timesheet matrices from attendance punches.
pub struct TimeAccountingEngine {
    staff: Arc<dyn StaffRepository>,
    branches: Arc<dyn BranchRepository>,
    attendance: Arc<dyn AttendanceRepository>,
}

impl TimeAccountingEngine {
    /// Creates an engine over the given repositories.
    pub fn new(
        staff: Arc<dyn StaffRepository>,
        branches: Arc<dyn BranchRepository>,
        attendance: Arc<dyn AttendanceRepository>,
    ) -> Self {
        Self {
            staff,
            branches,
            attendance,
        }
    }

    /// Builds the timesheet matrix for all staff matching `filter` over the
    /// inclusive date range.
    pub fn build_timesheet(
        &self,
        filter: &TimesheetFilter,
        range: &DateRange,
    ) -> EngineResult<TimesheetReport> {
        let mut entries = Vec::new();
        let mut quality_notes = Vec::new();

        for staff in self.staff.list()? {
            if !filter.matches(&staff) {
                continue;
            }

            let rows = self.attendance.in_range(Some(&staff.id), range)?;
            let mut attendance = BTreeMap::new();
            let mut total = Decimal::ZERO;

            for row in &rows {
                let (hours, problem) =
                    hours_worked_checked(row.check_in.as_deref(), row.check_out.as_deref());
                if let Some(detail) = problem {
                    quality_notes.push(DataQualityNote {
                        staff_id: staff.id.clone(),
                        date: row.date,
                        detail,
                    });
                }
                total += hours;
                attendance.insert(
                    row.date,
                    AttendanceCell {
                        check_in: row.check_in.clone(),
                        check_out: row.check_out.clone(),
                        hours,
                        status: row.status.clone(),
                    },
                );
            }

            let branch_name = branch_display(self.branches.as_ref(), staff.branch_id.as_deref())?;
            entries.push(TimesheetEntry {
                staff_id: staff.id,
                staff_name: staff.name,
                avatar: staff.avatar,
                role: staff.role,
                branch_name,
                total_hours: total.round_dp(1),
                attendance,
            });
        }

        Ok(TimesheetReport {
            entries,
            quality_notes,
        })
    }
}

//! The scheduling and payroll computation core.
//!
//! This module contains the three components with real invariants: roster
//! admission under uniqueness and capacity constraints, time accounting over
//! raw attendance punches (including overnight arithmetic), and the
//! type-dispatched payroll calculation.

mod admission;
mod payroll;
mod templates;
mod time_accounting;

pub use admission::{AssignmentRequest, RosterValidator};
pub use payroll::{PayrollCalculator, PayrollReport, compute_line};
pub use templates::{NewShiftTemplate, create_template, delete_template};
pub use time_accounting::{
    AttendanceCell, DataQualityNote, TimeAccountingEngine, TimesheetEntry, TimesheetFilter,
    TimesheetReport, hours_worked, hours_worked_checked, parse_clock, sum_row_hours,
};

use crate::error::EngineResult;
use crate::models::UNASSIGNED_BRANCH_LABEL;
use crate::store::BranchRepository;

/// Resolves a branch reference to its display name.
///
/// A missing or dangling reference yields the unassigned-branch label rather
/// than an error: branch validity never blocks scheduling or reporting.
pub(crate) fn branch_display(
    branches: &dyn BranchRepository,
    branch_id: Option<&str>,
) -> EngineResult<String> {
    let name = match branch_id {
        Some(id) => branches.get(id)?.map(|b| b.name),
        None => None,
    };
    Ok(name.unwrap_or_else(|| UNASSIGNED_BRANCH_LABEL.to_string()))
}

//! Roster assignment models.
//!
//! A roster assignment binds one staff member to one shift template on one
//! calendar date. Assignments are never mutated in place; reassignment is a
//! delete followed by a create.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A persisted roster assignment.
///
/// Invariants, enforced at admission time by the roster store:
/// at most one assignment per (staff, date) pair, and at most
/// `max_capacity` assignments per (shift template, date) pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RosterAssignment {
    /// Unique identifier for the assignment.
    pub id: Uuid,
    /// The assigned staff member.
    pub staff_id: String,
    /// The shift template being worked.
    pub shift_template_id: String,
    /// The calendar date of the shift.
    pub date: NaiveDate,
    /// The branch the shift is worked at, if any.
    pub branch_id: Option<String>,
}

/// An admitted assignment enriched with display names, echoed back to the
/// caller after a successful admission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdmittedAssignment {
    /// Identifier of the persisted assignment.
    pub id: Uuid,
    /// The assigned staff member.
    pub staff_id: String,
    /// Resolved staff display name.
    pub staff_name: String,
    /// The shift template being worked.
    pub shift_template_id: String,
    /// Resolved shift template name.
    pub shift_name: String,
    /// The calendar date of the shift.
    pub date: NaiveDate,
    /// Resolved branch name, or the unassigned-branch label when the branch
    /// reference was missing or did not resolve.
    pub branch_name: String,
}

//! Roster assignment admission.
//!
//! Admits or rejects a proposed (staff, shift template, date, branch) tuple
//! before it reaches the roster store. Failure modes are checked in a fixed
//! order: unknown staff, unknown shift template, duplicate (staff, date)
//! assignment, exhausted (template, date) capacity. Branch validity never
//! rejects: an unresolvable branch admits the assignment with the
//! unassigned-branch label.

use std::sync::Arc;

use chrono::NaiveDate;
use tracing::info;

use crate::error::{EngineError, EngineResult};
use crate::models::AdmittedAssignment;
use crate::store::{
    BranchRepository, NewAssignment, RosterRepository, ShiftTemplateRepository, StaffRepository,
};

use super::branch_display;

/// A proposed roster assignment.
#[derive(Debug, Clone)]
pub struct AssignmentRequest {
    /// The staff member to assign.
    pub staff_id: String,
    /// The shift template to work.
    pub shift_template_id: String,
    /// The calendar date of the shift.
    pub date: NaiveDate,
    /// The branch the shift is worked at, if any.
    pub branch_id: Option<String>,
}

/// Validates roster assignment requests and admits them into the store.
pub struct RosterValidator {
    staff: Arc<dyn StaffRepository>,
    templates: Arc<dyn ShiftTemplateRepository>,
    roster: Arc<dyn RosterRepository>,
    branches: Arc<dyn BranchRepository>,
}

impl RosterValidator {
    /// Creates a validator over the given repositories.
    pub fn new(
        staff: Arc<dyn StaffRepository>,
        templates: Arc<dyn ShiftTemplateRepository>,
        roster: Arc<dyn RosterRepository>,
        branches: Arc<dyn BranchRepository>,
    ) -> Self {
        Self {
            staff,
            templates,
            roster,
            branches,
        }
    }

    /// Validates the request and, if admissible, persists the assignment.
    ///
    /// The uniqueness and capacity checks are evaluated together with the
    /// insert inside the roster store, so concurrent admissions cannot both
    /// pass validation and both commit. On success the persisted record is
    /// returned enriched with staff, shift and branch display names.
    ///
    /// # Errors
    ///
    /// [`EngineError::StaffNotFound`], [`EngineError::TemplateNotFound`],
    /// [`EngineError::AlreadyAssigned`] or [`EngineError::CapacityExceeded`],
    /// in that order of precedence.
    pub fn validate_and_admit(&self, request: AssignmentRequest) -> EngineResult<AdmittedAssignment> {
        let staff = self
            .staff
            .get(&request.staff_id)?
            .ok_or_else(|| EngineError::StaffNotFound {
                id: request.staff_id.clone(),
            })?;

        let template = self.templates.get(&request.shift_template_id)?.ok_or_else(|| {
            EngineError::TemplateNotFound {
                id: request.shift_template_id.clone(),
            }
        })?;

        // Uniqueness + capacity + insert as one atomic unit inside the store.
        let assignment = self.roster.insert(
            NewAssignment {
                staff_id: request.staff_id,
                shift_template_id: request.shift_template_id,
                date: request.date,
                branch_id: request.branch_id,
            },
            template.max_capacity,
        )?;

        let branch_name =
            branch_display(self.branches.as_ref(), assignment.branch_id.as_deref())?;

        info!(
            assignment_id = %assignment.id,
            staff_id = %assignment.staff_id,
            shift_template_id = %assignment.shift_template_id,
            date = %assignment.date,
            "roster assignment admitted"
        );

        Ok(AdmittedAssignment {
            id: assignment.id,
            staff_id: assignment.staff_id,
            staff_name: staff.name,
            shift_template_id: assignment.shift_template_id,
            shift_name: template.name,
            date: assignment.date,
            branch_name,
        })
    }
}

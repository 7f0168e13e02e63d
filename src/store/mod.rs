//! Repository seams for the scheduling and payroll core.
//!
//! The engine treats storage as a set of capability interfaces and never
//! acquires connections itself; concrete stores are injected once at startup
//! and held behind `Arc<dyn ...>` handles. The in-memory implementations in
//! [`memory`] back the server binary and the test suites.

pub mod memory;

use std::sync::Arc;

use chrono::NaiveDate;
use uuid::Uuid;

use crate::error::EngineResult;
use crate::models::{
    AttendanceRecord, Branch, DateRange, RosterAssignment, SalaryConfig, ShiftTemplate, Staff,
};

/// The fields of a roster assignment before an identifier is allocated.
#[derive(Debug, Clone)]
pub struct NewAssignment {
    /// The staff member to assign.
    pub staff_id: String,
    /// The shift template to work.
    pub shift_template_id: String,
    /// The calendar date of the shift.
    pub date: NaiveDate,
    /// The branch the shift is worked at, if any.
    pub branch_id: Option<String>,
}

/// Read access to staff records, owned by the staff administration subsystem.
pub trait StaffRepository: Send + Sync {
    /// Looks up a staff member by identifier.
    fn get(&self, id: &str) -> EngineResult<Option<Staff>>;
    /// Lists all staff members.
    fn list(&self) -> EngineResult<Vec<Staff>>;
    /// Inserts a staff record. Used by the administration surface and by
    /// seeding; the scheduling core itself only reads.
    fn insert(&self, staff: Staff) -> EngineResult<()>;
}

/// Read access to branch records.
pub trait BranchRepository: Send + Sync {
    /// Looks up a branch by identifier.
    fn get(&self, id: &str) -> EngineResult<Option<Branch>>;
    /// Inserts a branch record. Used by the administration surface and by
    /// seeding.
    fn insert(&self, branch: Branch) -> EngineResult<()>;
}

/// Storage for shift templates.
pub trait ShiftTemplateRepository: Send + Sync {
    /// Looks up a template by identifier.
    fn get(&self, id: &str) -> EngineResult<Option<ShiftTemplate>>;
    /// Lists all templates.
    fn list(&self) -> EngineResult<Vec<ShiftTemplate>>;
    /// Inserts a validated template.
    fn insert(&self, template: ShiftTemplate) -> EngineResult<()>;
    /// Deletes a template. The caller is responsible for the
    /// referenced-by-assignments guard; see [`crate::engine::delete_template`].
    fn delete(&self, id: &str) -> EngineResult<()>;
}

/// Storage for roster assignments.
pub trait RosterRepository: Send + Sync {
    /// Returns true if the staff member already holds an assignment on `date`.
    fn exists_for_staff_on_date(&self, staff_id: &str, date: NaiveDate) -> EngineResult<bool>;
    /// Counts assignments for a shift template on `date`.
    fn count_for_shift_on_date(&self, shift_template_id: &str, date: NaiveDate)
    -> EngineResult<u32>;
    /// Capacity-checked insert. The uniqueness check on (staff, date), the
    /// capacity count on (template, date) and the insert itself must be one
    /// atomic unit: two racing inserts for the last open slot must yield
    /// exactly one success.
    ///
    /// # Errors
    ///
    /// [`crate::error::EngineError::AlreadyAssigned`] on a duplicate
    /// (staff, date) pair, [`crate::error::EngineError::CapacityExceeded`]
    /// when the (template, date) bucket is full.
    fn insert(&self, new: NewAssignment, max_capacity: u32) -> EngineResult<RosterAssignment>;
    /// Deletes an assignment by identifier.
    ///
    /// # Errors
    ///
    /// [`crate::error::EngineError::AssignmentNotFound`] when no assignment
    /// has that identifier.
    fn delete(&self, id: Uuid) -> EngineResult<()>;
    /// Counts assignments (any date) referencing a shift template. Non-zero
    /// blocks template deletion.
    fn referencing_template(&self, shift_template_id: &str) -> EngineResult<usize>;
}

/// Read access to attendance punches produced by the external time clock.
pub trait AttendanceRepository: Send + Sync {
    /// Returns attendance rows within `range`, optionally restricted to one
    /// staff member. Branch-level filtering happens in the engine, which
    /// knows each staff member's branch.
    fn in_range(
        &self,
        staff_id: Option<&str>,
        range: &DateRange,
    ) -> EngineResult<Vec<AttendanceRecord>>;
    /// Inserts a punch row. Used by the time-clock integration and seeding.
    fn insert(&self, record: AttendanceRecord) -> EngineResult<()>;
}

/// Storage for per-staff salary configuration.
pub trait SalaryConfigRepository: Send + Sync {
    /// Looks up the active configuration for a staff member.
    fn get(&self, staff_id: &str) -> EngineResult<Option<SalaryConfig>>;
    /// Inserts or replaces the configuration for a staff member. Upserting
    /// twice leaves exactly one row reflecting the latest amount.
    fn upsert(&self, config: SalaryConfig) -> EngineResult<SalaryConfig>;
}

/// The full set of repository handles the engine is wired with.
#[derive(Clone)]
pub struct Stores {
    /// Staff records.
    pub staff: Arc<dyn StaffRepository>,
    /// Branch records.
    pub branches: Arc<dyn BranchRepository>,
    /// Shift templates.
    pub templates: Arc<dyn ShiftTemplateRepository>,
    /// Roster assignments.
    pub roster: Arc<dyn RosterRepository>,
    /// Attendance punches.
    pub attendance: Arc<dyn AttendanceRepository>,
    /// Salary configuration.
    pub salary: Arc<dyn SalaryConfigRepository>,
}

impl Stores {
    /// Creates a fresh set of empty in-memory stores.
    pub fn in_memory() -> Self {
        Self {
            staff: Arc::new(memory::MemoryStaffRepository::new()),
            branches: Arc::new(memory::MemoryBranchRepository::new()),
            templates: Arc::new(memory::MemoryShiftTemplateRepository::new()),
            roster: Arc::new(memory::MemoryRosterRepository::new()),
            attendance: Arc::new(memory::MemoryAttendanceRepository::new()),
            salary: Arc::new(memory::MemorySalaryConfigRepository::new()),
        }
    }
}

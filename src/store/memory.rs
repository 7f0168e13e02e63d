//! In-memory repository implementations.
//!
//! Each store guards its rows with a single mutex. For the roster store that
//! mutex is what makes [`RosterRepository::insert`] atomic: the uniqueness
//! check, the capacity count and the push all happen under one lock, so two
//! racing admissions for the last open slot serialize and exactly one wins.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

use chrono::NaiveDate;
use uuid::Uuid;

use crate::error::{EngineError, EngineResult};
use crate::models::{
    AttendanceRecord, Branch, DateRange, RosterAssignment, SalaryConfig, ShiftTemplate, Staff,
};

use super::{
    AttendanceRepository, BranchRepository, NewAssignment, RosterRepository,
    SalaryConfigRepository, ShiftTemplateRepository, StaffRepository,
};

fn lock<'a, T>(rows: &'a Mutex<T>) -> EngineResult<MutexGuard<'a, T>> {
    rows.lock().map_err(|_| EngineError::TransientStore {
        message: "store lock poisoned".to_string(),
    })
}

/// In-memory staff store.
#[derive(Default)]
pub struct MemoryStaffRepository {
    rows: Mutex<Vec<Staff>>,
}

impl MemoryStaffRepository {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

impl StaffRepository for MemoryStaffRepository {
    fn get(&self, id: &str) -> EngineResult<Option<Staff>> {
        Ok(lock(&self.rows)?.iter().find(|s| s.id == id).cloned())
    }

    fn list(&self) -> EngineResult<Vec<Staff>> {
        Ok(lock(&self.rows)?.clone())
    }

    fn insert(&self, staff: Staff) -> EngineResult<()> {
        lock(&self.rows)?.push(staff);
        Ok(())
    }
}

/// In-memory branch store.
#[derive(Default)]
pub struct MemoryBranchRepository {
    rows: Mutex<Vec<Branch>>,
}

impl MemoryBranchRepository {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

impl BranchRepository for MemoryBranchRepository {
    fn get(&self, id: &str) -> EngineResult<Option<Branch>> {
        Ok(lock(&self.rows)?.iter().find(|b| b.id == id).cloned())
    }

    fn insert(&self, branch: Branch) -> EngineResult<()> {
        lock(&self.rows)?.push(branch);
        Ok(())
    }
}

/// In-memory shift template store.
#[derive(Default)]
pub struct MemoryShiftTemplateRepository {
    rows: Mutex<Vec<ShiftTemplate>>,
}

impl MemoryShiftTemplateRepository {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

impl ShiftTemplateRepository for MemoryShiftTemplateRepository {
    fn get(&self, id: &str) -> EngineResult<Option<ShiftTemplate>> {
        Ok(lock(&self.rows)?.iter().find(|t| t.id == id).cloned())
    }

    fn list(&self) -> EngineResult<Vec<ShiftTemplate>> {
        Ok(lock(&self.rows)?.clone())
    }

    fn insert(&self, template: ShiftTemplate) -> EngineResult<()> {
        lock(&self.rows)?.push(template);
        Ok(())
    }

    fn delete(&self, id: &str) -> EngineResult<()> {
        let mut rows = lock(&self.rows)?;
        let before = rows.len();
        rows.retain(|t| t.id != id);
        if rows.len() == before {
            return Err(EngineError::TemplateNotFound { id: id.to_string() });
        }
        Ok(())
    }
}

/// In-memory roster assignment store.
#[derive(Default)]
pub struct MemoryRosterRepository {
    rows: Mutex<Vec<RosterAssignment>>,
}

impl MemoryRosterRepository {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

impl RosterRepository for MemoryRosterRepository {
    fn exists_for_staff_on_date(&self, staff_id: &str, date: NaiveDate) -> EngineResult<bool> {
        Ok(lock(&self.rows)?
            .iter()
            .any(|a| a.staff_id == staff_id && a.date == date))
    }

    fn count_for_shift_on_date(
        &self,
        shift_template_id: &str,
        date: NaiveDate,
    ) -> EngineResult<u32> {
        Ok(lock(&self.rows)?
            .iter()
            .filter(|a| a.shift_template_id == shift_template_id && a.date == date)
            .count() as u32)
    }

    fn insert(&self, new: NewAssignment, max_capacity: u32) -> EngineResult<RosterAssignment> {
        // One lock for check + count + push: the admission invariants hold
        // even under concurrent requests.
        let mut rows = lock(&self.rows)?;

        if rows
            .iter()
            .any(|a| a.staff_id == new.staff_id && a.date == new.date)
        {
            return Err(EngineError::AlreadyAssigned {
                staff_id: new.staff_id,
                date: new.date,
            });
        }

        let taken = rows
            .iter()
            .filter(|a| a.shift_template_id == new.shift_template_id && a.date == new.date)
            .count() as u32;
        if taken >= max_capacity {
            return Err(EngineError::CapacityExceeded {
                shift_template_id: new.shift_template_id,
                date: new.date,
                max_capacity,
            });
        }

        let assignment = RosterAssignment {
            id: Uuid::new_v4(),
            staff_id: new.staff_id,
            shift_template_id: new.shift_template_id,
            date: new.date,
            branch_id: new.branch_id,
        };
        rows.push(assignment.clone());
        Ok(assignment)
    }

    fn delete(&self, id: Uuid) -> EngineResult<()> {
        let mut rows = lock(&self.rows)?;
        let before = rows.len();
        rows.retain(|a| a.id != id);
        if rows.len() == before {
            return Err(EngineError::AssignmentNotFound { id });
        }
        Ok(())
    }

    fn referencing_template(&self, shift_template_id: &str) -> EngineResult<usize> {
        Ok(lock(&self.rows)?
            .iter()
            .filter(|a| a.shift_template_id == shift_template_id)
            .count())
    }
}

/// In-memory attendance store.
#[derive(Default)]
pub struct MemoryAttendanceRepository {
    rows: Mutex<Vec<AttendanceRecord>>,
}

impl MemoryAttendanceRepository {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

impl AttendanceRepository for MemoryAttendanceRepository {
    fn in_range(
        &self,
        staff_id: Option<&str>,
        range: &DateRange,
    ) -> EngineResult<Vec<AttendanceRecord>> {
        Ok(lock(&self.rows)?
            .iter()
            .filter(|r| range.contains(r.date))
            .filter(|r| staff_id.is_none_or(|id| r.staff_id == id))
            .cloned()
            .collect())
    }

    fn insert(&self, record: AttendanceRecord) -> EngineResult<()> {
        lock(&self.rows)?.push(record);
        Ok(())
    }
}

/// In-memory salary configuration store, keyed by staff identifier so upsert
/// semantics come for free.
#[derive(Default)]
pub struct MemorySalaryConfigRepository {
    rows: Mutex<HashMap<String, SalaryConfig>>,
}

impl MemorySalaryConfigRepository {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

impl SalaryConfigRepository for MemorySalaryConfigRepository {
    fn get(&self, staff_id: &str) -> EngineResult<Option<SalaryConfig>> {
        Ok(lock(&self.rows)?.get(staff_id).cloned())
    }

    fn upsert(&self, config: SalaryConfig) -> EngineResult<SalaryConfig> {
        lock(&self.rows)?.insert(config.staff_id.clone(), config.clone());
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::SalaryType;
    use rust_decimal::Decimal;
    use std::sync::{Arc, Barrier};

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn new_assignment(staff: &str, shift: &str, day: &str) -> NewAssignment {
        NewAssignment {
            staff_id: staff.to_string(),
            shift_template_id: shift.to_string(),
            date: date(day),
            branch_id: None,
        }
    }

    #[test]
    fn test_duplicate_staff_date_rejected() {
        let repo = MemoryRosterRepository::new();
        repo.insert(new_assignment("stf_001", "tpl_a", "2026-01-15"), 5)
            .unwrap();

        // Same staff, same date, different shift: still a conflict.
        let err = repo
            .insert(new_assignment("stf_001", "tpl_b", "2026-01-15"), 5)
            .unwrap_err();
        assert!(matches!(err, EngineError::AlreadyAssigned { .. }));
    }

    #[test]
    fn test_capacity_enforced_then_freed_by_delete() {
        let repo = MemoryRosterRepository::new();
        let first = repo
            .insert(new_assignment("stf_001", "tpl_a", "2026-01-15"), 2)
            .unwrap();
        repo.insert(new_assignment("stf_002", "tpl_a", "2026-01-15"), 2)
            .unwrap();

        let err = repo
            .insert(new_assignment("stf_003", "tpl_a", "2026-01-15"), 2)
            .unwrap_err();
        assert!(matches!(
            err,
            EngineError::CapacityExceeded { max_capacity: 2, .. }
        ));

        repo.delete(first.id).unwrap();
        repo.insert(new_assignment("stf_003", "tpl_a", "2026-01-15"), 2)
            .unwrap();
    }

    #[test]
    fn test_capacity_counts_per_date() {
        let repo = MemoryRosterRepository::new();
        repo.insert(new_assignment("stf_001", "tpl_a", "2026-01-15"), 1)
            .unwrap();
        // Same shift, different date: capacity buckets are per (shift, date).
        repo.insert(new_assignment("stf_001", "tpl_a", "2026-01-16"), 1)
            .unwrap();
    }

    #[test]
    fn test_racing_admissions_for_last_slot_yield_one_success() {
        let repo = Arc::new(MemoryRosterRepository::new());
        repo.insert(new_assignment("stf_000", "tpl_a", "2026-01-15"), 2)
            .unwrap();

        // Two threads contend for the single remaining slot.
        let barrier = Arc::new(Barrier::new(2));
        let handles: Vec<_> = ["stf_001", "stf_002"]
            .into_iter()
            .map(|staff| {
                let repo = Arc::clone(&repo);
                let barrier = Arc::clone(&barrier);
                let staff = staff.to_string();
                std::thread::spawn(move || {
                    barrier.wait();
                    repo.insert(new_assignment(&staff, "tpl_a", "2026-01-15"), 2)
                })
            })
            .collect();

        let results: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        let successes = results.iter().filter(|r| r.is_ok()).count();
        let capacity_rejections = results
            .iter()
            .filter(|r| matches!(r, Err(EngineError::CapacityExceeded { .. })))
            .count();
        assert_eq!(successes, 1);
        assert_eq!(capacity_rejections, 1);
        assert_eq!(
            repo.count_for_shift_on_date("tpl_a", date("2026-01-15"))
                .unwrap(),
            2
        );
    }

    #[test]
    fn test_delete_unknown_assignment_is_not_found() {
        let repo = MemoryRosterRepository::new();
        let err = repo.delete(Uuid::new_v4()).unwrap_err();
        assert!(matches!(err, EngineError::AssignmentNotFound { .. }));
    }

    #[test]
    fn test_attendance_range_and_staff_filters() {
        let repo = MemoryAttendanceRepository::new();
        for (staff, day) in [
            ("stf_001", "2026-01-15"),
            ("stf_001", "2026-02-01"),
            ("stf_002", "2026-01-20"),
        ] {
            repo.insert(AttendanceRecord {
                staff_id: staff.to_string(),
                date: date(day),
                check_in: Some("08:00".to_string()),
                check_out: Some("17:00".to_string()),
                status: None,
            })
            .unwrap();
        }

        let january = DateRange {
            start: date("2026-01-01"),
            end: date("2026-01-31"),
        };
        assert_eq!(repo.in_range(None, &january).unwrap().len(), 2);
        assert_eq!(repo.in_range(Some("stf_001"), &january).unwrap().len(), 1);
    }

    #[test]
    fn test_salary_upsert_is_idempotent() {
        let repo = MemorySalaryConfigRepository::new();
        repo.upsert(SalaryConfig {
            staff_id: "stf_001".to_string(),
            salary_type: SalaryType::Hourly,
            amount: Decimal::new(20_000, 0),
        })
        .unwrap();
        repo.upsert(SalaryConfig {
            staff_id: "stf_001".to_string(),
            salary_type: SalaryType::Hourly,
            amount: Decimal::new(25_000, 0),
        })
        .unwrap();

        let stored = repo.get("stf_001").unwrap().unwrap();
        assert_eq!(stored.amount, Decimal::new(25_000, 0));
        // Exactly one row survives.
        assert_eq!(lock(&repo.rows).unwrap().len(), 1);
    }
}

//! Core data models for the workforce scheduling and payroll engine.
//!
//! This module contains all the domain models used throughout the engine.

mod attendance;
mod period;
mod roster;
mod salary;
mod shift_template;
mod staff;

pub use attendance::AttendanceRecord;
pub use period::{DateRange, PayrollPeriod};
pub use roster::{AdmittedAssignment, RosterAssignment};
pub use salary::{PayrollLine, SalaryConfig, SalaryType, UNCONFIGURED_SALARY_LABEL};
pub use shift_template::ShiftTemplate;
pub use staff::{Branch, Staff, UNASSIGNED_BRANCH_LABEL};

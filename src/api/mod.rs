//! HTTP API module for the workforce engine.
//!
//! This module provides the REST endpoints for roster admission, shift
//! template lifecycle, timesheet reporting, payroll reporting and salary
//! configuration.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{AssignmentBody, PeriodQuery, SalaryConfigBody, ShiftTemplateBody};
pub use response::ApiError;
pub use state::AppState;

//! Request types for the workforce engine API.
//!
//! Wire field names are camelCase for compatibility with the existing
//! frontend consumers. Punch and template times arrive as raw "HH:MM"
//! strings and are parsed here, so a bad value becomes a
//! [`crate::error::EngineError::Validation`] rather than a serde rejection.

use chrono::{NaiveDate, NaiveTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::engine::{AssignmentRequest, NewShiftTemplate, parse_clock};
use crate::error::{EngineError, EngineResult};
use crate::models::SalaryType;

/// Request body for `POST /api/roster/assignments`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssignmentBody {
    /// The staff member to assign.
    pub staff_id: String,
    /// The shift template to work.
    pub shift_template_id: String,
    /// The calendar date of the shift.
    pub date: NaiveDate,
    /// The branch the shift is worked at, if any.
    #[serde(default)]
    pub branch_id: Option<String>,
}

impl From<AssignmentBody> for AssignmentRequest {
    fn from(body: AssignmentBody) -> Self {
        AssignmentRequest {
            staff_id: body.staff_id,
            shift_template_id: body.shift_template_id,
            date: body.date,
            branch_id: body.branch_id,
        }
    }
}

/// Request body for `POST /api/shift-templates`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShiftTemplateBody {
    /// Display name.
    pub name: String,
    /// Wall-clock start, "HH:MM".
    pub start: String,
    /// Wall-clock end, "HH:MM".
    pub end: String,
    /// Maximum concurrent assignments per calendar date.
    pub max_capacity: u32,
}

impl ShiftTemplateBody {
    /// Parses the wall-clock fields into a validated template draft.
    pub fn into_new_template(self) -> EngineResult<NewShiftTemplate> {
        let start = parse_time_field("start", &self.start)?;
        let end = parse_time_field("end", &self.end)?;
        Ok(NewShiftTemplate {
            name: self.name,
            start,
            end,
            max_capacity: self.max_capacity,
        })
    }
}

fn parse_time_field(field: &str, value: &str) -> EngineResult<NaiveTime> {
    parse_clock(value).ok_or_else(|| EngineError::Validation {
        field: field.to_string(),
        message: format!("'{}' is not a valid HH:MM time", value),
    })
}

/// Request body for `PUT /api/salary-configs/{staff_id}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SalaryConfigBody {
    /// "hourly" or "monthly".
    pub salary_type: String,
    /// Hourly rate or fixed monthly figure.
    pub amount: Decimal,
}

impl SalaryConfigBody {
    /// Validates the body into a (type, amount) pair.
    pub fn into_parts(self) -> EngineResult<(SalaryType, Decimal)> {
        let salary_type: SalaryType = self.salary_type.parse()?;
        if self.amount <= Decimal::ZERO {
            return Err(EngineError::Validation {
                field: "amount".to_string(),
                message: "must be positive".to_string(),
            });
        }
        Ok((salary_type, self.amount))
    }
}

/// Query parameters shared by the timesheet and payroll report endpoints.
///
/// When `month`/`year` are omitted, the report defaults to the current UTC
/// month and year.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PeriodQuery {
    /// Month (1-12); defaults to the current month.
    pub month: Option<u32>,
    /// Year; defaults to the current year.
    pub year: Option<i32>,
    /// Restrict to one staff member.
    pub staff_id: Option<String>,
    /// Restrict to staff of one branch.
    pub branch_id: Option<String>,
}

//! Salary configuration and payroll line models.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::EngineError;

/// Wire label for staff without any salary configuration. A normal state for
/// newly hired staff, not an error.
pub const UNCONFIGURED_SALARY_LABEL: &str = "Chưa cấu hình";

/// The two-tier salary typology.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SalaryType {
    /// Pay proportional to aggregated hours worked in the period.
    Hourly,
    /// Fixed pay independent of hours worked.
    Monthly,
}

impl SalaryType {
    /// The wire label for this salary type, fixed for compatibility with
    /// existing report consumers.
    pub fn label(&self) -> &'static str {
        match self {
            SalaryType::Hourly => "Theo giờ",
            SalaryType::Monthly => "Theo tháng",
        }
    }
}

impl FromStr for SalaryType {
    type Err = EngineError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "hourly" => Ok(SalaryType::Hourly),
            "monthly" => Ok(SalaryType::Monthly),
            other => Err(EngineError::Validation {
                field: "salary_type".to_string(),
                message: format!("'{}' is not one of: hourly, monthly", other),
            }),
        }
    }
}

/// Salary configuration for one staff member. At most one active config per
/// staff; writes go through upsert, so the latest amount always wins.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SalaryConfig {
    /// The staff member this configuration applies to.
    pub staff_id: String,
    /// Hourly or fixed-monthly.
    pub salary_type: SalaryType,
    /// Hourly rate or fixed monthly figure, in whole currency units.
    pub amount: Decimal,
}

/// One computed payroll row. Derived and request-scoped: computed fresh on
/// each query, never cached or stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PayrollLine {
    /// The staff member's identifier.
    pub id: String,
    /// The staff member's display name.
    pub name: String,
    /// The staff member's job role.
    pub role: String,
    /// Resolved branch name, or the unassigned-branch label.
    pub branch_name: String,
    /// Salary type label: "Theo giờ", "Theo tháng" or "Chưa cấu hình".
    pub salary_type: String,
    /// Configured hourly rate or monthly amount; zero when unconfigured.
    pub base_amount: Decimal,
    /// Aggregated hours worked in the period, one decimal place.
    pub total_hours: Decimal,
    /// The final payable amount, rounded to the nearest whole currency unit.
    pub final_salary: Decimal,
}

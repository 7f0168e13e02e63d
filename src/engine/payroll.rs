//! Payroll computation.
//!
//! Combines each staff member's aggregated hours for a period with their
//! salary configuration to produce a final payable amount. Dispatch is on
//! the salary type: hourly pay is hours times rate, monthly pay is the fixed
//! figure regardless of hours, and an absent configuration yields zero with
//! the unconfigured label — a normal state for newly hired staff, not an
//! error.

use std::sync::Arc;

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::EngineResult;
use crate::models::{
    PayrollLine, PayrollPeriod, SalaryConfig, SalaryType, Staff, UNCONFIGURED_SALARY_LABEL,
};
use crate::store::{
    AttendanceRepository, BranchRepository, SalaryConfigRepository, StaffRepository,
};

use super::time_accounting::{DataQualityNote, sum_row_hours};
use super::branch_display;

/// Computes one payroll line from a staff member's configuration and
/// aggregated hours.
///
/// Pure function of its inputs: identical (config, hours) always produce an
/// identical line. The final amount is rounded to the nearest whole currency
/// unit, midpoint away from zero.
///
/// # Examples
///
/// ```
/// use rust_decimal::Decimal;
/// use workforce_engine::engine::compute_line;
/// use workforce_engine::models::{SalaryConfig, SalaryType, Staff};
///
/// let staff = Staff {
///     id: "stf_001".to_string(),
///     name: "Nguyễn Văn An".to_string(),
///     role: "Phục vụ".to_string(),
///     phone: None,
///     status: "Đang làm".to_string(),
///     avatar: None,
///     branch_id: None,
/// };
/// let config = SalaryConfig {
///     staff_id: "stf_001".to_string(),
///     salary_type: SalaryType::Hourly,
///     amount: Decimal::new(25_000, 0),
/// };
///
/// let line = compute_line(&staff, "Chi nhánh Quận 1", Some(&config), Decimal::new(1600, 1));
/// assert_eq!(line.final_salary, Decimal::new(4_000_000, 0));
/// ```
pub fn compute_line(
    staff: &Staff,
    branch_name: &str,
    config: Option<&SalaryConfig>,
    total_hours: Decimal,
) -> PayrollLine {
    let (salary_type, base_amount, final_salary) = match config {
        Some(config) => {
            let raw = match config.salary_type {
                SalaryType::Hourly => total_hours * config.amount,
                SalaryType::Monthly => config.amount,
            };
            (
                config.salary_type.label().to_string(),
                config.amount,
                raw.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero),
            )
        }
        None => (
            UNCONFIGURED_SALARY_LABEL.to_string(),
            Decimal::ZERO,
            Decimal::ZERO,
        ),
    };

    PayrollLine {
        id: staff.id.clone(),
        name: staff.name.clone(),
        role: staff.role.clone(),
        branch_name: branch_name.to_string(),
        salary_type,
        base_amount,
        total_hours,
        final_salary,
    }
}

/// A full payroll report for one period.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PayrollReport {
    /// The month the report covers (1-12).
    pub month: u32,
    /// The year the report covers.
    pub year: i32,
    /// One line per staff member.
    pub lines: Vec<PayrollLine>,
    /// Attendance rows that degraded to zero hours while aggregating.
    pub quality_notes: Vec<DataQualityNote>,
}

/// Builds payroll reports by joining attendance totals with salary
/// configuration.
pub struct PayrollCalculator {
    staff: Arc<dyn StaffRepository>,
    branches: Arc<dyn BranchRepository>,
    attendance: Arc<dyn AttendanceRepository>,
    salary: Arc<dyn SalaryConfigRepository>,
}

impl PayrollCalculator {
    /// Creates a calculator over the given repositories.
    pub fn new(
        staff: Arc<dyn StaffRepository>,
        branches: Arc<dyn BranchRepository>,
        attendance: Arc<dyn AttendanceRepository>,
        salary: Arc<dyn SalaryConfigRepository>,
    ) -> Self {
        Self {
            staff,
            branches,
            attendance,
            salary,
        }
    }

    /// Computes the payroll report for every staff member over `period`.
    ///
    /// Attendance rows are restricted to the period's calendar month before
    /// totals are computed. Nothing is cached: each call recomputes from the
    /// stores, so the result is reproducible for unchanged data.
    pub fn report(&self, period: &PayrollPeriod) -> EngineResult<PayrollReport> {
        let range = period.date_range();
        let mut lines = Vec::new();
        let mut quality_notes = Vec::new();

        for staff in self.staff.list()? {
            let rows = self.attendance.in_range(Some(&staff.id), &range)?;
            let total_hours = sum_row_hours(&rows, &mut quality_notes);
            let config = self.salary.get(&staff.id)?;
            let branch_name = branch_display(self.branches.as_ref(), staff.branch_id.as_deref())?;
            lines.push(compute_line(
                &staff,
                &branch_name,
                config.as_ref(),
                total_hours,
            ));
        }

        info!(
            month = period.month(),
            year = period.year(),
            staff_count = lines.len(),
            degraded_rows = quality_notes.len(),
            "payroll report computed"
        );

        Ok(PayrollReport {
            month: period.month(),
            year: period.year(),
            lines,
            quality_notes,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::AttendanceRecord;
    use crate::store::Stores;
    use chrono::NaiveDate;
    use proptest::prelude::*;

    fn staff(id: &str) -> Staff {
        Staff {
            id: id.to_string(),
            name: format!("Staff {}", id),
            role: "Phục vụ".to_string(),
            phone: None,
            status: "Đang làm".to_string(),
            avatar: None,
            branch_id: None,
        }
    }

    fn config(staff_id: &str, salary_type: SalaryType, amount: i64) -> SalaryConfig {
        SalaryConfig {
            staff_id: staff_id.to_string(),
            salary_type,
            amount: Decimal::new(amount, 0),
        }
    }

    #[test]
    fn test_hourly_pay_is_hours_times_rate() {
        let line = compute_line(
            &staff("stf_001"),
            "Chi nhánh Quận 1",
            Some(&config("stf_001", SalaryType::Hourly, 25_000)),
            Decimal::new(1600, 1), // 160.0 h
        );
        assert_eq!(line.final_salary, Decimal::new(4_000_000, 0));
        assert_eq!(line.salary_type, "Theo giờ");
        assert_eq!(line.base_amount, Decimal::new(25_000, 0));
    }

    #[test]
    fn test_monthly_pay_ignores_hours() {
        let line = compute_line(
            &staff("stf_001"),
            "Chi nhánh Quận 1",
            Some(&config("stf_001", SalaryType::Monthly, 8_000_000)),
            Decimal::ZERO,
        );
        assert_eq!(line.final_salary, Decimal::new(8_000_000, 0));
        assert_eq!(line.salary_type, "Theo tháng");
    }

    #[test]
    fn test_absent_config_is_zero_with_label() {
        let line = compute_line(&staff("stf_001"), "Chi nhánh Quận 1", None, Decimal::new(40, 0));
        assert_eq!(line.final_salary, Decimal::ZERO);
        assert_eq!(line.base_amount, Decimal::ZERO);
        assert_eq!(line.salary_type, UNCONFIGURED_SALARY_LABEL);
    }

    #[test]
    fn test_fractional_hours_round_to_whole_currency() {
        // 10.5h * 333 = 3496.5 -> 3497 (midpoint away from zero)
        let line = compute_line(
            &staff("stf_001"),
            "Chi nhánh Quận 1",
            Some(&config("stf_001", SalaryType::Hourly, 333)),
            Decimal::new(105, 1),
        );
        assert_eq!(line.final_salary, Decimal::new(3497, 0));
    }

    #[test]
    fn test_report_scopes_attendance_to_period_month() {
        let stores = Stores::in_memory();
        stores.staff.insert(staff("stf_001")).unwrap();
        stores
            .salary
            .upsert(config("stf_001", SalaryType::Hourly, 25_000))
            .unwrap();
        for (day, check_in, check_out) in [
            ("2026-01-15", "08:00", "17:00"), // 9.0 h, in period
            ("2026-02-01", "08:00", "17:00"), // out of period
        ] {
            stores
                .attendance
                .insert(AttendanceRecord {
                    staff_id: "stf_001".to_string(),
                    date: NaiveDate::parse_from_str(day, "%Y-%m-%d").unwrap(),
                    check_in: Some(check_in.to_string()),
                    check_out: Some(check_out.to_string()),
                    status: None,
                })
                .unwrap();
        }

        let calculator = PayrollCalculator::new(
            Arc::clone(&stores.staff),
            Arc::clone(&stores.branches),
            Arc::clone(&stores.attendance),
            Arc::clone(&stores.salary),
        );
        let report = calculator
            .report(&PayrollPeriod::new(1, 2026).unwrap())
            .unwrap();

        assert_eq!(report.lines.len(), 1);
        assert_eq!(report.lines[0].total_hours, Decimal::new(90, 1));
        assert_eq!(report.lines[0].final_salary, Decimal::new(225_000, 0));
    }

    #[test]
    fn test_report_is_reproducible() {
        let stores = Stores::in_memory();
        stores.staff.insert(staff("stf_001")).unwrap();
        stores.staff.insert(staff("stf_002")).unwrap();
        stores
            .salary
            .upsert(config("stf_001", SalaryType::Monthly, 8_000_000))
            .unwrap();

        let calculator = PayrollCalculator::new(
            Arc::clone(&stores.staff),
            Arc::clone(&stores.branches),
            Arc::clone(&stores.attendance),
            Arc::clone(&stores.salary),
        );
        let period = PayrollPeriod::new(1, 2026).unwrap();
        let first = calculator.report(&period).unwrap();
        let second = calculator.report(&period).unwrap();
        assert_eq!(first, second);
    }

    proptest! {
        /// `compute_line` is pure: computing twice from the same inputs
        /// always yields the same line.
        #[test]
        fn prop_compute_line_reproducible(
            tenths_of_hours in 0i64..5_000,
            rate in 0i64..1_000_000,
            hourly in proptest::bool::ANY
        ) {
            let salary_type = if hourly { SalaryType::Hourly } else { SalaryType::Monthly };
            let config = config("stf_x", salary_type, rate);
            let hours = Decimal::new(tenths_of_hours, 1);
            let a = compute_line(&staff("stf_x"), "br", Some(&config), hours);
            let b = compute_line(&staff("stf_x"), "br", Some(&config), hours);
            prop_assert_eq!(&a, &b);
            prop_assert!(a.final_salary >= Decimal::ZERO);
        }
    }
}

//! Payroll period and date range types.

use chrono::{Datelike, Days, Months, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// An inclusive range of calendar dates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    /// First date of the range (inclusive).
    pub start: NaiveDate,
    /// Last date of the range (inclusive).
    pub end: NaiveDate,
}

impl DateRange {
    /// Returns true if `date` falls within the range.
    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && date <= self.end
    }
}

/// A (month, year) pair scoping a payroll or timesheet query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayrollPeriod {
    // Invariant: always the first day of the month, established in `new`.
    first_day: NaiveDate,
}

impl PayrollPeriod {
    /// Creates a period for the given calendar month.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::Validation`] when `month` is outside 1..=12.
    pub fn new(month: u32, year: i32) -> EngineResult<Self> {
        match NaiveDate::from_ymd_opt(year, month, 1) {
            Some(first_day) => Ok(Self { first_day }),
            None => Err(EngineError::Validation {
                field: "month".to_string(),
                message: format!("{}-{} is not a valid month", year, month),
            }),
        }
    }

    /// The period for the current UTC month and year.
    ///
    /// This is the documented default when a caller does not specify a period.
    pub fn current() -> Self {
        let today = Utc::now().date_naive();
        Self {
            first_day: today.with_day(1).unwrap_or(today),
        }
    }

    /// The month number (1-12).
    pub fn month(&self) -> u32 {
        self.first_day.month()
    }

    /// The calendar year.
    pub fn year(&self) -> i32 {
        self.first_day.year()
    }

    /// The inclusive date range covering the whole month.
    pub fn date_range(&self) -> DateRange {
        let end = self
            .first_day
            .checked_add_months(Months::new(1))
            .and_then(|next| next.checked_sub_days(Days::new(1)))
            .unwrap_or(self.first_day);
        DateRange {
            start: self.first_day,
            end,
        }
    }
}

//! Error types for the workforce scheduling and payroll engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all failure modes of the scheduling and payroll core. Callers can
//! pattern-match on the variant instead of inspecting exception text.
//!
//! Note that a malformed attendance punch is deliberately *not* represented
//! here: dirty historical time data degrades a single data point to zero and
//! is reported through [`crate::engine::DataQualityNote`], never as a failure
//! of the overall operation.

use chrono::NaiveDate;
use thiserror::Error;
use uuid::Uuid;

/// The main error type for the workforce engine.
///
/// # Example
///
/// ```
/// use workforce_engine::error::EngineError;
///
/// let error = EngineError::StaffNotFound { id: "stf_999".to_string() };
/// assert_eq!(error.to_string(), "Staff not found: stf_999");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// The referenced staff member does not exist.
    #[error("Staff not found: {id}")]
    StaffNotFound {
        /// The staff identifier that did not resolve.
        id: String,
    },

    /// The referenced shift template does not exist.
    #[error("Shift template not found: {id}")]
    TemplateNotFound {
        /// The shift template identifier that did not resolve.
        id: String,
    },

    /// The referenced roster assignment does not exist.
    #[error("Roster assignment not found: {id}")]
    AssignmentNotFound {
        /// The assignment identifier that did not resolve.
        id: Uuid,
    },

    /// A request field failed validation (empty name, non-positive amount, ...).
    #[error("Invalid {field}: {message}")]
    Validation {
        /// The field that was invalid.
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },

    /// The staff member already holds a shift on the requested date.
    #[error("Staff '{staff_id}' is already assigned a shift on {date}")]
    AlreadyAssigned {
        /// The staff member with the existing assignment.
        staff_id: String,
        /// The calendar date that is already taken.
        date: NaiveDate,
    },

    /// The shift template has no open slot left on the requested date.
    #[error("Shift '{shift_template_id}' on {date} is at capacity ({max_capacity})")]
    CapacityExceeded {
        /// The shift template that is full.
        shift_template_id: String,
        /// The date on which capacity ran out.
        date: NaiveDate,
        /// The configured maximum for the template.
        max_capacity: u32,
    },

    /// A new shift template's wall-clock interval collides with an existing one.
    #[error("Shift template interval overlaps existing template '{other}'")]
    OverlappingTemplate {
        /// The name of the template that already covers the interval.
        other: String,
    },

    /// The shift template is still referenced by roster assignments.
    #[error("Shift template '{id}' is referenced by {count} roster assignment(s)")]
    TemplateInUse {
        /// The template whose deletion was blocked.
        id: String,
        /// How many assignments still reference it.
        count: usize,
    },

    /// The backing store failed; the operation was rolled back and may be retried.
    #[error("Storage error: {message}")]
    TransientStore {
        /// A description of the store failure.
        message: String,
    },

    /// Settings file was not found at the specified path.
    #[error("Settings file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Settings file could not be parsed.
    #[error("Failed to parse settings file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_staff_not_found_displays_id() {
        let error = EngineError::StaffNotFound {
            id: "stf_042".to_string(),
        };
        assert_eq!(error.to_string(), "Staff not found: stf_042");
    }

    #[test]
    fn test_capacity_exceeded_displays_limit() {
        let error = EngineError::CapacityExceeded {
            shift_template_id: "tpl_morning".to_string(),
            date: NaiveDate::from_ymd_opt(2026, 1, 15).unwrap(),
            max_capacity: 2,
        };
        assert_eq!(
            error.to_string(),
            "Shift 'tpl_morning' on 2026-01-15 is at capacity (2)"
        );
    }

    #[test]
    fn test_already_assigned_displays_staff_and_date() {
        let error = EngineError::AlreadyAssigned {
            staff_id: "stf_001".to_string(),
            date: NaiveDate::from_ymd_opt(2026, 1, 15).unwrap(),
        };
        assert_eq!(
            error.to_string(),
            "Staff 'stf_001' is already assigned a shift on 2026-01-15"
        );
    }

    #[test]
    fn test_validation_displays_field_and_message() {
        let error = EngineError::Validation {
            field: "max_capacity".to_string(),
            message: "must be at least 1".to_string(),
        };
        assert_eq!(error.to_string(), "Invalid max_capacity: must be at least 1");
    }

    #[test]
    fn test_template_in_use_displays_count() {
        let error = EngineError::TemplateInUse {
            id: "tpl_evening".to_string(),
            count: 3,
        };
        assert_eq!(
            error.to_string(),
            "Shift template 'tpl_evening' is referenced by 3 roster assignment(s)"
        );
    }

    #[test]
    fn test_errors_implement_std_error() {
        fn assert_error<T: std::error::Error>() {}
        assert_error::<EngineError>();
    }

    #[test]
    fn test_error_propagation_with_question_mark() {
        fn returns_not_found() -> EngineResult<()> {
            Err(EngineError::StaffNotFound {
                id: "stf_001".to_string(),
            })
        }

        fn propagates_error() -> EngineResult<()> {
            returns_not_found()?;
            Ok(())
        }

        assert!(propagates_error().is_err());
    }
}

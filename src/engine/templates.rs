//! Shift template lifecycle rules.
//!
//! Template creation enforces the wall-clock overlap invariant: a new
//! `[start, end)` interval must not intersect any existing template's
//! interval. Comparison is time-of-day only, not date-aware. Overnight
//! templates (end at or before start) are rejected unless explicitly enabled
//! in [`Settings`]; when enabled, each template is compared as its
//! midnight-split interval pieces.
//!
//! Deletion is blocked while any roster assignment references the template.

use chrono::NaiveTime;
use tracing::info;
use uuid::Uuid;

use crate::config::Settings;
use crate::error::{EngineError, EngineResult};
use crate::models::ShiftTemplate;
use crate::store::{RosterRepository, ShiftTemplateRepository};

/// The fields of a shift template before an identifier is allocated.
#[derive(Debug, Clone)]
pub struct NewShiftTemplate {
    /// Display name.
    pub name: String,
    /// Wall-clock start of the interval.
    pub start: NaiveTime,
    /// Wall-clock end of the interval.
    pub end: NaiveTime,
    /// Maximum concurrent assignments per calendar date.
    pub max_capacity: u32,
}

fn ranges_intersect(a: &[(u32, u32)], b: &[(u32, u32)]) -> bool {
    // Half-open intervals: [s, e) and [s', e') intersect iff s < e' && s' < e.
    a.iter()
        .any(|&(s1, e1)| b.iter().any(|&(s2, e2)| s1 < e2 && s2 < e1))
}

/// Validates and persists a new shift template.
///
/// # Errors
///
/// [`EngineError::Validation`] for an empty name, zero capacity, a
/// zero-length interval or a midnight-crossing interval while overnight
/// templates are disabled; [`EngineError::OverlappingTemplate`] when the
/// interval intersects an existing template.
pub fn create_template(
    templates: &dyn ShiftTemplateRepository,
    settings: &Settings,
    new: NewShiftTemplate,
) -> EngineResult<ShiftTemplate> {
    if new.name.trim().is_empty() {
        return Err(EngineError::Validation {
            field: "name".to_string(),
            message: "must not be empty".to_string(),
        });
    }
    if new.max_capacity == 0 {
        return Err(EngineError::Validation {
            field: "max_capacity".to_string(),
            message: "must be at least 1".to_string(),
        });
    }
    if new.start == new.end {
        return Err(EngineError::Validation {
            field: "end".to_string(),
            message: "interval must not be zero-length".to_string(),
        });
    }

    let candidate = ShiftTemplate {
        id: format!("tpl_{}", Uuid::new_v4().simple()),
        name: new.name,
        start: new.start,
        end: new.end,
        max_capacity: new.max_capacity,
    };

    if candidate.is_overnight() && !settings.allow_overnight_templates {
        return Err(EngineError::Validation {
            field: "end".to_string(),
            message: "overnight templates are disabled".to_string(),
        });
    }

    let candidate_ranges = candidate.minute_ranges();
    for existing in templates.list()? {
        if ranges_intersect(&candidate_ranges, &existing.minute_ranges()) {
            return Err(EngineError::OverlappingTemplate {
                other: existing.name,
            });
        }
    }

    templates.insert(candidate.clone())?;
    info!(
        template_id = %candidate.id,
        name = %candidate.name,
        "shift template created"
    );
    Ok(candidate)
}

/// Deletes a shift template, refusing while roster assignments reference it.
///
/// # Errors
///
/// [`EngineError::TemplateNotFound`] for an unknown identifier,
/// [`EngineError::TemplateInUse`] while assignments reference the template.
pub fn delete_template(
    templates: &dyn ShiftTemplateRepository,
    roster: &dyn RosterRepository,
    id: &str,
) -> EngineResult<()> {
    if templates.get(id)?.is_none() {
        return Err(EngineError::TemplateNotFound { id: id.to_string() });
    }

    let references = roster.referencing_template(id)?;
    if references > 0 {
        return Err(EngineError::TemplateInUse {
            id: id.to_string(),
            count: references,
        });
    }

    templates.delete(id)?;
    info!(template_id = %id, "shift template deleted");
    Ok(())
}

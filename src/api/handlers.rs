//! HTTP request handlers for the workforce engine API.
//!
//! This module contains the handler functions for all API endpoints.

use axum::{
    Json, Router,
    extract::{Path, Query, State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post, put},
};
use tracing::{info, warn};
use uuid::Uuid;

use crate::engine::{TimesheetFilter, create_template, delete_template};
use crate::error::EngineResult;
use crate::models::{PayrollPeriod, SalaryConfig};

use super::request::{AssignmentBody, PeriodQuery, SalaryConfigBody, ShiftTemplateBody};
use super::response::{ApiError, ApiErrorResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/api/roster/assignments", post(create_assignment))
        .route("/api/roster/assignments/:id", axum::routing::delete(delete_assignment))
        .route("/api/shift-templates", post(create_template_handler).get(list_templates))
        .route(
            "/api/shift-templates/:id",
            axum::routing::delete(delete_template_handler),
        )
        .route("/api/timesheets", get(timesheet_report))
        .route("/api/payroll", get(payroll_report))
        .route("/api/salary-configs/:staff_id", put(upsert_salary_config))
        .with_state(state)
}

/// Resolves the requested period, defaulting missing parts to the current
/// UTC month/year.
fn resolve_period(query: &PeriodQuery) -> EngineResult<PayrollPeriod> {
    let current = PayrollPeriod::current();
    PayrollPeriod::new(
        query.month.unwrap_or_else(|| current.month()),
        query.year.unwrap_or_else(|| current.year()),
    )
}

fn engine_error_response(correlation_id: Uuid, err: crate::error::EngineError) -> Response {
    warn!(correlation_id = %correlation_id, error = %err, "request failed");
    let response: ApiErrorResponse = err.into();
    response.into_response()
}

/// Handler for POST /api/roster/assignments.
///
/// Runs the admission checks and persists the assignment atomically with
/// them, echoing back the enriched record.
async fn create_assignment(
    State(state): State<AppState>,
    payload: Result<Json<AssignmentBody>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "processing roster admission");

    let body = match payload {
        Ok(Json(body)) => body,
        Err(rejection) => {
            warn!(correlation_id = %correlation_id, error = %rejection.body_text(), "bad request body");
            let error = match rejection {
                JsonRejection::JsonDataError(err) => {
                    let body_text = err.body_text();
                    if body_text.contains("missing field") {
                        ApiError::new("VALIDATION_ERROR", body_text)
                    } else {
                        ApiError::malformed_json(body_text)
                    }
                }
                JsonRejection::JsonSyntaxError(err) => {
                    ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
                }
                JsonRejection::MissingJsonContentType(_) => {
                    ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
                }
                _ => ApiError::malformed_json("Failed to parse request body"),
            };
            return (StatusCode::BAD_REQUEST, Json(error)).into_response();
        }
    };

    match state.roster_validator().validate_and_admit(body.into()) {
        Ok(admitted) => {
            info!(
                correlation_id = %correlation_id,
                assignment_id = %admitted.id,
                "admission succeeded"
            );
            (StatusCode::CREATED, Json(admitted)).into_response()
        }
        Err(err) => engine_error_response(correlation_id, err),
    }
}

/// Handler for DELETE /api/roster/assignments/{id}.
async fn delete_assignment(State(state): State<AppState>, Path(id): Path<Uuid>) -> Response {
    let correlation_id = Uuid::new_v4();
    match state.stores().roster.delete(id) {
        Ok(()) => {
            info!(correlation_id = %correlation_id, assignment_id = %id, "assignment deleted");
            StatusCode::NO_CONTENT.into_response()
        }
        Err(err) => engine_error_response(correlation_id, err),
    }
}

/// Handler for POST /api/shift-templates.
async fn create_template_handler(
    State(state): State<AppState>,
    Json(body): Json<ShiftTemplateBody>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    let result = body
        .into_new_template()
        .and_then(|draft| create_template(state.stores().templates.as_ref(), state.settings(), draft));
    match result {
        Ok(template) => (StatusCode::CREATED, Json(template)).into_response(),
        Err(err) => engine_error_response(correlation_id, err),
    }
}

/// Handler for GET /api/shift-templates.
async fn list_templates(State(state): State<AppState>) -> Response {
    let correlation_id = Uuid::new_v4();
    match state.stores().templates.list() {
        Ok(templates) => Json(templates).into_response(),
        Err(err) => engine_error_response(correlation_id, err),
    }
}

/// Handler for DELETE /api/shift-templates/{id}.
async fn delete_template_handler(State(state): State<AppState>, Path(id): Path<String>) -> Response {
    let correlation_id = Uuid::new_v4();
    match delete_template(
        state.stores().templates.as_ref(),
        state.stores().roster.as_ref(),
        &id,
    ) {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(err) => engine_error_response(correlation_id, err),
    }
}

/// Handler for GET /api/timesheets.
///
/// Defaults to the current month/year when the period is unspecified.
async fn timesheet_report(
    State(state): State<AppState>,
    Query(query): Query<PeriodQuery>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    let filter = TimesheetFilter {
        staff_id: query.staff_id.clone(),
        branch_id: query.branch_id.clone(),
    };
    let result = resolve_period(&query).and_then(|period| {
        state
            .time_accounting()
            .build_timesheet(&filter, &period.date_range())
    });
    match result {
        Ok(report) => {
            info!(
                correlation_id = %correlation_id,
                entries = report.entries.len(),
                degraded_rows = report.quality_notes.len(),
                "timesheet built"
            );
            Json(report).into_response()
        }
        Err(err) => engine_error_response(correlation_id, err),
    }
}

/// Handler for GET /api/payroll.
///
/// Defaults to the current month/year when the period is unspecified.
async fn payroll_report(State(state): State<AppState>, Query(query): Query<PeriodQuery>) -> Response {
    let correlation_id = Uuid::new_v4();
    let result =
        resolve_period(&query).and_then(|period| state.payroll_calculator().report(&period));
    match result {
        Ok(report) => Json(report).into_response(),
        Err(err) => engine_error_response(correlation_id, err),
    }
}

/// Handler for PUT /api/salary-configs/{staff_id}.
///
/// Upsert semantics: at most one configuration per staff member, the latest
/// write wins.
async fn upsert_salary_config(
    State(state): State<AppState>,
    Path(staff_id): Path<String>,
    Json(body): Json<SalaryConfigBody>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    let result = body.into_parts().and_then(|(salary_type, amount)| {
        // The staff member must exist; salary for unknown staff is a 404.
        match state.stores().staff.get(&staff_id)? {
            Some(_) => state.stores().salary.upsert(SalaryConfig {
                staff_id: staff_id.clone(),
                salary_type,
                amount,
            }),
            None => Err(crate::error::EngineError::StaffNotFound {
                id: staff_id.clone(),
            }),
        }
    });
    match result {
        Ok(config) => {
            info!(correlation_id = %correlation_id, staff_id = %config.staff_id, "salary config upserted");
            Json(config).into_response()
        }
        Err(err) => engine_error_response(correlation_id, err),
    }
}

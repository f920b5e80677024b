use std::sync::Arc;

use axum::body::Bytes;
use axum::extract::{Path, State};
use axum::http::Method;
use axum::Json;
use serde::Serialize;

use crate::clock::Clock;
use crate::errors::AppError;
use crate::models::{BookingField, BookingSubmission, ValidationResult};
use crate::services::{submission, validation};
use crate::state::AppState;

#[derive(Serialize)]
pub struct SubmitResponse {
    message: &'static str,
    response: String,
}

// ANY /.netlify/functions/submitBooking
pub async fn submit_booking(
    State(state): State<Arc<AppState>>,
    method: Method,
    body: Bytes,
) -> Result<Json<SubmitResponse>, AppError> {
    if method != Method::POST {
        tracing::warn!(%method, "booking endpoint called with wrong method");
        return Err(AppError::MethodNotAllowed);
    }

    let input: BookingSubmission = serde_json::from_slice(&body).map_err(|e| {
        tracing::info!(error = %e, "unreadable booking payload");
        AppError::InvalidPayload(e.to_string())
    })?;

    let now = state.clock.now_for(input.tz_offset);
    let response =
        submission::submit_booking(state.relay.as_ref(), &state.gate, &input.booking, now).await?;

    Ok(Json(SubmitResponse {
        message: "Booking submitted!",
        response,
    }))
}

#[derive(Serialize)]
pub struct ValidateResponse {
    valid: bool,
    focus: Option<&'static str>,
    errors: ValidationResult,
}

// POST /api/validate
pub async fn validate_form(
    State(state): State<Arc<AppState>>,
    Json(input): Json<BookingSubmission>,
) -> Json<ValidateResponse> {
    let now = state.clock.now_for(input.tz_offset);
    let result = validation::validate_booking(&input.booking.trimmed(), now);
    Json(ValidateResponse {
        valid: result.is_valid(),
        focus: result.focus_target().map(|f| f.as_str()),
        errors: result,
    })
}

#[derive(Serialize)]
pub struct FieldResponse {
    field: &'static str,
    message: String,
}

// POST /api/validate/:field
pub async fn validate_one(
    State(state): State<Arc<AppState>>,
    Path(field): Path<String>,
    Json(input): Json<BookingSubmission>,
) -> Result<Json<FieldResponse>, AppError> {
    let field = BookingField::parse(&field)
        .ok_or_else(|| AppError::NotFound(format!("unknown field: {field}")))?;

    let now = state.clock.now_for(input.tz_offset);
    let message = validation::validate_field(field, &input.booking.trimmed(), now);
    Ok(Json(FieldResponse {
        field: field.as_str(),
        message,
    }))
}

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use crate::models::ValidationResult;

pub const SUBMIT_FAILED_MESSAGE: &str = "Error submitting booking";

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("booking failed validation")]
    Validation(ValidationResult),

    #[error("relay error: {0}")]
    Transport(String),

    #[error("Method Not Allowed")]
    MethodNotAllowed,

    #[error("invalid booking payload: {0}")]
    InvalidPayload(String),

    #[error("a booking submission is already in progress")]
    SubmissionInFlight,

    #[error("configuration error: {0}")]
    Config(String),

    #[error("not found: {0}")]
    NotFound(String),

    #[error("bad request: {0}")]
    BadRequest(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::Validation(result) => {
                let body = serde_json::json!({
                    "message": "Invalid booking",
                    "errors": result,
                    "focus": result.focus_target().map(|f| f.as_str()),
                });
                (StatusCode::UNPROCESSABLE_ENTITY, axum::Json(body)).into_response()
            }
            AppError::MethodNotAllowed => {
                (StatusCode::METHOD_NOT_ALLOWED, "Method Not Allowed").into_response()
            }
            // relay detail stays in the logs
            AppError::Transport(_) => submit_failure(
                StatusCode::INTERNAL_SERVER_ERROR,
                "booking relay unavailable".to_string(),
            ),
            AppError::InvalidPayload(_) => {
                submit_failure(StatusCode::INTERNAL_SERVER_ERROR, self.to_string())
            }
            AppError::SubmissionInFlight => submit_failure(StatusCode::CONFLICT, self.to_string()),
            AppError::Config(_) => {
                let body = serde_json::json!({ "error": self.to_string() });
                (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(body)).into_response()
            }
            AppError::NotFound(_) => {
                let body = serde_json::json!({ "error": self.to_string() });
                (StatusCode::NOT_FOUND, axum::Json(body)).into_response()
            }
            AppError::BadRequest(_) => {
                let body = serde_json::json!({ "error": self.to_string() });
                (StatusCode::BAD_REQUEST, axum::Json(body)).into_response()
            }
        }
    }
}

fn submit_failure(status: StatusCode, error: String) -> Response {
    let body = serde_json::json!({ "message": SUBMIT_FAILED_MESSAGE, "error": error });
    (status, axum::Json(body)).into_response()
}

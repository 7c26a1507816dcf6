use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use task_core::{
    api::{
        Envelope, FIELD_BAD_FORMAT, FIELD_INCORRECT, INTERNAL_ERROR_DESC, SERVICE_UNAVAILABLE,
        TASK_NOT_FOUND, UNAUTHORIZED,
    },
    Violation,
};

/// Handler failure, rendered as an error envelope.
#[derive(Debug)]
pub enum ApiError {
    /// Undecodable body or malformed path parameter.
    BadFormat(String),
    /// Request decoded but broke a rule.
    Invalid(Violation),
    /// No task with this id.
    NotFound(i64),
    /// Token configured and not presented.
    Unauthorized,
    /// Anything the client cannot fix.
    Internal(anyhow::Error),
}

impl From<Violation> for ApiError {
    fn from(value: Violation) -> Self {
        Self::Invalid(value)
    }
}

impl From<anyhow::Error> for ApiError {
    fn from(value: anyhow::Error) -> Self {
        Self::Internal(value)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body): (StatusCode, Envelope) = match self {
            ApiError::BadFormat(desc) => {
                (StatusCode::BAD_REQUEST, Envelope::error(FIELD_BAD_FORMAT, desc))
            }
            ApiError::Invalid(violation) => (
                StatusCode::BAD_REQUEST,
                Envelope::error(FIELD_INCORRECT, violation.to_string()),
            ),
            ApiError::NotFound(id) => (
                StatusCode::NOT_FOUND,
                Envelope::error(TASK_NOT_FOUND, format!("task {id} not found")),
            ),
            ApiError::Unauthorized => (
                StatusCode::UNAUTHORIZED,
                Envelope::error(UNAUTHORIZED, "missing or invalid authorization token"),
            ),
            ApiError::Internal(err) => {
                tracing::error!(error = %format!("{err:#}"), "request failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Envelope::error(SERVICE_UNAVAILABLE, INTERNAL_ERROR_DESC),
                )
            }
        };
        (status, Json(body)).into_response()
    }
}

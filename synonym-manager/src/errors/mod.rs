//! Mapping of failures to response envelopes.
//!
//! Every endpoint answers with the same envelope shape. On failure `data` is
//! empty, `message` is the error string, and `code` equals the HTTP status chosen
//! from the error kind.

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::Json;
use synonym_manager_repository::{ErrorKind, SynonymMapError};
use synonym_manager_shared::ResponseEnvelope;
use tracing::error;

/// Response returned by every handler.
pub type ApiResponse = (StatusCode, Json<ResponseEnvelope>);

/// HTTP status for an error kind.
pub fn status_for(kind: ErrorKind) -> StatusCode {
    match kind {
        ErrorKind::Validation => StatusCode::UNPROCESSABLE_ENTITY,
        ErrorKind::NotFound => StatusCode::NOT_FOUND,
        ErrorKind::Gateway => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// Build the envelope for a failed operation and log it.
pub fn error_response(operation: &str, err: &SynonymMapError) -> ApiResponse {
    let status = status_for(err.kind());
    error!(operation, status = status.as_u16(), error = %err, "Request failed");
    (
        status,
        Json(ResponseEnvelope::error(status.as_u16(), err.to_string())),
    )
}

/// Build the envelope for a body that could not be parsed.
pub fn rejection_response(operation: &str, rejection: &JsonRejection) -> ApiResponse {
    let status = rejection.status();
    let message = rejection.body_text();
    error!(operation, status = status.as_u16(), error = %message, "Rejected request body");
    (status, Json(ResponseEnvelope::error(status.as_u16(), message)))
}

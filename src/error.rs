use actix_web::{error, http::StatusCode, HttpRequest, HttpResponse};
use thiserror::Error;
use validator::ValidationErrors;

use crate::models::ErrorResponse;

/// Failures of a match operation
///
/// "No candidates" and "no usable candidate" are outcomes, not errors; see
/// [`crate::models::MatchOutcome`].
#[derive(Debug, Error)]
pub enum MatchError {
    #[error("Invalid currentUser data: {0}")]
    InvalidRequest(String),

    #[error("Computation failed: {0}")]
    Computation(String),
}

impl From<ValidationErrors> for MatchError {
    fn from(errors: ValidationErrors) -> Self {
        MatchError::InvalidRequest(errors.to_string())
    }
}

/// Errors surfaced by the HTTP layer
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Invalid JSON: {0}")]
    InvalidJson(String),

    #[error(transparent)]
    Match(#[from] MatchError),
}

impl ApiError {
    fn code(&self) -> &'static str {
        match self {
            ApiError::InvalidJson(_) => "invalid_json",
            ApiError::Match(MatchError::InvalidRequest(_)) => "invalid_request",
            ApiError::Match(MatchError::Computation(_)) => "internal_error",
        }
    }
}

impl error::ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::InvalidJson(_) | ApiError::Match(MatchError::InvalidRequest(_)) => {
                StatusCode::BAD_REQUEST
            }
            ApiError::Match(MatchError::Computation(_)) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        HttpResponse::build(status).json(ErrorResponse {
            error: self.code().to_string(),
            message: self.to_string(),
            status_code: status.as_u16(),
        })
    }
}

/// Handle JSON payload errors
pub fn handle_json_payload_error(err: error::JsonPayloadError, req: &HttpRequest) -> actix_web::Error {
    tracing::info!("JSON payload error on {}: {}", req.path(), err);
    ApiError::InvalidJson(err.to_string()).into()
}

// rest/error.rs — API error taxonomy mapped to HTTP responses.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Client-facing request errors. Every variant is terminal for the
/// request: no retries, no partial application, no rollback needed since
/// mutations only happen after the existence check succeeds.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The addressed entity does not exist at lookup time. 404.
    #[error("{0}")]
    NotFound(&'static str),
    /// A store precondition failed (e.g. no user registered yet). 400.
    #[error("{0}")]
    BadRequest(&'static str),
    /// A value failed enum/shape validation. 422.
    #[error("{0}")]
    Validation(String),
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status(), Json(json!({ "error": self.to_string() }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_codes_match_the_taxonomy() {
        assert_eq!(
            ApiError::NotFound("task not found").status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            ApiError::BadRequest("a user must be created first").status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::Validation("bad status".to_string()).status(),
            StatusCode::UNPROCESSABLE_ENTITY
        );
    }

    #[test]
    fn display_is_the_bare_message() {
        assert_eq!(
            ApiError::NotFound("no users registered").to_string(),
            "no users registered"
        );
    }
}

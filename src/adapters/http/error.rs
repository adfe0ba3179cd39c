//! Shared HTTP error body and status mapping.

use axum::http::StatusCode;
use serde::Serialize;

use crate::domain::foundation::ErrorCode;

/// JSON error body returned by every endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
}

impl ErrorResponse {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
        }
    }
}

/// Maps a domain error code to its HTTP status.
pub fn status_for(code: ErrorCode) -> StatusCode {
    match code {
        ErrorCode::AccountNotFound | ErrorCode::PlanNotFound => StatusCode::NOT_FOUND,
        ErrorCode::ValidationFailed
        | ErrorCode::AmountNotPositive
        | ErrorCode::AmountBelowMinimum
        | ErrorCode::NoPlanAssigned => StatusCode::BAD_REQUEST,
        ErrorCode::DatabaseError | ErrorCode::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_codes_map_to_404() {
        assert_eq!(status_for(ErrorCode::AccountNotFound), StatusCode::NOT_FOUND);
        assert_eq!(status_for(ErrorCode::PlanNotFound), StatusCode::NOT_FOUND);
    }

    #[test]
    fn boundary_rejections_map_to_400() {
        assert_eq!(status_for(ErrorCode::AmountNotPositive), StatusCode::BAD_REQUEST);
        assert_eq!(status_for(ErrorCode::AmountBelowMinimum), StatusCode::BAD_REQUEST);
        assert_eq!(status_for(ErrorCode::NoPlanAssigned), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn infrastructure_maps_to_500() {
        assert_eq!(
            status_for(ErrorCode::DatabaseError),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}

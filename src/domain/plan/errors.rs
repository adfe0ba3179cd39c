//! Plan-specific error types.

use crate::domain::foundation::{DomainError, ErrorCode, PlanId, ValidationError};

/// Plan-specific errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlanError {
    /// Plan was not found.
    NotFound(PlanId),

    /// Validation failed.
    ValidationFailed { field: String, message: String },

    /// Infrastructure error.
    Infrastructure(String),
}

impl PlanError {
    pub fn not_found(id: PlanId) -> Self {
        PlanError::NotFound(id)
    }

    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        PlanError::ValidationFailed {
            field: field.into(),
            message: message.into(),
        }
    }

    pub fn infrastructure(message: impl Into<String>) -> Self {
        PlanError::Infrastructure(message.into())
    }

    /// Returns the error code for this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            PlanError::NotFound(_) => ErrorCode::PlanNotFound,
            PlanError::ValidationFailed { .. } => ErrorCode::ValidationFailed,
            PlanError::Infrastructure(_) => ErrorCode::DatabaseError,
        }
    }
}

impl std::fmt::Display for PlanError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PlanError::NotFound(id) => write!(f, "Plan {} not found", id),
            PlanError::ValidationFailed { field, message } => {
                write!(f, "Validation failed on '{}': {}", field, message)
            }
            PlanError::Infrastructure(message) => write!(f, "Infrastructure error: {}", message),
        }
    }
}

impl std::error::Error for PlanError {}

impl From<DomainError> for PlanError {
    fn from(err: DomainError) -> Self {
        PlanError::Infrastructure(err.to_string())
    }
}

impl From<ValidationError> for PlanError {
    fn from(err: ValidationError) -> Self {
        PlanError::validation("plan", err.to_string())
    }
}

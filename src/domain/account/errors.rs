//! Account-specific error types.
//!
//! # HTTP Status Mapping
//!
//! | Error | HTTP Status |
//! |-------|-------------|
//! | NotFound | 404 |
//! | PlanNotFound | 404 |
//! | NoPlanAssigned | 400 |
//! | AmountNotPositive | 400 |
//! | AmountBelowMinimum | 400 |
//! | ValidationFailed | 400 |
//! | Infrastructure | 500 |

use crate::domain::foundation::{AccountId, DomainError, ErrorCode, Money, PlanId, ValidationError};

/// Account-specific errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AccountError {
    /// Account was not found.
    NotFound(AccountId),

    /// Account has no plan assigned, so no obligation can be computed.
    NoPlanAssigned(AccountId),

    /// The plan referenced by the account no longer exists.
    PlanNotFound(PlanId),

    /// Payment amount must be strictly positive.
    AmountNotPositive { amount: Money },

    /// Payment amount is below one installment.
    AmountBelowMinimum { amount: Money, minimum: Money },

    /// Validation failed.
    ValidationFailed { field: String, message: String },

    /// Infrastructure error.
    Infrastructure(String),
}

impl AccountError {
    pub fn not_found(id: AccountId) -> Self {
        AccountError::NotFound(id)
    }

    pub fn no_plan_assigned(id: AccountId) -> Self {
        AccountError::NoPlanAssigned(id)
    }

    pub fn plan_not_found(id: PlanId) -> Self {
        AccountError::PlanNotFound(id)
    }

    pub fn amount_not_positive(amount: Money) -> Self {
        AccountError::AmountNotPositive { amount }
    }

    pub fn amount_below_minimum(amount: Money, minimum: Money) -> Self {
        AccountError::AmountBelowMinimum { amount, minimum }
    }

    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        AccountError::ValidationFailed {
            field: field.into(),
            message: message.into(),
        }
    }

    pub fn infrastructure(message: impl Into<String>) -> Self {
        AccountError::Infrastructure(message.into())
    }

    /// Returns the error code for this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            AccountError::NotFound(_) => ErrorCode::AccountNotFound,
            AccountError::NoPlanAssigned(_) => ErrorCode::NoPlanAssigned,
            AccountError::PlanNotFound(_) => ErrorCode::PlanNotFound,
            AccountError::AmountNotPositive { .. } => ErrorCode::AmountNotPositive,
            AccountError::AmountBelowMinimum { .. } => ErrorCode::AmountBelowMinimum,
            AccountError::ValidationFailed { .. } => ErrorCode::ValidationFailed,
            AccountError::Infrastructure(_) => ErrorCode::DatabaseError,
        }
    }
}

impl std::fmt::Display for AccountError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AccountError::NotFound(id) => write!(f, "Account {} not found", id),
            AccountError::NoPlanAssigned(id) => {
                write!(f, "Account {} has no chit plan assigned", id)
            }
            AccountError::PlanNotFound(id) => write!(f, "Plan {} not found", id),
            AccountError::AmountNotPositive { amount } => {
                write!(f, "Payment amount must be greater than zero, got {}", amount)
            }
            AccountError::AmountBelowMinimum { amount, minimum } => {
                write!(f, "Payment must be at least {}, got {}", minimum, amount)
            }
            AccountError::ValidationFailed { field, message } => {
                write!(f, "Validation failed on '{}': {}", field, message)
            }
            AccountError::Infrastructure(message) => write!(f, "Infrastructure error: {}", message),
        }
    }
}

impl std::error::Error for AccountError {}

impl From<DomainError> for AccountError {
    fn from(err: DomainError) -> Self {
        AccountError::Infrastructure(err.to_string())
    }
}

impl From<ValidationError> for AccountError {
    fn from(err: ValidationError) -> Self {
        AccountError::validation("account", err.to_string())
    }
}

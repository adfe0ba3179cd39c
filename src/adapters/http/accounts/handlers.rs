//! HTTP handlers for account endpoints.
//!
//! These handlers connect Axum routes to application layer command/query handlers.

use std::sync::Arc;

use axum::extract::{Json, Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;

use crate::application::handlers::account::{
    AccountLockRegistry, CloseAccountCommand, CloseAccountHandler, GetAccountStatusHandler,
    GetAccountStatusQuery, GetFinalPayoutHandler, GetFinalPayoutQuery, RegisterAccountCommand,
    RegisterAccountHandler, SubmitPaymentCommand, SubmitPaymentHandler,
};
use crate::domain::account::AccountError;
use crate::domain::foundation::{AccountId, Money};
use crate::ports::{AccountRepository, EventPublisher, PaymentLedger, PlanRepository};

use super::super::error::{status_for, ErrorResponse};
use super::dto::{
    AccountResponse, FinalPayoutResponse, InstallmentStatusParams, InstallmentStatusResponse,
    PaymentHistoryResponse, PaymentResponse, RegisterAccountRequest, SubmitPaymentRequest,
};

/// Shared state for account endpoints.
#[derive(Clone)]
pub struct AccountAppState {
    pub accounts: Arc<dyn AccountRepository>,
    pub plans: Arc<dyn PlanRepository>,
    pub ledger: Arc<dyn PaymentLedger>,
    pub event_publisher: Arc<dyn EventPublisher>,
    pub locks: Arc<AccountLockRegistry>,
}

impl AccountAppState {
    pub fn register_handler(&self) -> RegisterAccountHandler {
        RegisterAccountHandler::new(
            self.accounts.clone(),
            self.plans.clone(),
            self.event_publisher.clone(),
        )
    }

    pub fn close_handler(&self) -> CloseAccountHandler {
        CloseAccountHandler::new(self.accounts.clone(), self.event_publisher.clone())
    }

    pub fn submit_payment_handler(&self) -> SubmitPaymentHandler {
        SubmitPaymentHandler::new(
            self.accounts.clone(),
            self.plans.clone(),
            self.ledger.clone(),
            self.locks.clone(),
        )
    }

    pub fn status_handler(&self) -> GetAccountStatusHandler {
        GetAccountStatusHandler::new(self.accounts.clone(), self.plans.clone())
    }

    pub fn payout_handler(&self) -> GetFinalPayoutHandler {
        GetFinalPayoutHandler::new(self.accounts.clone(), self.plans.clone())
    }
}

fn parse_account_id(raw: &str) -> Result<AccountId, AccountApiError> {
    raw.parse()
        .map_err(|_| AccountApiError(AccountError::validation("id", "Invalid account id")))
}

/// POST /api/accounts - Register a subscriber account
pub async fn register_account(
    State(state): State<AccountAppState>,
    Json(request): Json<RegisterAccountRequest>,
) -> Result<impl IntoResponse, AccountApiError> {
    let plan_id = match request.plan_id {
        Some(raw) => Some(
            raw.parse()
                .map_err(|_| AccountError::validation("plan_id", "Invalid plan id"))?,
        ),
        None => None,
    };

    let account = state
        .register_handler()
        .handle(RegisterAccountCommand {
            holder_name: request.holder_name,
            plan_id,
            created_on: request.created_on,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(AccountResponse::from(account))))
}

/// DELETE /api/accounts/:id - Close an account
pub async fn close_account(
    State(state): State<AccountAppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AccountApiError> {
    let account_id = parse_account_id(&id)?;

    state
        .close_handler()
        .handle(CloseAccountCommand { account_id })
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/accounts/:id/installments - Reconciled installment status
pub async fn get_installment_status(
    State(state): State<AccountAppState>,
    Path(id): Path<String>,
    Query(params): Query<InstallmentStatusParams>,
) -> Result<impl IntoResponse, AccountApiError> {
    let account_id = parse_account_id(&id)?;

    let view = state
        .status_handler()
        .handle(GetAccountStatusQuery {
            account_id,
            as_of: params.as_of,
        })
        .await?;

    Ok(Json(InstallmentStatusResponse::from(view)))
}

/// POST /api/accounts/:id/payments - Submit an installment payment
pub async fn submit_payment(
    State(state): State<AccountAppState>,
    Path(id): Path<String>,
    Json(request): Json<SubmitPaymentRequest>,
) -> Result<impl IntoResponse, AccountApiError> {
    let account_id = parse_account_id(&id)?;
    let amount = Money::new(request.amount)
        .map_err(|e| AccountError::validation("amount", e.to_string()))?;

    let result = state
        .submit_payment_handler()
        .handle(SubmitPaymentCommand {
            account_id,
            amount,
            as_of: None,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(PaymentResponse::from(result))))
}

/// GET /api/accounts/:id/payments - Payment history, oldest first
pub async fn list_payments(
    State(state): State<AccountAppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AccountApiError> {
    let account_id = parse_account_id(&id)?;

    // Listing an unknown account is a 404, same as the other :id routes.
    state
        .accounts
        .find_by_id(&account_id)
        .await
        .map_err(AccountError::from)?
        .ok_or(AccountError::NotFound(account_id))?;

    let records = state
        .ledger
        .list_for_account(&account_id)
        .await
        .map_err(AccountError::from)?;

    let response = PaymentHistoryResponse {
        account_id: account_id.to_string(),
        payments: records.into_iter().map(Into::into).collect(),
    };
    Ok(Json(response))
}

/// GET /api/accounts/:id/payout - Final payout (zero before completion)
pub async fn get_final_payout(
    State(state): State<AccountAppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AccountApiError> {
    let account_id = parse_account_id(&id)?;

    let view = state
        .payout_handler()
        .handle(GetFinalPayoutQuery { account_id })
        .await?;

    Ok(Json(FinalPayoutResponse::from(view)))
}

/// API error type that converts account errors to HTTP responses.
pub struct AccountApiError(AccountError);

impl From<AccountError> for AccountApiError {
    fn from(err: AccountError) -> Self {
        Self(err)
    }
}

impl IntoResponse for AccountApiError {
    fn into_response(self) -> axum::response::Response {
        let code = self.0.code();
        let body = ErrorResponse::new(code.to_string(), self.0.to_string());
        (status_for(code), Json(body)).into_response()
    }
}

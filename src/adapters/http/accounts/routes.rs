//! Axum router configuration for account endpoints.

use axum::{
    routing::{delete, get, post},
    Router,
};

use super::handlers::{
    close_account, get_final_payout, get_installment_status, list_payments, register_account,
    submit_payment, AccountAppState,
};

/// Create the account API router.
///
/// # Routes
/// - `POST /` - Register a subscriber account
/// - `DELETE /:id` - Close an account
/// - `GET /:id/installments` - Reconciled installment status (`?as_of=YYYY-MM-DD`)
/// - `POST /:id/payments` - Submit an installment payment
/// - `GET /:id/payments` - Payment history, oldest first
/// - `GET /:id/payout` - Final payout (zero before completion)
pub fn account_routes() -> Router<AccountAppState> {
    Router::new()
        .route("/", post(register_account))
        .route("/:id", delete(close_account))
        .route("/:id/installments", get(get_installment_status))
        .route("/:id/payments", post(submit_payment).get(list_payments))
        .route("/:id/payout", get(get_final_payout))
}

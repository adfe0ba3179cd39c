//! HTTP adapter for account endpoints.
//!
//! Exposes the account domain via REST API:
//! - `POST /api/accounts` - Register a subscriber account
//! - `DELETE /api/accounts/:id` - Close an account
//! - `GET /api/accounts/:id/installments` - Reconciled installment status
//! - `POST /api/accounts/:id/payments` - Submit an installment payment
//! - `GET /api/accounts/:id/payments` - Payment history
//! - `GET /api/accounts/:id/payout` - Final payout

pub mod dto;
pub mod handlers;
pub mod routes;

pub use handlers::AccountAppState;
pub use routes::account_routes;

//! HTTP adapters - REST API implementations.
//!
//! Each domain module has its own HTTP adapter for endpoint exposure.

pub mod accounts;
pub mod error;
pub mod plans;

use axum::Router;

pub use accounts::{account_routes, AccountAppState};
pub use plans::{plan_routes, PlanAppState};

/// Create the complete API router.
///
/// Mounts the per-module routers under `/api`:
/// - `/api/plans/*`
/// - `/api/accounts/*`
pub fn api_router(accounts: AccountAppState, plans: PlanAppState) -> Router {
    Router::new().nest(
        "/api",
        Router::new()
            .nest("/plans", plan_routes().with_state(plans))
            .nest("/accounts", account_routes().with_state(accounts)),
    )
}

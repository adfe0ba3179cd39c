//! HTTP adapter for plan endpoints.
//!
//! Exposes the plan domain via REST API:
//! - `POST /api/plans` - Create a plan tier
//! - `GET /api/plans` - List all plan tiers
//! - `GET /api/plans/:id` - Fetch a single plan

pub mod dto;
pub mod handlers;
pub mod routes;

pub use handlers::PlanAppState;
pub use routes::plan_routes;

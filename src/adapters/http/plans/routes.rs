//! Axum router configuration for plan endpoints.

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers::{create_plan, get_plan, list_plans, PlanAppState};

/// Create the plan API router.
///
/// # Routes
/// - `POST /` - Create a plan tier
/// - `GET /` - List all plan tiers
/// - `GET /:id` - Fetch a single plan
pub fn plan_routes() -> Router<PlanAppState> {
    Router::new()
        .route("/", post(create_plan).get(list_plans))
        .route("/:id", get(get_plan))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use crate::application::handlers::account::test_support::InMemoryPlans;

    #[test]
    fn plan_routes_creates_router() {
        let state = PlanAppState {
            plans: Arc::new(InMemoryPlans::new()),
        };
        let _: Router<()> = plan_routes().with_state(state);
    }
}

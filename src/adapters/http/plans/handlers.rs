//! HTTP handlers for plan endpoints.
//!
//! These handlers connect Axum routes to application layer command/query handlers.

use std::sync::Arc;

use axum::extract::{Json, Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;

use crate::application::handlers::plan::{
    CreatePlanCommand, CreatePlanHandler, GetPlanHandler, GetPlanQuery,
};
use crate::domain::foundation::{Money, PlanId};
use crate::domain::plan::PlanError;
use crate::ports::PlanRepository;

use super::super::error::{status_for, ErrorResponse};
use super::dto::{CreatePlanRequest, PlanListResponse, PlanResponse};

/// Shared state for plan endpoints.
#[derive(Clone)]
pub struct PlanAppState {
    pub plans: Arc<dyn PlanRepository>,
}

impl PlanAppState {
    pub fn create_plan_handler(&self) -> CreatePlanHandler {
        CreatePlanHandler::new(self.plans.clone())
    }

    pub fn get_plan_handler(&self) -> GetPlanHandler {
        GetPlanHandler::new(self.plans.clone())
    }
}

/// POST /api/plans - Create a plan tier
pub async fn create_plan(
    State(state): State<PlanAppState>,
    Json(request): Json<CreatePlanRequest>,
) -> Result<impl IntoResponse, PlanApiError> {
    let monthly_amount = Money::new(request.monthly_amount)
        .map_err(|e| PlanError::validation("monthly_amount", e.to_string()))?;
    let bonus_amount = Money::new(request.bonus_amount)
        .map_err(|e| PlanError::validation("bonus_amount", e.to_string()))?;

    let plan = state
        .create_plan_handler()
        .handle(CreatePlanCommand {
            monthly_amount,
            duration_months: request.duration_months,
            bonus_amount,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(PlanResponse::from(plan))))
}

/// GET /api/plans - List all plan tiers
pub async fn list_plans(
    State(state): State<PlanAppState>,
) -> Result<impl IntoResponse, PlanApiError> {
    let plans = state.get_plan_handler().list().await?;
    let response = PlanListResponse {
        plans: plans.into_iter().map(PlanResponse::from).collect(),
    };
    Ok(Json(response))
}

/// GET /api/plans/:id - Fetch a single plan
pub async fn get_plan(
    State(state): State<PlanAppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, PlanApiError> {
    let plan_id: PlanId = id
        .parse()
        .map_err(|_| PlanError::validation("id", "Invalid plan id"))?;

    let plan = state
        .get_plan_handler()
        .handle(GetPlanQuery { plan_id })
        .await?;

    Ok(Json(PlanResponse::from(plan)))
}

/// API error type that converts plan errors to HTTP responses.
pub struct PlanApiError(PlanError);

impl From<PlanError> for PlanApiError {
    fn from(err: PlanError) -> Self {
        Self(err)
    }
}

impl IntoResponse for PlanApiError {
    fn into_response(self) -> axum::response::Response {
        let code = self.0.code();
        let body = ErrorResponse::new(code.to_string(), self.0.to_string());
        (status_for(code), Json(body)).into_response()
    }
}

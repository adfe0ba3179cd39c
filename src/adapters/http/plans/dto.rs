//! HTTP DTOs for plan endpoints.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::plan::Plan;

/// Request to create a plan tier.
#[derive(Debug, Clone, Deserialize)]
pub struct CreatePlanRequest {
    /// Fixed installment amount per month.
    pub monthly_amount: Decimal,
    /// Number of monthly installments in the plan.
    pub duration_months: u32,
    /// Bonus paid on top of the principal at completion.
    #[serde(default)]
    pub bonus_amount: Decimal,
}

/// Plan details for API responses.
#[derive(Debug, Clone, Serialize)]
pub struct PlanResponse {
    pub id: String,
    pub monthly_amount: Decimal,
    pub duration_months: u32,
    pub bonus_amount: Decimal,
    pub total_principal: Decimal,
    pub total_payout: Decimal,
    /// When the plan was created (ISO 8601).
    pub created_at: String,
}

impl From<Plan> for PlanResponse {
    fn from(plan: Plan) -> Self {
        Self {
            id: plan.id.to_string(),
            monthly_amount: plan.monthly_amount.amount(),
            duration_months: plan.duration_months,
            bonus_amount: plan.bonus_amount.amount(),
            total_principal: plan.total_principal.amount(),
            total_payout: plan.total_payout.amount(),
            created_at: plan.created_at.as_datetime().to_rfc3339(),
        }
    }
}

/// Response for plan listing.
#[derive(Debug, Clone, Serialize)]
pub struct PlanListResponse {
    pub plans: Vec<PlanResponse>,
}

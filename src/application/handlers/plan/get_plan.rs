//! GetPlanHandler - Query handlers for plan lookup.

use std::sync::Arc;

use crate::domain::foundation::PlanId;
use crate::domain::plan::{Plan, PlanError};
use crate::ports::PlanRepository;

/// Query for a single plan.
#[derive(Debug, Clone)]
pub struct GetPlanQuery {
    pub plan_id: PlanId,
}

/// Handler for plan lookup.
pub struct GetPlanHandler {
    plans: Arc<dyn PlanRepository>,
}

impl GetPlanHandler {
    pub fn new(plans: Arc<dyn PlanRepository>) -> Self {
        Self { plans }
    }

    pub async fn handle(&self, query: GetPlanQuery) -> Result<Plan, PlanError> {
        resolve_plan(self.plans.as_ref(), &query.plan_id).await
    }

    pub async fn list(&self) -> Result<Vec<Plan>, PlanError> {
        Ok(self.plans.list().await?)
    }
}

/// Loads a plan or fails with `PlanError::NotFound`.
pub async fn resolve_plan(plans: &dyn PlanRepository, id: &PlanId) -> Result<Plan, PlanError> {
    plans
        .find_by_id(id)
        .await?
        .ok_or(PlanError::NotFound(*id))
}

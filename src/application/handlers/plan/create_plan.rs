//! CreatePlanHandler - Command handler for defining a chit plan tier.

use std::sync::Arc;

use tracing::info;

use crate::domain::foundation::{Money, PlanId};
use crate::domain::plan::{Plan, PlanError};
use crate::ports::PlanRepository;

/// Command to create a plan tier.
#[derive(Debug, Clone)]
pub struct CreatePlanCommand {
    pub monthly_amount: Money,
    pub duration_months: u32,
    pub bonus_amount: Money,
}

/// Handler for creating plans.
pub struct CreatePlanHandler {
    plans: Arc<dyn PlanRepository>,
}

impl CreatePlanHandler {
    pub fn new(plans: Arc<dyn PlanRepository>) -> Self {
        Self { plans }
    }

    pub async fn handle(&self, cmd: CreatePlanCommand) -> Result<Plan, PlanError> {
        let plan = Plan::new(
            PlanId::new(),
            cmd.monthly_amount,
            cmd.duration_months,
            cmd.bonus_amount,
        )?;

        self.plans.save(&plan).await?;

        info!(
            plan_id = %plan.id,
            monthly = %plan.monthly_amount,
            duration = plan.duration_months,
            "plan created"
        );
        Ok(plan)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::handlers::account::test_support::InMemoryPlans;
    use rust_decimal_macros::dec;

    #[tokio::test]
    async fn creates_plan_with_derived_totals() {
        let plans = Arc::new(InMemoryPlans::new());

        let plan = CreatePlanHandler::new(plans.clone())
            .handle(CreatePlanCommand {
                monthly_amount: Money::new(dec!(1000)).unwrap(),
                duration_months: 10,
                bonus_amount: Money::new(dec!(1500)).unwrap(),
            })
            .await
            .unwrap();

        assert_eq!(plan.total_principal.amount(), dec!(10000));
        assert_eq!(plan.total_payout.amount(), dec!(11500));
        assert!(plans.find_by_id(&plan.id).await.unwrap().is_some());
    }

    #[tokio::test]
    async fn rejects_invalid_plan_without_saving() {
        let plans = Arc::new(InMemoryPlans::new());

        let result = CreatePlanHandler::new(plans.clone())
            .handle(CreatePlanCommand {
                monthly_amount: Money::zero(),
                duration_months: 10,
                bonus_amount: Money::zero(),
            })
            .await;

        assert!(result.is_err());
        assert!(plans.list().await.unwrap().is_empty());
    }
}

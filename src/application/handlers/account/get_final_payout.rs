//! GetFinalPayoutHandler - Query handler for the completion payout.

use std::sync::Arc;

use crate::domain::account::AccountError;
use crate::domain::foundation::{AccountId, Money};
use crate::ports::{AccountRepository, PlanRepository};

/// Query for an account's final payout.
#[derive(Debug, Clone)]
pub struct GetFinalPayoutQuery {
    pub account_id: AccountId,
}

/// Payout view: zero until every installment of the plan is paid.
#[derive(Debug, Clone)]
pub struct FinalPayoutView {
    pub account_id: AccountId,
    pub completed: bool,
    pub total_paid: Money,
    pub bonus_amount: Money,
    pub payout: Money,
}

/// Handler for the payout query.
pub struct GetFinalPayoutHandler {
    accounts: Arc<dyn AccountRepository>,
    plans: Arc<dyn PlanRepository>,
}

impl GetFinalPayoutHandler {
    pub fn new(accounts: Arc<dyn AccountRepository>, plans: Arc<dyn PlanRepository>) -> Self {
        Self { accounts, plans }
    }

    pub async fn handle(&self, query: GetFinalPayoutQuery) -> Result<FinalPayoutView, AccountError> {
        let account = self
            .accounts
            .find_by_id(&query.account_id)
            .await?
            .ok_or(AccountError::NotFound(query.account_id))?;

        let plan_id = account
            .plan_id
            .ok_or(AccountError::NoPlanAssigned(query.account_id))?;
        let plan = self
            .plans
            .find_by_id(&plan_id)
            .await?
            .ok_or(AccountError::PlanNotFound(plan_id))?;

        let payout = account.final_payout(&plan);
        Ok(FinalPayoutView {
            account_id: account.id,
            completed: account.months_paid == plan.duration_months,
            total_paid: account.total_paid,
            bonus_amount: plan.bonus_amount,
            payout,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::handlers::account::test_support::{
        account_opened_months_ago, standard_plan, InMemoryAccounts, InMemoryPlans,
    };
    use rust_decimal_macros::dec;

    #[tokio::test]
    async fn payout_zero_before_completion() {
        let plan = standard_plan();
        let account = account_opened_months_ago(3, &plan);
        let account_id = account.id;

        let view = GetFinalPayoutHandler::new(
            Arc::new(InMemoryAccounts::with_account(account)),
            Arc::new(InMemoryPlans::with_plan(plan)),
        )
        .handle(GetFinalPayoutQuery { account_id })
        .await
        .unwrap();

        assert!(!view.completed);
        assert!(view.payout.is_zero());
    }

    #[tokio::test]
    async fn payout_includes_bonus_after_completion() {
        let plan = standard_plan();
        let mut account = account_opened_months_ago(0, &plan);
        account.months_paid = 11;
        account.total_paid = Money::new(dec!(5500)).unwrap();
        let account_id = account.id;

        let view = GetFinalPayoutHandler::new(
            Arc::new(InMemoryAccounts::with_account(account)),
            Arc::new(InMemoryPlans::with_plan(plan)),
        )
        .handle(GetFinalPayoutQuery { account_id })
        .await
        .unwrap();

        assert!(view.completed);
        assert_eq!(view.payout.amount(), dec!(6250));
    }
}

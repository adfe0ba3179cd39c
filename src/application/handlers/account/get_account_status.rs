//! GetAccountStatusHandler - Query handler for current installment status.
//!
//! The status query reconciles first so the caller always sees counters
//! that are fresh as of the requested date, then persists the reconciled
//! account. Reconciliation is idempotent, so repeated status calls with the
//! same date are harmless.

use std::sync::Arc;

use chrono::{NaiveDate, Utc};

use crate::domain::account::{AccountError, AccountStanding};
use crate::domain::foundation::{AccountId, Money};
use crate::domain::plan::Plan;
use crate::ports::{AccountRepository, PlanRepository};

/// Query for an account's current installment status.
#[derive(Debug, Clone)]
pub struct GetAccountStatusQuery {
    pub account_id: AccountId,
    /// Reconciliation date; defaults to today.
    pub as_of: Option<NaiveDate>,
}

/// Fresh view of an account's position in its plan.
#[derive(Debug, Clone)]
pub struct AccountStatusView {
    pub account_id: AccountId,
    pub holder_name: String,
    pub months_paid: u32,
    pub months_missed: u32,
    pub pending_amount: Money,
    pub total_paid: Money,
    pub standing: AccountStanding,
    pub plan: Option<Plan>,
}

/// Handler for the status query.
pub struct GetAccountStatusHandler {
    accounts: Arc<dyn AccountRepository>,
    plans: Arc<dyn PlanRepository>,
}

impl GetAccountStatusHandler {
    pub fn new(accounts: Arc<dyn AccountRepository>, plans: Arc<dyn PlanRepository>) -> Self {
        Self { accounts, plans }
    }

    pub async fn handle(&self, query: GetAccountStatusQuery) -> Result<AccountStatusView, AccountError> {
        let mut account = self
            .accounts
            .find_by_id(&query.account_id)
            .await?
            .ok_or(AccountError::NotFound(query.account_id))?;

        let plan = match account.plan_id {
            Some(plan_id) => self.plans.find_by_id(&plan_id).await?,
            None => None,
        };

        let as_of = query.as_of.unwrap_or_else(|| Utc::now().date_naive());
        account.reconcile_missed_months(as_of, plan.as_ref());
        self.accounts.update(&account).await?;

        Ok(AccountStatusView {
            account_id: account.id,
            holder_name: account.holder_name.clone(),
            months_paid: account.months_paid,
            months_missed: account.months_missed,
            pending_amount: account.pending_amount,
            total_paid: account.total_paid,
            standing: account.standing(plan.as_ref()),
            plan,
        })
    }
}

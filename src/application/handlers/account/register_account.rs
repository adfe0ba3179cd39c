//! RegisterAccountHandler - Command handler for opening a subscriber account.

use std::sync::Arc;

use chrono::{NaiveDate, Utc};
use tracing::info;

use crate::domain::account::{Account, AccountError, AccountEvent};
use crate::domain::foundation::{AccountId, SerializableDomainEvent};
use crate::ports::{AccountRepository, EventPublisher, PlanRepository};

/// Command to register a new subscriber account.
#[derive(Debug, Clone)]
pub struct RegisterAccountCommand {
    pub holder_name: String,
    pub plan_id: Option<crate::domain::foundation::PlanId>,
    /// Opening date; defaults to today when absent.
    pub created_on: Option<NaiveDate>,
}

/// Handler for registering accounts.
///
/// Publishes exactly one `AccountEvent::Registered` per successful
/// registration, synchronously, before returning to the caller.
pub struct RegisterAccountHandler {
    accounts: Arc<dyn AccountRepository>,
    plans: Arc<dyn PlanRepository>,
    event_publisher: Arc<dyn EventPublisher>,
}

impl RegisterAccountHandler {
    pub fn new(
        accounts: Arc<dyn AccountRepository>,
        plans: Arc<dyn PlanRepository>,
        event_publisher: Arc<dyn EventPublisher>,
    ) -> Self {
        Self {
            accounts,
            plans,
            event_publisher,
        }
    }

    pub async fn handle(&self, cmd: RegisterAccountCommand) -> Result<Account, AccountError> {
        // Reject a dangling plan reference up front.
        let plan = match cmd.plan_id {
            Some(plan_id) => Some(
                self.plans
                    .find_by_id(&plan_id)
                    .await?
                    .ok_or(AccountError::PlanNotFound(plan_id))?,
            ),
            None => None,
        };

        let created_on = cmd.created_on.unwrap_or_else(|| Utc::now().date_naive());
        let mut account = Account::register(
            AccountId::new(),
            cmd.holder_name,
            plan.as_ref().map(|p| p.id),
            created_on,
        )?;

        // A fresh account has nothing missed yet; this seeds the pending
        // fields for a backdated opening date.
        account.reconcile_missed_months(Utc::now().date_naive(), plan.as_ref());

        self.accounts.save(&account).await?;

        let event = AccountEvent::registered(account.id, account.holder_name.clone(), account.plan_id);
        self.event_publisher.publish(event.to_envelope()).await?;

        info!(account_id = %account.id, holder = %account.holder_name, "account registered");
        Ok(account)
    }
}

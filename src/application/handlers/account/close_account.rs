//! CloseAccountHandler - Command handler for closing a subscriber account.

use std::sync::Arc;

use tracing::info;

use crate::domain::account::{AccountError, AccountEvent};
use crate::domain::foundation::{AccountId, SerializableDomainEvent};
use crate::ports::{AccountRepository, EventPublisher};

/// Command to close (delete) an account.
#[derive(Debug, Clone)]
pub struct CloseAccountCommand {
    pub account_id: AccountId,
}

/// Handler for closing accounts.
///
/// The Closed event carries a copy of the holder's name, captured before
/// the row is deleted, and is published synchronously before the handler
/// returns.
pub struct CloseAccountHandler {
    accounts: Arc<dyn AccountRepository>,
    event_publisher: Arc<dyn EventPublisher>,
}

impl CloseAccountHandler {
    pub fn new(accounts: Arc<dyn AccountRepository>, event_publisher: Arc<dyn EventPublisher>) -> Self {
        Self {
            accounts,
            event_publisher,
        }
    }

    pub async fn handle(&self, cmd: CloseAccountCommand) -> Result<(), AccountError> {
        let account = self
            .accounts
            .find_by_id(&cmd.account_id)
            .await?
            .ok_or(AccountError::NotFound(cmd.account_id))?;

        // Name copied before deletion; the event may outlive the row.
        let holder_name = account.holder_name.clone();

        self.accounts.delete(&cmd.account_id).await?;

        let event = AccountEvent::closed(cmd.account_id, holder_name);
        self.event_publisher.publish(event.to_envelope()).await?;

        info!(account_id = %cmd.account_id, "account closed");
        Ok(())
    }
}

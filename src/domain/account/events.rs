//! Account lifecycle events.
//!
//! Emitted at exactly two points: account registration and account closure.
//! Routine reconciliation saves deliberately emit nothing; the audit trail
//! only cares about lifecycle boundaries, and the payment ledger already
//! records every payment.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{AccountId, DomainEvent, EventId, PlanId, Timestamp};

/// Events that occur during the account lifecycle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum AccountEvent {
    /// A subscriber registered a new account.
    Registered {
        event_id: EventId,
        account_id: AccountId,
        holder_name: String,
        plan_id: Option<PlanId>,
        occurred_at: Timestamp,
    },

    /// An account was closed and removed.
    ///
    /// Carries a copy of the holder's name because the account row may
    /// already be gone by the time a consumer reads the event.
    Closed {
        event_id: EventId,
        account_id: AccountId,
        holder_name: String,
        occurred_at: Timestamp,
    },
}

impl AccountEvent {
    /// Creates a Registered event stamped now.
    pub fn registered(
        account_id: AccountId,
        holder_name: impl Into<String>,
        plan_id: Option<PlanId>,
    ) -> Self {
        AccountEvent::Registered {
            event_id: EventId::new(),
            account_id,
            holder_name: holder_name.into(),
            plan_id,
            occurred_at: Timestamp::now(),
        }
    }

    /// Creates a Closed event stamped now.
    pub fn closed(account_id: AccountId, holder_name: impl Into<String>) -> Self {
        AccountEvent::Closed {
            event_id: EventId::new(),
            account_id,
            holder_name: holder_name.into(),
            occurred_at: Timestamp::now(),
        }
    }

    /// The holder name carried by the event.
    pub fn holder_name(&self) -> &str {
        match self {
            AccountEvent::Registered { holder_name, .. } => holder_name,
            AccountEvent::Closed { holder_name, .. } => holder_name,
        }
    }
}

impl DomainEvent for AccountEvent {
    fn event_type(&self) -> &'static str {
        match self {
            AccountEvent::Registered { .. } => "account.registered.v1",
            AccountEvent::Closed { .. } => "account.closed.v1",
        }
    }

    fn aggregate_id(&self) -> String {
        match self {
            AccountEvent::Registered { account_id, .. } => account_id.to_string(),
            AccountEvent::Closed { account_id, .. } => account_id.to_string(),
        }
    }

    fn aggregate_type(&self) -> &'static str {
        "Account"
    }

    fn occurred_at(&self) -> Timestamp {
        match self {
            AccountEvent::Registered { occurred_at, .. } => *occurred_at,
            AccountEvent::Closed { occurred_at, .. } => *occurred_at,
        }
    }

    fn event_id(&self) -> EventId {
        match self {
            AccountEvent::Registered { event_id, .. } => *event_id,
            AccountEvent::Closed { event_id, .. } => *event_id,
        }
    }
}

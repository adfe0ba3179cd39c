//! Shared in-memory port implementations for handler tests.

use std::sync::Mutex;

use async_trait::async_trait;
use chrono::Utc;
use rust_decimal_macros::dec;

use crate::domain::account::Account;
use crate::domain::foundation::{
    AccountId, DomainError, EventEnvelope, Money, PlanId,
};
use crate::domain::payment::PaymentRecord;
use crate::domain::plan::Plan;
use crate::ports::{AccountRepository, EventPublisher, PaymentLedger, PlanRepository};

/// Plan(500 x 11, bonus 750): principal 5500, payout 6250.
pub fn standard_plan() -> Plan {
    Plan::new(
        PlanId::new(),
        Money::new(dec!(500)).unwrap(),
        11,
        Money::new(dec!(750)).unwrap(),
    )
    .unwrap()
}

/// Account named "Meena" on the given plan, opened N whole months ago and
/// reconciled to today.
pub fn account_opened_months_ago(months: u32, plan: &Plan) -> Account {
    let today = Utc::now().date_naive();
    let created_on = today
        .checked_sub_months(chrono::Months::new(months))
        .unwrap();
    let mut account =
        Account::register(AccountId::new(), "Meena", Some(plan.id), created_on).unwrap();
    account.reconcile_missed_months(today, Some(plan));
    account
}

pub struct InMemoryAccounts {
    rows: Mutex<Vec<Account>>,
}

impl InMemoryAccounts {
    pub fn new() -> Self {
        Self {
            rows: Mutex::new(Vec::new()),
        }
    }

    pub fn with_account(account: Account) -> Self {
        Self {
            rows: Mutex::new(vec![account]),
        }
    }

    pub fn find(&self, id: &AccountId) -> Option<Account> {
        self.rows.lock().unwrap().iter().find(|a| &a.id == id).cloned()
    }
}

#[async_trait]
impl AccountRepository for InMemoryAccounts {
    async fn save(&self, account: &Account) -> Result<(), DomainError> {
        self.rows.lock().unwrap().push(account.clone());
        Ok(())
    }

    async fn update(&self, account: &Account) -> Result<(), DomainError> {
        let mut rows = self.rows.lock().unwrap();
        if let Some(existing) = rows.iter_mut().find(|a| a.id == account.id) {
            *existing = account.clone();
        }
        Ok(())
    }

    async fn find_by_id(&self, id: &AccountId) -> Result<Option<Account>, DomainError> {
        Ok(self.find(id))
    }

    async fn delete(&self, id: &AccountId) -> Result<(), DomainError> {
        self.rows.lock().unwrap().retain(|a| &a.id != id);
        Ok(())
    }
}

pub struct InMemoryPlans {
    rows: Mutex<Vec<Plan>>,
}

impl InMemoryPlans {
    pub fn new() -> Self {
        Self {
            rows: Mutex::new(Vec::new()),
        }
    }

    pub fn with_plan(plan: Plan) -> Self {
        Self {
            rows: Mutex::new(vec![plan]),
        }
    }

    pub fn first_id(&self) -> PlanId {
        self.rows.lock().unwrap()[0].id
    }
}

#[async_trait]
impl PlanRepository for InMemoryPlans {
    async fn save(&self, plan: &Plan) -> Result<(), DomainError> {
        let mut rows = self.rows.lock().unwrap();
        rows.retain(|p| p.id != plan.id);
        rows.push(plan.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: &PlanId) -> Result<Option<Plan>, DomainError> {
        Ok(self.rows.lock().unwrap().iter().find(|p| &p.id == id).cloned())
    }

    async fn list(&self) -> Result<Vec<Plan>, DomainError> {
        Ok(self.rows.lock().unwrap().clone())
    }
}

pub struct InMemoryLedger {
    rows: Mutex<Vec<PaymentRecord>>,
}

impl InMemoryLedger {
    pub fn new() -> Self {
        Self {
            rows: Mutex::new(Vec::new()),
        }
    }

    pub fn records(&self) -> Vec<PaymentRecord> {
        self.rows.lock().unwrap().clone()
    }
}

#[async_trait]
impl PaymentLedger for InMemoryLedger {
    async fn append(&self, record: &PaymentRecord) -> Result<(), DomainError> {
        self.rows.lock().unwrap().push(record.clone());
        Ok(())
    }

    async fn list_for_account(
        &self,
        account_id: &AccountId,
    ) -> Result<Vec<PaymentRecord>, DomainError> {
        Ok(self
            .records()
            .into_iter()
            .filter(|r| &r.account_id == account_id)
            .collect())
    }
}

pub struct RecordingPublisher {
    events: Mutex<Vec<EventEnvelope>>,
}

impl RecordingPublisher {
    pub fn new() -> Self {
        Self {
            events: Mutex::new(Vec::new()),
        }
    }

    pub fn events_of_type(&self, event_type: &str) -> Vec<EventEnvelope> {
        self.events
            .lock()
            .unwrap()
            .iter()
            .filter(|e| e.event_type == event_type)
            .cloned()
            .collect()
    }

    pub fn event_count(&self) -> usize {
        self.events.lock().unwrap().len()
    }
}

#[async_trait]
impl EventPublisher for RecordingPublisher {
    async fn publish(&self, event: EventEnvelope) -> Result<(), DomainError> {
        self.events.lock().unwrap().push(event);
        Ok(())
    }

    async fn publish_all(&self, events: Vec<EventEnvelope>) -> Result<(), DomainError> {
        self.events.lock().unwrap().extend(events);
        Ok(())
    }
}

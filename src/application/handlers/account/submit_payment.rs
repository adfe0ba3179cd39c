//! SubmitPaymentHandler - Command handler for crediting an installment payment.
//!
//! Runs the full payment sequence: reconcile to today, allocate the amount,
//! persist the account, append the ledger record. The sequence for one
//! account runs under a per-account async lock so racing payments cannot
//! lose updates (last-write-wins is not acceptable for money).

use std::collections::HashMap;
use std::sync::Arc;

use chrono::{NaiveDate, Utc};
use tokio::sync::Mutex;
use tracing::{info, warn};

use crate::domain::account::{Account, AccountError, PaymentOutcome};
use crate::domain::foundation::{AccountId, Money};
use crate::domain::payment::PaymentRecord;
use crate::ports::{AccountRepository, PaymentLedger, PlanRepository};

/// Per-account mutual exclusion for the reconcile+pay sequence.
///
/// Locks are created lazily and never reclaimed; the registry grows with
/// the number of distinct accounts paid through this process, which is
/// bounded by the subscriber base.
#[derive(Default)]
pub struct AccountLockRegistry {
    locks: Mutex<HashMap<AccountId, Arc<Mutex<()>>>>,
}

impl AccountLockRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the lock for an account, creating it on first use.
    pub async fn lock_for(&self, account_id: AccountId) -> Arc<Mutex<()>> {
        let mut locks = self.locks.lock().await;
        locks
            .entry(account_id)
            .or_insert_with(|| Arc::new(Mutex::new(())))
            .clone()
    }
}

/// Command to submit a payment against an account.
#[derive(Debug, Clone)]
pub struct SubmitPaymentCommand {
    pub account_id: AccountId,
    pub amount: Money,
    /// Reconciliation date; defaults to today. Exposed for deterministic tests.
    pub as_of: Option<NaiveDate>,
}

/// Result of a successful payment submission.
#[derive(Debug, Clone)]
pub struct SubmitPaymentResult {
    pub account: Account,
    pub outcome: PaymentOutcome,
    pub record: PaymentRecord,
}

/// Handler for submitting payments.
pub struct SubmitPaymentHandler {
    accounts: Arc<dyn AccountRepository>,
    plans: Arc<dyn PlanRepository>,
    ledger: Arc<dyn PaymentLedger>,
    locks: Arc<AccountLockRegistry>,
}

impl SubmitPaymentHandler {
    pub fn new(
        accounts: Arc<dyn AccountRepository>,
        plans: Arc<dyn PlanRepository>,
        ledger: Arc<dyn PaymentLedger>,
        locks: Arc<AccountLockRegistry>,
    ) -> Self {
        Self {
            accounts,
            plans,
            ledger,
            locks,
        }
    }

    pub async fn handle(&self, cmd: SubmitPaymentCommand) -> Result<SubmitPaymentResult, AccountError> {
        let lock = self.locks.lock_for(cmd.account_id).await;
        let _guard = lock.lock().await;

        let mut account = self
            .accounts
            .find_by_id(&cmd.account_id)
            .await?
            .ok_or(AccountError::NotFound(cmd.account_id))?;

        let plan_id = account
            .plan_id
            .ok_or(AccountError::NoPlanAssigned(cmd.account_id))?;
        let plan = self
            .plans
            .find_by_id(&plan_id)
            .await?
            .ok_or(AccountError::PlanNotFound(plan_id))?;

        // Boundary validations: these belong to the collaborator layer, not
        // the reconciliation core itself.
        if !cmd.amount.is_positive() {
            warn!(account_id = %cmd.account_id, amount = %cmd.amount, "rejected non-positive payment");
            return Err(AccountError::amount_not_positive(cmd.amount));
        }
        if cmd.amount < plan.monthly_amount {
            warn!(
                account_id = %cmd.account_id,
                amount = %cmd.amount,
                minimum = %plan.monthly_amount,
                "rejected payment below one installment"
            );
            return Err(AccountError::amount_below_minimum(
                cmd.amount,
                plan.monthly_amount,
            ));
        }

        let as_of = cmd.as_of.unwrap_or_else(|| Utc::now().date_naive());
        account.reconcile_missed_months(as_of, Some(&plan));

        let outcome = account.apply_payment(cmd.amount, &plan)?;

        self.accounts.update(&account).await?;

        let record = PaymentRecord::from_outcome(account.id, plan.id, &outcome);
        self.ledger.append(&record).await?;

        info!(
            account_id = %account.id,
            amount = %outcome.amount_credited,
            installments = outcome.installments_cleared,
            pending = %outcome.pending_amount,
            "payment credited"
        );

        Ok(SubmitPaymentResult {
            account,
            outcome,
            record,
        })
    }
}

//! HTTP DTOs for account endpoints.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::application::handlers::account::{
    AccountStatusView, FinalPayoutView, SubmitPaymentResult,
};
use crate::domain::account::{Account, AccountStanding};
use crate::domain::payment::PaymentRecord;

/// Request to register a subscriber account.
#[derive(Debug, Clone, Deserialize)]
pub struct RegisterAccountRequest {
    pub holder_name: String,
    /// Plan tier to subscribe to; accounts may exist without one.
    #[serde(default)]
    pub plan_id: Option<String>,
    /// Opening date; defaults to today. Backdated dates seed missed months.
    #[serde(default)]
    pub created_on: Option<NaiveDate>,
}

/// Request to submit an installment payment.
#[derive(Debug, Clone, Deserialize)]
pub struct SubmitPaymentRequest {
    pub amount: Decimal,
}

/// Query string for the installment status endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct InstallmentStatusParams {
    /// Reconciliation date; defaults to today.
    #[serde(default)]
    pub as_of: Option<NaiveDate>,
}

/// Account details for API responses.
#[derive(Debug, Clone, Serialize)]
pub struct AccountResponse {
    pub id: String,
    pub holder_name: String,
    pub plan_id: Option<String>,
    pub created_on: NaiveDate,
    pub months_paid: u32,
    pub months_missed: u32,
    pub pending_amount: Decimal,
    pub total_paid: Decimal,
    pub created_at: String,
}

impl From<Account> for AccountResponse {
    fn from(account: Account) -> Self {
        Self {
            id: account.id.to_string(),
            holder_name: account.holder_name,
            plan_id: account.plan_id.map(|p| p.to_string()),
            created_on: account.created_on,
            months_paid: account.months_paid,
            months_missed: account.months_missed,
            pending_amount: account.pending_amount.amount(),
            total_paid: account.total_paid.amount(),
            created_at: account.created_at.as_datetime().to_rfc3339(),
        }
    }
}

/// Installment status after reconciliation.
#[derive(Debug, Clone, Serialize)]
pub struct InstallmentStatusResponse {
    pub account_id: String,
    pub holder_name: String,
    pub months_paid: u32,
    pub months_missed: u32,
    pub pending_amount: Decimal,
    pub total_paid: Decimal,
    pub standing: AccountStanding,
    pub plan: Option<super::super::plans::dto::PlanResponse>,
}

impl From<AccountStatusView> for InstallmentStatusResponse {
    fn from(view: AccountStatusView) -> Self {
        Self {
            account_id: view.account_id.to_string(),
            holder_name: view.holder_name,
            months_paid: view.months_paid,
            months_missed: view.months_missed,
            pending_amount: view.pending_amount.amount(),
            total_paid: view.total_paid.amount(),
            standing: view.standing,
            plan: view.plan.map(Into::into),
        }
    }
}

/// Response for a credited payment.
#[derive(Debug, Clone, Serialize)]
pub struct PaymentResponse {
    pub payment_id: String,
    pub account_id: String,
    pub installment_number: u32,
    pub installments_cleared: u32,
    pub amount_credited: Decimal,
    pub remainder: Decimal,
    pub months_paid: u32,
    pub months_missed: u32,
    pub pending_amount: Decimal,
    pub total_paid: Decimal,
}

impl From<SubmitPaymentResult> for PaymentResponse {
    fn from(result: SubmitPaymentResult) -> Self {
        Self {
            payment_id: result.record.id.to_string(),
            account_id: result.account.id.to_string(),
            installment_number: result.record.installment_number,
            installments_cleared: result.outcome.installments_cleared,
            amount_credited: result.outcome.amount_credited.amount(),
            remainder: result.outcome.remainder.amount(),
            months_paid: result.outcome.months_paid,
            months_missed: result.outcome.months_missed,
            pending_amount: result.outcome.pending_amount.amount(),
            total_paid: result.outcome.total_paid.amount(),
        }
    }
}

/// One entry in the payment history.
#[derive(Debug, Clone, Serialize)]
pub struct PaymentRecordResponse {
    pub id: String,
    pub installment_number: u32,
    pub amount_credited: Decimal,
    pub remainder_amount: Decimal,
    pub status: String,
    pub recorded_at: String,
}

impl From<PaymentRecord> for PaymentRecordResponse {
    fn from(record: PaymentRecord) -> Self {
        Self {
            id: record.id.to_string(),
            installment_number: record.installment_number,
            amount_credited: record.amount_credited.amount(),
            remainder_amount: record.remainder_amount.amount(),
            status: record.status.as_str().to_string(),
            recorded_at: record.recorded_at.as_datetime().to_rfc3339(),
        }
    }
}

/// Response for the payment history listing.
#[derive(Debug, Clone, Serialize)]
pub struct PaymentHistoryResponse {
    pub account_id: String,
    pub payments: Vec<PaymentRecordResponse>,
}

/// Response for the final payout query.
#[derive(Debug, Clone, Serialize)]
pub struct FinalPayoutResponse {
    pub account_id: String,
    pub completed: bool,
    pub total_paid: Decimal,
    pub bonus_amount: Decimal,
    pub payout: Decimal,
}

impl From<FinalPayoutView> for FinalPayoutResponse {
    fn from(view: FinalPayoutView) -> Self {
        Self {
            account_id: view.account_id.to_string(),
            completed: view.completed,
            total_paid: view.total_paid.amount(),
            bonus_amount: view.bonus_amount.amount(),
            payout: view.payout.amount(),
        }
    }
}

//! Payment ledger record.

use serde::{Deserialize, Serialize};

use crate::domain::account::PaymentOutcome;
use crate::domain::foundation::{AccountId, Money, PaymentId, PlanId, Timestamp};

/// Settlement status of a ledger record.
///
/// Only fully recorded payments reach the ledger, so `Paid` is currently
/// the sole variant; the enum exists so the wire format does not change if
/// reversals are ever added.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentStatus {
    Paid,
}

impl PaymentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentStatus::Paid => "paid",
        }
    }
}

/// One append-only entry in the payment ledger.
///
/// The ledger is an audit trail: reconciliation never reads it back, it is
/// driven purely by the account's running counters.
///
/// `installment_number` is a snapshot of the account's `months_paid` after
/// the payment was applied, NOT a sequential ledger index. Two records can
/// share an installment number when a sub-installment payment advanced no
/// counter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentRecord {
    /// Unique identifier for this record.
    pub id: PaymentId,

    /// Account the payment was credited to.
    pub account_id: AccountId,

    /// Plan in force at the time of payment.
    pub plan_id: PlanId,

    /// Snapshot of months_paid after this payment.
    pub installment_number: u32,

    /// Full tendered amount credited to the account.
    pub amount_credited: Money,

    /// Sub-installment remainder absorbed without advancing a counter.
    pub remainder_amount: Money,

    /// Settlement status.
    pub status: PaymentStatus,

    /// When the ledger stamped the record. Set again at write time by the
    /// persistence adapter regardless of this field's value.
    pub recorded_at: Timestamp,
}

impl PaymentRecord {
    /// Builds a ledger record from a payment outcome.
    pub fn from_outcome(account_id: AccountId, plan_id: PlanId, outcome: &PaymentOutcome) -> Self {
        Self {
            id: PaymentId::new(),
            account_id,
            plan_id,
            installment_number: outcome.months_paid,
            amount_credited: outcome.amount_credited,
            remainder_amount: outcome.remainder,
            status: PaymentStatus::Paid,
            recorded_at: Timestamp::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn outcome() -> PaymentOutcome {
        PaymentOutcome {
            installments_cleared: 1,
            amount_credited: Money::new(dec!(700)).unwrap(),
            remainder: Money::new(dec!(200)).unwrap(),
            months_paid: 4,
            months_missed: 2,
            pending_amount: Money::new(dec!(1000)).unwrap(),
            total_paid: Money::new(dec!(2700)).unwrap(),
        }
    }

    #[test]
    fn installment_number_snapshots_months_paid() {
        let record = PaymentRecord::from_outcome(AccountId::new(), PlanId::new(), &outcome());

        assert_eq!(record.installment_number, 4);
        assert_eq!(record.amount_credited.amount(), dec!(700));
        assert_eq!(record.remainder_amount.amount(), dec!(200));
        assert_eq!(record.status, PaymentStatus::Paid);
    }
}

//! Payment ledger port - append-only audit trail of payments.

use async_trait::async_trait;

use crate::domain::foundation::{AccountId, DomainError};
use crate::domain::payment::PaymentRecord;

/// Port for the append-only payment ledger.
///
/// Implementations must stamp `recorded_at` at write time regardless of the
/// value carried by the record, and must never mutate existing entries.
/// The reconciliation core never reads the ledger; `list_for_account`
/// exists purely for the audit surface.
#[async_trait]
pub trait PaymentLedger: Send + Sync {
    /// Append a payment record.
    ///
    /// # Errors
    ///
    /// - `DatabaseError` on persistence failure
    async fn append(&self, record: &PaymentRecord) -> Result<(), DomainError>;

    /// List all records for an account, oldest first.
    async fn list_for_account(
        &self,
        account_id: &AccountId,
    ) -> Result<Vec<PaymentRecord>, DomainError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn payment_ledger_is_object_safe() {
        fn _accepts_dyn(_ledger: &dyn PaymentLedger) {}
    }
}

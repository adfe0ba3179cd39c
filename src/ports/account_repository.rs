//! Account repository port.
//!
//! Defines the contract for persisting and retrieving Account aggregates.
//! The reconciliation core only needs key-value-by-identifier semantics:
//! create, read, update, delete.

use async_trait::async_trait;

use crate::domain::account::Account;
use crate::domain::foundation::{AccountId, DomainError};

/// Repository port for Account aggregate persistence.
#[async_trait]
pub trait AccountRepository: Send + Sync {
    /// Save a new account.
    ///
    /// # Errors
    ///
    /// - `DatabaseError` on persistence failure
    async fn save(&self, account: &Account) -> Result<(), DomainError>;

    /// Update an existing account.
    ///
    /// # Errors
    ///
    /// - `AccountNotFound` if the account doesn't exist
    /// - `DatabaseError` on persistence failure
    async fn update(&self, account: &Account) -> Result<(), DomainError>;

    /// Find an account by its ID.
    ///
    /// Returns `None` if not found.
    async fn find_by_id(&self, id: &AccountId) -> Result<Option<Account>, DomainError>;

    /// Delete an account.
    ///
    /// Callers are responsible for publishing the Closed lifecycle event;
    /// the repository only removes the row.
    ///
    /// # Errors
    ///
    /// - `AccountNotFound` if the account doesn't exist
    /// - `DatabaseError` on persistence failure
    async fn delete(&self, id: &AccountId) -> Result<(), DomainError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn account_repository_is_object_safe() {
        fn _accepts_dyn(_repo: &dyn AccountRepository) {}
    }
}

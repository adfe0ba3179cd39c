//! PostgreSQL adapters implementing the outbound ports.

mod account_repository;
mod audit_log;
mod payment_ledger;
mod plan_repository;

pub use account_repository::PostgresAccountRepository;
pub use audit_log::PostgresAuditLog;
pub use payment_ledger::PostgresPaymentLedger;
pub use plan_repository::PostgresPlanRepository;

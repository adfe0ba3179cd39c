//! Ports layer - contracts between the domain and the outside world.
//!
//! Every port is an object-safe `async_trait` with `Send + Sync` bounds so
//! adapters can be swapped behind `Arc<dyn ...>`.

mod account_repository;
mod event_publisher;
mod payment_ledger;
mod plan_repository;

pub use account_repository::AccountRepository;
pub use event_publisher::EventPublisher;
pub use payment_ledger::PaymentLedger;
pub use plan_repository::PlanRepository;

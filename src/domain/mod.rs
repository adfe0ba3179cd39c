//! Domain layer - aggregates, value objects, and domain events.
//!
//! Pure business logic with no I/O. The reconciliation core lives in
//! `account`; `plan` and `payment` hold the surrounding shapes, and
//! `foundation` provides the shared vocabulary.

pub mod account;
pub mod foundation;
pub mod payment;
pub mod plan;

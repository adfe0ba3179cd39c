//! Command and query handlers, grouped by bounded context.

pub mod account;
pub mod plan;

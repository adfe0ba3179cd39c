//! Payment domain - append-only ledger record shapes.

mod record;

pub use record::{PaymentRecord, PaymentStatus};

//! Account domain - the installment reconciliation core.

mod aggregate;
mod errors;
mod events;
mod standing;

pub use aggregate::{Account, PaymentOutcome};
pub use errors::AccountError;
pub use events::AccountEvent;
pub use standing::AccountStanding;

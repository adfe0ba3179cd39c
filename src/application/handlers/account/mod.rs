//! Account command and query handlers.

mod close_account;
mod get_account_status;
mod get_final_payout;
mod register_account;
mod submit_payment;

#[cfg(test)]
pub(crate) mod test_support;

pub use close_account::{CloseAccountCommand, CloseAccountHandler};
pub use get_account_status::{AccountStatusView, GetAccountStatusHandler, GetAccountStatusQuery};
pub use get_final_payout::{FinalPayoutView, GetFinalPayoutHandler, GetFinalPayoutQuery};
pub use register_account::{RegisterAccountCommand, RegisterAccountHandler};
pub use submit_payment::{
    AccountLockRegistry, SubmitPaymentCommand, SubmitPaymentHandler, SubmitPaymentResult,
};

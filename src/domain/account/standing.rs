//! Account standing - where an account sits in the plan lifecycle.

use serde::{Deserialize, Serialize};

/// Standing of an account against its plan.
///
/// Derived from the counters, never stored. `Completed` is terminal for
/// payout purposes but does not block further payments; over-payments are
/// simply banked into the running total.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum AccountStanding {
    /// All elapsed months are covered.
    Current,

    /// One or more elapsed months have no installment credited.
    Missing { months: u32 },

    /// Every installment of the plan has been paid.
    Completed,
}

impl std::fmt::Display for AccountStanding {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AccountStanding::Current => write!(f, "current"),
            AccountStanding::Missing { months } => write!(f, "missing {} month(s)", months),
            AccountStanding::Completed => write!(f, "completed"),
        }
    }
}

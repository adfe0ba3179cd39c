//! Foundation module - Shared domain primitives.
//!
//! Contains the value objects, identifiers, event infrastructure, and error
//! types that form the vocabulary of the chit fund domain.

mod errors;
mod events;
mod ids;
mod money;
mod timestamp;

pub use errors::{DomainError, ErrorCode, ValidationError};
pub use events::{DomainEvent, EventEnvelope, EventId, SerializableDomainEvent};
pub use ids::{AccountId, PaymentId, PlanId};
pub use money::Money;
pub use timestamp::Timestamp;

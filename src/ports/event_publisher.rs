//! EventPublisher port - interface for publishing lifecycle events.
//!
//! The domain publishes account lifecycle events without knowing about the
//! underlying transport (audit-log table, in-memory bus for tests).

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, EventEnvelope};

/// Port for publishing domain events.
///
/// Implementations must deliver synchronously: `publish` returns only after
/// the event has been handed to the consumer, so a lifecycle event is
/// observable before the triggering operation's caller sees completion.
#[async_trait]
pub trait EventPublisher: Send + Sync {
    /// Publish a single event envelope.
    async fn publish(&self, event: EventEnvelope) -> Result<(), DomainError>;

    /// Publish multiple events in order.
    async fn publish_all(&self, events: Vec<EventEnvelope>) -> Result<(), DomainError>;
}

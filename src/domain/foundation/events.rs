//! Event infrastructure for domain event publishing.
//!
//! Provides the transport types for event-driven notification:
//! - `EventId` - unique identifier for events (deduplication)
//! - `EventEnvelope` - transport wrapper carrying a serialized event
//! - `DomainEvent` - trait that all domain events implement

use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use std::fmt;
use uuid::Uuid;

use super::Timestamp;

/// Trait that all domain events must implement.
///
/// Provides the contract for event identification, routing, and ordering.
pub trait DomainEvent: Send + Sync {
    /// Returns the event type string (e.g., "account.registered.v1").
    /// Used for routing and filtering.
    fn event_type(&self) -> &'static str;

    /// Returns the ID of the aggregate that emitted this event.
    fn aggregate_id(&self) -> String;

    /// Returns the type of aggregate (e.g., "Account").
    fn aggregate_type(&self) -> &'static str;

    /// Returns when the event occurred.
    fn occurred_at(&self) -> Timestamp;

    /// Returns the unique ID for this event instance.
    fn event_id(&self) -> EventId;
}

/// Extension trait that provides `to_envelope()` for serializable domain events.
///
/// Automatically implemented for any type that implements both `DomainEvent`
/// and `Serialize`.
pub trait SerializableDomainEvent: DomainEvent + Serialize {
    /// Converts this domain event into an `EventEnvelope` for transport.
    fn to_envelope(&self) -> EventEnvelope {
        EventEnvelope {
            event_id: self.event_id(),
            event_type: self.event_type().to_string(),
            aggregate_id: self.aggregate_id(),
            aggregate_type: self.aggregate_type().to_string(),
            occurred_at: self.occurred_at(),
            payload: serde_json::to_value(self)
                .expect("Event serialization should never fail for well-formed events"),
        }
    }
}

impl<T: DomainEvent + Serialize> SerializableDomainEvent for T {}

/// Unique identifier for an event instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EventId(Uuid);

impl EventId {
    /// Creates a new random EventId.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Returns the inner UUID.
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for EventId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for EventId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Transport wrapper for a domain event.
///
/// Carries routing context alongside the serialized payload so that
/// consumers (audit log, test bus) never need the concrete event type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventEnvelope {
    /// Unique ID of this event instance.
    pub event_id: EventId,

    /// Event type string for routing (e.g., "account.registered.v1").
    pub event_type: String,

    /// ID of the aggregate that emitted the event.
    pub aggregate_id: String,

    /// Type of the aggregate (e.g., "Account").
    pub aggregate_type: String,

    /// When the event occurred.
    pub occurred_at: Timestamp,

    /// Serialized event body.
    pub payload: JsonValue,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Debug, Serialize)]
    struct ProbeEvent {
        event_id: EventId,
        name: String,
        occurred_at: Timestamp,
    }

    impl DomainEvent for ProbeEvent {
        fn event_type(&self) -> &'static str {
            "probe.fired.v1"
        }

        fn aggregate_id(&self) -> String {
            "probe-1".to_string()
        }

        fn aggregate_type(&self) -> &'static str {
            "Probe"
        }

        fn occurred_at(&self) -> Timestamp {
            self.occurred_at
        }

        fn event_id(&self) -> EventId {
            self.event_id
        }
    }

    #[test]
    fn to_envelope_copies_routing_fields() {
        let event = ProbeEvent {
            event_id: EventId::new(),
            name: "probe".to_string(),
            occurred_at: Timestamp::now(),
        };

        let envelope = event.to_envelope();
        assert_eq!(envelope.event_type, "probe.fired.v1");
        assert_eq!(envelope.aggregate_id, "probe-1");
        assert_eq!(envelope.aggregate_type, "Probe");
        assert_eq!(envelope.event_id, event.event_id);
        assert_eq!(envelope.payload.get("name"), Some(&json!("probe")));
    }
}

//! In-memory event bus for tests and single-process deployments.

use std::sync::Mutex;

use async_trait::async_trait;
use tracing::debug;

use crate::domain::foundation::{DomainError, EventEnvelope};
use crate::ports::EventPublisher;

/// Event publisher that retains every envelope in memory.
///
/// Useful in tests to assert on published events, and as a no-op-ish
/// publisher when running without a database.
#[derive(Default)]
pub struct InMemoryEventBus {
    published: Mutex<Vec<EventEnvelope>>,
}

impl InMemoryEventBus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a copy of every event published so far, in order.
    pub fn published_events(&self) -> Vec<EventEnvelope> {
        self.published.lock().unwrap().clone()
    }

    /// Returns published events matching the given event type.
    pub fn events_of_type(&self, event_type: &str) -> Vec<EventEnvelope> {
        self.published
            .lock()
            .unwrap()
            .iter()
            .filter(|e| e.event_type == event_type)
            .cloned()
            .collect()
    }

    pub fn event_count(&self) -> usize {
        self.published.lock().unwrap().len()
    }

    pub fn clear(&self) {
        self.published.lock().unwrap().clear();
    }
}

#[async_trait]
impl EventPublisher for InMemoryEventBus {
    async fn publish(&self, event: EventEnvelope) -> Result<(), DomainError> {
        debug!(event_type = %event.event_type, aggregate_id = %event.aggregate_id, "event captured");
        self.published.lock().unwrap().push(event);
        Ok(())
    }

    async fn publish_all(&self, events: Vec<EventEnvelope>) -> Result<(), DomainError> {
        self.published.lock().unwrap().extend(events);
        Ok(())
    }
}

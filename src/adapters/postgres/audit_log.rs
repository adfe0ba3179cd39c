//! PostgreSQL audit log consumer for account lifecycle events.
//!
//! Implements the EventPublisher port by appending each envelope to the
//! `account_audit_log` table. Delivery is synchronous: the triggering
//! handler does not return until the row is committed.

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::debug;
use uuid::Uuid;

use crate::domain::foundation::{DomainError, ErrorCode, EventEnvelope};
use crate::ports::EventPublisher;

/// Audit-log implementation of the EventPublisher port.
pub struct PostgresAuditLog {
    pool: PgPool,
}

impl PostgresAuditLog {
    /// Creates an audit log backed by the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Pulls the holder's name out of an account event payload.
///
/// The payload is the externally tagged `AccountEvent` enum, so the name
/// sits one level under the variant tag.
fn holder_name(envelope: &EventEnvelope) -> Option<&str> {
    envelope
        .payload
        .as_object()?
        .values()
        .next()?
        .get("holder_name")?
        .as_str()
}

#[async_trait]
impl EventPublisher for PostgresAuditLog {
    async fn publish(&self, event: EventEnvelope) -> Result<(), DomainError> {
        let account_id = Uuid::parse_str(&event.aggregate_id).ok();

        sqlx::query(
            r#"
            INSERT INTO account_audit_log (
                id, event_type, account_id, account_name, payload, occurred_at, recorded_at
            ) VALUES ($1, $2, $3, $4, $5, $6, now())
            "#,
        )
        .bind(event.event_id.as_uuid())
        .bind(&event.event_type)
        .bind(account_id)
        .bind(holder_name(&event).unwrap_or_default())
        .bind(&event.payload)
        .bind(event.occurred_at.as_datetime())
        .execute(&self.pool)
        .await
        .map_err(|e| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Failed to append audit log entry: {}", e),
            )
        })?;

        debug!(event_type = %event.event_type, aggregate_id = %event.aggregate_id, "audit log entry appended");
        Ok(())
    }

    async fn publish_all(&self, events: Vec<EventEnvelope>) -> Result<(), DomainError> {
        for event in events {
            self.publish(event).await?;
        }
        Ok(())
    }
}

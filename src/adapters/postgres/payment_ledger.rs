//! PostgreSQL implementation of the append-only payment ledger.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::foundation::{AccountId, DomainError, ErrorCode, Money, PaymentId, PlanId, Timestamp};
use crate::domain::payment::{PaymentRecord, PaymentStatus};
use crate::ports::PaymentLedger;

/// PostgreSQL implementation of the PaymentLedger port.
///
/// `recorded_at` is stamped with the database clock at insert time; the
/// value carried on the record is ignored, per the ledger contract.
pub struct PostgresPaymentLedger {
    pool: PgPool,
}

impl PostgresPaymentLedger {
    /// Creates a ledger backed by the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Database row representation of a ledger entry.
#[derive(Debug, sqlx::FromRow)]
struct PaymentRow {
    id: Uuid,
    account_id: Uuid,
    plan_id: Uuid,
    installment_number: i32,
    amount_credited: Decimal,
    remainder_amount: Decimal,
    status: String,
    recorded_at: DateTime<Utc>,
}

impl TryFrom<PaymentRow> for PaymentRecord {
    type Error = DomainError;

    fn try_from(row: PaymentRow) -> Result<Self, Self::Error> {
        let status = match row.status.as_str() {
            "paid" => PaymentStatus::Paid,
            other => {
                return Err(DomainError::new(
                    ErrorCode::DatabaseError,
                    format!("Invalid payment status value: {}", other),
                ))
            }
        };

        let money = |value: Decimal, column: &str| {
            Money::new(value).map_err(|e| {
                DomainError::new(
                    ErrorCode::DatabaseError,
                    format!("Column {} holds invalid amount: {}", column, e),
                )
            })
        };

        Ok(PaymentRecord {
            id: PaymentId::from_uuid(row.id),
            account_id: AccountId::from_uuid(row.account_id),
            plan_id: PlanId::from_uuid(row.plan_id),
            installment_number: u32::try_from(row.installment_number).map_err(|_| {
                DomainError::new(
                    ErrorCode::DatabaseError,
                    format!(
                        "Column installment_number holds negative value {}",
                        row.installment_number
                    ),
                )
            })?,
            amount_credited: money(row.amount_credited, "amount_credited")?,
            remainder_amount: money(row.remainder_amount, "remainder_amount")?,
            status,
            recorded_at: Timestamp::from_datetime(row.recorded_at),
        })
    }
}

#[async_trait]
impl PaymentLedger for PostgresPaymentLedger {
    async fn append(&self, record: &PaymentRecord) -> Result<(), DomainError> {
        sqlx::query(
            r#"
            INSERT INTO payments (
                id, account_id, plan_id, installment_number,
                amount_credited, remainder_amount, status, recorded_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, now())
            "#,
        )
        .bind(record.id.as_uuid())
        .bind(record.account_id.as_uuid())
        .bind(record.plan_id.as_uuid())
        .bind(record.installment_number as i32)
        .bind(record.amount_credited.amount())
        .bind(record.remainder_amount.amount())
        .bind(record.status.as_str())
        .execute(&self.pool)
        .await
        .map_err(|e| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Failed to append payment record: {}", e),
            )
        })?;

        Ok(())
    }

    async fn list_for_account(
        &self,
        account_id: &AccountId,
    ) -> Result<Vec<PaymentRecord>, DomainError> {
        let rows: Vec<PaymentRow> = sqlx::query_as(
            r#"
            SELECT id, account_id, plan_id, installment_number,
                   amount_credited, remainder_amount, status, recorded_at
            FROM payments
            WHERE account_id = $1
            ORDER BY recorded_at ASC
            "#,
        )
        .bind(account_id.as_uuid())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Failed to list payment records: {}", e),
            )
        })?;

        rows.into_iter().map(PaymentRecord::try_from).collect()
    }
}

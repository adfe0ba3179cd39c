//! PostgreSQL implementation of AccountRepository.

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::account::Account;
use crate::domain::foundation::{AccountId, DomainError, ErrorCode, Money, PlanId, Timestamp};
use crate::ports::AccountRepository;

/// PostgreSQL implementation of the AccountRepository port.
pub struct PostgresAccountRepository {
    pool: PgPool,
}

impl PostgresAccountRepository {
    /// Creates a repository backed by the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Database row representation of an account.
#[derive(Debug, sqlx::FromRow)]
struct AccountRow {
    id: Uuid,
    holder_name: String,
    plan_id: Option<Uuid>,
    created_on: NaiveDate,
    months_paid: i32,
    months_missed: i32,
    pending_amount: Decimal,
    total_paid: Decimal,
    total_pending: Decimal,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<AccountRow> for Account {
    type Error = DomainError;

    fn try_from(row: AccountRow) -> Result<Self, Self::Error> {
        Ok(Account {
            id: AccountId::from_uuid(row.id),
            holder_name: row.holder_name,
            plan_id: row.plan_id.map(PlanId::from_uuid),
            created_on: row.created_on,
            months_paid: non_negative(row.months_paid, "months_paid")?,
            months_missed: non_negative(row.months_missed, "months_missed")?,
            pending_amount: stored_money(row.pending_amount, "pending_amount")?,
            total_paid: stored_money(row.total_paid, "total_paid")?,
            total_pending: stored_money(row.total_pending, "total_pending")?,
            created_at: Timestamp::from_datetime(row.created_at),
            updated_at: Timestamp::from_datetime(row.updated_at),
        })
    }
}

fn non_negative(value: i32, column: &str) -> Result<u32, DomainError> {
    u32::try_from(value).map_err(|_| {
        DomainError::new(
            ErrorCode::DatabaseError,
            format!("Column {} holds negative value {}", column, value),
        )
    })
}

fn stored_money(value: Decimal, column: &str) -> Result<Money, DomainError> {
    Money::new(value).map_err(|e| {
        DomainError::new(
            ErrorCode::DatabaseError,
            format!("Column {} holds invalid amount: {}", column, e),
        )
    })
}

#[async_trait]
impl AccountRepository for PostgresAccountRepository {
    async fn save(&self, account: &Account) -> Result<(), DomainError> {
        sqlx::query(
            r#"
            INSERT INTO accounts (
                id, holder_name, plan_id, created_on, months_paid, months_missed,
                pending_amount, total_paid, total_pending, created_at, updated_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
            "#,
        )
        .bind(account.id.as_uuid())
        .bind(&account.holder_name)
        .bind(account.plan_id.map(|p| *p.as_uuid()))
        .bind(account.created_on)
        .bind(account.months_paid as i32)
        .bind(account.months_missed as i32)
        .bind(account.pending_amount.amount())
        .bind(account.total_paid.amount())
        .bind(account.total_pending.amount())
        .bind(account.created_at.as_datetime())
        .bind(account.updated_at.as_datetime())
        .execute(&self.pool)
        .await
        .map_err(|e| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Failed to save account: {}", e),
            )
        })?;

        Ok(())
    }

    async fn update(&self, account: &Account) -> Result<(), DomainError> {
        let result = sqlx::query(
            r#"
            UPDATE accounts SET
                plan_id = $2,
                months_paid = $3,
                months_missed = $4,
                pending_amount = $5,
                total_paid = $6,
                total_pending = $7,
                updated_at = $8
            WHERE id = $1
            "#,
        )
        .bind(account.id.as_uuid())
        .bind(account.plan_id.map(|p| *p.as_uuid()))
        .bind(account.months_paid as i32)
        .bind(account.months_missed as i32)
        .bind(account.pending_amount.amount())
        .bind(account.total_paid.amount())
        .bind(account.total_pending.amount())
        .bind(account.updated_at.as_datetime())
        .execute(&self.pool)
        .await
        .map_err(|e| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Failed to update account: {}", e),
            )
        })?;

        if result.rows_affected() == 0 {
            return Err(DomainError::new(
                ErrorCode::AccountNotFound,
                format!("Account {} not found", account.id),
            ));
        }
        Ok(())
    }

    async fn find_by_id(&self, id: &AccountId) -> Result<Option<Account>, DomainError> {
        let row: Option<AccountRow> = sqlx::query_as(
            r#"
            SELECT id, holder_name, plan_id, created_on, months_paid, months_missed,
                   pending_amount, total_paid, total_pending, created_at, updated_at
            FROM accounts
            WHERE id = $1
            "#,
        )
        .bind(id.as_uuid())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Failed to load account: {}", e),
            )
        })?;

        row.map(Account::try_from).transpose()
    }

    async fn delete(&self, id: &AccountId) -> Result<(), DomainError> {
        let result = sqlx::query("DELETE FROM accounts WHERE id = $1")
            .bind(id.as_uuid())
            .execute(&self.pool)
            .await
            .map_err(|e| {
                DomainError::new(
                    ErrorCode::DatabaseError,
                    format!("Failed to delete account: {}", e),
                )
            })?;

        if result.rows_affected() == 0 {
            return Err(DomainError::new(
                ErrorCode::AccountNotFound,
                format!("Account {} not found", id),
            ));
        }
        Ok(())
    }
}

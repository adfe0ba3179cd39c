//! PostgreSQL implementation of PlanRepository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::foundation::{DomainError, ErrorCode, Money, PlanId, Timestamp};
use crate::domain::plan::Plan;
use crate::ports::PlanRepository;

/// PostgreSQL implementation of the PlanRepository port.
pub struct PostgresPlanRepository {
    pool: PgPool,
}

impl PostgresPlanRepository {
    /// Creates a repository backed by the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Database row representation of a plan.
///
/// Derived totals are stored alongside the inputs; the aggregate recomputes
/// them on every mutation, so the row is always written whole and the
/// stored values can be trusted on read.
#[derive(Debug, sqlx::FromRow)]
struct PlanRow {
    id: Uuid,
    monthly_amount: Decimal,
    duration_months: i32,
    bonus_amount: Decimal,
    total_principal: Decimal,
    total_payout: Decimal,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<PlanRow> for Plan {
    type Error = DomainError;

    fn try_from(row: PlanRow) -> Result<Self, Self::Error> {
        let money = |value: Decimal, column: &str| {
            Money::new(value).map_err(|e| {
                DomainError::new(
                    ErrorCode::DatabaseError,
                    format!("Column {} holds invalid amount: {}", column, e),
                )
            })
        };

        let duration_months = u32::try_from(row.duration_months).map_err(|_| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Column duration_months holds invalid value {}", row.duration_months),
            )
        })?;

        Ok(Plan {
            id: PlanId::from_uuid(row.id),
            monthly_amount: money(row.monthly_amount, "monthly_amount")?,
            duration_months,
            bonus_amount: money(row.bonus_amount, "bonus_amount")?,
            total_principal: money(row.total_principal, "total_principal")?,
            total_payout: money(row.total_payout, "total_payout")?,
            created_at: Timestamp::from_datetime(row.created_at),
            updated_at: Timestamp::from_datetime(row.updated_at),
        })
    }
}

const SELECT_COLUMNS: &str = r#"
    SELECT id, monthly_amount, duration_months, bonus_amount,
           total_principal, total_payout, created_at, updated_at
    FROM chit_plans
"#;

#[async_trait]
impl PlanRepository for PostgresPlanRepository {
    async fn save(&self, plan: &Plan) -> Result<(), DomainError> {
        sqlx::query(
            r#"
            INSERT INTO chit_plans (
                id, monthly_amount, duration_months, bonus_amount,
                total_principal, total_payout, created_at, updated_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            ON CONFLICT (id) DO UPDATE SET
                monthly_amount = EXCLUDED.monthly_amount,
                duration_months = EXCLUDED.duration_months,
                bonus_amount = EXCLUDED.bonus_amount,
                total_principal = EXCLUDED.total_principal,
                total_payout = EXCLUDED.total_payout,
                updated_at = EXCLUDED.updated_at
            "#,
        )
        .bind(plan.id.as_uuid())
        .bind(plan.monthly_amount.amount())
        .bind(plan.duration_months as i32)
        .bind(plan.bonus_amount.amount())
        .bind(plan.total_principal.amount())
        .bind(plan.total_payout.amount())
        .bind(plan.created_at.as_datetime())
        .bind(plan.updated_at.as_datetime())
        .execute(&self.pool)
        .await
        .map_err(|e| {
            DomainError::new(ErrorCode::DatabaseError, format!("Failed to save plan: {}", e))
        })?;

        Ok(())
    }

    async fn find_by_id(&self, id: &PlanId) -> Result<Option<Plan>, DomainError> {
        let row: Option<PlanRow> = sqlx::query_as(&format!("{} WHERE id = $1", SELECT_COLUMNS))
            .bind(id.as_uuid())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                DomainError::new(ErrorCode::DatabaseError, format!("Failed to load plan: {}", e))
            })?;

        row.map(Plan::try_from).transpose()
    }

    async fn list(&self) -> Result<Vec<Plan>, DomainError> {
        let rows: Vec<PlanRow> =
            sqlx::query_as(&format!("{} ORDER BY monthly_amount ASC", SELECT_COLUMNS))
                .fetch_all(&self.pool)
                .await
                .map_err(|e| {
                    DomainError::new(
                        ErrorCode::DatabaseError,
                        format!("Failed to list plans: {}", e),
                    )
                })?;

        rows.into_iter().map(Plan::try_from).collect()
    }
}

//! Plan repository port.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, PlanId};
use crate::domain::plan::Plan;

/// Repository port for Plan persistence.
///
/// Plans are effectively immutable after creation; `save` covers both the
/// insert and the rare administrative edit (derived totals travel with the
/// aggregate, so a row is always written whole).
#[async_trait]
pub trait PlanRepository: Send + Sync {
    /// Save a plan (insert or overwrite).
    async fn save(&self, plan: &Plan) -> Result<(), DomainError>;

    /// Find a plan by its ID.
    ///
    /// Returns `None` if not found.
    async fn find_by_id(&self, id: &PlanId) -> Result<Option<Plan>, DomainError>;

    /// List all plans, for tier selection at registration.
    async fn list(&self) -> Result<Vec<Plan>, DomainError>;
}

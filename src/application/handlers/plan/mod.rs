//! Plan command and query handlers.

mod create_plan;
mod get_plan;

pub use create_plan::{CreatePlanCommand, CreatePlanHandler};
pub use get_plan::{resolve_plan, GetPlanHandler, GetPlanQuery};

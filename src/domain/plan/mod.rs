//! Plan domain - subscription tier definitions.

mod errors;
#[allow(clippy::module_inception)]
mod plan;

pub use errors::PlanError;
pub use plan::Plan;

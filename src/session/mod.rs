mod manager;
mod summary;

pub use manager::{PackMode, PlanSession, DEFAULT_DAILY_CALORIES};
pub use summary::{group_containers, ContainerGroup, PlanSummary};

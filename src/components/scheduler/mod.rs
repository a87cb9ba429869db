mod actor;
mod handle;
pub mod models;
pub mod service;

pub use handle::SchedulerHandle;
pub use models::{GenerateRequest, ScheduleItem};
pub use service::{HttpScheduleService, ScheduleService};

use crate::error::PlannerResult;
use async_trait::async_trait;

#[async_trait]
impl super::Component for SchedulerHandle {
    fn name(&self) -> &'static str {
        "scheduler"
    }

    async fn shutdown(&self) -> PlannerResult<()> {
        SchedulerHandle::shutdown(self).await
    }
}

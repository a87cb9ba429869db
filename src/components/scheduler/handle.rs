use super::actor::{SchedulerActor, SchedulerActorHandle};
use super::models::{GenerateRequest, ScheduleItem};
use super::service::ScheduleService;
use crate::error::PlannerResult;
use std::sync::Arc;
use tokio::task::JoinHandle;

/// Handle for interacting with the scheduler actor
#[derive(Clone)]
pub struct SchedulerHandle {
    actor_handle: SchedulerActorHandle,
    _actor_task: Arc<JoinHandle<()>>,
}

impl SchedulerHandle {
    /// Create a new SchedulerHandle and spawn the actor
    pub fn spawn(service: Arc<dyn ScheduleService>) -> Self {
        let (mut actor, handle) = SchedulerActor::new(service);

        let actor_task = tokio::spawn(async move {
            actor.run().await;
        });

        Self {
            actor_handle: handle,
            _actor_task: Arc::new(actor_task),
        }
    }

    /// Ask the scheduling service for a schedule
    pub async fn generate(&self, request: GenerateRequest) -> PlannerResult<Vec<ScheduleItem>> {
        self.actor_handle.generate(request).await
    }

    /// Shutdown the actor
    pub async fn shutdown(&self) -> PlannerResult<()> {
        self.actor_handle.shutdown().await
    }
}

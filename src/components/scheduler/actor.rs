use super::models::{GenerateRequest, ScheduleItem};
use super::service::ScheduleService;
use crate::error::{scheduler_error, PlannerResult};
use std::sync::Arc;
use tokio::sync::mpsc;
use tracing::{error, info};

/// The scheduler actor that forwards requests to the scheduling service
pub struct SchedulerActor {
    service: Arc<dyn ScheduleService>,
    command_rx: mpsc::Receiver<SchedulerCommand>,
}

/// Commands that can be sent to the scheduler actor
pub enum SchedulerCommand {
    Generate(
        GenerateRequest,
        mpsc::Sender<PlannerResult<Vec<ScheduleItem>>>,
    ),
    Shutdown,
}

/// Handle for communicating with the scheduler actor
#[derive(Clone)]
pub struct SchedulerActorHandle {
    command_tx: mpsc::Sender<SchedulerCommand>,
}

impl SchedulerActorHandle {
    /// Ask the service for a schedule
    pub async fn generate(&self, request: GenerateRequest) -> PlannerResult<Vec<ScheduleItem>> {
        let (response_tx, mut response_rx) = mpsc::channel(1);
        self.command_tx
            .send(SchedulerCommand::Generate(request, response_tx))
            .await
            .map_err(|e| scheduler_error(&format!("Actor mailbox error: {}", e)))?;

        response_rx
            .recv()
            .await
            .ok_or_else(|| scheduler_error("Response channel closed"))?
    }

    /// Shutdown the actor
    pub async fn shutdown(&self) -> PlannerResult<()> {
        let _ = self.command_tx.send(SchedulerCommand::Shutdown).await;
        Ok(())
    }
}

impl SchedulerActor {
    /// Create a new actor and return its handle
    pub fn new(service: Arc<dyn ScheduleService>) -> (Self, SchedulerActorHandle) {
        let (command_tx, command_rx) = mpsc::channel(32);

        let actor = Self {
            service,
            command_rx,
        };

        let handle = SchedulerActorHandle { command_tx };

        (actor, handle)
    }

    /// Start the actor's processing loop
    pub async fn run(&mut self) {
        info!("Scheduler actor started");

        while let Some(cmd) = self.command_rx.recv().await {
            match cmd {
                SchedulerCommand::Generate(request, response_tx) => {
                    let result = self.service.generate(&request).await;
                    if let Err(e) = &result {
                        error!("Schedule generation failed: {}", e);
                    }
                    let _ = response_tx.send(result).await;
                }
                SchedulerCommand::Shutdown => {
                    info!("Scheduler actor shutting down");
                    break;
                }
            }
        }

        info!("Scheduler actor shut down");
    }
}

#![allow(dead_code)]

use async_trait::async_trait;
use std::path::Path;
use std::sync::{Arc, Mutex};
use study_planner::commands::CommandContext;
use study_planner::components::scheduler::{GenerateRequest, ScheduleItem, ScheduleService};
use study_planner::components::storage::MemoryBackend;
use study_planner::components::{SchedulerHandle, StorageHandle};
use study_planner::config::Config;
use study_planner::error::{scheduler_error, PlannerResult};

/// Schedule service that answers with a canned schedule and remembers
/// every request it saw
#[derive(Default)]
pub struct MockScheduleService {
    schedule: Vec<ScheduleItem>,
    fail: bool,
    requests: Mutex<Vec<GenerateRequest>>,
}

impl MockScheduleService {
    pub fn returning(schedule: Vec<ScheduleItem>) -> Arc<Self> {
        Arc::new(Self {
            schedule,
            ..Default::default()
        })
    }

    pub fn failing() -> Arc<Self> {
        Arc::new(Self {
            fail: true,
            ..Default::default()
        })
    }

    pub fn requests(&self) -> Vec<GenerateRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl ScheduleService for MockScheduleService {
    async fn generate(&self, request: &GenerateRequest) -> PlannerResult<Vec<ScheduleItem>> {
        self.requests.lock().unwrap().push(request.clone());
        if self.fail {
            return Err(scheduler_error("connection refused"));
        }
        Ok(self.schedule.clone())
    }
}

pub fn memory_storage() -> StorageHandle {
    StorageHandle::spawn(Box::new(MemoryBackend::new()))
}

pub fn item(kind: &str, subject: &str, start: &str, end: &str) -> ScheduleItem {
    ScheduleItem {
        kind: kind.to_string(),
        subject: subject.to_string(),
        start: start.to_string(),
        end: end.to_string(),
    }
}

/// Command context over an in-memory store and the given service,
/// exporting into `export_dir`
pub fn test_context(service: Arc<MockScheduleService>, export_dir: &Path) -> CommandContext {
    let config = Config {
        export_path: export_dir.join("study_schedule.csv"),
        ..Config::default()
    };
    let scheduler = SchedulerHandle::spawn(service);
    CommandContext::new(Arc::new(config), memory_storage(), scheduler)
}

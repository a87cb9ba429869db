mod actor;
pub mod backend;

pub use actor::{StorageActor, StorageCommand, StorageHandle};
pub use backend::{FileBackend, MemoryBackend, StorageBackend};

use crate::error::PlannerResult;
use async_trait::async_trait;

// Storage key constants
pub mod keys {
    pub const FIXED_COMMITMENTS: &str = "fixedCommitments";
    pub const TASK_DETAILS: &str = "taskDetails";
    pub const USER_PREFERENCES: &str = "userPreferences";
    pub const FINAL_SCHEDULE: &str = "finalSchedule";

    /// Every key the planner writes
    pub const ALL: [&str; 4] = [
        FIXED_COMMITMENTS,
        TASK_DETAILS,
        USER_PREFERENCES,
        FINAL_SCHEDULE,
    ];
}

#[async_trait]
impl super::Component for StorageHandle {
    fn name(&self) -> &'static str {
        "storage"
    }

    async fn shutdown(&self) -> PlannerResult<()> {
        StorageHandle::shutdown(self).await
    }
}

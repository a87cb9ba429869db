use super::forms::{stored_commitments, stored_preferences, stored_tasks};
use crate::components::calendar::Calendar;
use crate::components::scheduler::{GenerateRequest, ScheduleItem, SchedulerHandle};
use crate::components::storage::{keys, StorageHandle};
use crate::error::{schedule_unavailable, PlannerResult};
use chrono::NaiveDate;
use tracing::{error, info};

/// Bundle everything stored so far into a request for the scheduling service.
/// Preferences that were never saved are sent as the defaults.
pub async fn build_request(storage: &StorageHandle) -> PlannerResult<GenerateRequest> {
    Ok(GenerateRequest {
        commitments: stored_commitments(storage).await?,
        tasks: stored_tasks(storage).await?,
        preferences: stored_preferences(storage).await?.unwrap_or_default(),
    })
}

/// Fetch a schedule, keep it for export and lay it out from `today`.
///
/// Any failure talking to the service is logged and reported as the
/// "backend not running" alert; the stored schedule is left alone then.
pub async fn load_schedule(
    storage: &StorageHandle,
    scheduler: &SchedulerHandle,
    today: NaiveDate,
    days: u32,
) -> PlannerResult<Calendar> {
    let request = build_request(storage).await?;

    let schedule: Vec<ScheduleItem> = match scheduler.generate(request).await {
        Ok(schedule) => schedule,
        Err(e) => {
            error!("Failed to load schedule: {}", e);
            return Err(schedule_unavailable());
        }
    };

    let calendar = Calendar::build(&schedule, today, days);
    storage.save_data(keys::FINAL_SCHEDULE, &schedule).await?;

    info!(
        "Loaded {} schedule items, {} within the next {} days",
        schedule.len(),
        calendar.entry_count(),
        days
    );

    Ok(calendar)
}

use crate::components::scheduler::ScheduleItem;
use crate::components::storage::{keys, StorageHandle};
use crate::error::{nothing_to_export, PlannerResult};
use std::path::Path;
use tracing::info;

pub const CSV_HEADER: &str = "Type,Subject,Start,End";

/// Serialize the schedule as CSV. Fields are joined as they are, without
/// quoting, so commas inside a subject shift the columns.
pub fn to_csv(schedule: &[ScheduleItem]) -> String {
    let mut csv = format!("{}\n", CSV_HEADER);
    for item in schedule {
        csv.push_str(&format!(
            "{},{},{},{}\n",
            item.kind, item.subject, item.start, item.end
        ));
    }
    csv
}

/// Write the last fetched schedule to `path` as CSV and return how many
/// items were written. Fails without touching `path` when there is no
/// stored schedule.
pub async fn download_csv(storage: &StorageHandle, path: &Path) -> PlannerResult<usize> {
    let schedule: Vec<ScheduleItem> = storage.get_data(keys::FINAL_SCHEDULE).await?;
    if schedule.is_empty() {
        return Err(nothing_to_export());
    }

    tokio::fs::write(path, to_csv(&schedule)).await?;
    info!("Wrote {} schedule items to {}", schedule.len(), path.display());

    Ok(schedule.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_csv() {
        let schedule = vec![
            ScheduleItem {
                kind: "Fixed Commitment".to_string(),
                subject: "Lecture".to_string(),
                start: "2026-10-20 09:00".to_string(),
                end: "2026-10-20 10:30".to_string(),
            },
            ScheduleItem {
                kind: "Task".to_string(),
                subject: "Essay, draft".to_string(),
                start: "2026-10-20 13:00".to_string(),
                end: "2026-10-20 14:00".to_string(),
            },
        ];

        assert_eq!(
            to_csv(&schedule),
            "Type,Subject,Start,End\n\
             Fixed Commitment,Lecture,2026-10-20 09:00,2026-10-20 10:30\n\
             Task,Essay, draft,2026-10-20 13:00,2026-10-20 14:00\n"
        );
    }

    #[test]
    fn test_empty_schedule_is_header_only() {
        assert_eq!(to_csv(&[]), "Type,Subject,Start,End\n");
    }
}

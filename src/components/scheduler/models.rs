use crate::components::planner::models::{Commitment, Preferences, Task};
use crate::utils::time::{date_part, time_part};

/// `type` value the scheduling service gives fixed commitments
pub const FIXED_COMMITMENT_TYPE: &str = "Fixed Commitment";

/// One placed block of the generated schedule
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ScheduleItem {
    /// "Fixed Commitment" or "Task"
    #[serde(rename = "type")]
    pub kind: String,
    pub subject: String,
    /// `YYYY-MM-DD HH:MM`
    pub start: String,
    /// `YYYY-MM-DD HH:MM`
    pub end: String,
}

impl ScheduleItem {
    pub fn is_fixed(&self) -> bool {
        self.kind == FIXED_COMMITMENT_TYPE
    }

    /// Calendar date the item is filed under
    pub fn date(&self) -> &str {
        date_part(&self.start)
    }

    pub fn start_time(&self) -> &str {
        time_part(&self.start)
    }

    pub fn end_time(&self) -> &str {
        time_part(&self.end)
    }
}

/// Body of the request to the scheduling service
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct GenerateRequest {
    pub commitments: Vec<Commitment>,
    pub tasks: Vec<Task>,
    pub preferences: Preferences,
}

/// Body of the scheduling service's answer
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct GenerateResponse {
    pub schedule: Vec<ScheduleItem>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schedule_item_wire_format() {
        let item: ScheduleItem = serde_json::from_str(
            r#"{"type":"Fixed Commitment","subject":"Lecture","start":"2026-10-20 09:00","end":"2026-10-20 10:30"}"#,
        )
        .unwrap();

        assert!(item.is_fixed());
        assert_eq!(item.date(), "2026-10-20");
        assert_eq!(item.start_time(), "09:00");
        assert_eq!(item.end_time(), "10:30");

        let task = ScheduleItem {
            kind: "Task".to_string(),
            ..item
        };
        assert!(!task.is_fixed());
        assert_eq!(serde_json::to_value(&task).unwrap()["type"], "Task");
    }
}

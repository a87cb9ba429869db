mod render;

pub use render::to_html;

use crate::components::scheduler::ScheduleItem;
use crate::utils::time::{date_window, format_date};
use chrono::NaiveDate;
use std::collections::HashMap;

/// How an entry is styled in the calendar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    Fixed,
    Task,
}

impl EntryKind {
    pub fn css_class(&self) -> &'static str {
        match self {
            EntryKind::Fixed => "fixed",
            EntryKind::Task => "task",
        }
    }
}

/// One schedule item as shown inside a day cell
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarEntry {
    pub kind: EntryKind,
    pub subject: String,
    pub start_time: String,
    pub end_time: String,
}

impl From<&ScheduleItem> for CalendarEntry {
    fn from(item: &ScheduleItem) -> Self {
        Self {
            kind: if item.is_fixed() {
                EntryKind::Fixed
            } else {
                EntryKind::Task
            },
            subject: item.subject.clone(),
            start_time: item.start_time().to_string(),
            end_time: item.end_time().to_string(),
        }
    }
}

/// A single day cell
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarDay {
    pub date: NaiveDate,
    /// Entries in the order the service returned them
    pub entries: Vec<CalendarEntry>,
}

impl CalendarDay {
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Consecutive day cells starting at a given date
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Calendar {
    pub days: Vec<CalendarDay>,
}

/// Schedule items keyed by the date part of their start
pub fn group_by_date(schedule: &[ScheduleItem]) -> HashMap<&str, Vec<&ScheduleItem>> {
    let mut grouped: HashMap<&str, Vec<&ScheduleItem>> = HashMap::new();
    for item in schedule {
        grouped.entry(item.date()).or_default().push(item);
    }
    grouped
}

impl Calendar {
    /// Lay `schedule` out over `days` cells starting at `start`.
    /// Items dated outside the window are left out.
    pub fn build(schedule: &[ScheduleItem], start: NaiveDate, days: u32) -> Self {
        let grouped = group_by_date(schedule);

        let days = date_window(start, days)
            .into_iter()
            .map(|date| {
                let key = format_date(date);
                let entries: Vec<CalendarEntry> = grouped
                    .get(key.as_str())
                    .map(|items| items.iter().map(|item| CalendarEntry::from(*item)).collect())
                    .unwrap_or_default();
                CalendarDay { date, entries }
            })
            .collect();

        Self { days }
    }

    /// Number of entries across all cells
    pub fn entry_count(&self) -> usize {
        self.days.iter().map(|day| day.entries.len()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(kind: &str, subject: &str, start: &str, end: &str) -> ScheduleItem {
        ScheduleItem {
            kind: kind.to_string(),
            subject: subject.to_string(),
            start: start.to_string(),
            end: end.to_string(),
        }
    }

    fn oct(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, day).unwrap()
    }

    #[test]
    fn test_always_thirty_cells() {
        let calendar = Calendar::build(&[], oct(19), 30);
        assert_eq!(calendar.days.len(), 30);
        assert_eq!(calendar.days[0].date, oct(19));
        assert_eq!(calendar.days[29].date, NaiveDate::from_ymd_opt(2026, 11, 17).unwrap());
        assert!(calendar.days.iter().all(CalendarDay::is_empty));
    }

    #[test]
    fn test_items_land_on_their_date() {
        let schedule = vec![
            item("Fixed Commitment", "Lecture", "2026-10-20 09:00", "2026-10-20 10:30"),
            item("Task", "Essay", "2026-10-20 13:00", "2026-10-20 14:00"),
            item("Task", "Reading", "2026-10-22 09:00", "2026-10-22 09:30"),
        ];

        let calendar = Calendar::build(&schedule, oct(19), 30);

        assert!(calendar.days[0].is_empty());
        let tuesday = &calendar.days[1];
        assert_eq!(tuesday.entries.len(), 2);
        assert_eq!(tuesday.entries[0].kind, EntryKind::Fixed);
        assert_eq!(tuesday.entries[0].start_time, "09:00");
        assert_eq!(tuesday.entries[0].end_time, "10:30");
        assert_eq!(tuesday.entries[1].kind, EntryKind::Task);
        assert_eq!(tuesday.entries[1].subject, "Essay");
        assert_eq!(calendar.days[3].entries[0].subject, "Reading");
        assert_eq!(calendar.entry_count(), 3);
    }

    #[test]
    fn test_items_outside_window_are_dropped() {
        let schedule = vec![
            item("Task", "Yesterday", "2026-10-18 09:00", "2026-10-18 10:00"),
            item("Task", "Too late", "2026-11-18 09:00", "2026-11-18 10:00"),
            item("Task", "Garbled", "soon", "later"),
        ];

        let calendar = Calendar::build(&schedule, oct(19), 30);
        assert_eq!(calendar.days.len(), 30);
        assert_eq!(calendar.entry_count(), 0);
    }

    #[test]
    fn test_group_by_date() {
        let schedule = vec![
            item("Task", "A", "2026-10-20 09:00", "2026-10-20 10:00"),
            item("Task", "B", "2026-10-21 09:00", "2026-10-21 10:00"),
            item("Task", "C", "2026-10-20 11:00", "2026-10-20 12:00"),
        ];

        let grouped = group_by_date(&schedule);
        assert_eq!(grouped.len(), 2);
        let subjects: Vec<&str> = grouped["2026-10-20"].iter().map(|i| i.subject.as_str()).collect();
        assert_eq!(subjects, vec!["A", "C"]);
    }
}

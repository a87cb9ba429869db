use chrono::{NaiveDate, Utc};
use chrono_tz::Tz;

/// Format used for calendar day headers and schedule date keys
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Date part of a schedule timestamp ("YYYY-MM-DD HH:MM" -> "YYYY-MM-DD")
pub fn date_part(timestamp: &str) -> &str {
    timestamp.split(' ').next().unwrap_or("")
}

/// Time part of a schedule timestamp ("YYYY-MM-DD HH:MM" -> "HH:MM").
/// Empty when the timestamp carries no time.
pub fn time_part(timestamp: &str) -> &str {
    timestamp.split(' ').nth(1).unwrap_or("")
}

/// Today's date in the given timezone
pub fn today_in(timezone: Tz) -> NaiveDate {
    Utc::now().with_timezone(&timezone).date_naive()
}

/// Consecutive dates starting at `start`
pub fn date_window(start: NaiveDate, days: u32) -> Vec<NaiveDate> {
    start.iter_days().take(days as usize).collect()
}

/// Format a date the way schedule timestamps spell it
pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_date_and_time_parts() {
        assert_eq!(date_part("2026-10-19 09:30"), "2026-10-19");
        assert_eq!(time_part("2026-10-19 09:30"), "09:30");

        // No separator: whole string is the date, no time
        assert_eq!(date_part("2026-10-19"), "2026-10-19");
        assert_eq!(time_part("2026-10-19"), "");

        assert_eq!(date_part(""), "");
    }

    #[test]
    fn test_date_window_crosses_month_and_year() {
        let start = NaiveDate::from_ymd_opt(2026, 12, 20).unwrap();
        let window = date_window(start, 30);

        assert_eq!(window.len(), 30);
        assert_eq!(window[0], start);
        assert_eq!(format_date(window[11]), "2026-12-31");
        assert_eq!(format_date(window[12]), "2027-01-01");
        assert_eq!(format_date(window[29]), "2027-01-18");
    }

    #[test]
    fn test_today_in_timezones_differ_by_at_most_one_day() {
        let utc = today_in(chrono_tz::UTC);
        let kiritimati = today_in(chrono_tz::Pacific::Kiritimati);
        let diff = (kiritimati - utc).num_days();
        assert!((0..=1).contains(&diff));
    }
}

use super::{Calendar, CalendarDay};
use crate::error::PlannerResult;
use crate::utils::time::format_date;
use askama::Template;
use rust_i18n::t;
use std::fmt;

impl fmt::Display for CalendarDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", format_date(self.date))?;

        if self.entries.is_empty() {
            return writeln!(f, "  {}", t!("calendar_no_items"));
        }

        for entry in &self.entries {
            writeln!(
                f,
                "  [{}] {}  {} - {}",
                entry.kind.css_class(),
                entry.subject,
                entry.start_time,
                entry.end_time
            )?;
        }
        Ok(())
    }
}

impl fmt::Display for Calendar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for day in &self.days {
            write!(f, "{}", day)?;
        }
        Ok(())
    }
}

/// Standalone HTML page with one `div.day` per cell and one
/// `div.entry.fixed` / `div.entry.task` per item
#[derive(Template)]
#[template(path = "calendar.html")]
struct CalendarPage {
    days: Vec<CalendarDay>,
    no_items: String,
}

impl CalendarPage {
    fn new(calendar: &Calendar) -> Self {
        Self {
            days: calendar.days.clone(),
            no_items: t!("calendar_no_items").to_string(),
        }
    }
}

/// Render the calendar as a standalone HTML page
pub fn to_html(calendar: &Calendar) -> PlannerResult<String> {
    Ok(CalendarPage::new(calendar).render()?)
}

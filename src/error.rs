use miette::Diagnostic;
use rust_i18n::t;
use thiserror::Error;

/// Main error type for the application
#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("{0}")]
    #[diagnostic(code(planner::missing_fields))]
    MissingFields(String),

    #[error("{0}")]
    #[diagnostic(code(planner::invalid_number))]
    InvalidNumber(String),

    #[error("{0}")]
    #[diagnostic(code(planner::nothing_to_export))]
    NothingToExport(String),

    #[error("{0}")]
    #[diagnostic(code(planner::schedule_unavailable))]
    ScheduleUnavailable(String),

    #[error("Scheduling service error: {0}")]
    #[diagnostic(code(planner::scheduler))]
    Scheduler(String),

    #[error("Storage error: {0}")]
    #[diagnostic(code(planner::storage))]
    Storage(String),

    #[error("Configuration error: {0}")]
    #[diagnostic(code(planner::config))]
    Config(String),

    #[error(transparent)]
    #[diagnostic(code(planner::io))]
    Io(#[from] std::io::Error),

    #[error("Template rendering failed: {0}")]
    #[diagnostic(code(planner::template))]
    Template(#[from] askama::Error),

    #[error("Serialization error: {0}")]
    #[diagnostic(code(planner::serialization))]
    Serialization(String),

    #[error("Other error: {0}")]
    #[diagnostic(code(planner::other))]
    Other(String),
}

impl Error {
    /// True for the errors that are meant to be shown to the user as a plain
    /// alert rather than a failure report
    pub fn is_alert(&self) -> bool {
        matches!(
            self,
            Error::MissingFields(_)
                | Error::InvalidNumber(_)
                | Error::NothingToExport(_)
                | Error::ScheduleUnavailable(_)
        )
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Serialization(err.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Serialization(err.to_string())
    }
}

/// Type alias for Result with our Error type
pub type PlannerResult<T> = Result<T, Error>;

/// The alert shown when a form is submitted with an empty required field
pub fn missing_fields() -> Error {
    Error::MissingFields(t!("alert_fill_all_fields").to_string())
}

/// The alert shown when a numeric field has no leading digits
pub fn invalid_number(field: &str, value: &str) -> Error {
    Error::InvalidNumber(t!("alert_invalid_number", field = field, value = value).to_string())
}

/// The alert shown when exporting before any schedule was loaded
pub fn nothing_to_export() -> Error {
    Error::NothingToExport(t!("alert_no_schedule").to_string())
}

/// The alert shown when the schedule could not be fetched
pub fn schedule_unavailable() -> Error {
    Error::ScheduleUnavailable(t!("alert_schedule_failed").to_string())
}

/// Helper to create scheduling service errors
pub fn scheduler_error(message: &str) -> Error {
    Error::Scheduler(message.to_string())
}

/// Helper to create storage errors
pub fn storage_error(message: &str) -> Error {
    Error::Storage(message.to_string())
}

/// Helper to create configuration errors
pub fn config_error(message: &str) -> Error {
    Error::Config(message.to_string())
}

/// Helper to create other errors
pub fn other_error(message: &str) -> Error {
    Error::Other(message.to_string())
}

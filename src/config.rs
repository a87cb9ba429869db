use crate::error::{config_error, PlannerResult};
use chrono_tz::Tz;
use dotenvy::dotenv;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use url::Url;

/// Optional configuration file, read relative to the working directory
pub const CONFIG_FILE: &str = "config/planner.toml";

/// Where the scheduling service listens unless told otherwise
pub const DEFAULT_SCHEDULER_URL: &str = "http://localhost:5000";

/// Number of day cells in the rendered calendar
pub const DEFAULT_CALENDAR_DAYS: u32 = 30;

/// Main configuration structure for the planner
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    /// Base URL of the scheduling service; `/generate` is appended
    pub scheduler_url: String,
    /// JSON file backing the local key-value store
    pub store_path: PathBuf,
    /// Default destination of the CSV export
    pub export_path: PathBuf,
    /// Timezone used to decide what "today" is for the calendar
    pub timezone: String,
    /// Number of days the calendar shows
    pub calendar_days: u32,
    /// Locale for user-facing messages
    pub locale: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            scheduler_url: DEFAULT_SCHEDULER_URL.to_string(),
            store_path: PathBuf::from("planner_store.json"),
            export_path: PathBuf::from("study_schedule.csv"),
            timezone: "UTC".to_string(),
            calendar_days: DEFAULT_CALENDAR_DAYS,
            locale: "en".to_string(),
        }
    }
}

/// Values accepted from the configuration file; anything missing keeps its default
#[derive(Debug, Default, Deserialize)]
struct FileConfig {
    scheduler_url: Option<String>,
    store_path: Option<PathBuf>,
    export_path: Option<PathBuf>,
    timezone: Option<String>,
    calendar_days: Option<u32>,
    locale: Option<String>,
}

impl Config {
    /// Load configuration from defaults, the config file and the environment
    pub fn load() -> PlannerResult<Self> {
        // Load .env file if it exists
        dotenv().ok();

        let mut config = Self::load_file(Path::new(CONFIG_FILE))?;
        config.apply_env()?;
        config.validate()?;

        Ok(config)
    }

    /// Read the configuration file on top of the defaults.
    /// A missing file is not an error.
    pub fn load_file(path: &Path) -> PlannerResult<Self> {
        match fs::read_to_string(path) {
            Ok(content) => Self::from_toml(&content),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(e) => Err(e.into()),
        }
    }

    /// Parse TOML content on top of the defaults
    pub fn from_toml(content: &str) -> PlannerResult<Self> {
        let file: FileConfig = toml::from_str(content)?;
        let mut config = Self::default();

        if let Some(url) = file.scheduler_url {
            config.scheduler_url = url;
        }
        if let Some(path) = file.store_path {
            config.store_path = path;
        }
        if let Some(path) = file.export_path {
            config.export_path = path;
        }
        if let Some(tz) = file.timezone {
            config.timezone = tz;
        }
        if let Some(days) = file.calendar_days {
            config.calendar_days = days;
        }
        if let Some(locale) = file.locale {
            config.locale = locale;
        }

        Ok(config)
    }

    /// Override values from `PLANNER_*` environment variables
    fn apply_env(&mut self) -> PlannerResult<()> {
        if let Ok(url) = env::var("PLANNER_SCHEDULER_URL") {
            self.scheduler_url = url;
        }
        if let Ok(path) = env::var("PLANNER_STORE_PATH") {
            self.store_path = PathBuf::from(path);
        }
        if let Ok(path) = env::var("PLANNER_EXPORT_PATH") {
            self.export_path = PathBuf::from(path);
        }
        if let Ok(tz) = env::var("PLANNER_TIMEZONE") {
            self.timezone = tz;
        }
        if let Ok(days) = env::var("PLANNER_CALENDAR_DAYS") {
            self.calendar_days = days
                .parse::<u32>()
                .map_err(|_| config_error("Invalid PLANNER_CALENDAR_DAYS format"))?;
        }
        if let Ok(locale) = env::var("PLANNER_LOCALE") {
            self.locale = locale;
        }
        Ok(())
    }

    /// Check that every value is usable
    pub fn validate(&self) -> PlannerResult<()> {
        self.scheduler_url()?;
        self.timezone()?;
        if self.calendar_days == 0 {
            return Err(config_error("calendar_days must be at least 1"));
        }
        Ok(())
    }

    /// Parsed scheduling service base URL
    pub fn scheduler_url(&self) -> PlannerResult<Url> {
        Url::parse(&self.scheduler_url).map_err(|e| {
            config_error(&format!("Invalid scheduler URL '{}': {}", self.scheduler_url, e))
        })
    }

    /// Parsed timezone
    pub fn timezone(&self) -> PlannerResult<Tz> {
        self.timezone
            .parse::<Tz>()
            .map_err(|_| config_error(&format!("Unknown timezone '{}'", self.timezone)))
    }
}

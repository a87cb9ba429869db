use super::models::{Commitment, Preferences, Task, TimeSlot, DEFAULT_ATTENTION_SPAN};
use super::navigation::Page;
use super::table::TableRow;
use crate::components::storage::{keys, StorageHandle};
use crate::error::{invalid_number, missing_fields, PlannerResult};
use crate::utils::input::parse_leading_int;
use std::collections::BTreeSet;
use tracing::{debug, info, warn};

/// Input fields of the fixed commitments page
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommitmentForm {
    pub subject: String,
    pub start: String,
    pub end: String,
}

impl CommitmentForm {
    pub fn new(subject: &str, start: &str, end: &str) -> Self {
        Self {
            subject: subject.to_string(),
            start: start.to_string(),
            end: end.to_string(),
        }
    }

    /// True when no required field is empty
    pub fn is_complete(&self) -> bool {
        ![&self.subject, &self.start, &self.end]
            .iter()
            .any(|field| field.is_empty())
    }

    /// Empty every field
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Append the commitment to storage and return its table row.
    /// On rejection nothing is stored and the fields stay as they were.
    pub async fn submit(&mut self, storage: &StorageHandle) -> PlannerResult<TableRow> {
        if !self.is_complete() {
            warn!("Commitment form submitted with empty fields");
            return Err(missing_fields());
        }

        let commitment = Commitment {
            subject: self.subject.clone(),
            start: self.start.clone(),
            end: self.end.clone(),
        };

        let mut commitments: Vec<Commitment> = storage.get_data(keys::FIXED_COMMITMENTS).await?;
        commitments.push(commitment.clone());
        storage
            .save_data(keys::FIXED_COMMITMENTS, &commitments)
            .await?;

        info!(
            "Added commitment '{}' ({} stored)",
            commitment.subject,
            commitments.len()
        );

        self.clear();
        Ok(TableRow::from(&commitment))
    }
}

/// Input fields of the task details page
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskForm {
    pub subject: String,
    pub estimated: String,
    pub due: String,
    pub priority: String,
}

impl TaskForm {
    pub fn new(subject: &str, estimated: &str, due: &str, priority: &str) -> Self {
        Self {
            subject: subject.to_string(),
            estimated: estimated.to_string(),
            due: due.to_string(),
            priority: priority.to_string(),
        }
    }

    /// True when no required field is empty
    pub fn is_complete(&self) -> bool {
        ![&self.subject, &self.estimated, &self.due, &self.priority]
            .iter()
            .any(|field| field.is_empty())
    }

    /// Empty every field
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Append the task to storage and return its table row.
    /// On rejection nothing is stored and the fields stay as they were.
    pub async fn submit(&mut self, storage: &StorageHandle) -> PlannerResult<TableRow> {
        if !self.is_complete() {
            warn!("Task form submitted with empty fields");
            return Err(missing_fields());
        }

        let estimated = parse_leading_int(&self.estimated)
            .ok_or_else(|| invalid_number("Estimated time", self.estimated.trim()))?;
        let priority = parse_leading_int(&self.priority)
            .ok_or_else(|| invalid_number("Priority", self.priority.trim()))?;

        let task = Task {
            subject: self.subject.clone(),
            estimated,
            due: self.due.clone(),
            priority,
        };

        let mut tasks: Vec<Task> = storage.get_data(keys::TASK_DETAILS).await?;
        tasks.push(task.clone());
        storage.save_data(keys::TASK_DETAILS, &tasks).await?;

        info!("Added task '{}' ({} stored)", task.subject, tasks.len());

        self.clear();
        Ok(TableRow::from(&task))
    }
}

/// Input fields of the preferences page
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PreferencesForm {
    pub preferred_times: BTreeSet<TimeSlot>,
    pub prefer_breaks: bool,
    /// Raw work duration field; empty, non-numeric or zero means the default
    pub work_duration: String,
}

impl PreferencesForm {
    /// Build the preferences object the form describes
    pub fn to_preferences(&self) -> Preferences {
        let attention_span = match parse_leading_int(&self.work_duration) {
            Some(minutes) if minutes != 0 => minutes,
            _ => DEFAULT_ATTENTION_SPAN,
        };

        Preferences {
            preferred_times: self.preferred_times.clone(),
            prefer_breaks: self.prefer_breaks,
            attention_span,
        }
    }

    /// Store the preferences, replacing any saved before, and return the
    /// page to go to next
    pub async fn save(&self, storage: &StorageHandle) -> PlannerResult<Page> {
        let preferences = self.to_preferences();
        storage
            .save_data(keys::USER_PREFERENCES, &preferences)
            .await?;

        debug!("Saved preferences: {:?}", preferences);
        Ok(Page::Output)
    }
}

/// Every stored commitment, in insertion order
pub async fn stored_commitments(storage: &StorageHandle) -> PlannerResult<Vec<Commitment>> {
    storage.get_data(keys::FIXED_COMMITMENTS).await
}

/// Every stored task, in insertion order
pub async fn stored_tasks(storage: &StorageHandle) -> PlannerResult<Vec<Task>> {
    storage.get_data(keys::TASK_DETAILS).await
}

/// Saved preferences, if any were saved
pub async fn stored_preferences(storage: &StorageHandle) -> PlannerResult<Option<Preferences>> {
    storage.get_object(keys::USER_PREFERENCES).await
}

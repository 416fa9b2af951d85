//! Per-day task store.
//!
//! # Responsibility
//! - Provide add/update/delete/toggle/list entry points for presentation callers.
//! - Re-score on text edits and re-sort affected buckets after every change.
//! - Persist the whole collection after every successful mutation.
//!
//! # Invariants
//! - Every bucket satisfies `ordering::compare_tasks` whenever a call returns.
//! - Validation and lookup failures leave state untouched.
//! - After `open`, every task sits in the bucket named by its `date` and no
//!   id appears twice.
//! - A failed save keeps the applied mutation; memory is authoritative.

use crate::model::collection::{DaySummary, TaskCollection};
use crate::model::date::DateKey;
use crate::model::task::{Task, TaskId, TaskValidationError};
use crate::persist::{PersistError, PersistenceAdapter};
use crate::store::ordering::sort_bucket;
use log::{error, info, warn};
use std::collections::HashSet;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type StoreResult<T> = Result<T, StoreError>;

/// Store error for task use-cases.
#[derive(Debug)]
pub enum StoreError {
    /// Input rejected; nothing changed.
    Validation(TaskValidationError),
    /// No task with this id in any bucket; nothing changed.
    NotFound(TaskId),
    /// Mutation applied in memory but could not be saved.
    Persistence(PersistError),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::NotFound(id) => write!(f, "task not found: {id}"),
            Self::Persistence(err) => write!(f, "failed to persist tasks: {err}"),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::NotFound(_) => None,
            Self::Persistence(err) => Some(err),
        }
    }
}

impl From<TaskValidationError> for StoreError {
    fn from(value: TaskValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<PersistError> for StoreError {
    fn from(value: PersistError) -> Self {
        Self::Persistence(value)
    }
}

/// Partial text edit for an existing task.
///
/// `None` leaves a field unchanged. Values are trimmed before use.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskUpdate {
    pub name: Option<String>,
    pub description: Option<String>,
}

impl TaskUpdate {
    pub fn name(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            description: None,
        }
    }

    pub fn description(description: impl Into<String>) -> Self {
        Self {
            name: None,
            description: Some(description.into()),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.description.is_none()
    }
}

/// Session-scoped owner of the task collection.
pub struct TaskStore<P: PersistenceAdapter> {
    tasks: TaskCollection,
    adapter: P,
}

impl<P: PersistenceAdapter> TaskStore<P> {
    /// Loads the stored collection once.
    ///
    /// Missing data starts an empty store. Load failures are logged and also
    /// start empty; they never abort the session. Loaded tasks filed under
    /// the wrong day, or repeating an earlier id, are dropped with a warning.
    pub fn open(adapter: P) -> Self {
        let mut tasks = match adapter.load() {
            Ok(Some(tasks)) => tasks,
            Ok(None) => TaskCollection::new(),
            Err(err) => {
                warn!(
                    "event=store_open module=store status=degraded error_code=load_failed error={}",
                    err
                );
                TaskCollection::new()
            }
        };
        let dropped = drop_inconsistent(&mut tasks);
        for (_, bucket) in tasks.buckets_mut() {
            sort_bucket(bucket);
        }

        info!(
            "event=store_open module=store status=ok dates={} tasks={} dropped={}",
            tasks.dates_desc().len(),
            tasks.len(),
            dropped
        );
        Self { tasks, adapter }
    }

    /// Adds a task to `date` and returns a copy of it.
    ///
    /// # Errors
    /// - `Validation` when `name` is blank after trimming.
    /// - `Persistence` when saving fails; the task is still added.
    pub fn add_task(
        &mut self,
        date: impl Into<DateKey>,
        name: &str,
        description: &str,
    ) -> StoreResult<Task> {
        let task = Task::new(date, name, description)?;
        let bucket = self.tasks.bucket_mut(&task.date);
        bucket.push(task.clone());
        sort_bucket(bucket);

        info!(
            "event=task_add module=store status=ok task_id={} date={} priority={}",
            task.id,
            task.date,
            task.priority.value()
        );
        self.persist()?;
        Ok(task)
    }

    /// Applies a text edit, re-scoring when any text field is present.
    ///
    /// # Errors
    /// - `NotFound` when no bucket holds `id`.
    /// - `Validation` when the new name is blank; nothing changes.
    /// - `Persistence` when saving fails; the edit is kept.
    pub fn update_task(&mut self, id: &TaskId, update: &TaskUpdate) -> StoreResult<()> {
        let mut found = false;
        for (_, bucket) in self.tasks.buckets_mut() {
            let Some(task) = bucket.iter_mut().find(|task| &task.id == id) else {
                continue;
            };
            task.apply_text(update.name.as_deref(), update.description.as_deref())?;
            info!(
                "event=task_update module=store status=ok task_id={} priority={}",
                id,
                task.priority.value()
            );
            sort_bucket(bucket);
            found = true;
        }

        if !found {
            return Err(StoreError::NotFound(id.clone()));
        }
        self.persist()
    }

    /// Removes `id` from every bucket. Absent ids are not an error.
    pub fn delete_task(&mut self, id: &TaskId) -> StoreResult<()> {
        let mut removed = 0;
        for (_, bucket) in self.tasks.buckets_mut() {
            let before = bucket.len();
            bucket.retain(|task| &task.id != id);
            removed += before - bucket.len();
        }

        info!(
            "event=task_delete module=store status=ok task_id={} removed={}",
            id, removed
        );
        self.persist()
    }

    /// Flips completion and moves the task to its new position.
    ///
    /// # Errors
    /// - `NotFound` when no bucket holds `id`.
    /// - `Persistence` when saving fails; the toggle is kept.
    pub fn toggle_complete(&mut self, id: &TaskId) -> StoreResult<()> {
        let mut completed = None;
        for (_, bucket) in self.tasks.buckets_mut() {
            let Some(task) = bucket.iter_mut().find(|task| &task.id == id) else {
                continue;
            };
            task.completed = !task.completed;
            completed = Some(task.completed);
            sort_bucket(bucket);
        }

        let Some(completed) = completed else {
            return Err(StoreError::NotFound(id.clone()));
        };
        info!(
            "event=task_toggle module=store status=ok task_id={} completed={}",
            id, completed
        );
        self.persist()
    }

    /// Tasks for `date` in display order; empty when the day has none.
    pub fn list_for_date(&self, date: &str) -> &[Task] {
        self.tasks.bucket(date)
    }

    /// Every known day, newest first, including days whose tasks were all deleted.
    pub fn list_available_dates(&self) -> Vec<DateKey> {
        self.tasks.dates_desc()
    }

    pub fn get_task(&self, id: &TaskId) -> Option<&Task> {
        self.tasks.find(id)
    }

    pub fn summary_for_date(&self, date: &str) -> DaySummary {
        self.tasks.summary(date)
    }

    pub fn collection(&self) -> &TaskCollection {
        &self.tasks
    }

    pub fn adapter(&self) -> &P {
        &self.adapter
    }

    fn persist(&self) -> StoreResult<()> {
        self.adapter.save(&self.tasks).map_err(|err| {
            error!(
                "event=store_persist module=store status=error error_code=save_failed error={}",
                err
            );
            StoreError::Persistence(err)
        })
    }
}

/// Removes tasks whose `date` disagrees with their bucket key and repeats of
/// an id already seen; returns how many were removed.
fn drop_inconsistent(tasks: &mut TaskCollection) -> usize {
    let mut seen = HashSet::new();
    let mut dropped = 0;
    for (date, bucket) in tasks.buckets_mut() {
        bucket.retain(|task| {
            let keep = if &task.date != date {
                warn!(
                    "event=store_open module=store status=skipped error_code=date_mismatch task_id={} bucket={} date={}",
                    task.id, date, task.date
                );
                false
            } else if !seen.insert(task.id.clone()) {
                warn!(
                    "event=store_open module=store status=skipped error_code=duplicate_id task_id={} bucket={}",
                    task.id, date
                );
                false
            } else {
                true
            };
            dropped += usize::from(!keep);
            keep
        });
    }
    dropped
}

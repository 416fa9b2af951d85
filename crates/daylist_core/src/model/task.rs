//! Task domain model.
//!
//! # Responsibility
//! - Define the canonical task record stored in day buckets.
//! - Keep `priority` in sync with task text on every text edit.
//!
//! # Invariants
//! - `id` is stable, non-blank and never reused for another task.
//! - `name` is non-empty after trimming.
//! - `date` and `created_at` are immutable after creation.

use crate::model::date::DateKey;
use crate::model::priority::Priority;
use crate::priority::score;
use chrono::{DateTime, SubsecRound, Utc};
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::str::FromStr;
use uuid::Uuid;

/// Opaque, stable identifier for a task.
///
/// Ids minted here are UUID v4 strings. Stored ids of any other non-blank
/// shape (e.g. base-36 ids written by the browser app) are kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TaskId(String);

impl TaskId {
    /// Mints a fresh UUID v4 id.
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// Wraps an existing id.
    ///
    /// # Errors
    /// - `EmptyId` when `raw` is blank.
    pub fn parse(raw: &str) -> Result<Self, TaskValidationError> {
        if raw.trim().is_empty() {
            return Err(TaskValidationError::EmptyId);
        }
        Ok(Self(raw.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for TaskId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for TaskId {
    type Err = TaskValidationError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        Self::parse(raw)
    }
}

impl TryFrom<String> for TaskId {
    type Error = TaskValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        if value.trim().is_empty() {
            return Err(TaskValidationError::EmptyId);
        }
        Ok(Self(value))
    }
}

impl From<TaskId> for String {
    fn from(value: TaskId) -> Self {
        value.0
    }
}

/// Validation failures for task records.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskValidationError {
    /// Name is empty once surrounding whitespace is removed.
    EmptyName,
    /// Id is empty or whitespace only.
    EmptyId,
    /// Stored priority outside `1..=5`.
    InvalidPriority(u8),
}

impl Display for TaskValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyName => write!(f, "task name cannot be empty"),
            Self::EmptyId => write!(f, "task id cannot be empty"),
            Self::InvalidPriority(value) => {
                write!(f, "priority must be within 1..=5, got {value}")
            }
        }
    }
}

impl Error for TaskValidationError {}

/// One entry in a day's task list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "TaskWire")]
pub struct Task {
    pub id: TaskId,
    pub name: String,
    pub description: String,
    /// Derived from `name` + `description`; see [`crate::priority::score`].
    pub priority: Priority,
    pub completed: bool,
    /// Millisecond precision, encoded as RFC 3339.
    #[serde(with = "created_at_serde")]
    pub created_at: DateTime<Utc>,
    /// Day bucket this task belongs to.
    pub date: DateKey,
}

impl Task {
    /// Creates a task for `date` with a generated id and the current time.
    ///
    /// Name and description are trimmed before validation and scoring.
    ///
    /// # Errors
    /// - `EmptyName` when `name` is blank.
    pub fn new(
        date: impl Into<DateKey>,
        name: &str,
        description: &str,
    ) -> Result<Self, TaskValidationError> {
        Self::with_id(TaskId::generate(), date, name, description, Utc::now())
    }

    /// Creates a task with caller-provided identity and creation time.
    ///
    /// Used by import paths and tests where identity already exists.
    /// `created_at` is truncated to milliseconds to match the wire format.
    pub fn with_id(
        id: TaskId,
        date: impl Into<DateKey>,
        name: &str,
        description: &str,
        created_at: DateTime<Utc>,
    ) -> Result<Self, TaskValidationError> {
        let name = normalize_name(name)?;
        let description = description.trim().to_string();
        let priority = score(&name, &description);

        Ok(Self {
            id,
            name,
            description,
            priority,
            completed: false,
            created_at: created_at.trunc_subsecs(3),
            date: date.into(),
        })
    }

    /// Replaces the provided text fields and recomputes `priority`.
    ///
    /// Leaves the task untouched when the new name is blank.
    pub fn apply_text(
        &mut self,
        name: Option<&str>,
        description: Option<&str>,
    ) -> Result<(), TaskValidationError> {
        let name = name.map(normalize_name).transpose()?;
        if name.is_none() && description.is_none() {
            return Ok(());
        }

        if let Some(name) = name {
            self.name = name;
        }
        if let Some(description) = description {
            self.description = description.trim().to_string();
        }
        self.priority = score(&self.name, &self.description);
        Ok(())
    }

    /// Checks invariants that deserialization cannot express by type alone.
    pub fn validate(&self) -> Result<(), TaskValidationError> {
        if self.name.trim().is_empty() {
            return Err(TaskValidationError::EmptyName);
        }
        Ok(())
    }
}

fn normalize_name(name: &str) -> Result<String, TaskValidationError> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(TaskValidationError::EmptyName);
    }
    Ok(trimmed.to_string())
}

/// Raw decode shape; converted through `Task::validate`.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct TaskWire {
    id: TaskId,
    name: String,
    #[serde(default)]
    description: String,
    priority: Priority,
    #[serde(default)]
    completed: bool,
    #[serde(with = "created_at_serde")]
    created_at: DateTime<Utc>,
    date: DateKey,
}

impl TryFrom<TaskWire> for Task {
    type Error = TaskValidationError;

    fn try_from(wire: TaskWire) -> Result<Self, Self::Error> {
        let task = Self {
            id: wire.id,
            name: wire.name,
            description: wire.description,
            priority: wire.priority,
            completed: wire.completed,
            created_at: wire.created_at,
            date: wire.date,
        };
        task.validate()?;
        Ok(task)
    }
}

/// Serde helper for `created_at` as an ISO-8601 string with milliseconds.
mod created_at_serde {
    use chrono::{DateTime, SecondsFormat, Utc};
    use serde::{self, Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(value: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&value.to_rfc3339_opts(SecondsFormat::Millis, true))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        DateTime::parse_from_rfc3339(&raw)
            .map(|value| value.with_timezone(&Utc))
            .map_err(|err| serde::de::Error::custom(format!("invalid createdAt `{raw}`: {err}")))
    }
}

//! Task domain model.
//!
//! # Responsibility
//! - Define the canonical task record shared by store, persistence and UI.
//! - Provide string parsing for the closed `Priority` and `CategoryFilter`
//!   enums, since raw UI input arrives as text.
//!
//! # Invariants
//! - `id` is stable and never reused for another task.
//! - `text` is non-empty after construction (constructors trim and reject).
//! - `created_at` is immutable for the task lifetime.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Stable identifier for a task.
///
/// Kept numeric because the persisted wire format stores ids as JSON
/// numbers. Values are epoch-millisecond based and strictly increasing
/// within a process (see `TaskStore`).
pub type TaskId = i64;

/// Validation failures raised by task construction and filter parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskValidationError {
    /// Task text was empty or whitespace-only.
    EmptyText,
    /// A filter string did not name one of the known categories.
    UnknownCategory(String),
}

impl Display for TaskValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyText => write!(f, "task text cannot be empty"),
            Self::UnknownCategory(value) => write!(
                f,
                "unknown category `{value}`; expected all|pending|completed"
            ),
        }
    }
}

impl Error for TaskValidationError {}

/// Closed priority scale for a task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    Low,
    Medium,
    High,
}

impl Priority {
    /// Lowercase storage representation.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }

    /// Capitalized badge text for display.
    pub fn label(self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
        }
    }

    /// Parses user input case-insensitively.
    ///
    /// Returns `None` for anything outside the closed set; callers decide
    /// whether that is an error or a silent no-op (edit keeps the prior
    /// priority on unrecognized input).
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "low" => Some(Self::Low),
            "medium" => Some(Self::Medium),
            "high" => Some(Self::High),
            _ => None,
        }
    }
}

/// Active view selector over the task collection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CategoryFilter {
    #[default]
    All,
    Pending,
    Completed,
}

impl CategoryFilter {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Pending => "pending",
            Self::Completed => "completed",
        }
    }

    /// Parses a category name case-insensitively.
    ///
    /// Unrecognized values are rejected rather than coerced to `All`; the
    /// closed set is part of the store contract.
    pub fn parse(value: &str) -> Result<Self, TaskValidationError> {
        match value.trim().to_ascii_lowercase().as_str() {
            "all" => Ok(Self::All),
            "pending" => Ok(Self::Pending),
            "completed" => Ok(Self::Completed),
            other => Err(TaskValidationError::UnknownCategory(other.to_string())),
        }
    }
}

/// Canonical task record.
///
/// The wire shape matches the persisted aggregate: `id` as a number,
/// lowercase `priority`, and the creation time serialized under the
/// historical field name `timestamp`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Stable numeric ID, assigned once at creation.
    pub id: TaskId,
    /// User-entered display text. Never empty.
    pub text: String,
    /// Priority tag, always one of the closed enum values.
    pub priority: Priority,
    /// Completion flag; toggled freely over the task lifetime.
    pub completed: bool,
    /// Creation instant. Serialized as `timestamp` (ISO-8601) to match the
    /// stored format.
    #[serde(rename = "timestamp")]
    pub created_at: DateTime<Utc>,
}

impl Task {
    /// Creates a pending task with the current timestamp.
    ///
    /// # Errors
    /// Rejects empty or whitespace-only `text` with
    /// [`TaskValidationError::EmptyText`]. The stored text is trimmed.
    pub fn new(
        id: TaskId,
        text: impl Into<String>,
        priority: Priority,
    ) -> Result<Self, TaskValidationError> {
        let text = text.into();
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Err(TaskValidationError::EmptyText);
        }

        Ok(Self {
            id,
            text: trimmed.to_string(),
            priority,
            completed: false,
            created_at: Utc::now(),
        })
    }
}

//! Task domain model.
//!
//! # Responsibility
//! - Define the single persisted record of the to-do list.
//! - Define the display sort modes offered by the task screen.
//!
//! # Invariants
//! - `id` is assigned once at creation and never reused.
//! - `created_at` is assigned once at creation and never changes.
//! - Only `text` and `completed` are mutable after creation.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::str::FromStr;
use std::time::{SystemTime, UNIX_EPOCH};
use uuid::Uuid;

/// Stable identifier of one task.
///
/// Serialized as the canonical hyphenated string.
pub type TaskId = Uuid;

/// One to-do record.
///
/// Field names on the wire are `id`, `text`, `completed`, `createdAt`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: TaskId,
    /// User-supplied description.
    pub text: String,
    #[serde(default)]
    pub completed: bool,
    /// Unix epoch milliseconds. Default display sort key.
    #[serde(rename = "createdAt")]
    pub created_at: i64,
}

impl Task {
    /// Creates an incomplete task with a fresh ID stamped with the current time.
    pub fn new(text: impl Into<String>) -> Self {
        Self::with_id(Uuid::new_v4(), text, now_epoch_ms())
    }

    /// Creates an incomplete task with caller-provided identity and timestamp.
    ///
    /// Used by import paths and tests that need deterministic ordering.
    pub fn with_id(id: TaskId, text: impl Into<String>, created_at: i64) -> Self {
        Self {
            id,
            text: text.into(),
            completed: false,
            created_at,
        }
    }
}

/// Display ordering for the task list.
///
/// Sorting is a read-time projection; it never reorders storage.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortMode {
    /// Ascending by `created_at`.
    #[default]
    Time,
    /// Incomplete first, then completed; each group by `created_at`.
    Completion,
}

impl SortMode {
    /// Wire name used by the UI layer.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Time => "time",
            Self::Completion => "completion",
        }
    }
}

impl Display for SortMode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a sort mode name is not recognized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownSortMode(pub String);

impl Display for UnknownSortMode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "unknown sort mode `{}`; expected time|completion",
            self.0
        )
    }
}

impl Error for UnknownSortMode {}

impl FromStr for SortMode {
    type Err = UnknownSortMode;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "time" => Ok(Self::Time),
            "completion" => Ok(Self::Completion),
            _ => Err(UnknownSortMode(value.to_string())),
        }
    }
}

/// Current wall clock as Unix epoch milliseconds.
///
/// Falls back to `0` if the system clock is set before the epoch.
pub fn now_epoch_ms() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| i64::try_from(elapsed.as_millis()).unwrap_or(i64::MAX))
        .unwrap_or(0)
}

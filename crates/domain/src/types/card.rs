//! Card types and payload validation

use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::constants::{MAX_DESCRIPTION_LENGTH, MAX_TITLE_LENGTH};
use crate::errors::TaskDeckError;

/// Card priority as stored by the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    #[default]
    Without,
    Low,
    Medium,
    High,
}

impl Priority {
    /// Wire representation, as used in query strings and request bodies.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Without => "without",
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

impl std::fmt::Display for Priority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Priority {
    type Err = TaskDeckError;

    /// Tolerant parsing from UI labels: case-insensitive, `"none"` maps to
    /// [`Priority::Without`].
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "without" | "none" | "" => Ok(Self::Without),
            "low" => Ok(Self::Low),
            "medium" => Ok(Self::Medium),
            "high" => Ok(Self::High),
            other => Err(TaskDeckError::InvalidInput(format!("unknown priority: {other}"))),
        }
    }
}

/// A task card inside a column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub priority: Priority,
    #[serde(rename = "dueDate", default, skip_serializing_if = "Option::is_none")]
    pub due_date: Option<DateTime<Utc>>,
    /// Id of the owning column.
    pub column: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order: Option<u32>,
}

/// Body for card create/edit calls.
///
/// `{ title, description, priority, dueDate, column }` — the due date is
/// serialized as an RFC 3339 string, matching what the backend expects.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardPayload {
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub priority: Priority,
    #[serde(rename = "dueDate", default, skip_serializing_if = "Option::is_none")]
    pub due_date: Option<DateTime<Utc>>,
    pub column: String,
}

impl CardPayload {
    /// Check required fields before the payload leaves the process.
    ///
    /// # Errors
    /// Returns [`TaskDeckError::InvalidInput`] when title, description or
    /// column are empty, or when a field exceeds its length limit.
    pub fn validate(&self) -> Result<(), TaskDeckError> {
        if self.title.trim().is_empty() {
            return Err(TaskDeckError::InvalidInput("card title is required".into()));
        }
        if self.title.len() > MAX_TITLE_LENGTH {
            return Err(TaskDeckError::InvalidInput(format!(
                "card title exceeds {MAX_TITLE_LENGTH} characters"
            )));
        }
        if self.description.trim().is_empty() {
            return Err(TaskDeckError::InvalidInput("card description is required".into()));
        }
        if self.description.len() > MAX_DESCRIPTION_LENGTH {
            return Err(TaskDeckError::InvalidInput(format!(
                "card description exceeds {MAX_DESCRIPTION_LENGTH} characters"
            )));
        }
        if self.column.trim().is_empty() {
            return Err(TaskDeckError::InvalidInput("card column is required".into()));
        }
        Ok(())
    }
}

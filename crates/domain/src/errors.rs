//! Error types used throughout the domain crate

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Main error type for TaskDeck domain operations
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "message")]
pub enum TaskDeckError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Result type alias for TaskDeck domain operations
pub type Result<T> = std::result::Result<T, TaskDeckError>;

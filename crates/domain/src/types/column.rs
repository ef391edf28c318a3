//! Column types

use serde::{Deserialize, Serialize};

/// A column within a board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Column {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    /// Id of the owning board.
    pub board: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order: Option<u32>,
}

/// One entry of a column-reorder payload: `{ "_id": ..., "order": ... }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnOrder {
    #[serde(rename = "_id")]
    pub id: String,
    pub order: u32,
}

impl ColumnOrder {
    /// Build a reorder payload from columns in their new display order.
    #[must_use]
    pub fn from_columns(columns: &[Column]) -> Vec<Self> {
        columns
            .iter()
            .enumerate()
            .map(|(index, column)| Self { id: column.id.clone(), order: index as u32 })
            .collect()
    }
}

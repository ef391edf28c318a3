//! Board types

use serde::{Deserialize, Serialize};

/// A Kanban board owned by the authenticated user.
///
/// A board carries either a stock background id or the URL of an uploaded
/// background image; the server resolves whichever was supplied at creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    #[serde(rename = "iconId")]
    pub icon_id: String,
    #[serde(rename = "backgroundId", default, skip_serializing_if = "Option::is_none")]
    pub background_id: Option<String>,
    #[serde(rename = "backgroundURL", default, skip_serializing_if = "Option::is_none")]
    pub background_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner: Option<String>,
}

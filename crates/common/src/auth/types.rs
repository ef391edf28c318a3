//! Credential pair types

use serde::{Deserialize, Serialize};

/// Access and refresh tokens for the TaskDeck backend.
///
/// The access token is short-lived and attached to every outbound request;
/// the refresh token is long-lived and used only against the refresh
/// endpoint. The refresh token is optional because a refresh response may
/// omit a rotated one, in which case the previous token stays in use.
///
/// Serialized field names match the durable store's logical keys
/// (`accessToken` / `refreshToken`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenSet {
    #[serde(rename = "accessToken")]
    pub access_token: String,

    #[serde(rename = "refreshToken", default, skip_serializing_if = "Option::is_none")]
    pub refresh_token: Option<String>,
}

impl TokenSet {
    /// Create a new credential pair.
    #[must_use]
    pub fn new(access_token: impl Into<String>, refresh_token: Option<String>) -> Self {
        Self { access_token: access_token.into(), refresh_token }
    }

    /// `Authorization` header value for the access token.
    #[must_use]
    pub fn bearer(&self) -> String {
        format!("Bearer {}", self.access_token)
    }
}

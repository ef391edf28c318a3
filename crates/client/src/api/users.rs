//! Profile, avatar and theme endpoints

use serde::{Deserialize, Serialize};
use taskdeck_domain::{Theme, User};

use super::endpoints;
use super::errors::ApiError;
use crate::http::client::AuthenticatedClient;
use crate::http::request::{ApiRequest, FormPart};

/// Body for `PUT /api/users/profile`.
#[derive(Debug, Clone, Serialize)]
pub struct ProfileUpdate {
    pub name: String,
    pub email: String,
}

#[derive(Debug, Deserialize)]
struct ThemeResponse {
    theme: Theme,
}

/// `PATCH /api/users/theme` nests the result one level deeper.
#[derive(Debug, Deserialize)]
struct ThemeUpdateResponse {
    data: ThemeResponse,
}

/// Users endpoint group.
pub struct UsersApi<'a> {
    client: &'a AuthenticatedClient,
}

impl<'a> UsersApi<'a> {
    pub(crate) fn new(client: &'a AuthenticatedClient) -> Self {
        Self { client }
    }

    /// Current theme stored on the profile.
    ///
    /// # Errors
    /// Returns error if the request fails.
    pub async fn theme(&self) -> Result<Theme, ApiError> {
        let response: ThemeResponse =
            self.client.execute(ApiRequest::get(endpoints::USERS_THEME)).await?;
        Ok(response.theme)
    }

    /// Persist a new theme.
    ///
    /// # Errors
    /// Returns error if the request fails.
    pub async fn set_theme(&self, theme: Theme) -> Result<Theme, ApiError> {
        let body = serde_json::json!({ "theme": theme });
        let response: ThemeUpdateResponse = self
            .client
            .execute(ApiRequest::patch(endpoints::USERS_THEME).json(&body)?)
            .await?;
        Ok(response.data.theme)
    }

    /// Update name and email.
    ///
    /// # Errors
    /// Returns error if the request fails.
    pub async fn update_profile(&self, update: &ProfileUpdate) -> Result<User, ApiError> {
        self.client
            .execute(ApiRequest::put(endpoints::USERS_PROFILE).json(update)?)
            .await
    }

    /// Upload a new avatar image.
    ///
    /// # Errors
    /// Returns error if the request fails or `mime` is not a valid mime type.
    pub async fn set_avatar(
        &self,
        file_name: &str,
        mime: &str,
        bytes: Vec<u8>,
    ) -> Result<User, ApiError> {
        let parts = vec![FormPart::file("avatar", file_name, mime, bytes)];
        self.client
            .execute(ApiRequest::patch(endpoints::USERS_AVATAR).multipart(parts))
            .await
    }
}

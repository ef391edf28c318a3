//! Support-contact endpoint

use serde::Serialize;
use taskdeck_domain::constants::MAX_SUPPORT_COMMENT_LENGTH;

use super::endpoints;
use super::errors::ApiError;
use crate::http::client::AuthenticatedClient;
use crate::http::request::ApiRequest;

/// Body for `POST /api/need-help`.
#[derive(Debug, Clone, Serialize)]
pub struct SupportRequest {
    pub email: String,
    pub comment: String,
}

/// Support endpoint group.
pub struct SupportApi<'a> {
    client: &'a AuthenticatedClient,
}

impl<'a> SupportApi<'a> {
    pub(crate) fn new(client: &'a AuthenticatedClient) -> Self {
        Self { client }
    }

    /// Send a help request to the support inbox.
    ///
    /// # Errors
    /// Returns [`ApiError::Validation`] for an empty or oversized comment,
    /// otherwise the request failure.
    pub async fn send(&self, request: &SupportRequest) -> Result<(), ApiError> {
        if request.comment.trim().is_empty() {
            return Err(ApiError::Validation("support comment is required".into()));
        }
        if request.comment.len() > MAX_SUPPORT_COMMENT_LENGTH {
            return Err(ApiError::Validation(format!(
                "support comment exceeds {MAX_SUPPORT_COMMENT_LENGTH} characters"
            )));
        }

        self.client
            .execute::<serde_json::Value>(ApiRequest::post(endpoints::SUPPORT).json(request)?)
            .await
            .map(|_| ())
    }
}

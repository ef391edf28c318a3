//! Session endpoints: register, login, logout, current user
//!
//! Register and login persist the issued credential pair into the client's
//! store; logout revokes the refresh token server-side and always ends the
//! local session, even when the server call fails.

use serde::{Deserialize, Serialize};
use taskdeck_common::auth::TokenSet;
use taskdeck_domain::User;
use tracing::{info, warn};

use super::endpoints;
use super::errors::ApiError;
use crate::http::client::AuthenticatedClient;
use crate::http::request::ApiRequest;

/// Body for `POST /api/auth/register`.
#[derive(Debug, Clone, Serialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Body for `POST /api/auth/login`.
#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// `{ token, refreshToken, user }` session payload returned by register and
/// login.
#[derive(Debug, Deserialize)]
struct SessionResponse {
    token: String,
    #[serde(rename = "refreshToken")]
    refresh_token: String,
    user: User,
}

/// The `me` endpoint returns the user either bare or wrapped.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum MeResponse {
    Wrapped { user: User },
    Bare(User),
}

/// Auth endpoint group.
pub struct AuthApi<'a> {
    client: &'a AuthenticatedClient,
}

impl<'a> AuthApi<'a> {
    pub(crate) fn new(client: &'a AuthenticatedClient) -> Self {
        Self { client }
    }

    /// Create an account and open a session.
    ///
    /// # Errors
    /// Returns error if the request fails or the session cannot be persisted.
    pub async fn register(&self, request: &RegisterRequest) -> Result<User, ApiError> {
        let session: SessionResponse = self
            .client
            .execute(ApiRequest::post(endpoints::AUTH_REGISTER).json(request)?)
            .await?;
        self.persist(&session).await?;
        info!("account registered, session opened");
        Ok(session.user)
    }

    /// Open a session with existing credentials.
    ///
    /// # Errors
    /// Returns error if the request fails or the session cannot be persisted.
    pub async fn login(&self, request: &LoginRequest) -> Result<User, ApiError> {
        let session: SessionResponse = self
            .client
            .execute(ApiRequest::post(endpoints::AUTH_LOGIN).json(request)?)
            .await?;
        self.persist(&session).await?;
        info!("session opened");
        Ok(session.user)
    }

    /// Revoke the refresh token and end the local session.
    ///
    /// The credential store is cleared regardless of the server's answer —
    /// the local session ends either way.
    ///
    /// # Errors
    /// Returns the server-side failure, if any, after clearing the store.
    pub async fn logout(&self) -> Result<(), ApiError> {
        let stored = self
            .client
            .store()
            .load()
            .await
            .map_err(|e| ApiError::Auth(format!("credential store unavailable: {e}")))?;

        let result = match stored.and_then(|tokens| tokens.refresh_token) {
            Some(refresh_token) => {
                let body = serde_json::json!({ "refreshToken": refresh_token });
                self.client
                    .execute::<serde_json::Value>(
                        ApiRequest::post(endpoints::AUTH_LOGOUT).json(&body)?,
                    )
                    .await
                    .map(|_| ())
            }
            None => Err(ApiError::Auth("no refresh token stored".into())),
        };

        if let Err(err) = self.client.store().clear().await {
            warn!(error = %err, "failed to clear credential store on logout");
        }
        if result.is_ok() {
            info!("session closed");
        }
        result
    }

    /// Fetch the current user's profile.
    ///
    /// # Errors
    /// Returns error if the request fails; an [`ApiError::Auth`] here means
    /// the stored session could not be renewed.
    pub async fn me(&self) -> Result<User, ApiError> {
        let response: MeResponse =
            self.client.execute(ApiRequest::get(endpoints::AUTH_ME)).await?;
        Ok(match response {
            MeResponse::Wrapped { user } | MeResponse::Bare(user) => user,
        })
    }

    async fn persist(&self, session: &SessionResponse) -> Result<(), ApiError> {
        let tokens = TokenSet::new(session.token.clone(), Some(session.refresh_token.clone()));
        self.client
            .store()
            .save(&tokens)
            .await
            .map_err(|e| ApiError::Auth(format!("failed to persist session: {e}")))
    }
}

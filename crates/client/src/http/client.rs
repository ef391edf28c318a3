//! Authenticated HTTP core with single-flight credential refresh
//!
//! Every outbound request reads the stored access token and, when present,
//! carries it as a bearer credential. The response path classifies failures:
//!
//! - transport failure (no response) → [`ApiError::Network`], never refreshed,
//!   never retried
//! - 401 on a first attempt → the refresh protocol below
//! - 401 on a replayed request, or from the refresh endpoint → terminal
//!   [`ApiError::Auth`]
//! - any other non-2xx → [`ApiError::Http`] with the payload verbatim
//!
//! The refresh protocol is single-flight: the first 401 elects a leader that
//! calls the refresh endpoint; 401s arriving while that call is in flight
//! queue on the gate and share its outcome. On success every affected request
//! replays exactly once with the renewed token. A 401/403 from the refresh
//! endpoint is terminal and purges the stored credential pair; transient
//! refresh failures (network, timeout, 5xx) reject the queued requests but
//! leave credentials in place for a later attempt.

use std::sync::Arc;
use std::time::Duration;

use reqwest::header::AUTHORIZATION;
use reqwest::multipart;
use reqwest::{Client, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use taskdeck_common::auth::{
    CredentialStore, RefreshGate, RefreshOutcome, RefreshTicket, TokenSet,
};
use tracing::{debug, info, warn};

use crate::api::endpoints;
use crate::api::errors::ApiError;
use crate::config::ClientConfig;
use crate::http::request::{ApiRequest, FormPart, FormValue, RequestBody};

/// Response payload of the refresh endpoint.
///
/// Observed deployments answer either `{ token, refreshToken? }` or nest the
/// rotated access token under `user.tokenAccess`.
#[derive(Debug, Deserialize)]
struct RefreshResponse {
    token: Option<String>,
    #[serde(rename = "refreshToken")]
    refresh_token: Option<String>,
    user: Option<RefreshUser>,
}

#[derive(Debug, Deserialize)]
struct RefreshUser {
    #[serde(rename = "tokenAccess")]
    token_access: Option<String>,
}

/// HTTP client with automatic bearer attachment and transparent,
/// single-flight credential renewal on authorization failure.
pub struct AuthenticatedClient {
    http: Client,
    base_url: String,
    refresh_timeout: Duration,
    store: Arc<dyn CredentialStore>,
    gate: RefreshGate,
}

impl AuthenticatedClient {
    /// Create a client from configuration and a credential store.
    ///
    /// # Errors
    /// Returns [`ApiError::Config`] if the underlying HTTP client cannot be
    /// built.
    pub fn new(config: &ClientConfig, store: Arc<dyn CredentialStore>) -> Result<Self, ApiError> {
        let http = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| ApiError::Config(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            refresh_timeout: config.refresh_timeout,
            store,
            gate: RefreshGate::new(),
        })
    }

    /// The credential store this client reads from and the refresh protocol
    /// writes to.
    #[must_use]
    pub fn store(&self) -> &Arc<dyn CredentialStore> {
        &self.store
    }

    /// Execute a request and decode its JSON body.
    ///
    /// # Errors
    /// See the module documentation for the failure taxonomy.
    pub async fn execute<T: DeserializeOwned>(&self, request: ApiRequest) -> Result<T, ApiError> {
        let response = self.send(request).await?;
        decode(response).await
    }

    /// Issue the request, running the refresh protocol on a qualifying 401.
    /// Returns only successful responses; every failure maps to an error.
    async fn send(&self, request: ApiRequest) -> Result<Response, ApiError> {
        let token = self.access_token().await?;
        let first = self.dispatch(&request, token.as_deref()).await?;

        if first.status() != StatusCode::UNAUTHORIZED {
            return check_status(first).await;
        }
        if request.path == endpoints::AUTH_REFRESH {
            // a 401 from the refresh endpoint never starts another refresh
            return Err(ApiError::Auth("refresh endpoint rejected the request".into()));
        }

        debug!(path = %request.path, "request unauthorized, entering refresh protocol");
        let outcome = match self.gate.acquire() {
            RefreshTicket::Leader => {
                let outcome = self.run_refresh().await;
                self.gate.settle(&outcome);
                outcome
            }
            // another request is already refreshing: wait for its outcome
            RefreshTicket::Waiter(receiver) => {
                receiver.await.unwrap_or(RefreshOutcome::Failed)
            }
        };

        match outcome {
            RefreshOutcome::Refreshed(access_token) => {
                debug!(path = %request.path, "replaying request with refreshed token");
                let replay = self.dispatch(&request, Some(&access_token)).await?;
                if replay.status() == StatusCode::UNAUTHORIZED {
                    warn!(path = %request.path, "request rejected again after refresh");
                    return Err(ApiError::Auth(
                        "request unauthorized after token refresh".into(),
                    ));
                }
                check_status(replay).await
            }
            RefreshOutcome::Failed => {
                Err(ApiError::Auth("credential refresh failed".into()))
            }
        }
    }

    /// Build and send one attempt. Transport failures map to
    /// [`ApiError::Network`]; any received response is returned as-is.
    async fn dispatch(
        &self,
        request: &ApiRequest,
        token: Option<&str>,
    ) -> Result<Response, ApiError> {
        let url = format!("{}{}", self.base_url, request.path);
        let mut builder = self.http.request(request.method.clone(), &url);

        if !request.query.is_empty() {
            builder = builder.query(&request.query);
        }
        builder = match &request.body {
            RequestBody::Empty => builder,
            RequestBody::Json(value) => builder.json(value),
            RequestBody::Multipart(parts) => builder.multipart(build_form(parts)?),
        };
        if let Some(token) = token {
            builder = builder.header(AUTHORIZATION, format!("Bearer {token}"));
        }

        debug!(method = %request.method, %url, "sending request");
        builder.send().await.map_err(|err| {
            debug!(%url, error = %err, "transport failure");
            ApiError::Network(err.to_string())
        })
    }

    async fn access_token(&self) -> Result<Option<String>, ApiError> {
        let tokens = self
            .store
            .load()
            .await
            .map_err(|e| ApiError::Auth(format!("credential store unavailable: {e}")))?;
        Ok(tokens.map(|t| t.access_token))
    }

    /// Call the refresh endpoint and settle on an outcome.
    ///
    /// Terminal failures (401/403 from the endpoint, or no refresh token in
    /// the store) purge stored credentials. Transient failures leave them
    /// intact.
    async fn run_refresh(&self) -> RefreshOutcome {
        let stored = match self.store.load().await {
            Ok(stored) => stored,
            Err(err) => {
                warn!(error = %err, "credential store unavailable during refresh");
                return RefreshOutcome::Failed;
            }
        };
        let Some(tokens) = stored else {
            debug!("no stored credentials, nothing to refresh");
            return RefreshOutcome::Failed;
        };
        let Some(refresh_token) = tokens.refresh_token else {
            warn!("no refresh token stored, clearing credentials");
            self.purge().await;
            return RefreshOutcome::Failed;
        };

        info!("refreshing access token");
        let url = format!("{}{}", self.base_url, endpoints::AUTH_REFRESH);
        let result = self
            .http
            .post(&url)
            .timeout(self.refresh_timeout)
            .json(&serde_json::json!({ "refreshToken": refresh_token }))
            .send()
            .await;

        let response = match result {
            Ok(response) => response,
            Err(err) => {
                // no response received: credentials may still be good
                warn!(error = %err, "refresh call failed in transit");
                return RefreshOutcome::Failed;
            }
        };

        let status = response.status();
        if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            warn!(%status, "refresh rejected, clearing stored credentials");
            self.purge().await;
            return RefreshOutcome::Failed;
        }
        if !status.is_success() {
            warn!(%status, "refresh endpoint returned an error status");
            return RefreshOutcome::Failed;
        }

        let body: RefreshResponse = match response.json().await {
            Ok(body) => body,
            Err(err) => {
                warn!(error = %err, "refresh response could not be decoded");
                return RefreshOutcome::Failed;
            }
        };
        let Some(access_token) =
            body.token.or_else(|| body.user.and_then(|u| u.token_access))
        else {
            warn!("refresh response carried no access token");
            return RefreshOutcome::Failed;
        };

        // keep the previous refresh token unless the server rotated it
        let rotated =
            TokenSet::new(access_token.clone(), body.refresh_token.or(Some(refresh_token)));
        if let Err(err) = self.store.save(&rotated).await {
            warn!(error = %err, "failed to persist refreshed credentials");
        }

        info!("access token refreshed");
        RefreshOutcome::Refreshed(access_token)
    }

    async fn purge(&self) {
        if let Err(err) = self.store.clear().await {
            warn!(error = %err, "failed to clear credential store");
        }
    }
}

/// Map non-2xx statuses to [`ApiError::Http`] with the payload verbatim.
/// 401s never reach this point; `send` resolves them first.
async fn check_status(response: Response) -> Result<Response, ApiError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().await.unwrap_or_default();
    Err(ApiError::Http { status: status.as_u16(), body })
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    let status = response.status();
    let bytes = response
        .bytes()
        .await
        .map_err(|e| ApiError::Network(format!("failed to read response body: {e}")))?;

    if status == StatusCode::NO_CONTENT || status == StatusCode::RESET_CONTENT || bytes.is_empty()
    {
        return serde_json::from_value(serde_json::Value::Null).map_err(|_| {
            ApiError::Decode(format!(
                "response {status} has no body, but the caller expects one"
            ))
        });
    }

    serde_json::from_slice(&bytes)
        .map_err(|e| ApiError::Decode(format!("failed to parse response body: {e}")))
}

fn build_form(parts: &[FormPart]) -> Result<multipart::Form, ApiError> {
    let mut form = multipart::Form::new();
    for part in parts {
        form = match &part.value {
            FormValue::Text(text) => form.text(part.name.clone(), text.clone()),
            FormValue::File { file_name, mime, bytes } => {
                let file = multipart::Part::bytes(bytes.clone())
                    .file_name(file_name.clone())
                    .mime_str(mime)
                    .map_err(|e| {
                        ApiError::Validation(format!("invalid mime type {mime:?}: {e}"))
                    })?;
                form.part(part.name.clone(), file)
            }
        };
    }
    Ok(form)
}

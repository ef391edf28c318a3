//! TaskDeck API surface
//!
//! [`TaskDeckClient`] is the entry point: one authenticated HTTP core shared
//! by the typed endpoint groups. Every group routes through the same
//! credential store and refresh gate, so concurrent calls across groups still
//! coalesce into a single token refresh.
//!
//! # Usage Example
//!
//! ```no_run
//! use taskdeck_client::api::auth::LoginRequest;
//! use taskdeck_client::{ClientConfig, TaskDeckClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = TaskDeckClient::builder()
//!         .config(ClientConfig::new("https://api.taskdeck.app"))
//!         .build()?;
//!
//!     let user = client
//!         .auth()
//!         .login(&LoginRequest {
//!             email: "ada@example.com".into(),
//!             password: "hunter2".into(),
//!         })
//!         .await?;
//!     println!("logged in as {}", user.name);
//!
//!     for board in client.boards().list().await? {
//!         println!("{} ({})", board.title, board.id);
//!     }
//!     Ok(())
//! }
//! ```

pub mod auth;
pub mod boards;
pub mod cards;
pub mod columns;
pub mod endpoints;
pub mod errors;
pub mod support;
pub mod users;

use std::sync::Arc;

use taskdeck_common::auth::{CredentialStore, KeyringCredentialStore};

pub use auth::{AuthApi, LoginRequest, RegisterRequest};
pub use boards::{BoardBackground, BoardPayload, BoardsApi};
pub use cards::CardsApi;
pub use columns::{ColumnUpdate, ColumnsApi, NewColumn};
pub use errors::{ApiError, ApiErrorCategory};
pub use support::{SupportApi, SupportRequest};
pub use users::{ProfileUpdate, UsersApi};

use crate::config::ClientConfig;
use crate::http::client::AuthenticatedClient;

/// Keyring service name used by the default credential store.
const DEFAULT_KEYRING_SERVICE: &str = "TaskDeck";

/// High-level client for the TaskDeck backend.
pub struct TaskDeckClient {
    inner: AuthenticatedClient,
}

impl TaskDeckClient {
    /// Create a client with the given configuration and credential store.
    ///
    /// # Errors
    /// Returns error if the HTTP client cannot be constructed.
    pub fn new(config: &ClientConfig, store: Arc<dyn CredentialStore>) -> Result<Self, ApiError> {
        Ok(Self { inner: AuthenticatedClient::new(config, store)? })
    }

    /// Create a builder for fluent configuration.
    #[must_use]
    pub fn builder() -> TaskDeckClientBuilder {
        TaskDeckClientBuilder::default()
    }

    /// Whether a credential pair is currently stored.
    pub async fn is_authenticated(&self) -> bool {
        matches!(self.inner.store().load().await, Ok(Some(_)))
    }

    /// Session endpoints.
    #[must_use]
    pub fn auth(&self) -> AuthApi<'_> {
        AuthApi::new(&self.inner)
    }

    /// Board endpoints.
    #[must_use]
    pub fn boards(&self) -> BoardsApi<'_> {
        BoardsApi::new(&self.inner)
    }

    /// Column endpoints.
    #[must_use]
    pub fn columns(&self) -> ColumnsApi<'_> {
        ColumnsApi::new(&self.inner)
    }

    /// Card endpoints.
    #[must_use]
    pub fn cards(&self) -> CardsApi<'_> {
        CardsApi::new(&self.inner)
    }

    /// Profile, avatar and theme endpoints.
    #[must_use]
    pub fn users(&self) -> UsersApi<'_> {
        UsersApi::new(&self.inner)
    }

    /// Support-contact endpoint.
    #[must_use]
    pub fn support(&self) -> SupportApi<'_> {
        SupportApi::new(&self.inner)
    }
}

/// Builder for [`TaskDeckClient`].
#[derive(Default)]
pub struct TaskDeckClientBuilder {
    config: Option<ClientConfig>,
    store: Option<Arc<dyn CredentialStore>>,
}

impl TaskDeckClientBuilder {
    /// Set the client configuration.
    #[must_use]
    pub fn config(mut self, config: ClientConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Set the credential store. Defaults to the OS keyring.
    #[must_use]
    pub fn store(mut self, store: Arc<dyn CredentialStore>) -> Self {
        self.store = Some(store);
        self
    }

    /// Build the client.
    ///
    /// # Errors
    /// Returns error if the HTTP client cannot be constructed.
    pub fn build(self) -> Result<TaskDeckClient, ApiError> {
        let config = self.config.unwrap_or_default();
        let store = self
            .store
            .unwrap_or_else(|| Arc::new(KeyringCredentialStore::new(DEFAULT_KEYRING_SERVICE)));
        TaskDeckClient::new(&config, store)
    }
}

#[cfg(test)]
mod tests {
    use taskdeck_common::auth::MemoryCredentialStore;

    use super::*;

    #[tokio::test]
    async fn builder_defaults_build() {
        let client = TaskDeckClient::builder()
            .store(Arc::new(MemoryCredentialStore::new()))
            .build();
        assert!(client.is_ok());
    }

    #[tokio::test]
    async fn is_authenticated_reflects_store_contents() {
        use taskdeck_common::auth::TokenSet;

        let store = Arc::new(MemoryCredentialStore::new());
        let client = TaskDeckClient::builder()
            .store(store.clone())
            .build()
            .unwrap();
        assert!(!client.is_authenticated().await);

        store.save(&TokenSet::new("abc", None)).await.unwrap();
        assert!(client.is_authenticated().await);
    }
}

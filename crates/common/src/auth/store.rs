//! Credential store abstraction
//!
//! The client reads the access token on every request and the refresh
//! protocol is the only writer. Backends are swappable so tests run against
//! an in-memory store while applications use the OS keyring.

use async_trait::async_trait;
use parking_lot::RwLock;

use super::types::TokenSet;

/// Error type for credential store operations
#[derive(Debug)]
pub enum StoreError {
    /// The storage backend failed (keyring unavailable, platform error).
    Backend(String),

    /// Stored data exists but could not be interpreted.
    Corrupt(String),
}

impl std::fmt::Display for StoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Backend(e) => write!(f, "credential store backend error: {e}"),
            Self::Corrupt(e) => write!(f, "credential store data corrupt: {e}"),
        }
    }
}

impl std::error::Error for StoreError {}

/// Durable storage for the credential pair.
///
/// Absence of stored credentials is not an error; `load` returns `None` and
/// requests proceed unauthenticated.
#[async_trait]
pub trait CredentialStore: Send + Sync {
    /// Read the current credential pair, if any.
    ///
    /// # Errors
    /// Returns error if the backend fails, not if no credentials exist.
    async fn load(&self) -> Result<Option<TokenSet>, StoreError>;

    /// Persist the credential pair, replacing whatever was stored.
    ///
    /// # Errors
    /// Returns error if the backend fails.
    async fn save(&self, tokens: &TokenSet) -> Result<(), StoreError>;

    /// Delete both tokens. Deleting an empty store succeeds.
    ///
    /// # Errors
    /// Returns error if the backend fails.
    async fn clear(&self) -> Result<(), StoreError>;
}

/// In-memory credential store for tests and ephemeral sessions.
#[derive(Debug, Default)]
pub struct MemoryCredentialStore {
    tokens: RwLock<Option<TokenSet>>,
}

impl MemoryCredentialStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-seeded with credentials.
    #[must_use]
    pub fn with_tokens(tokens: TokenSet) -> Self {
        Self { tokens: RwLock::new(Some(tokens)) }
    }
}

#[async_trait]
impl CredentialStore for MemoryCredentialStore {
    async fn load(&self) -> Result<Option<TokenSet>, StoreError> {
        Ok(self.tokens.read().clone())
    }

    async fn save(&self, tokens: &TokenSet) -> Result<(), StoreError> {
        *self.tokens.write() = Some(tokens.clone());
        Ok(())
    }

    async fn clear(&self) -> Result<(), StoreError> {
        *self.tokens.write() = None;
        Ok(())
    }
}

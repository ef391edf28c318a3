//! Credential storage in the OS keyring
//!
//! Durable backend for [`CredentialStore`] keeping the two logical values
//! under the accounts `accessToken` and `refreshToken` of a configurable
//! service name. Uses the platform keyring (macOS Keychain, Windows
//! Credential Manager, Linux Secret Service) via the `keyring` crate.

use async_trait::async_trait;
use keyring::Entry;
use tracing::debug;

use super::store::{CredentialStore, StoreError};
use super::types::TokenSet;

const ACCESS_ACCOUNT: &str = "accessToken";
const REFRESH_ACCOUNT: &str = "refreshToken";

/// OS-keyring-backed credential store.
#[derive(Debug, Clone)]
pub struct KeyringCredentialStore {
    service: String,
}

impl KeyringCredentialStore {
    /// Create a store scoped to `service` (e.g. `"TaskDeck"`).
    #[must_use]
    pub fn new(service: impl Into<String>) -> Self {
        Self { service: service.into() }
    }

    fn entry(&self, account: &str) -> Result<Entry, StoreError> {
        Entry::new(&self.service, account).map_err(|e| StoreError::Backend(e.to_string()))
    }

    fn read(&self, account: &str) -> Result<Option<String>, StoreError> {
        match self.entry(account)?.get_password() {
            Ok(secret) => Ok(Some(secret)),
            Err(keyring::Error::NoEntry) => Ok(None),
            Err(other) => Err(StoreError::Backend(other.to_string())),
        }
    }

    fn write(&self, account: &str, secret: &str) -> Result<(), StoreError> {
        self.entry(account)?
            .set_password(secret)
            .map_err(|e| StoreError::Backend(e.to_string()))
    }

    fn delete(&self, account: &str) -> Result<(), StoreError> {
        match self.entry(account)?.delete_credential() {
            Ok(()) | Err(keyring::Error::NoEntry) => Ok(()),
            Err(other) => Err(StoreError::Backend(other.to_string())),
        }
    }
}

#[async_trait]
impl CredentialStore for KeyringCredentialStore {
    async fn load(&self) -> Result<Option<TokenSet>, StoreError> {
        let Some(access_token) = self.read(ACCESS_ACCOUNT)? else {
            return Ok(None);
        };
        let refresh_token = self.read(REFRESH_ACCOUNT)?;
        Ok(Some(TokenSet { access_token, refresh_token }))
    }

    async fn save(&self, tokens: &TokenSet) -> Result<(), StoreError> {
        debug!(service = %self.service, "storing credentials in keyring");
        self.write(ACCESS_ACCOUNT, &tokens.access_token)?;
        match &tokens.refresh_token {
            Some(refresh) => self.write(REFRESH_ACCOUNT, refresh),
            // no refresh token in the pair: drop any stale stored one
            None => self.delete(REFRESH_ACCOUNT),
        }
    }

    async fn clear(&self) -> Result<(), StoreError> {
        debug!(service = %self.service, "deleting credentials from keyring");
        self.delete(ACCESS_ACCOUNT)?;
        self.delete(REFRESH_ACCOUNT)
    }
}

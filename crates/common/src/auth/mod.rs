//! Credential lifecycle for the TaskDeck backend
//!
//! The backend issues a short-lived access token and a long-lived refresh
//! token at login. Every API request carries the access token as a bearer
//! credential; when the backend rejects it with a 401, exactly one refresh
//! call is made no matter how many requests failed concurrently, and every
//! affected request replays once with the renewed token.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────┐
//! │ AuthenticatedClient  │  (taskdeck-client) request path + refresh protocol
//! └──────────┬───────────┘
//!            │
//!            ├──► CredentialStore   (durable token persistence)
//!            │        ├── KeyringCredentialStore  (OS keyring)
//!            │        └── MemoryCredentialStore   (tests, ephemeral sessions)
//!            │
//!            └──► RefreshGate       (single-flight coalescing state)
//! ```
//!
//! # Module Organization
//!
//! - **[`types`]**: the credential pair ([`TokenSet`])
//! - **[`store`]**: [`CredentialStore`] trait and the in-memory backend
//! - **[`keychain`]**: OS-keyring backend
//! - **[`refresh`]**: [`RefreshGate`], the single-flight coordination object

pub mod keychain;
pub mod refresh;
pub mod store;
pub mod types;

// Re-export commonly used types and functions
pub use keychain::KeyringCredentialStore;
pub use refresh::{RefreshGate, RefreshOutcome, RefreshTicket};
pub use store::{CredentialStore, MemoryCredentialStore, StoreError};
pub use types::TokenSet;

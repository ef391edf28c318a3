//! Shared auth foundation for the TaskDeck SDK.
//!
//! This crate owns everything the authenticated HTTP client needs that is not
//! HTTP itself: the credential pair, the durable credential store abstraction
//! and its backends, and the single-flight refresh gate.

#![forbid(unsafe_code)]
#![warn(rust_2018_idioms)]
#![warn(clippy::all, clippy::perf, clippy::complexity, clippy::suspicious)]

pub mod auth;

// Re-export commonly used types and traits for convenience
pub use auth::{
    CredentialStore, KeyringCredentialStore, MemoryCredentialStore, RefreshGate, RefreshOutcome,
    RefreshTicket, StoreError, TokenSet,
};

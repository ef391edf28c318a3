//! Authenticated HTTP transport
//!
//! [`AuthenticatedClient`] owns the request path: bearer attachment, response
//! classification, and the single-flight refresh protocol. [`ApiRequest`] is
//! the owned request description that makes replay possible.

pub mod client;
pub mod request;

pub use client::AuthenticatedClient;
pub use request::{ApiRequest, FormPart, FormValue, RequestBody};

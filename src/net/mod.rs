//! Networking: the authenticated fetch wrapper and its transports.
//!
//! SYSTEM CONTEXT
//! ==============
//! `fetch` defines the request shape and the `Transport` seam, `types` holds
//! the wire payloads, and `browser` / `native` provide the two transports.

pub mod fetch;
pub mod types;

#[cfg(feature = "hydrate")]
pub mod browser;
#[cfg(feature = "native")]
pub mod native;

pub use fetch::{
    AuthenticatedFetch, Credentials, HttpResponse, Method, RequestBody, RequestConfig, Transport, include_credentials,
};
pub use types::{ErrorPayload, FormFields};

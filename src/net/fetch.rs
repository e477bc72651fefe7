//! Authenticated fetch wrapper.
//!
//! Every request that goes through [`AuthenticatedFetch`] carries the
//! credentials the transport holds for the target origin (cookies in the
//! browser, the cookie jar natively), whatever the caller asked for.
//!
//! ERROR HANDLING
//! ==============
//! No retries, no timeout, no error translation. Transport errors and
//! non-2xx responses are handed back to the caller as-is.

#![allow(async_fn_in_trait)]

#[cfg(test)]
#[path = "fetch_test.rs"]
mod fetch_test;

use std::fmt;

use super::types::FormFields;
use crate::error::FetchError;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Method {
    #[default]
    Get,
    Post,
    Put,
    Patch,
    Delete,
    Head,
}

impl Method {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Patch => "PATCH",
            Self::Delete => "DELETE",
            Self::Head => "HEAD",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Whether stored credentials ride along with a request.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Credentials {
    Omit,
    #[default]
    SameOrigin,
    Include,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum RequestBody {
    #[default]
    Empty,
    Form(FormFields),
    Text(String),
}

/// Caller-supplied request options, mirroring a fetch `init` object.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestConfig {
    pub method: Method,
    pub headers: Vec<(String, String)>,
    pub body: RequestBody,
    pub credentials: Credentials,
}

impl RequestConfig {
    #[must_use]
    pub fn get() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn post(body: RequestBody) -> Self {
        Self { method: Method::Post, body, ..Self::default() }
    }

    #[must_use]
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    #[must_use]
    pub fn credentials(mut self, credentials: Credentials) -> Self {
        self.credentials = credentials;
        self
    }
}

/// Force `Credentials::Include` onto a request, overriding the caller's mode.
#[must_use]
pub fn include_credentials(options: RequestConfig) -> RequestConfig {
    RequestConfig { credentials: Credentials::Include, ..options }
}

/// The response side of a [`Transport`].
pub trait HttpResponse {
    fn status(&self) -> u16;

    fn ok(&self) -> bool {
        (200..300).contains(&self.status())
    }

    /// Consume the response and read its body as text.
    async fn text(self) -> Result<String, FetchError>;
}

/// Sends exactly one HTTP request per call.
pub trait Transport {
    type Response: HttpResponse;

    async fn send(&self, url: &str, request: RequestConfig) -> Result<Self::Response, FetchError>;
}

/// Thin wrapper that always includes credentials.
#[derive(Debug, Clone)]
pub struct AuthenticatedFetch<T> {
    transport: T,
}

impl<T: Transport> AuthenticatedFetch<T> {
    #[must_use]
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    #[must_use]
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Issue `options` against `url` with credentials included.
    ///
    /// # Errors
    ///
    /// Returns whatever the transport returns; nothing is translated.
    pub async fn fetch(&self, url: &str, options: RequestConfig) -> Result<T::Response, FetchError> {
        let request = include_credentials(options);
        log::debug!("{} {url} (credentials included)", request.method);
        self.transport.send(url, request).await
    }

    /// Authenticated `GET` of `url`.
    ///
    /// # Errors
    ///
    /// See [`AuthenticatedFetch::fetch`].
    pub async fn get(&self, url: &str) -> Result<T::Response, FetchError> {
        self.fetch(url, RequestConfig::get()).await
    }

    /// Authenticated `POST` of `body` to `url`.
    ///
    /// # Errors
    ///
    /// See [`AuthenticatedFetch::fetch`].
    pub async fn post(&self, url: &str, body: RequestBody) -> Result<T::Response, FetchError> {
        self.fetch(url, RequestConfig::post(body)).await
    }
}

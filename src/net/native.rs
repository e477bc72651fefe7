//! `Transport` backed by `reqwest`, holding credentials in a cookie jar.
//!
//! Two clients share one base URL. The `credentialed` client reads and writes
//! the jar; the `anonymous` one never touches it. `SameOrigin` uses the jar
//! only when the resolved URL keeps the base origin; an absolute URL to any
//! other origin goes out without cookies.

use std::sync::Arc;

use reqwest::cookie::{CookieStore, Jar};
use reqwest::{Client, Response, Url};

use super::fetch::{Credentials, HttpResponse, Method, RequestBody, RequestConfig, Transport};
use crate::error::FetchError;

#[derive(Debug, Clone)]
pub struct NativeTransport {
    base_url: Url,
    jar: Arc<Jar>,
    credentialed: Client,
    anonymous: Client,
}

impl NativeTransport {
    /// # Errors
    ///
    /// Returns `FetchError::InvalidUrl` if `base_url` does not parse, or
    /// `FetchError::Network` if a client cannot be built.
    pub fn new(base_url: &str) -> Result<Self, FetchError> {
        let base_url = Url::parse(base_url)
            .map_err(|e| FetchError::InvalidUrl { url: base_url.to_owned(), reason: e.to_string() })?;
        let jar = Arc::new(Jar::default());
        let credentialed = Client::builder()
            .cookie_provider(Arc::clone(&jar))
            .build()
            .map_err(|e| FetchError::Network(e.to_string()))?;
        let anonymous = Client::builder().build().map_err(|e| FetchError::Network(e.to_string()))?;
        Ok(Self { base_url, jar, credentialed, anonymous })
    }

    #[must_use]
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// The `Cookie` header the jar would send to the base origin, if any.
    #[must_use]
    pub fn cookie_header(&self) -> Option<String> {
        self.jar
            .cookies(&self.base_url)
            .and_then(|value| value.to_str().ok().map(str::to_owned))
    }

    fn resolve(&self, url: &str) -> Result<Url, FetchError> {
        self.base_url
            .join(url)
            .map_err(|e| FetchError::InvalidUrl { url: url.to_owned(), reason: e.to_string() })
    }
}

impl Transport for NativeTransport {
    type Response = Response;

    async fn send(&self, url: &str, request: RequestConfig) -> Result<Response, FetchError> {
        let target = self.resolve(url)?;
        let client = match request.credentials {
            Credentials::Include => &self.credentialed,
            Credentials::SameOrigin if target.origin() == self.base_url.origin() => &self.credentialed,
            Credentials::SameOrigin | Credentials::Omit => &self.anonymous,
        };
        let mut builder = client.request(to_reqwest_method(request.method), target);
        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }
        builder = match request.body {
            RequestBody::Empty => builder,
            RequestBody::Text(text) => builder.body(text),
            RequestBody::Form(fields) => builder.form(fields.as_pairs()),
        };
        builder.send().await.map_err(|e| FetchError::Network(e.to_string()))
    }
}

impl HttpResponse for Response {
    fn status(&self) -> u16 {
        Response::status(self).as_u16()
    }

    async fn text(self) -> Result<String, FetchError> {
        Response::text(self).await.map_err(|e| FetchError::Body(e.to_string()))
    }
}

fn to_reqwest_method(method: Method) -> reqwest::Method {
    match method {
        Method::Get => reqwest::Method::GET,
        Method::Post => reqwest::Method::POST,
        Method::Put => reqwest::Method::PUT,
        Method::Patch => reqwest::Method::PATCH,
        Method::Delete => reqwest::Method::DELETE,
        Method::Head => reqwest::Method::HEAD,
    }
}

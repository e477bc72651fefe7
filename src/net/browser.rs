//! `Transport` backed by the browser's `fetch` via `gloo-net`.
//!
//! Credentials map onto the fetch `credentials` option, so cookies are
//! managed entirely by the browser. Form bodies are sent as `FormData`.

#[cfg(test)]
#[path = "browser_test.rs"]
mod browser_test;

use gloo_net::http::{Request, RequestBuilder, Response};
use web_sys::RequestCredentials;

use super::fetch::{Credentials, HttpResponse, Method, RequestBody, RequestConfig, Transport};
use super::types::FormFields;
use crate::error::FetchError;

#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserTransport;

impl Transport for BrowserTransport {
    type Response = Response;

    async fn send(&self, url: &str, request: RequestConfig) -> Result<Response, FetchError> {
        let mut builder = RequestBuilder::new(url)
            .method(to_gloo_method(request.method))
            .credentials(to_request_credentials(request.credentials));
        for (name, value) in &request.headers {
            builder = builder.header(name, value);
        }
        let req = build(builder, request.body)?;
        req.send().await.map_err(|e| FetchError::Network(e.to_string()))
    }
}

impl HttpResponse for Response {
    fn status(&self) -> u16 {
        Response::status(self)
    }

    async fn text(self) -> Result<String, FetchError> {
        Response::text(&self).await.map_err(|e| FetchError::Body(e.to_string()))
    }
}

fn build(builder: RequestBuilder, body: RequestBody) -> Result<Request, FetchError> {
    let built = match body {
        RequestBody::Empty => builder.build(),
        RequestBody::Text(text) => builder.body(text),
        RequestBody::Form(fields) => builder.body(to_form_data(&fields)?),
    };
    built.map_err(|e| FetchError::Browser(e.to_string()))
}

fn to_form_data(fields: &FormFields) -> Result<web_sys::FormData, FetchError> {
    let form = web_sys::FormData::new().map_err(|e| FetchError::Browser(format!("{e:?}")))?;
    for (name, value) in fields.iter() {
        form.append_with_str(name, value)
            .map_err(|e| FetchError::Browser(format!("{e:?}")))?;
    }
    Ok(form)
}

fn to_gloo_method(method: Method) -> gloo_net::http::Method {
    use gloo_net::http::Method as M;
    match method {
        Method::Get => M::GET,
        Method::Post => M::POST,
        Method::Put => M::PUT,
        Method::Patch => M::PATCH,
        Method::Delete => M::DELETE,
        Method::Head => M::HEAD,
    }
}

fn to_request_credentials(credentials: Credentials) -> RequestCredentials {
    match credentials {
        Credentials::Omit => RequestCredentials::Omit,
        Credentials::SameOrigin => RequestCredentials::SameOrigin,
        Credentials::Include => RequestCredentials::Include,
    }
}

use futures::executor::block_on;

use super::*;
use crate::test_support::{MockResponse, MockTransport};

fn all_modes() -> [Credentials; 3] {
    [Credentials::Omit, Credentials::SameOrigin, Credentials::Include]
}

// =============================================================
// include_credentials
// =============================================================

#[test]
fn include_credentials_overrides_every_mode() {
    for mode in all_modes() {
        let out = include_credentials(RequestConfig::get().credentials(mode));
        assert_eq!(out.credentials, Credentials::Include);
    }
}

#[test]
fn include_credentials_leaves_other_options_alone() {
    let options = RequestConfig::post(RequestBody::Text("{}".to_owned()))
        .header("Content-Type", "application/json")
        .credentials(Credentials::Omit);
    let out = include_credentials(options.clone());
    assert_eq!(out.method, Method::Post);
    assert_eq!(out.headers, options.headers);
    assert_eq!(out.body, options.body);
}

#[test]
fn method_display_is_uppercase_verb() {
    assert_eq!(Method::Get.to_string(), "GET");
    assert_eq!(Method::Delete.to_string(), "DELETE");
}

// =============================================================
// AuthenticatedFetch
// =============================================================

#[test]
fn fetch_sends_credentials_included_for_any_caller_mode() {
    for mode in all_modes() {
        let client = AuthenticatedFetch::new(MockTransport::replying(MockResponse::new(200, "")));
        block_on(client.fetch("/api/x", RequestConfig::get().credentials(mode))).unwrap();
        let sent = client.transport().sent.borrow();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].0, "/api/x");
        assert_eq!(sent[0].1.credentials, Credentials::Include);
    }
}

#[test]
fn fetch_returns_response_unmodified() {
    let client = AuthenticatedFetch::new(MockTransport::replying(MockResponse::new(418, "teapot")));
    let resp = block_on(client.get("/brew")).unwrap();
    assert_eq!(resp.status(), 418);
    assert!(!resp.ok());
    assert_eq!(block_on(resp.text()).unwrap(), "teapot");
}

#[test]
fn fetch_surfaces_transport_error_without_retry() {
    let client = AuthenticatedFetch::new(MockTransport::failing("connection refused"));
    let err = block_on(client.get("/dashboard")).unwrap_err();
    assert!(matches!(err, FetchError::Network(ref m) if m == "connection refused"));
    assert_eq!(client.transport().sent.borrow().len(), 1);
}

#[test]
fn post_sends_body_with_post_method() {
    let client = AuthenticatedFetch::new(MockTransport::replying(MockResponse::new(201, "")));
    let fields: FormFields = [("username", "alice")].into_iter().collect();
    block_on(client.post("/login", RequestBody::Form(fields.clone()))).unwrap();
    let sent = client.transport().sent.borrow();
    assert_eq!(sent[0].1.method, Method::Post);
    assert_eq!(sent[0].1.body, RequestBody::Form(fields));
}

#[test]
fn http_response_ok_covers_2xx_only() {
    assert!(MockResponse::new(200, "").ok());
    assert!(MockResponse::new(299, "").ok());
    assert!(!MockResponse::new(303, "").ok());
    assert!(!MockResponse::new(401, "").ok());
}

use super::*;
use crate::net::fetch::include_credentials;

#[test]
fn authenticated_requests_map_to_include_for_every_caller_mode() {
    for mode in [Credentials::Omit, Credentials::SameOrigin, Credentials::Include] {
        let request = include_credentials(RequestConfig::get().credentials(mode));
        assert_eq!(to_request_credentials(request.credentials), RequestCredentials::Include);
    }
}

#[test]
fn request_credentials_map_one_to_one() {
    assert_eq!(to_request_credentials(Credentials::Omit), RequestCredentials::Omit);
    assert_eq!(to_request_credentials(Credentials::SameOrigin), RequestCredentials::SameOrigin);
    assert_eq!(to_request_credentials(Credentials::Include), RequestCredentials::Include);
}

#[test]
fn gloo_method_matches_verb() {
    use gloo_net::http::Method as M;
    assert_eq!(to_gloo_method(Method::Get), M::GET);
    assert_eq!(to_gloo_method(Method::Post), M::POST);
    assert_eq!(to_gloo_method(Method::Put), M::PUT);
    assert_eq!(to_gloo_method(Method::Patch), M::PATCH);
    assert_eq!(to_gloo_method(Method::Delete), M::DELETE);
    assert_eq!(to_gloo_method(Method::Head), M::HEAD);
}

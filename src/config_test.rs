use super::*;

#[test]
fn default_matches_server_routes() {
    let cfg = ClientConfig::default();
    assert_eq!(cfg.login_endpoint, "/login");
    assert_eq!(cfg.dashboard_endpoint, "/dashboard");
    assert_eq!(cfg.login_path, "/login");
    assert_eq!(cfg.dashboard_path, "/dashboard");
    assert_eq!(cfg.login_form_selector, "#login-form");
}

#[test]
fn from_json_overrides_only_given_keys() {
    let cfg = ClientConfig::from_json(r#"{"dashboard_path": "/home"}"#).unwrap();
    assert_eq!(cfg.dashboard_path, "/home");
    assert_eq!(cfg.login_endpoint, DEFAULT_LOGIN_ENDPOINT);
    assert_eq!(cfg.login_form_selector, DEFAULT_LOGIN_FORM_SELECTOR);
}

#[test]
fn from_json_empty_object_is_default() {
    assert_eq!(ClientConfig::from_json("{}").unwrap(), ClientConfig::default());
}

#[test]
fn from_json_rejects_wrong_types() {
    assert!(ClientConfig::from_json(r#"{"login_path": 3}"#).is_err());
    assert!(ClientConfig::from_json("not json").is_err());
}

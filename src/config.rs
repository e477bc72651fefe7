//! Endpoint and navigation configuration shared by both flows.
//!
//! Defaults match the server's routes. The browser surface can override any
//! subset from a JSON object; missing keys keep their defaults.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::Deserialize;

pub const DEFAULT_LOGIN_ENDPOINT: &str = "/login";
pub const DEFAULT_DASHBOARD_ENDPOINT: &str = "/dashboard";
pub const DEFAULT_LOGIN_PATH: &str = "/login";
pub const DEFAULT_DASHBOARD_PATH: &str = "/dashboard";
pub const DEFAULT_LOGIN_FORM_SELECTOR: &str = "#login-form";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Endpoint that receives the login form POST.
    pub login_endpoint: String,
    /// Endpoint that serves the dashboard HTML.
    pub dashboard_endpoint: String,
    /// Where the browser goes when the dashboard cannot be loaded.
    pub login_path: String,
    /// Where the browser goes after a successful login.
    pub dashboard_path: String,
    /// CSS selector for the login form.
    pub login_form_selector: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            login_endpoint: DEFAULT_LOGIN_ENDPOINT.to_owned(),
            dashboard_endpoint: DEFAULT_DASHBOARD_ENDPOINT.to_owned(),
            login_path: DEFAULT_LOGIN_PATH.to_owned(),
            dashboard_path: DEFAULT_DASHBOARD_PATH.to_owned(),
            login_form_selector: DEFAULT_LOGIN_FORM_SELECTOR.to_owned(),
        }
    }
}

impl ClientConfig {
    /// Parse a JSON override object on top of the defaults.
    ///
    /// # Errors
    ///
    /// Returns the `serde_json` error if `raw` is not a JSON object with
    /// string-valued known keys.
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }
}

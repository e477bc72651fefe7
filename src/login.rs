//! Login form submission.
//!
//! Suppresses the native form submit, posts the form fields to the login
//! endpoint with credentials included, then either navigates to the dashboard
//! or alerts the failure reason from the error body.
//!
//! ERROR HANDLING
//! ==============
//! A non-2xx status is an expected outcome and becomes an alert. An error
//! body that is not JSON (or has no usable `detail`) falls back to a message
//! naming the status code. Only transport failures come back as `Err`; in that
//! case nothing is shown and the page stays put.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use std::cell::Cell;

use crate::config::ClientConfig;
use crate::error::FetchError;
use crate::flow::FlowTracker;
use crate::net::{AuthenticatedFetch, ErrorPayload, FormFields, HttpResponse, RequestBody, Transport};
use crate::page::Page;

/// What the login flow needs from a form submit event.
pub trait SubmitEvent {
    /// Stop the browser's own full-page form submission.
    fn prevent_default(&self);

    /// Fields of the submitted form, in document order.
    fn form_fields(&self) -> FormFields;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginOutcome {
    Redirected,
    Rejected { message: String },
}

/// Result of trying to bind the submit handler to the login form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Attach {
    Attached,
    /// No element matched the form selector; nothing was bound.
    MissingForm,
    /// A handler is already bound; binding again would double-submit.
    AlreadyInstalled,
}

/// Bind the submit handler to `form` unless one is already bound.
///
/// `installed` only flips once `attach` has actually run, so a call made
/// before the form exists does not block a later one.
#[must_use]
pub fn attach_once<F>(installed: &Cell<bool>, form: Option<F>, attach: impl FnOnce(F)) -> Attach {
    if installed.get() {
        return Attach::AlreadyInstalled;
    }
    let Some(form) = form else {
        return Attach::MissingForm;
    };
    attach(form);
    installed.set(true);
    Attach::Attached
}

/// Suppress the native submit, then hand the event to `spawn`.
///
/// The suppression happens synchronously in the listener, before any future
/// is scheduled.
pub fn dispatch_submit<E: SubmitEvent>(event: E, spawn: impl FnOnce(E)) {
    event.prevent_default();
    spawn(event);
}

/// Alert text for a failed login.
///
/// `body` is the raw response body; `status` is used when it carries no
/// readable `detail`.
#[must_use]
pub fn failure_message(status: u16, body: &str) -> String {
    match serde_json::from_str::<ErrorPayload>(body) {
        Ok(payload) => match payload.reason() {
            Some(reason) => format!("Login failed: {reason}"),
            None => {
                log::warn!("login error body has no readable detail (status {status})");
                status_message(status)
            }
        },
        Err(e) => {
            log::warn!("login error body is not valid JSON (status {status}): {e}");
            status_message(status)
        }
    }
}

fn status_message(status: u16) -> String {
    format!("Login failed: server responded with status {status}")
}

/// Handle one login form submission.
///
/// # Errors
///
/// Returns the transport's error if the POST never produced a response.
pub async fn handle_login<E, T, P>(
    event: &E,
    fetch: &AuthenticatedFetch<T>,
    page: &P,
    config: &ClientConfig,
) -> Result<LoginOutcome, FetchError>
where
    E: SubmitEvent + ?Sized,
    T: Transport,
    P: Page + ?Sized,
{
    event.prevent_default();
    let fields = event.form_fields();

    let mut flow = FlowTracker::new("login");
    flow.send();
    let response = fetch.post(&config.login_endpoint, RequestBody::Form(fields)).await?;

    let status = response.status();
    if response.ok() {
        flow.settle(true);
        log::info!("login succeeded (status {status}), navigating to {}", config.dashboard_path);
        page.navigate(&config.dashboard_path);
        return Ok(LoginOutcome::Redirected);
    }

    flow.settle(false);
    let body = match response.text().await {
        Ok(body) => body,
        Err(e) => {
            log::warn!("could not read login error body: {e}");
            String::new()
        }
    };
    let message = failure_message(status, &body);
    log::info!("login rejected (status {status})");
    page.alert(&message);
    Ok(LoginOutcome::Rejected { message })
}

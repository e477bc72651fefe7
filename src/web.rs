//! wasm-bindgen entry points for the browser.
//!
//! `start` runs automatically when the module is instantiated and only sets
//! up panic reporting and console logging. Pages then opt into a behaviour:
//! the login page calls `install_login_handler`, the dashboard shell calls
//! `run_dashboard_loader`. `configure` may be called first to override the
//! default endpoints.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use web_sys::{Event, HtmlFormElement};

use crate::config::ClientConfig;
use crate::dashboard::load_dashboard;
use crate::login::{Attach, SubmitEvent, attach_once, dispatch_submit, handle_login};
use crate::net::browser::BrowserTransport;
use crate::net::{AuthenticatedFetch, FormFields};
use crate::page::browser::BrowserPage;

thread_local! {
    static CONFIG: RefCell<ClientConfig> = RefCell::new(ClientConfig::default());
    static LOGIN_HANDLER_INSTALLED: Cell<bool> = const { Cell::new(false) };
}

fn current_config() -> ClientConfig {
    CONFIG.with(|cfg| cfg.borrow().clone())
}

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
}

/// Override the default endpoints from a JSON object.
///
/// # Errors
///
/// Rejects with a message if `json` is not a valid configuration object.
#[wasm_bindgen]
pub fn configure(json: &str) -> Result<(), JsValue> {
    let cfg = ClientConfig::from_json(json).map_err(|e| JsValue::from_str(&e.to_string()))?;
    CONFIG.with(|slot| *slot.borrow_mut() = cfg);
    Ok(())
}

/// Attach the login submit handler once the DOM is ready.
///
/// Repeated calls are harmless: only the first successful attach binds a
/// listener.
#[wasm_bindgen]
pub fn install_login_handler() {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    if document.ready_state() != "loading" {
        attach_login_handler();
        return;
    }
    let on_ready = Closure::once(attach_login_handler);
    if let Err(e) =
        document.add_event_listener_with_callback("DOMContentLoaded", on_ready.as_ref().unchecked_ref())
    {
        log::warn!("could not wait for DOMContentLoaded: {e:?}");
    }
    on_ready.forget();
}

/// Fetch the dashboard and render it, or redirect to login.
#[wasm_bindgen]
pub fn run_dashboard_loader() {
    let config = current_config();
    wasm_bindgen_futures::spawn_local(async move {
        let fetch = AuthenticatedFetch::new(BrowserTransport);
        load_dashboard(&fetch, &BrowserPage, &config).await;
    });
}

fn attach_login_handler() {
    let config = Rc::new(current_config());
    let form = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.query_selector(&config.login_form_selector).ok().flatten());

    let selector = config.login_form_selector.clone();
    let outcome = LOGIN_HANDLER_INSTALLED.with(|installed| {
        attach_once(installed, form, |form| {
            let on_submit = Closure::<dyn FnMut(Event)>::new(move |event: Event| {
                let config = Rc::clone(&config);
                dispatch_submit(BrowserSubmit { event }, |submit| {
                    wasm_bindgen_futures::spawn_local(async move {
                        let fetch = AuthenticatedFetch::new(BrowserTransport);
                        if let Err(e) = handle_login(&submit, &fetch, &BrowserPage, &config).await {
                            log::error!("login submission failed: {e}");
                        }
                    });
                });
            });
            if let Err(e) = form.add_event_listener_with_callback("submit", on_submit.as_ref().unchecked_ref()) {
                log::warn!("could not attach login handler: {e:?}");
            }
            on_submit.forget();
        })
    });
    match outcome {
        Attach::Attached => log::debug!("login handler attached to {selector}"),
        Attach::MissingForm => log::debug!("no element matches {selector}; login handler not attached"),
        Attach::AlreadyInstalled => log::debug!("login handler already attached"),
    }
}

struct BrowserSubmit {
    event: Event,
}

impl SubmitEvent for BrowserSubmit {
    fn prevent_default(&self) {
        self.event.prevent_default();
    }

    fn form_fields(&self) -> FormFields {
        let Some(form) = self.event.target().and_then(|t| t.dyn_into::<HtmlFormElement>().ok()) else {
            return FormFields::new();
        };
        let Ok(data) = web_sys::FormData::new_with_form(&form) else {
            return FormFields::new();
        };
        let Ok(Some(entries)) = js_sys::try_iter(&data) else {
            return FormFields::new();
        };
        // Each entry is a `[name, value]` pair; file values are skipped.
        entries
            .filter_map(Result::ok)
            .filter_map(|entry| {
                let pair = js_sys::Array::from(&entry);
                Some((pair.get(0).as_string()?, pair.get(1).as_string()?))
            })
            .collect()
    }
}

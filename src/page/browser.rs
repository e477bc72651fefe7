//! `Page` backed by `web-sys`. Requires a browser environment.
//!
//! DOM failures are logged and swallowed; there is nothing useful a flow
//! could do with them once its request has settled.

use super::Page;

#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserPage;

impl Page for BrowserPage {
    fn navigate(&self, path: &str) {
        let Some(window) = web_sys::window() else {
            return;
        };
        if let Err(e) = window.location().set_href(path) {
            log::warn!("navigation to {path} failed: {e:?}");
        }
    }

    fn alert(&self, message: &str) {
        let Some(window) = web_sys::window() else {
            return;
        };
        if let Err(e) = window.alert_with_message(message) {
            log::warn!("alert failed: {e:?}");
        }
    }

    fn replace_body(&self, html: &str) {
        match web_sys::window().and_then(|w| w.document()).and_then(|d| d.body()) {
            Some(body) => body.set_inner_html(html),
            None => log::warn!("no document body to replace"),
        }
    }
}

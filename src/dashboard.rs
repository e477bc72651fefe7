//! Dashboard loader: fetch the dashboard HTML with credentials and swap it
//! into the page, or send the user back to login.
//!
//! Every failure is treated the same way. A transport error, an unreadable
//! body, and a 401 all end in a redirect to the login page.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use crate::config::ClientConfig;
use crate::flow::FlowTracker;
use crate::net::{AuthenticatedFetch, HttpResponse, Transport};
use crate::page::Page;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DashboardOutcome {
    Rendered,
    RedirectedToLogin,
}

/// Run the loader once.
pub async fn load_dashboard<T, P>(fetch: &AuthenticatedFetch<T>, page: &P, config: &ClientConfig) -> DashboardOutcome
where
    T: Transport,
    P: Page + ?Sized,
{
    let mut flow = FlowTracker::new("dashboard");
    flow.send();

    let html = match fetch.get(&config.dashboard_endpoint).await {
        Ok(resp) if resp.ok() => resp.text().await.inspect_err(|e| log::warn!("dashboard body unreadable: {e}")).ok(),
        Ok(resp) => {
            log::info!("dashboard unavailable (status {})", resp.status());
            None
        }
        Err(e) => {
            log::warn!("dashboard request failed: {e}");
            None
        }
    };

    if let Some(html) = html {
        flow.settle(true);
        page.replace_body(&html);
        DashboardOutcome::Rendered
    } else {
        flow.settle(false);
        page.navigate(&config.login_path);
        DashboardOutcome::RedirectedToLogin
    }
}

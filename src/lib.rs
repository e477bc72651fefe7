//! # portal-client
//!
//! Browser-side login and dashboard behaviour for the portal, plus a headless
//! driver that runs the same flows natively.
//!
//! The flows (`login`, `dashboard`) are written against two seams: a
//! [`net::Transport`] that sends one HTTP request and a [`page::Page`] that
//! performs navigation, alerts, and body replacement. The `hydrate` feature
//! wires those seams to `gloo-net` and `web-sys`; the `native` feature wires
//! the transport to `reqwest` with a cookie jar.

pub mod config;
pub mod dashboard;
pub mod error;
pub mod flow;
pub mod login;
pub mod net;
pub mod page;

#[cfg(feature = "hydrate")]
pub mod web;

#[cfg(test)]
mod test_support;

pub use config::ClientConfig;
pub use error::FetchError;

//! Side effects the flows perform on the hosting page.

#[cfg(feature = "hydrate")]
pub mod browser;

/// The three things a flow can do to the page once its request settles.
pub trait Page {
    /// Send the browser to `path`.
    fn navigate(&self, path: &str);

    /// Show a blocking notification.
    fn alert(&self, message: &str);

    /// Replace the visible document body with `html`.
    fn replace_body(&self, html: &str);
}

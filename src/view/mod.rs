pub mod featured_renderer;
pub mod index_renderer;
pub mod rss_renderer;

/// Quotes are the only character that can break out of a card attribute.
pub(crate) fn attr(value: &str) -> String {
    value.replace('"', "&quot;")
}

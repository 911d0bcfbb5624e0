//! Content-Type selection.
//!
//! The server decides the content type from the final path segment's file
//! extension only; the client's `Accept` and `Content-Type` headers are not
//! consulted.

use std::path::Path;

pub const TEXT_HTML: &str = "text/html";
pub const TEXT_CSS: &str = "text/css";
pub const APPLICATION_JAVASCRIPT: &str = "application/javascript";

/// Returns the content type for a request path or resolved file path.
///
/// # Example
///
/// ```
/// # use ferrocat::http::mime::content_type_for;
/// assert_eq!(content_type_for("/css/styles.css"), "text/css");
/// assert_eq!(content_type_for("/js/scripts.js"), "application/javascript");
/// assert_eq!(content_type_for("/login"), "text/html");
/// ```
pub fn content_type_for(path: impl AsRef<Path>) -> &'static str {
    match path.as_ref().extension().and_then(|e| e.to_str()) {
        Some("css") => TEXT_CSS,
        Some("js") => APPLICATION_JAVASCRIPT,
        _ => TEXT_HTML,
    }
}

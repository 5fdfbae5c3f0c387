//! API utilities for frontend-backend communication
//!
//! Provides helper functions for constructing API URLs.

use super::config::config;

/// Origin of the backend when no explicit API URL is configured
///
/// Uses the current window location with port 3000.
///
/// # Returns
/// - Base like "http://localhost:3000" or "https://example.com:3000"
/// - Empty string if window is not available
pub fn api_base() -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}:3000", protocol, hostname)
}

/// Build a full API URL from a path and query pairs
///
/// # Example
/// ```rust,ignore
/// let url = api_url("/products/category/42", &[("page", "1".to_string())]);
/// ```
pub fn api_url(path: &str, query: &[(&str, String)]) -> String {
    join_url(&config().api_url, path, query)
}

/// Values are percent-encoded; empty `query` gives no `?`
pub fn join_url(base: &str, path: &str, query: &[(&str, String)]) -> String {
    let mut url = format!("{}{}", base, path);
    for (i, (name, value)) in query.iter().enumerate() {
        url.push(if i == 0 { '?' } else { '&' });
        url.push_str(name);
        url.push('=');
        url.push_str(&urlencoding::encode(value));
    }
    url
}

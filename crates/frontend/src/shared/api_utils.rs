//! API utilities for frontend-backend communication
//!
//! Provides helper functions for constructing API URLs.

use crate::shared::config::ApiConfig;

/// Get the base URL for API requests
///
/// Uses `base_url` from configuration when set; otherwise derives it from
/// the current window location and the configured backend port.
///
/// # Returns
/// - API base URL like "http://localhost:3000" or "https://example.com"
/// - Empty string if window is not available and no base URL is configured
pub fn api_base(config: &ApiConfig) -> String {
    let configured = config.base_url.trim().trim_end_matches('/');
    if !configured.is_empty() {
        return configured.to_string();
    }

    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}:{}", protocol, hostname, config.port)
}

/// Join a base URL and an API path
///
/// # Example
/// ```rust
/// use frontend::shared::api_utils::join_url;
/// assert_eq!(join_url("http://localhost:3000/", "/api/guards"), "http://localhost:3000/api/guards");
/// ```
pub fn join_url(base: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_configured_base_wins() {
        let config = ApiConfig {
            base_url: "https://api.example.com/".to_string(),
            port: 3000,
        };
        assert_eq!(api_base(&config), "https://api.example.com");
    }

    #[test]
    fn test_join_url() {
        assert_eq!(join_url("http://h:3000", "api/clients"), "http://h:3000/api/clients");
        assert_eq!(join_url("", "/api/clients"), "/api/clients");
    }
}

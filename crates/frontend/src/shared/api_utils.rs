//! API utilities for console-API communication
//!
//! Builds API URLs from the page location and the configured port/base path.

use contracts::shared::config::ApiConfig;

/// Get the base URL for API requests
///
/// # Returns
/// - API base URL like "http://localhost:11015/v3"
/// - Only the base path if window is not available
pub fn api_base(api: &ApiConfig) -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return api.base_path.clone(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    join_base(&protocol, &hostname, api)
}

fn join_base(protocol: &str, hostname: &str, api: &ApiConfig) -> String {
    format!(
        "{}//{}:{}{}",
        protocol,
        hostname,
        api.port,
        api.base_path.trim_end_matches('/')
    )
}

/// Build a full API URL from a path
///
/// # Example
/// ```rust,ignore
/// let url = api_url(&config.api, "/namespaces/default/datasets/history/type");
/// ```
pub fn api_url(api: &ApiConfig, path: &str) -> String {
    format!("{}{}", api_base(api), path)
}

/// Percent-encode a single path segment (namespace, dataset id, ...).
pub fn segment(value: &str) -> String {
    urlencoding::encode(value).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_join_base() {
        let api = ApiConfig {
            port: 11015,
            base_path: "/v3/".to_string(),
        };
        assert_eq!(
            join_base("https:", "console.local", &api),
            "https://console.local:11015/v3"
        );
    }

    #[test]
    fn test_segment() {
        assert_eq!(segment("purchase history"), "purchase%20history");
        assert_eq!(segment("a/b"), "a%2Fb");
    }
}

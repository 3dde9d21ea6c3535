//! Backend base-URL selection.

/// Local Flask development server.
pub const DEV_API_BASE_URL: &str = "http://localhost:5001";

/// Deployed production backend.
pub const PROD_API_BASE_URL: &str = "https://shorts-analytics-backend.up.railway.app";

/// Pick the backend for a page hostname: local development hosts talk to
/// the local Flask port, everything else to the deployed backend.
pub fn base_url_for_hostname(hostname: &str) -> &'static str {
    if hostname == "localhost" || hostname == "127.0.0.1" {
        DEV_API_BASE_URL
    } else {
        PROD_API_BASE_URL
    }
}

/// Base URL for the page currently loaded in the browser.
#[cfg(feature = "browser")]
pub fn api_base_url() -> String {
    let hostname = web_sys::window()
        .and_then(|w| w.location().hostname().ok())
        .unwrap_or_default();
    base_url_for_hostname(&hostname).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_local_hosts_use_dev_backend() {
        assert_eq!(base_url_for_hostname("localhost"), DEV_API_BASE_URL);
        assert_eq!(base_url_for_hostname("127.0.0.1"), DEV_API_BASE_URL);
    }

    #[test]
    fn test_other_hosts_use_prod_backend() {
        assert_eq!(base_url_for_hostname("shorts.example.com"), PROD_API_BASE_URL);
        assert_eq!(base_url_for_hostname(""), PROD_API_BASE_URL);
    }
}

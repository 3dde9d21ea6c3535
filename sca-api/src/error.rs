//! Error taxonomy for backend communication.
//!
//! Every failure mode collapses into a displayable message at the
//! dashboard boundary; the variants exist so callers can distinguish a
//! server-reported error (shown verbatim) from transport problems.

use std::fmt;

/// Failure modes of a backend round-trip.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// The fetch itself rejected (connection refused, DNS, CORS).
    Network(String),
    /// Non-2xx HTTP status without a usable error payload.
    Http { status: u16 },
    /// A well-formed response carrying `{"error": "..."}`.
    Application(String),
    /// The response body was not valid JSON for the expected shape.
    Parse(String),
    /// The request hit the client-side deadline.
    Timeout,
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Network(msg) => write!(f, "Network error: {}", msg),
            ApiError::Http { status } => write!(f, "Server returned HTTP {}", status),
            // Server-provided text is shown verbatim.
            ApiError::Application(msg) => write!(f, "{}", msg),
            ApiError::Parse(msg) => write!(f, "Invalid JSON: {}", msg),
            ApiError::Timeout => write!(f, "Request timed out"),
        }
    }
}

impl std::error::Error for ApiError {}

#[cfg(test)]
mod tests {
    use super::ApiError;

    #[test]
    fn test_application_message_is_verbatim() {
        let err = ApiError::Application("No processed shorts data available".to_string());
        assert_eq!(err.to_string(), "No processed shorts data available");
    }

    #[test]
    fn test_http_status_description() {
        let err = ApiError::Http { status: 502 };
        assert_eq!(err.to_string(), "Server returned HTTP 502");
    }
}

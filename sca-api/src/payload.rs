//! Response-body decoding shared by every endpoint.

use crate::error::ApiError;
use serde::de::DeserializeOwned;

/// Decode a JSON response body, surfacing the backend's application-level
/// error convention: a syntactically valid payload carrying an `error`
/// string is an error regardless of HTTP status.
pub fn parse_payload<T: DeserializeOwned>(body: &str) -> Result<T, ApiError> {
    let value: serde_json::Value =
        serde_json::from_str(body).map_err(|e| ApiError::Parse(e.to_string()))?;
    if let Some(message) = value.get("error").and_then(|v| v.as_str()) {
        return Err(ApiError::Application(message.to_string()));
    }
    serde_json::from_value(value).map_err(|e| ApiError::Parse(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::parse_payload;
    use crate::error::ApiError;
    use crate::snapshot::DashboardSnapshot;

    #[test]
    fn test_error_payload_detected() {
        let result: Result<DashboardSnapshot, _> =
            parse_payload(r#"{"error": "No processed shorts data available"}"#);
        assert_eq!(
            result.unwrap_err(),
            ApiError::Application("No processed shorts data available".to_string())
        );
    }

    #[test]
    fn test_malformed_json_is_parse_error() {
        let result: Result<DashboardSnapshot, _> = parse_payload("<html>502 Bad Gateway</html>");
        assert!(matches!(result, Err(ApiError::Parse(_))));
    }

    #[test]
    fn test_ok_payload_passes_through() {
        let result: Result<DashboardSnapshot, _> = parse_payload("{}");
        assert!(result.is_ok());
    }
}

//! Runtime type definitions for request/response handling

use serde::{Deserialize, Serialize};

/// Response envelope returned by every endpoint
///
/// Exactly one of `data`/`error` is serialized, depending on `is_success`.
/// The health endpoint serializes neither.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiResponse {
    /// Whether the request succeeded
    pub is_success: bool,
    /// Operator identity, constant for the process
    pub official_email: String,
    /// Operation result on success
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<serde_json::Value>,
    /// Error message on failure
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ApiResponse {
    /// Create a successful response carrying `data`
    pub fn success(official_email: impl Into<String>, data: serde_json::Value) -> Self {
        Self {
            is_success: true,
            official_email: official_email.into(),
            data: Some(data),
            error: None,
        }
    }

    /// Create an error response
    pub fn error(official_email: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            is_success: false,
            official_email: official_email.into(),
            data: None,
            error: Some(message.into()),
        }
    }

    /// Create the bare success envelope used by the health check
    pub fn healthy(official_email: impl Into<String>) -> Self {
        Self {
            is_success: true,
            official_email: official_email.into(),
            data: None,
            error: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_api_response_success() {
        let response = ApiResponse::success("ops@example.com", json!([0, 1, 1]));
        assert!(response.is_success);
        assert!(response.error.is_none());

        let value = serde_json::to_value(&response).unwrap();
        assert_eq!(
            value,
            json!({
                "is_success": true,
                "official_email": "ops@example.com",
                "data": [0, 1, 1]
            })
        );
    }

    #[test]
    fn test_api_response_error() {
        let response = ApiResponse::error("ops@example.com", "Something went wrong");
        assert!(!response.is_success);

        let value = serde_json::to_value(&response).unwrap();
        assert_eq!(
            value,
            json!({
                "is_success": false,
                "official_email": "ops@example.com",
                "error": "Something went wrong"
            })
        );
    }

    #[test]
    fn test_api_response_healthy_has_no_payload() {
        let value = serde_json::to_value(ApiResponse::healthy("ops@example.com")).unwrap();
        assert_eq!(
            value,
            json!({ "is_success": true, "official_email": "ops@example.com" })
        );
    }
}

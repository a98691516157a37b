//! Wire types shared by the error filter and its callers.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// The single public error contract.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorResponse {
    pub success: bool,
    pub error: String,
    pub message: String,
    pub status_code: u16,
    /// ISO-8601 UTC timestamp taken when the response is built.
    pub timestamp: String,
    pub path: String,
    pub method: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<Value>,
    /// Only populated outside production-like environments.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stack: Option<String>,
}

/// What the filter knows about the request that failed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestContext {
    pub request_id: Option<String>,
    pub method: String,
    /// Path without query string.
    pub path: String,
    /// Path and query string as received.
    pub url: String,
    pub user_agent: Option<String>,
    /// `None` for anonymous requests.
    pub user_id: Option<String>,
}

/// Structured record logged once per failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FailureLogContext {
    pub request_id: Option<String>,
    pub method: String,
    pub url: String,
    pub user_id: String,
    pub status: u16,
    pub user_agent: Option<String>,
}

impl FailureLogContext {
    pub fn new(context: &RequestContext, status: u16) -> Self {
        Self {
            request_id: context.request_id.clone(),
            method: context.method.clone(),
            url: context.url.clone(),
            user_id: context
                .user_id
                .clone()
                .unwrap_or_else(|| "anonymous".to_string()),
            status,
            user_agent: context.user_agent.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_optional_fields_are_omitted() {
        let response = ErrorResponse {
            success: false,
            error: "Not Found".to_string(),
            message: "The requested resource was not found.".to_string(),
            status_code: 404,
            timestamp: "2026-01-01T00:00:00.000Z".to_string(),
            path: "/api/roles/1".to_string(),
            method: "GET".to_string(),
            request_id: None,
            details: None,
            stack: None,
        };
        let value = serde_json::to_value(&response).unwrap();
        assert_eq!(
            value,
            json!({
                "success": false,
                "error": "Not Found",
                "message": "The requested resource was not found.",
                "statusCode": 404,
                "timestamp": "2026-01-01T00:00:00.000Z",
                "path": "/api/roles/1",
                "method": "GET"
            })
        );
    }

    #[test]
    fn test_log_context_defaults_to_anonymous() {
        let context = RequestContext {
            request_id: Some("req-1".to_string()),
            method: "PATCH".to_string(),
            path: "/api/pos/settings".to_string(),
            url: "/api/pos/settings?dry=1".to_string(),
            user_agent: None,
            user_id: None,
        };
        let log = FailureLogContext::new(&context, 403);
        assert_eq!(log.user_id, "anonymous");
        assert_eq!(log.url, "/api/pos/settings?dry=1");
        assert_eq!(log.status, 403);
    }
}

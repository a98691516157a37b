//! Correlation identifiers.
//!
//! Every request leaves this middleware with an `x-request-id` header, and the
//! same value is echoed on the response. Client-supplied values are replaced
//! unless [`RequestIdConfig::trust_incoming`] is set.
//!
//! [`RequestIdConfig::trust_incoming`]: bookwell_config::RequestIdConfig

use axum::{
    extract::{Request, State},
    http::{HeaderMap, HeaderValue},
    middleware::Next,
    response::Response,
};
use uuid::Uuid;

use crate::state::AppState;

pub const REQUEST_ID_HEADER: &str = "x-request-id";

const MAX_TRUSTED_LEN: usize = 128;

pub async fn assign_request_id(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Response {
    let reused = if state.request_id_config.trust_incoming {
        trusted_request_id(req.headers())
    } else {
        None
    };
    let value = reused.unwrap_or_else(generate_request_id);

    req.headers_mut().insert(REQUEST_ID_HEADER, value.clone());

    let mut response = next.run(req).await;
    response.headers_mut().insert(REQUEST_ID_HEADER, value);
    response
}

fn generate_request_id() -> HeaderValue {
    // A hyphenated UUID is always a valid header value
    HeaderValue::from_str(&Uuid::new_v4().to_string())
        .unwrap_or_else(|_| HeaderValue::from_static("unknown"))
}

/// Client value, if non-empty, visible ASCII and short enough to log.
fn trusted_request_id(headers: &HeaderMap) -> Option<HeaderValue> {
    let value = headers.get(REQUEST_ID_HEADER)?;
    let bytes = value.as_bytes();
    let acceptable = !bytes.is_empty()
        && bytes.len() <= MAX_TRUSTED_LEN
        && bytes.iter().all(|b| b.is_ascii_graphic());
    acceptable.then(|| value.clone())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn headers(value: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(REQUEST_ID_HEADER, HeaderValue::from_str(value).unwrap());
        headers
    }

    #[test]
    fn test_generated_id_is_uuid_v4() {
        let value = generate_request_id();
        let id = Uuid::parse_str(value.to_str().unwrap()).unwrap();
        assert_eq!(id.get_version_num(), 4);
    }

    #[test]
    fn test_trusted_value_accepted() {
        let value = trusted_request_id(&headers("edge-7f3a.1")).unwrap();
        assert_eq!(value, "edge-7f3a.1");
    }

    #[test]
    fn test_untrusted_values_rejected() {
        assert!(trusted_request_id(&HeaderMap::new()).is_none());
        assert!(trusted_request_id(&headers("")).is_none());
        assert!(trusted_request_id(&headers("has space")).is_none());
        assert!(trusted_request_id(&headers(&"a".repeat(129))).is_none());
        assert!(trusted_request_id(&headers(&"a".repeat(128))).is_some());
    }
}

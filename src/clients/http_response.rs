//! HTTP response types for the Stormpath SDK.
//!
//! This module provides the [`HttpResponse`] type for accessing API response data.

use std::collections::HashMap;

/// An HTTP response from the Stormpath API.
///
/// Contains the response status code, headers and the decoded JSON body.
#[derive(Clone, Debug)]
pub struct HttpResponse {
    /// The HTTP status code.
    pub code: u16,
    /// Response headers (headers may have multiple values).
    pub headers: HashMap<String, Vec<String>>,
    /// The parsed response body (`{}` for empty bodies such as 204 responses).
    pub body: serde_json::Value,
    /// Seconds to wait before retrying (from `Retry-After` header).
    pub retry_request_after: Option<f64>,
}

impl HttpResponse {
    /// Creates a new `HttpResponse`, parsing the `Retry-After` header.
    #[must_use]
    pub fn new(code: u16, headers: HashMap<String, Vec<String>>, body: serde_json::Value) -> Self {
        let retry_request_after = headers
            .get("retry-after")
            .and_then(|values| values.first())
            .and_then(|value| value.parse::<f64>().ok());

        Self {
            code,
            headers,
            body,
            retry_request_after,
        }
    }

    /// Returns `true` if the response status code is in the 2xx range.
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        self.code >= 200 && self.code <= 299
    }

    /// Returns the request id header value, if present.
    ///
    /// The service reports it as `Stormpath-Request-Id`; a generic
    /// `X-Request-Id` is accepted as a fallback (proxies, test servers).
    #[must_use]
    pub fn request_id(&self) -> Option<&str> {
        ["stormpath-request-id", "x-request-id"]
            .iter()
            .find_map(|name| self.headers.get(*name).and_then(|values| values.first()))
            .map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_is_ok_returns_true_for_2xx() {
        for code in 200..=299 {
            let response = HttpResponse::new(code, HashMap::new(), json!({}));
            assert!(
                response.is_ok(),
                "Expected is_ok() to be true for code {code}"
            );
        }
    }

    #[test]
    fn test_is_ok_returns_false_for_4xx_and_5xx() {
        for code in [400, 401, 403, 404, 409, 429, 500, 503] {
            let response = HttpResponse::new(code, HashMap::new(), json!({}));
            assert!(!response.is_ok());
        }
    }

    #[test]
    fn test_retry_after_parsing() {
        let mut headers = HashMap::new();
        headers.insert("retry-after".to_string(), vec!["2.5".to_string()]);

        let response = HttpResponse::new(429, headers, json!({}));
        assert!((response.retry_request_after.unwrap() - 2.5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_request_id_prefers_service_header() {
        let mut headers = HashMap::new();
        headers.insert("x-request-id".to_string(), vec!["generic".to_string()]);
        headers.insert(
            "stormpath-request-id".to_string(),
            vec!["sp-123".to_string()],
        );

        let response = HttpResponse::new(200, headers, json!({}));
        assert_eq!(response.request_id(), Some("sp-123"));
    }

    #[test]
    fn test_request_id_falls_back_to_x_request_id() {
        let mut headers = HashMap::new();
        headers.insert("x-request-id".to_string(), vec!["abc-123".to_string()]);

        let response = HttpResponse::new(200, headers, json!({}));
        assert_eq!(response.request_id(), Some("abc-123"));
    }
}

//! Requests handed to [`HttpClient`](crate::clients::HttpClient).

use std::collections::BTreeMap;
use std::fmt;

use crate::clients::errors::InvalidHttpRequestError;

/// HTTP methods used by the Stormpath API. Updates are POSTs.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HttpMethod {
    /// Reads a resource or a collection page.
    Get,
    /// Creates or updates a resource.
    Post,
    /// Deletes a resource.
    Delete,
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Get => write!(f, "get"),
            Self::Post => write!(f, "post"),
            Self::Delete => write!(f, "delete"),
        }
    }
}

/// Body encoding. The service only speaks JSON.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DataType {
    /// JSON content type (`application/json`).
    Json,
}

impl DataType {
    /// Returns the MIME type string for this data type.
    #[must_use]
    pub const fn as_content_type(&self) -> &'static str {
        match self {
            Self::Json => "application/json",
        }
    }
}

/// A request against an absolute resource `href`.
///
/// [`RestClient`](crate::clients::RestClient) resolves relative paths
/// before building one.
///
/// ```rust
/// use std::collections::BTreeMap;
/// use stormpath::clients::{DataType, HttpMethod, HttpRequest};
/// use serde_json::json;
///
/// let query = BTreeMap::from([("createDirectory".to_string(), "true".to_string())]);
/// let request = HttpRequest::builder(HttpMethod::Post, "https://api.stormpath.com/v1/applications")
///     .body(json!({"name": "My App"}))
///     .body_type(DataType::Json)
///     .query(query)
///     .build()
///     .unwrap();
///
/// assert_eq!(request.tries, 1);
/// ```
#[derive(Clone, Debug)]
pub struct HttpRequest {
    pub http_method: HttpMethod,
    pub url: String,
    pub body: Option<serde_json::Value>,
    pub body_type: Option<DataType>,
    /// Query parameters in a stable order.
    pub query: Option<BTreeMap<String, String>>,
    /// Attempts allowed for 429/503 answers. Writes always use 1.
    pub tries: u32,
}

impl HttpRequest {
    #[must_use]
    pub fn builder(method: HttpMethod, url: impl Into<String>) -> HttpRequestBuilder {
        HttpRequestBuilder::new(method, url)
    }

    /// Checks that a body has a type and that POSTs carry a body.
    ///
    /// # Errors
    ///
    /// Returns the matching [`InvalidHttpRequestError`].
    pub fn verify(&self) -> Result<(), InvalidHttpRequestError> {
        if self.body.is_some() && self.body_type.is_none() {
            return Err(InvalidHttpRequestError::MissingBodyType);
        }

        if self.http_method == HttpMethod::Post && self.body.is_none() {
            return Err(InvalidHttpRequestError::MissingBody {
                method: self.http_method.to_string(),
            });
        }

        Ok(())
    }
}

/// Builder for [`HttpRequest`].
#[derive(Debug)]
pub struct HttpRequestBuilder {
    request: HttpRequest,
}

impl HttpRequestBuilder {
    fn new(method: HttpMethod, url: impl Into<String>) -> Self {
        Self {
            request: HttpRequest {
                http_method: method,
                url: url.into(),
                body: None,
                body_type: None,
                query: None,
                tries: 1,
            },
        }
    }

    /// Sets the body. A body also needs a [`body_type`](Self::body_type).
    #[must_use]
    pub fn body(mut self, body: impl Into<serde_json::Value>) -> Self {
        self.request.body = Some(body.into());
        self
    }

    #[must_use]
    pub const fn body_type(mut self, body_type: DataType) -> Self {
        self.request.body_type = Some(body_type);
        self
    }

    #[must_use]
    pub fn query(mut self, query: BTreeMap<String, String>) -> Self {
        self.request.query = Some(query);
        self
    }

    /// Sets the attempt count (default 1, no retries).
    #[must_use]
    pub const fn tries(mut self, tries: u32) -> Self {
        self.request.tries = tries;
        self
    }

    /// Validates and returns the request.
    ///
    /// # Errors
    ///
    /// Same as [`HttpRequest::verify`].
    pub fn build(self) -> Result<HttpRequest, InvalidHttpRequestError> {
        self.request.verify()?;
        Ok(self.request)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const URL: &str = "https://api.stormpath.com/v1/applications";

    #[test]
    fn test_post_without_body_is_rejected() {
        let result = HttpRequest::builder(HttpMethod::Post, URL).build();
        assert!(matches!(
            result,
            Err(InvalidHttpRequestError::MissingBody { method }) if method == "post"
        ));
    }

    #[test]
    fn test_body_without_body_type_is_rejected() {
        let result = HttpRequest::builder(HttpMethod::Post, URL)
            .body(json!({"name": "app"}))
            .build();
        assert!(matches!(
            result,
            Err(InvalidHttpRequestError::MissingBodyType)
        ));
    }

    #[test]
    fn test_delete_without_body_is_valid() {
        let request = HttpRequest::builder(HttpMethod::Delete, URL).build().unwrap();
        assert_eq!(request.http_method, HttpMethod::Delete);
        assert!(request.body.is_none());
        assert_eq!(request.tries, 1);
    }

    #[test]
    fn test_query_and_tries_are_kept() {
        let query = BTreeMap::from([
            ("name".to_string(), "app".to_string()),
            ("offset".to_string(), "0".to_string()),
        ]);
        let request = HttpRequest::builder(HttpMethod::Get, URL)
            .query(query)
            .tries(3)
            .build()
            .unwrap();

        let query = request.query.unwrap();
        assert_eq!(query.get("name").map(String::as_str), Some("app"));
        assert_eq!(query.get("offset").map(String::as_str), Some("0"));
        assert_eq!(request.tries, 3);
    }

    #[test]
    fn test_method_display_is_lowercase() {
        assert_eq!(HttpMethod::Get.to_string(), "get");
        assert_eq!(HttpMethod::Post.to_string(), "post");
        assert_eq!(HttpMethod::Delete.to_string(), "delete");
    }
}

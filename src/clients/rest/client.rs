//! REST client implementation for the Stormpath API.
//!
//! This module provides the [`RestClient`] type for making REST API requests
//! against resource `href`s with automatic href resolution.

use std::collections::BTreeMap;

use crate::clients::rest::RestError;
use crate::clients::{DataType, HttpClient, HttpMethod, HttpRequest, HttpResponse};
use crate::config::{BaseUrl, StormpathConfig};

/// REST API client for the Stormpath API.
///
/// Provides `get`, `post` and `delete` over resource `href`s. This is the
/// single transport capability the resource layer consumes:
/// `request(method, url, query, body) -> (status, json)`.
///
/// # Thread Safety
///
/// `RestClient` is `Send + Sync`, making it safe to share across async tasks.
#[derive(Debug)]
pub struct RestClient {
    /// The internal HTTP client for making requests.
    http_client: HttpClient,
    /// Base URL that relative paths are resolved against.
    base_url: BaseUrl,
    /// Attempts granted to GET requests.
    read_tries: u32,
}

// Verify RestClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<RestClient>();
};

impl RestClient {
    /// Creates a new REST client from the SDK configuration.
    ///
    /// # Errors
    ///
    /// Returns [`RestError::Http`] if the underlying HTTP client cannot be built.
    pub fn new(config: &StormpathConfig) -> Result<Self, RestError> {
        let http_client = HttpClient::new(config)?;

        Ok(Self {
            http_client,
            base_url: config.base_url().clone(),
            read_tries: config.read_tries(),
        })
    }

    /// Returns the base URL relative paths are resolved against.
    #[must_use]
    pub const fn base_url(&self) -> &BaseUrl {
        &self.base_url
    }

    /// Resolves a relative path or absolute `href` into a request URL.
    ///
    /// # Errors
    ///
    /// Returns [`RestError::InvalidHref`] if `href` is empty or absolute with
    /// a scheme other than http(s).
    pub fn resolve_href(&self, href: &str) -> Result<String, RestError> {
        resolve_href(&self.base_url, href)
    }

    /// Sends a GET request to the specified `href`.
    ///
    /// # Errors
    ///
    /// Returns [`RestError::InvalidHref`] if the href is invalid.
    /// Returns [`RestError::Http`] for HTTP-level errors.
    pub async fn get(
        &self,
        href: &str,
        query: Option<BTreeMap<String, String>>,
    ) -> Result<HttpResponse, RestError> {
        self.make_request(HttpMethod::Get, href, None, query, self.read_tries)
            .await
    }

    /// Sends a POST request to the specified `href`.
    ///
    /// Used both for creation (POST to a collection) and updates (POST to
    /// the resource itself). Never retried.
    ///
    /// # Errors
    ///
    /// Returns [`RestError::InvalidHref`] if the href is invalid.
    /// Returns [`RestError::Http`] for HTTP-level errors.
    pub async fn post(
        &self,
        href: &str,
        body: serde_json::Value,
        query: Option<BTreeMap<String, String>>,
    ) -> Result<HttpResponse, RestError> {
        self.make_request(HttpMethod::Post, href, Some(body), query, 1)
            .await
    }

    /// Sends a DELETE request to the specified `href`. Never retried.
    ///
    /// # Errors
    ///
    /// Returns [`RestError::InvalidHref`] if the href is invalid.
    /// Returns [`RestError::Http`] for HTTP-level errors.
    pub async fn delete(&self, href: &str) -> Result<HttpResponse, RestError> {
        self.make_request(HttpMethod::Delete, href, None, None, 1)
            .await
    }

    async fn make_request(
        &self,
        method: HttpMethod,
        href: &str,
        body: Option<serde_json::Value>,
        query: Option<BTreeMap<String, String>>,
        tries: u32,
    ) -> Result<HttpResponse, RestError> {
        let url = self.resolve_href(href)?;

        let mut builder = HttpRequest::builder(method, &url).tries(tries);

        if let Some(body_value) = body {
            builder = builder.body(body_value).body_type(DataType::Json);
        }

        if let Some(query_params) = query.filter(|q| !q.is_empty()) {
            builder = builder.query(query_params);
        }

        let request = builder.build().map_err(|e| RestError::Http(e.into()))?;

        tracing::debug!("{} {}", method, url);

        self.http_client.request(request).await.map_err(Into::into)
    }
}

/// Resolves `href` against `base_url`.
///
/// # Examples
///
/// ```rust,ignore
/// let base = BaseUrl::new("https://api.stormpath.com/v1")?;
/// assert_eq!(resolve_href(&base, "applications")?, "https://api.stormpath.com/v1/applications");
/// assert_eq!(resolve_href(&base, "https://api.stormpath.com/v1/directories/x")?, "https://api.stormpath.com/v1/directories/x");
/// ```
fn resolve_href(base_url: &BaseUrl, href: &str) -> Result<String, RestError> {
    let href = href.trim();

    if let Some(scheme_end) = href.find("://") {
        let scheme = &href[..scheme_end];
        if scheme != "http" && scheme != "https" {
            return Err(RestError::InvalidHref {
                href: href.to_string(),
            });
        }
        return Ok(href.to_string());
    }

    let path = href.trim_start_matches('/');
    if path.is_empty() {
        return Err(RestError::InvalidHref {
            href: href.to_string(),
        });
    }

    Ok(base_url.join(path))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ApiKey;

    fn base() -> BaseUrl {
        BaseUrl::new("https://api.stormpath.com/v1").unwrap()
    }

    #[test]
    fn test_resolve_href_joins_relative_paths() {
        assert_eq!(
            resolve_href(&base(), "applications").unwrap(),
            "https://api.stormpath.com/v1/applications"
        );
        assert_eq!(
            resolve_href(&base(), "/tenants/current").unwrap(),
            "https://api.stormpath.com/v1/tenants/current"
        );
    }

    #[test]
    fn test_resolve_href_keeps_absolute_hrefs() {
        let href = "https://api.stormpath.com/v1/directories/2SKhstu8Plaekcai8lghrp";
        assert_eq!(resolve_href(&base(), href).unwrap(), href);

        let local = "http://127.0.0.1:4000/v1/applications/abc";
        assert_eq!(resolve_href(&base(), local).unwrap(), local);
    }

    #[test]
    fn test_resolve_href_rejects_empty_input() {
        assert!(matches!(
            resolve_href(&base(), ""),
            Err(RestError::InvalidHref { .. })
        ));
        assert!(matches!(
            resolve_href(&base(), "/"),
            Err(RestError::InvalidHref { .. })
        ));
    }

    #[test]
    fn test_resolve_href_rejects_foreign_schemes() {
        assert!(matches!(
            resolve_href(&base(), "ftp://api.stormpath.com/v1/applications"),
            Err(RestError::InvalidHref { href }) if href.starts_with("ftp")
        ));
    }

    #[test]
    fn test_rest_client_uses_configured_base_url() {
        let config = StormpathConfig::builder()
            .api_key(ApiKey::new("id", "secret").unwrap())
            .base_url(BaseUrl::new("http://localhost:9999/v1").unwrap())
            .build()
            .unwrap();

        let client = RestClient::new(&config).unwrap();
        assert_eq!(client.base_url().as_ref(), "http://localhost:9999/v1");
        assert_eq!(
            client.resolve_href("accountStoreMappings").unwrap(),
            "http://localhost:9999/v1/accountStoreMappings"
        );
    }

    #[test]
    fn test_rest_client_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<RestClient>();
    }
}

//! Validated newtype wrappers for configuration values.
//!
//! This module provides type-safe wrappers around string values that validate
//! their contents on construction. Invalid values are rejected with clear error messages.

use crate::error::ConfigError;
use std::fmt;

/// A validated Stormpath API key pair.
///
/// The key id and secret are both required to be non-empty. The secret is
/// masked in debug output to prevent accidental exposure in logs.
///
/// # Example
///
/// ```rust
/// use stormpath::ApiKey;
///
/// let key = ApiKey::new("key-id", "key-secret").unwrap();
/// assert_eq!(key.id(), "key-id");
/// assert_eq!(format!("{:?}", key), r#"ApiKey { id: "key-id", secret: ***** }"#);
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey {
    id: String,
    secret: String,
}

impl ApiKey {
    /// Creates a new validated API key pair.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyApiKeyId`] if the id is empty, or
    /// [`ConfigError::EmptyApiKeySecret`] if the secret is empty.
    pub fn new(id: impl Into<String>, secret: impl Into<String>) -> Result<Self, ConfigError> {
        let id = id.into().trim().to_string();
        let secret = secret.into();
        if id.is_empty() {
            return Err(ConfigError::EmptyApiKeyId);
        }
        if secret.is_empty() {
            return Err(ConfigError::EmptyApiKeySecret);
        }
        Ok(Self { id, secret })
    }

    /// Returns the API key id.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Returns the API key secret.
    #[must_use]
    pub fn secret(&self) -> &str {
        &self.secret
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ApiKey {{ id: {:?}, secret: ***** }}", self.id)
    }
}

/// A validated base URL for the Stormpath REST API.
///
/// Relative request paths are joined onto this URL; absolute `href`s returned
/// by the service are used as-is. A trailing `/` is stripped on construction.
///
/// # Example
///
/// ```rust
/// use stormpath::BaseUrl;
///
/// let url = BaseUrl::new("https://api.stormpath.com/v1/").unwrap();
/// assert_eq!(url.as_ref(), "https://api.stormpath.com/v1");
/// assert_eq!(url.scheme(), "https");
/// assert_eq!(url.host_name(), "api.stormpath.com");
/// assert_eq!(url.join("applications"), "https://api.stormpath.com/v1/applications");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BaseUrl {
    url: String,
    scheme_end: usize,
    host_start: usize,
    host_end: usize,
}

impl BaseUrl {
    /// The production Stormpath endpoint.
    pub const DEFAULT: &'static str = "https://api.stormpath.com/v1";

    /// Creates a new validated base URL.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidBaseUrl`] if the URL has no `http` or
    /// `https` scheme or no host.
    pub fn new(url: impl Into<String>) -> Result<Self, ConfigError> {
        let url = url.into();
        let url = url.trim().trim_end_matches('/').to_string();

        let scheme_end = url
            .find("://")
            .ok_or_else(|| ConfigError::InvalidBaseUrl { url: url.clone() })?;

        let scheme = &url[..scheme_end];
        if scheme != "http" && scheme != "https" {
            return Err(ConfigError::InvalidBaseUrl { url: url.clone() });
        }

        let host_start = scheme_end + 3;
        let remainder = &url[host_start..];
        let host_end = remainder
            .find([':', '/', '?', '#'])
            .map_or(url.len(), |i| host_start + i);

        if host_end == host_start {
            return Err(ConfigError::InvalidBaseUrl { url: url.clone() });
        }

        Ok(Self {
            url,
            scheme_end,
            host_start,
            host_end,
        })
    }

    /// Returns the URL scheme (`http` or `https`).
    #[must_use]
    pub fn scheme(&self) -> &str {
        &self.url[..self.scheme_end]
    }

    /// Returns the host name portion of the URL.
    #[must_use]
    pub fn host_name(&self) -> &str {
        &self.url[self.host_start..self.host_end]
    }

    /// Joins a relative path onto the base URL.
    #[must_use]
    pub fn join(&self, path: &str) -> String {
        format!("{}/{}", self.url, path.trim_start_matches('/'))
    }
}

impl Default for BaseUrl {
    fn default() -> Self {
        Self {
            url: Self::DEFAULT.to_string(),
            scheme_end: 5,
            host_start: 8,
            host_end: 25,
        }
    }
}

impl AsRef<str> for BaseUrl {
    fn as_ref(&self) -> &str {
        &self.url
    }
}

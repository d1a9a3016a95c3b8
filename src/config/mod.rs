//! Configuration types for the Stormpath SDK.
//!
//! This module provides the core configuration types used to initialize
//! and configure the SDK for API communication with Stormpath.
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`StormpathConfig`]: The main configuration struct holding all SDK settings
//! - [`StormpathConfigBuilder`]: A builder for constructing [`StormpathConfig`] instances
//! - [`ApiKey`]: A validated API key pair with masked debug output
//! - [`BaseUrl`]: A validated API base URL
//!
//! # Example
//!
//! ```rust
//! use stormpath::{StormpathConfig, ApiKey};
//! use std::time::Duration;
//!
//! let config = StormpathConfig::builder()
//!     .api_key(ApiKey::new("key-id", "key-secret").unwrap())
//!     .cache_ttl(Duration::from_secs(300))
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.page_size(), 25);
//! ```

mod newtypes;

pub use newtypes::{ApiKey, BaseUrl};

use std::time::Duration;

use crate::error::ConfigError;

/// Default number of items requested per collection page.
pub const DEFAULT_PAGE_SIZE: u32 = 25;

/// Largest page size the service accepts.
pub const MAX_PAGE_SIZE: u32 = 100;

/// Default transport timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Configuration for the Stormpath SDK.
///
/// This struct holds all configuration needed for SDK operations: the API
/// credentials, the endpoint, paging defaults and cache behaviour.
///
/// # Thread Safety
///
/// `StormpathConfig` is `Clone`, `Send`, and `Sync`, making it safe to share
/// across threads and async tasks.
///
/// # Example
///
/// ```rust
/// use stormpath::{StormpathConfig, ApiKey, BaseUrl};
///
/// let config = StormpathConfig::builder()
///     .api_key(ApiKey::new("id", "secret").unwrap())
///     .base_url(BaseUrl::new("http://localhost:8080/v1").unwrap())
///     .page_size(50)
///     .build()
///     .unwrap();
///
/// assert_eq!(config.base_url().as_ref(), "http://localhost:8080/v1");
/// ```
#[derive(Clone, Debug)]
pub struct StormpathConfig {
    api_key: ApiKey,
    base_url: BaseUrl,
    page_size: u32,
    cache_ttl: Option<Duration>,
    timeout: Duration,
    read_tries: u32,
    user_agent_prefix: Option<String>,
}

impl StormpathConfig {
    /// Creates a new builder for constructing a `StormpathConfig`.
    #[must_use]
    pub fn builder() -> StormpathConfigBuilder {
        StormpathConfigBuilder::new()
    }

    /// Returns the API key pair.
    #[must_use]
    pub const fn api_key(&self) -> &ApiKey {
        &self.api_key
    }

    /// Returns the API base URL.
    #[must_use]
    pub const fn base_url(&self) -> &BaseUrl {
        &self.base_url
    }

    /// Returns the number of items requested per collection page.
    #[must_use]
    pub const fn page_size(&self) -> u32 {
        self.page_size
    }

    /// Returns the cache entry lifetime, if entries expire at all.
    #[must_use]
    pub const fn cache_ttl(&self) -> Option<Duration> {
        self.cache_ttl
    }

    /// Returns the transport timeout.
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Returns how many attempts a GET request gets on 429/503 responses.
    ///
    /// Writes are always attempted exactly once.
    #[must_use]
    pub const fn read_tries(&self) -> u32 {
        self.read_tries
    }

    /// Returns the user agent prefix, if configured.
    #[must_use]
    pub fn user_agent_prefix(&self) -> Option<&str> {
        self.user_agent_prefix.as_deref()
    }
}

// Verify StormpathConfig is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<StormpathConfig>();
};

/// Builder for constructing [`StormpathConfig`] instances.
///
/// The only required field is `api_key`.
///
/// # Defaults
///
/// - `base_url`: `https://api.stormpath.com/v1`
/// - `page_size`: 25
/// - `cache_ttl`: `None` (entries live until invalidated or cleared)
/// - `timeout`: 30 seconds
/// - `read_tries`: 1
/// - `user_agent_prefix`: `None`
#[derive(Debug, Default)]
pub struct StormpathConfigBuilder {
    api_key: Option<ApiKey>,
    base_url: Option<BaseUrl>,
    page_size: Option<u32>,
    cache_ttl: Option<Duration>,
    timeout: Option<Duration>,
    read_tries: Option<u32>,
    user_agent_prefix: Option<String>,
}

impl StormpathConfigBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the API key pair (required).
    #[must_use]
    pub fn api_key(mut self, key: ApiKey) -> Self {
        self.api_key = Some(key);
        self
    }

    /// Sets the API base URL.
    #[must_use]
    pub fn base_url(mut self, url: BaseUrl) -> Self {
        self.base_url = Some(url);
        self
    }

    /// Sets the collection page size.
    #[must_use]
    pub const fn page_size(mut self, size: u32) -> Self {
        self.page_size = Some(size);
        self
    }

    /// Sets a lifetime after which cached entries are treated as misses.
    #[must_use]
    pub const fn cache_ttl(mut self, ttl: Duration) -> Self {
        self.cache_ttl = Some(ttl);
        self
    }

    /// Sets the transport timeout.
    #[must_use]
    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Sets how many attempts GET requests get on 429/503 responses.
    #[must_use]
    pub const fn read_tries(mut self, tries: u32) -> Self {
        self.read_tries = Some(tries);
        self
    }

    /// Sets the user agent prefix for HTTP requests.
    #[must_use]
    pub fn user_agent_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.user_agent_prefix = Some(prefix.into());
        self
    }

    /// Builds the [`StormpathConfig`], validating that required fields are set.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRequiredField`] if `api_key` is not set,
    /// or [`ConfigError::InvalidPageSize`] if the page size is 0 or above 100.
    pub fn build(self) -> Result<StormpathConfig, ConfigError> {
        let api_key = self
            .api_key
            .ok_or(ConfigError::MissingRequiredField { field: "api_key" })?;

        let page_size = self.page_size.unwrap_or(DEFAULT_PAGE_SIZE);
        if page_size == 0 || page_size > MAX_PAGE_SIZE {
            return Err(ConfigError::InvalidPageSize { size: page_size });
        }

        Ok(StormpathConfig {
            api_key,
            base_url: self.base_url.unwrap_or_default(),
            page_size,
            cache_ttl: self.cache_ttl,
            timeout: self.timeout.unwrap_or(DEFAULT_TIMEOUT),
            read_tries: self.read_tries.unwrap_or(1).max(1),
            user_agent_prefix: self.user_agent_prefix,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key() -> ApiKey {
        ApiKey::new("id", "secret").unwrap()
    }

    #[test]
    fn test_builder_requires_api_key() {
        let result = StormpathConfigBuilder::new().build();

        assert!(matches!(
            result,
            Err(ConfigError::MissingRequiredField { field: "api_key" })
        ));
    }

    #[test]
    fn test_builder_provides_sensible_defaults() {
        let config = StormpathConfig::builder().api_key(key()).build().unwrap();

        assert_eq!(config.base_url().as_ref(), BaseUrl::DEFAULT);
        assert_eq!(config.page_size(), DEFAULT_PAGE_SIZE);
        assert!(config.cache_ttl().is_none());
        assert_eq!(config.timeout(), DEFAULT_TIMEOUT);
        assert_eq!(config.read_tries(), 1);
        assert!(config.user_agent_prefix().is_none());
    }

    #[test]
    fn test_builder_rejects_out_of_range_page_size() {
        let zero = StormpathConfig::builder().api_key(key()).page_size(0).build();
        assert!(matches!(zero, Err(ConfigError::InvalidPageSize { size: 0 })));

        let huge = StormpathConfig::builder()
            .api_key(key())
            .page_size(101)
            .build();
        assert!(matches!(huge, Err(ConfigError::InvalidPageSize { size: 101 })));
    }

    #[test]
    fn test_read_tries_never_drops_below_one() {
        let config = StormpathConfig::builder()
            .api_key(key())
            .read_tries(0)
            .build()
            .unwrap();
        assert_eq!(config.read_tries(), 1);
    }

    #[test]
    fn test_builder_with_all_optional_fields() {
        let config = StormpathConfig::builder()
            .api_key(key())
            .base_url(BaseUrl::new("http://127.0.0.1:9000/v1").unwrap())
            .page_size(100)
            .cache_ttl(Duration::from_secs(60))
            .timeout(Duration::from_secs(5))
            .read_tries(3)
            .user_agent_prefix("MyApp/1.0")
            .build()
            .unwrap();

        assert_eq!(config.base_url().as_ref(), "http://127.0.0.1:9000/v1");
        assert_eq!(config.page_size(), 100);
        assert_eq!(config.cache_ttl(), Some(Duration::from_secs(60)));
        assert_eq!(config.timeout(), Duration::from_secs(5));
        assert_eq!(config.read_tries(), 3);
        assert_eq!(config.user_agent_prefix(), Some("MyApp/1.0"));
    }

    #[test]
    fn test_config_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<StormpathConfig>();
    }
}

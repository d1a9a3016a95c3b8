//! The Stormpath client.
//!
//! [`Client`] bundles the REST transport with the resource cache and is the
//! value every resource operation takes. Handles returned by the client are
//! lazy: nothing is fetched until a field is read.

use crate::clients::{RestClient, RestError};
use crate::config::StormpathConfig;
use crate::rest::resources::{AccountStoreMapping, Application, Directory, Tenant};
use crate::rest::{Cache, Collection, Resource, ResourceError, ResourceType};

/// Path of the tenant owning the API key.
const CURRENT_TENANT_PATH: &str = "tenants/current";

/// Path of the root account store mapping endpoint.
const ACCOUNT_STORE_MAPPINGS_PATH: &str = "accountStoreMappings";

/// A client for the Stormpath API.
///
/// # Thread Safety
///
/// `Client` is `Send + Sync`; share it behind an `Arc` across tasks.
///
/// # Example
///
/// ```rust,ignore
/// use stormpath::{ApiKey, Client, StormpathConfig};
///
/// let config = StormpathConfig::builder()
///     .api_key(ApiKey::new("id", "secret")?)
///     .build()?;
/// let client = Client::new(&config)?;
///
/// let apps = client.applications().await?;
/// println!("{} applications", apps.len(&client).await?);
/// ```
#[derive(Debug)]
pub struct Client {
    rest: RestClient,
    cache: Cache,
    config: StormpathConfig,
}

// Verify Client is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Client>();
};

impl Client {
    /// Creates a client from `config`.
    ///
    /// # Errors
    ///
    /// Returns [`RestError`] if the HTTP client cannot be built.
    pub fn new(config: &StormpathConfig) -> Result<Self, RestError> {
        Ok(Self {
            rest: RestClient::new(config)?,
            cache: Cache::new(config.cache_ttl()),
            config: config.clone(),
        })
    }

    /// Returns the configuration.
    #[must_use]
    pub const fn config(&self) -> &StormpathConfig {
        &self.config
    }

    /// Returns the REST transport.
    #[must_use]
    pub const fn rest(&self) -> &RestClient {
        &self.rest
    }

    /// Returns the resource cache.
    #[must_use]
    pub const fn cache(&self) -> &Cache {
        &self.cache
    }

    /// Returns the page size used for new collections.
    #[must_use]
    pub const fn page_size(&self) -> u32 {
        self.config.page_size()
    }

    /// Drops every cached resource.
    pub async fn clear_cache(&self) {
        tracing::debug!("Clearing resource cache");
        self.cache.clear().await;
    }

    /// Returns a lazy handle to the tenant owning the API key.
    #[must_use]
    pub fn tenant(&self) -> Tenant {
        self.get(&self.rest.base_url().join(CURRENT_TENANT_PATH))
    }

    /// Returns a lazy handle of type `T` for `href`. No request is made.
    #[must_use]
    pub fn get<T: ResourceType>(&self, href: &str) -> T {
        T::from_resource(Resource::with_href(T::KIND, href))
    }

    /// Returns the tenant's applications.
    ///
    /// # Errors
    ///
    /// Any error raised while reading the tenant.
    pub async fn applications(&self) -> Result<Collection<Application>, ResourceError> {
        self.tenant().applications(self).await
    }

    /// Returns the tenant's directories.
    ///
    /// # Errors
    ///
    /// Any error raised while reading the tenant.
    pub async fn directories(&self) -> Result<Collection<Directory>, ResourceError> {
        self.tenant().directories(self).await
    }

    /// Returns the root account store mapping collection.
    ///
    /// It only accepts creation; reading it fails locally.
    #[must_use]
    pub fn account_store_mappings(&self) -> Collection<AccountStoreMapping> {
        Collection::new(
            self.rest.base_url().join(ACCOUNT_STORE_MAPPINGS_PATH),
            false,
            self.page_size(),
        )
    }
}

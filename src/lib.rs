//! # Stormpath SDK
//!
//! A Rust client for the Stormpath identity API that maps its JSON
//! resources onto Rust objects.
//!
//! ## Overview
//!
//! This SDK provides:
//! - Type-safe configuration via [`StormpathConfig`] and [`StormpathConfigBuilder`]
//! - Lazy resources: a handle is just an `href` until a field is read
//! - Dirty tracking with [`save`](rest::ResourceType::save) and
//!   [`delete`](rest::ResourceType::delete)
//! - Filterable, paginated [`Collection`](rest::Collection)s that create
//!   their members
//! - Typed resources (applications, directories, accounts, groups,
//!   policies, email templates, LDAP agents) in [`rest::resources`]
//! - An href-keyed resource cache held by the [`Client`]
//! - Service errors mapped to [`ResourceError`] by status
//!
//! ## Quick Start
//!
//! ```rust
//! use stormpath::{ApiKey, StormpathConfig};
//!
//! let config = StormpathConfig::builder()
//!     .api_key(ApiKey::new("key-id", "key-secret").unwrap())
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.base_url().as_ref(), "https://api.stormpath.com/v1");
//! ```
//!
//! ## Working with Resources
//!
//! ```rust,ignore
//! use stormpath::{Client, ResourceType};
//! use stormpath::rest::resources::ApplicationCreateParams;
//! use serde_json::json;
//!
//! let client = Client::new(&config)?;
//!
//! let apps = client.applications().await?;
//! let mut app = apps
//!     .create_with(
//!         &client,
//!         &json!({"name": "my-app"}),
//!         &ApplicationCreateParams::create_directory("my-app-dir"),
//!     )
//!     .await?;
//!
//! app.set_description("my application")?;
//! app.save(&client).await?;
//!
//! let mut accounts = app.accounts(&client).await?.iter()?;
//! while let Some(mut account) = accounts.next(&client).await? {
//!     println!("{:?}", account.email(&client).await?);
//! }
//!
//! app.delete(&client).await?;
//! ```
//!
//! ## Errors
//!
//! Every operation returns [`ResourceError`]. Responses with a 4xx or 5xx
//! status become typed variants carrying the service's
//! [`ApiError`](rest::ApiError) (`status`, `code`, `message`,
//! `developerMessage`, `moreInfo`). Network failures are
//! [`ResourceError::Transport`]. Misuse detected locally, such as saving a
//! deleted resource or iterating a collection the service cannot list, is
//! [`ResourceError::Precondition`] and never reaches the network.
//!
//! ## Design Principles
//!
//! - **No global state**: configuration and cache live in the [`Client`]
//! - **Fail-fast validation**: all newtypes validate on construction
//! - **Thread-safe**: all types are `Send + Sync`
//! - **Async-first**: designed for use with the Tokio runtime

mod client;
pub mod clients;
pub mod config;
pub mod error;
pub mod rest;

pub use client::Client;
pub use config::{ApiKey, BaseUrl, StormpathConfig, StormpathConfigBuilder};
pub use error::ConfigError;

// Re-export HTTP client types
pub use clients::{
    DataType, HttpClient, HttpError, HttpMethod, HttpRequest, HttpRequestBuilder, HttpResponse,
    HttpResponseError, InvalidHttpRequestError, MaxHttpRetriesExceededError, RestClient,
    RestError,
};

pub use rest::{ResourceError, ResourceType};

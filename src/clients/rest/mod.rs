//! REST API client for the Stormpath API.
//!
//! This module provides a higher-level REST API client built on top of the
//! [`HttpClient`](crate::clients::HttpClient) that speaks in resource `href`s.
//!
//! # Overview
//!
//! - [`RestClient`]: The REST API client with `get()`, `post()` and `delete()` methods
//! - [`RestError`]: Error type for REST API operations
//!
//! # Href Resolution
//!
//! Resources are addressed by the absolute `href` the service hands out.
//! Relative paths (`applications`, `/tenants/current`) are joined onto the
//! configured base URL:
//!
//! - `https://api.stormpath.com/v1/applications/abc` is used unchanged
//! - `/tenants/current` becomes `{base_url}/tenants/current`
//! - empty input and non-HTTP schemes are rejected with [`RestError::InvalidHref`]
//!
//! # Retry Behavior
//!
//! GET requests are attempted `read_tries` times on 429/503 responses.
//! POST and DELETE are attempted exactly once: a retried create could create
//! the same resource twice.

mod client;
mod errors;

pub use client::RestClient;
pub use errors::RestError;

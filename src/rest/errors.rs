//! Resource-level error types.
//!
//! Every failure the resource layer reports is a [`ResourceError`]. Server
//! rejections carry the service's error document verbatim as an [`ApiError`];
//! requests that never got an answer are [`ResourceError::Transport`]; local
//! misuse that is refused without a network call is
//! [`ResourceError::Precondition`].
//!
//! # Status Mapping
//!
//! - **404**: [`ResourceError::NotFound`]
//! - **400**: [`ResourceError::Validation`]
//! - **409**: [`ResourceError::Conflict`]
//! - **401**: [`ResourceError::Unauthorized`]
//! - **403**: [`ResourceError::Forbidden`]
//! - **Other non-2xx**: [`ResourceError::Api`]
//!
//! # Example
//!
//! ```rust,ignore
//! use stormpath::rest::ResourceError;
//!
//! match applications.create(&client, &payload, None).await {
//!     Ok(app) => println!("created {}", app.href().unwrap_or_default()),
//!     Err(ResourceError::Conflict(err)) => println!("name taken: {}", err.message),
//!     Err(e) => return Err(e.into()),
//! }
//! ```

use std::fmt;

use serde_json::Value;
use thiserror::Error;

use crate::clients::{HttpError, RestError};

/// An error document returned by the service for a non-2xx response.
///
/// The service answers failures with
/// `{"status", "code", "message", "developerMessage", "moreInfo"}`. Fields
/// missing from the body fall back to the HTTP status and empty strings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiError {
    /// HTTP status code.
    pub status: u16,
    /// Service-specific error code (e.g. `2001` for a duplicate name).
    pub code: u32,
    /// End-user facing message.
    pub message: String,
    /// Message aimed at the integrating developer.
    pub developer_message: String,
    /// Link to documentation about this error.
    pub more_info: String,
    /// Request ID from the `Stormpath-Request-Id` header, if any.
    pub request_id: Option<String>,
}

impl ApiError {
    /// Builds an `ApiError` from an HTTP status and response body.
    ///
    /// # Example
    ///
    /// ```rust
    /// use stormpath::rest::ApiError;
    /// use serde_json::json;
    ///
    /// let err = ApiError::from_body(409, &json!({
    ///     "status": 409,
    ///     "code": 2001,
    ///     "message": "Application name is already in use.",
    ///     "developerMessage": "Application name is already in use.",
    ///     "moreInfo": "http://docs.stormpath.com/errors/2001"
    /// }), None);
    ///
    /// assert_eq!(err.code, 2001);
    /// assert_eq!(err.more_info, "http://docs.stormpath.com/errors/2001");
    /// ```
    #[must_use]
    pub fn from_body(status: u16, body: &Value, request_id: Option<String>) -> Self {
        let text = |key: &str| {
            body.get(key)
                .and_then(Value::as_str)
                .unwrap_or_default()
                .to_string()
        };

        let code = body
            .get("code")
            .and_then(Value::as_u64)
            .and_then(|c| u32::try_from(c).ok())
            .unwrap_or_else(|| u32::from(status));

        let mut message = text("message");
        if message.is_empty() {
            message = body
                .get("raw_body")
                .and_then(Value::as_str)
                .map_or_else(|| format!("HTTP {status}"), ToString::to_string);
        }

        Self {
            status,
            code,
            message,
            developer_message: text("developerMessage"),
            more_info: text("moreInfo"),
            request_id,
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "HTTP {}, Stormpath {}", self.status, self.code)?;
        if !self.message.is_empty() {
            write!(f, ": {}", self.message)?;
        }
        if !self.developer_message.is_empty() && self.developer_message != self.message {
            write!(f, " ({})", self.developer_message)?;
        }
        Ok(())
    }
}

impl std::error::Error for ApiError {}

/// Error type for resource operations.
#[derive(Debug, Error)]
pub enum ResourceError {
    /// The resource does not exist (HTTP 404).
    #[error("Resource not found: {0}")]
    NotFound(ApiError),

    /// The service rejected the request body (HTTP 400).
    #[error("Validation failed: {0}")]
    Validation(ApiError),

    /// The request conflicts with existing state (HTTP 409), such as a
    /// duplicate unique name.
    #[error("Conflict: {0}")]
    Conflict(ApiError),

    /// The credentials were rejected (HTTP 401).
    #[error("Unauthorized: {0}")]
    Unauthorized(ApiError),

    /// The credentials lack permission (HTTP 403).
    #[error("Forbidden: {0}")]
    Forbidden(ApiError),

    /// Any other non-2xx response.
    #[error("API error: {0}")]
    Api(ApiError),

    /// The HTTP exchange could not be completed.
    #[error("Transport error: {0}")]
    Transport(#[source] RestError),

    /// The operation was refused locally without contacting the service.
    #[error("Precondition failed: {reason}")]
    Precondition {
        /// What the caller did wrong.
        reason: String,
    },

    /// A field could not be converted into the requested type.
    #[error("Cannot decode field '{field}': {source}")]
    Deserialize {
        /// The wire name of the field.
        field: String,
        /// The underlying serde error.
        #[source]
        source: serde_json::Error,
    },

    /// A request payload or parameter struct could not be encoded.
    #[error("Cannot encode request: {0}")]
    Serialize(#[source] serde_json::Error),
}

impl ResourceError {
    /// Maps a non-2xx status and body into the matching variant.
    ///
    /// # Example
    ///
    /// ```rust
    /// use stormpath::rest::ResourceError;
    /// use serde_json::json;
    ///
    /// let error = ResourceError::from_http_response(404, &json!({"status": 404}), None);
    /// assert!(error.is_not_found());
    /// ```
    #[must_use]
    pub fn from_http_response(code: u16, body: &Value, request_id: Option<&str>) -> Self {
        let api = ApiError::from_body(code, body, request_id.map(String::from));
        match code {
            404 => Self::NotFound(api),
            400 => Self::Validation(api),
            409 => Self::Conflict(api),
            401 => Self::Unauthorized(api),
            403 => Self::Forbidden(api),
            _ => Self::Api(api),
        }
    }

    /// Creates a [`ResourceError::Precondition`].
    pub fn precondition(reason: impl Into<String>) -> Self {
        Self::Precondition {
            reason: reason.into(),
        }
    }

    /// Returns the service error document, if the service answered.
    #[must_use]
    pub const fn api_error(&self) -> Option<&ApiError> {
        match self {
            Self::NotFound(e)
            | Self::Validation(e)
            | Self::Conflict(e)
            | Self::Unauthorized(e)
            | Self::Forbidden(e)
            | Self::Api(e) => Some(e),
            Self::Transport(_)
            | Self::Precondition { .. }
            | Self::Deserialize { .. }
            | Self::Serialize(_) => None,
        }
    }

    /// Returns the HTTP status of a service rejection.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        self.api_error().map(|e| e.status)
    }

    /// Returns `true` for HTTP 404.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }

    /// Returns `true` for HTTP 409.
    #[must_use]
    pub const fn is_conflict(&self) -> bool {
        matches!(self, Self::Conflict(_))
    }

    /// Returns `true` for errors raised locally before any request.
    #[must_use]
    pub const fn is_precondition(&self) -> bool {
        matches!(self, Self::Precondition { .. })
    }
}

impl From<RestError> for ResourceError {
    fn from(error: RestError) -> Self {
        match error {
            RestError::Http(HttpError::Response(res)) => {
                Self::from_http_response(res.code, &res.body, res.request_id.as_deref())
            }
            RestError::Http(HttpError::MaxRetries(res)) => {
                tracing::debug!("Giving up after {} tries", res.tries);
                Self::from_http_response(res.code, &res.body, res.request_id.as_deref())
            }
            other @ (RestError::InvalidHref { .. }
            | RestError::Http(HttpError::InvalidRequest(_))) => {
                Self::precondition(other.to_string())
            }
            other => Self::Transport(other),
        }
    }
}

// Verify ResourceError is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ResourceError>();
};

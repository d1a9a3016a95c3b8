//! REST-specific error types for the Stormpath SDK.
//!
//! - [`RestError::InvalidHref`]: When a resource `href` fails validation
//! - [`RestError::Http`]: Wraps underlying HTTP errors

use crate::clients::HttpError;
use thiserror::Error;

/// Error type for REST API operations.
///
/// # Example
///
/// ```rust
/// use stormpath::clients::RestError;
///
/// let error = RestError::InvalidHref { href: "".to_string() };
/// assert!(error.to_string().contains("Invalid"));
/// ```
#[derive(Debug, Error)]
pub enum RestError {
    /// The resource `href` is invalid.
    ///
    /// Returned when an `href` is empty or uses a scheme other than http(s).
    #[error("Invalid resource href: '{href}'")]
    InvalidHref {
        /// The invalid href that was provided.
        href: String,
    },

    /// An HTTP-level error occurred.
    #[error(transparent)]
    Http(#[from] HttpError),
}

impl RestError {
    /// Returns `true` when the request never got an answer from the server.
    #[must_use]
    pub const fn is_network(&self) -> bool {
        matches!(self, Self::Http(HttpError::Network(_)))
    }
}

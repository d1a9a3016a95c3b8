//! Shared enums used by several resource kinds.

use serde::{Deserialize, Serialize};

/// Whether an application, directory, group or account is usable.
///
/// # Example
///
/// ```rust
/// use stormpath::rest::resources::Status;
///
/// let json = serde_json::to_string(&Status::Enabled).unwrap();
/// assert_eq!(json, "\"ENABLED\"");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Status {
    /// Usable.
    #[default]
    Enabled,
    /// Switched off.
    Disabled,
    /// An account that has not confirmed its email address yet.
    Unverified,
}

/// Whether a policy sends a given email.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EmailStatus {
    /// The email is sent.
    Enabled,
    /// The email is not sent.
    Disabled,
}

impl EmailStatus {
    /// Returns `true` if the email is sent.
    #[must_use]
    pub const fn is_enabled(&self) -> bool {
        matches!(self, Self::Enabled)
    }
}

/// Content type of an email template body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum MimeType {
    /// `text/plain`, using `textBody`.
    #[default]
    #[serde(rename = "text/plain")]
    PlainText,
    /// `text/html`, using `htmlBody`.
    #[serde(rename = "text/html")]
    Html,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_serialization() {
        assert_eq!(serde_json::to_string(&Status::Disabled).unwrap(), "\"DISABLED\"");
        assert_eq!(
            serde_json::from_str::<Status>("\"UNVERIFIED\"").unwrap(),
            Status::Unverified
        );
    }

    #[test]
    fn test_email_status_round_trip_values() {
        assert_eq!(
            serde_json::to_string(&EmailStatus::Enabled).unwrap(),
            "\"ENABLED\""
        );
        let status: EmailStatus = serde_json::from_str("\"DISABLED\"").unwrap();
        assert!(!status.is_enabled());
    }

    #[test]
    fn test_mime_type_uses_media_type_strings() {
        assert_eq!(
            serde_json::to_string(&MimeType::Html).unwrap(),
            "\"text/html\""
        );
        assert_eq!(
            serde_json::from_str::<MimeType>("\"text/plain\"").unwrap(),
            MimeType::PlainText
        );
    }
}

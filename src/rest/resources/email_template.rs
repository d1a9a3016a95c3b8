//! Email template resources.
//!
//! Templates whose email carries a link (password reset, verification) are
//! [`ModeledEmailTemplate`]s: their `defaultModel` holds the `linkBaseUrl`
//! the link is built from. Other templates are [`UnmodeledEmailTemplate`]s
//! and have no `defaultModel` at all.

use serde_json::{Map, Value};

use crate::client::Client;
use crate::rest::resources::MimeType;
use crate::rest::ResourceError;

const LINK_BASE_URL: &str = "linkBaseUrl";

resource_type! {
    /// An email template with a `defaultModel`.
    ModeledEmailTemplate => ModeledEmailTemplate
}

resource_type! {
    /// An email template without a `defaultModel`.
    UnmodeledEmailTemplate => UnmodeledEmailTemplate
}

macro_rules! template_accessors {
    ($name:ident) => {
        impl $name {
            accessors! {
                /// Returns the template name.
                name, set_name: String = "name";
                /// Returns the description.
                description, set_description: String = "description";
                /// Returns the email subject.
                subject, set_subject: String = "subject";
                /// Returns the sender name.
                from_name, set_from_name: String = "fromName";
                /// Returns the sender address.
                from_email_address, set_from_email_address: String = "fromEmailAddress";
                /// Returns the plain text body.
                text_body, set_text_body: String = "textBody";
                /// Returns the HTML body.
                html_body, set_html_body: String = "htmlBody";
                /// Returns which body is sent.
                mime_type, set_mime_type: MimeType = "mimeType";
            }
        }
    };
}

template_accessors!(ModeledEmailTemplate);
template_accessors!(UnmodeledEmailTemplate);

impl ModeledEmailTemplate {
    accessors! {
        /// Returns the values substituted into the template.
        default_model, set_default_model: Map<String, Value> = "defaultModel";
    }

    /// Returns `defaultModel.linkBaseUrl`.
    ///
    /// # Errors
    ///
    /// Returns any error raised while fetching the template.
    pub async fn link_base_url(&mut self, client: &Client) -> Result<Option<String>, ResourceError> {
        Ok(self
            .default_model(client)
            .await?
            .and_then(|model| model.get(LINK_BASE_URL).and_then(Value::as_str).map(String::from)))
    }

    /// Sets `defaultModel.linkBaseUrl`, keeping the other model values.
    ///
    /// # Errors
    ///
    /// Returns any error raised while fetching the template.
    pub async fn set_link_base_url(
        &mut self,
        client: &Client,
        url: impl Into<String>,
    ) -> Result<(), ResourceError> {
        let mut model = self.default_model(client).await?.unwrap_or_default();
        model.insert(LINK_BASE_URL.to_string(), Value::String(url.into()));
        self.set_default_model(model)
    }
}

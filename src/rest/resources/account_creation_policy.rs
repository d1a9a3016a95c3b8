//! Account creation policy resource.

use crate::rest::resources::{EmailStatus, ModeledEmailTemplate, UnmodeledEmailTemplate};

resource_type! {
    /// Which emails a directory sends when accounts are created.
    AccountCreationPolicy => AccountCreationPolicy
}

impl AccountCreationPolicy {
    accessors! {
        /// Returns whether new accounts must verify their email.
        verification_email_status, set_verification_email_status: EmailStatus = "verificationEmailStatus";
        /// Returns whether a confirmation follows a successful verification.
        verification_success_email_status, set_verification_success_email_status: EmailStatus = "verificationSuccessEmailStatus";
        /// Returns whether new accounts get a welcome email.
        welcome_email_status, set_welcome_email_status: EmailStatus = "welcomeEmailStatus";
    }

    collections! {
        /// Returns the templates of the verification email.
        verification_email_templates: ModeledEmailTemplate = "verificationEmailTemplates";
        /// Returns the templates of the verification success email.
        verification_success_email_templates: UnmodeledEmailTemplate = "verificationSuccessEmailTemplates";
        /// Returns the templates of the welcome email.
        welcome_email_templates: UnmodeledEmailTemplate = "welcomeEmailTemplates";
    }
}

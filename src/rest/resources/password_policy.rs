//! Password policy and strength resources.

use crate::rest::resources::{EmailStatus, ModeledEmailTemplate, UnmodeledEmailTemplate};

resource_type! {
    /// A directory's password reset policy.
    PasswordPolicy => PasswordPolicy
}

impl PasswordPolicy {
    accessors! {
        /// Returns whether the reset email is sent.
        reset_email_status, set_reset_email_status: EmailStatus = "resetEmailStatus";
        /// Returns whether the reset confirmation email is sent.
        reset_success_email_status, set_reset_success_email_status: EmailStatus = "resetSuccessEmailStatus";
        /// Returns how many hours a reset token stays valid.
        reset_token_ttl, set_reset_token_ttl: u32 = "resetTokenTtl";
    }

    links! {
        /// Returns the password strength requirements.
        strength: PasswordStrength = "strength";
    }

    collections! {
        /// Returns the templates of the reset email.
        reset_email_templates: ModeledEmailTemplate = "resetEmailTemplates";
        /// Returns the templates of the reset confirmation email.
        reset_success_email_templates: UnmodeledEmailTemplate = "resetSuccessEmailTemplates";
    }
}

resource_type! {
    /// Password strength requirements.
    PasswordStrength => PasswordStrength
}

impl PasswordStrength {
    accessors! {
        /// Returns the minimum number of symbols.
        min_symbol, set_min_symbol: u32 = "minSymbol";
        /// Returns the minimum number of diacritic characters.
        min_diacritic, set_min_diacritic: u32 = "minDiacritic";
        /// Returns the minimum number of upper case letters.
        min_upper_case, set_min_upper_case: u32 = "minUpperCase";
        /// Returns the minimum length.
        min_length, set_min_length: u32 = "minLength";
        /// Returns the minimum number of lower case letters.
        min_lower_case, set_min_lower_case: u32 = "minLowerCase";
        /// Returns the maximum length.
        max_length, set_max_length: u32 = "maxLength";
        /// Returns the minimum number of digits.
        min_numeric, set_min_numeric: u32 = "minNumeric";
    }
}

//! Verification email requests.
//!
//! An application's `verificationEmails` endpoint cannot be listed. POSTing
//! a login and account store to it asks the service to send the
//! verification email again.

use serde_json::json;

use crate::client::Client;
use crate::rest::resources::Account;
use crate::rest::{Collection, ResourceError, ResourceType};

resource_type! {
    /// A request to resend an account's verification email.
    VerificationEmail => VerificationEmail
}

impl Collection<VerificationEmail> {
    /// Resends the verification email to `account` in `account_store`.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Precondition`] if the store has no `href`,
    /// or the service's error when the directory does not verify accounts.
    pub async fn resend<S: ResourceType>(
        &self,
        client: &Client,
        account: &mut Account,
        account_store: &S,
    ) -> Result<(), ResourceError> {
        let store = account_store.resource().reference()?;
        let login = account.login(client).await?;

        tracing::debug!("Resending verification email for {}", login);
        client
            .rest()
            .post(
                self.href(),
                json!({ "login": login, "accountStore": store }),
                None,
            )
            .await?;
        Ok(())
    }
}

//! Account resource.

use crate::rest::resources::{Directory, Group, Status, Tenant};
use crate::rest::ResourceError;

resource_type! {
    /// A user account.
    Account => Account
}

impl Account {
    accessors! {
        /// Returns the email address.
        email, set_email: String = "email";
        /// Returns the username. Defaults to the email on the service.
        username, set_username: String = "username";
        /// Returns the given (first) name.
        given_name, set_given_name: String = "givenName";
        /// Returns the middle name.
        middle_name, set_middle_name: String = "middleName";
        /// Returns the surname.
        surname, set_surname: String = "surname";
        /// Returns the account status.
        status, set_status: Status = "status";
        /// Returns the full name computed by the service.
        full_name: String = "fullName";
    }

    links! {
        /// Returns the owning tenant.
        tenant: Tenant = "tenant";
        /// Returns the directory the account lives in.
        directory: Directory = "directory";
    }

    collections! {
        /// Returns the groups the account belongs to.
        groups: Group = "groups";
    }

    /// Sets the password sent on the next `save()`. The service never
    /// returns it.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Precondition`] if the account has been deleted.
    pub fn set_password(&mut self, password: impl Into<String>) -> Result<(), ResourceError> {
        self.resource.set("password", password.into())
    }

    /// Returns the login to use for this account: the username, or the email
    /// when no username is set.
    ///
    /// # Errors
    ///
    /// Returns any error raised while fetching the account, or
    /// [`ResourceError::Precondition`] if it has neither.
    pub async fn login(&mut self, client: &crate::Client) -> Result<String, ResourceError> {
        if let Some(username) = self.username(client).await?.filter(|u| !u.is_empty()) {
            return Ok(username);
        }
        self.email(client)
            .await?
            .ok_or_else(|| ResourceError::precondition("account has no username or email"))
    }
}

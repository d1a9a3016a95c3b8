//! Application resource.
//!
//! Applications authenticate accounts against the account stores mapped to
//! them. Creating an application can also create a directory and map it as
//! the default account store, via [`ApplicationCreateParams`].
//!
//! # Example
//!
//! ```rust,ignore
//! use stormpath::rest::resources::ApplicationCreateParams;
//! use serde_json::json;
//!
//! let apps = client.applications().await?;
//! let app = apps
//!     .create_with(
//!         &client,
//!         &json!({"name": "my-app"}),
//!         &ApplicationCreateParams::create_directory("my-app directory"),
//!     )
//!     .await?;
//! ```

use serde::Serialize;

use crate::rest::resources::{
    Account, AccountStoreMapping, Group, OAuthPolicy, Status, Tenant, VerificationEmail,
};

resource_type! {
    /// An application registered with the tenant.
    Application => Application
}

impl Application {
    accessors! {
        /// Returns the application name, unique within the tenant.
        name, set_name: String = "name";
        /// Returns the description.
        description, set_description: String = "description";
        /// Returns whether the application accepts logins.
        status, set_status: Status = "status";
    }

    links! {
        /// Returns the owning tenant.
        tenant: Tenant = "tenant";
        /// Returns the mapping whose store receives new accounts.
        default_account_store_mapping: AccountStoreMapping = "defaultAccountStoreMapping";
        /// Returns the mapping whose store receives new groups.
        default_group_store_mapping: AccountStoreMapping = "defaultGroupStoreMapping";
        /// Returns the application's OAuth policy.
        oauth_policy: OAuthPolicy = "oAuthPolicy";
    }

    collections! {
        /// Returns the accounts that can log in to the application.
        accounts: Account = "accounts";
        /// Returns the groups reachable through the application.
        groups: Group = "groups";
        /// Returns the application's account store mappings, ordered by `listIndex`.
        account_store_mappings: AccountStoreMapping = "accountStoreMappings";
        /// Returns the verification email endpoint. It cannot be iterated;
        /// use [`Collection::resend`](crate::rest::Collection::resend).
        verification_emails: VerificationEmail = "verificationEmails";
    }
}

/// Query parameters accepted when creating an application.
///
/// # Example
///
/// ```rust
/// use stormpath::rest::resources::ApplicationCreateParams;
///
/// let params = ApplicationCreateParams::create_directory("my-dir");
/// let json = serde_json::to_value(&params).unwrap();
/// assert_eq!(json["createDirectory"], "my-dir");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationCreateParams {
    /// Name of a directory to create and map as the default account and
    /// group store. `"true"` lets the service pick the name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub create_directory: Option<String>,
}

impl ApplicationCreateParams {
    /// Creates params that create a directory named `name` alongside the
    /// application.
    #[must_use]
    pub fn create_directory(name: impl Into<String>) -> Self {
        Self {
            create_directory: Some(name.into()),
        }
    }

    /// Creates params that create a directory named by the service.
    #[must_use]
    pub fn with_default_directory() -> Self {
        Self::create_directory("true")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_params_skip_absent_directory() {
        let json = serde_json::to_value(ApplicationCreateParams::default()).unwrap();
        assert_eq!(json, serde_json::json!({}));
    }

    #[test]
    fn test_create_params_use_wire_name() {
        let json = serde_json::to_value(ApplicationCreateParams::create_directory("d")).unwrap();
        assert_eq!(json, serde_json::json!({"createDirectory": "d"}));

        let json = serde_json::to_value(ApplicationCreateParams::with_default_directory()).unwrap();
        assert_eq!(json, serde_json::json!({"createDirectory": "true"}));
    }
}

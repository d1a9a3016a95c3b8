//! Directory resource.
//!
//! Directories store accounts and groups. Cloud directories live entirely in
//! the service; LDAP and Active Directory directories are mirrored through an
//! agent described by their [`Provider`].

use crate::rest::resources::{
    Account, AccountCreationPolicy, Group, PasswordPolicy, Provider, Status, Tenant,
};

resource_type! {
    /// A directory of accounts and groups.
    Directory => Directory
}

impl Directory {
    accessors! {
        /// Returns the directory name, unique within the tenant.
        name, set_name: String = "name";
        /// Returns the description.
        description, set_description: String = "description";
        /// Returns whether accounts in the directory can log in.
        status, set_status: Status = "status";
    }

    links! {
        /// Returns the owning tenant.
        tenant: Tenant = "tenant";
        /// Returns the identity provider (`stormpath`, `ldap`, `ad`, ...).
        provider: Provider = "provider";
        /// Returns the password reset policy.
        password_policy: PasswordPolicy = "passwordPolicy";
        /// Returns the account creation policy.
        account_creation_policy: AccountCreationPolicy = "accountCreationPolicy";
    }

    collections! {
        /// Returns the directory's accounts.
        accounts: Account = "accounts";
        /// Returns the directory's groups.
        groups: Group = "groups";
    }
}

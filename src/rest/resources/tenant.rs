//! Tenant resource.
//!
//! The tenant owns every application, directory, account and group reached
//! through an API key. [`Client::tenant`](crate::Client::tenant) returns a
//! handle to `/tenants/current`.

use crate::rest::resources::{Account, Application, Directory, Group};

resource_type! {
    /// The tenant owning the API key.
    Tenant => Tenant
}

impl Tenant {
    accessors! {
        /// Returns the tenant name.
        name: String = "name";
        /// Returns the tenant key, unique across the service.
        key: String = "key";
    }

    collections! {
        /// Returns the tenant's applications.
        applications: Application = "applications";
        /// Returns the tenant's directories.
        directories: Directory = "directories";
        /// Returns every account in the tenant.
        accounts: Account = "accounts";
        /// Returns every group in the tenant.
        groups: Group = "groups";
    }
}

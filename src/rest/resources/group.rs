//! Group resource.

use crate::rest::resources::{Account, Directory, Status, Tenant};

resource_type! {
    /// A named set of accounts inside a directory.
    Group => Group
}

impl Group {
    accessors! {
        /// Returns the group name, unique within its directory.
        name, set_name: String = "name";
        /// Returns the description.
        description, set_description: String = "description";
        /// Returns whether members can log in through this group.
        status, set_status: Status = "status";
    }

    links! {
        /// Returns the owning tenant.
        tenant: Tenant = "tenant";
        /// Returns the directory the group lives in.
        directory: Directory = "directory";
    }

    collections! {
        /// Returns the group's members.
        accounts: Account = "accounts";
    }
}

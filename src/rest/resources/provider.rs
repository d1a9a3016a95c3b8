//! Directory provider resource.

use crate::rest::resources::Agent;

resource_type! {
    /// The identity provider behind a directory.
    Provider => Provider
}

impl Provider {
    accessors! {
        /// Returns the provider id: `stormpath`, `ldap`, `ad`, ...
        provider_id: String = "providerId";
    }

    links! {
        /// Returns the mirroring agent of an LDAP or AD directory.
        agent: Agent = "agent";
    }
}

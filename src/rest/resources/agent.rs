//! LDAP and Active Directory agent resources.
//!
//! An [`Agent`] mirrors an external directory. Its connection settings are
//! an embedded [`AgentConfig`], which in turn embeds the account and group
//! attribute mappings. The embedded types have no `href` and never trigger
//! a fetch.

use crate::rest::resources::{Directory, Tenant};

resource_type! {
    /// The agent mirroring an LDAP or AD directory.
    Agent => Agent
}

impl Agent {
    accessors! {
        /// Returns the agent id.
        id: String = "id";
        /// Returns the connection status reported by the agent.
        status: String = "status";
    }

    links! {
        /// Returns the connection settings.
        config: AgentConfig = "config";
        /// Returns the mirrored directory.
        directory: Directory = "directory";
        /// Returns the owning tenant.
        tenant: Tenant = "tenant";
    }
}

resource_type! {
    /// Embedded agent connection settings.
    AgentConfig => AgentConfig
}

impl AgentConfig {
    accessors! {
        /// Returns the LDAP host.
        directory_host: String = "directoryHost";
        /// Returns the LDAP port.
        directory_port: serde_json::Value = "directoryPort";
        /// Returns `true` if the connection uses TLS.
        ssl_required: bool = "sslRequired";
        /// Returns the DN the agent binds as.
        agent_user_dn: String = "agentUserDn";
        /// Returns the base DN searches start at.
        base_dn: String = "baseDn";
        /// Returns the poll interval in minutes.
        poll_interval: u32 = "pollInterval";
        /// Returns the AD referral mode.
        referral_mode: String = "referralMode";
        /// Returns `true` if AD referral errors are ignored.
        ignore_referral_issues: bool = "ignoreReferralIssues";
    }

    links! {
        /// Returns the account attribute mapping.
        account_config: AgentAccountConfig = "accountConfig";
        /// Returns the group attribute mapping.
        group_config: AgentGroupConfig = "groupConfig";
    }
}

resource_type! {
    /// Embedded mapping from LDAP entries to accounts.
    AgentAccountConfig => AgentAccountConfig
}

impl AgentAccountConfig {
    accessors! {
        /// Returns the DN suffix account entries live under.
        dn_suffix: String = "dnSuffix";
        /// Returns the object class of account entries.
        object_class: String = "objectClass";
        /// Returns the LDAP filter selecting account entries.
        object_filter: String = "objectFilter";
        /// Returns the attribute holding the email.
        email_rdn: String = "emailRdn";
        /// Returns the attribute holding the given name.
        given_name_rdn: String = "givenNameRdn";
        /// Returns the attribute holding the middle name.
        middle_name_rdn: String = "middleNameRdn";
        /// Returns the attribute holding the surname.
        surname_rdn: String = "surnameRdn";
        /// Returns the attribute holding the username.
        username_rdn: String = "usernameRdn";
        /// Returns the attribute holding the password.
        password_rdn: String = "passwordRdn";
    }
}

resource_type! {
    /// Embedded mapping from LDAP entries to groups.
    AgentGroupConfig => AgentGroupConfig
}

impl AgentGroupConfig {
    accessors! {
        /// Returns the DN suffix group entries live under.
        dn_suffix: String = "dnSuffix";
        /// Returns the object class of group entries.
        object_class: String = "objectClass";
        /// Returns the LDAP filter selecting group entries.
        object_filter: String = "objectFilter";
        /// Returns the attribute holding the group name.
        name_rdn: String = "nameRdn";
        /// Returns the attribute holding the description.
        description_rdn: String = "descriptionRdn";
        /// Returns the attribute listing members.
        members_rdn: String = "membersRdn";
    }
}

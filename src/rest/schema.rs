//! Static schema registry for resource kinds.
//!
//! Each [`ResourceKind`] carries a constant table of [`FieldSpec`]s that says,
//! for every wire field it knows about, what shape the value has: a plain
//! scalar, a read-only scalar, a reference to another resource, a collection
//! reference, or an embedded value object with no `href` of its own.
//!
//! The table drives three things:
//!
//! - which target kind a reference resolves to on access
//! - whether a collection may be iterated or only used for creation
//! - which fields are left out of `save()` payloads
//!
//! # Example
//!
//! ```rust
//! use stormpath::rest::{FieldKind, ResourceKind};
//!
//! let field = ResourceKind::Application.field("defaultAccountStoreMapping").unwrap();
//! assert_eq!(field.kind, FieldKind::Resource(ResourceKind::AccountStoreMapping));
//!
//! let field = ResourceKind::Application.field("verificationEmails").unwrap();
//! assert!(matches!(field.kind, FieldKind::Collection { iterable: false, .. }));
//! ```

use std::fmt;

/// The shape of a field's value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// A writable plain value.
    Scalar,
    /// A value assigned by the service and never sent back.
    ReadOnly,
    /// A `{"href": ...}` reference to a single resource.
    Resource(ResourceKind),
    /// A `{"href": ...}` reference to a list endpoint.
    Collection {
        /// Kind of the items in the collection.
        target: ResourceKind,
        /// `false` for endpoints that only accept creation requests.
        iterable: bool,
    },
    /// An inline object without an `href` of its own.
    Embedded(ResourceKind),
}

/// A single entry in a kind's field table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    /// The wire (camelCase) name of the field.
    pub name: &'static str,
    /// The shape of the field's value.
    pub kind: FieldKind,
}

impl FieldSpec {
    /// Creates a new field spec.
    #[must_use]
    pub const fn new(name: &'static str, kind: FieldKind) -> Self {
        Self { name, kind }
    }

    /// Returns `true` if this field is included in `save()` payloads.
    #[must_use]
    pub const fn is_writable(&self) -> bool {
        matches!(
            self.kind,
            FieldKind::Scalar | FieldKind::Resource(_) | FieldKind::Embedded(_)
        )
    }
}

/// Every resource kind the client knows how to map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceKind {
    /// The tenant owning every other resource.
    Tenant,
    /// An application.
    Application,
    /// A directory of accounts and groups.
    Directory,
    /// A group of accounts.
    Group,
    /// A user account.
    Account,
    /// Either a directory or a group; narrowed by `href` on resolution.
    AccountStore,
    /// The link between an application and an account store.
    AccountStoreMapping,
    /// A directory's identity provider.
    Provider,
    /// The LDAP/AD agent of a mirrored directory.
    Agent,
    /// Embedded agent connection settings.
    AgentConfig,
    /// Embedded agent account mapping settings.
    AgentAccountConfig,
    /// Embedded agent group mapping settings.
    AgentGroupConfig,
    /// A directory's password policy.
    PasswordPolicy,
    /// Password strength requirements.
    PasswordStrength,
    /// A directory's account creation policy.
    AccountCreationPolicy,
    /// An email template with a `defaultModel`.
    ModeledEmailTemplate,
    /// An email template without a `defaultModel`.
    UnmodeledEmailTemplate,
    /// An application's OAuth policy.
    OAuthPolicy,
    /// A verification email request.
    VerificationEmail,
}

use FieldKind::{Collection, Embedded, ReadOnly, Resource, Scalar};
use ResourceKind as K;

const fn coll(target: ResourceKind) -> FieldKind {
    Collection {
        target,
        iterable: true,
    }
}

const TENANT_FIELDS: &[FieldSpec] = &[
    FieldSpec::new("name", ReadOnly),
    FieldSpec::new("key", ReadOnly),
    FieldSpec::new("applications", coll(K::Application)),
    FieldSpec::new("directories", coll(K::Directory)),
    FieldSpec::new("accounts", coll(K::Account)),
    FieldSpec::new("groups", coll(K::Group)),
    FieldSpec::new("createdAt", ReadOnly),
    FieldSpec::new("modifiedAt", ReadOnly),
];

const APPLICATION_FIELDS: &[FieldSpec] = &[
    FieldSpec::new("name", Scalar),
    FieldSpec::new("description", Scalar),
    FieldSpec::new("status", Scalar),
    FieldSpec::new("tenant", Resource(K::Tenant)),
    FieldSpec::new("accounts", coll(K::Account)),
    FieldSpec::new("groups", coll(K::Group)),
    FieldSpec::new("accountStoreMappings", coll(K::AccountStoreMapping)),
    FieldSpec::new("defaultAccountStoreMapping", Resource(K::AccountStoreMapping)),
    FieldSpec::new("defaultGroupStoreMapping", Resource(K::AccountStoreMapping)),
    FieldSpec::new("oAuthPolicy", Resource(K::OAuthPolicy)),
    FieldSpec::new(
        "verificationEmails",
        Collection {
            target: K::VerificationEmail,
            iterable: false,
        },
    ),
    FieldSpec::new("createdAt", ReadOnly),
    FieldSpec::new("modifiedAt", ReadOnly),
];

const DIRECTORY_FIELDS: &[FieldSpec] = &[
    FieldSpec::new("name", Scalar),
    FieldSpec::new("description", Scalar),
    FieldSpec::new("status", Scalar),
    FieldSpec::new("tenant", Resource(K::Tenant)),
    FieldSpec::new("provider", Resource(K::Provider)),
    FieldSpec::new("accounts", coll(K::Account)),
    FieldSpec::new("groups", coll(K::Group)),
    FieldSpec::new("passwordPolicy", Resource(K::PasswordPolicy)),
    FieldSpec::new("accountCreationPolicy", Resource(K::AccountCreationPolicy)),
    FieldSpec::new("createdAt", ReadOnly),
    FieldSpec::new("modifiedAt", ReadOnly),
];

const GROUP_FIELDS: &[FieldSpec] = &[
    FieldSpec::new("name", Scalar),
    FieldSpec::new("description", Scalar),
    FieldSpec::new("status", Scalar),
    FieldSpec::new("tenant", Resource(K::Tenant)),
    FieldSpec::new("directory", Resource(K::Directory)),
    FieldSpec::new("accounts", coll(K::Account)),
    FieldSpec::new("createdAt", ReadOnly),
    FieldSpec::new("modifiedAt", ReadOnly),
];

const ACCOUNT_FIELDS: &[FieldSpec] = &[
    FieldSpec::new("email", Scalar),
    FieldSpec::new("username", Scalar),
    FieldSpec::new("password", Scalar),
    FieldSpec::new("givenName", Scalar),
    FieldSpec::new("middleName", Scalar),
    FieldSpec::new("surname", Scalar),
    FieldSpec::new("status", Scalar),
    FieldSpec::new("fullName", ReadOnly),
    FieldSpec::new("tenant", Resource(K::Tenant)),
    FieldSpec::new("directory", Resource(K::Directory)),
    FieldSpec::new("groups", coll(K::Group)),
    FieldSpec::new("createdAt", ReadOnly),
    FieldSpec::new("modifiedAt", ReadOnly),
];

const ACCOUNT_STORE_FIELDS: &[FieldSpec] = &[
    FieldSpec::new("name", Scalar),
    FieldSpec::new("description", Scalar),
    FieldSpec::new("status", Scalar),
    FieldSpec::new("tenant", Resource(K::Tenant)),
    FieldSpec::new("accounts", coll(K::Account)),
];

const ACCOUNT_STORE_MAPPING_FIELDS: &[FieldSpec] = &[
    FieldSpec::new("application", Resource(K::Application)),
    FieldSpec::new("accountStore", Resource(K::AccountStore)),
    FieldSpec::new("listIndex", Scalar),
    FieldSpec::new("isDefaultAccountStore", Scalar),
    FieldSpec::new("isDefaultGroupStore", Scalar),
];

const PROVIDER_FIELDS: &[FieldSpec] = &[
    FieldSpec::new("providerId", Scalar),
    FieldSpec::new("agent", Resource(K::Agent)),
    FieldSpec::new("createdAt", ReadOnly),
    FieldSpec::new("modifiedAt", ReadOnly),
];

const AGENT_FIELDS: &[FieldSpec] = &[
    FieldSpec::new("id", ReadOnly),
    FieldSpec::new("status", ReadOnly),
    FieldSpec::new("config", Embedded(K::AgentConfig)),
    FieldSpec::new("directory", Resource(K::Directory)),
    FieldSpec::new("tenant", Resource(K::Tenant)),
    FieldSpec::new("createdAt", ReadOnly),
    FieldSpec::new("modifiedAt", ReadOnly),
];

const AGENT_CONFIG_FIELDS: &[FieldSpec] = &[
    FieldSpec::new("directoryHost", Scalar),
    FieldSpec::new("directoryPort", Scalar),
    FieldSpec::new("sslRequired", Scalar),
    FieldSpec::new("agentUserDn", Scalar),
    FieldSpec::new("agentUserDnPassword", Scalar),
    FieldSpec::new("baseDn", Scalar),
    FieldSpec::new("pollInterval", Scalar),
    FieldSpec::new("referralMode", Scalar),
    FieldSpec::new("ignoreReferralIssues", Scalar),
    FieldSpec::new("accountConfig", Embedded(K::AgentAccountConfig)),
    FieldSpec::new("groupConfig", Embedded(K::AgentGroupConfig)),
];

const AGENT_ACCOUNT_CONFIG_FIELDS: &[FieldSpec] = &[
    FieldSpec::new("dnSuffix", Scalar),
    FieldSpec::new("objectClass", Scalar),
    FieldSpec::new("objectFilter", Scalar),
    FieldSpec::new("emailRdn", Scalar),
    FieldSpec::new("givenNameRdn", Scalar),
    FieldSpec::new("middleNameRdn", Scalar),
    FieldSpec::new("surnameRdn", Scalar),
    FieldSpec::new("usernameRdn", Scalar),
    FieldSpec::new("passwordRdn", Scalar),
];

const AGENT_GROUP_CONFIG_FIELDS: &[FieldSpec] = &[
    FieldSpec::new("dnSuffix", Scalar),
    FieldSpec::new("objectClass", Scalar),
    FieldSpec::new("objectFilter", Scalar),
    FieldSpec::new("nameRdn", Scalar),
    FieldSpec::new("descriptionRdn", Scalar),
    FieldSpec::new("membersRdn", Scalar),
];

const PASSWORD_POLICY_FIELDS: &[FieldSpec] = &[
    FieldSpec::new("resetEmailStatus", Scalar),
    FieldSpec::new("resetSuccessEmailStatus", Scalar),
    FieldSpec::new("resetTokenTtl", Scalar),
    FieldSpec::new("strength", Resource(K::PasswordStrength)),
    FieldSpec::new("resetEmailTemplates", coll(K::ModeledEmailTemplate)),
    FieldSpec::new("resetSuccessEmailTemplates", coll(K::UnmodeledEmailTemplate)),
    FieldSpec::new("createdAt", ReadOnly),
    FieldSpec::new("modifiedAt", ReadOnly),
];

const PASSWORD_STRENGTH_FIELDS: &[FieldSpec] = &[
    FieldSpec::new("minSymbol", Scalar),
    FieldSpec::new("minDiacritic", Scalar),
    FieldSpec::new("minUpperCase", Scalar),
    FieldSpec::new("minLength", Scalar),
    FieldSpec::new("minLowerCase", Scalar),
    FieldSpec::new("maxLength", Scalar),
    FieldSpec::new("minNumeric", Scalar),
];

const ACCOUNT_CREATION_POLICY_FIELDS: &[FieldSpec] = &[
    FieldSpec::new("verificationEmailStatus", Scalar),
    FieldSpec::new("verificationSuccessEmailStatus", Scalar),
    FieldSpec::new("welcomeEmailStatus", Scalar),
    FieldSpec::new("verificationEmailTemplates", coll(K::ModeledEmailTemplate)),
    FieldSpec::new(
        "verificationSuccessEmailTemplates",
        coll(K::UnmodeledEmailTemplate),
    ),
    FieldSpec::new("welcomeEmailTemplates", coll(K::UnmodeledEmailTemplate)),
    FieldSpec::new("createdAt", ReadOnly),
    FieldSpec::new("modifiedAt", ReadOnly),
];

const MODELED_EMAIL_TEMPLATE_FIELDS: &[FieldSpec] = &[
    FieldSpec::new("name", Scalar),
    FieldSpec::new("description", Scalar),
    FieldSpec::new("subject", Scalar),
    FieldSpec::new("fromName", Scalar),
    FieldSpec::new("fromEmailAddress", Scalar),
    FieldSpec::new("textBody", Scalar),
    FieldSpec::new("htmlBody", Scalar),
    FieldSpec::new("mimeType", Scalar),
    FieldSpec::new("defaultModel", Scalar),
    FieldSpec::new("createdAt", ReadOnly),
    FieldSpec::new("modifiedAt", ReadOnly),
];

const UNMODELED_EMAIL_TEMPLATE_FIELDS: &[FieldSpec] = &[
    FieldSpec::new("name", Scalar),
    FieldSpec::new("description", Scalar),
    FieldSpec::new("subject", Scalar),
    FieldSpec::new("fromName", Scalar),
    FieldSpec::new("fromEmailAddress", Scalar),
    FieldSpec::new("textBody", Scalar),
    FieldSpec::new("htmlBody", Scalar),
    FieldSpec::new("mimeType", Scalar),
    FieldSpec::new("createdAt", ReadOnly),
    FieldSpec::new("modifiedAt", ReadOnly),
];

const OAUTH_POLICY_FIELDS: &[FieldSpec] = &[
    FieldSpec::new("accessTokenTtl", Scalar),
    FieldSpec::new("refreshTokenTtl", Scalar),
    FieldSpec::new("tokenEndpoint", ReadOnly),
    FieldSpec::new("application", Resource(K::Application)),
    FieldSpec::new("tenant", Resource(K::Tenant)),
    FieldSpec::new("createdAt", ReadOnly),
    FieldSpec::new("modifiedAt", ReadOnly),
];

const VERIFICATION_EMAIL_FIELDS: &[FieldSpec] = &[
    FieldSpec::new("login", Scalar),
    FieldSpec::new("accountStore", Resource(K::AccountStore)),
];

impl ResourceKind {
    /// Returns the display name of this kind.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Tenant => "Tenant",
            Self::Application => "Application",
            Self::Directory => "Directory",
            Self::Group => "Group",
            Self::Account => "Account",
            Self::AccountStore => "AccountStore",
            Self::AccountStoreMapping => "AccountStoreMapping",
            Self::Provider => "Provider",
            Self::Agent => "Agent",
            Self::AgentConfig => "AgentConfig",
            Self::AgentAccountConfig => "AgentAccountConfig",
            Self::AgentGroupConfig => "AgentGroupConfig",
            Self::PasswordPolicy => "PasswordPolicy",
            Self::PasswordStrength => "PasswordStrength",
            Self::AccountCreationPolicy => "AccountCreationPolicy",
            Self::ModeledEmailTemplate => "ModeledEmailTemplate",
            Self::UnmodeledEmailTemplate => "UnmodeledEmailTemplate",
            Self::OAuthPolicy => "OAuthPolicy",
            Self::VerificationEmail => "VerificationEmail",
        }
    }

    /// Returns the field table for this kind.
    #[must_use]
    pub const fn fields(&self) -> &'static [FieldSpec] {
        match self {
            Self::Tenant => TENANT_FIELDS,
            Self::Application => APPLICATION_FIELDS,
            Self::Directory => DIRECTORY_FIELDS,
            Self::Group => GROUP_FIELDS,
            Self::Account => ACCOUNT_FIELDS,
            Self::AccountStore => ACCOUNT_STORE_FIELDS,
            Self::AccountStoreMapping => ACCOUNT_STORE_MAPPING_FIELDS,
            Self::Provider => PROVIDER_FIELDS,
            Self::Agent => AGENT_FIELDS,
            Self::AgentConfig => AGENT_CONFIG_FIELDS,
            Self::AgentAccountConfig => AGENT_ACCOUNT_CONFIG_FIELDS,
            Self::AgentGroupConfig => AGENT_GROUP_CONFIG_FIELDS,
            Self::PasswordPolicy => PASSWORD_POLICY_FIELDS,
            Self::PasswordStrength => PASSWORD_STRENGTH_FIELDS,
            Self::AccountCreationPolicy => ACCOUNT_CREATION_POLICY_FIELDS,
            Self::ModeledEmailTemplate => MODELED_EMAIL_TEMPLATE_FIELDS,
            Self::UnmodeledEmailTemplate => UNMODELED_EMAIL_TEMPLATE_FIELDS,
            Self::OAuthPolicy => OAUTH_POLICY_FIELDS,
            Self::VerificationEmail => VERIFICATION_EMAIL_FIELDS,
        }
    }

    /// Looks up a field by wire name.
    #[must_use]
    pub fn field(&self, name: &str) -> Option<&'static FieldSpec> {
        self.fields().iter().find(|f| f.name == name)
    }

    /// Returns `true` for kinds that only ever appear inline.
    #[must_use]
    pub const fn is_embedded(&self) -> bool {
        matches!(
            self,
            Self::AgentConfig | Self::AgentAccountConfig | Self::AgentGroupConfig
        )
    }

    /// Narrows a polymorphic kind using the `href` of the referenced resource.
    ///
    /// Only [`ResourceKind::AccountStore`] is polymorphic. Any other kind is
    /// returned unchanged, as is an account store whose `href` is neither a
    /// directory nor a group.
    ///
    /// # Example
    ///
    /// ```rust
    /// use stormpath::rest::ResourceKind;
    ///
    /// let kind = ResourceKind::AccountStore
    ///     .narrow("https://api.stormpath.com/v1/directories/2SKhstu8Plaekcai8lghrp");
    /// assert_eq!(kind, ResourceKind::Directory);
    /// ```
    #[must_use]
    pub fn narrow(self, href: &str) -> Self {
        match self {
            Self::AccountStore if href.contains("/directories/") => Self::Directory,
            Self::AccountStore if href.contains("/groups/") => Self::Group,
            other => other,
        }
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

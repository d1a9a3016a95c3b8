//! Typed resource wrappers.
//!
//! Each type here wraps a [`Resource`](crate::rest::Resource) of one
//! [`ResourceKind`](crate::rest::ResourceKind) and exposes its fields as
//! typed accessors. Getters are async because reading a field may fetch the
//! document; setters are local and only fail on misuse.
//!
//! # Example
//!
//! ```rust,ignore
//! use stormpath::rest::resources::{Application, ApplicationCreateParams};
//! use stormpath::rest::ResourceType;
//! use serde_json::json;
//!
//! let apps = client.applications().await?;
//! let mut app = apps
//!     .create_with(
//!         &client,
//!         &json!({"name": "my-app", "description": "test app"}),
//!         &ApplicationCreateParams::create_directory("my-app"),
//!     )
//!     .await?;
//!
//! let mut mapping = app.default_account_store_mapping(&client).await?.unwrap();
//! let mut store = mapping.account_store(&client).await?.unwrap();
//! assert_eq!(store.name(&client).await?.as_deref(), Some("my-app"));
//! ```

/// Declares a wrapper struct and its [`ResourceType`](crate::rest::ResourceType) impl.
macro_rules! resource_type {
    ($(#[$meta:meta])* $name:ident => $kind:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone)]
        pub struct $name {
            resource: $crate::rest::Resource,
        }

        impl $crate::rest::ResourceType for $name {
            const KIND: $crate::rest::ResourceKind = $crate::rest::ResourceKind::$kind;

            fn from_resource(resource: $crate::rest::Resource) -> Self {
                Self { resource }
            }

            fn resource(&self) -> &$crate::rest::Resource {
                &self.resource
            }

            fn resource_mut(&mut self) -> &mut $crate::rest::Resource {
                &mut self.resource
            }

            fn into_resource(self) -> $crate::rest::Resource {
                self.resource
            }
        }
    };
}

/// Field getters (`name: Type = "wireName";`) and getter/setter pairs
/// (`name, set_name: Type = "wireName";`).
macro_rules! accessors {
    () => {};
    ($(#[$meta:meta])* $getter:ident, $setter:ident: $ty:ty = $wire:literal; $($rest:tt)*) => {
        accessors!($(#[$meta])* $getter: $ty = $wire;);

        #[doc = concat!("Sets `", $wire, "` locally.")]
        ///
        /// # Errors
        ///
        /// Returns [`ResourceError::Precondition`](crate::rest::ResourceError::Precondition)
        /// if the resource has been deleted.
        pub fn $setter(&mut self, value: impl Into<$ty>) -> Result<(), $crate::rest::ResourceError> {
            let value = serde_json::to_value(value.into())
                .map_err($crate::rest::ResourceError::Serialize)?;
            self.resource.set($wire, value)
        }

        accessors!($($rest)*);
    };
    ($(#[$meta:meta])* $getter:ident: $ty:ty = $wire:literal; $($rest:tt)*) => {
        $(#[$meta])*
        ///
        /// # Errors
        ///
        /// Returns any error raised while fetching the resource.
        pub async fn $getter(
            &mut self,
            client: &$crate::Client,
        ) -> Result<Option<$ty>, $crate::rest::ResourceError> {
            self.resource.get_as(client, $wire).await
        }

        accessors!($($rest)*);
    };
}

/// Resolvers for reference fields (`name: Type = "wireName";`).
macro_rules! links {
    () => {};
    ($(#[$meta:meta])* $getter:ident: $ty:ty = $wire:literal; $($rest:tt)*) => {
        $(#[$meta])*
        ///
        /// Returns `None` when the reference is null.
        ///
        /// # Errors
        ///
        /// Returns any error raised while fetching the owning resource.
        pub async fn $getter(
            &mut self,
            client: &$crate::Client,
        ) -> Result<Option<$ty>, $crate::rest::ResourceError> {
            Ok(self
                .resource
                .link(client, $wire)
                .await?
                .map(<$ty as $crate::rest::ResourceType>::from_resource))
        }

        links!($($rest)*);
    };
}

/// Resolvers for collection fields (`name: ItemType = "wireName";`).
macro_rules! collections {
    () => {};
    ($(#[$meta:meta])* $getter:ident: $ty:ty = $wire:literal; $($rest:tt)*) => {
        $(#[$meta])*
        ///
        /// # Errors
        ///
        /// Returns any error raised while fetching the owning resource.
        pub async fn $getter(
            &mut self,
            client: &$crate::Client,
        ) -> Result<$crate::rest::Collection<$ty>, $crate::rest::ResourceError> {
            self.resource.collection(client, $wire).await
        }

        collections!($($rest)*);
    };
}

mod account;
mod account_creation_policy;
mod account_store;
mod account_store_mapping;
mod agent;
mod application;
mod common;
mod directory;
mod email_template;
mod group;
mod oauth_policy;
mod password_policy;
mod provider;
mod tenant;
mod verification_email;

pub use account::Account;
pub use account_creation_policy::AccountCreationPolicy;
pub use account_store::AccountStore;
pub use account_store_mapping::AccountStoreMapping;
pub use agent::{Agent, AgentAccountConfig, AgentConfig, AgentGroupConfig};
pub use application::{Application, ApplicationCreateParams};
pub use common::{EmailStatus, MimeType, Status};
pub use directory::Directory;
pub use email_template::{ModeledEmailTemplate, UnmodeledEmailTemplate};
pub use group::Group;
pub use oauth_policy::OAuthPolicy;
pub use password_policy::{PasswordPolicy, PasswordStrength};
pub use provider::Provider;
pub use tenant::Tenant;
pub use verification_email::VerificationEmail;

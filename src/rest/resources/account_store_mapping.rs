//! Account store mapping resource.
//!
//! A mapping attaches an account store to an application. Its `listIndex`
//! orders login attempts across stores, and the default flags select where
//! new accounts and groups are created.
//!
//! # Example
//!
//! ```rust,ignore
//! let mut mapping = app.account_store_mappings(&client).await?.instantiate();
//! mapping.set_application(&app)?;
//! mapping.set_account_store(&directory)?;
//! mapping.set_list_index(0u32)?;
//! mapping.set_is_default_account_store(true)?;
//! mapping.save(&client).await?;
//! ```

use crate::rest::resources::{AccountStore, Application};
use crate::rest::{ResourceError, ResourceType};

resource_type! {
    /// The link between an application and an account store.
    AccountStoreMapping => AccountStoreMapping
}

impl AccountStoreMapping {
    accessors! {
        /// Returns the position of the store in the application's login order.
        list_index, set_list_index: u32 = "listIndex";
        /// Returns `true` if new accounts are created in this store.
        is_default_account_store, set_is_default_account_store: bool = "isDefaultAccountStore";
        /// Returns `true` if new groups are created in this store.
        is_default_group_store, set_is_default_group_store: bool = "isDefaultGroupStore";
    }

    links! {
        /// Returns the mapped application.
        application: Application = "application";
        /// Returns the mapped directory or group.
        account_store: AccountStore = "accountStore";
    }

    /// Points the mapping at `application`.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Precondition`] if `application` has no `href`.
    pub fn set_application(&mut self, application: &Application) -> Result<(), ResourceError> {
        self.resource.set_link("application", application.resource())
    }

    /// Points the mapping at a directory or group.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Precondition`] if `store` has no `href`.
    pub fn set_account_store<S: ResourceType>(&mut self, store: &S) -> Result<(), ResourceError> {
        self.resource.set_link("accountStore", store.resource())
    }
}

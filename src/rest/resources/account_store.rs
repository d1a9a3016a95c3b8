//! Account stores: the directories and groups an application can log in
//! accounts from.

use crate::client::Client;
use crate::rest::resources::{Directory, Group};
use crate::rest::{Resource, ResourceError, ResourceKind, ResourceType};

/// A directory or a group, told apart by its `href`.
#[derive(Debug, Clone)]
pub enum AccountStore {
    /// A directory account store.
    Directory(Directory),
    /// A group account store.
    Group(Group),
}

impl ResourceType for AccountStore {
    const KIND: ResourceKind = ResourceKind::AccountStore;

    fn from_resource(resource: Resource) -> Self {
        match resource.kind() {
            ResourceKind::Group => Self::Group(Group::from_resource(resource)),
            _ => Self::Directory(Directory::from_resource(resource)),
        }
    }

    fn resource(&self) -> &Resource {
        match self {
            Self::Directory(directory) => directory.resource(),
            Self::Group(group) => group.resource(),
        }
    }

    fn resource_mut(&mut self) -> &mut Resource {
        match self {
            Self::Directory(directory) => directory.resource_mut(),
            Self::Group(group) => group.resource_mut(),
        }
    }

    fn into_resource(self) -> Resource {
        match self {
            Self::Directory(directory) => directory.into_resource(),
            Self::Group(group) => group.into_resource(),
        }
    }
}

impl AccountStore {
    /// Returns the store's name.
    ///
    /// # Errors
    ///
    /// Returns any error raised while fetching the store.
    pub async fn name(&mut self, client: &Client) -> Result<Option<String>, ResourceError> {
        match self {
            Self::Directory(directory) => directory.name(client).await,
            Self::Group(group) => group.name(client).await,
        }
    }

    /// Returns the directory, if this store is one.
    #[must_use]
    pub fn into_directory(self) -> Option<Directory> {
        match self {
            Self::Directory(directory) => Some(directory),
            Self::Group(_) => None,
        }
    }

    /// Returns the group, if this store is one.
    #[must_use]
    pub fn into_group(self) -> Option<Group> {
        match self {
            Self::Group(group) => Some(group),
            Self::Directory(_) => None,
        }
    }
}

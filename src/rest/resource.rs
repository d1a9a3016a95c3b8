//! The resource object layer.
//!
//! A [`Resource`] wraps one remote JSON document identified by its `href`.
//! Fields are loaded lazily: reading a field that is not known locally
//! fetches the document (through the client's [`Cache`](crate::rest::Cache))
//! and merges it. Local `set` calls mark the resource dirty; `save` sends the
//! local mapping back and `delete` removes the remote document.
//!
//! Typed wrappers such as [`Application`](crate::rest::resources::Application)
//! implement [`ResourceType`], which provides the same lifecycle methods.
//!
//! # Lifecycle
//!
//! ```text
//!  Resource::new ──save──► Loaded ◄──fetch── Unloaded (href only)
//!                            │
//!                         delete
//!                            ▼
//!                         Deleted  (every further call fails locally)
//! ```
//!
//! # Example
//!
//! ```rust,ignore
//! use stormpath::rest::ResourceType;
//!
//! let mut app = client.get::<Application>(&href);
//! app.set_description("updated app")?;
//! app.save(&client).await?;
//! ```

use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{Map, Value};
use std::collections::BTreeMap;

use crate::client::Client;
use crate::rest::collection::Collection;
use crate::rest::schema::{FieldKind, ResourceKind};
use crate::rest::tracking::TrackedFields;
use crate::rest::{ApiError, ResourceError};

/// Where a resource stands relative to the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceState {
    /// Built locally, never persisted.
    New,
    /// Known by `href`; fields beyond inline siblings not fetched yet.
    Unloaded,
    /// Fully fetched or saved.
    Loaded,
    /// An inline value object with no `href` of its own.
    Embedded,
    /// Deleted on the service.
    Deleted,
}

/// The collection a new resource will be created in on `save()`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct CreateTarget {
    pub(crate) href: String,
    pub(crate) query: BTreeMap<String, String>,
}

/// A remote JSON document identified by `href`.
#[derive(Debug, Clone)]
pub struct Resource {
    kind: ResourceKind,
    href: Option<String>,
    fields: TrackedFields,
    state: ResourceState,
    create_target: Option<CreateTarget>,
}

// Verify Resource is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Resource>();
};

impl Resource {
    /// Creates an empty resource to be filled in and saved.
    ///
    /// A resource built this way has no collection to be created in, so
    /// `save()` fails until it is obtained through
    /// [`Collection::instantiate`](crate::rest::Collection::instantiate).
    #[must_use]
    pub fn new(kind: ResourceKind) -> Self {
        Self {
            kind,
            href: None,
            fields: TrackedFields::new(),
            state: ResourceState::New,
            create_target: None,
        }
    }

    pub(crate) fn new_in(kind: ResourceKind, target: CreateTarget) -> Self {
        Self {
            create_target: Some(target),
            ..Self::new(kind)
        }
    }

    /// Creates a lazy handle for the resource at `href`. No request is made.
    #[must_use]
    pub fn with_href(kind: ResourceKind, href: impl Into<String>) -> Self {
        let href = href.into();
        Self {
            kind: kind.narrow(&href),
            href: Some(href),
            fields: TrackedFields::unloaded(),
            state: ResourceState::Unloaded,
            create_target: None,
        }
    }

    /// Wraps a full document returned by the service.
    #[must_use]
    pub fn from_body(kind: ResourceKind, mut body: Map<String, Value>) -> Self {
        let href = take_href(&mut body);
        let kind = href.as_deref().map_or(kind, |h| kind.narrow(h));
        let state = if href.is_some() {
            ResourceState::Loaded
        } else {
            ResourceState::Embedded
        };
        Self {
            kind,
            href,
            fields: TrackedFields::from_existing(body),
            state,
            create_target: None,
        }
    }

    /// Wraps a reference value found inside another resource.
    ///
    /// `{"href": ...}` alone gives a lazy handle. Sibling fields next to the
    /// `href` pre-populate the handle and are served without a fetch. An
    /// object without `href` is an embedded value object.
    #[must_use]
    pub fn from_reference(kind: ResourceKind, reference: &Map<String, Value>) -> Self {
        let mut siblings = reference.clone();
        match take_href(&mut siblings) {
            Some(href) => {
                let mut resource = Self::with_href(kind, href);
                resource.fields.merge_remote(&siblings);
                resource
            }
            None => Self {
                kind,
                href: None,
                fields: TrackedFields::from_existing(siblings),
                state: ResourceState::Embedded,
                create_target: None,
            },
        }
    }

    /// Returns the kind of this resource.
    #[must_use]
    pub const fn kind(&self) -> ResourceKind {
        self.kind
    }

    /// Returns the `href`, or `None` before creation.
    #[must_use]
    pub fn href(&self) -> Option<&str> {
        self.href.as_deref()
    }

    /// Returns the lifecycle state.
    #[must_use]
    pub const fn state(&self) -> ResourceState {
        self.state
    }

    /// Returns `true` once every field is known locally.
    #[must_use]
    pub const fn is_materialized(&self) -> bool {
        matches!(self.state, ResourceState::Loaded | ResourceState::Embedded)
    }

    /// Returns `true` if local changes have not been saved.
    #[must_use]
    pub fn is_dirty(&self) -> bool {
        self.state != ResourceState::Deleted && self.fields.is_dirty()
    }

    /// Returns `true` after a successful `delete()`.
    #[must_use]
    pub fn is_deleted(&self) -> bool {
        self.state == ResourceState::Deleted
    }

    /// Returns the local value of `field` without fetching.
    #[must_use]
    pub fn peek(&self, field: &str) -> Option<&Value> {
        self.fields.get(field)
    }

    /// Returns a `{"href": ...}` reference to this resource.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Precondition`] if the resource has no `href`.
    pub fn reference(&self) -> Result<Value, ResourceError> {
        self.href
            .as_deref()
            .map(|href| serde_json::json!({ "href": href }))
            .ok_or_else(|| {
                ResourceError::precondition(format!(
                    "{} has no href to reference; save it first",
                    self.kind
                ))
            })
    }

    /// Returns the value of `field`, fetching the document if needed.
    ///
    /// Missing fields read as `Value::Null`.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Precondition`] after `delete()`,
    /// [`ResourceError::NotFound`] if the document is gone, or any other
    /// error raised by the fetch.
    pub async fn get(&mut self, client: &Client, field: &str) -> Result<Value, ResourceError> {
        self.ensure_live()?;

        if field == "href" {
            return Ok(self.href.clone().map_or(Value::Null, Value::String));
        }

        if let Some(value) = self.fields.get(field) {
            return Ok(value.clone());
        }

        if self.state == ResourceState::Unloaded {
            self.materialize(client).await?;
        }

        Ok(self.fields.get(field).cloned().unwrap_or(Value::Null))
    }

    /// Returns `field` decoded as `T`, or `None` when absent or null.
    ///
    /// # Errors
    ///
    /// Same as [`get`](Self::get), plus [`ResourceError::Deserialize`] if
    /// the value does not decode as `T`.
    pub async fn get_as<T: DeserializeOwned>(
        &mut self,
        client: &Client,
        field: &str,
    ) -> Result<Option<T>, ResourceError> {
        let value = self.get(client, field).await?;
        if value.is_null() {
            return Ok(None);
        }
        serde_json::from_value(value)
            .map(Some)
            .map_err(|source| ResourceError::Deserialize {
                field: field.to_string(),
                source,
            })
    }

    /// Returns a timestamp field such as `createdAt`.
    ///
    /// # Errors
    ///
    /// Same as [`get_as`](Self::get_as).
    pub async fn timestamp(
        &mut self,
        client: &Client,
        field: &str,
    ) -> Result<Option<DateTime<Utc>>, ResourceError> {
        self.get_as(client, field).await
    }

    /// Sets `field` locally and marks the resource dirty. No request is made.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Precondition`] after `delete()`, for `href`,
    /// and for fields the service owns (read-only fields and collections).
    pub fn set(&mut self, field: &str, value: impl Into<Value>) -> Result<(), ResourceError> {
        self.ensure_live()?;

        if field == "href" {
            return Err(ResourceError::precondition("href cannot be changed"));
        }

        if let Some(spec) = self.kind.field(field) {
            if !spec.is_writable() {
                return Err(ResourceError::precondition(format!(
                    "{}.{field} is managed by the service",
                    self.kind
                )));
            }
        }

        self.fields.set(field, value.into());
        Ok(())
    }

    /// Points the reference `field` at `target`.
    ///
    /// # Errors
    ///
    /// Same as [`set`](Self::set), plus [`ResourceError::Precondition`] if
    /// `target` has no `href`.
    pub fn set_link(&mut self, field: &str, target: &Self) -> Result<(), ResourceError> {
        let reference = target.reference()?;
        self.set(field, reference)
    }

    /// Persists local changes.
    ///
    /// A resource without `href` is created by POSTing to the collection it
    /// was instantiated from; otherwise the update is POSTed to its `href`.
    /// Saving a clean resource does nothing.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Precondition`] after `delete()`, for embedded
    /// value objects, and for new resources with no collection to be created
    /// in. Service rejections map as described in
    /// [`ResourceError`](crate::rest::ResourceError).
    pub async fn save(&mut self, client: &Client) -> Result<(), ResourceError> {
        self.ensure_live()?;

        if self.state == ResourceState::Embedded {
            return Err(ResourceError::precondition(format!(
                "embedded {} is saved through the resource that contains it",
                self.kind
            )));
        }

        if !self.fields.is_dirty() {
            tracing::debug!("{} has no changes to save", self.kind);
            return Ok(());
        }

        let payload = Value::Object(self.payload());

        let response = if let Some(href) = &self.href {
            tracing::debug!("Updating {} {}", self.kind, href);
            client.rest().post(href, payload, None).await?
        } else {
            let target = self.create_target.as_ref().ok_or_else(|| {
                ResourceError::precondition(format!(
                    "new {} has no collection to be created in",
                    self.kind
                ))
            })?;
            tracing::debug!("Creating {} in {}", self.kind, target.href);
            client
                .rest()
                .post(&target.href, payload, Some(target.query.clone()))
                .await?
        };

        let mut body = into_object(response.body);
        let returned_href = take_href(&mut body);

        if self.href.is_none() {
            let href = returned_href.ok_or_else(|| {
                ResourceError::Api(ApiError::from_body(
                    response.code,
                    &serde_json::json!({ "message": "created resource has no href" }),
                    None,
                ))
            })?;
            self.kind = self.kind.narrow(&href);
            self.href = Some(href);
        }

        if body.is_empty() {
            self.fields.mark_clean();
        } else {
            self.fields.reset(body);
        }
        self.state = ResourceState::Loaded;
        self.create_target = None;

        if let Some(href) = &self.href {
            client.cache().put(href, self.fields.as_map().clone()).await;
        }
        Ok(())
    }

    /// Deletes the resource on the service and drops its cache entry.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Precondition`] after a previous `delete()` or
    /// for a resource that was never saved.
    pub async fn delete(&mut self, client: &Client) -> Result<(), ResourceError> {
        self.ensure_live()?;
        let href = self.require_href("delete")?;

        tracing::debug!("Deleting {} {}", self.kind, href);
        client.rest().delete(&href).await?;
        client.cache().delete(&href).await;

        self.fields.clear();
        self.state = ResourceState::Deleted;
        Ok(())
    }

    /// Discards local state and cached data and fetches the document again.
    ///
    /// # Errors
    ///
    /// Same as [`get`](Self::get).
    pub async fn refresh(&mut self, client: &Client) -> Result<(), ResourceError> {
        self.ensure_live()?;
        let href = self.require_href("refresh")?;

        client.cache().delete(&href).await;
        self.fields = TrackedFields::unloaded();
        self.state = ResourceState::Unloaded;
        self.materialize(client).await
    }

    /// Resolves the reference or embedded object held in `field`.
    ///
    /// Returns `None` when the field is null or absent.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Precondition`] if `field` is not a reference
    /// for this kind, and [`ResourceError::Deserialize`] if the value is not
    /// an object.
    pub async fn link(
        &mut self,
        client: &Client,
        field: &str,
    ) -> Result<Option<Self>, ResourceError> {
        let target = match self.kind.field(field).map(|spec| spec.kind) {
            Some(FieldKind::Resource(target) | FieldKind::Embedded(target)) => target,
            _ => {
                return Err(ResourceError::precondition(format!(
                    "{}.{field} is not a resource reference",
                    self.kind
                )))
            }
        };

        let value = self.get(client, field).await?;
        let reference: Option<Map<String, Value>> =
            serde_json::from_value(value).map_err(|source| ResourceError::Deserialize {
                field: field.to_string(),
                source,
            })?;

        Ok(reference.map(|obj| Self::from_reference(target, &obj)))
    }

    /// Returns the collection referenced by `field`.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Precondition`] if `field` is not a collection
    /// of `T` for this kind or carries no `href`.
    pub async fn collection<T: ResourceType>(
        &mut self,
        client: &Client,
        field: &str,
    ) -> Result<Collection<T>, ResourceError> {
        let iterable = match self.kind.field(field).map(|spec| spec.kind) {
            Some(FieldKind::Collection { target, iterable }) if target == T::KIND => iterable,
            _ => {
                return Err(ResourceError::precondition(format!(
                    "{}.{field} is not a collection of {}",
                    self.kind,
                    T::KIND
                )))
            }
        };

        let value = self.get(client, field).await?;
        let href = value
            .get("href")
            .and_then(Value::as_str)
            .ok_or_else(|| {
                ResourceError::precondition(format!(
                    "{}.{field} has no collection href",
                    self.kind
                ))
            })?;

        Ok(Collection::new(href, iterable, client.page_size()))
    }

    async fn materialize(&mut self, client: &Client) -> Result<(), ResourceError> {
        let href = self.require_href("fetch")?;

        let body = if let Some(cached) = client.cache().get(&href).await {
            cached
        } else {
            tracing::debug!("Fetching {} {}", self.kind, href);
            let response = client.rest().get(&href, None).await?;
            let mut body = into_object(response.body);
            take_href(&mut body);
            client.cache().put(&href, body.clone()).await;
            body
        };

        self.fields.merge_remote(&body);
        self.state = ResourceState::Loaded;
        Ok(())
    }

    /// The fields sent on `save()`: every writable or unknown field, with
    /// references reduced to their `href`.
    fn payload(&self) -> Map<String, Value> {
        let mut payload = Map::new();
        for (key, value) in self.fields.as_map() {
            match self.kind.field(key).map(|spec| spec.kind) {
                Some(FieldKind::ReadOnly | FieldKind::Collection { .. }) => {}
                Some(FieldKind::Resource(_)) => match value.get("href") {
                    Some(href) => {
                        payload.insert(key.clone(), serde_json::json!({ "href": href }));
                    }
                    None if value.is_null() => {}
                    None => {
                        payload.insert(key.clone(), value.clone());
                    }
                },
                _ => {
                    payload.insert(key.clone(), value.clone());
                }
            }
        }
        payload
    }

    fn ensure_live(&self) -> Result<(), ResourceError> {
        if self.state == ResourceState::Deleted {
            return Err(ResourceError::precondition(format!(
                "{} {} has been deleted",
                self.kind,
                self.href.as_deref().unwrap_or_default()
            )));
        }
        Ok(())
    }

    fn require_href(&self, operation: &str) -> Result<String, ResourceError> {
        self.href.clone().ok_or_else(|| {
            ResourceError::precondition(format!(
                "cannot {operation} a {} that has no href",
                self.kind
            ))
        })
    }
}

/// A typed view over a [`Resource`] of a fixed kind.
///
/// Lifecycle methods forward to the wrapped resource.
#[allow(async_fn_in_trait)]
pub trait ResourceType: Sized {
    /// The kind this type wraps.
    const KIND: ResourceKind;

    /// Wraps an untyped resource.
    fn from_resource(resource: Resource) -> Self;

    /// Returns the wrapped resource.
    fn resource(&self) -> &Resource;

    /// Returns the wrapped resource mutably.
    fn resource_mut(&mut self) -> &mut Resource;

    /// Unwraps the resource.
    fn into_resource(self) -> Resource;

    /// Returns the `href`, or `None` before creation.
    fn href(&self) -> Option<&str> {
        self.resource().href()
    }

    /// Returns `true` if local changes have not been saved.
    fn is_dirty(&self) -> bool {
        self.resource().is_dirty()
    }

    /// See [`Resource::save`].
    ///
    /// # Errors
    ///
    /// See [`Resource::save`].
    async fn save(&mut self, client: &Client) -> Result<(), ResourceError> {
        self.resource_mut().save(client).await
    }

    /// See [`Resource::delete`].
    ///
    /// # Errors
    ///
    /// See [`Resource::delete`].
    async fn delete(&mut self, client: &Client) -> Result<(), ResourceError> {
        self.resource_mut().delete(client).await
    }

    /// See [`Resource::refresh`].
    ///
    /// # Errors
    ///
    /// See [`Resource::refresh`].
    async fn refresh(&mut self, client: &Client) -> Result<(), ResourceError> {
        self.resource_mut().refresh(client).await
    }

    /// Returns `createdAt`.
    ///
    /// # Errors
    ///
    /// See [`Resource::timestamp`].
    async fn created_at(&mut self, client: &Client) -> Result<Option<DateTime<Utc>>, ResourceError> {
        self.resource_mut().timestamp(client, "createdAt").await
    }

    /// Returns `modifiedAt`.
    ///
    /// # Errors
    ///
    /// See [`Resource::timestamp`].
    async fn modified_at(
        &mut self,
        client: &Client,
    ) -> Result<Option<DateTime<Utc>>, ResourceError> {
        self.resource_mut().timestamp(client, "modifiedAt").await
    }
}

/// Serializes a params struct to a query parameter map.
pub(crate) fn serialize_to_query<T: Serialize>(
    params: &T,
) -> Result<BTreeMap<String, String>, ResourceError> {
    let value = serde_json::to_value(params).map_err(ResourceError::Serialize)?;

    let mut query = BTreeMap::new();

    if let Value::Object(map) = value {
        for (key, val) in map {
            match val {
                Value::Null => {}
                Value::String(s) => {
                    query.insert(key, s);
                }
                Value::Number(n) => {
                    query.insert(key, n.to_string());
                }
                Value::Bool(b) => {
                    query.insert(key, b.to_string());
                }
                Value::Array(_) | Value::Object(_) => {
                    query.insert(key, val.to_string());
                }
            }
        }
    }

    Ok(query)
}

/// Turns a response body into a field map; anything else reads as empty.
pub(crate) fn into_object(body: Value) -> Map<String, Value> {
    match body {
        Value::Object(map) => map,
        _ => Map::new(),
    }
}

fn take_href(fields: &mut Map<String, Value>) -> Option<String> {
    match fields.remove("href") {
        Some(Value::String(href)) if !href.is_empty() => Some(href),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn map(value: Value) -> Map<String, Value> {
        value.as_object().cloned().unwrap()
    }

    #[test]
    fn test_new_resource_is_dirty_and_unsaved() {
        let resource = Resource::new(ResourceKind::Application);

        assert_eq!(resource.state(), ResourceState::New);
        assert!(resource.href().is_none());
        assert!(resource.is_dirty());
        assert!(!resource.is_materialized());
    }

    #[test]
    fn test_with_href_is_clean_and_unloaded() {
        let resource = Resource::with_href(
            ResourceKind::Application,
            "https://api.stormpath.com/v1/applications/abc",
        );

        assert_eq!(resource.state(), ResourceState::Unloaded);
        assert!(!resource.is_dirty());
    }

    #[test]
    fn test_from_reference_prepopulates_siblings() {
        let resource = Resource::from_reference(
            ResourceKind::Directory,
            &map(json!({
                "href": "https://api.stormpath.com/v1/directories/d1",
                "name": "my-dir"
            })),
        );

        assert_eq!(resource.href(), Some("https://api.stormpath.com/v1/directories/d1"));
        assert_eq!(resource.peek("name"), Some(&json!("my-dir")));
        assert!(resource.peek("href").is_none());
        assert!(!resource.is_materialized());
        assert!(!resource.is_dirty());
    }

    #[test]
    fn test_from_reference_narrows_account_store() {
        let group = Resource::from_reference(
            ResourceKind::AccountStore,
            &map(json!({"href": "https://api.stormpath.com/v1/groups/g1"})),
        );

        assert_eq!(group.kind(), ResourceKind::Group);
    }

    #[test]
    fn test_from_reference_without_href_is_embedded() {
        let config = Resource::from_reference(
            ResourceKind::AgentConfig,
            &map(json!({"pollInterval": 60})),
        );

        assert_eq!(config.state(), ResourceState::Embedded);
        assert!(config.is_materialized());
        assert_eq!(config.peek("pollInterval"), Some(&json!(60)));
    }

    #[test]
    fn test_set_rejects_href_and_read_only_fields() {
        let mut app = Resource::new(ResourceKind::Application);

        assert!(app.set("href", "x").unwrap_err().is_precondition());
        assert!(app.set("createdAt", "x").unwrap_err().is_precondition());
        assert!(app.set("accounts", json!({})).unwrap_err().is_precondition());
        assert!(app.set("name", "app").is_ok());
        assert!(app.set("customField", 1).is_ok());
    }

    #[test]
    fn test_set_link_requires_target_href() {
        let mut mapping = Resource::new(ResourceKind::AccountStoreMapping);
        let unsaved = Resource::new(ResourceKind::Directory);
        let saved = Resource::with_href(
            ResourceKind::Directory,
            "https://api.stormpath.com/v1/directories/d1",
        );

        assert!(mapping.set_link("accountStore", &unsaved).is_err());
        mapping.set_link("accountStore", &saved).unwrap();
        assert_eq!(
            mapping.peek("accountStore"),
            Some(&json!({"href": "https://api.stormpath.com/v1/directories/d1"}))
        );
    }

    #[test]
    fn test_payload_reduces_links_and_drops_service_fields() {
        let resource = Resource::from_body(
            ResourceKind::Application,
            map(json!({
                "href": "https://api.stormpath.com/v1/applications/a1",
                "name": "app",
                "createdAt": "2015-01-01T00:00:00.000Z",
                "accounts": {"href": "https://api.stormpath.com/v1/applications/a1/accounts"},
                "tenant": {"href": "https://api.stormpath.com/v1/tenants/t1", "name": "t"},
                "defaultAccountStoreMapping": null
            })),
        );

        let payload = Value::Object(resource.payload());

        assert_eq!(
            payload,
            json!({
                "name": "app",
                "tenant": {"href": "https://api.stormpath.com/v1/tenants/t1"}
            })
        );
    }

    #[test]
    fn test_payload_keeps_inline_objects_for_creation() {
        let mut directory = Resource::new(ResourceKind::Directory);
        directory.set("name", "ldap-dir").unwrap();
        directory
            .set("provider", json!({"providerId": "ldap", "agent": {"config": {}}}))
            .unwrap();

        let payload = directory.payload();

        assert_eq!(payload["provider"]["providerId"], json!("ldap"));
    }

    #[test]
    fn test_reference_requires_href() {
        let unsaved = Resource::new(ResourceKind::Directory);
        assert!(unsaved.reference().unwrap_err().is_precondition());
    }

    #[test]
    fn test_serialize_to_query_skips_none_and_stringifies() {
        #[derive(Serialize)]
        #[serde(rename_all = "camelCase")]
        struct Params {
            create_directory: Option<String>,
            limit: Option<u32>,
            expand: Option<String>,
            flag: bool,
        }

        let query = serialize_to_query(&Params {
            create_directory: Some("my-dir".to_string()),
            limit: Some(10),
            expand: None,
            flag: true,
        })
        .unwrap();

        assert_eq!(query.get("createDirectory").map(String::as_str), Some("my-dir"));
        assert_eq!(query.get("limit").map(String::as_str), Some("10"));
        assert_eq!(query.get("flag").map(String::as_str), Some("true"));
        assert!(!query.contains_key("expand"));
    }

    #[test]
    fn test_into_object_ignores_non_objects() {
        assert!(into_object(json!([1, 2])).is_empty());
        assert_eq!(into_object(json!({"a": 1})).len(), 1);
    }
}

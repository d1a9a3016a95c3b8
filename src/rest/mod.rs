//! Resource mapping over the Stormpath REST API.
//!
//! This module turns JSON documents into objects:
//!
//! - **[`Resource`]**: one remote document, fetched lazily, with dirty
//!   tracking, `save` and `delete`
//! - **[`ResourceType`]**: typed views such as
//!   [`Application`](resources::Application) over a [`Resource`]
//! - **[`Collection`]**: a filterable, paginated list that can create members
//! - **[`Cache`]**: the href-keyed document cache held by the client
//! - **[`ResourceError`]**: service errors mapped by status, plus local
//!   precondition failures
//!
//! Which fields of a kind are references, collections or read-only is
//! declared once in the [`schema`](ResourceKind::fields) tables.
//!
//! # Example
//!
//! ```rust,ignore
//! use stormpath::rest::ResourceType;
//! use serde_json::json;
//!
//! let apps = client.applications().await?;
//!
//! // Create
//! let mut app = apps.create(&client, &json!({"name": "my-app"})).await?;
//!
//! // Filter and iterate
//! let found = apps.query([("name", "my-app")]);
//! let mut iter = found.iter()?;
//! while let Some(mut app) = iter.next(&client).await? {
//!     println!("{:?}", app.description(&client).await?);
//! }
//!
//! // Delete
//! app.delete(&client).await?;
//! ```

mod cache;
mod collection;
mod errors;
mod resource;
pub mod resources;
mod response;
mod schema;
mod tracking;

pub use cache::{Cache, CacheStats};
pub use collection::{Collection, CollectionIter};
pub use errors::{ApiError, ResourceError};
pub use resource::{Resource, ResourceState, ResourceType};
pub use response::Page;
pub use schema::{FieldKind, FieldSpec, ResourceKind};
pub use tracking::TrackedFields;

//! Lazily paginated views over list endpoints.
//!
//! A [`Collection<T>`] is a value describing a server-side list: its `href`,
//! equality filters, starting offset and page size. Building or filtering a
//! collection never touches the network; every read method performs its own
//! requests.
//!
//! # Pagination
//!
//! Iteration fetches one page at a time in ascending offset order. It ends
//! when a page comes back shorter than the page size or when the reported
//! `size` is exhausted. Every call to [`Collection::iter`] starts over at the
//! collection's offset.
//!
//! # Non-iterable collections
//!
//! Some endpoints only accept creation requests (account store mappings at
//! the tenant root, an application's verification emails). Reading such a
//! collection fails with [`ResourceError::Precondition`] before any request
//! is sent; [`Collection::create`] still works.
//!
//! # Example
//!
//! ```rust,ignore
//! let apps = client.applications().await?.query([("name", "my-app")]);
//!
//! assert_eq!(apps.len(&client).await?, 1);
//!
//! let mut iter = apps.iter()?;
//! while let Some(app) = iter.next(&client).await? {
//!     println!("{:?}", app.href());
//! }
//! ```

use std::collections::{BTreeMap, VecDeque};
use std::fmt;
use std::marker::PhantomData;

use serde::Serialize;
use serde_json::Value;

use crate::client::Client;
use crate::config::DEFAULT_PAGE_SIZE;
use crate::rest::resource::{into_object, serialize_to_query, CreateTarget};
use crate::rest::{Page, Resource, ResourceError, ResourceType};

/// A lazily paginated, filterable view over a list endpoint.
pub struct Collection<T> {
    href: String,
    query: BTreeMap<String, String>,
    offset: u32,
    limit: u32,
    iterable: bool,
    _marker: PhantomData<fn() -> T>,
}

impl<T> Clone for Collection<T> {
    fn clone(&self) -> Self {
        Self {
            href: self.href.clone(),
            query: self.query.clone(),
            offset: self.offset,
            limit: self.limit,
            iterable: self.iterable,
            _marker: PhantomData,
        }
    }
}

impl<T> fmt::Debug for Collection<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Collection")
            .field("href", &self.href)
            .field("query", &self.query)
            .field("offset", &self.offset)
            .field("limit", &self.limit)
            .field("iterable", &self.iterable)
            .finish()
    }
}

impl<T: ResourceType> Collection<T> {
    /// Creates a collection at `href` starting at offset 0.
    ///
    /// A `limit` of zero falls back to the default page size.
    #[must_use]
    pub fn new(href: impl Into<String>, iterable: bool, limit: u32) -> Self {
        Self {
            href: href.into(),
            query: BTreeMap::new(),
            offset: 0,
            limit: if limit == 0 { DEFAULT_PAGE_SIZE } else { limit },
            iterable,
            _marker: PhantomData,
        }
    }

    /// Returns the collection `href`.
    #[must_use]
    pub fn href(&self) -> &str {
        &self.href
    }

    /// Returns the offset iteration starts at.
    #[must_use]
    pub const fn offset(&self) -> u32 {
        self.offset
    }

    /// Returns the page size.
    #[must_use]
    pub const fn limit(&self) -> u32 {
        self.limit
    }

    /// Returns `true` if the collection may be read.
    #[must_use]
    pub const fn is_iterable(&self) -> bool {
        self.iterable
    }

    /// Returns the equality filters.
    #[must_use]
    pub const fn filters(&self) -> &BTreeMap<String, String> {
        &self.query
    }

    /// Returns a new collection with `filters` merged over the current ones.
    ///
    /// The receiver is left untouched and nothing is fetched.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let updated = apps.query([("name", name.as_str()), ("description", "updated app")]);
    /// ```
    #[must_use]
    pub fn query<I, K, V>(&self, filters: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut next = self.clone();
        next.query
            .extend(filters.into_iter().map(|(k, v)| (k.into(), v.into())));
        next
    }

    /// Like [`query`](Self::query), taking the filters from a serializable
    /// struct. `None` fields are skipped.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Serialize`] if `params` cannot be encoded.
    pub fn query_with<P: Serialize>(&self, params: &P) -> Result<Self, ResourceError> {
        Ok(self.query(serialize_to_query(params)?))
    }

    /// Returns a new collection starting at `offset`.
    #[must_use]
    pub fn starting_at(&self, offset: u32) -> Self {
        Self {
            offset,
            ..self.clone()
        }
    }

    /// Returns a new collection with the given page size (1..=100).
    #[must_use]
    pub fn with_limit(&self, limit: u32) -> Self {
        Self {
            limit: limit.clamp(1, crate::config::MAX_PAGE_SIZE),
            ..self.clone()
        }
    }

    /// Fetches a single page.
    ///
    /// Every item is stored in the client cache under its own `href`.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Precondition`] for non-iterable collections,
    /// or any error raised by the request.
    pub async fn page(
        &self,
        client: &Client,
        offset: u32,
        limit: u32,
    ) -> Result<Page<T>, ResourceError> {
        self.ensure_iterable()?;

        let mut query = self.query.clone();
        query.insert("offset".to_string(), offset.to_string());
        query.insert("limit".to_string(), limit.to_string());

        tracing::debug!("Listing {} offset={} limit={}", self.href, offset, limit);
        let response = client.rest().get(&self.href, Some(query)).await?;
        let mut body = into_object(response.body);

        let raw_items = match body.remove("items") {
            Some(Value::Array(items)) => items,
            _ => Vec::new(),
        };

        let read_u32 = |key: &str| {
            body.get(key)
                .and_then(Value::as_u64)
                .and_then(|n| u32::try_from(n).ok())
        };
        let page_offset = read_u32("offset").unwrap_or(offset);
        let page_limit = read_u32("limit").unwrap_or(limit);
        let size = read_u32("size");

        let mut items = Vec::with_capacity(raw_items.len());
        for raw in raw_items {
            let fields = into_object(raw);
            if let Some(href) = fields.get("href").and_then(Value::as_str) {
                let mut cached = fields.clone();
                cached.remove("href");
                client.cache().put(href, cached).await;
            }
            items.push(T::from_resource(Resource::from_body(T::KIND, fields)));
        }

        Ok(Page::new(items, page_offset, page_limit, size))
    }

    /// Starts a fresh iteration at the collection's offset.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Precondition`] for non-iterable collections.
    pub fn iter(&self) -> Result<CollectionIter<T>, ResourceError> {
        self.ensure_iterable()?;
        Ok(CollectionIter {
            collection: self.clone(),
            next_offset: self.offset,
            buffer: VecDeque::new(),
            done: false,
        })
    }

    /// Fetches every item.
    ///
    /// # Errors
    ///
    /// Same as [`page`](Self::page).
    pub async fn all(&self, client: &Client) -> Result<Vec<T>, ResourceError> {
        let mut iter = self.iter()?;
        let mut items = Vec::new();
        while let Some(item) = iter.next(client).await? {
            items.push(item);
        }
        Ok(items)
    }

    /// Returns the number of items matching the filters.
    ///
    /// Sends exactly one request; the result is never cached.
    ///
    /// # Errors
    ///
    /// Same as [`page`](Self::page), plus [`ResourceError::Deserialize`]
    /// when the response carries no `size`.
    pub async fn len(&self, client: &Client) -> Result<usize, ResourceError> {
        let page = self.page(client, 0, 1).await?;
        page.size()
            .map(|size| size as usize)
            .ok_or_else(|| ResourceError::Deserialize {
                field: "size".to_string(),
                source: serde::de::Error::missing_field("size"),
            })
    }

    /// Returns `true` if no item matches the filters.
    ///
    /// # Errors
    ///
    /// Same as [`page`](Self::page).
    pub async fn is_empty(&self, client: &Client) -> Result<bool, ResourceError> {
        Ok(self.len(client).await? == 0)
    }

    /// Returns the first item.
    ///
    /// # Errors
    ///
    /// Same as [`page`](Self::page).
    pub async fn first(&self, client: &Client) -> Result<Option<T>, ResourceError> {
        self.get(client, 0).await
    }

    /// Returns the item at `index`, counted from the collection's offset.
    ///
    /// # Errors
    ///
    /// Same as [`page`](Self::page).
    pub async fn get(&self, client: &Client, index: u32) -> Result<Option<T>, ResourceError> {
        let page = self
            .page(client, self.offset.saturating_add(index), 1)
            .await?;
        Ok(page.into_inner().into_iter().next())
    }

    /// Creates a new item by POSTing `payload` to the collection.
    ///
    /// Works on non-iterable collections too.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Conflict`] or [`ResourceError::Validation`]
    /// when the service rejects the payload.
    pub async fn create<P: Serialize>(
        &self,
        client: &Client,
        payload: &P,
    ) -> Result<T, ResourceError> {
        self.create_with(client, payload, &()).await
    }

    /// Like [`create`](Self::create), adding `params` as query parameters
    /// (e.g. `createDirectory`).
    ///
    /// # Errors
    ///
    /// Same as [`create`](Self::create), plus [`ResourceError::Serialize`].
    pub async fn create_with<P: Serialize, Q: Serialize>(
        &self,
        client: &Client,
        payload: &P,
        params: &Q,
    ) -> Result<T, ResourceError> {
        let body = serde_json::to_value(payload).map_err(ResourceError::Serialize)?;
        if !body.is_object() {
            return Err(ResourceError::precondition(format!(
                "{} payload must be a JSON object",
                T::KIND
            )));
        }

        let mut item = Resource::new_in(
            T::KIND,
            CreateTarget {
                href: self.href.clone(),
                query: serialize_to_query(params)?,
            },
        );
        for (key, value) in into_object(body) {
            item.set(&key, value)?;
        }
        item.save(client).await?;

        Ok(T::from_resource(item))
    }

    /// Returns an empty item that is created in this collection on `save()`.
    #[must_use]
    pub fn instantiate(&self) -> T {
        T::from_resource(Resource::new_in(
            T::KIND,
            CreateTarget {
                href: self.href.clone(),
                query: BTreeMap::new(),
            },
        ))
    }

    pub(crate) fn ensure_iterable(&self) -> Result<(), ResourceError> {
        if self.iterable {
            Ok(())
        } else {
            Err(ResourceError::precondition(format!(
                "{} collection at {} cannot be iterated",
                T::KIND,
                self.href
            )))
        }
    }
}

/// An in-progress iteration over a [`Collection`].
///
/// Each call to [`next`](Self::next) that drains the current page fetches
/// the next one.
pub struct CollectionIter<T> {
    collection: Collection<T>,
    next_offset: u32,
    buffer: VecDeque<T>,
    done: bool,
}

impl<T> fmt::Debug for CollectionIter<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CollectionIter")
            .field("collection", &self.collection)
            .field("next_offset", &self.next_offset)
            .field("buffered", &self.buffer.len())
            .field("done", &self.done)
            .finish()
    }
}

impl<T: ResourceType> CollectionIter<T> {
    /// Returns the next item, fetching a page when the buffer runs dry.
    ///
    /// # Errors
    ///
    /// Any error raised by the page request.
    pub async fn next(&mut self, client: &Client) -> Result<Option<T>, ResourceError> {
        if self.buffer.is_empty() && !self.done {
            let limit = self.collection.limit;
            let page = self.collection.page(client, self.next_offset, limit).await?;

            let fetched = u32::try_from(page.len()).unwrap_or(u32::MAX);
            let end = self.next_offset.saturating_add(fetched);
            let exhausted = page.size().is_some_and(|size| end >= size);
            self.done = fetched == 0 || fetched < limit || exhausted;
            self.next_offset = end;
            self.buffer.extend(page);
        }
        Ok(self.buffer.pop_front())
    }
}

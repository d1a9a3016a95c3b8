//! A single page of a collection listing.
//!
//! [`Page<T>`] wraps the items of one `GET` against a collection together
//! with the pagination fields the service returns alongside them
//! (`offset`, `limit`, `size`). It implements `Deref<Target = Vec<T>>` so it
//! can be used like the item vector directly:
//!
//! ```rust,ignore
//! let page = applications.page(&client, 0, 25).await?;
//!
//! for app in page.iter() {
//!     println!("{:?}", app.href());
//! }
//! println!("{} of {:?}", page.len(), page.size());
//! ```

use std::ops::{Deref, DerefMut};

/// One page of a collection.
///
/// # Example
///
/// ```rust
/// use stormpath::rest::Page;
///
/// let page = Page::new(vec!["a", "b"], 0, 2, Some(5));
///
/// assert_eq!(page.len(), 2);
/// assert_eq!(page[0], "a");
/// assert!(page.has_next_page());
/// assert_eq!(page.next_offset(), Some(2));
/// ```
#[derive(Debug, Clone)]
pub struct Page<T> {
    /// The items on this page.
    items: Vec<T>,
    /// Offset of the first item.
    offset: u32,
    /// Requested page size.
    limit: u32,
    /// Total items in the collection, when the service reports it.
    size: Option<u32>,
}

impl<T> Page<T> {
    /// Creates a new page.
    #[must_use]
    pub const fn new(items: Vec<T>, offset: u32, limit: u32, size: Option<u32>) -> Self {
        Self {
            items,
            offset,
            limit,
            size,
        }
    }

    /// Consumes the page and returns its items.
    #[must_use]
    pub fn into_inner(self) -> Vec<T> {
        self.items
    }

    /// Returns the offset of the first item.
    #[must_use]
    pub const fn offset(&self) -> u32 {
        self.offset
    }

    /// Returns the requested page size.
    #[must_use]
    pub const fn limit(&self) -> u32 {
        self.limit
    }

    /// Returns the total number of items in the collection, or `None` if
    /// the response carried no `size`.
    #[must_use]
    pub const fn size(&self) -> Option<u32> {
        self.size
    }

    /// Returns `true` if items remain after this page.
    ///
    /// A page shorter than its limit is always the last one. Without a
    /// reported `size`, a full page is assumed to have a successor.
    #[must_use]
    pub fn has_next_page(&self) -> bool {
        let fetched = u32::try_from(self.items.len()).unwrap_or(u32::MAX);
        let end = self.offset.saturating_add(fetched);
        !self.items.is_empty()
            && fetched >= self.limit
            && self.size.map_or(true, |size| end < size)
    }

    /// Returns the offset of the next page, if there is one.
    #[must_use]
    pub fn next_offset(&self) -> Option<u32> {
        self.has_next_page().then(|| {
            let fetched = u32::try_from(self.items.len()).unwrap_or(u32::MAX);
            self.offset.saturating_add(fetched)
        })
    }
}

impl<T> Deref for Page<T> {
    type Target = Vec<T>;

    fn deref(&self) -> &Self::Target {
        &self.items
    }
}

impl<T> DerefMut for Page<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.items
    }
}

impl<T> IntoIterator for Page<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

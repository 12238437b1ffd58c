//! Keyset pagination envelope.

use std::ops::Deref;

use serde::{Deserialize, Serialize};

use crate::models::macros::str_opt_ref;

/// One page of a keyset-paginated listing.
///
/// Dereferences to the contained records; feed [`PageMeta::next`] or
/// [`PageMeta::prev`] back into the query to scroll.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Keyset<T> {
    meta: PageMeta,
    data: Vec<T>,
}

impl<T> Keyset<T> {
    /// Returns the pagination cursors for this page.
    pub fn meta(&self) -> &PageMeta {
        &self.meta
    }

    /// Returns the records on this page.
    pub fn data(&self) -> &[T] {
        &self.data
    }

    /// Consumes the page and returns the records.
    pub fn into_data(self) -> Vec<T> {
        self.data
    }
}

impl<T> Deref for Keyset<T> {
    type Target = Vec<T>;

    fn deref(&self) -> &Self::Target {
        &self.data
    }
}

/// Opaque cursors bracketing a keyset page.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PageMeta {
    /// Cursor to the following page.
    #[serde(default)]
    next: Option<String>,

    /// Cursor to the preceding page.
    #[serde(default)]
    prev: Option<String>,
}

impl PageMeta {
    /// Returns the cursor to the following page (if any).
    pub fn next(&self) -> Option<&str> {
        str_opt_ref!(self.next)
    }

    /// Returns the cursor to the preceding page (if any).
    pub fn prev(&self) -> Option<&str> {
        str_opt_ref!(self.prev)
    }
}

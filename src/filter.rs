//! Search filtering for fetched collections.
//!
//! The filter stage reduces a source collection to the items matching a
//! [`Query`]. Text criteria are matched case-insensitively as substrings of
//! any of the configured [`FieldSelector`]s; the optional category criterion
//! must match as well. The result keeps the relative order of the source.
//!
//! # Examples
//!
//! ```rust
//! use listing_widgets::filter::{filter, Query};
//! use listing_widgets::item::{FieldSelector, Item};
//!
//! #[derive(Clone, Debug, PartialEq)]
//! struct Post { id: &'static str, title: &'static str, kind: &'static str }
//!
//! impl Item for Post {
//!     fn id(&self) -> &str { self.id }
//!     fn category(&self) -> Option<&str> { Some(self.kind) }
//! }
//!
//! let posts = vec![
//!     Post { id: "1", title: "Poetry at dusk", kind: "news" },
//!     Post { id: "2", title: "Translating POETRY", kind: "blog" },
//!     Post { id: "3", title: "Festival map", kind: "news" },
//! ];
//! let fields: [FieldSelector<Post>; 1] = [|p| Some(p.title)];
//!
//! let hits = filter(&posts, &Query::new("poetry"), &fields);
//! assert_eq!(hits.len(), 2);
//!
//! let news = filter(&posts, &Query::new("poetry").with_category("news"), &fields);
//! assert_eq!(news, vec![posts[0].clone()]);
//! ```

use crate::item::{FieldSelector, Item};

/// The category value that disables category filtering.
pub const ALL_CATEGORIES: &str = "all";

/// The search text and optional category filter applied by a user.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Query {
    /// Free text matched against the searchable fields.
    pub text: String,
    /// Category filter; `None` or [`ALL_CATEGORIES`] matches every item.
    pub category: Option<String>,
}

impl Query {
    /// Creates a text-only query.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            category: None,
        }
    }

    /// Sets the category filter (builder pattern).
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Returns the search text, or `None` when it is blank.
    ///
    /// Non-blank text is matched as typed, surrounding spaces included.
    pub fn needle(&self) -> Option<&str> {
        (!self.text.trim().is_empty()).then_some(self.text.as_str())
    }

    /// Returns the effective category filter, or `None` when it matches everything.
    pub fn category_filter(&self) -> Option<&str> {
        self.category
            .as_deref()
            .map(str::trim)
            .filter(|c| !c.is_empty() && !c.eq_ignore_ascii_case(ALL_CATEGORIES))
    }

    /// Returns true if this query keeps every item.
    pub fn is_empty(&self) -> bool {
        self.needle().is_none() && self.category_filter().is_none()
    }
}

/// Returns true if `item` satisfies every non-empty criterion of `query`.
///
/// Text matching is an OR across `fields`; text and category are ANDed.
/// With no fields configured a non-empty text criterion matches nothing.
pub fn matches<I: Item>(item: &I, query: &Query, fields: &[FieldSelector<I>]) -> bool {
    if let Some(category) = query.category_filter() {
        match item.category() {
            Some(own) if own.eq_ignore_ascii_case(category) => {}
            _ => return false,
        }
    }

    match query.needle() {
        None => true,
        Some(needle) => {
            let needle = needle.to_lowercase();
            fields
                .iter()
                .filter_map(|field| field(item))
                .any(|value| value.to_lowercase().contains(&needle))
        }
    }
}

/// Returns the items of `items` matching `query`, in source order.
///
/// This is a total function: an empty source produces an empty result and
/// an empty query returns a copy of the source.
pub fn filter<I: Item>(items: &[I], query: &Query, fields: &[FieldSelector<I>]) -> Vec<I> {
    if query.is_empty() {
        return items.to_vec();
    }
    items
        .iter()
        .filter(|item| matches(*item, query, fields))
        .cloned()
        .collect()
}

//! The boundary between list views and the data source that feeds them.
//!
//! List views never talk to a backend themselves. A fetch collaborator
//! produces a [`FetchResult`] (typed items or a user-facing error) and the
//! view applies it. This module provides the pieces of that contract:
//!
//! - [`decode_items`] narrows a raw JSON response into typed items and
//!   rejects collections whose identifiers are missing or duplicated.
//! - [`RequestTracker`] tags requests so that a response arriving after a
//!   newer request was issued for the same view can be ignored.
//!
//! # Examples
//!
//! ```rust
//! use listing_widgets::fetch::{decode_items, RequestTracker};
//! use listing_widgets::item::Item;
//! use serde::Deserialize;
//!
//! #[derive(Clone, Deserialize)]
//! struct Blog { id: String, title: String }
//!
//! impl Item for Blog {
//!     fn id(&self) -> &str { &self.id }
//! }
//!
//! let blogs: Vec<Blog> = decode_items(r#"{ "data": [{ "id": "b1", "title": "Hello" }] }"#)?;
//! assert_eq!(blogs[0].title, "Hello");
//!
//! let mut tracker = RequestTracker::new();
//! let first = tracker.begin();
//! let second = tracker.begin();
//! assert!(!tracker.is_current(first));
//! assert!(tracker.is_current(second));
//! # Ok::<(), listing_widgets::fetch::FetchError>(())
//! ```

use crate::item::Item;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::collections::HashSet;
use thiserror::Error;

/// Why a fetch produced no usable collection.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The request never produced a response.
    #[error("network error: {0}")]
    Network(String),

    /// The backend answered with a failure.
    #[error("request rejected: {0}")]
    Rejected(String),

    /// The response body did not have the expected shape.
    #[error("malformed response: {0}")]
    Decode(#[from] serde_json::Error),

    /// An item carried an empty identifier.
    #[error("item at position {index} has no id")]
    MissingId {
        /// Position of the offending item in the response.
        index: usize,
    },

    /// Two items shared an identifier.
    #[error("duplicate item id {0:?}")]
    DuplicateId(String),
}

impl FetchError {
    /// Returns the message shown to the user in a non-blocking notification.
    pub fn user_message(&self) -> String {
        match self {
            FetchError::Network(_) => {
                "Could not reach the server. Showing the last loaded results.".to_string()
            }
            FetchError::Rejected(message) => message.clone(),
            FetchError::Decode(_) | FetchError::MissingId { .. } | FetchError::DuplicateId(_) => {
                "The server sent data we could not read.".to_string()
            }
        }
    }
}

/// The outcome of one fetch.
pub type FetchResult<T> = Result<Vec<T>, FetchError>;

#[derive(Deserialize)]
#[serde(untagged)]
enum Body<T> {
    Bare(Vec<T>),
    Envelope { data: Vec<T> },
}

/// Decodes a JSON response into items and validates their identifiers.
///
/// Both a bare array and an envelope of the form `{ "data": [...] }` are
/// accepted.
pub fn decode_items<T>(body: &str) -> FetchResult<T>
where
    T: DeserializeOwned + Item,
{
    let items = match serde_json::from_str::<Body<T>>(body) {
        Ok(Body::Bare(items)) | Ok(Body::Envelope { data: items }) => items,
        // untagged errors are opaque; re-parse as a bare list for a useful message
        Err(_) => serde_json::from_str::<Vec<T>>(body)?,
    };
    validate_ids(&items)?;
    Ok(items)
}

/// Checks that every item has a non-blank, unique identifier.
pub fn validate_ids<T: Item>(items: &[T]) -> Result<(), FetchError> {
    let mut seen = HashSet::with_capacity(items.len());
    for (index, item) in items.iter().enumerate() {
        let id = item.id();
        if id.trim().is_empty() {
            return Err(FetchError::MissingId { index });
        }
        if !seen.insert(id) {
            return Err(FetchError::DuplicateId(id.to_string()));
        }
    }
    Ok(())
}

/// Identifies one issued request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestId(u64);

impl RequestId {
    /// Returns the raw sequence number.
    pub fn get(self) -> u64 {
        self.0
    }
}

/// Issues request ids and remembers which one is current.
///
/// Only the most recently issued request may apply its response.
#[derive(Debug, Clone, Default)]
pub struct RequestTracker {
    latest: u64,
    settled: bool,
}

impl RequestTracker {
    /// Creates a tracker with no requests in flight.
    pub fn new() -> Self {
        Self::default()
    }

    /// Issues a new request id, superseding any earlier one.
    pub fn begin(&mut self) -> RequestId {
        self.latest += 1;
        self.settled = false;
        RequestId(self.latest)
    }

    /// Returns true if `id` is the latest issued request.
    pub fn is_current(&self, id: RequestId) -> bool {
        id.0 == self.latest
    }

    /// Marks `id` as settled if it is current.
    ///
    /// Returns false for superseded ids, whose responses must be dropped.
    pub fn finish(&mut self, id: RequestId) -> bool {
        if self.is_current(id) {
            self.settled = true;
            true
        } else {
            false
        }
    }

    /// Returns true while the latest request has not been settled.
    pub fn in_flight(&self) -> bool {
        self.latest > 0 && !self.settled
    }
}

//! The item contract shared by every list stage.
//!
//! Lists in this crate operate on already-fetched collections of records.
//! The only thing the engine needs to know about a record is its stable
//! identifier (used for selection and as a render key) and, optionally, the
//! category it belongs to. Searchable text is exposed per view through
//! [`FieldSelector`]s so the same record type can be searched differently
//! on different screens.
//!
//! # Examples
//!
//! ```rust
//! use listing_widgets::item::{FieldSelector, Item};
//!
//! #[derive(Clone)]
//! struct Speaker {
//!     id: String,
//!     name: String,
//!     bio: Option<String>,
//! }
//!
//! impl Item for Speaker {
//!     fn id(&self) -> &str {
//!         &self.id
//!     }
//! }
//!
//! let fields: [FieldSelector<Speaker>; 2] = [
//!     |s| Some(s.name.as_str()),
//!     |s| s.bio.as_deref(),
//! ];
//!
//! let s = Speaker { id: "sp-1".into(), name: "Amrita".into(), bio: None };
//! assert_eq!(fields[0](&s), Some("Amrita"));
//! assert_eq!(fields[1](&s), None);
//! ```

/// A record that can be listed, searched, grouped and selected.
///
/// Identifiers must be unique within one collection and stable across
/// re-fetches of the same logical record, since selection state is keyed
/// by them.
pub trait Item: Clone {
    /// Returns the stable unique identifier of this record.
    fn id(&self) -> &str;

    /// Returns the categorical value used by [`Query::category`](crate::filter::Query).
    ///
    /// Records without a category never match a specific category filter,
    /// but always match when the filter is unset or `"all"`.
    fn category(&self) -> Option<&str> {
        None
    }
}

/// Extracts one searchable text field from an item.
///
/// Returning `None` means the field is absent for this item and simply
/// does not participate in matching.
pub type FieldSelector<I> = fn(&I) -> Option<&str>;

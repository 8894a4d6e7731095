//! A list view composed of the filter, group, pager and selection stages.
//!
//! [`Model`] turns a flat, already-fetched collection into a searchable,
//! optionally grouped, paginated and selectable view:
//!
//! ```text
//! source ─▶ filter ─▶ [group + order] ─▶ paginate ─▶ page items
//!                                        selection (by id, orthogonal)
//! ```
//!
//! The model is driven either through its methods or by forwarding key
//! messages to [`Model::update`]. It never talks to a backend: fetch
//! responses are handed in with [`Model::apply_fetch`], and mutations come
//! back out as [`Action`]s for the application to run.
//!
//! ### Search states
//!
//! - `Unfiltered`: no search text
//! - `Filtering`: the user is typing; each keystroke re-filters and returns
//!   to page 1
//! - `FilterApplied`: typing finished with a query still applied
//!
//! ### Help integration
//!
//! `Model` implements [`key::KeyMap`](crate::key::KeyMap), so its short help
//! follows the current state (search, confirmation, or browsing).
//!
//! # Examples
//!
//! ```rust
//! use listing_widgets::config::ListingConfig;
//! use listing_widgets::group::by_trailing_number;
//! use listing_widgets::item::{FieldSelector, Item};
//! use listing_widgets::listing::Model;
//!
//! #[derive(Clone)]
//! struct Session { id: String, title: String, day: String }
//!
//! impl Item for Session {
//!     fn id(&self) -> &str { &self.id }
//! }
//!
//! fn title(s: &Session) -> Option<&str> { Some(&s.title) }
//!
//! let sessions = vec![
//!     Session { id: "s1".into(), title: "Poetry slam".into(), day: "Day 2".into() },
//!     Session { id: "s2".into(), title: "Opening".into(), day: "Day 1".into() },
//! ];
//!
//! let list = Model::new(sessions, vec![title as FieldSelector<Session>], ListingConfig::default())
//!     .with_grouping(|s: &Session| Some(s.day.clone()), by_trailing_number);
//!
//! let frame = list.presentation();
//! let groups = frame.groups.expect("grouped view");
//! assert_eq!(groups.labels().collect::<Vec<_>>(), vec!["Day 1", "Day 2"]);
//! ```

pub mod keys;
pub mod style;

mod model;
mod rendering;
mod types;

pub use keys::ListingKeyMap;
pub use model::Model;
pub use style::ListingStyles;
pub use types::{Action, FetchOutcome, FilterState, Grouping, LabelFn, Presentation};

#[cfg(test)]
mod tests;

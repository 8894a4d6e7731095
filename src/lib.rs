#![warn(missing_docs)]

//! # listing-widgets
//!
//! Searchable, grouped, paginated and selectable list views for
//! [bubbletea-rs](https://github.com/joshka/bubbletea-rs) applications.
//!
//! ## Overview
//!
//! Every collection page of a content site (blog posts, speakers, the
//! programme, a photo archive, videos) needs the same thing: take a flat
//! collection fetched from a backend, let the user search it, optionally
//! split it into labelled groups, show it a page at a time and pick items
//! for bulk actions. This crate provides that pipeline once:
//!
//! ```text
//! source ─▶ filter ─▶ [group + order] ─▶ paginate ─▶ page items
//!                                        selection (by id, orthogonal)
//! ```
//!
//! The stages are plain functions over slices ([`filter`], [`group`],
//! [`paginator`], [`selection`]) and can be used on their own. The
//! [`listing::Model`] composes them into one Elm-style component with
//! `update()` and `view()`.
//!
//! ## Quick Start
//!
//! ```rust
//! use listing_widgets::prelude::*;
//!
//! #[derive(Clone)]
//! struct Post { id: String, title: String }
//!
//! impl Item for Post {
//!     fn id(&self) -> &str { &self.id }
//! }
//!
//! fn title(p: &Post) -> Option<&str> { Some(&p.title) }
//!
//! let posts: Vec<Post> = (1..=25)
//!     .map(|i| Post { id: format!("p{i}"), title: format!("Post {i}") })
//!     .collect();
//!
//! let mut list = Listing::new(posts, vec![title as FieldSelector<Post>], ListingConfig::default());
//! assert_eq!(list.total_pages(), 3);
//!
//! list.set_search_text("post 2");
//! assert_eq!(list.total_matches(), 7); // "Post 2" and "Post 20".."Post 25"
//! assert_eq!(list.current_page(), 1);
//! ```
//!
//! ## Integration with bubbletea-rs
//!
//! The listing never talks to a backend. Key presses that need one come
//! back as an [`Action`]; the application runs it and hands the result
//! back with [`listing::Model::apply_fetch`] or
//! [`listing::Model::apply_mutation`]:
//!
//! ```rust
//! use listing_widgets::catalog::{self, Speaker};
//! use listing_widgets::prelude::*;
//! use bubbletea_rs::{Cmd, Msg};
//!
//! struct App {
//!     speakers: Listing<Speaker>,
//! }
//!
//! impl bubbletea_rs::Model for App {
//!     fn init() -> (Self, Option<Cmd>) {
//!         (Self { speakers: catalog::speakers(Vec::new()) }, None)
//!     }
//!
//!     fn update(&mut self, msg: Msg) -> Option<Cmd> {
//!         match self.speakers.update(&msg) {
//!             Some(Action::Refresh) => {
//!                 let _request = self.speakers.begin_fetch();
//!                 // spawn the fetch and apply_fetch() its result later
//!                 None
//!             }
//!             Some(Action::Mutate(mutation)) => {
//!                 // run the mutation against the backend, then report back
//!                 let outcome = MutationOutcome::success();
//!                 if let Some(Action::Refresh) = self.speakers.apply_mutation(&mutation, outcome) {
//!                     let _request = self.speakers.begin_fetch();
//!                 }
//!                 None
//!             }
//!             None => None,
//!         }
//!     }
//!
//!     fn view(&self) -> String {
//!         self.speakers.view()
//!     }
//! }
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`item`] | The `Item` trait and searchable field selectors |
//! | [`filter`] | Case-insensitive substring search and category filter |
//! | [`group`] | Insertion-ordered grouping with explicit group ordering |
//! | [`paginator`] | Page slicing, page-bar tokens and the pager component |
//! | [`selection`] | Id-based multi-selection |
//! | [`fetch`] | Response decoding and stale-response tracking |
//! | [`bulk`] | Confirmation-gated bulk mutations |
//! | [`listing`] | The composed list view |
//! | [`catalog`] | Presets for the festival collections |
//! | [`config`] | View configuration |
//! | [`key`] | Key bindings and help |
//!
//! ## Logging
//!
//! State transitions emit [`tracing`](https://docs.rs/tracing) events at
//! `debug` level, failed fetches and mutations at `warn`. The crate never
//! installs a subscriber.

pub mod bulk;
pub mod catalog;
pub mod config;
pub mod fetch;
pub mod filter;
pub mod group;
pub mod item;
pub mod key;
pub mod listing;
pub mod paginator;
pub mod selection;

pub use bulk::{BulkAction, Mutation, MutationOutcome};
pub use config::{ConfigError, ListingConfig};
pub use fetch::{decode_items, FetchError, FetchResult, RequestId, RequestTracker};
pub use filter::{Query, ALL_CATEGORIES};
pub use group::{Group, Groups, UNGROUPED};
pub use item::{FieldSelector, Item};
pub use key::{Binding, Help as KeyHelp, KeyMap};
pub use listing::Model as Listing;
pub use listing::{Action, FetchOutcome, FilterState, ListingKeyMap, ListingStyles, Presentation};
pub use paginator::{Model as Paginator, PageToken, Type as PaginationType};
pub use selection::Selection;

/// Prelude module for convenient imports.
///
/// ```rust
/// use listing_widgets::prelude::*;
///
/// let config = ListingConfig::default().with_page_size(6);
/// assert_eq!(config.page_size, 6);
/// ```
pub mod prelude {
    pub use crate::bulk::{Mutation, MutationOutcome};
    pub use crate::config::ListingConfig;
    pub use crate::fetch::{decode_items, FetchError, FetchResult};
    pub use crate::filter::Query;
    pub use crate::group::{by_label_descending, by_trailing_number};
    pub use crate::item::{FieldSelector, Item};
    pub use crate::key::{Binding, KeyMap};
    pub use crate::listing::Model as Listing;
    pub use crate::listing::{Action, FetchOutcome, FilterState};
    pub use crate::paginator::Type as PaginationType;
    pub use crate::selection::Selection;
}

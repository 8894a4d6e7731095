//! Supporting types for the listing view.

use crate::bulk::Mutation;
use crate::group::Groups;
use std::cmp::Ordering;
use std::fmt;

/// Renders the one-line label of an item in [`Model::view`](super::Model).
pub type LabelFn<I> = fn(&I) -> String;

/// Where the search input is in its lifecycle.
///
/// Mirrors the three states a user moves through when searching:
/// nothing typed, typing, and a query accepted and applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FilterState {
    /// No search text.
    #[default]
    Unfiltered,
    /// The user is typing; every keystroke re-filters.
    Filtering,
    /// Typing finished with a non-empty query still applied.
    FilterApplied,
}

impl fmt::Display for FilterState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FilterState::Unfiltered => write!(f, "unfiltered"),
            FilterState::Filtering => write!(f, "filtering"),
            FilterState::FilterApplied => write!(f, "filter applied"),
        }
    }
}

/// How a view partitions its filtered items.
pub struct Grouping<I> {
    pub(super) key_of: Box<dyn Fn(&I) -> Option<String> + Send + Sync>,
    pub(super) compare: fn(&str, &str) -> Ordering,
}

impl<I> Grouping<I> {
    /// Groups by `key_of`, presenting groups in the order given by `compare`.
    pub fn new<F>(key_of: F, compare: fn(&str, &str) -> Ordering) -> Self
    where
        F: Fn(&I) -> Option<String> + Send + Sync + 'static,
    {
        Self {
            key_of: Box::new(key_of),
            compare,
        }
    }

    /// Returns the group label for `item`, if it has one.
    pub fn key(&self, item: &I) -> Option<String> {
        (self.key_of)(item)
    }
}

impl<I> fmt::Debug for Grouping<I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Grouping").finish_non_exhaustive()
    }
}

/// Everything the rendering layer needs for one frame.
#[derive(Debug, Clone)]
pub struct Presentation<'a, I> {
    /// Items on the current page.
    pub page_items: &'a [I],
    /// The current page, 1-based.
    pub current_page: usize,
    /// Total pages, at least 1.
    pub total_pages: usize,
    /// Number of items matching the query; 0 means "no results".
    pub total_matches: usize,
    /// The page items regrouped, when the view is grouped.
    pub groups: Option<Groups<I>>,
    /// Selected ids in ascending order.
    pub selected_ids: Vec<&'a str>,
}

impl<I> Presentation<'_, I> {
    /// Returns true when the query matched nothing.
    pub fn no_results(&self) -> bool {
        self.total_matches == 0
    }
}

/// What happened to a fetch response handed to the view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchOutcome {
    /// The collection was replaced.
    Applied,
    /// A newer request was issued meanwhile; the response was dropped.
    Stale,
    /// The fetch failed; the previous collection is still shown.
    Failed,
}

/// Something the application must do in response to a key press.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Run this mutation against the backend, then report back with
    /// [`Model::apply_mutation`](super::Model::apply_mutation).
    Mutate(Mutation),
    /// Fetch the collection again and hand it to
    /// [`Model::apply_fetch`](super::Model::apply_fetch).
    Refresh,
}

//! Selection tracking for bulk actions.
//!
//! [`Selection`] is a set of item identifiers that lives beside the
//! filtered and paged view. Because it is keyed by stable ids rather than
//! positions, a selection survives re-filtering, paging and refreshes: an
//! id stays selected even while its item is filtered out of view.
//!
//! # Examples
//!
//! ```rust
//! use listing_widgets::selection::Selection;
//!
//! let mut selection = Selection::new();
//! selection.toggle("p1");
//! assert!(selection.is_selected("p1"));
//!
//! // "select all" only touches the visible ids...
//! selection.select_all(&["p2", "p3"]);
//! assert_eq!(selection.to_payload(), vec!["p1", "p2", "p3"]);
//!
//! // ...and a second call deselects exactly those ids again
//! selection.select_all(&["p2", "p3"]);
//! assert_eq!(selection.to_payload(), vec!["p1"]);
//! ```

use std::collections::BTreeSet;

/// A set of selected item identifiers.
///
/// Ids are kept ordered so bulk-action payloads are deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    ids: BTreeSet<String>,
}

impl Selection {
    /// Creates an empty selection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `id` if absent, removes it if present.
    ///
    /// Returns true if `id` is selected afterwards.
    pub fn toggle(&mut self, id: &str) -> bool {
        if self.ids.remove(id) {
            false
        } else {
            self.ids.insert(id.to_string());
            true
        }
    }

    /// Toggles "select all" for the visible ids.
    ///
    /// If every id in `visible` is already selected, exactly those ids are
    /// deselected. Otherwise the missing ones are added. Ids outside
    /// `visible` are never touched, and an empty `visible` is a no-op.
    pub fn select_all<S: AsRef<str>>(&mut self, visible: &[S]) {
        if visible.is_empty() {
            return;
        }
        if self.all_selected(visible) {
            for id in visible {
                self.ids.remove(id.as_ref());
            }
        } else {
            for id in visible {
                self.ids.insert(id.as_ref().to_string());
            }
        }
    }

    /// Returns true if `visible` is non-empty and every id in it is selected.
    pub fn all_selected<S: AsRef<str>>(&self, visible: &[S]) -> bool {
        !visible.is_empty() && visible.iter().all(|id| self.ids.contains(id.as_ref()))
    }

    /// Removes every id.
    pub fn clear(&mut self) {
        self.ids.clear();
    }

    /// Removes the given ids, e.g. after the items were deleted.
    ///
    /// Returns how many ids were actually removed.
    pub fn remove_ids<S: AsRef<str>>(&mut self, ids: &[S]) -> usize {
        let mut removed = 0;
        for id in ids {
            if self.ids.remove(id.as_ref()) {
                removed += 1;
            }
        }
        removed
    }

    /// Keeps only ids for which `keep` returns true.
    pub fn retain<F: FnMut(&str) -> bool>(&mut self, mut keep: F) {
        self.ids.retain(|id| keep(id));
    }

    /// Returns true if `id` is selected.
    pub fn is_selected(&self, id: &str) -> bool {
        self.ids.contains(id)
    }

    /// Number of selected ids.
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Returns true if nothing is selected.
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Iterates selected ids in ascending order.
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.ids.iter().map(String::as_str)
    }

    /// Returns the selected ids as an owned, ordered list for request payloads.
    pub fn to_payload(&self) -> Vec<String> {
        self.ids.iter().cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_twice_restores_membership() {
        let mut s = Selection::new();
        assert!(s.toggle("a"));
        assert!(s.is_selected("a"));
        assert!(!s.toggle("a"));
        assert!(s.is_empty());
    }

    #[test]
    fn test_select_all_adds_missing_only() {
        let mut s = Selection::new();
        s.toggle("b");
        s.toggle("z");
        s.select_all(&["a", "b", "c"]);
        assert_eq!(s.to_payload(), vec!["a", "b", "c", "z"]);
    }

    #[test]
    fn test_select_all_twice_deselects_visible_only() {
        let mut s = Selection::new();
        s.toggle("outside");
        let before = s.clone();
        s.select_all(&["a", "b"]);
        s.select_all(&["a", "b"]);
        assert_eq!(s, before);
    }

    #[test]
    fn test_select_all_empty_is_noop() {
        let mut s = Selection::new();
        s.toggle("a");
        s.select_all::<&str>(&[]);
        assert_eq!(s.len(), 1);
        assert!(!s.all_selected::<&str>(&[]));
    }

    #[test]
    fn test_select_all_owned_strings() {
        let mut s = Selection::new();
        let visible = vec!["x".to_string(), "y".to_string()];
        s.select_all(&visible);
        assert!(s.all_selected(&visible));
    }

    #[test]
    fn test_clear() {
        let mut s = Selection::new();
        s.select_all(&["a", "b"]);
        s.clear();
        assert!(s.is_empty());
    }

    #[test]
    fn test_remove_ids() {
        let mut s = Selection::new();
        s.select_all(&["a", "b", "c"]);
        assert_eq!(s.remove_ids(&["b", "missing"]), 1);
        assert_eq!(s.ids().collect::<Vec<_>>(), vec!["a", "c"]);
    }

    #[test]
    fn test_retain() {
        let mut s = Selection::new();
        s.select_all(&["keep-1", "drop", "keep-2"]);
        s.retain(|id| id.starts_with("keep"));
        assert_eq!(s.len(), 2);
    }
}

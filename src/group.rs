//! Grouping of filtered collections into labelled buckets.
//!
//! [`group`] walks a collection once and appends each item to the bucket
//! named by a key extractor. Buckets appear in first-seen order and items
//! keep their source order inside a bucket. Presentation order is always
//! requested explicitly with [`Groups::sort_by`], typically with one of the
//! comparators in this module:
//!
//! - [`by_trailing_number`] for labels such as `"Day 1"`, `"Day 12"`
//! - [`by_label_descending`] for year labels, newest first
//!
//! Items whose key is missing or blank are collected in the [`UNGROUPED`]
//! bucket instead of being dropped.
//!
//! # Examples
//!
//! ```rust
//! use listing_widgets::group::{by_trailing_number, group};
//!
//! let sessions = vec![("s1", "Day 2"), ("s2", "Day 1"), ("s3", "Day 2")];
//! let mut groups = group(&sessions, |s| Some(s.1.to_string()));
//! groups.sort_by(by_trailing_number);
//!
//! let labels: Vec<&str> = groups.labels().collect();
//! assert_eq!(labels, vec!["Day 1", "Day 2"]);
//! assert_eq!(groups.get("Day 2").map(|g| g.items.len()), Some(2));
//! ```

use std::cmp::Ordering;
use std::collections::HashMap;

/// Label of the bucket that receives items without a grouping key.
pub const UNGROUPED: &str = "Other";

/// A label plus the ordered items sharing it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Group<I> {
    /// The derived label, e.g. `"Day 3"` or `"2023"`.
    pub label: String,
    /// Members in source order.
    pub items: Vec<I>,
}

/// An insertion-ordered mapping from label to [`Group`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Groups<I> {
    groups: Vec<Group<I>>,
    index: HashMap<String, usize>,
}

impl<I> Default for Groups<I> {
    fn default() -> Self {
        Self {
            groups: Vec::new(),
            index: HashMap::new(),
        }
    }
}

impl<I> Groups<I> {
    /// Creates an empty mapping.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `item` to the bucket for `label`, creating the bucket on first use.
    pub fn push(&mut self, label: &str, item: I) {
        match self.index.get(label) {
            Some(&slot) => self.groups[slot].items.push(item),
            None => {
                self.index.insert(label.to_string(), self.groups.len());
                self.groups.push(Group {
                    label: label.to_string(),
                    items: vec![item],
                });
            }
        }
    }

    /// Returns the group for `label`, if any.
    pub fn get(&self, label: &str) -> Option<&Group<I>> {
        self.index.get(label).map(|&slot| &self.groups[slot])
    }

    /// Number of groups.
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    /// Returns true if there are no groups.
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Total number of items across all groups.
    pub fn item_count(&self) -> usize {
        self.groups.iter().map(|g| g.items.len()).sum()
    }

    /// Iterates groups in their current order.
    pub fn iter(&self) -> std::slice::Iter<'_, Group<I>> {
        self.groups.iter()
    }

    /// Iterates group labels in their current order.
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.groups.iter().map(|g| g.label.as_str())
    }

    /// Reorders groups by comparing their labels.
    ///
    /// The sort is stable, so labels comparing equal keep first-seen order.
    pub fn sort_by<F>(&mut self, mut compare: F)
    where
        F: FnMut(&str, &str) -> Ordering,
    {
        self.groups.sort_by(|a, b| compare(&a.label, &b.label));
        self.reindex();
    }

    fn reindex(&mut self) {
        self.index = self
            .groups
            .iter()
            .enumerate()
            .map(|(slot, g)| (g.label.clone(), slot))
            .collect();
    }
}

impl<I: Clone> Groups<I> {
    /// Concatenates all groups, in group order, into one flat collection.
    ///
    /// This is the collection the pager slices when a view is grouped.
    pub fn flatten(&self) -> Vec<I> {
        self.groups
            .iter()
            .flat_map(|g| g.items.iter().cloned())
            .collect()
    }
}

impl<I> IntoIterator for Groups<I> {
    type Item = Group<I>;
    type IntoIter = std::vec::IntoIter<Group<I>>;

    fn into_iter(self) -> Self::IntoIter {
        self.groups.into_iter()
    }
}

impl<'a, I> IntoIterator for &'a Groups<I> {
    type Item = &'a Group<I>;
    type IntoIter = std::slice::Iter<'a, Group<I>>;

    fn into_iter(self) -> Self::IntoIter {
        self.groups.iter()
    }
}

/// Partitions `items` by the label returned from `key_of`.
///
/// Missing or blank keys land in [`UNGROUPED`].
pub fn group<I, F>(items: &[I], key_of: F) -> Groups<I>
where
    I: Clone,
    F: Fn(&I) -> Option<String>,
{
    let mut groups = Groups::new();
    for item in items {
        let key = key_of(item);
        let label = match key.as_deref().map(str::trim) {
            Some(label) if !label.is_empty() => label,
            _ => UNGROUPED,
        };
        groups.push(label, item.clone());
    }
    groups
}

/// Parses the integer at the end of a label, e.g. `12` from `"Day 12"`.
pub fn trailing_number(label: &str) -> Option<u64> {
    let trimmed = label.trim_end();
    let digits = trimmed
        .char_indices()
        .rev()
        .take_while(|(_, c)| c.is_ascii_digit())
        .last()
        .map(|(start, _)| &trimmed[start..])?;
    digits.parse().ok()
}

/// Orders labels by their trailing integer, ascending.
///
/// Labels without a number sort after numbered ones, alphabetically.
pub fn by_trailing_number(a: &str, b: &str) -> Ordering {
    match (trailing_number(a), trailing_number(b)) {
        (Some(x), Some(y)) => x.cmp(&y).then_with(|| a.cmp(b)),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => a.cmp(b),
    }
}

/// Orders labels descending, e.g. `"2024"` before `"2023"`.
///
/// Numeric labels come first, compared numerically; other labels follow in
/// descending text order and [`UNGROUPED`] always goes last.
pub fn by_label_descending(a: &str, b: &str) -> Ordering {
    match (a == UNGROUPED, b == UNGROUPED) {
        (true, true) => return Ordering::Equal,
        (true, false) => return Ordering::Greater,
        (false, true) => return Ordering::Less,
        _ => {}
    }
    match (a.trim().parse::<i64>(), b.trim().parse::<i64>()) {
        (Ok(x), Ok(y)) => y.cmp(&x).then_with(|| b.cmp(a)),
        (Ok(_), Err(_)) => Ordering::Less,
        (Err(_), Ok(_)) => Ordering::Greater,
        (Err(_), Err(_)) => b.cmp(a),
    }
}

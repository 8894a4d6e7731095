//! The listing view model and its state transitions.

use super::keys::ListingKeyMap;
use super::style::ListingStyles;
use super::types::{Action, FetchOutcome, FilterState, Grouping, LabelFn, Presentation};
use crate::bulk::{BulkAction, Mutation, MutationOutcome};
use crate::config::ListingConfig;
use crate::fetch::{FetchResult, RequestId, RequestTracker};
use crate::filter::{self, Query};
use crate::group::{self, Groups};
use crate::item::{FieldSelector, Item};
use crate::paginator;
use crate::selection::Selection;
use std::cmp::Ordering;

/// A searchable, optionally grouped, paginated and selectable list.
///
/// The model owns one view's state: the source collection last handed to
/// it, the query, the page descriptor, the selection and a cursor within
/// the current page. Every transition recomputes the derived view
/// synchronously, so each render works from one consistent snapshot.
///
/// - Changing the query re-filters and goes back to page 1.
/// - Paging never re-filters.
/// - Replacing the collection (a refresh) re-filters and resets the page
///   to 1 only if it fell out of range.
/// - None of these touch the selection.
///
/// # Examples
///
/// ```rust
/// use listing_widgets::config::ListingConfig;
/// use listing_widgets::filter::Query;
/// use listing_widgets::item::{FieldSelector, Item};
/// use listing_widgets::listing::Model;
///
/// #[derive(Clone)]
/// struct Talk { id: String, title: String }
///
/// impl Item for Talk {
///     fn id(&self) -> &str { &self.id }
/// }
///
/// let talks: Vec<Talk> = (1..=25)
///     .map(|i| Talk { id: format!("t{i}"), title: format!("Talk {i}") })
///     .collect();
///
/// fn title(t: &Talk) -> Option<&str> {
///     Some(&t.title)
/// }
///
/// let mut list = Model::new(talks, vec![title as FieldSelector<Talk>], ListingConfig::default());
/// assert_eq!(list.total_pages(), 3);
///
/// list.set_page(3);
/// list.set_query(Query::new("talk 1"));
/// assert_eq!(list.current_page(), 1);
/// assert_eq!(list.total_matches(), 11); // "Talk 1" and "Talk 10".."Talk 19"
/// ```
pub struct Model<I: Item> {
    pub(super) config: ListingConfig,
    pub(super) source: Vec<I>,
    pub(super) fields: Vec<FieldSelector<I>>,
    pub(super) grouping: Option<Grouping<I>>,
    pub(super) label: LabelFn<I>,

    // Derived from `source`, `query` and `grouping` on every change.
    pub(super) visible: Vec<I>,

    pub(super) query: Query,
    pub(super) filter_state: FilterState,
    pub(super) paginator: paginator::Model,
    pub(super) selection: Selection,
    pub(super) cursor: usize,

    pub(super) bulk: BulkAction,
    pub(super) requests: RequestTracker,
    pub(super) status: Option<String>,
    pub(super) needs_refetch: bool,

    pub(super) keymap: ListingKeyMap,
    pub(super) styles: ListingStyles,
    pub(super) width: usize,
}

fn id_label<I: Item>(item: &I) -> String {
    item.id().to_string()
}

impl<I: Item> Model<I> {
    /// Creates a view over `items`, searchable through `fields`.
    pub fn new(items: Vec<I>, fields: Vec<FieldSelector<I>>, config: ListingConfig) -> Self {
        let paginator = paginator::Model::new()
            .with_per_page(config.page_size)
            .with_type(config.pagination_type);
        let mut keymap = ListingKeyMap::default();
        keymap.set_selection_enabled(config.selectable);

        let mut model = Self {
            config,
            source: items,
            fields,
            grouping: None,
            label: id_label::<I>,
            visible: Vec::new(),
            query: Query::default(),
            filter_state: FilterState::Unfiltered,
            paginator,
            selection: Selection::new(),
            cursor: 0,
            bulk: BulkAction::new(),
            requests: RequestTracker::new(),
            status: None,
            needs_refetch: false,
            keymap,
            styles: ListingStyles::default(),
            width: 80,
        };
        model.recompute();
        model
    }

    /// Groups the filtered items by `key_of`, ordered by `compare` (builder pattern).
    ///
    /// Pages are cut from the grouped order, so a page never interleaves groups.
    pub fn with_grouping<F>(mut self, key_of: F, compare: fn(&str, &str) -> Ordering) -> Self
    where
        F: Fn(&I) -> Option<String> + Send + Sync + 'static,
    {
        self.grouping = Some(Grouping::new(key_of, compare));
        self.recompute();
        self
    }

    /// Sets how an item is labelled in [`Model::view`] (builder pattern).
    ///
    /// Defaults to the item id.
    pub fn with_label(mut self, label: LabelFn<I>) -> Self {
        self.label = label;
        self
    }

    /// Replaces the styles (builder pattern).
    pub fn with_styles(mut self, styles: ListingStyles) -> Self {
        self.styles = styles;
        self
    }

    /// Sets the render width in columns (builder pattern).
    pub fn with_width(mut self, width: usize) -> Self {
        self.width = width;
        self
    }

    /// Replaces the key bindings (builder pattern).
    pub fn with_keymap(mut self, keymap: ListingKeyMap) -> Self {
        self.keymap = keymap;
        self.keymap.set_selection_enabled(self.config.selectable);
        self
    }

    // -- derived view ---------------------------------------------------

    fn recompute(&mut self) {
        let filtered = filter::filter(&self.source, &self.query, &self.fields);
        self.visible = match &self.grouping {
            Some(grouping) => {
                let mut groups = group::group(&filtered, |item| grouping.key(item));
                groups.sort_by(grouping.compare);
                groups.flatten()
            }
            None => filtered,
        };
        self.paginator.set_total_items(self.visible.len());
    }

    fn clamp_cursor(&mut self) {
        let on_page = self.paginator.items_on_page(self.visible.len());
        self.cursor = self.cursor.min(on_page.saturating_sub(1));
    }

    // -- query ------------------------------------------------------------

    /// Applies a new query: re-filters and returns to page 1.
    ///
    /// Outside of search typing the filter state follows the query:
    /// `FilterApplied` while it narrows the list, `Unfiltered` once empty.
    /// The selection is left alone.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use listing_widgets::catalog::{self, Speaker};
    /// use listing_widgets::filter::Query;
    /// use listing_widgets::listing::FilterState;
    ///
    /// let roster: Vec<Speaker> = (1..=20)
    ///     .map(|i| Speaker { id: format!("s{i}"), name: format!("Speaker {i}"), bio: None, designation: None })
    ///     .collect();
    /// let mut list = catalog::speakers(roster);
    /// list.set_page(3);
    ///
    /// list.set_query(Query::new("speaker 1"));
    /// assert_eq!(list.current_page(), 1);
    /// assert_eq!(list.total_matches(), 11);
    /// assert_eq!(list.filter_state(), FilterState::FilterApplied);
    /// ```
    pub fn set_query(&mut self, query: Query) {
        tracing::debug!(text = %query.text, category = ?query.category, "listing query changed");
        self.query = query;
        if self.filter_state != FilterState::Filtering {
            self.filter_state = if self.query.is_empty() {
                FilterState::Unfiltered
            } else {
                FilterState::FilterApplied
            };
        }
        self.recompute();
        self.paginator.page = 1;
        self.cursor = 0;
    }

    /// Replaces the search text, keeping the category filter.
    pub fn set_search_text(&mut self, text: impl Into<String>) {
        let query = Query {
            text: text.into(),
            category: self.query.category.clone(),
        };
        self.set_query(query);
    }

    /// Replaces the category filter, keeping the search text.
    ///
    /// `None` and `"all"` both show every category.
    pub fn set_category(&mut self, category: Option<&str>) {
        let query = Query {
            text: self.query.text.clone(),
            category: category.map(str::to_string),
        };
        self.set_query(query);
    }

    /// Clears search text and category and leaves search mode.
    pub fn clear_query(&mut self) {
        self.filter_state = FilterState::Unfiltered;
        self.set_query(Query::default());
    }

    /// Returns the current query.
    pub fn query(&self) -> &Query {
        &self.query
    }

    /// Returns the search input state.
    pub fn filter_state(&self) -> FilterState {
        self.filter_state
    }

    // -- source collection -------------------------------------------------

    /// Replaces the source collection, as after a completed fetch.
    ///
    /// The query is re-applied to the new collection and the page is reset
    /// to 1 if it no longer exists. The selection is kept.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use listing_widgets::catalog::{self, Speaker};
    ///
    /// fn roster(count: usize) -> Vec<Speaker> {
    ///     (1..=count)
    ///         .map(|i| Speaker { id: format!("s{i}"), name: format!("Speaker {i}"), bio: None, designation: None })
    ///         .collect()
    /// }
    ///
    /// let mut list = catalog::speakers(roster(24)); // 8 per page
    /// list.set_page(3);
    /// list.toggle("s1");
    ///
    /// list.set_items(roster(10));
    /// assert_eq!(list.total_pages(), 2);
    /// assert_eq!(list.current_page(), 1);
    /// assert!(list.selection().is_selected("s1"));
    /// ```
    pub fn set_items(&mut self, items: Vec<I>) {
        self.source = items;
        self.recompute();
        if self.paginator.clamp_page() {
            tracing::debug!(
                total_pages = self.paginator.total_pages,
                "page out of range after refresh, back to page 1"
            );
        }
        self.clamp_cursor();
        tracing::debug!(
            items = self.source.len(),
            matches = self.visible.len(),
            "listing source replaced"
        );
    }

    /// Returns the full source collection.
    pub fn items(&self) -> &[I] {
        &self.source
    }

    /// Returns the filtered (and grouped) collection the pager slices.
    pub fn visible_items(&self) -> &[I] {
        &self.visible
    }

    /// Number of items matching the query.
    pub fn total_matches(&self) -> usize {
        self.visible.len()
    }

    /// Returns the view configuration.
    pub fn config(&self) -> &ListingConfig {
        &self.config
    }

    // -- fetch collaborator ------------------------------------------------

    /// Registers a new fetch and returns its id.
    ///
    /// Responses to earlier fetches are ignored from now on.
    pub fn begin_fetch(&mut self) -> RequestId {
        self.requests.begin()
    }

    /// Returns true while the latest fetch has not been applied.
    pub fn is_loading(&self) -> bool {
        self.requests.in_flight()
    }

    /// Applies the response of fetch `request`.
    ///
    /// Superseded responses are dropped. On failure the previous collection
    /// stays on screen and the error becomes the status message.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use listing_widgets::catalog::{self, Video};
    /// use listing_widgets::fetch::{decode_items, FetchError};
    /// use listing_widgets::listing::FetchOutcome;
    ///
    /// let mut list = catalog::videos(Vec::new());
    /// let first = list.begin_fetch();
    /// let second = list.begin_fetch();
    ///
    /// let body = r#"{"data": [{"id": "v1", "title": "Opening night"}]}"#;
    /// assert_eq!(list.apply_fetch(second, decode_items::<Video>(body)), FetchOutcome::Applied);
    /// assert_eq!(list.apply_fetch(first, Ok(Vec::new())), FetchOutcome::Stale);
    ///
    /// let third = list.begin_fetch();
    /// let failed = Err(FetchError::Network("timed out".into()));
    /// assert_eq!(list.apply_fetch(third, failed), FetchOutcome::Failed);
    /// assert_eq!(list.items().len(), 1);
    /// assert!(list.status().is_some());
    /// ```
    pub fn apply_fetch(&mut self, request: RequestId, result: FetchResult<I>) -> FetchOutcome {
        if !self.requests.finish(request) {
            tracing::debug!(request = request.get(), "ignoring superseded fetch response");
            return FetchOutcome::Stale;
        }
        match result {
            Ok(items) => {
                self.needs_refetch = false;
                self.status = None;
                self.set_items(items);
                FetchOutcome::Applied
            }
            Err(err) => {
                tracing::warn!(error = %err, "fetch failed, keeping last loaded items");
                self.status = Some(err.user_message());
                FetchOutcome::Failed
            }
        }
    }

    /// Returns true after a successful mutation until the next applied fetch.
    pub fn needs_refetch(&self) -> bool {
        self.needs_refetch
    }

    // -- paging -------------------------------------------------------------

    /// The current page, 1-based.
    pub fn current_page(&self) -> usize {
        self.paginator.page
    }

    /// Total pages, at least 1.
    pub fn total_pages(&self) -> usize {
        self.paginator.total_pages
    }

    /// Jumps to `page`, limited to the existing pages. Does not re-filter.
    pub fn set_page(&mut self, page: usize) {
        self.paginator.set_page(page);
        self.cursor = 0;
    }

    /// Moves to the next page, if any.
    pub fn next_page(&mut self) {
        self.paginator.next_page();
        self.cursor = 0;
    }

    /// Moves to the previous page, if any.
    pub fn prev_page(&mut self) {
        self.paginator.prev_page();
        self.cursor = 0;
    }

    /// Returns the items on the current page.
    pub fn page_items(&self) -> &[I] {
        paginator::paginate(&self.visible, self.paginator.per_page, self.paginator.page).items
    }

    /// Returns the paginator.
    pub fn paginator(&self) -> &paginator::Model {
        &self.paginator
    }

    // -- cursor ---------------------------------------------------------------

    /// Index of the cursor within the current page.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Returns the item under the cursor.
    pub fn cursor_item(&self) -> Option<&I> {
        self.page_items().get(self.cursor)
    }

    /// Moves the cursor up, wrapping onto the previous page's last item.
    pub fn cursor_up(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
        } else if !self.paginator.on_first_page() {
            self.paginator.prev_page();
            self.cursor = self.page_items().len().saturating_sub(1);
        }
    }

    /// Moves the cursor down, wrapping onto the next page's first item.
    pub fn cursor_down(&mut self) {
        if self.cursor + 1 < self.page_items().len() {
            self.cursor += 1;
        } else if !self.paginator.on_last_page() {
            self.paginator.next_page();
            self.cursor = 0;
        }
    }

    // -- selection ------------------------------------------------------------

    /// Returns the selection.
    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    /// Toggles `id`. Returns true if it is selected afterwards.
    pub fn toggle(&mut self, id: &str) -> bool {
        self.selection.toggle(id)
    }

    /// Toggles the item under the cursor.
    pub fn toggle_cursor(&mut self) -> Option<bool> {
        let id = self.cursor_item()?.id().to_string();
        Some(self.selection.toggle(&id))
    }

    /// Selects every item matching the query, or deselects them if all
    /// already are. Items hidden by the query are not affected.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use listing_widgets::catalog::{self, ArchivePhoto};
    ///
    /// let photos: Vec<ArchivePhoto> = ["Crowd", "Stage", "Stage door"]
    ///     .iter()
    ///     .enumerate()
    ///     .map(|(i, caption)| ArchivePhoto {
    ///         id: format!("p{i}"),
    ///         caption: Some(caption.to_string()),
    ///         year: Some(2024),
    ///         event: None,
    ///     })
    ///     .collect();
    /// let mut list = catalog::archive(photos);
    /// list.toggle("p0");
    ///
    /// list.set_search_text("stage");
    /// list.select_all_visible();
    /// assert_eq!(list.selection().to_payload(), vec!["p0", "p1", "p2"]);
    ///
    /// list.select_all_visible();
    /// assert_eq!(list.selection().to_payload(), vec!["p0"]);
    /// ```
    pub fn select_all_visible(&mut self) {
        let ids: Vec<&str> = self.visible.iter().map(Item::id).collect();
        self.selection.select_all(&ids);
    }

    /// Like [`Model::select_all_visible`], limited to the current page.
    pub fn select_all_on_page(&mut self) {
        let page = paginator::paginate(&self.visible, self.paginator.per_page, self.paginator.page);
        let ids: Vec<&str> = page.items.iter().map(Item::id).collect();
        self.selection.select_all(&ids);
    }

    /// Clears the selection.
    pub fn clear_selection(&mut self) {
        self.selection.clear();
    }

    // -- mutations ----------------------------------------------------------

    /// Asks for confirmation to delete the selected items.
    ///
    /// Returns false when nothing is selected.
    pub fn request_delete_selected(&mut self) -> bool {
        let requested = self.bulk.request_delete(self.selection.to_payload());
        if requested {
            self.status = self
                .bulk
                .prompt(&self.config.item_singular, &self.config.item_plural);
        }
        requested
    }

    /// Asks for confirmation to delete one item.
    pub fn request_delete(&mut self, id: &str) -> bool {
        let requested = self.bulk.request_delete(vec![id.to_string()]);
        if requested {
            self.status = self
                .bulk
                .prompt(&self.config.item_singular, &self.config.item_plural);
        }
        requested
    }

    /// Returns true while a deletion awaits confirmation.
    pub fn is_confirming(&self) -> bool {
        self.bulk.is_pending()
    }

    /// Confirms the pending deletion, returning the mutation to run.
    pub fn confirm_pending(&mut self) -> Option<Mutation> {
        let mutation = self.bulk.confirm()?;
        self.status = None;
        Some(mutation)
    }

    /// Cancels the pending deletion.
    pub fn cancel_pending(&mut self) -> bool {
        let cancelled = self.bulk.cancel();
        if cancelled {
            self.status = None;
        }
        cancelled
    }

    /// Records the outcome of `mutation`.
    ///
    /// On success deleted ids leave the selection and [`Action::Refresh`] is
    /// returned so the host refetches; the collection itself is not patched.
    /// On failure nothing changes except the status message.
    pub fn apply_mutation(
        &mut self,
        mutation: &Mutation,
        outcome: MutationOutcome,
    ) -> Option<Action> {
        if outcome.ok {
            let removed = self.selection.remove_ids(mutation.deleted_ids());
            tracing::debug!(removed, "mutation succeeded, refetch required");
            self.needs_refetch = true;
            self.status = outcome.message;
            Some(Action::Refresh)
        } else {
            tracing::warn!(?mutation, message = ?outcome.message, "mutation failed");
            self.status = Some(
                outcome
                    .message
                    .unwrap_or_else(|| "The change could not be saved.".to_string()),
            );
            None
        }
    }

    /// Returns the current notification or confirmation prompt.
    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    /// Dismisses the current notification.
    pub fn clear_status(&mut self) {
        if !self.bulk.is_pending() {
            self.status = None;
        }
    }

    // -- presentation -------------------------------------------------------

    /// Returns everything the rendering layer needs for this frame.
    pub fn presentation(&self) -> Presentation<'_, I> {
        let page = paginator::paginate(&self.visible, self.paginator.per_page, self.paginator.page);
        let groups = self.grouping.as_ref().map(|grouping| {
            let mut groups: Groups<I> = group::group(page.items, |item| grouping.key(item));
            groups.sort_by(grouping.compare);
            groups
        });
        Presentation {
            page_items: page.items,
            current_page: self.paginator.page,
            total_pages: page.total_pages,
            total_matches: self.visible.len(),
            groups,
            selected_ids: self.selection.ids().collect(),
        }
    }

    // -- keys -----------------------------------------------------------------

    /// Handles a key press while search input is active.
    fn update_filtering(&mut self, key_msg: &bubbletea_rs::KeyMsg) {
        use crossterm::event::{KeyCode, KeyModifiers};

        if self.keymap.clear_filter.matches(key_msg) {
            self.clear_query();
        } else if self.keymap.accept_filter.matches(key_msg) {
            self.filter_state = if !self.query.is_empty() {
                FilterState::FilterApplied
            } else {
                FilterState::Unfiltered
            };
        } else {
            match key_msg.key {
                KeyCode::Char(c)
                    if !key_msg
                        .modifiers
                        .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
                {
                    let mut text = self.query.text.clone();
                    text.push(c);
                    self.set_search_text(text);
                }
                KeyCode::Backspace => {
                    let mut text = self.query.text.clone();
                    if text.pop().is_some() {
                        self.set_search_text(text);
                    }
                }
                _ => {}
            }
        }
    }

    /// Handles a message, returning work the application must carry out.
    ///
    /// Key presses drive the same transitions as the methods above.
    pub fn update(&mut self, msg: &bubbletea_rs::Msg) -> Option<Action> {
        let key_msg = msg.downcast_ref::<bubbletea_rs::KeyMsg>()?;

        if self.bulk.is_pending() {
            if self.keymap.confirm.matches(key_msg) {
                return self.confirm_pending().map(Action::Mutate);
            }
            if self.keymap.cancel.matches(key_msg) {
                self.cancel_pending();
            }
            return None;
        }

        if self.filter_state == FilterState::Filtering {
            self.update_filtering(key_msg);
            return None;
        }

        if self.paginator.update(msg) {
            self.cursor = 0;
        } else if self.keymap.cursor_up.matches(key_msg) {
            self.cursor_up();
        } else if self.keymap.cursor_down.matches(key_msg) {
            self.cursor_down();
        } else if self.keymap.filter.matches(key_msg) {
            self.filter_state = FilterState::Filtering;
        } else if self.keymap.clear_filter.matches(key_msg) {
            if self.filter_state == FilterState::FilterApplied {
                self.clear_query();
            } else {
                self.clear_status();
            }
        } else if self.keymap.toggle.matches(key_msg) {
            self.toggle_cursor();
        } else if self.keymap.select_all.matches(key_msg) {
            self.select_all_visible();
        } else if self.keymap.clear_selection.matches(key_msg) {
            self.clear_selection();
        } else if self.keymap.delete.matches(key_msg) {
            self.request_delete_selected();
        } else if self.keymap.refresh.matches(key_msg) {
            return Some(Action::Refresh);
        }
        None
    }
}

impl<I: Item> crate::key::KeyMap for Model<I> {
    fn short_help(&self) -> Vec<&crate::key::Binding> {
        if self.bulk.is_pending() {
            return vec![&self.keymap.confirm, &self.keymap.cancel];
        }
        match self.filter_state {
            FilterState::Filtering => vec![&self.keymap.accept_filter, &self.keymap.clear_filter],
            _ => vec![
                &self.keymap.cursor_up,
                &self.keymap.cursor_down,
                &self.paginator.keymap.prev_page,
                &self.paginator.keymap.next_page,
                &self.keymap.filter,
                &self.keymap.toggle,
            ],
        }
    }

    fn full_help(&self) -> Vec<Vec<&crate::key::Binding>> {
        vec![
            vec![
                &self.keymap.cursor_up,
                &self.keymap.cursor_down,
                &self.paginator.keymap.prev_page,
                &self.paginator.keymap.next_page,
                &self.paginator.keymap.first_page,
                &self.paginator.keymap.last_page,
            ],
            vec![
                &self.keymap.filter,
                &self.keymap.accept_filter,
                &self.keymap.clear_filter,
                &self.keymap.refresh,
            ],
            vec![
                &self.keymap.toggle,
                &self.keymap.select_all,
                &self.keymap.clear_selection,
                &self.keymap.delete,
            ],
        ]
    }
}

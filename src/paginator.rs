//! Windowed pagination over filtered collections.
//!
//! This module has two layers:
//!
//! - Pure functions ([`paginate`], [`total_pages`], [`page_tokens`]) that
//!   compute a page slice and the page-number bar for a collection. They
//!   never mutate anything and never clamp the requested page on their own.
//! - A stateful [`Model`] holding the page descriptor of one view (page
//!   size and 1-based current page) with navigation, key handling and a
//!   small `view()` for the page bar.
//!
//! Pages are 1-based throughout. An empty collection is "page 1 of 1";
//! callers tell that apart from "no results" by checking the item count.
//!
//! # Examples
//!
//! ```rust
//! use listing_widgets::paginator::{page_tokens, paginate, PageToken};
//!
//! let items: Vec<u32> = (1..=25).collect();
//! let page = paginate(&items, 10, 3);
//! assert_eq!(page.items, &[21, 22, 23, 24, 25]);
//! assert_eq!(page.total_pages, 3);
//! assert_eq!((page.start_index, page.end_index), (20, 25));
//!
//! use PageToken::{Ellipsis, Page};
//! assert_eq!(
//!     page_tokens(10, 5),
//!     vec![Page(1), Ellipsis, Page(4), Page(5), Page(6), Ellipsis, Page(10)]
//! );
//! ```

use crate::key::{self, KeyMap as KeyMapTrait};
use bubbletea_rs::{KeyMsg, Msg};
use crossterm::event::KeyCode;

/// Page bars with at most this many pages list every page.
pub const MAX_UNABRIDGED_PAGES: usize = 5;

/// One page of a collection plus the derived totals.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page<'a, I> {
    /// The items on the requested page.
    pub items: &'a [I],
    /// Total number of pages, at least 1.
    pub total_pages: usize,
    /// Index of the first item of the page in the paginated collection.
    pub start_index: usize,
    /// Exclusive end index of the page in the paginated collection.
    pub end_index: usize,
}

impl<I> Page<'_, I> {
    /// Returns true if the page holds no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Returns the number of pages needed for `len` items, at least 1.
///
/// A `page_size` of 0 is treated as 1.
pub fn total_pages(len: usize, page_size: usize) -> usize {
    len.div_ceil(page_size.max(1)).max(1)
}

/// Returns page `current_page` (1-based) of `items`.
///
/// A page past the end yields an empty slice with both indices at the
/// collection length; resetting the page is the caller's job. Page 0 is
/// read as page 1.
pub fn paginate<I>(items: &[I], page_size: usize, current_page: usize) -> Page<'_, I> {
    let page_size = page_size.max(1);
    let page = current_page.max(1);
    let start_index = (page - 1).saturating_mul(page_size).min(items.len());
    let end_index = start_index.saturating_add(page_size).min(items.len());
    Page {
        items: &items[start_index..end_index],
        total_pages: total_pages(items.len(), page_size),
        start_index,
        end_index,
    }
}

/// An entry of the page-number bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PageToken {
    /// A clickable page number (1-based).
    Page(usize),
    /// A gap marker between non-adjacent page numbers.
    Ellipsis,
}

/// Builds the page-number bar for `current_page` of `total_pages`.
///
/// Up to [`MAX_UNABRIDGED_PAGES`] pages are listed in full. Beyond that the
/// bar always shows the first and last page:
///
/// - near the start: `1 2 3 4 … N`
/// - near the end: `1 … N-3 N-2 N-1 N`
/// - otherwise: `1 … p-1 p p+1 … N`
pub fn page_tokens(total_pages: usize, current_page: usize) -> Vec<PageToken> {
    use PageToken::{Ellipsis, Page};

    let total = total_pages.max(1);
    if total <= MAX_UNABRIDGED_PAGES {
        return (1..=total).map(Page).collect();
    }

    let current = current_page.clamp(1, total);
    if current <= 3 {
        let mut tokens: Vec<PageToken> = (1..=4).map(Page).collect();
        tokens.extend([Ellipsis, Page(total)]);
        tokens
    } else if current >= total - 2 {
        let mut tokens = vec![Page(1), Ellipsis];
        tokens.extend((total - 3..=total).map(Page));
        tokens
    } else {
        let mut tokens = vec![Page(1), Ellipsis];
        tokens.extend((current - 1..=current + 1).map(Page));
        tokens.extend([Ellipsis, Page(total)]);
        tokens
    }
}

/// How [`Model::view`] renders the page bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Type {
    /// Page numbers with ellipses, e.g. `1 … 4 [5] 6 … 10`.
    #[default]
    Numbered,
    /// `current/total`, e.g. `5/10`.
    Arabic,
    /// One dot per page, e.g. `○ ● ○`.
    Dots,
}

/// Key bindings for paginator navigation.
#[derive(Debug, Clone)]
pub struct PaginatorKeyMap {
    /// Previous page. Default keys: PageUp, Left Arrow, 'h'.
    pub prev_page: key::Binding,
    /// Next page. Default keys: PageDown, Right Arrow, 'l'.
    pub next_page: key::Binding,
    /// First page. Default keys: Home, 'g'.
    pub first_page: key::Binding,
    /// Last page. Default keys: End, 'G'.
    pub last_page: key::Binding,
}

impl Default for PaginatorKeyMap {
    fn default() -> Self {
        Self {
            prev_page: key::Binding::new(vec![KeyCode::PageUp, KeyCode::Left, KeyCode::Char('h')])
                .with_help("←/h", "prev page"),
            next_page: key::Binding::new(vec![
                KeyCode::PageDown,
                KeyCode::Right,
                KeyCode::Char('l'),
            ])
            .with_help("→/l", "next page"),
            first_page: key::Binding::new(vec![KeyCode::Home, KeyCode::Char('g')])
                .with_help("g/home", "first page"),
            last_page: key::Binding::new(vec![KeyCode::End, KeyCode::Char('G')])
                .with_help("G/end", "last page"),
        }
    }
}

impl KeyMapTrait for PaginatorKeyMap {
    fn short_help(&self) -> Vec<&key::Binding> {
        vec![&self.prev_page, &self.next_page]
    }

    fn full_help(&self) -> Vec<Vec<&key::Binding>> {
        vec![vec![
            &self.prev_page,
            &self.next_page,
            &self.first_page,
            &self.last_page,
        ]]
    }
}

/// The page descriptor of one list view.
///
/// `Model` tracks the fixed page size, the 1-based current page and the
/// total page count of the collection it was last told about. It does not
/// hold items; use [`Model::slice_bounds`] or [`paginate`] to cut pages.
///
/// Setting a new item count recomputes `total_pages` but leaves `page`
/// alone. Views then call [`Model::clamp_page`], which resets an
/// out-of-range page to 1, before the next render.
///
/// # Examples
///
/// ```rust
/// use listing_widgets::paginator::Model;
///
/// let mut paginator = Model::new().with_per_page(10).with_total_items(95);
/// assert_eq!(paginator.total_pages, 10);
/// assert!(paginator.on_first_page());
///
/// paginator.set_page(10);
/// assert_eq!(paginator.slice_bounds(95), (90, 95));
///
/// // the filtered set shrinks to 12 matches
/// paginator.set_total_items(12);
/// assert_eq!(paginator.page, 10);
/// paginator.clamp_page();
/// assert_eq!(paginator.page, 1);
/// ```
#[derive(Debug, Clone)]
pub struct Model {
    /// How the page bar is rendered.
    pub paginator_type: Type,
    /// The current page, 1-based.
    pub page: usize,
    /// Items per page, at least 1.
    pub per_page: usize,
    /// Total number of pages, at least 1.
    pub total_pages: usize,

    /// Marker for the current page in Dots mode.
    pub active_dot: String,
    /// Marker for other pages in Dots mode.
    pub inactive_dot: String,
    /// Format for Arabic mode; the first `%d` is the page, the second the total.
    pub arabic_format: String,
    /// Gap marker in Numbered mode.
    pub ellipsis: String,

    /// Key bindings.
    pub keymap: PaginatorKeyMap,
}

impl Default for Model {
    fn default() -> Self {
        Self {
            paginator_type: Type::default(),
            page: 1,
            per_page: 10,
            total_pages: 1,
            active_dot: "•".to_string(),
            inactive_dot: "○".to_string(),
            arabic_format: "%d/%d".to_string(),
            ellipsis: "…".to_string(),
            keymap: PaginatorKeyMap::default(),
        }
    }
}

impl Model {
    /// Creates a paginator on page 1 of 1 with 10 items per page.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the number of items per page (builder pattern). Values below 1 become 1.
    ///
    /// # Arguments
    ///
    /// * `per_page` - Items shown on each page
    ///
    /// # Examples
    ///
    /// ```rust
    /// use listing_widgets::paginator::Model;
    ///
    /// let pager = Model::new().with_per_page(6).with_total_items(13);
    /// assert_eq!(pager.per_page, 6);
    /// assert_eq!(pager.total_pages, 3);
    ///
    /// assert_eq!(Model::new().with_per_page(0).per_page, 1);
    /// ```
    pub fn with_per_page(mut self, per_page: usize) -> Self {
        self.set_per_page(per_page);
        self
    }

    /// Sets the total item count (builder pattern).
    pub fn with_total_items(mut self, items: usize) -> Self {
        self.set_total_items(items);
        self
    }

    /// Sets the page bar style (builder pattern).
    pub fn with_type(mut self, paginator_type: Type) -> Self {
        self.paginator_type = paginator_type;
        self
    }

    /// Sets the number of items per page. Values below 1 become 1.
    pub fn set_per_page(&mut self, per_page: usize) {
        self.per_page = per_page.max(1);
    }

    /// Recomputes `total_pages` for `items` items.
    ///
    /// The current page is left untouched, even when it is now out of
    /// range; see [`Model::clamp_page`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use listing_widgets::paginator::Model;
    ///
    /// let mut pager = Model::new().with_total_items(25);
    /// pager.set_page(3);
    ///
    /// pager.set_total_items(12);
    /// assert_eq!(pager.total_pages, 2);
    /// assert_eq!(pager.page, 3);
    /// assert!(pager.clamp_page());
    /// assert_eq!(pager.page, 1);
    /// ```
    pub fn set_total_items(&mut self, items: usize) {
        self.total_pages = total_pages(items, self.per_page);
    }

    /// Resets the page to 1 if it lies outside `1..=total_pages`.
    ///
    /// Returns true if the page changed.
    pub fn clamp_page(&mut self) -> bool {
        if self.page == 0 || self.page > self.total_pages {
            self.page = 1;
            true
        } else {
            false
        }
    }

    /// Jumps to `page`, limited to `1..=total_pages`.
    pub fn set_page(&mut self, page: usize) {
        self.page = page.clamp(1, self.total_pages.max(1));
    }

    /// Returns the `(start, end)` slice bounds of the current page for a
    /// collection of `length` items.
    pub fn slice_bounds(&self, length: usize) -> (usize, usize) {
        let start = (self.page.max(1) - 1)
            .saturating_mul(self.per_page)
            .min(length);
        let end = start.saturating_add(self.per_page).min(length);
        (start, end)
    }

    /// Returns the number of items on the current page.
    pub fn items_on_page(&self, total_items: usize) -> usize {
        let (start, end) = self.slice_bounds(total_items);
        end - start
    }

    /// Moves to the previous page; no effect on page 1.
    pub fn prev_page(&mut self) {
        if !self.on_first_page() {
            self.page -= 1;
        }
    }

    /// Moves to the next page; no effect on the last page.
    pub fn next_page(&mut self) {
        if !self.on_last_page() {
            self.page += 1;
        }
    }

    /// Returns true on page 1.
    pub fn on_first_page(&self) -> bool {
        self.page <= 1
    }

    /// Returns true on the last page.
    pub fn on_last_page(&self) -> bool {
        self.page >= self.total_pages
    }

    /// Returns the page bar tokens for the current state.
    pub fn tokens(&self) -> Vec<PageToken> {
        page_tokens(self.total_pages, self.page)
    }

    /// Handles page navigation keys.
    ///
    /// Returns true if the message was a paginator key.
    pub fn update(&mut self, msg: &Msg) -> bool {
        let Some(key_msg) = msg.downcast_ref::<KeyMsg>() else {
            return false;
        };
        if self.keymap.next_page.matches(key_msg) {
            self.next_page();
        } else if self.keymap.prev_page.matches(key_msg) {
            self.prev_page();
        } else if self.keymap.first_page.matches(key_msg) {
            self.page = 1;
        } else if self.keymap.last_page.matches(key_msg) {
            self.page = self.total_pages;
        } else {
            return false;
        }
        true
    }

    /// Renders the page bar according to `paginator_type`.
    ///
    /// ```rust
    /// use listing_widgets::paginator::{Model, Type};
    ///
    /// let mut p = Model::new().with_per_page(10).with_total_items(100);
    /// p.set_page(5);
    /// assert_eq!(p.view(), "1 … 4 [5] 6 … 10");
    ///
    /// p.paginator_type = Type::Arabic;
    /// assert_eq!(p.view(), "5/10");
    ///
    /// let mut dots = Model::new().with_per_page(10).with_total_items(30).with_type(Type::Dots);
    /// dots.next_page();
    /// assert_eq!(dots.view(), "○ • ○");
    /// ```
    pub fn view(&self) -> String {
        match self.paginator_type {
            Type::Numbered => self.numbered_view(),
            Type::Arabic => self.arabic_view(),
            Type::Dots => self.dots_view(),
        }
    }

    fn numbered_view(&self) -> String {
        self.tokens()
            .into_iter()
            .map(|token| match token {
                PageToken::Page(n) if n == self.page => format!("[{n}]"),
                PageToken::Page(n) => n.to_string(),
                PageToken::Ellipsis => self.ellipsis.clone(),
            })
            .collect::<Vec<_>>()
            .join(" ")
    }

    fn arabic_view(&self) -> String {
        self.arabic_format
            .replacen("%d", &self.page.to_string(), 1)
            .replacen("%d", &self.total_pages.to_string(), 1)
    }

    fn dots_view(&self) -> String {
        (1..=self.total_pages)
            .map(|i| {
                if i == self.page {
                    self.active_dot.as_str()
                } else {
                    self.inactive_dot.as_str()
                }
            })
            .collect::<Vec<_>>()
            .join(" ")
    }
}

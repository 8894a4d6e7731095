//! Key bindings for the listing view.
//!
//! Page navigation keys live on the embedded paginator
//! ([`PaginatorKeyMap`](crate::paginator::PaginatorKeyMap)); this map holds
//! everything else.
//!
//! - **Cursor**: `↑/k`, `↓/j`
//! - **Search**: `/` to start, `enter` to apply, `esc` to clear
//! - **Selection**: `space/x` toggle, `a` select all, `c` clear
//! - **Bulk delete**: `d` to request, `y` to confirm, `n/esc` to cancel
//! - **Refresh**: `r`

use crate::key;
use crossterm::event::KeyCode;

/// Key bindings for cursor movement, search, selection and bulk actions.
#[derive(Debug, Clone)]
pub struct ListingKeyMap {
    /// Move the cursor up one item.
    pub cursor_up: key::Binding,
    /// Move the cursor down one item.
    pub cursor_down: key::Binding,
    /// Start typing a search.
    pub filter: key::Binding,
    /// Apply the typed search.
    pub accept_filter: key::Binding,
    /// Clear the search.
    pub clear_filter: key::Binding,
    /// Toggle selection of the item under the cursor.
    pub toggle: key::Binding,
    /// Select, or deselect, every matching item.
    pub select_all: key::Binding,
    /// Clear the selection.
    pub clear_selection: key::Binding,
    /// Ask to delete the selected items.
    pub delete: key::Binding,
    /// Confirm a pending deletion.
    pub confirm: key::Binding,
    /// Cancel a pending deletion.
    pub cancel: key::Binding,
    /// Fetch the collection again.
    pub refresh: key::Binding,
}

impl Default for ListingKeyMap {
    fn default() -> Self {
        Self {
            cursor_up: key::Binding::new(vec![KeyCode::Up, KeyCode::Char('k')])
                .with_help("↑/k", "up"),
            cursor_down: key::Binding::new(vec![KeyCode::Down, KeyCode::Char('j')])
                .with_help("↓/j", "down"),
            filter: key::Binding::new(vec![KeyCode::Char('/')]).with_help("/", "search"),
            accept_filter: key::Binding::new(vec![KeyCode::Enter, KeyCode::Tab])
                .with_help("enter", "apply search"),
            clear_filter: key::Binding::new(vec![KeyCode::Esc]).with_help("esc", "clear search"),
            toggle: key::Binding::new(vec![KeyCode::Char(' '), KeyCode::Char('x')])
                .with_help("space", "select"),
            select_all: key::Binding::new(vec![KeyCode::Char('a')]).with_help("a", "select all"),
            clear_selection: key::Binding::new(vec![KeyCode::Char('c')])
                .with_help("c", "clear selection"),
            delete: key::Binding::new(vec![KeyCode::Char('d'), KeyCode::Delete])
                .with_help("d", "delete selected"),
            confirm: key::Binding::new(vec![KeyCode::Char('y')]).with_help("y", "confirm"),
            cancel: key::Binding::new(vec![KeyCode::Char('n'), KeyCode::Esc])
                .with_help("n", "cancel"),
            refresh: key::Binding::new(vec![KeyCode::Char('r')]).with_help("r", "refresh"),
        }
    }
}

impl ListingKeyMap {
    /// Enables or disables the selection and bulk-action bindings.
    pub fn set_selection_enabled(&mut self, enabled: bool) {
        self.toggle.set_enabled(enabled);
        self.select_all.set_enabled(enabled);
        self.clear_selection.set_enabled(enabled);
        self.delete.set_enabled(enabled);
    }
}

//! Styles for the listing view.
//!
//! Built on lipgloss with adaptive colours, so the same defaults read well
//! on light and dark terminals.

use lipgloss_extras::prelude::*;

/// Ellipsis used when a line is truncated to the view width.
pub const ELLIPSIS: &str = "…";

/// Marker for a selected item.
pub const CHECKED: &str = "[x]";

/// Marker for an unselected item.
pub const UNCHECKED: &str = "[ ]";

/// Styling for every element of the listing view.
#[derive(Debug, Clone)]
pub struct ListingStyles {
    /// The title bar.
    pub title: Style,
    /// The search prompt while typing.
    pub filter_prompt: Style,
    /// Group headings such as "Day 1".
    pub group_header: Style,
    /// The line under the cursor.
    pub cursor_item: Style,
    /// Other item lines.
    pub normal_item: Style,
    /// The selection marker of selected items.
    pub selected_marker: Style,
    /// The "N items • M selected" line.
    pub status_bar: Style,
    /// Notifications and confirmation prompts.
    pub status_message: Style,
    /// Shown when nothing matches.
    pub no_items: Style,
    /// The page bar.
    pub pagination: Style,
    /// The short help line.
    pub help: Style,
}

impl Default for ListingStyles {
    fn default() -> Self {
        let subdued = AdaptiveColor {
            Light: "#9B9B9B",
            Dark: "#5C5C5C",
        };
        let highlight = AdaptiveColor {
            Light: "#EE6FF8",
            Dark: "#EE6FF8",
        };

        Self {
            title: Style::new()
                .background(Color::from("62"))
                .foreground(Color::from("230"))
                .padding(0, 1, 0, 1),
            filter_prompt: Style::new().foreground(AdaptiveColor {
                Light: "#04B575",
                Dark: "#ECFD65",
            }),
            group_header: Style::new().bold(true).underline(true),
            cursor_item: Style::new().foreground(highlight.clone()),
            normal_item: Style::new(),
            selected_marker: Style::new().foreground(highlight),
            status_bar: Style::new().foreground(AdaptiveColor {
                Light: "#A49FA5",
                Dark: "#777777",
            }),
            status_message: Style::new().foreground(AdaptiveColor {
                Light: "#B5042A",
                Dark: "#FD6565",
            }),
            no_items: Style::new().foreground(subdued.clone()),
            pagination: Style::new().foreground(subdued.clone()).padding_left(2),
            help: Style::new().foreground(subdued),
        }
    }
}

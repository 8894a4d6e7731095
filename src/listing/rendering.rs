//! Text rendering for the listing view.
//!
//! The layout is, top to bottom: title (or the search prompt), the items of
//! the current page (under group headings when grouped), the page bar, the
//! status line and a short help line.

use super::model::Model;
use super::style::{CHECKED, ELLIPSIS, UNCHECKED};
use super::types::FilterState;
use crate::item::Item;
use crate::key::{self, KeyMap};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Cuts `text` to at most `width` columns, ending in an ellipsis if shortened.
pub(crate) fn truncate(text: &str, width: usize) -> String {
    if UnicodeWidthStr::width(text) <= width {
        return text.to_string();
    }
    if width == 0 {
        return String::new();
    }
    let budget = width - UnicodeWidthStr::width(ELLIPSIS);
    let mut used = 0;
    let mut out = String::new();
    for c in text.chars() {
        let w = UnicodeWidthChar::width(c).unwrap_or(0);
        if used + w > budget {
            break;
        }
        used += w;
        out.push(c);
    }
    out.push_str(ELLIPSIS);
    out
}

impl<I: Item> Model<I> {
    fn view_header(&self) -> String {
        match self.filter_state {
            FilterState::Filtering => {
                let prompt = self.styles.filter_prompt.clone().render("Search: ");
                format!("{prompt}{}", self.query.text)
            }
            FilterState::FilterApplied => {
                let mut header = self.styles.title.clone().render(&self.config.title);
                if let Some(text) = self.query.needle() {
                    header.push_str(&format!(" “{text}”"));
                }
                if let Some(category) = self.query.category_filter() {
                    header.push_str(&format!(" in {category}"));
                }
                header
            }
            FilterState::Unfiltered => self.styles.title.clone().render(&self.config.title),
        }
    }

    fn view_item(&self, index: usize, item: &I) -> String {
        let cursor = if index == self.cursor { "> " } else { "  " };
        let marker = if !self.config.selectable {
            String::new()
        } else if self.selection.is_selected(item.id()) {
            format!("{} ", self.styles.selected_marker.clone().render(CHECKED))
        } else {
            format!("{UNCHECKED} ")
        };
        let prefix_width = 2 + if self.config.selectable { CHECKED.len() + 1 } else { 0 };
        let label = truncate(&(self.label)(item), self.width.saturating_sub(prefix_width));
        let style = if index == self.cursor {
            &self.styles.cursor_item
        } else {
            &self.styles.normal_item
        };
        format!("{cursor}{marker}{}", style.clone().render(&label))
    }

    fn view_items(&self) -> String {
        let presentation = self.presentation();
        if presentation.no_results() {
            let message = if self.source.is_empty() {
                format!("No {}.", self.config.item_plural)
            } else {
                format!("No {} match.", self.config.item_plural)
            };
            return self.styles.no_items.clone().render(&message);
        }

        let mut lines = Vec::new();
        match &presentation.groups {
            Some(groups) => {
                let mut index = 0;
                for group in groups {
                    lines.push(self.styles.group_header.clone().render(&group.label));
                    for item in &group.items {
                        lines.push(self.view_item(index, item));
                        index += 1;
                    }
                }
            }
            None => {
                for (index, item) in presentation.page_items.iter().enumerate() {
                    lines.push(self.view_item(index, item));
                }
            }
        }
        lines.join("\n")
    }

    fn view_status(&self) -> String {
        if let Some(message) = &self.status {
            return self.styles.status_message.clone().render(message);
        }
        let matches = self.visible.len();
        let mut status = format!("{matches} {}", self.config.item_noun(matches));
        if matches != self.source.len() {
            status.push_str(&format!(" of {}", self.source.len()));
        }
        if !self.selection.is_empty() {
            status.push_str(&format!(" • {} selected", self.selection.len()));
        }
        self.styles.status_bar.clone().render(&status)
    }

    /// Renders the whole view as a string.
    ///
    /// Grouped views show group headings above the items of each group on
    /// the current page; the cursor counts items in display order.
    pub fn view(&self) -> String {
        let mut sections = vec![self.view_header(), self.view_items()];

        if self.config.show_pagination && self.paginator.total_pages > 1 {
            sections.push(self.styles.pagination.clone().render(&self.paginator.view()));
        }

        sections.push(self.view_status());

        let help = key::short_help_line(&self.short_help());
        if !help.is_empty() {
            sections.push(self.styles.help.clone().render(&help));
        }

        sections.join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_short_text_untouched() {
        assert_eq!(truncate("Keynote", 20), "Keynote");
    }

    #[test]
    fn test_truncate_adds_ellipsis() {
        assert_eq!(truncate("Opening ceremony", 8), "Opening…");
    }

    #[test]
    fn test_truncate_wide_chars() {
        // each CJK char is two columns wide
        assert_eq!(truncate("文学祭典", 5), "文学…");
    }

    #[test]
    fn test_truncate_zero_width() {
        assert_eq!(truncate("abc", 0), "");
    }
}

//! Per-view configuration.
//!
//! [`ListingConfig`] carries the presentation settings a list view is built
//! with: the fixed page size, the title and the nouns used in the status
//! line, and how the page bar renders. It can be assembled with `with_*`
//! builders or loaded from JSON, with every field optional.
//!
//! ```rust
//! use listing_widgets::config::ListingConfig;
//! use listing_widgets::paginator::Type;
//!
//! let config = ListingConfig::from_json(r#"{ "pageSize": 12, "paginationType": "dots" }"#)?;
//! assert_eq!(config.page_size, 12);
//! assert_eq!(config.pagination_type, Type::Dots);
//! assert_eq!(config.title, "List");
//! # Ok::<(), listing_widgets::config::ConfigError>(())
//! ```

use crate::paginator::Type;
use serde::Deserialize;
use thiserror::Error;

/// Errors raised while loading a [`ListingConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The input was not valid JSON for a config.
    #[error("invalid listing config: {0}")]
    Parse(#[from] serde_json::Error),

    /// A page size of zero was requested.
    #[error("page size must be at least 1")]
    ZeroPageSize,
}

/// Presentation settings for one list view.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ListingConfig {
    /// Items per page; fixed for the lifetime of the view.
    pub page_size: usize,
    /// Heading shown above the list.
    pub title: String,
    /// Noun for one item in the status line.
    pub item_singular: String,
    /// Noun for several items in the status line.
    pub item_plural: String,
    /// Whether the page bar is rendered.
    pub show_pagination: bool,
    /// How the page bar is rendered.
    pub pagination_type: Type,
    /// Whether items can be selected for bulk actions.
    pub selectable: bool,
}

impl Default for ListingConfig {
    fn default() -> Self {
        Self {
            page_size: 10,
            title: "List".to_string(),
            item_singular: "item".to_string(),
            item_plural: "items".to_string(),
            show_pagination: true,
            pagination_type: Type::default(),
            selectable: false,
        }
    }
}

impl ListingConfig {
    /// Creates the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a configuration from JSON, filling gaps with defaults.
    pub fn from_json(input: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(input)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks invariants that serde cannot express.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.page_size == 0 {
            return Err(ConfigError::ZeroPageSize);
        }
        Ok(())
    }

    /// Sets the page size (builder pattern). Values below 1 become 1.
    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size.max(1);
        self
    }

    /// Sets the title (builder pattern).
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Sets the singular and plural item nouns (builder pattern).
    pub fn with_item_names(
        mut self,
        singular: impl Into<String>,
        plural: impl Into<String>,
    ) -> Self {
        self.item_singular = singular.into();
        self.item_plural = plural.into();
        self
    }

    /// Sets the page bar style (builder pattern).
    pub fn with_pagination_type(mut self, pagination_type: Type) -> Self {
        self.pagination_type = pagination_type;
        self
    }

    /// Enables or disables the page bar (builder pattern).
    pub fn with_pagination(mut self, show: bool) -> Self {
        self.show_pagination = show;
        self
    }

    /// Enables selection for bulk actions (builder pattern).
    pub fn with_selection(mut self, selectable: bool) -> Self {
        self.selectable = selectable;
        self
    }

    /// Returns the noun matching `count`.
    pub fn item_noun(&self, count: usize) -> &str {
        if count == 1 {
            &self.item_singular
        } else {
            &self.item_plural
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let c = ListingConfig::default();
        assert_eq!(c.page_size, 10);
        assert!(c.show_pagination);
        assert!(!c.selectable);
        assert_eq!(c.pagination_type, Type::Numbered);
    }

    #[test]
    fn test_from_json_partial() {
        let c = ListingConfig::from_json(r#"{"title":"Speakers","itemPlural":"speakers"}"#)
            .expect("valid config");
        assert_eq!(c.title, "Speakers");
        assert_eq!(c.item_plural, "speakers");
        assert_eq!(c.item_singular, "item");
        assert_eq!(c.page_size, 10);
    }

    #[test]
    fn test_from_json_rejects_zero_page_size() {
        let err = ListingConfig::from_json(r#"{"pageSize":0}"#).unwrap_err();
        assert!(matches!(err, ConfigError::ZeroPageSize));
    }

    #[test]
    fn test_from_json_rejects_garbage() {
        let err = ListingConfig::from_json("{not json").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
        assert!(err.to_string().starts_with("invalid listing config"));
    }

    #[test]
    fn test_builders() {
        let c = ListingConfig::new()
            .with_page_size(0)
            .with_title("Archive")
            .with_item_names("photo", "photos")
            .with_selection(true);
        assert_eq!(c.page_size, 1);
        assert_eq!(c.item_noun(1), "photo");
        assert_eq!(c.item_noun(3), "photos");
        assert!(c.selectable);
    }
}

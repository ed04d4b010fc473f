//! Construction-time configuration.
//!
//! Every field is optional. An absent field takes its default rather than
//! overriding it, so callers can omit keys freely, both in Rust and in JSON.

use crate::translations::TranslationsConfig;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const DEFAULT_PAGE_SIZE: usize = 10;
pub const DEFAULT_SIBLING_COUNT: usize = 1;
pub const DEFAULT_CURRENT_PAGE: usize = 1;
pub const DEFAULT_COUNT: usize = 0;

/// Errors that can occur while loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to parse pagination config: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Rendering hint for the page items. Passed through unchanged.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaginationType {
    #[default]
    Button,
    Link,
}

/// Optional overrides for the machine context.
///
/// # Example
///
/// ```rust
/// use pagemind::config::{PaginationConfig, PaginationType};
///
/// let config = PaginationConfig::from_json(r#"{"count": 95, "pageSize": 20, "type": "link"}"#)
///     .unwrap();
///
/// assert_eq!(config.count, Some(95));
/// assert_eq!(config.page_size, Some(20));
/// assert_eq!(config.current_page, None);
/// assert_eq!(config.pagination_type, Some(PaginationType::Link));
/// ```
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PaginationConfig {
    pub count: Option<usize>,
    pub page_size: Option<usize>,
    pub current_page: Option<usize>,
    pub sibling_count: Option<usize>,
    #[serde(rename = "type")]
    pub pagination_type: Option<PaginationType>,
    pub translations: Option<TranslationsConfig>,
}

impl PaginationConfig {
    /// Parse a config from a JSON object. Omitted and `null` keys both
    /// fall back to the defaults.
    pub fn from_json(input: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(input)?)
    }

    pub fn count(mut self, count: usize) -> Self {
        self.count = Some(count);
        self
    }

    pub fn page_size(mut self, page_size: usize) -> Self {
        self.page_size = Some(page_size);
        self
    }

    pub fn current_page(mut self, page: usize) -> Self {
        self.current_page = Some(page);
        self
    }

    pub fn sibling_count(mut self, siblings: usize) -> Self {
        self.sibling_count = Some(siblings);
        self
    }

    pub fn pagination_type(mut self, kind: PaginationType) -> Self {
        self.pagination_type = Some(kind);
        self
    }

    pub fn translations(mut self, translations: TranslationsConfig) -> Self {
        self.translations = Some(translations);
        self
    }
}

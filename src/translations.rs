//! Caller-visible label copy.
//!
//! The machine never reads these while transitioning; they ride along in
//! the context so a renderer has a single place to look them up.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

/// Produces the accessible label of a page item from `(page, total_pages)`.
pub type ItemLabelFn = Arc<dyn Fn(usize, usize) -> String + Send + Sync>;

/// Label strings and generators for a pagination control.
#[derive(Clone)]
pub struct Translations {
    pub root_label: String,
    pub prev_trigger_label: String,
    pub next_trigger_label: String,
    item_label: ItemLabelFn,
}

impl Translations {
    /// Label for the item linking to `page`.
    pub fn item_label(&self, page: usize, total_pages: usize) -> String {
        (self.item_label)(page, total_pages)
    }

    /// Return a copy with every present field of `overrides` applied.
    pub fn merged(&self, overrides: &TranslationsConfig) -> Self {
        let mut merged = self.clone();
        if let Some(label) = &overrides.root_label {
            merged.root_label = label.clone();
        }
        if let Some(label) = &overrides.prev_trigger_label {
            merged.prev_trigger_label = label.clone();
        }
        if let Some(label) = &overrides.next_trigger_label {
            merged.next_trigger_label = label.clone();
        }
        if let Some(item_label) = &overrides.item_label {
            merged.item_label = Arc::clone(item_label);
        }
        merged
    }
}

fn default_item_label(page: usize, total_pages: usize) -> String {
    if total_pages > 1 && page == total_pages {
        format!("last page, page {page}")
    } else {
        format!("page {page}")
    }
}

impl Default for Translations {
    fn default() -> Self {
        Self {
            root_label: "pagination".to_string(),
            prev_trigger_label: "previous page".to_string(),
            next_trigger_label: "next page".to_string(),
            item_label: Arc::new(default_item_label),
        }
    }
}

impl fmt::Debug for Translations {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Translations")
            .field("root_label", &self.root_label)
            .field("prev_trigger_label", &self.prev_trigger_label)
            .field("next_trigger_label", &self.next_trigger_label)
            .finish_non_exhaustive()
    }
}

/// Partial translations override. Absent fields keep their defaults.
#[derive(Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TranslationsConfig {
    pub root_label: Option<String>,
    pub prev_trigger_label: Option<String>,
    pub next_trigger_label: Option<String>,
    #[serde(skip)]
    pub item_label: Option<ItemLabelFn>,
}

impl TranslationsConfig {
    pub fn with_item_label<F>(mut self, label: F) -> Self
    where
        F: Fn(usize, usize) -> String + Send + Sync + 'static,
    {
        self.item_label = Some(Arc::new(label));
        self
    }
}

impl fmt::Debug for TranslationsConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TranslationsConfig")
            .field("root_label", &self.root_label)
            .field("prev_trigger_label", &self.prev_trigger_label)
            .field("next_trigger_label", &self.next_trigger_label)
            .field("item_label", &self.item_label.as_ref().map(|_| "<fn>"))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_item_label_marks_last_page() {
        let translations = Translations::default();

        assert_eq!(translations.item_label(1, 3), "page 1");
        assert_eq!(translations.item_label(3, 3), "last page, page 3");
    }

    #[test]
    fn single_page_is_not_called_last() {
        let translations = Translations::default();
        assert_eq!(translations.item_label(1, 1), "page 1");
    }

    #[test]
    fn merge_keeps_unspecified_defaults() {
        let overrides = TranslationsConfig {
            root_label: Some("results".to_string()),
            ..Default::default()
        };

        let merged = Translations::default().merged(&overrides);

        assert_eq!(merged.root_label, "results");
        assert_eq!(merged.prev_trigger_label, "previous page");
        assert_eq!(merged.next_trigger_label, "next page");
        assert_eq!(merged.item_label(2, 2), "last page, page 2");
    }

    #[test]
    fn merge_replaces_item_label() {
        let overrides =
            TranslationsConfig::default().with_item_label(|page, total| format!("{page}/{total}"));

        let merged = Translations::default().merged(&overrides);

        assert_eq!(merged.item_label(2, 7), "2/7");
    }

    #[test]
    fn config_deserializes_partial_json() {
        let config: TranslationsConfig =
            serde_json::from_str(r#"{"nextTriggerLabel":"forward"}"#).unwrap();

        assert_eq!(config.next_trigger_label.as_deref(), Some("forward"));
        assert!(config.root_label.is_none());
        assert!(config.item_label.is_none());
    }
}

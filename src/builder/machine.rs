//! Builder for constructing pagination machines.

use crate::builder::error::BuildError;
use crate::config::{PaginationConfig, PaginationType};
use crate::context::Context;
use crate::core::PageHistory;
use crate::machine::{PageChangeCallback, PageChangeDetails, PaginationMachine};
use crate::translations::TranslationsConfig;
use crate::validation::validate_context;
use std::sync::Arc;
use stillwater::validation::Validation;

/// Builder for constructing pagination machines with a fluent API.
///
/// Every setter is optional; unset fields take the documented defaults.
#[derive(Default)]
pub struct PaginationMachineBuilder {
    config: PaginationConfig,
    on_page_change: Option<PageChangeCallback>,
    history_limit: Option<usize>,
}

impl PaginationMachineBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Keep at most `limit` page changes in the machine's history.
    /// Zero disables the history; notifications are unaffected.
    pub fn history_limit(mut self, limit: usize) -> Self {
        self.history_limit = Some(limit);
        self
    }

    fn history(&self) -> PageHistory {
        self.history_limit
            .map_or_else(PageHistory::new, PageHistory::with_limit)
    }

    /// Replace the accumulated config wholesale, e.g. one loaded from JSON.
    pub fn config(mut self, config: PaginationConfig) -> Self {
        self.config = config;
        self
    }

    pub fn count(mut self, count: usize) -> Self {
        self.config.count = Some(count);
        self
    }

    pub fn page_size(mut self, page_size: usize) -> Self {
        self.config.page_size = Some(page_size);
        self
    }

    pub fn current_page(mut self, page: usize) -> Self {
        self.config.current_page = Some(page);
        self
    }

    pub fn sibling_count(mut self, siblings: usize) -> Self {
        self.config.sibling_count = Some(siblings);
        self
    }

    pub fn pagination_type(mut self, kind: PaginationType) -> Self {
        self.config.pagination_type = Some(kind);
        self
    }

    /// Override some of the default labels.
    pub fn translations(mut self, translations: TranslationsConfig) -> Self {
        self.config.translations = Some(translations);
        self
    }

    /// Override the item label generator, keeping any other overrides.
    pub fn item_label<F>(mut self, label: F) -> Self
    where
        F: Fn(usize, usize) -> String + Send + Sync + 'static,
    {
        self.config
            .translations
            .get_or_insert_with(TranslationsConfig::default)
            .item_label = Some(Arc::new(label));
        self
    }

    /// Register the page-change notification hook.
    pub fn on_page_change<F>(mut self, callback: F) -> Self
    where
        F: FnMut(PageChangeDetails) + Send + 'static,
    {
        self.on_page_change = Some(Box::new(callback));
        self
    }

    /// Build the machine as configured, without any validation.
    pub fn build(self) -> PaginationMachine {
        let context = Context::from_config(&self.config);
        let history = self.history();
        PaginationMachine::from_context(context, self.on_page_change, history)
    }

    /// Build the machine, rejecting contexts that fail the range checks.
    /// Every violation is reported, not just the first.
    pub fn try_build(self) -> Result<PaginationMachine, BuildError> {
        let context = Context::from_config(&self.config);
        let history = self.history();

        match validate_context(&context) {
            Validation::Success(_) => Ok(PaginationMachine::from_context(
                context,
                self.on_page_change,
                history,
            )),
            Validation::Failure(errors) => Err(BuildError::InvalidConfig {
                violations: errors.iter().cloned().collect(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::ConfigViolation;
    use std::sync::Mutex;

    #[test]
    fn build_merges_overrides_over_defaults() {
        let machine = PaginationMachineBuilder::new()
            .count(42)
            .sibling_count(3)
            .pagination_type(PaginationType::Link)
            .build();

        let ctx = machine.context();
        assert_eq!(ctx.count(), 42);
        assert_eq!(ctx.page_size(), 10);
        assert_eq!(ctx.current_page(), 1);
        assert_eq!(ctx.sibling_count(), 3);
        assert_eq!(ctx.pagination_type(), PaginationType::Link);
    }

    #[test]
    fn build_does_not_validate() {
        let machine = PaginationMachineBuilder::new()
            .count(10)
            .current_page(5)
            .build();

        assert_eq!(machine.current_page(), 5);
        assert!(!machine.is_valid_page());
    }

    #[test]
    fn try_build_reports_every_violation() {
        let result = PaginationMachineBuilder::new()
            .count(10)
            .page_size(0)
            .current_page(0)
            .try_build();

        match result {
            Err(BuildError::InvalidConfig { violations }) => {
                assert_eq!(
                    violations,
                    vec![ConfigViolation::ZeroPageSize, ConfigViolation::ZeroCurrentPage]
                );
            }
            Ok(_) => panic!("Expected invalid config"),
        }
    }

    #[test]
    fn try_build_error_message_lists_violations() {
        let err = PaginationMachineBuilder::new()
            .count(10)
            .current_page(3)
            .try_build()
            .unwrap_err();

        assert_eq!(
            err.to_string(),
            "Invalid pagination config: Current page 3 exceeds total pages (1)"
        );
    }

    #[test]
    fn try_build_accepts_consistent_config() {
        let machine = PaginationMachineBuilder::new()
            .count(30)
            .current_page(3)
            .try_build()
            .unwrap();

        assert_eq!(machine.total_pages(), 3);
    }

    #[test]
    fn config_from_json_feeds_builder() {
        let config = PaginationConfig::from_json(r#"{"count": 60, "pageSize": 15}"#).unwrap();
        let machine = PaginationMachineBuilder::new().config(config).build();

        assert_eq!(machine.total_pages(), 4);
    }

    #[test]
    fn item_label_keeps_other_translation_overrides() {
        let machine = PaginationMachineBuilder::new()
            .count(20)
            .translations(TranslationsConfig {
                root_label: Some("results".to_string()),
                ..Default::default()
            })
            .item_label(|page, total| format!("Page {page} of {total}"))
            .build();

        let translations = machine.context().translations();
        assert_eq!(translations.root_label, "results");
        assert_eq!(machine.context().item_label(2), "Page 2 of 2");
    }

    #[test]
    fn callback_is_wired_into_machine() {
        let seen = std::sync::Arc::new(Mutex::new(Vec::new()));
        let sink = std::sync::Arc::clone(&seen);
        let mut machine = PaginationMachineBuilder::new()
            .count(20)
            .on_page_change(move |details| sink.lock().unwrap().push(details.page))
            .build();

        machine.go_to_next_page();

        assert_eq!(*seen.lock().unwrap(), vec![2]);
    }
}

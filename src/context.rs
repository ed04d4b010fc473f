//! Machine context and the values derived from it.
//!
//! Derived values are plain methods over the current fields. Nothing is
//! cached, so they cannot fall out of step with the fields they read.

use crate::config::{
    PaginationConfig, PaginationType, DEFAULT_COUNT, DEFAULT_CURRENT_PAGE, DEFAULT_PAGE_SIZE,
    DEFAULT_SIBLING_COUNT,
};
use crate::translations::Translations;
use serde::{Deserialize, Serialize};

/// Half-open `[start, end)` index range of the items on the current page.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRange {
    pub start: usize,
    pub end: usize,
}

impl PageRange {
    /// Number of indices in the range; zero for an inverted range.
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    pub fn is_empty(&self) -> bool {
        self.start >= self.end
    }

    pub fn contains(&self, index: usize) -> bool {
        (self.start..self.end).contains(&index)
    }

    /// The items of `items` that fall into this range.
    ///
    /// The range is clamped to the collection, so the last page of a
    /// collection returns only the items that exist.
    ///
    /// ```rust
    /// use pagemind::PageRange;
    ///
    /// let items: Vec<u32> = (0..25).collect();
    /// let range = PageRange { start: 20, end: 30 };
    /// assert_eq!(range.slice(&items), &[20, 21, 22, 23, 24]);
    /// ```
    pub fn slice<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        let end = self.end.min(items.len());
        let start = self.start.min(end);
        &items[start..end]
    }
}

/// Configuration and mutable state owned by a pagination machine.
///
/// Fields are readable by anyone but only the machine's actions write
/// them.
#[derive(Clone, Debug)]
pub struct Context {
    pub(crate) count: usize,
    pub(crate) page_size: usize,
    pub(crate) current_page: usize,
    pub(crate) sibling_count: usize,
    pub(crate) pagination_type: PaginationType,
    pub(crate) translations: Translations,
}

impl Default for Context {
    fn default() -> Self {
        Self {
            count: DEFAULT_COUNT,
            page_size: DEFAULT_PAGE_SIZE,
            current_page: DEFAULT_CURRENT_PAGE,
            sibling_count: DEFAULT_SIBLING_COUNT,
            pagination_type: PaginationType::default(),
            translations: Translations::default(),
        }
    }
}

impl Context {
    /// Merge `config` over the defaults.
    ///
    /// No clamping or validation happens here: a `current_page` outside
    /// `[1, total_pages]` is kept as given.
    pub fn from_config(config: &PaginationConfig) -> Self {
        let defaults = Self::default();
        let translations = match &config.translations {
            Some(overrides) => defaults.translations.merged(overrides),
            None => defaults.translations,
        };

        Self {
            count: config.count.unwrap_or(defaults.count),
            page_size: config.page_size.unwrap_or(defaults.page_size),
            current_page: config.current_page.unwrap_or(defaults.current_page),
            sibling_count: config.sibling_count.unwrap_or(defaults.sibling_count),
            pagination_type: config.pagination_type.unwrap_or(defaults.pagination_type),
            translations,
        }
    }

    pub fn count(&self) -> usize {
        self.count
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn sibling_count(&self) -> usize {
        self.sibling_count
    }

    pub fn pagination_type(&self) -> PaginationType {
        self.pagination_type
    }

    pub fn translations(&self) -> &Translations {
        &self.translations
    }

    /// `ceil(count / page_size)`. A zero page size yields zero pages.
    pub fn total_pages(&self) -> usize {
        if self.page_size == 0 {
            return 0;
        }
        self.count.div_ceil(self.page_size)
    }

    pub fn previous_page(&self) -> Option<usize> {
        if self.current_page <= 1 {
            None
        } else {
            Some(self.current_page - 1)
        }
    }

    /// `None` when the current page is exactly the last page, or when no
    /// page number follows it.
    pub fn next_page(&self) -> Option<usize> {
        if self.current_page == self.total_pages() {
            None
        } else {
            self.current_page.checked_add(1)
        }
    }

    /// Both bounds saturate at `usize::MAX` for counts near the top of the
    /// index space.
    pub fn page_range(&self) -> PageRange {
        let start = self
            .current_page
            .saturating_sub(1)
            .saturating_mul(self.page_size);
        PageRange {
            start,
            end: start.saturating_add(self.page_size),
        }
    }

    pub fn is_valid_page(&self) -> bool {
        self.is_page_in_range(self.current_page)
    }

    /// Whether `page` lies in `[1, total_pages]` for the current count and
    /// page size.
    pub fn is_page_in_range(&self, page: usize) -> bool {
        page >= 1 && page <= self.total_pages()
    }

    /// Label for `page` from the configured translations.
    pub fn item_label(&self, page: usize) -> String {
        self.translations.item_label(page, self.total_pages())
    }
}

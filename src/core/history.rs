//! Page change history tracking.
//!
//! Keeps the most recent page changes the machine announced, in the
//! order it announced them.

use crate::event::EventKind;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::time::Duration;

/// Record of a single page change.
///
/// One record is written for every `onPageChange` notification, so a
/// dispatch that resolves to the current page leaves no trace here.
///
/// # Example
///
/// ```rust
/// use pagemind::core::PageChange;
/// use pagemind::EventKind;
/// use chrono::Utc;
///
/// let change = PageChange {
///     from: 1,
///     to: 2,
///     page_size: 10,
///     trigger: EventKind::NextPage,
///     timestamp: Utc::now(),
/// };
/// assert_eq!(change.to, 2);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PageChange {
    /// The page that was current before the change
    pub from: usize,
    /// The page that became current
    pub to: usize,
    /// Page size in effect when the change was announced
    pub page_size: usize,
    /// The event whose dispatch caused the change
    pub trigger: EventKind,
    /// When the change occurred
    pub timestamp: DateTime<Utc>,
}

/// Number of page changes kept when no explicit limit is given.
pub const DEFAULT_HISTORY_LIMIT: usize = 64;

/// Ordered, bounded history of page changes.
///
/// Only the most recent `limit` changes are kept; older ones are dropped
/// as new ones arrive. A limit of 0 keeps nothing. `record` returns a new
/// history with the change appended and leaves `self` untouched.
///
/// # Example
///
/// ```rust
/// use pagemind::core::{PageChange, PageHistory};
/// use pagemind::EventKind;
/// use chrono::Utc;
///
/// let history = PageHistory::new();
/// let history = history.record(PageChange {
///     from: 1,
///     to: 2,
///     page_size: 10,
///     trigger: EventKind::NextPage,
///     timestamp: Utc::now(),
/// });
/// let history = history.record(PageChange {
///     from: 2,
///     to: 5,
///     page_size: 10,
///     trigger: EventKind::SetPage,
///     timestamp: Utc::now(),
/// });
///
/// assert_eq!(history.pages(), vec![1, 2, 5]);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PageHistory {
    changes: VecDeque<PageChange>,
    limit: usize,
}

impl Default for PageHistory {
    fn default() -> Self {
        Self::new()
    }
}

impl PageHistory {
    pub fn new() -> Self {
        Self::with_limit(DEFAULT_HISTORY_LIMIT)
    }

    /// An empty history that keeps at most `limit` changes.
    pub fn with_limit(limit: usize) -> Self {
        Self {
            changes: VecDeque::with_capacity(limit.min(DEFAULT_HISTORY_LIMIT)),
            limit,
        }
    }

    /// Record a change, returning a new history.
    ///
    /// The existing history is left untouched.
    pub fn record(&self, change: PageChange) -> Self {
        let mut next = self.clone();
        next.push(change);
        next
    }

    /// Append in place, evicting the oldest changes beyond the limit.
    pub(crate) fn push(&mut self, change: PageChange) {
        if self.limit == 0 {
            return;
        }
        while self.changes.len() >= self.limit {
            self.changes.pop_front();
        }
        self.changes.push_back(change);
    }

    /// Pages visited in order: the starting page of the oldest kept change,
    /// then the target of each change. Empty when nothing was kept.
    pub fn pages(&self) -> Vec<usize> {
        let mut path = Vec::with_capacity(self.changes.len() + 1);
        if let Some(first) = self.changes.front() {
            path.push(first.from);
        }
        path.extend(self.changes.iter().map(|change| change.to));
        path
    }

    /// Time between the oldest and the newest kept change.
    ///
    /// Returns `None` if there are no changes.
    pub fn duration(&self) -> Option<Duration> {
        let (first, last) = (self.changes.front()?, self.changes.back()?);
        last.timestamp
            .signed_duration_since(first.timestamp)
            .to_std()
            .ok()
    }

    pub fn last(&self) -> Option<&PageChange> {
        self.changes.back()
    }

    /// Kept changes, oldest first.
    pub fn changes(&self) -> impl ExactSizeIterator<Item = &PageChange> + '_ {
        self.changes.iter()
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    pub fn len(&self) -> usize {
        self.changes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.changes.is_empty()
    }
}

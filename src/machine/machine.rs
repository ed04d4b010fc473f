//! Pagination machine that dispatches events against its context.

use crate::builder::PaginationMachineBuilder;
use crate::config::{PaginationConfig, PaginationType};
use crate::context::{Context, PageRange};
use crate::core::{PageChange, PageHistory, PaginationState};
use crate::event::{Event, EventKind};
use crate::machine::rule::{Action, TransitionTable};
use chrono::Utc;
use serde::Serialize;
use std::fmt;
use tracing::{debug, trace};

/// Payload passed to the page-change callback.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageChangeDetails {
    pub page: usize,
    pub page_size: usize,
}

/// Callback invoked whenever the effective page changes.
pub type PageChangeCallback = Box<dyn FnMut(PageChangeDetails) + Send>;

/// Actions run after any dispatch that changed the page size.
const PAGE_SIZE_WATCH: [Action; 1] = [Action::SetPageIfNeeded];

/// Outcome of a single dispatch.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DispatchResult {
    /// No rule's guard passed; the context is untouched
    Ignored,

    /// A rule fired
    Handled {
        /// Position of the rule in the event's rule list
        rule: usize,
        /// Whether the callback was notified during this dispatch
        page_changed: bool,
    },
}

impl DispatchResult {
    pub fn is_ignored(&self) -> bool {
        matches!(self, Self::Ignored)
    }

    pub fn page_changed(&self) -> bool {
        matches!(self, Self::Handled { page_changed: true, .. })
    }
}

/// Read-only view of the context and every derived value.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    pub state: PaginationState,
    pub count: usize,
    pub page_size: usize,
    pub current_page: usize,
    pub sibling_count: usize,
    #[serde(rename = "type")]
    pub pagination_type: PaginationType,
    pub total_pages: usize,
    pub previous_page: Option<usize>,
    pub next_page: Option<usize>,
    pub page_range: PageRange,
    pub is_valid_page: bool,
}

/// Pagination state machine.
///
/// Events are processed synchronously and completely (guard, actions,
/// watch) before `dispatch` returns. Derived values are recomputed on
/// every read.
///
/// # Example
///
/// ```rust
/// use pagemind::{Event, PaginationMachine};
///
/// let mut machine = PaginationMachine::builder().count(25).build();
///
/// machine.dispatch(Event::NextPage);
/// assert_eq!(machine.current_page(), 2);
/// assert_eq!(machine.page_range().start, 10);
///
/// // Out-of-range pages are ignored.
/// assert!(machine.dispatch(Event::SetPage { page: 9 }).is_ignored());
/// assert_eq!(machine.current_page(), 2);
/// ```
pub struct PaginationMachine {
    state: PaginationState,
    context: Context,
    table: TransitionTable,
    on_page_change: Option<PageChangeCallback>,
    history: PageHistory,
}

impl PaginationMachine {
    /// Create a machine from `config` merged over the defaults.
    pub fn new(config: PaginationConfig) -> Self {
        Self::from_context(Context::from_config(&config), None, PageHistory::new())
    }

    pub fn builder() -> PaginationMachineBuilder {
        PaginationMachineBuilder::new()
    }

    pub(crate) fn from_context(
        context: Context,
        on_page_change: Option<PageChangeCallback>,
        history: PageHistory,
    ) -> Self {
        Self {
            state: PaginationState::Idle,
            context,
            table: TransitionTable::pagination(),
            on_page_change,
            history,
        }
    }

    /// Process one event to completion.
    ///
    /// Guards are checked against the context as it was before the event.
    /// The callback fires at most once per dispatch.
    pub fn dispatch(&mut self, event: Event) -> DispatchResult {
        let kind = event.kind();

        let Some((rule, selected)) = self.table.select(&self.context, &event) else {
            trace!(event = %kind, "no transition rule applies, ignoring event");
            return DispatchResult::Ignored;
        };
        let actions = selected.actions().to_vec();

        debug!(event = %kind, rule, ?actions, "dispatching event");

        let page_before = self.context.current_page;
        let page_size_before = self.context.page_size;

        for action in actions {
            self.run_action(action, &event);
        }

        if self.context.page_size != page_size_before {
            for action in PAGE_SIZE_WATCH {
                self.run_action(action, &event);
            }
        }

        DispatchResult::Handled {
            rule,
            page_changed: self.context.current_page != page_before,
        }
    }

    pub fn set_count(&mut self, count: usize) -> DispatchResult {
        self.dispatch(Event::SetCount { count })
    }

    pub fn go_to_page(&mut self, page: usize) -> DispatchResult {
        self.dispatch(Event::SetPage { page })
    }

    pub fn set_page_size(&mut self, size: usize) -> DispatchResult {
        self.dispatch(Event::SetPageSize { size })
    }

    pub fn go_to_previous_page(&mut self) -> DispatchResult {
        self.dispatch(Event::PreviousPage)
    }

    pub fn go_to_next_page(&mut self) -> DispatchResult {
        self.dispatch(Event::NextPage)
    }

    fn run_action(&mut self, action: Action, event: &Event) {
        let trigger = event.kind();
        match (action, event) {
            (Action::SetCount, Event::SetCount { count }) => {
                self.context.count = *count;
            }
            (Action::SetPage, Event::SetPage { page }) => {
                self.update_page(*page, trigger);
            }
            (Action::SetPageSize, Event::SetPageSize { size }) => {
                self.context.page_size = *size;
            }
            (Action::GoToFirstPage, _) => {
                self.update_page(1, trigger);
            }
            (Action::GoToPrevPage, _) => {
                let page = self.context.current_page.saturating_sub(1);
                self.update_page(page, trigger);
            }
            (Action::GoToNextPage, _) => {
                let page = self.context.current_page.saturating_add(1);
                self.update_page(page, trigger);
            }
            (Action::SetPageIfNeeded, _) => {
                if !self.context.is_valid_page() {
                    debug!(
                        page = self.context.current_page,
                        total_pages = self.context.total_pages(),
                        "current page out of range after page size change"
                    );
                    self.update_page(1, trigger);
                }
            }
            (action, event) => {
                trace!(action = action.name(), event = %event.kind(), "action does not apply to event");
            }
        }
    }

    /// The single page setter. Equal values are a no-op and never notify.
    fn update_page(&mut self, page: usize, trigger: EventKind) {
        let from = self.context.current_page;
        if from == page {
            return;
        }

        self.context.current_page = page;
        let page_size = self.context.page_size;

        self.history.push(PageChange {
            from,
            to: page,
            page_size,
            trigger,
            timestamp: Utc::now(),
        });
        debug!(from, to = page, page_size, event = %trigger, "page changed");

        if let Some(callback) = self.on_page_change.as_mut() {
            callback(PageChangeDetails { page, page_size });
        }
    }

    pub fn state(&self) -> &PaginationState {
        &self.state
    }

    pub fn context(&self) -> &Context {
        &self.context
    }

    pub fn history(&self) -> &PageHistory {
        &self.history
    }

    pub fn transitions(&self) -> &TransitionTable {
        &self.table
    }

    pub fn count(&self) -> usize {
        self.context.count()
    }

    pub fn page_size(&self) -> usize {
        self.context.page_size()
    }

    pub fn current_page(&self) -> usize {
        self.context.current_page()
    }

    pub fn total_pages(&self) -> usize {
        self.context.total_pages()
    }

    pub fn previous_page(&self) -> Option<usize> {
        self.context.previous_page()
    }

    pub fn next_page(&self) -> Option<usize> {
        self.context.next_page()
    }

    pub fn page_range(&self) -> PageRange {
        self.context.page_range()
    }

    pub fn is_valid_page(&self) -> bool {
        self.context.is_valid_page()
    }

    pub fn snapshot(&self) -> Snapshot {
        let ctx = &self.context;
        Snapshot {
            state: self.state,
            count: ctx.count(),
            page_size: ctx.page_size(),
            current_page: ctx.current_page(),
            sibling_count: ctx.sibling_count(),
            pagination_type: ctx.pagination_type(),
            total_pages: ctx.total_pages(),
            previous_page: ctx.previous_page(),
            next_page: ctx.next_page(),
            page_range: ctx.page_range(),
            is_valid_page: ctx.is_valid_page(),
        }
    }
}

impl fmt::Debug for PaginationMachine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PaginationMachine")
            .field("state", &self.state)
            .field("context", &self.context)
            .field("on_page_change", &self.on_page_change.is_some())
            .field("history", &self.history.len())
            .finish()
    }
}

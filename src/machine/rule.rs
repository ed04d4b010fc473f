//! Guarded transition rules and the per-event rule table.

use crate::context::Context;
use crate::core::Guard;
use crate::event::{Event, EventKind};
use std::collections::BTreeMap;

/// Named context mutations a rule can run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    /// `count = event.count`
    SetCount,
    /// Move to `event.page`
    SetPage,
    /// `page_size = event.size`
    SetPageSize,
    GoToFirstPage,
    GoToPrevPage,
    GoToNextPage,
    /// Reset to page 1 when the current page fell out of range
    SetPageIfNeeded,
}

impl Action {
    pub fn name(&self) -> &'static str {
        match self {
            Self::SetCount => "setCount",
            Self::SetPage => "setPage",
            Self::SetPageSize => "setPageSize",
            Self::GoToFirstPage => "goToFirstPage",
            Self::GoToPrevPage => "goToPrevPage",
            Self::GoToNextPage => "goToNextPage",
            Self::SetPageIfNeeded => "setPageIfNeeded",
        }
    }
}

/// An optional guard plus the actions to run, in order, when it passes.
#[derive(Debug)]
pub struct TransitionRule {
    guard: Option<Guard<Context, Event>>,
    actions: Vec<Action>,
}

impl TransitionRule {
    /// A rule that always fires.
    pub fn always(actions: impl Into<Vec<Action>>) -> Self {
        Self {
            guard: None,
            actions: actions.into(),
        }
    }

    /// A rule that fires only when `guard` passes.
    pub fn guarded(guard: Guard<Context, Event>, actions: impl Into<Vec<Action>>) -> Self {
        Self {
            guard: Some(guard),
            actions: actions.into(),
        }
    }

    /// Check whether this rule fires for the event (pure).
    pub fn can_fire(&self, context: &Context, event: &Event) -> bool {
        self.guard
            .as_ref()
            .is_none_or(|guard| guard.check(context, event))
    }

    pub fn guard_name(&self) -> Option<&str> {
        self.guard.as_ref().map(Guard::name)
    }

    pub fn actions(&self) -> &[Action] {
        &self.actions
    }
}

/// Ordered rules per event kind. The first rule whose guard passes wins.
#[derive(Debug, Default)]
pub struct TransitionTable {
    rules: BTreeMap<EventKind, Vec<TransitionRule>>,
}

impl TransitionTable {
    pub fn new() -> Self {
        Self {
            rules: BTreeMap::new(),
        }
    }

    /// Append a rule for `kind`. Rules are tried in the order they were added.
    pub fn on(mut self, kind: EventKind, rule: TransitionRule) -> Self {
        self.rules.entry(kind).or_default().push(rule);
        self
    }

    pub fn rules_for(&self, kind: EventKind) -> &[TransitionRule] {
        self.rules.get(&kind).map(Vec::as_slice).unwrap_or_default()
    }

    /// Pick the rule that handles `event`, with its position in the list.
    ///
    /// Returns `None` when no rule's guard passes.
    pub fn select(&self, context: &Context, event: &Event) -> Option<(usize, &TransitionRule)> {
        self.rules_for(event.kind())
            .iter()
            .enumerate()
            .find(|(_, rule)| {
                let fires = rule.can_fire(context, event);
                if let Some(guard) = rule.guard_name() {
                    tracing::trace!(event = %event.kind(), guard, passed = fires, "evaluated guard");
                }
                fires
            })
    }

    /// The rule set of the pagination machine.
    pub fn pagination() -> Self {
        Self::new()
            .on(
                EventKind::SetCount,
                TransitionRule::guarded(
                    guards::is_valid_count(),
                    [Action::SetCount, Action::GoToFirstPage],
                ),
            )
            .on(EventKind::SetCount, TransitionRule::always([Action::SetCount]))
            .on(
                EventKind::SetPage,
                TransitionRule::guarded(guards::is_valid_page(), [Action::SetPage]),
            )
            .on(EventKind::SetPageSize, TransitionRule::always([Action::SetPageSize]))
            .on(
                EventKind::PreviousPage,
                TransitionRule::guarded(guards::can_go_to_prev_page(), [Action::GoToPrevPage]),
            )
            .on(
                EventKind::NextPage,
                TransitionRule::guarded(guards::can_go_to_next_page(), [Action::GoToNextPage]),
            )
    }
}

/// Guards of the pagination rule set.
///
/// Guards that read a payload return `false` for events of another kind.
pub mod guards {
    use super::*;

    /// The current page index exceeds the incoming item count.
    ///
    /// This compares against the raw count, not the resulting page total,
    /// so a shrink that strands the current page past the last page but not
    /// past `count` is not detected here.
    pub fn is_valid_count() -> Guard<Context, Event> {
        Guard::new("isValidCount", |ctx: &Context, event: &Event| match event {
            Event::SetCount { count } => ctx.current_page() > *count,
            _ => false,
        })
    }

    /// The requested page lies in `[1, total_pages]` before any mutation.
    pub fn is_valid_page() -> Guard<Context, Event> {
        Guard::new("isValidPage", |ctx: &Context, event: &Event| match event {
            Event::SetPage { page } => ctx.is_page_in_range(*page),
            _ => false,
        })
    }

    pub fn can_go_to_prev_page() -> Guard<Context, Event> {
        Guard::new("canGoToPrevPage", |ctx: &Context, _: &Event| {
            ctx.current_page() > 1
        })
    }

    pub fn can_go_to_next_page() -> Guard<Context, Event> {
        Guard::new("canGoToNextPage", |ctx: &Context, _: &Event| {
            ctx.current_page() < ctx.total_pages()
        })
    }
}

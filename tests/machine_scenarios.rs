//! Scenario tests for the pagination machine's documented behavior.

use pagemind::{DispatchResult, Event, EventKind, PageChangeDetails, PageRange, PaginationMachine};
use std::sync::{Arc, Mutex};

struct Harness {
    machine: PaginationMachine,
    notifications: Arc<Mutex<Vec<PageChangeDetails>>>,
}

impl Harness {
    fn new(count: usize, page_size: usize, current_page: usize) -> Self {
        let notifications = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&notifications);
        let machine = PaginationMachine::builder()
            .count(count)
            .page_size(page_size)
            .current_page(current_page)
            .on_page_change(move |details| sink.lock().unwrap().push(details))
            .build();
        Self {
            machine,
            notifications,
        }
    }

    fn notified(&self) -> Vec<PageChangeDetails> {
        self.notifications.lock().unwrap().clone()
    }
}

#[test]
fn setting_the_current_page_never_notifies() {
    let mut h = Harness::new(25, 10, 2);

    for _ in 0..3 {
        h.machine.dispatch(Event::SetPage { page: 2 });
    }

    assert!(h.notified().is_empty());
    assert_eq!(h.machine.current_page(), 2);
}

#[test]
fn previous_page_on_first_page_is_ignored() {
    let mut h = Harness::new(25, 10, 1);

    let result = h.machine.dispatch(Event::PreviousPage);

    assert_eq!(result, DispatchResult::Ignored);
    assert_eq!(h.machine.current_page(), 1);
    assert!(h.notified().is_empty());
}

#[test]
fn next_page_on_last_page_is_ignored() {
    let mut h = Harness::new(25, 10, 3);

    let result = h.machine.dispatch(Event::NextPage);

    assert_eq!(result, DispatchResult::Ignored);
    assert_eq!(h.machine.current_page(), 3);
    assert!(h.notified().is_empty());
}

#[test]
fn count_below_current_page_resets_to_first_page() {
    let mut h = Harness::new(50, 10, 5);

    let result = h.machine.dispatch(Event::SetCount { count: 3 });

    assert_eq!(result, DispatchResult::Handled { rule: 0, page_changed: true });
    assert_eq!(h.machine.count(), 3);
    assert_eq!(h.machine.current_page(), 1);
    assert_eq!(h.notified(), vec![PageChangeDetails { page: 1, page_size: 10 }]);
}

#[test]
fn count_above_current_page_only_updates_count() {
    let mut h = Harness::new(50, 10, 2);

    let result = h.machine.dispatch(Event::SetCount { count: 40 });

    assert_eq!(result, DispatchResult::Handled { rule: 1, page_changed: false });
    assert_eq!(h.machine.count(), 40);
    assert_eq!(h.machine.current_page(), 2);
    assert!(h.notified().is_empty());
}

#[test]
fn count_shrink_on_first_page_does_not_notify() {
    let mut h = Harness::new(50, 10, 1);

    // 1 > 0 selects the reset rule, but page 1 is already current.
    let result = h.machine.dispatch(Event::SetCount { count: 0 });

    assert_eq!(result, DispatchResult::Handled { rule: 0, page_changed: false });
    assert!(h.notified().is_empty());
}

/// The count guard compares the current page to the raw count, not to the
/// resulting page total. Shrinking 50 items to 15 leaves page 5 stranded
/// past the 2 remaining pages, and nothing corrects it.
#[test]
fn count_shrink_heuristic_leaves_page_past_the_end() {
    let mut h = Harness::new(50, 10, 5);

    h.machine.dispatch(Event::SetCount { count: 15 });

    assert_eq!(h.machine.total_pages(), 2);
    assert_eq!(h.machine.current_page(), 5);
    assert!(!h.machine.is_valid_page());
    assert!(h.notified().is_empty());
}

#[test]
fn count_shrink_that_keeps_page_valid() {
    let mut h = Harness::new(50, 10, 2);

    h.machine.dispatch(Event::SetCount { count: 15 });

    assert_eq!(h.machine.total_pages(), 2);
    assert_eq!(h.machine.current_page(), 2);
    assert!(h.machine.is_valid_page());
}

#[test]
fn page_size_growth_corrects_stranded_page_once() {
    let mut h = Harness::new(25, 10, 3);

    let result = h.machine.dispatch(Event::SetPageSize { size: 20 });

    assert_eq!(result, DispatchResult::Handled { rule: 0, page_changed: true });
    assert_eq!(h.machine.total_pages(), 2);
    assert_eq!(h.machine.current_page(), 1);
    assert_eq!(h.notified(), vec![PageChangeDetails { page: 1, page_size: 20 }]);
    assert_eq!(
        h.machine.history().last().map(|c| c.trigger),
        Some(EventKind::SetPageSize)
    );
}

/// A zero page size leaves no pages at all, so any current page falls out
/// of range and the page-size watch resets it to page 1.
#[test]
fn zero_page_size_resets_to_first_page() {
    let mut h = Harness::new(25, 10, 2);

    let result = h.machine.dispatch(Event::SetPageSize { size: 0 });

    assert_eq!(result, DispatchResult::Handled { rule: 0, page_changed: true });
    assert_eq!(h.machine.total_pages(), 0);
    assert_eq!(h.machine.current_page(), 1);
    assert!(!h.machine.is_valid_page());
    assert_eq!(h.machine.page_range(), PageRange { start: 0, end: 0 });
    assert_eq!(h.notified(), vec![PageChangeDetails { page: 1, page_size: 0 }]);

    assert!(h.machine.dispatch(Event::NextPage).is_ignored());
    assert!(h.machine.dispatch(Event::SetPage { page: 1 }).is_ignored());
}

#[test]
fn computed_values_for_second_of_three_pages() {
    let h = Harness::new(25, 10, 2);
    let m = &h.machine;

    assert_eq!(m.page_range(), PageRange { start: 10, end: 20 });
    assert_eq!(m.total_pages(), 3);
    assert_eq!(m.previous_page(), Some(1));
    assert_eq!(m.next_page(), Some(3));
    assert!(m.is_valid_page());
}

#[test]
fn exact_division_has_no_extra_page() {
    assert_eq!(Harness::new(20, 10, 1).machine.total_pages(), 2);
    assert_eq!(Harness::new(21, 10, 1).machine.total_pages(), 3);
}

#[test]
fn out_of_range_set_page_is_ignored() {
    let mut h = Harness::new(25, 10, 2);

    assert!(h.machine.dispatch(Event::SetPage { page: 0 }).is_ignored());
    assert!(h.machine.dispatch(Event::SetPage { page: 4 }).is_ignored());

    assert_eq!(h.machine.current_page(), 2);
    assert!(h.notified().is_empty());
}

#[test]
fn set_page_guard_uses_size_before_the_event() {
    let mut h = Harness::new(100, 10, 1);

    h.machine.dispatch(Event::SetPage { page: 8 });
    assert_eq!(h.machine.current_page(), 8);

    h.machine.dispatch(Event::SetPageSize { size: 50 });
    assert_eq!(h.machine.current_page(), 1);

    assert!(h.machine.dispatch(Event::SetPage { page: 3 }).is_ignored());
    assert_eq!(
        h.notified(),
        vec![
            PageChangeDetails { page: 8, page_size: 10 },
            PageChangeDetails { page: 1, page_size: 50 },
        ]
    );
}

#[test]
fn events_from_json_drive_the_machine() {
    let mut h = Harness::new(45, 10, 1);
    let script = r#"[
        {"type": "NEXT_PAGE"},
        {"type": "NEXT_PAGE"},
        {"type": "SET_PAGE", "page": 5},
        {"type": "PREVIOUS_PAGE"},
        {"type": "SET_PAGE_SIZE", "size": 5}
    ]"#;
    let events: Vec<Event> = serde_json::from_str(script).unwrap();

    for event in events {
        h.machine.dispatch(event);
    }

    assert_eq!(h.machine.history().pages(), vec![1, 2, 3, 5, 4]);
    assert_eq!(h.machine.current_page(), 4);
    assert_eq!(h.machine.total_pages(), 9);
    assert_eq!(h.notified().len(), h.machine.history().len());
}

#[test]
#[should_panic(expected = "listener failed")]
fn callback_panic_reaches_the_dispatcher() {
    let mut machine = PaginationMachine::builder()
        .count(30)
        .on_page_change(|_| panic!("listener failed"))
        .build();

    machine.dispatch(Event::NextPage);
}

//! The dispatching shell around the pure core.
//!
//! # Key Concepts
//!
//! - **Rules**: per-event ordered lists of optional guard plus actions
//! - **Machine**: owns the context, runs the selected rule's actions and
//!   the page-size watch, and announces page changes
//!
//! Dispatch is synchronous. `dispatch` takes `&mut self`, so one event is
//! always fully processed before the next can start.

mod machine;
mod rule;

pub use machine::{
    DispatchResult, PageChangeCallback, PageChangeDetails, PaginationMachine, Snapshot,
};
pub use rule::{guards, Action, TransitionRule, TransitionTable};

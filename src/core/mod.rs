//! Core building blocks of the pagination machine.
//!
//! This module contains the pure pieces the machine is assembled from:
//! - Guard predicates for transition control
//! - The machine's single state
//! - Immutable page change history
//!
//! Nothing in here mutates shared state or performs notifications.

mod guard;
mod history;
mod state;

pub use guard::Guard;
pub use history::{PageChange, PageHistory, DEFAULT_HISTORY_LIMIT};
pub use state::PaginationState;

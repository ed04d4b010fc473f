//! Events accepted by the pagination machine.

use serde::{Deserialize, Serialize};
use std::fmt;

/// An event dispatched into the machine.
///
/// The serde form is tagged by `"type"` with the wire names used by UI
/// collaborators, e.g. `{"type":"SET_PAGE","page":3}`. A payload with a
/// missing numeric field fails to deserialize instead of reaching the
/// machine.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Event {
    /// Total item count changed
    SetCount { count: usize },
    /// Jump to an explicit page
    SetPage { page: usize },
    /// Items per page changed
    SetPageSize { size: usize },
    PreviousPage,
    NextPage,
}

impl Event {
    pub fn kind(&self) -> EventKind {
        match self {
            Self::SetCount { .. } => EventKind::SetCount,
            Self::SetPage { .. } => EventKind::SetPage,
            Self::SetPageSize { .. } => EventKind::SetPageSize,
            Self::PreviousPage => EventKind::PreviousPage,
            Self::NextPage => EventKind::NextPage,
        }
    }
}

/// Payload-free discriminant of [`Event`], used to key the transition table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EventKind {
    SetCount,
    SetPage,
    SetPageSize,
    PreviousPage,
    NextPage,
}

impl EventKind {
    pub const ALL: [EventKind; 5] = [
        Self::SetCount,
        Self::SetPage,
        Self::SetPageSize,
        Self::PreviousPage,
        Self::NextPage,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::SetCount => "SET_COUNT",
            Self::SetPage => "SET_PAGE",
            Self::SetPageSize => "SET_PAGE_SIZE",
            Self::PreviousPage => "PREVIOUS_PAGE",
            Self::NextPage => "NEXT_PAGE",
        }
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

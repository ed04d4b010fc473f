//! Pagemind: a deterministic pagination state machine
//!
//! Given a total item count, a page size and a current page, the machine
//! derives the pagination facts a UI control needs (total pages,
//! neighboring pages, the item index range, validity) and reacts to
//! events by mutating its context through guarded, ordered rules.
//!
//! # Core Concepts
//!
//! - **Context**: configuration plus mutable state, owned by the machine
//! - **Computed values**: pure derivations, recomputed on every read
//! - **Guards**: pure predicates over `(context, event)` that pick a rule
//! - **Actions**: named context mutations run in order by the chosen rule
//! - **Watch**: after a page size change, an out-of-range page resets to 1
//!
//! Every change of the current page goes through one setter, which skips
//! equal values and otherwise notifies the `on_page_change` callback.
//!
//! # Example
//!
//! ```rust
//! use pagemind::{Event, PaginationMachine};
//! use std::sync::{Arc, Mutex};
//!
//! let pages = Arc::new(Mutex::new(Vec::new()));
//! let sink = Arc::clone(&pages);
//!
//! let mut machine = PaginationMachine::builder()
//!     .count(25)
//!     .current_page(3)
//!     .on_page_change(move |details| sink.lock().unwrap().push(details))
//!     .build();
//!
//! assert_eq!(machine.total_pages(), 3);
//!
//! // Bigger pages leave page 3 stranded, so the machine resets to page 1.
//! machine.dispatch(Event::SetPageSize { size: 20 });
//! assert_eq!(machine.current_page(), 1);
//!
//! let pages = pages.lock().unwrap();
//! assert_eq!(pages.len(), 1);
//! assert_eq!((pages[0].page, pages[0].page_size), (1, 20));
//! ```

pub mod builder;
pub mod config;
pub mod context;
pub mod core;
pub mod event;
pub mod machine;
pub mod translations;
pub mod validation;

// Re-export commonly used types
pub use builder::{BuildError, PaginationMachineBuilder};
pub use config::{ConfigError, PaginationConfig, PaginationType};
pub use context::{Context, PageRange};
pub use event::{Event, EventKind};
pub use machine::{DispatchResult, PageChangeDetails, PaginationMachine, Snapshot};
pub use translations::{Translations, TranslationsConfig};

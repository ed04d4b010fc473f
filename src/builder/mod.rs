//! Builder API for ergonomic machine construction.
//!
//! The builder collects the same optional fields as
//! [`PaginationConfig`](crate::config::PaginationConfig) plus the
//! callback and the item label function, which cannot come from JSON.

pub mod error;
pub mod machine;

pub use error::BuildError;
pub use machine::PaginationMachineBuilder;

//! Range violations found in a machine context.

use thiserror::Error;

/// A numeric range check that a context failed.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigViolation {
    #[error("Page size must be at least 1")]
    ZeroPageSize,

    #[error("Current page must be at least 1")]
    ZeroCurrentPage,

    #[error("Current page {page} exceeds total pages ({total_pages})")]
    PageOutOfRange { page: usize, total_pages: usize },
}

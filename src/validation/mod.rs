//! Opt-in numeric range checks for a machine context.
//!
//! Construction never validates. Callers that want to reject inconsistent
//! configuration up front run these checks, which use Stillwater's
//! `Validation` to report every violation in one pass instead of stopping
//! at the first.
//!
//! # Example
//!
//! ```rust
//! use pagemind::config::PaginationConfig;
//! use pagemind::validation::validate_context;
//! use pagemind::Context;
//!
//! let ctx = Context::from_config(&PaginationConfig::default().count(25).current_page(2));
//! assert!(validate_context(&ctx).is_success());
//!
//! let ctx = Context::from_config(&PaginationConfig::default().page_size(0).current_page(0));
//! assert!(validate_context(&ctx).is_failure());
//! ```

pub mod rules;
pub mod violations;

pub use rules::{validate_context, RangeCheck};
pub use violations::ConfigViolation;

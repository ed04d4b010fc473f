//! Build errors for the pagination machine builder.

use crate::validation::ConfigViolation;
use thiserror::Error;

/// Errors that can occur when building a validated machine.
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("Invalid pagination config: {}", describe(.violations))]
    InvalidConfig { violations: Vec<ConfigViolation> },
}

fn describe(violations: &[ConfigViolation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

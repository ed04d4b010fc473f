//! Machine state.
//!
//! The pagination machine has exactly one state. Its value lies in the
//! event/guard/action dispatch discipline, not in moving between states.

use serde::{Deserialize, Serialize};

/// The states a pagination machine can be in.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaginationState {
    /// Waiting for events. Every event is handled from here.
    #[default]
    Idle,
}

impl PaginationState {
    pub fn name(&self) -> &str {
        match self {
            Self::Idle => "idle",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_state_is_idle() {
        assert_eq!(PaginationState::default(), PaginationState::Idle);
        assert_eq!(PaginationState::Idle.name(), "idle");
    }

    #[test]
    fn state_serializes_as_lowercase_name() {
        let json = serde_json::to_string(&PaginationState::Idle).unwrap();
        assert_eq!(json, "\"idle\"");

        let back: PaginationState = serde_json::from_str(&json).unwrap();
        assert_eq!(back, PaginationState::Idle);
    }
}

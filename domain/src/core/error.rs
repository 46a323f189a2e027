//! Domain error types

use thiserror::Error;

/// Domain-level errors
///
/// Raised by the pure transforms of this crate (schema specialization,
/// message assembly, resource validation). None of them perform I/O.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("input messages must not be empty")]
    EmptyInput,

    #[error("partial parameter '{parameter}' not found in tool '{tool}' schema")]
    UnknownPartialParameter { tool: String, parameter: String },

    #[error("invalid parameter schema for tool '{tool}': {reason}")]
    InvalidSchema { tool: String, reason: String },

    #[error("team field is required for team tool '{0}'")]
    MissingTeamName(String),

    #[error("recursive delegation to team '{0}'")]
    DelegationCycle(String),

    #[error("delegation depth limit exceeded ({max_depth}) entering team '{team}'")]
    DelegationDepthExceeded { team: String, max_depth: usize },
}

impl DomainError {
    /// Check if this error was raised by the delegation guard
    pub fn is_delegation_error(&self) -> bool {
        matches!(
            self,
            DomainError::DelegationCycle(_) | DomainError::DelegationDepthExceeded { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_partial_parameter_display() {
        let error = DomainError::UnknownPartialParameter {
            tool: "weather".to_string(),
            parameter: "units".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "partial parameter 'units' not found in tool 'weather' schema"
        );
    }

    #[test]
    fn test_missing_team_name_mentions_team_field() {
        let error = DomainError::MissingTeamName("team-tool".to_string());
        assert!(error.to_string().contains("team field is required"));
    }

    #[test]
    fn test_is_delegation_error() {
        assert!(DomainError::DelegationCycle("a".to_string()).is_delegation_error());
        assert!(
            DomainError::DelegationDepthExceeded {
                team: "a".to_string(),
                max_depth: 2
            }
            .is_delegation_error()
        );
        assert!(!DomainError::EmptyInput.is_delegation_error());
    }
}

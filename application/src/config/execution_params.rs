//! Execution parameters: limits for nested tool execution.
//!
//! [`ExecutionParams`] travel inside the
//! [`ExecutionContext`](crate::ports::tool_executor::ExecutionContext) so
//! that a nested team run applies the same limits as its parent.

use serde::{Deserialize, Serialize};
use toolbelt_domain::DEFAULT_MAX_DELEGATION_DEPTH;

/// Limits applied while executing tool calls.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExecutionParams {
    /// Maximum number of nested team delegations on one call path.
    pub max_delegation_depth: usize,
    /// Refuse to re-enter a team that is already running on the call path.
    pub detect_delegation_cycles: bool,
}

impl Default for ExecutionParams {
    fn default() -> Self {
        Self {
            max_delegation_depth: DEFAULT_MAX_DELEGATION_DEPTH,
            detect_delegation_cycles: true,
        }
    }
}

impl ExecutionParams {
    // ==================== Builder Methods ====================

    pub fn with_max_delegation_depth(mut self, max: usize) -> Self {
        self.max_delegation_depth = max;
        self
    }

    pub fn with_cycle_detection(mut self, enabled: bool) -> Self {
        self.detect_delegation_cycles = enabled;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let params = ExecutionParams::default();
        assert_eq!(params.max_delegation_depth, DEFAULT_MAX_DELEGATION_DEPTH);
        assert!(params.detect_delegation_cycles);
    }

    #[test]
    fn test_builder() {
        let params = ExecutionParams::default()
            .with_max_delegation_depth(2)
            .with_cycle_detection(false);
        assert_eq!(params.max_delegation_depth, 2);
        assert!(!params.detect_delegation_cycles);
    }
}

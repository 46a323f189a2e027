//! Delegation chain for nested team execution
//!
//! A team-typed tool runs a whole team, whose agents may call further
//! team-typed tools. The [`DelegationChain`] records which teams are active
//! on the current call path so that cycles and runaway nesting are refused
//! before a nested run starts.

use serde::{Deserialize, Serialize};

use crate::core::error::DomainError;

/// Default maximum nesting of team delegations
pub const DEFAULT_MAX_DELEGATION_DEPTH: usize = 8;

/// Ordered stack of team names entered on the current call path
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DelegationChain {
    teams: Vec<String>,
}

impl DelegationChain {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn depth(&self) -> usize {
        self.teams.len()
    }

    pub fn contains(&self, team: &str) -> bool {
        self.teams.iter().any(|t| t == team)
    }

    pub fn teams(&self) -> &[String] {
        &self.teams
    }

    /// Chain for a nested run of `team`.
    ///
    /// Fails if `team` is already active (when `detect_cycles` is set) or if
    /// entering it would exceed `max_depth`. `self` is not modified.
    pub fn enter(
        &self,
        team: &str,
        max_depth: usize,
        detect_cycles: bool,
    ) -> Result<DelegationChain, DomainError> {
        if detect_cycles && self.contains(team) {
            return Err(DomainError::DelegationCycle(team.to_string()));
        }
        if self.depth() >= max_depth {
            return Err(DomainError::DelegationDepthExceeded {
                team: team.to_string(),
                max_depth,
            });
        }

        let mut teams = self.teams.clone();
        teams.push(team.to_string());
        Ok(DelegationChain { teams })
    }
}

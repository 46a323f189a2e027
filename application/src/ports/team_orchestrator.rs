//! Team orchestrator port
//!
//! Runs a whole team on a current message plus context and returns the
//! messages the team produced. Team tools only depend on this port.

use async_trait::async_trait;
use thiserror::Error;
use toolbelt_domain::{Message, TeamResource};

use super::agent_runner::AgentRunError;
use super::resource_store::StoreError;
use super::tool_executor::ExecutionContext;

/// Errors from a team run
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TeamRunError {
    #[error("team '{0}' has no members")]
    NoMembers(String),

    #[error("failed to resolve team member '{member}': {source}")]
    Member {
        member: String,
        #[source]
        source: StoreError,
    },

    #[error("unsupported member type '{member_type}' for member '{member}'")]
    UnsupportedMember { member: String, member_type: String },

    #[error("{source}")]
    Agent {
        agent: String,
        #[source]
        source: AgentRunError,
    },

    #[error("Operation cancelled")]
    Cancelled,
}

impl TeamRunError {
    pub fn is_cancelled(&self) -> bool {
        matches!(self, TeamRunError::Cancelled)
    }
}

impl From<AgentRunError> for TeamRunError {
    fn from(error: AgentRunError) -> Self {
        match error {
            AgentRunError::Cancelled => TeamRunError::Cancelled,
            other => TeamRunError::Agent {
                agent: other.agent().to_string(),
                source: other,
            },
        }
    }
}

/// Port for running a team
#[async_trait]
pub trait TeamOrchestrator: Send + Sync {
    /// Run `team` and return the produced messages in order.
    ///
    /// An empty vector is a valid answer; the caller decides whether that
    /// is an error.
    async fn run_team(
        &self,
        ctx: &ExecutionContext,
        team: &TeamResource,
        current: Message,
        context: Vec<Message>,
    ) -> Result<Vec<Message>, TeamRunError>;
}

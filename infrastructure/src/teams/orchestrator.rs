//! Strategy-driven team orchestrator
//!
//! Implements the [`TeamOrchestrator`] port on top of an [`AgentRunner`].
//! Members take turns according to the team's strategy; every agent
//! sees the current message plus the context extended with everything the
//! team produced before its turn.

use std::sync::Arc;

use async_trait::async_trait;
use toolbelt_application::{
    AgentRunner, ExecutionContext, ResourceStore, TeamOrchestrator, TeamRunError,
};
use toolbelt_domain::{AgentResource, Message, TeamResource};
use tracing::{debug, info};

const AGENT_MEMBER: &str = "agent";

pub struct StrategyTeamOrchestrator {
    store: Arc<dyn ResourceStore>,
    runner: Arc<dyn AgentRunner>,
}

impl StrategyTeamOrchestrator {
    pub fn new(store: Arc<dyn ResourceStore>, runner: Arc<dyn AgentRunner>) -> Self {
        Self { store, runner }
    }

    async fn resolve_members(&self, team: &TeamResource) -> Result<Vec<AgentResource>, TeamRunError> {
        let mut agents = Vec::with_capacity(team.members.len());
        for member in &team.members {
            if member.member_type != AGENT_MEMBER {
                return Err(TeamRunError::UnsupportedMember {
                    member: member.name.clone(),
                    member_type: member.member_type.clone(),
                });
            }
            let agent = self
                .store
                .get_agent(&member.name, &team.namespace)
                .await
                .map_err(|source| TeamRunError::Member {
                    member: member.name.clone(),
                    source,
                })?;
            agents.push(agent);
        }
        Ok(agents)
    }
}

#[async_trait]
impl TeamOrchestrator for StrategyTeamOrchestrator {
    async fn run_team(
        &self,
        ctx: &ExecutionContext,
        team: &TeamResource,
        current: Message,
        context: Vec<Message>,
    ) -> Result<Vec<Message>, TeamRunError> {
        if team.members.is_empty() {
            return Err(TeamRunError::NoMembers(team.name.clone()));
        }

        let agents = self.resolve_members(team).await?;
        let turns = team.turn_budget();
        info!(
            team = %team.name,
            strategy = %team.strategy,
            members = agents.len(),
            turns,
            "Running team"
        );

        let mut produced: Vec<Message> = Vec::new();
        for (turn, agent) in agents.iter().cycle().take(turns).enumerate() {
            if ctx.is_cancelled() {
                return Err(TeamRunError::Cancelled);
            }

            let mut agent_context = Vec::with_capacity(context.len() + produced.len());
            agent_context.extend_from_slice(&context);
            agent_context.extend_from_slice(&produced);

            let messages = self
                .runner
                .run_agent(ctx, agent, &current, &agent_context)
                .await?;
            debug!(
                team = %team.name,
                agent = %agent.name,
                turn,
                produced = messages.len(),
                "Agent turn finished"
            );
            produced.extend(messages);
        }

        Ok(produced)
    }
}

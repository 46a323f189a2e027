//! Team resources

use serde::{Deserialize, Serialize};

use super::default_namespace;

/// How a team's members take turns
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TeamStrategy {
    /// Every member runs once, in declaration order
    #[default]
    Sequential,
    /// Members take turns in order until `max_turns` is reached
    RoundRobin,
}

impl TeamStrategy {
    pub fn as_str(&self) -> &str {
        match self {
            TeamStrategy::Sequential => "sequential",
            TeamStrategy::RoundRobin => "round-robin",
        }
    }
}

impl std::fmt::Display for TeamStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

fn default_member_type() -> String {
    "agent".to_string()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamMember {
    pub name: String,
    #[serde(rename = "type", default = "default_member_type")]
    pub member_type: String,
}

impl TeamMember {
    pub fn agent(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            member_type: default_member_type(),
        }
    }
}

/// A named group of cooperating agents
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamResource {
    pub name: String,
    #[serde(default = "default_namespace")]
    pub namespace: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub members: Vec<TeamMember>,
    #[serde(default)]
    pub strategy: TeamStrategy,
    /// Turn limit for round-robin; defaults to one turn per member
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_turns: Option<usize>,
}

impl TeamResource {
    pub fn new(name: impl Into<String>, namespace: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            namespace: namespace.into(),
            description: String::new(),
            members: Vec::new(),
            strategy: TeamStrategy::default(),
            max_turns: None,
        }
    }

    pub fn with_member(mut self, member: TeamMember) -> Self {
        self.members.push(member);
        self
    }

    pub fn with_strategy(mut self, strategy: TeamStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    pub fn with_max_turns(mut self, max_turns: usize) -> Self {
        self.max_turns = Some(max_turns);
        self
    }

    /// Number of agent turns one run of this team takes
    pub fn turn_budget(&self) -> usize {
        match self.strategy {
            TeamStrategy::Sequential => self.members.len(),
            TeamStrategy::RoundRobin => self.max_turns.unwrap_or(self.members.len()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_team_defaults() {
        let team: TeamResource = serde_json::from_value(serde_json::json!({
            "name": "test-team",
            "members": [{"name": "agent1"}]
        }))
        .unwrap();

        assert_eq!(team.namespace, "default");
        assert_eq!(team.strategy, TeamStrategy::Sequential);
        assert_eq!(team.members[0].member_type, "agent");
    }

    #[test]
    fn test_deserialize_round_robin() {
        let team: TeamResource = serde_json::from_value(serde_json::json!({
            "name": "t",
            "strategy": "round-robin",
            "max_turns": 5
        }))
        .unwrap();
        assert_eq!(team.strategy, TeamStrategy::RoundRobin);
        assert_eq!(team.turn_budget(), 5);
    }

    #[test]
    fn test_turn_budget() {
        let team = TeamResource::new("t", "default")
            .with_member(TeamMember::agent("a"))
            .with_member(TeamMember::agent("b"));
        assert_eq!(team.turn_budget(), 2);

        let team = team.with_strategy(TeamStrategy::RoundRobin);
        assert_eq!(team.turn_budget(), 2);
        assert_eq!(team.with_max_turns(6).turn_budget(), 6);
    }
}

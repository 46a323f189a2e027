//! Team orchestration adapters

mod orchestrator;
mod runner;

pub use orchestrator::StrategyTeamOrchestrator;
pub use runner::UnconfiguredAgentRunner;

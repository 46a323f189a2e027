//! Port definitions
//!
//! Ports are the seams between the application layer and its adapters.
//! The infrastructure crate implements them; tests implement them with
//! small fakes.

pub mod agent_runner;
pub mod event_recorder;
pub mod memory_store;
pub mod resource_store;
pub mod team_orchestrator;
pub mod tool_executor;
pub mod tool_recorder;

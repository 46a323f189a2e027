//! Infrastructure layer for toolbelt
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod config;
pub mod memory;
pub mod resources;
pub mod teams;
pub mod telemetry;
pub mod tools;

// Re-export commonly used types
pub use config::{ConfigLoader, ConfigValidationError, FileConfig};
pub use memory::InMemoryMemoryStore;
pub use resources::{InMemoryResourceStore, ResourceFile, ResourceFileError};
pub use teams::{StrategyTeamOrchestrator, UnconfiguredAgentRunner};
pub use telemetry::{JsonlEventRecorder, TracingToolRecorder};
pub use tools::{ExecutorFactory, RegistryError, ToolRegistry};

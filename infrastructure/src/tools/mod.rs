//! Tool executors and the registry
//!
//! ## Executors
//!
//! - `builtin`: platform capabilities (noop, terminate, get_current_time)
//! - `team`: delegates a call to a team of agents
//! - `partial`: injects bound parameter values, then delegates
//!
//! The [`ExecutorFactory`] picks the variant for a tool resource and the
//! [`ToolRegistry`] publishes the result under its advertised name.

pub mod builtin;

mod error;
mod factory;
mod partial;
mod registry;
mod team;

pub use builtin::{BuiltinToolExecutor, builtin_definition, builtin_definitions};
pub use error::RegistryError;
pub use factory::{ExecutorFactory, ResolvedTool};
pub use partial::PartialToolExecutor;
pub use registry::ToolRegistry;
pub use team::TeamToolExecutor;

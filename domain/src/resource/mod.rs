//! Declarative resources
//!
//! Tools, teams and agents as they are declared in the external resource
//! store. This subsystem only reads them; specifications are assumed to be
//! structurally valid apart from the invariants checked here.

pub mod agent;
pub mod team;
pub mod tool;

pub use agent::AgentResource;
pub use team::{TeamMember, TeamResource, TeamStrategy};
pub use tool::{TeamToolRef, ToolResource, ToolSpec, ToolType};

/// Namespace used when a resource does not name one
pub const DEFAULT_NAMESPACE: &str = "default";

pub(crate) fn default_namespace() -> String {
    DEFAULT_NAMESPACE.to_string()
}

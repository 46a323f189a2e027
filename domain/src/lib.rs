//! Domain layer for toolbelt
//!
//! This crate contains the pure types and transforms of the tool subsystem.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Tools
//!
//! A [`ToolDefinition`] is what the model sees: a name, a description and a
//! JSON-schema parameter object. The model answers with a [`ToolCall`] and
//! receives a [`ToolResult`] that always echoes the call's id and name.
//!
//! ## Partial specialization
//!
//! An agent may bind some of a tool's parameters and advertise the result
//! under a new name ([`ToolPartial`], [`create_partial_tool_definition`]).
//!
//! ## Teams
//!
//! A team-typed tool delegates the call to a whole team of agents. The
//! [`DelegationChain`] guards nested delegation against cycles and depth.
//!
//! ## Message assembly
//!
//! [`session::assembly`] builds model context windows from memory and new
//! messages without ever reordering them.

pub mod core;
pub mod resource;
pub mod session;
pub mod tool;

// Re-export commonly used types
pub use core::error::DomainError;
pub use resource::{
    AgentResource, DEFAULT_NAMESPACE, TeamMember, TeamResource, TeamStrategy, TeamToolRef,
    ToolResource, ToolSpec, ToolType,
};
pub use session::{
    Message, Role, extract_last_assistant_message_content, extract_user_message_content,
    prepare_execution_messages, prepare_model_messages, prepare_new_messages_for_memory,
};
pub use tool::{
    AgentToolReference, ArgumentError, DEFAULT_MAX_DELEGATION_DEPTH, DelegationChain,
    PartialParameter, ToolArguments, ToolCall, ToolDefinition, ToolPartial, ToolReferenceType,
    ToolResult, ToolResultMetadata, create_partial_tool_definition, empty_object_schema,
};

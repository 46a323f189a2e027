//! Tool domain module
//!
//! This module defines the model-facing side of the **Tool System**: what a
//! capability looks like to the model, how a call and its result are shaped,
//! and how a usage site specializes a capability.
//!
//! # Overview
//!
//! ```text
//! ┌────────────────────┐   ┌──────────────┐   ┌──────────────┐
//! │ AgentToolReference │──▶│ToolDefinition│──▶│ ToolCall     │──▶ ToolResult
//! │ (+ ToolPartial)    │   │ (advertised) │   │ (id, name)   │    (id, name,
//! └────────────────────┘   └──────────────┘   └──────────────┘     content|error)
//! ```
//!
//! # Partial specialization
//!
//! [`create_partial_tool_definition`] renames a definition and removes bound
//! parameters from its schema. The description is carried over verbatim; the
//! reference-level override ([`AgentToolReference::resolve_description`]) is
//! applied by the registry.
//!
//! # Key Types
//!
//! - [`ToolDefinition`]: name, description, JSON-schema parameters
//! - [`ToolCall`]: id, advertised name, JSON-encoded arguments
//! - [`ToolResult`]: echo of id/name plus content or a short error
//! - [`ToolArguments`] / [`ArgumentError`]: uniform argument parsing
//! - [`DelegationChain`]: active teams on the current call path

pub mod arguments;
pub mod delegation;
pub mod entities;
pub mod partial;
pub mod reference;
pub mod value_objects;

pub use arguments::{ArgumentError, ToolArguments};
pub use delegation::{DEFAULT_MAX_DELEGATION_DEPTH, DelegationChain};
pub use entities::{ToolCall, ToolDefinition, empty_object_schema};
pub use partial::{PartialParameter, ToolPartial, create_partial_tool_definition};
pub use reference::{AgentToolReference, ToolReferenceType};
pub use value_objects::{ToolResult, ToolResultMetadata};

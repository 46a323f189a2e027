//! Application-level configuration.
//!
//! - [`ExecutionParams`]: limits applied to every tool execution
//!   (delegation depth, cycle detection)

pub mod execution_params;

pub use execution_params::ExecutionParams;

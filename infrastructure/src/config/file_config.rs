//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use toolbelt_application::ExecutionParams;
use toolbelt_domain::{DEFAULT_MAX_DELEGATION_DEPTH, DEFAULT_NAMESPACE};

/// Configuration validation errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigValidationError {
    #[error("namespace cannot be empty")]
    EmptyNamespace,

    #[error("delegation.max_depth cannot be 0")]
    ZeroDelegationDepth,
}

/// Where declarative resources come from
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileResourcesConfig {
    /// TOML resource file with `[[tools]]`, `[[teams]]` and `[[agents]]`
    pub path: Option<String>,
}

/// Limits on nested team delegation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileDelegationConfig {
    pub max_depth: usize,
    pub detect_cycles: bool,
}

impl Default for FileDelegationConfig {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DELEGATION_DEPTH,
            detect_cycles: true,
        }
    }
}

/// Structured event log
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileEventsConfig {
    /// JSONL file receiving tool events; disabled when unset
    pub jsonl_path: Option<String>,
}

/// Complete configuration file structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Namespace used when none is given on the command line
    pub namespace: String,
    pub resources: FileResourcesConfig,
    pub delegation: FileDelegationConfig,
    pub events: FileEventsConfig,
}

impl Default for FileConfig {
    fn default() -> Self {
        Self {
            namespace: DEFAULT_NAMESPACE.to_string(),
            resources: FileResourcesConfig::default(),
            delegation: FileDelegationConfig::default(),
            events: FileEventsConfig::default(),
        }
    }
}

impl FileConfig {
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        if self.namespace.is_empty() {
            return Err(ConfigValidationError::EmptyNamespace);
        }
        if self.delegation.max_depth == 0 {
            return Err(ConfigValidationError::ZeroDelegationDepth);
        }
        Ok(())
    }

    /// Execution limits for tool calls
    pub fn execution_params(&self) -> ExecutionParams {
        ExecutionParams::default()
            .with_max_delegation_depth(self.delegation.max_depth)
            .with_cycle_detection(self.delegation.detect_cycles)
    }
}

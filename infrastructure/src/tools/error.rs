//! Registration errors

use thiserror::Error;
use toolbelt_application::{ResourceKind, StoreError};
use toolbelt_domain::DomainError;

/// Errors raised while building a registry
///
/// Each error is fatal to the single registration that raised it; the
/// caller decides whether to abort the whole build.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RegistryError {
    #[error("invalid tool '{tool}': {reason}")]
    Configuration { tool: String, reason: String },

    #[error("unsupported tool type '{tool_type}' for tool '{tool}'")]
    UnsupportedToolType { tool: String, tool_type: String },

    #[error("duplicate tool name '{0}'")]
    DuplicateTool(String),

    #[error(transparent)]
    Definition(#[from] DomainError),

    #[error("failed to get {kind} '{name}': {source}")]
    NotFound {
        kind: ResourceKind,
        name: String,
        #[source]
        source: StoreError,
    },

    #[error("failed to get {kind} '{name}': {source}")]
    Store {
        kind: ResourceKind,
        name: String,
        #[source]
        source: StoreError,
    },
}

impl RegistryError {
    pub fn configuration(tool: &str, reason: impl Into<String>) -> Self {
        RegistryError::Configuration {
            tool: tool.to_string(),
            reason: reason.into(),
        }
    }

    /// Classify a failed lookup of `name`
    pub fn lookup(kind: ResourceKind, name: &str, source: StoreError) -> Self {
        if source.is_not_found() {
            RegistryError::NotFound {
                kind,
                name: name.to_string(),
                source,
            }
        } else {
            RegistryError::Store {
                kind,
                name: name.to_string(),
                source,
            }
        }
    }

    /// Misconfigured reference or resource (as opposed to a failed lookup)
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            RegistryError::Configuration { .. }
                | RegistryError::UnsupportedToolType { .. }
                | RegistryError::DuplicateTool(_)
                | RegistryError::Definition(_)
        )
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, RegistryError::NotFound { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_classification() {
        let err = RegistryError::lookup(
            ResourceKind::Team,
            "ghost",
            StoreError::not_found(ResourceKind::Team, "ghost", "default"),
        );
        assert!(err.is_not_found());
        assert!(err.to_string().contains("failed to get team"));

        let err = RegistryError::lookup(
            ResourceKind::Tool,
            "x",
            StoreError::Backend("connection refused".to_string()),
        );
        assert!(matches!(err, RegistryError::Store { .. }));
        assert!(!err.is_configuration());
    }
}

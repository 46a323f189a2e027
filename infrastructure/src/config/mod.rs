//! Configuration file loading for toolbelt
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `TOOLBELT_` environment variables
//! 2. `--config <path>` specified file
//! 3. Project root: `./toolbelt.toml` or `./.toolbelt.toml`
//! 4. Global: `$XDG_CONFIG_HOME/toolbelt/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{
    ConfigValidationError, FileConfig, FileDelegationConfig, FileEventsConfig,
    FileResourcesConfig,
};
pub use loader::ConfigLoader;

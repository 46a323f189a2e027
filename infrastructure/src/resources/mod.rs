//! Resource store adapters
//!
//! - [`InMemoryResourceStore`]: a snapshot of tools, teams and agents
//! - [`ResourceFile`]: TOML resource files loaded into that snapshot

mod file;
mod memory;

pub use file::{ResourceFile, ResourceFileError};
pub use memory::InMemoryResourceStore;

//! CLI command definitions

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// CLI arguments for toolbelt
#[derive(Parser, Debug)]
#[command(name = "toolbelt")]
#[command(author, version, about = "Resolve agent tools and dispatch tool calls")]
#[command(long_about = r#"
toolbelt resolves the tools an agent declares (builtin capabilities, team
delegations, partial specializations) and either lists the definitions the
model would see or executes a single tool call.

Configuration files are loaded from (in priority order):
1. TOOLBELT_* environment variables
2. --config <path>     Explicit config file
3. ./toolbelt.toml     Project-level config
4. ~/.config/toolbelt/config.toml   Global config

Example:
  toolbelt --resources resources.toml tools --agent assistant
  toolbelt call --agent assistant --tool get_current_time --args '{"format":"unix"}'
"#)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Resource file with tools, teams and agents (overrides config)
    #[arg(short, long, global = true, value_name = "PATH")]
    pub resources: Option<PathBuf>,

    /// Namespace to resolve resources in (overrides config)
    #[arg(short, long, global = true)]
    pub namespace: Option<String>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Write logs to this file instead of stderr
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Path to configuration file
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long, global = true)]
    pub no_config: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the tool definitions published for an agent, as JSON
    Tools {
        /// Agent whose tool list is resolved
        #[arg(short, long)]
        agent: String,
    },

    /// Execute one tool call and print the result as JSON
    Call {
        /// Agent whose tool list is resolved
        #[arg(short, long)]
        agent: String,

        /// Advertised tool name
        #[arg(short, long)]
        tool: String,

        /// JSON-encoded arguments
        #[arg(long, default_value = "{}")]
        args: String,

        /// Call id echoed in the result
        #[arg(long, default_value = "cli-call")]
        id: String,

        /// User message recorded alongside the call
        #[arg(long)]
        message: Option<String>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_call() {
        let cli = Cli::try_parse_from([
            "toolbelt",
            "-vv",
            "call",
            "--agent",
            "assistant",
            "--tool",
            "noop",
            "--args",
            r#"{"message":"hi"}"#,
            "--namespace",
            "ops",
        ])
        .unwrap();

        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.namespace.as_deref(), Some("ops"));
        match cli.command {
            Command::Call { agent, tool, args, id, .. } => {
                assert_eq!(agent, "assistant");
                assert_eq!(tool, "noop");
                assert_eq!(args, r#"{"message":"hi"}"#);
                assert_eq!(id, "cli-call");
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_tools_requires_agent() {
        assert!(Cli::try_parse_from(["toolbelt", "tools"]).is_err());
    }
}

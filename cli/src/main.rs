//! CLI entrypoint for toolbelt
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

mod cli;

use anyhow::{Context, Result, anyhow, bail};
use clap::Parser;
use cli::{Cli, Command};
use std::path::PathBuf;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use toolbelt_application::{
    EventRecorder, ExecuteToolCallsInput, ExecuteToolCallsUseCase, ExecutionContext,
    NoEventRecorder, ToolExecutorPort,
};
use toolbelt_domain::{Message, ToolCall};
use toolbelt_infrastructure::{
    ConfigLoader, ExecutorFactory, FileConfig, InMemoryMemoryStore, JsonlEventRecorder,
    ResourceFile, StrategyTeamOrchestrator, ToolRegistry, TracingToolRecorder,
    UnconfiguredAgentRunner,
};
use tracing::{info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

/// Initialize logging based on verbosity level
fn init_logging(verbose: u8, log_file: Option<&PathBuf>) -> Result<Option<WorkerGuard>> {
    let filter = match verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    match log_file {
        Some(path) => {
            let file = std::fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("failed to open log file {}", path.display()))?;
            let (writer, guard) = tracing_appender::non_blocking(file);
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(writer)
                .with_ansi(false)
                .init();
            Ok(Some(guard))
        }
        None => {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_target(false)
                .with_writer(std::io::stderr)
                .init();
            Ok(None)
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let _guard = init_logging(cli.verbose, cli.log_file.as_ref())?;

    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref()).map_err(|e| anyhow!(e))?
    };
    config.validate()?;

    let namespace = cli.namespace.clone().unwrap_or_else(|| config.namespace.clone());
    let resources = cli
        .resources
        .clone()
        .or_else(|| config.resources.path.as_ref().map(PathBuf::from));
    let Some(resources) = resources else {
        bail!("No resource file configured. Use --resources or set [resources] path.");
    };

    // === Dependency Injection ===
    let store = Arc::new(ResourceFile::load(&resources)?.into_store()?);
    let orchestrator = Arc::new(StrategyTeamOrchestrator::new(
        store.clone(),
        Arc::new(UnconfiguredAgentRunner),
    ));
    let events = event_recorder(&config);
    let factory = ExecutorFactory::new(store, orchestrator);

    match cli.command {
        Command::Tools { agent } => {
            let registry = build_registry(factory, events, &agent, &namespace).await?;
            println!(
                "{}",
                serde_json::to_string_pretty(registry.tool_definitions())?
            );
        }
        Command::Call {
            agent,
            tool,
            args,
            id,
            message,
        } => {
            let registry =
                Arc::new(build_registry(factory, events.clone(), &agent, &namespace).await?);

            let token = CancellationToken::new();
            let ctrl_c = token.clone();
            tokio::spawn(async move {
                if tokio::signal::ctrl_c().await.is_ok() {
                    warn!("Interrupted, cancelling tool call");
                    ctrl_c.cancel();
                }
            });
            let ctx = ExecutionContext::new()
                .with_cancellation(token)
                .with_params(config.execution_params());

            let input = message.map(Message::user).into_iter().collect();
            let use_case = ExecuteToolCallsUseCase::new(registry, Arc::new(InMemoryMemoryStore::new()))
                .with_event_recorder(events);
            let output = use_case
                .execute(
                    &ctx,
                    ExecuteToolCallsInput::new(agent, input, vec![ToolCall::new(id, tool, args)]),
                )
                .await?;

            for result in &output.results {
                println!("{}", serde_json::to_string_pretty(result)?);
            }
            if output.failure_count() > 0 {
                bail!("tool call failed");
            }
        }
    }

    Ok(())
}

fn event_recorder(config: &FileConfig) -> Arc<dyn EventRecorder> {
    match config
        .events
        .jsonl_path
        .as_ref()
        .and_then(JsonlEventRecorder::new)
    {
        Some(recorder) => {
            info!(path = %recorder.path().display(), "Recording tool events");
            Arc::new(recorder)
        }
        None => Arc::new(NoEventRecorder),
    }
}

async fn build_registry(
    factory: ExecutorFactory,
    events: Arc<dyn EventRecorder>,
    agent: &str,
    namespace: &str,
) -> Result<ToolRegistry> {
    let mut registry =
        ToolRegistry::new(factory).with_recorders(Arc::new(TracingToolRecorder), events);
    registry
        .register_agent(agent, namespace)
        .await
        .with_context(|| format!("failed to build tools for agent '{}'", agent))?;
    info!(agent, namespace, tools = registry.len(), "Registry ready");
    Ok(registry)
}

use std::collections::BTreeMap;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use waypoint_config::{ExecutionMode, ManualRunRequest, User, WorkflowDef};
use waypoint_planner::{AdditionalData, ExecutionService, StaticContextProvider, StdoutRunner};

/// Waypoint - decides where a workflow execution starts
#[derive(Parser)]
#[command(name = "waypoint")]
#[command(version, about, long_about = None)]
struct Cli {
  #[command(flatten)]
  context: ContextArgs,

  #[command(subcommand)]
  command: Option<Commands>,
}

/// Execution context handed to the runner.
#[derive(Args)]
struct ContextArgs {
  /// Base URL webhook nodes are reachable under
  #[arg(
    long,
    global = true,
    env = "WAYPOINT_WEBHOOK_BASE_URL",
    default_value = "http://localhost:5678/"
  )]
  webhook_base_url: String,

  /// Timezone executions run in
  #[arg(long, global = true, env = "WAYPOINT_TIMEZONE", default_value = "UTC")]
  timezone: String,

  /// Variable made available to the runner (KEY=VALUE, repeatable)
  #[arg(long = "var", global = true, value_parser = parse_variable)]
  variables: Vec<(String, String)>,
}

#[derive(Subcommand)]
enum Commands {
  /// Plan an execution without running any node
  Plan {
    #[command(subcommand)]
    target: PlanTarget,
  },

  /// Run a workflow starting from one node
  Run {
    /// Path to the workflow file (JSON)
    workflow_file: PathBuf,

    /// The node to start from
    #[arg(long)]
    node: String,

    /// Execution mode recorded on the plan
    #[arg(long, default_value = "trigger", value_parser = parse_mode)]
    mode: ExecutionMode,
  },
}

#[derive(Subcommand)]
enum PlanTarget {
  /// Plan a manual run from a run request
  Manual {
    /// Path to the run request file (JSON)
    request_file: PathBuf,

    /// User the run is executed for
    #[arg(long, env = "WAYPOINT_USER_ID", default_value = "cli")]
    user_id: String,

    /// Push connection the runner reports progress to
    #[arg(long)]
    push_ref: Option<String>,
  },

  /// Select the pinned node that would simulate a live trigger
  Activator {
    /// Path to the workflow file (JSON)
    workflow_file: PathBuf,

    /// Start node of a partial run (repeatable, first one decides)
    #[arg(long = "start-node")]
    start_nodes: Vec<String>,
  },
}

fn main() -> Result<()> {
  tracing_subscriber::fmt()
    .with_env_filter(
      EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("waypoint=info,warn")),
    )
    .with_writer(io::stderr)
    .with_target(false)
    .init();

  let cli = Cli::parse();
  let additional_data = cli.context.into_additional_data();

  match cli.command {
    Some(Commands::Plan { target }) => match target {
      PlanTarget::Manual {
        request_file,
        user_id,
        push_ref,
      } => {
        plan_manual(request_file, user_id, push_ref, additional_data)?;
      }
      PlanTarget::Activator {
        workflow_file,
        start_nodes,
      } => {
        plan_activator(workflow_file, start_nodes, additional_data)?;
      }
    },
    Some(Commands::Run {
      workflow_file,
      node,
      mode,
    }) => {
      run_workflow(workflow_file, node, mode, additional_data)?;
    }
    None => {
      println!("waypoint - use --help to see available commands");
    }
  }

  Ok(())
}

impl ContextArgs {
  fn into_additional_data(self) -> AdditionalData {
    AdditionalData {
      user_id: None,
      webhook_base_url: self.webhook_base_url,
      timezone: self.timezone,
      variables: self.variables.into_iter().collect::<BTreeMap<_, _>>(),
    }
  }
}

fn parse_variable(raw: &str) -> Result<(String, String), String> {
  let (key, value) = raw
    .split_once('=')
    .ok_or_else(|| format!("expected KEY=VALUE, got '{}'", raw))?;
  Ok((key.to_string(), value.to_string()))
}

fn parse_mode(raw: &str) -> Result<ExecutionMode, String> {
  serde_json::from_value(serde_json::Value::String(raw.to_string()))
    .map_err(|_| format!("unknown execution mode '{}'", raw))
}

fn service(
  additional_data: AdditionalData,
) -> ExecutionService<StaticContextProvider, StdoutRunner> {
  ExecutionService::new(StaticContextProvider::new(additional_data), StdoutRunner)
}

async fn read_json<T: serde::de::DeserializeOwned>(path: &Path, what: &str) -> Result<T> {
  let content = tokio::fs::read_to_string(path)
    .await
    .with_context(|| format!("failed to read {} file: {}", what, path.display()))?;

  serde_json::from_str(&content)
    .with_context(|| format!("failed to parse {} file: {}", what, path.display()))
}

fn plan_manual(
  request_file: PathBuf,
  user_id: String,
  push_ref: Option<String>,
  additional_data: AdditionalData,
) -> Result<()> {
  let rt = tokio::runtime::Runtime::new()?;
  rt.block_on(async {
    let request: ManualRunRequest = read_json(&request_file, "run request").await?;
    tracing::info!(
      workflow = %request.workflow_data.display_id(),
      nodes = request.workflow_data.nodes.len(),
      "loaded run request"
    );

    let result = service(additional_data)
      .execute_manually(request, &User::new(user_id), push_ref.as_deref())
      .await
      .context("manual run submission failed")?;

    println!("{}", serde_json::to_string_pretty(&result)?);
    Ok(())
  })
}

fn plan_activator(
  workflow_file: PathBuf,
  start_nodes: Vec<String>,
  additional_data: AdditionalData,
) -> Result<()> {
  let rt = tokio::runtime::Runtime::new()?;
  let workflow: WorkflowDef = rt.block_on(read_json(&workflow_file, "workflow"))?;

  let selected = service(additional_data)
    .select_pinned_activator_starter(&workflow, Some(start_nodes.as_slice()), workflow.pin_data.as_ref())
    .context("activator selection failed")?;

  println!("{}", serde_json::to_string_pretty(&selected)?);
  Ok(())
}

fn run_workflow(
  workflow_file: PathBuf,
  node_name: String,
  mode: ExecutionMode,
  additional_data: AdditionalData,
) -> Result<()> {
  let rt = tokio::runtime::Runtime::new()?;
  rt.block_on(async {
    let workflow: WorkflowDef = read_json(&workflow_file, "workflow").await?;

    let start_node = workflow
      .nodes
      .iter()
      .find(|n| n.name == node_name)
      .with_context(|| format!("node '{}' not found in workflow", node_name))?;

    let items = read_items_from_stdin()?;
    tracing::info!(node = %node_name, items = items.len(), "starting from node");

    let execution_id = service(additional_data.clone())
      .run_workflow(&workflow, start_node, vec![items], additional_data, mode)
      .await
      .context("workflow run submission failed")?;

    eprintln!("Execution submitted: {}", execution_id);
    Ok(())
  })
}

/// Input items for the start node. An array is one item per element, any
/// other value is a single item, no input is a single empty item.
fn read_items_from_stdin() -> Result<Vec<serde_json::Value>> {
  use std::io::IsTerminal;

  let empty = || vec![serde_json::json!({})];

  if io::stdin().is_terminal() {
    return Ok(empty());
  }

  let mut input = String::new();
  io::stdin()
    .read_to_string(&mut input)
    .context("failed to read input items from stdin")?;

  if input.trim().is_empty() {
    return Ok(empty());
  }

  let value: serde_json::Value =
    serde_json::from_str(&input).context("failed to parse input JSON from stdin")?;
  Ok(match value {
    serde_json::Value::Array(items) => items,
    other => vec![other],
  })
}

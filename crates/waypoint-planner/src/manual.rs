//! Manual-run planning.

use tracing::{debug, info};
use waypoint_config::{ExecutionMode, ManualRunRequest, NodeDef, StartNodeData, User};
use waypoint_workflow::{NodeRole, PinDataIndex, Workflow};

use crate::error::PlanError;
use crate::plan::{ExecutionPlan, PartialExecutionVersion};

/// How the start nodes of a manual run were decided.
enum StartResolution<'a> {
  /// The caller named a trigger; the runner resolves it.
  TriggerOverride,
  /// The caller already supplied start nodes.
  Supplied(&'a [StartNodeData]),
  /// Derived from pinned trigger data. `candidates` counts every match.
  PinnedTrigger {
    node: &'a NodeDef,
    candidates: usize,
  },
  /// Nothing to derive from; the runner picks.
  Deferred,
}

/// Roles a manual run may start from.
const MANUAL_START_ROLES: [NodeRole; 2] = [NodeRole::Trigger, NodeRole::Webhook];

/// Enabled trigger and webhook nodes that have pinned data, in declaration order.
fn pinned_triggers<'a>(workflow: &Workflow<'a>, pins: PinDataIndex<'_>) -> Vec<&'a NodeDef> {
  let mut triggers: Vec<&'a NodeDef> = MANUAL_START_ROLES
    .iter()
    .flat_map(|&role| workflow.nodes_of_role(role))
    .filter(|node| !node.disabled && pins.has_pinned_data(&node.name))
    .collect();
  triggers.sort_by_key(|node| workflow.index_of(&node.name));
  triggers
}

fn resolve_start<'a>(workflow: &Workflow<'a>, request: &'a ManualRunRequest) -> StartResolution<'a> {
  if request.trigger_to_start_from.is_some() {
    return StartResolution::TriggerOverride;
  }

  if let Some(supplied) = request.start_nodes.resolved() {
    return StartResolution::Supplied(supplied);
  }

  let pins = PinDataIndex::new(request.workflow_data.pin_data.as_ref());
  let triggers = pinned_triggers(workflow, pins);
  match triggers.first() {
    Some(&node) => StartResolution::PinnedTrigger {
      node,
      candidates: triggers.len(),
    },
    None => StartResolution::Deferred,
  }
}

/// Build the execution plan for a user-initiated run.
///
/// Start nodes are resolved in order:
/// 1. `triggerToStartFrom` set: no start nodes, the override is forwarded.
/// 2. Non-empty `startNodes` supplied: passed through.
/// 3. Enabled trigger or webhook nodes with pinned data: the first declared
///    one becomes the only start node, with no source.
/// 4. Otherwise the supplied value is kept as is (absent or empty).
///
/// Run data, pin data, dirty node names and the destination are forwarded
/// untouched. The plan does not depend on anything but the arguments.
pub fn plan_manual_run(
  request: &ManualRunRequest,
  user: &User,
  push_ref: Option<&str>,
) -> Result<ExecutionPlan, PlanError> {
  let version = match request.partial_execution_version {
    Some(number) => PartialExecutionVersion::try_from(number)?,
    None => PartialExecutionVersion::CURRENT,
  };

  let workflow = Workflow::new(&request.workflow_data)?;

  let start_nodes = match resolve_start(&workflow, request) {
    StartResolution::TriggerOverride => {
      debug!("start nodes left to trigger override");
      None
    }
    StartResolution::Supplied(nodes) => {
      debug!(count = nodes.len(), "using supplied start nodes");
      Some(nodes.to_vec())
    }
    StartResolution::PinnedTrigger { node, candidates } => {
      if candidates > 1 {
        info!(
          trigger = %node.name,
          candidates,
          "multiple pinned triggers, starting from first declared"
        );
      } else {
        debug!(trigger = %node.name, "starting from pinned trigger");
      }
      Some(vec![StartNodeData::root(node.name.clone())])
    }
    StartResolution::Deferred => {
      debug!("no pinned trigger, start node resolution deferred to runner");
      request.start_nodes.clone().into_option()
    }
  };

  let mut workflow_data = request.workflow_data.clone();
  // Manual runs never register live triggers.
  workflow_data.active = false;

  Ok(ExecutionPlan {
    execution_mode: ExecutionMode::Manual,
    workflow_data,
    start_nodes,
    run_data: request.run_data.clone(),
    pin_data: request.workflow_data.pin_data.clone(),
    destination_node: request.destination_node.clone(),
    partial_execution_version: Some(version),
    dirty_node_names: request.dirty_node_names.clone(),
    trigger_to_start_from: request.trigger_to_start_from.clone(),
    user_id: Some(user.id.clone()),
    push_ref: push_ref.map(str::to_string),
    execution_data: None,
  })
}

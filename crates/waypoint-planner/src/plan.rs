//! Execution plan types.

use serde::{Deserialize, Serialize};
use waypoint_config::{
  ExecutionMode, NodeDef, PinData, RunData, SourceData, StartNodeData, TriggerToStartFrom,
  WorkflowDef,
};
use waypoint_workflow::Workflow;

use crate::error::PlanError;

/// Which start-node resolution algorithm produced a plan.
///
/// Serialized as its number. Unknown numbers are rejected instead of being
/// mapped onto an existing algorithm.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum PartialExecutionVersion {
  #[default]
  V1,
}

impl PartialExecutionVersion {
  /// The version this planner implements.
  pub const CURRENT: Self = Self::V1;

  pub fn number(self) -> u8 {
    match self {
      Self::V1 => 1,
    }
  }
}

impl TryFrom<u8> for PartialExecutionVersion {
  type Error = PlanError;

  fn try_from(value: u8) -> Result<Self, Self::Error> {
    match value {
      1 => Ok(Self::V1),
      other => Err(PlanError::UnsupportedPartialExecutionVersion(other)),
    }
  }
}

impl From<PartialExecutionVersion> for u8 {
  fn from(value: PartialExecutionVersion) -> Self {
    value.number()
  }
}

/// Input for one node on the execution stack.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeInput {
  /// Items per input connection.
  pub main: Vec<Vec<serde_json::Value>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExecutionStackEntry {
  pub node: NodeDef,
  pub data: NodeInput,
  pub source: Option<SourceData>,
}

/// Pre-seeded execution state for runs that start from a known node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExecutionData {
  pub node_execution_stack: Vec<ExecutionStackEntry>,
}

/// Everything a runner needs to perform one execution.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExecutionPlan {
  pub execution_mode: ExecutionMode,
  pub workflow_data: WorkflowDef,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub start_nodes: Option<Vec<StartNodeData>>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub run_data: Option<RunData>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub pin_data: Option<PinData>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub destination_node: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub partial_execution_version: Option<PartialExecutionVersion>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub dirty_node_names: Option<Vec<String>>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub trigger_to_start_from: Option<TriggerToStartFrom>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub user_id: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub push_ref: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub execution_data: Option<ExecutionData>,
}

/// Result of a manual run submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ManualRunResult {
  pub execution_id: String,
}

/// Build a plan that starts directly from `start_node` with `input_data`.
///
/// Used when the caller already knows the start node, e.g. a live webhook
/// call. The workflow's own pin data is forwarded and `user_id` is carried
/// onto the plan.
pub fn plan_workflow_run(
  workflow: &WorkflowDef,
  start_node: &NodeDef,
  input_data: Vec<Vec<serde_json::Value>>,
  user_id: Option<String>,
  mode: ExecutionMode,
) -> Result<ExecutionPlan, PlanError> {
  let view = Workflow::new(workflow)?;
  if view.find_node_by_name(&start_node.name).is_none() {
    return Err(PlanError::NodeNotFound(start_node.name.clone()));
  }

  Ok(ExecutionPlan {
    execution_mode: mode,
    workflow_data: workflow.clone(),
    start_nodes: None,
    run_data: None,
    pin_data: workflow.pin_data.clone(),
    destination_node: None,
    partial_execution_version: None,
    dirty_node_names: None,
    trigger_to_start_from: None,
    user_id,
    push_ref: None,
    execution_data: Some(ExecutionData {
      node_execution_stack: vec![ExecutionStackEntry {
        node: start_node.clone(),
        data: NodeInput { main: input_data },
        source: None,
      }],
    }),
  })
}

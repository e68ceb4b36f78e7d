use serde::{Deserialize, Serialize};

use crate::run_data::{RunData, StartNodeData};
use crate::workflow::WorkflowDef;

/// The user a manual run is executed on behalf of.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
  pub id: String,
}

impl User {
  pub fn new(id: impl Into<String>) -> Self {
    Self { id: id.into() }
  }
}

/// Explicit trigger a run must begin from, bypassing auto-selection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TriggerToStartFrom {
  pub name: String,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub data: Option<serde_json::Value>,
}

impl TriggerToStartFrom {
  pub fn new(name: impl Into<String>) -> Self {
    Self {
      name: name.into(),
      data: None,
    }
  }
}

/// Start nodes as supplied by the caller.
///
/// On the wire this is an optional array: a missing field is [`StartNodes::Derive`],
/// any array (including an empty one) is [`StartNodes::Explicit`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Option<Vec<StartNodeData>>", into = "Option<Vec<StartNodeData>>")]
pub enum StartNodes {
  /// Caller left resolution to the planner.
  #[default]
  Derive,
  /// Caller supplied a list, possibly empty.
  Explicit(Vec<StartNodeData>),
}

impl StartNodes {
  /// The supplied list when it is non-empty.
  pub fn resolved(&self) -> Option<&[StartNodeData]> {
    match self {
      Self::Explicit(nodes) if !nodes.is_empty() => Some(nodes),
      _ => None,
    }
  }

  pub fn into_option(self) -> Option<Vec<StartNodeData>> {
    self.into()
  }
}

impl From<Option<Vec<StartNodeData>>> for StartNodes {
  fn from(value: Option<Vec<StartNodeData>>) -> Self {
    match value {
      Some(nodes) => Self::Explicit(nodes),
      None => Self::Derive,
    }
  }
}

impl From<StartNodes> for Option<Vec<StartNodeData>> {
  fn from(value: StartNodes) -> Self {
    match value {
      StartNodes::Derive => None,
      StartNodes::Explicit(nodes) => Some(nodes),
    }
  }
}

/// A user-initiated run request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ManualRunRequest {
  pub workflow_data: WorkflowDef,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub run_data: Option<RunData>,
  #[serde(default, skip_serializing_if = "is_derive")]
  pub start_nodes: StartNodes,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub destination_node: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub dirty_node_names: Option<Vec<String>>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub trigger_to_start_from: Option<TriggerToStartFrom>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub partial_execution_version: Option<u8>,
}

fn is_derive(start_nodes: &StartNodes) -> bool {
  matches!(start_nodes, StartNodes::Derive)
}

impl ManualRunRequest {
  /// A request that only carries the workflow; everything else is absent.
  pub fn new(workflow_data: WorkflowDef) -> Self {
    Self {
      workflow_data,
      run_data: None,
      start_nodes: StartNodes::Derive,
      destination_node: None,
      dirty_node_names: None,
      trigger_to_start_from: None,
      partial_execution_version: None,
    }
  }
}

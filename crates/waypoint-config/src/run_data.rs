//! Per-node data carried between runs.
//!
//! Maps are ordered so that anything built from them serializes the same way
//! every time.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Node name -> previously captured output items.
pub type PinData = BTreeMap<String, Vec<serde_json::Value>>;

/// Node name -> per-run task data from an earlier execution.
pub type RunData = BTreeMap<String, Vec<serde_json::Value>>;

/// Where a start node's input comes from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SourceData {
  pub previous_node: String,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub previous_node_output: Option<u32>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub previous_node_run: Option<u32>,
}

/// A node an execution starts from.
///
/// `source_data` is `None` for graph roots and is always serialized
/// (as `null`) so runners can tell a root from a missing field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StartNodeData {
  pub name: String,
  #[serde(default)]
  pub source_data: Option<SourceData>,
}

impl StartNodeData {
  /// A start node with no upstream source.
  pub fn root(name: impl Into<String>) -> Self {
    Self {
      name: name.into(),
      source_data: None,
    }
  }
}

use serde::{Deserialize, Serialize};

/// A node in a workflow definition.
///
/// The `type` identifier decides the node's role (trigger, webhook, ...).
/// Classification lives in `waypoint-workflow`; this type only carries data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeDef {
  /// Unique key within a workflow.
  pub name: String,
  #[serde(rename = "type")]
  pub node_type: String,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub id: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub type_version: Option<f64>,
  #[serde(default)]
  pub disabled: bool,
  #[serde(default)]
  pub position: [f64; 2],
  #[serde(default = "empty_parameters")]
  pub parameters: serde_json::Value,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub webhook_id: Option<String>,
}

fn empty_parameters() -> serde_json::Value {
  serde_json::Value::Object(serde_json::Map::new())
}

impl NodeDef {
  /// Create an enabled node at the origin with no parameters.
  pub fn new(name: impl Into<String>, node_type: impl Into<String>) -> Self {
    Self {
      name: name.into(),
      node_type: node_type.into(),
      id: None,
      type_version: None,
      disabled: false,
      position: [0.0, 0.0],
      parameters: empty_parameters(),
      webhook_id: None,
    }
  }

  /// Mark the node disabled.
  pub fn disabled(mut self) -> Self {
    self.disabled = true;
    self
  }
}

/// A directed connection between two nodes, referenced by name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Connection {
  pub from: String,
  pub to: String,
  #[serde(default)]
  pub output_index: u32,
  #[serde(default)]
  pub input_index: u32,
}

impl Connection {
  pub fn new(from: impl Into<String>, to: impl Into<String>) -> Self {
    Self {
      from: from.into(),
      to: to.into(),
      output_index: 0,
      input_index: 0,
    }
  }
}

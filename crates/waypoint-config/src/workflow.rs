use serde::{Deserialize, Serialize};

use crate::node::{Connection, NodeDef};
use crate::run_data::PinData;

/// A workflow definition as submitted by a caller.
///
/// Node order is significant: planners break ties by declaration order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkflowDef {
  #[serde(skip_serializing_if = "Option::is_none")]
  pub id: Option<String>,
  #[serde(default)]
  pub name: String,
  #[serde(default)]
  pub active: bool,
  pub nodes: Vec<NodeDef>,
  #[serde(default)]
  pub connections: Vec<Connection>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub pin_data: Option<PinData>,
}

impl WorkflowDef {
  /// Create an inactive workflow with the given nodes and no connections.
  pub fn new(name: impl Into<String>, nodes: Vec<NodeDef>) -> Self {
    Self {
      id: None,
      name: name.into(),
      active: false,
      nodes,
      connections: Vec::new(),
      pin_data: None,
    }
  }

  pub fn with_connections(mut self, connections: Vec<Connection>) -> Self {
    self.connections = connections;
    self
  }

  pub fn with_pin_data(mut self, pin_data: PinData) -> Self {
    self.pin_data = Some(pin_data);
    self
  }

  /// Identifier used in logs: the id when present, otherwise the name.
  pub fn display_id(&self) -> &str {
    self.id.as_deref().unwrap_or(&self.name)
  }
}

use std::collections::HashMap;

use waypoint_config::{NodeDef, WorkflowDef};

use crate::error::WorkflowError;
use crate::graph::Graph;
use crate::role::NodeRole;

/// A validated, read-only view over a workflow definition.
#[derive(Debug, Clone)]
pub struct Workflow<'a> {
  def: &'a WorkflowDef,
  /// Node name -> position in `def.nodes`.
  by_name: HashMap<&'a str, usize>,
  graph: Graph,
}

impl<'a> Workflow<'a> {
  /// Validate a definition and build lookups for it.
  pub fn new(def: &'a WorkflowDef) -> Result<Self, WorkflowError> {
    let mut by_name = HashMap::with_capacity(def.nodes.len());
    for (index, node) in def.nodes.iter().enumerate() {
      if by_name.insert(node.name.as_str(), index).is_some() {
        return Err(WorkflowError::DuplicateNodeName(node.name.clone()));
      }
    }

    for connection in &def.connections {
      if !by_name.contains_key(connection.from.as_str())
        || !by_name.contains_key(connection.to.as_str())
      {
        return Err(WorkflowError::InvalidConnection {
          from: connection.from.clone(),
          to: connection.to.clone(),
        });
      }
    }

    Ok(Self {
      def,
      by_name,
      graph: Graph::new(&def.nodes, &def.connections),
    })
  }

  /// The underlying definition.
  pub fn def(&self) -> &'a WorkflowDef {
    self.def
  }

  /// Nodes in declaration order.
  pub fn nodes(&self) -> &'a [NodeDef] {
    &self.def.nodes
  }

  pub fn graph(&self) -> &Graph {
    &self.graph
  }

  /// Get a node by name.
  pub fn find_node_by_name(&self, name: &str) -> Option<&'a NodeDef> {
    let nodes: &'a [NodeDef] = &self.def.nodes;
    self.by_name.get(name).map(|&index| &nodes[index])
  }

  /// Declaration index of the named node.
  pub fn index_of(&self, name: &str) -> Option<usize> {
    self.by_name.get(name).copied()
  }

  /// Role of the named node, if it exists.
  pub fn role_of(&self, name: &str) -> Option<NodeRole> {
    self
      .find_node_by_name(name)
      .map(|node| NodeRole::of(&node.node_type))
  }

  /// Nodes with the given role, in declaration order.
  pub fn nodes_of_role(&self, role: NodeRole) -> Vec<&'a NodeDef> {
    self
      .nodes()
      .iter()
      .filter(|node| NodeRole::of(&node.node_type) == role)
      .collect()
  }
}

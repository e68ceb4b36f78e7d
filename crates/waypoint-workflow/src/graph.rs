use std::collections::{HashMap, HashSet, VecDeque};

use waypoint_config::{Connection, NodeDef};

/// Graph structure for traversal.
///
/// Neighbour lists keep connection order; entry points keep node order.
#[derive(Debug, Clone)]
pub struct Graph {
  /// Adjacency list: node name -> downstream node names.
  adjacency: HashMap<String, Vec<String>>,
  /// Reverse adjacency: node name -> upstream node names.
  reverse_adjacency: HashMap<String, Vec<String>>,
  /// Nodes with no incoming connections.
  entry_points: Vec<String>,
}

impl Graph {
  /// Build a graph from nodes and connections.
  ///
  /// Connections are assumed to reference known nodes; `Workflow::new`
  /// checks that before building.
  pub fn new(nodes: &[NodeDef], connections: &[Connection]) -> Self {
    let mut adjacency: HashMap<String, Vec<String>> = HashMap::new();
    let mut reverse_adjacency: HashMap<String, Vec<String>> = HashMap::new();

    for node in nodes {
      adjacency.entry(node.name.clone()).or_default();
      reverse_adjacency.entry(node.name.clone()).or_default();
    }

    for connection in connections {
      let downstream = adjacency.entry(connection.from.clone()).or_default();
      if !downstream.contains(&connection.to) {
        downstream.push(connection.to.clone());
      }
      let upstream = reverse_adjacency.entry(connection.to.clone()).or_default();
      if !upstream.contains(&connection.from) {
        upstream.push(connection.from.clone());
      }
    }

    let entry_points: Vec<String> = nodes
      .iter()
      .filter(|node| {
        reverse_adjacency
          .get(&node.name)
          .is_none_or(|v| v.is_empty())
      })
      .map(|node| node.name.clone())
      .collect();

    Self {
      adjacency,
      reverse_adjacency,
      entry_points,
    }
  }

  /// Get entry points (nodes with no incoming connections).
  pub fn entry_points(&self) -> &[String] {
    &self.entry_points
  }

  /// Get downstream nodes for a given node.
  pub fn downstream(&self, name: &str) -> &[String] {
    self
      .adjacency
      .get(name)
      .map(|v| v.as_slice())
      .unwrap_or(&[])
  }

  /// Get upstream nodes for a given node.
  pub fn upstream(&self, name: &str) -> &[String] {
    self
      .reverse_adjacency
      .get(name)
      .map(|v| v.as_slice())
      .unwrap_or(&[])
  }

  /// All transitive upstream nodes, nearest first, each listed once.
  pub fn ancestors(&self, name: &str) -> Vec<String> {
    let mut seen: HashSet<&str> = HashSet::from([name]);
    let mut queue: VecDeque<&str> = VecDeque::from([name]);
    let mut ancestors = Vec::new();

    while let Some(current) = queue.pop_front() {
      for parent in self.upstream(current) {
        if seen.insert(parent.as_str()) {
          ancestors.push(parent.clone());
          queue.push_back(parent.as_str());
        }
      }
    }

    ancestors
  }
}

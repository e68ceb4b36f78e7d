//! Activator selection.
//!
//! When a workflow is activated without a live trigger event, one node's
//! pinned data stands in for that event. This module picks the node.

use waypoint_config::{NodeDef, PinData};
use waypoint_workflow::{NodeRole, PinDataIndex, Workflow};

/// Roles that can stand in for a live trigger, highest priority first.
const ACTIVATOR_PRIORITY: [NodeRole; 2] = [NodeRole::Webhook, NodeRole::ExecuteWorkflowTrigger];

/// Enabled nodes with pinned data, grouped by [`ACTIVATOR_PRIORITY`] and in
/// declaration order within each group.
fn pinned_activators<'a>(workflow: &Workflow<'a>, pins: PinDataIndex<'_>) -> Vec<&'a NodeDef> {
  ACTIVATOR_PRIORITY
    .iter()
    .flat_map(|&role| workflow.nodes_of_role(role))
    .filter(|node| !node.disabled && pins.has_pinned_data(&node.name))
    .collect()
}

/// Select the node whose pinned data should start an activation-time run.
///
/// Returns `None` when either `start_nodes` or `pin_data` is absent, or when
/// no eligible node is pinned. Webhooks win over execute-workflow triggers;
/// among equals the first declared node wins.
///
/// With an empty `start_nodes` (full run) the top candidate is returned. With
/// start nodes (partial run) the top candidate is only returned if it feeds
/// the first start node; a first start node with no parents must itself be a
/// candidate.
pub fn select_activator_start_node<'a>(
  workflow: &Workflow<'a>,
  start_nodes: Option<&[String]>,
  pin_data: Option<&PinData>,
) -> Option<&'a NodeDef> {
  let (Some(start_nodes), Some(pin_data)) = (start_nodes, pin_data) else {
    return None;
  };

  let candidates = pinned_activators(workflow, PinDataIndex::new(Some(pin_data)));
  let first_candidate = *candidates.first()?;

  let Some(first_start) = start_nodes.first() else {
    return Some(first_candidate);
  };

  let ancestors = workflow.graph().ancestors(first_start);
  if !ancestors.is_empty() {
    return ancestors
      .iter()
      .any(|name| *name == first_candidate.name)
      .then_some(first_candidate);
  }

  candidates
    .into_iter()
    .find(|candidate| candidate.name == *first_start)
}

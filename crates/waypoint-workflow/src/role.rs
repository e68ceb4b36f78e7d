//! Node role classification.
//!
//! A node's role is decided by its type identifier alone. [`ROLE_TABLE`] holds
//! the exact identifiers with a dedicated role; any other identifier ending in
//! `trigger` is a generic trigger.

use serde::{Deserialize, Serialize};

/// What part a node plays when deciding where an execution starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeRole {
  /// Receives HTTP calls and starts a workflow.
  Webhook,
  /// Answers a webhook call. Terminates a flow, never starts one.
  RespondToWebhook,
  /// Started by another workflow.
  ExecuteWorkflowTrigger,
  /// Any other event source.
  Trigger,
  Regular,
}

const ROLE_TABLE: &[(&str, NodeRole)] = &[
  ("n8n-nodes-base.webhook", NodeRole::Webhook),
  ("n8n-nodes-base.respondToWebhook", NodeRole::RespondToWebhook),
  ("n8n-nodes-base.executeWorkflowTrigger", NodeRole::ExecuteWorkflowTrigger),
];

const TRIGGER_SUFFIX: &str = "trigger";

impl NodeRole {
  /// Classify a node type identifier.
  pub fn of(node_type: &str) -> Self {
    if let Some((_, role)) = ROLE_TABLE.iter().find(|(id, _)| *id == node_type) {
      return *role;
    }

    if node_type.to_ascii_lowercase().ends_with(TRIGGER_SUFFIX) {
      NodeRole::Trigger
    } else {
      NodeRole::Regular
    }
  }
}

//! Tests for activator start-node selection.

use serde_json::json;
use waypoint_config::{Connection, NodeDef, PinData, WorkflowDef};
use waypoint_planner::select_activator_start_node;
use waypoint_workflow::Workflow;

fn webhook_node() -> NodeDef {
  let mut node = NodeDef::new("Webhook", "n8n-nodes-base.webhook");
  node.webhook_id = Some("de0f8dcb-7b64-4f22-b66d-d8f74d6aefb7".to_string());
  node
}

fn second_webhook_node() -> NodeDef {
  let mut node = webhook_node();
  node.name = "Webhook 2".to_string();
  node
}

fn execute_workflow_trigger_node() -> NodeDef {
  NodeDef::new("Execute Workflow Trigger", "n8n-nodes-base.executeWorkflowTrigger")
}

fn respond_to_webhook_node() -> NodeDef {
  NodeDef::new("Respond to Webhook", "n8n-nodes-base.respondToWebhook")
}

fn hacker_news_node() -> NodeDef {
  NodeDef::new("Hacker News", "n8n-nodes-base.hackerNews")
}

fn pinned(names: &[&str]) -> PinData {
  names
    .iter()
    .map(|name| (name.to_string(), vec![json!({ "json": { "key": "value" } })]))
    .collect()
}

fn default_pin_data() -> PinData {
  pinned(&["Webhook", "Execute Workflow Trigger", "Respond to Webhook"])
}

fn select(def: &WorkflowDef, start_nodes: Option<&[String]>, pin_data: Option<&PinData>) -> Option<String> {
  let workflow = Workflow::new(def).unwrap();
  select_activator_start_node(&workflow, start_nodes, pin_data).map(|node| node.name.clone())
}

#[test]
fn test_no_pin_data_selects_nothing() {
  let def = WorkflowDef::new("wf", vec![webhook_node()]);
  assert_eq!(select(&def, Some(&[][..]), None), None);
}

#[test]
fn test_no_start_nodes_selects_nothing() {
  let def = WorkflowDef::new("wf", vec![webhook_node()]);
  assert_eq!(select(&def, None, Some(&default_pin_data())), None);
}

#[test]
fn test_empty_workflow_selects_nothing() {
  let def = WorkflowDef::new("wf", vec![]);
  assert_eq!(select(&def, Some(&[][..]), Some(&default_pin_data())), None);
}

#[test]
fn test_webhook_only_choice() {
  let def = WorkflowDef::new("wf", vec![webhook_node()]);
  assert_eq!(
    select(&def, Some(&[][..]), Some(&default_pin_data())),
    Some("Webhook".to_string())
  );
}

#[test]
fn test_regular_node_is_not_a_choice() {
  let def = WorkflowDef::new("wf", vec![hacker_news_node()]);
  let pin_data = pinned(&["Hacker News"]);
  assert_eq!(select(&def, Some(&[][..]), Some(&pin_data)), None);
}

#[test]
fn test_respond_to_webhook_ignored() {
  let def = WorkflowDef::new("wf", vec![respond_to_webhook_node()]);
  assert_eq!(select(&def, Some(&[][..]), Some(&default_pin_data())), None);
}

#[test]
fn test_generic_trigger_is_not_eligible() {
  let def = WorkflowDef::new(
    "wf",
    vec![NodeDef::new("Airtable", "n8n-nodes-base.airtableTrigger")],
  );
  let pin_data = pinned(&["Airtable"]);
  assert_eq!(select(&def, Some(&[][..]), Some(&pin_data)), None);
}

#[test]
fn test_execute_workflow_trigger_only_choice() {
  let def = WorkflowDef::new("wf", vec![execute_workflow_trigger_node()]);
  assert_eq!(
    select(&def, Some(&[][..]), Some(&default_pin_data())),
    Some("Execute Workflow Trigger".to_string())
  );
}

#[test]
fn test_webhook_favored_over_execute_workflow_trigger() {
  let def = WorkflowDef::new("wf", vec![webhook_node(), execute_workflow_trigger_node()]);
  assert_eq!(
    select(&def, Some(&[][..]), Some(&default_pin_data())),
    Some("Webhook".to_string())
  );

  // Role outranks declaration order.
  let reversed = WorkflowDef::new("wf", vec![execute_workflow_trigger_node(), webhook_node()]);
  assert_eq!(
    select(&reversed, Some(&[][..]), Some(&default_pin_data())),
    Some("Webhook".to_string())
  );
}

#[test]
fn test_first_webhook_favored_over_second() {
  let def = WorkflowDef::new("wf", vec![webhook_node(), second_webhook_node()]);
  let both = pinned(&["Webhook", "Webhook 2"]);
  assert_eq!(select(&def, Some(&[][..]), Some(&both)), Some("Webhook".to_string()));

  let swapped = WorkflowDef::new("wf", vec![second_webhook_node(), webhook_node()]);
  assert_eq!(select(&swapped, Some(&[][..]), Some(&both)), Some("Webhook 2".to_string()));
}

#[test]
fn test_disabled_webhook_skipped() {
  let def = WorkflowDef::new(
    "wf",
    vec![webhook_node().disabled(), execute_workflow_trigger_node()],
  );
  assert_eq!(
    select(&def, Some(&[][..]), Some(&default_pin_data())),
    Some("Execute Workflow Trigger".to_string())
  );
}

#[test]
fn test_partial_run_requires_candidate_upstream() {
  let def = WorkflowDef::new(
    "wf",
    vec![
      webhook_node(),
      NodeDef::new("Set", "n8n-nodes-base.set"),
      NodeDef::new("Detached", "n8n-nodes-base.set"),
      NodeDef::new("After Detached", "n8n-nodes-base.set"),
    ],
  )
  .with_connections(vec![
    Connection::new("Webhook", "Set"),
    Connection::new("Detached", "After Detached"),
  ]);
  let pin_data = default_pin_data();

  let feeds_start = vec!["Set".to_string()];
  assert_eq!(
    select(&def, Some(feeds_start.as_slice()), Some(&pin_data)),
    Some("Webhook".to_string())
  );

  let unrelated_start = vec!["After Detached".to_string()];
  assert_eq!(select(&def, Some(unrelated_start.as_slice()), Some(&pin_data)), None);
}

#[test]
fn test_partial_run_from_root_start_node() {
  let def = WorkflowDef::new("wf", vec![webhook_node(), second_webhook_node()]);
  let both = pinned(&["Webhook", "Webhook 2"]);

  let start_at_second = vec!["Webhook 2".to_string()];
  assert_eq!(
    select(&def, Some(start_at_second.as_slice()), Some(&both)),
    Some("Webhook 2".to_string())
  );

  let start_elsewhere = vec!["Nowhere".to_string()];
  assert_eq!(select(&def, Some(start_elsewhere.as_slice()), Some(&both)), None);
}

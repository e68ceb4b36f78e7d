//! External collaborators the planner depends on.

use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use waypoint_config::{User, WorkflowDef};

use crate::plan::ExecutionPlan;

/// Error type collaborators report with.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Environment a runner needs alongside a plan.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdditionalData {
  #[serde(skip_serializing_if = "Option::is_none")]
  pub user_id: Option<String>,
  pub webhook_base_url: String,
  pub timezone: String,
  #[serde(default)]
  pub variables: BTreeMap<String, String>,
}

/// Supplies credentials and environment for an execution.
#[async_trait]
pub trait ContextProvider: Send + Sync {
  /// Resolve the context for running `workflow` on behalf of `user`.
  async fn execution_context(
    &self,
    workflow: &WorkflowDef,
    user: Option<&User>,
  ) -> Result<AdditionalData, BoxError>;
}

/// Executes a plan and reports the execution id.
#[async_trait]
pub trait Runner: Send + Sync {
  /// Start an execution. The plan is consumed.
  async fn run(&self, plan: ExecutionPlan, context: AdditionalData) -> Result<String, BoxError>;
}

#[async_trait]
impl<T: ContextProvider + ?Sized> ContextProvider for Arc<T> {
  async fn execution_context(
    &self,
    workflow: &WorkflowDef,
    user: Option<&User>,
  ) -> Result<AdditionalData, BoxError> {
    (**self).execution_context(workflow, user).await
  }
}

#[async_trait]
impl<T: Runner + ?Sized> Runner for Arc<T> {
  async fn run(&self, plan: ExecutionPlan, context: AdditionalData) -> Result<String, BoxError> {
    (**self).run(plan, context).await
  }
}

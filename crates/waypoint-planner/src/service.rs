//! Execution dispatch façade.
//!
//! [`ExecutionService`] is the one place where planning decisions turn into a
//! submitted execution.

use tracing::{error, info, instrument};
use waypoint_config::{ExecutionMode, ManualRunRequest, NodeDef, PinData, User, WorkflowDef};
use waypoint_workflow::Workflow;

use crate::activator::select_activator_start_node;
use crate::context::{AdditionalData, ContextProvider, Runner};
use crate::error::PlanError;
use crate::manual::plan_manual_run;
use crate::plan::{ExecutionPlan, ManualRunResult, plan_workflow_run};

/// Plans executions and submits them to a runner.
///
/// Holds no per-request state, so one service can serve concurrent calls.
pub struct ExecutionService<C, R> {
  context: C,
  runner: R,
}

impl<C: ContextProvider, R: Runner> ExecutionService<C, R> {
  pub fn new(context: C, runner: R) -> Self {
    Self { context, runner }
  }

  /// Plan and submit a user-initiated run.
  ///
  /// The context is fetched after planning; if that fails nothing is
  /// submitted.
  #[instrument(
    name = "execute_manually",
    skip_all,
    fields(
      workflow = %request.workflow_data.display_id(),
      user_id = %user.id,
    )
  )]
  pub async fn execute_manually(
    &self,
    request: ManualRunRequest,
    user: &User,
    push_ref: Option<&str>,
  ) -> Result<ManualRunResult, PlanError> {
    let plan = plan_manual_run(&request, user, push_ref)?;

    info!(
      start_nodes = ?plan.start_nodes.as_ref().map(|nodes| nodes.iter().map(|n| n.name.as_str()).collect::<Vec<_>>()),
      trigger_to_start_from = ?plan.trigger_to_start_from.as_ref().map(|t| t.name.as_str()),
      destination_node = ?plan.destination_node,
      "manual_run_planned"
    );

    let context = self
      .context
      .execution_context(&request.workflow_data, Some(user))
      .await
      .map_err(|source| {
        error!(error = %source, "execution_context_failed");
        PlanError::Context(source)
      })?;

    let execution_id = self.submit(plan, context).await?;
    Ok(ManualRunResult { execution_id })
  }

  /// Submit a run that starts directly from `start_node`.
  #[instrument(
    name = "run_workflow",
    skip_all,
    fields(
      workflow = %workflow.display_id(),
      start_node = %start_node.name,
      mode = %mode,
    )
  )]
  pub async fn run_workflow(
    &self,
    workflow: &WorkflowDef,
    start_node: &NodeDef,
    input_data: Vec<Vec<serde_json::Value>>,
    additional_data: AdditionalData,
    mode: ExecutionMode,
  ) -> Result<String, PlanError> {
    let plan = plan_workflow_run(
      workflow,
      start_node,
      input_data,
      additional_data.user_id.clone(),
      mode,
    )?;
    self.submit(plan, additional_data).await
  }

  /// Pick the node whose pinned data should simulate a live trigger.
  pub fn select_pinned_activator_starter<'w>(
    &self,
    workflow: &'w WorkflowDef,
    start_nodes: Option<&[String]>,
    pin_data: Option<&PinData>,
  ) -> Result<Option<&'w NodeDef>, PlanError> {
    let view = Workflow::new(workflow)?;
    Ok(select_activator_start_node(&view, start_nodes, pin_data))
  }

  async fn submit(
    &self,
    plan: ExecutionPlan,
    context: AdditionalData,
  ) -> Result<String, PlanError> {
    let mode = plan.execution_mode;

    match self.runner.run(plan, context).await {
      Ok(execution_id) => {
        info!(execution_id = %execution_id, mode = %mode, "execution_submitted");
        Ok(execution_id)
      }
      Err(source) => {
        error!(error = %source, mode = %mode, "execution_submit_failed");
        Err(PlanError::Runner(source))
      }
    }
  }
}

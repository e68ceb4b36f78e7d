//! Planner error types.

use waypoint_workflow::WorkflowError;

use crate::context::BoxError;

/// Errors that end a planning call.
///
/// Ambiguous or missing start candidates are not errors; they resolve inside
/// the planner. Collaborator failures keep the collaborator's message.
#[derive(Debug, thiserror::Error)]
pub enum PlanError {
  /// The workflow graph failed validation.
  #[error("invalid workflow: {0}")]
  InvalidWorkflow(#[from] WorkflowError),

  /// The request asked for a resolution algorithm this planner does not have.
  #[error("unsupported partial execution version: {0}")]
  UnsupportedPartialExecutionVersion(u8),

  /// A node named by the caller is not part of the workflow.
  #[error("node '{0}' not found in workflow")]
  NodeNotFound(String),

  /// Fetching the execution context failed.
  #[error(transparent)]
  Context(BoxError),

  /// The runner rejected or failed the submission.
  #[error(transparent)]
  Runner(BoxError),
}

//! In-process collaborators for the CLI and tests.

use std::io::Write;

use async_trait::async_trait;
use tracing::debug;
use waypoint_config::{User, WorkflowDef};

use crate::context::{AdditionalData, BoxError, ContextProvider, Runner};
use crate::plan::ExecutionPlan;

/// Returns the same context for every workflow, stamped with the caller's id.
#[derive(Debug, Clone, Default)]
pub struct StaticContextProvider {
  data: AdditionalData,
}

impl StaticContextProvider {
  pub fn new(data: AdditionalData) -> Self {
    Self { data }
  }
}

#[async_trait]
impl ContextProvider for StaticContextProvider {
  async fn execution_context(
    &self,
    workflow: &WorkflowDef,
    user: Option<&User>,
  ) -> Result<AdditionalData, BoxError> {
    debug!(workflow = %workflow.display_id(), "static execution context");

    let mut data = self.data.clone();
    if let Some(user) = user {
      data.user_id = Some(user.id.clone());
    }
    Ok(data)
  }
}

/// Prints each plan as pretty JSON to stdout instead of executing it.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdoutRunner;

#[async_trait]
impl Runner for StdoutRunner {
  async fn run(&self, plan: ExecutionPlan, _context: AdditionalData) -> Result<String, BoxError> {
    let rendered = serde_json::to_string_pretty(&plan)?;

    {
      let mut stdout = std::io::stdout().lock();
      writeln!(stdout, "{}", rendered)?;
    }

    Ok(uuid::Uuid::new_v4().to_string())
  }
}

use std::fmt;

use serde::{Deserialize, Serialize};

/// How an execution was initiated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExecutionMode {
  Cli,
  Error,
  Integrated,
  Internal,
  Manual,
  Retry,
  Trigger,
  Webhook,
  Evaluation,
}

impl fmt::Display for ExecutionMode {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let s = match self {
      Self::Cli => "cli",
      Self::Error => "error",
      Self::Integrated => "integrated",
      Self::Internal => "internal",
      Self::Manual => "manual",
      Self::Retry => "retry",
      Self::Trigger => "trigger",
      Self::Webhook => "webhook",
      Self::Evaluation => "evaluation",
    };
    f.write_str(s)
  }
}

use thiserror::Error;

#[derive(Debug, Error)]
pub enum WorkflowError {
  #[error("duplicate node name: {0}")]
  DuplicateNodeName(String),

  #[error("connection references unknown node: from={from}, to={to}")]
  InvalidConnection { from: String, to: String },
}

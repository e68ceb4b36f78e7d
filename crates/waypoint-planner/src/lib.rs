//! Waypoint Planner
//!
//! This crate decides where an execution starts and hands the result to a
//! runner. It does not execute nodes itself.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                     ExecutionService                        │
//! │  - execute_manually(request, user) → { executionId }        │
//! │  - run_workflow(workflow, start node, input, context, mode) │
//! └─────────────────────────────────────────────────────────────┘
//!          │                                       │
//!          ▼                                       ▼
//! ┌──────────────────────────────┐   ┌──────────────────────────┐
//! │ plan_manual_run              │   │ ContextProvider / Runner │
//! │ select_activator_start_node  │   │ (external collaborators) │
//! │  - pure, no I/O              │   │                          │
//! └──────────────────────────────┘   └──────────────────────────┘
//! ```
//!
//! Planning is pure: identical inputs give identical plans. The only
//! suspension points are the context fetch and the runner submission, both
//! awaited once and never retried.

mod activator;
mod context;
mod error;
mod local;
mod manual;
mod plan;
mod service;

pub use activator::select_activator_start_node;
pub use context::{AdditionalData, BoxError, ContextProvider, Runner};
pub use error::PlanError;
pub use local::{StaticContextProvider, StdoutRunner};
pub use manual::plan_manual_run;
pub use plan::{
  ExecutionData, ExecutionPlan, ExecutionStackEntry, ManualRunResult, NodeInput,
  PartialExecutionVersion, plan_workflow_run,
};
pub use service::ExecutionService;

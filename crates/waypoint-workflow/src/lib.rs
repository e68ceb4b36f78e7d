//! Waypoint Workflow
//!
//! This crate provides the read-only view of a workflow that the planner
//! works against. A [`Workflow`] borrows a `WorkflowDef` and adds:
//! - Validation (unique node names, connections between known nodes)
//! - Name lookups and role lookups in declaration order
//! - A [`Graph`] for upstream/downstream traversal
//!
//! [`PinDataIndex`] answers "does this node have pinned data" without caring
//! about the data itself.

mod error;
mod graph;
mod pin_data;
mod role;
mod workflow;

pub use error::WorkflowError;
pub use graph::Graph;
pub use pin_data::PinDataIndex;
pub use role::NodeRole;
pub use workflow::Workflow;

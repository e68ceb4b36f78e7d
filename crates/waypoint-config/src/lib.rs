//! Waypoint Config
//!
//! This crate contains the serializable types the execution planner consumes:
//! workflow definitions, pinned sample data, and manual run requests.
//!
//! These types are read-only inputs. They are loaded from JSON (via the CLI or
//! an HTTP layer) and handed to `waypoint-workflow` for validation and to
//! `waypoint-planner` for start-node resolution.

mod enums;
mod node;
mod request;
mod run_data;
mod workflow;

pub use enums::ExecutionMode;
pub use node::{Connection, NodeDef};
pub use request::{ManualRunRequest, StartNodes, TriggerToStartFrom, User};
pub use run_data::{PinData, RunData, SourceData, StartNodeData};
pub use workflow::WorkflowDef;

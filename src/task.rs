//! Immutable exercise definitions.
//!
//! A [`Task`] is a template: the initial node layout, the expected correct
//! path, and the surrounding prose. It is never mutated — on selection its
//! nodes are deep-copied into the graph store, so a retry always starts
//! from the same layout.

use crate::error::TaskError;
use crate::graph::Node;
use serde::{Deserialize, Serialize};

/// One exercise: layout, expected path, and explanatory text.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: u32,
    /// Prompt shown when the task loads.
    pub context: String,
    /// The initial node layout, copied into the graph store on selection.
    pub nodes: Vec<Node>,
    /// Node ids that must be connected, in order.
    pub correct_path: Vec<String>,
    /// Shown after a correct solution.
    pub explanation: String,
}

impl Task {
    /// Check that every node id named by the expected path exists in the
    /// task's own layout.
    ///
    /// A violation is a content-authoring defect, not a runtime condition:
    /// it is reported loudly at selection time instead of letting validation
    /// degrade into a never-passable task.
    pub fn verify_integrity(&self) -> Result<(), TaskError> {
        for node_id in &self.correct_path {
            if !self.nodes.iter().any(|n| &n.id == node_id) {
                return Err(TaskError::MissingPathNode {
                    task_id: self.id,
                    node_id: node_id.clone(),
                });
            }
        }
        Ok(())
    }
}

//! Rule-based grading of a wired-up attempt.
//!
//! Traces the directed chain forward from the variable node and compares it
//! position-by-position against the task's expected path, producing a
//! pass/fail verdict and the console diagnostic.

use crate::graph::{GraphStore, NodeKind};
use crate::links::ConnectionSet;
use crate::task::Task;
use tracing::info;

/// Outcome category exposed to the presentation layer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Status {
    #[default]
    Neutral,
    Success,
    Error,
}

/// A grading result: status plus the console diagnostic.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Verdict {
    pub status: Status,
    pub message: String,
}

impl Verdict {
    fn success(message: &str) -> Self {
        Self {
            status: Status::Success,
            message: message.to_string(),
        }
    }

    fn error(message: &str) -> Self {
        Self {
            status: Status::Error,
            message: message.to_string(),
        }
    }

    pub fn passed(&self) -> bool {
        self.status == Status::Success
    }
}

pub const MSG_VARIABLE_DISCONNECTED: &str = "Error: Variable is disconnected.";
pub const MSG_OPERATOR_UNUSED: &str = "Error: Operator result unused.";
pub const MSG_SUCCESS: &str =
    "Compilation Successful!\n> Executing... OK.\n> Access granted.";
pub const MSG_NOT_A_POINTER: &str =
    "error: member reference base type 'Player' is not a pointer";
pub const MSG_IS_A_POINTER: &str =
    "error: member reference base type 'Player *' is a pointer";
pub const MSG_INVALID_CONFIG: &str = "Error: Invalid node configuration.";

/// Whether a start-node payload denotes a pointer value.
///
/// `Player* ptr` and `(*ptr)`-style payloads carry a `*`; the `this`
/// keyword is a pointer without one.
fn payload_is_pointer(content: &str) -> bool {
    content.contains('*') || content.trim() == "this"
}

/// Position-by-position comparison of the traced ids against the expected
/// path. Written generically so longer chains only change the tracing loop.
fn paths_match(traced: &[&str], expected: &[String]) -> bool {
    traced.len() == expected.len() && traced.iter().zip(expected).all(|(t, e)| *t == e)
}

/// Grade the current attempt for `task`.
///
/// Supported exercises are fixed at two hops (variable → operator →
/// member), so the trace takes exactly two forward steps; a missing hop
/// fails with a stage-specific "disconnected" diagnostic.
pub fn validate(graph: &GraphStore, connections: &ConnectionSet, task: &Task) -> Verdict {
    let Some(start) = graph.node_of_kind(NodeKind::Variable) else {
        // The integrity check at task load keeps this from happening with
        // authored content.
        return Verdict::error(MSG_INVALID_CONFIG);
    };

    let Some(hop1) = connections.from_source(&start.id) else {
        return Verdict::error(MSG_VARIABLE_DISCONNECTED);
    };
    let Some(second) = graph.node(&hop1.to_node) else {
        return Verdict::error(MSG_INVALID_CONFIG);
    };

    let Some(hop2) = connections.from_source(&second.id) else {
        return Verdict::error(MSG_OPERATOR_UNUSED);
    };
    let Some(third) = graph.node(&hop2.to_node) else {
        return Verdict::error(MSG_INVALID_CONFIG);
    };

    let traced = [start.id.as_str(), second.id.as_str(), third.id.as_str()];
    let verdict = if paths_match(&traced, &task.correct_path) {
        Verdict::success(MSG_SUCCESS)
    } else {
        Verdict::error(mismatch_diagnostic(
            second.content_text(),
            start.content_text(),
        ))
    };

    info!(task = task.id, ?traced, passed = verdict.passed(), "graded attempt");
    verdict
}

/// Pick the diagnostic for a wrong path, mirroring what a compiler would
/// say about the operator/payload mismatch.
fn mismatch_diagnostic(operator: &str, payload: &str) -> &'static str {
    if operator == "->" && !payload_is_pointer(payload) {
        MSG_NOT_A_POINTER
    } else if operator == "." && payload_is_pointer(payload) {
        MSG_IS_A_POINTER
    } else {
        MSG_INVALID_CONFIG
    }
}

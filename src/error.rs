use crate::graph::PinDirection;
use thiserror::Error;

/// Reasons why an attempted wire produced no connection.
///
/// These are expected, user-recoverable outcomes of a drag gesture: the
/// controller drops the in-progress wire and stays interactive. They are
/// never surfaced as faults.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConnectError {
    /// Both ends of the wire belong to the same node.
    #[error("cannot connect a node to itself")]
    SelfLoop,

    /// Both ends are inputs, or both are outputs.
    #[error("both ends are {0:?} pins; a wire needs one output and one input")]
    SameDirection(PinDirection),

    /// One of the ends names a pin its node does not have.
    #[error("node '{node_id}' has no {direction:?} pin '{pin_id}'")]
    PinNotFound {
        node_id: String,
        pin_id: String,
        direction: PinDirection,
    },
}

/// Content-authoring defects in task data.
///
/// Unlike [`ConnectError`], these indicate corrupt exercise definitions and
/// are propagated loudly instead of degrading into silent misbehavior.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TaskError {
    /// The expected path references a node id absent from the task's own layout.
    #[error("task {task_id}: expected path references node '{node_id}' which is missing from the layout")]
    MissingPathNode { task_id: u32, node_id: String },

    /// A task index outside the loaded course.
    #[error("no task at index {0}")]
    NoSuchTask(usize),

    /// A course with no tasks at all.
    #[error("the task list is empty")]
    EmptyCourse,
}

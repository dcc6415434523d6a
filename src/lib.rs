//! # Blueprint Graph
//!
//! The interaction and validation engine behind a node-based "visual
//! blueprint" exercise for teaching C++ member access: wire a variable
//! through the right operator (`.` or `->`) to a struct member, and get
//! compiler-style feedback.
//!
//! The engine is pure logic. It owns the graph, the wires, the drag state
//! machine, and the grading rules, and it is driven entirely by plain
//! pointer events — no rendering surface, no UI toolkit types. A
//! presentation layer feeds coordinates in and reads nodes, wire paths,
//! and console text back out.
//!
//! ## Core Components
//!
//! - [`BlueprintController`] - Session driver: tasks, pointer events, status
//! - [`GraphStore`] - Node positions and pin metadata for the active task
//! - [`ConnectionSet`] - Directed wires, normalized output → input
//! - [`validate`] - Traces the wired path and grades it against the task
//! - [`standard_course`] - The built-in five-task arrow-vs-dot course
//!
//! ## Rust Helpers
//!
//! - [`pin_position`] - Resolve a pin's canvas position from layout rules
//! - [`find_pin_at`] / [`find_header_at`] - Pointer hit-testing
//! - [`wire_path`] / [`drag_wire_path`] - Cubic bezier path commands

pub mod controller;
pub mod course;
pub mod error;
pub mod geometry;
pub mod graph;
pub mod links;
pub mod path;
pub mod task;
pub mod validator;

pub use controller::{BlueprintController, Mode, MSG_CONNECTIONS_CLEARED, MSG_COURSE_COMPLETE};
pub use course::standard_course;
pub use error::{ConnectError, TaskError};
pub use geometry::{
    header_rect, pin_position, point_in_rect, CONTENT_OFFSET_Y, HEADER_HEIGHT, NODE_WIDTH,
    PIN_GAP, PIN_HEIGHT,
};
pub use graph::{GraphStore, Node, NodeKind, Pin, PinDirection, PinType};
pub use hit_test::{
    find_header_at, find_pin_at, find_pin_in_nodes, resolve_pins, PinTarget, PIN_HIT_RADIUS,
};
pub use links::{Connection, ConnectionSet, WireEnd};
pub use path::{drag_wire_path, wire_path};
pub use task::Task;
pub use validator::{validate, Status, Verdict};

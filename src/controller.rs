//! The pointer-driven interaction controller and session context.
//!
//! [`BlueprintController`] owns the working graph, the connection set, and
//! all session-scoped state (active task, score, interaction mode, status
//! line), so the whole engine is drivable — and testable — without any
//! rendering surface. The presentation layer feeds it raw pointer events
//! and reads back plain data.
//!
//! Event handling is strictly sequential and single-threaded: every
//! mutation happens synchronously inside one of the `pointer_*` methods,
//! and a pointer-up is always processed after the pointer-down and moves of
//! its own gesture. Only one gesture can be active at a time; a
//! pointer-down while another gesture is in flight is ignored.

use crate::error::TaskError;
use crate::geometry::pin_position;
use crate::graph::{GraphStore, Node, PinDirection};
use crate::hit_test::{find_header_at, find_pin_in_nodes};
use crate::links::{Connection, ConnectionSet, WireEnd};
use crate::path::{drag_wire_path, wire_path};
use crate::task::Task;
use crate::validator::{validate, Status};
use tracing::{debug, info};

pub const MSG_CONNECTIONS_CLEARED: &str = "Connections cleared.";
pub const MSG_COURSE_COMPLETE: &str = "All modules completed!";

/// The current gesture. Modes are mutually exclusive.
#[derive(Clone, Debug, PartialEq, Default)]
pub enum Mode {
    #[default]
    Idle,
    /// A node header is being dragged. `grab_offset` is the pointer's
    /// offset from the node origin at pointer-down, so the node does not
    /// jump under the cursor.
    DraggingNode {
        node_id: String,
        grab_offset: (f32, f32),
    },
    /// A wire is being dragged out of a pin. `anchor` is the pin's
    /// resolved position, the fixed end of the preview wire.
    DraggingWire { origin: WireEnd, anchor: (f32, f32) },
}

/// Drives one exercise session: tasks in, pointer events in, drawable
/// state out.
#[derive(Debug)]
pub struct BlueprintController {
    tasks: Vec<Task>,
    task_index: usize,
    graph: GraphStore,
    connections: ConnectionSet,
    mode: Mode,
    pointer: (f32, f32),
    status: Status,
    console: String,
    score: usize,
    current_solved: bool,
}

impl BlueprintController {
    /// Create a controller over an ordered task list and load the first
    /// task.
    ///
    /// Fails if the list is empty or the first task's content is corrupt.
    pub fn new(tasks: Vec<Task>) -> Result<Self, TaskError> {
        if tasks.is_empty() {
            return Err(TaskError::EmptyCourse);
        }
        let mut controller = Self {
            tasks,
            task_index: 0,
            graph: GraphStore::new(),
            connections: ConnectionSet::new(),
            mode: Mode::Idle,
            pointer: (0.0, 0.0),
            status: Status::Neutral,
            console: String::new(),
            score: 0,
            current_solved: false,
        };
        controller.select_task(0)?;
        Ok(controller)
    }

    // === Commands ===

    /// Load task `index`: fresh deep copy of its layout, empty connection
    /// set, neutral status. Nothing carries over from the previous task.
    ///
    /// Fails fast on corrupt content (an expected path referencing a node
    /// missing from the layout) rather than loading a never-passable task.
    pub fn select_task(&mut self, index: usize) -> Result<(), TaskError> {
        let task = self.tasks.get(index).ok_or(TaskError::NoSuchTask(index))?;
        task.verify_integrity()?;

        self.graph.load_template(&task.nodes);
        self.connections.clear();
        self.mode = Mode::Idle;
        self.status = Status::Neutral;
        self.console = format!("Task {}: {}", index + 1, task.context);
        self.task_index = index;
        self.current_solved = false;

        info!(task = task.id, "task selected");
        Ok(())
    }

    /// Drop all wires and reset the status to neutral.
    pub fn clear_connections(&mut self) {
        self.connections.clear();
        self.status = Status::Neutral;
        self.console = MSG_CONNECTIONS_CLEARED.to_string();
    }

    /// Grade the current attempt and update status and console.
    pub fn attempt_validate(&mut self) {
        let verdict = validate(&self.graph, &self.connections, self.task());
        if verdict.passed() && !self.current_solved {
            self.score += 1;
            self.current_solved = true;
        }
        self.status = verdict.status;
        self.console = verdict.message;
    }

    /// Move to the next task, or report course completion from the last
    /// one.
    pub fn advance_to_next_task(&mut self) -> Result<(), TaskError> {
        if self.task_index + 1 < self.tasks.len() {
            self.select_task(self.task_index + 1)
        } else {
            self.console = MSG_COURSE_COMPLETE.to_string();
            Ok(())
        }
    }

    // === Pointer events ===

    /// Begin a gesture: over a pin starts a wire drag, over a node header
    /// starts a node drag. Ignored while another gesture is active.
    pub fn pointer_down(&mut self, x: f32, y: f32) {
        self.pointer = (x, y);

        if self.mode != Mode::Idle {
            debug!("pointer_down ignored: gesture already active");
            return;
        }

        // Pins win over the header: they overhang the node edge, so a
        // pointer can be over both at once.
        if let Some(pin) = find_pin_in_nodes(x, y, self.graph.nodes()) {
            debug!(node = %pin.node_id, pin = %pin.pin_id, "wire drag started");
            self.mode = Mode::DraggingWire {
                origin: WireEnd::new(&pin.node_id, &pin.pin_id, pin.direction),
                anchor: (pin.x, pin.y),
            };
            return;
        }

        if let Some(node) = find_header_at(x, y, self.graph.nodes()) {
            debug!(node = %node.id, "node drag started");
            self.mode = Mode::DraggingNode {
                node_id: node.id.clone(),
                grab_offset: (x - node.x, y - node.y),
            };
        }
    }

    /// Track the pointer. While dragging a node, its position follows the
    /// pointer minus the grab offset on every event; while dragging a wire,
    /// only the transient pointer position changes.
    pub fn pointer_move(&mut self, x: f32, y: f32) {
        self.pointer = (x, y);

        if let Mode::DraggingNode {
            node_id,
            grab_offset,
        } = &self.mode
        {
            let (ox, oy) = *grab_offset;
            let id = node_id.clone();
            self.graph.move_node(&id, x - ox, y - oy);
        }
    }

    /// End the gesture. A wire released over a pin attempts a connection;
    /// released anywhere else it is abandoned with no side effect.
    pub fn pointer_up(&mut self, x: f32, y: f32) {
        self.pointer = (x, y);
        let mode = std::mem::take(&mut self.mode);

        let Mode::DraggingWire { origin, .. } = mode else {
            return;
        };

        let Some(target) = find_pin_in_nodes(x, y, self.graph.nodes()) else {
            debug!("wire abandoned over empty canvas");
            return;
        };

        let target = WireEnd::new(&target.node_id, &target.pin_id, target.direction);
        match self.connections.connect(&self.graph, origin, target) {
            Ok(conn) => {
                debug!(id = %conn.id, "wire connected");
                self.status = Status::Neutral;
            }
            Err(err) => debug!(%err, "wire rejected"),
        }
    }

    // === Views for the presentation layer ===

    /// Current node list, in render order.
    pub fn nodes(&self) -> &[Node] {
        self.graph.nodes()
    }

    /// Current wire list.
    pub fn connections(&self) -> &[Connection] {
        self.connections.connections()
    }

    /// Current gesture mode.
    pub fn mode(&self) -> &Mode {
        &self.mode
    }

    /// Last observed pointer position, for drawing the in-progress wire.
    pub fn pointer(&self) -> (f32, f32) {
        self.pointer
    }

    pub fn status(&self) -> Status {
        self.status
    }

    /// The console diagnostic line.
    pub fn console(&self) -> &str {
        &self.console
    }

    /// The active task.
    pub fn task(&self) -> &Task {
        &self.tasks[self.task_index]
    }

    pub fn task_index(&self) -> usize {
        self.task_index
    }

    pub fn task_count(&self) -> usize {
        self.tasks.len()
    }

    /// Tasks solved so far this session (each task counts once).
    pub fn score(&self) -> usize {
        self.score
    }

    /// Path commands for every settled wire, as (connection id, commands).
    ///
    /// Endpoints come from the same geometry resolver hit-testing uses, so
    /// drawn wires land exactly on their pins.
    pub fn wire_paths(&self) -> Vec<(String, String)> {
        self.connections
            .connections()
            .iter()
            .filter_map(|conn| {
                let from = self.graph.node(&conn.from_node)?;
                let to = self.graph.node(&conn.to_node)?;
                let (sx, sy) = pin_position(from, &conn.from_pin, PinDirection::Output)?;
                let (ex, ey) = pin_position(to, &conn.to_pin, PinDirection::Input)?;
                Some((conn.id.clone(), wire_path(sx, sy, ex, ey)))
            })
            .collect()
    }

    /// Path commands for the in-progress wire, while one is being dragged.
    pub fn drag_wire(&self) -> Option<String> {
        match &self.mode {
            Mode::DraggingWire { anchor, .. } => {
                let (px, py) = self.pointer;
                Some(drag_wire_path(anchor.0, anchor.1, px, py))
            }
            _ => None,
        }
    }
}

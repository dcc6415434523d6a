//! Test harness for driving the engine the way a presentation layer would:
//! through pointer events at resolved canvas coordinates.

#![allow(dead_code)]

use blueprint_graph::{
    pin_position, standard_course, BlueprintController, PinDirection, Status,
};

/// Wraps a controller over the standard course and simulates user gestures.
pub struct ExerciseHarness {
    pub ctrl: BlueprintController,
}

impl ExerciseHarness {
    /// Controller freshly loaded with task 1 of the standard course.
    pub fn new() -> Self {
        Self {
            ctrl: BlueprintController::new(standard_course()).unwrap(),
        }
    }

    /// Canvas position of a pin on the active graph, via the same geometry
    /// rules the engine hit-tests with.
    pub fn pin(&self, node_id: &str, pin_id: &str, direction: PinDirection) -> (f32, f32) {
        let node = self.node(node_id);
        pin_position(node, pin_id, direction).unwrap_or_else(|| {
            panic!("no pin {pin_id} ({direction:?}) on {node_id}");
        })
    }

    pub fn node(&self, node_id: &str) -> &blueprint_graph::Node {
        self.ctrl
            .nodes()
            .iter()
            .find(|n| n.id == node_id)
            .unwrap_or_else(|| panic!("no node {node_id}"))
    }

    /// Current position of a node's origin.
    pub fn node_pos(&self, node_id: &str) -> (f32, f32) {
        let node = self.node(node_id);
        (node.x, node.y)
    }

    /// Full press-move-release gesture between two canvas points.
    pub fn gesture(&mut self, from: (f32, f32), to: (f32, f32)) {
        self.ctrl.pointer_down(from.0, from.1);
        self.ctrl
            .pointer_move((from.0 + to.0) / 2.0, (from.1 + to.1) / 2.0);
        self.ctrl.pointer_move(to.0, to.1);
        self.ctrl.pointer_up(to.0, to.1);
    }

    /// Drag a wire between two pins, in whichever direction the ids imply.
    pub fn drag_wire(
        &mut self,
        from: (&str, &str, PinDirection),
        to: (&str, &str, PinDirection),
    ) {
        let start = self.pin(from.0, from.1, from.2);
        let end = self.pin(to.0, to.1, to.2);
        self.gesture(start, end);
    }

    /// Drag a node by its header so its origin lands at (x, y).
    ///
    /// Grabs the header center, so the grab offset is non-trivial.
    pub fn drag_node_to(&mut self, node_id: &str, x: f32, y: f32) {
        let node = self.node(node_id);
        let grab = (
            node.x + blueprint_graph::NODE_WIDTH / 2.0,
            node.y + blueprint_graph::HEADER_HEIGHT / 2.0,
        );
        let release = (
            x + blueprint_graph::NODE_WIDTH / 2.0,
            y + blueprint_graph::HEADER_HEIGHT / 2.0,
        );
        self.gesture(grab, release);
    }

    /// Wire the correct two-hop path for the active task.
    pub fn wire_correct_path(&mut self) {
        let path = self.ctrl.task().correct_path.clone();
        assert_eq!(path.len(), 3, "harness expects two-hop tasks");
        self.drag_wire(
            (&path[0], "out", PinDirection::Output),
            (&path[1], "in", PinDirection::Input),
        );
        self.drag_wire(
            (&path[1], "out", PinDirection::Output),
            (&path[2], "in", PinDirection::Input),
        );
    }

    /// Wire the correct path, validate, and assert success.
    pub fn solve_current_task(&mut self) {
        self.wire_correct_path();
        self.ctrl.attempt_validate();
        assert_eq!(
            self.ctrl.status(),
            Status::Success,
            "correct path should pass: {}",
            self.ctrl.console()
        );
    }
}

impl Default for ExerciseHarness {
    fn default() -> Self {
        Self::new()
    }
}

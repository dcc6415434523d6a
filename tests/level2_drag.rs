//! Level 2: Node Dragging Tests
//!
//! Tests header-grab dragging through raw pointer events: grab offset,
//! per-move repositioning, gesture exclusivity, and geometry follow-up.

mod common;

use blueprint_graph::{pin_position, Mode, PinDirection};
use common::harness::ExerciseHarness;

#[test]
fn test_header_drag_moves_the_node() {
    let mut harness = ExerciseHarness::new();
    harness.drag_node_to("node-var", 300.0, 320.0);
    assert_eq!(harness.node_pos("node-var"), (300.0, 320.0));
}

#[test]
fn test_grab_offset_is_preserved() {
    let mut harness = ExerciseHarness::new();

    // Grab node-var's header off-center: header spans (20, 150) + 192x32.
    harness.ctrl.pointer_down(30.0, 155.0);
    harness.ctrl.pointer_move(130.0, 255.0);
    harness.ctrl.pointer_up(130.0, 255.0);

    // Pointer travelled (+100, +100); the node did exactly the same.
    assert_eq!(harness.node_pos("node-var"), (120.0, 250.0));
}

#[test]
fn test_every_move_repositions_immediately() {
    let mut harness = ExerciseHarness::new();
    harness.ctrl.pointer_down(30.0, 155.0);

    harness.ctrl.pointer_move(40.0, 165.0);
    assert_eq!(harness.node_pos("node-var"), (30.0, 160.0));

    harness.ctrl.pointer_move(50.0, 175.0);
    assert_eq!(harness.node_pos("node-var"), (40.0, 170.0));

    harness.ctrl.pointer_up(50.0, 175.0);
    assert_eq!(harness.node_pos("node-var"), (40.0, 170.0));
}

#[test]
fn test_only_the_grabbed_node_moves() {
    let mut harness = ExerciseHarness::new();
    let others: Vec<(f32, f32)> = ["node-dot", "node-arrow", "node-mem"]
        .iter()
        .map(|id| harness.node_pos(id))
        .collect();

    harness.drag_node_to("node-var", 300.0, 320.0);

    for (id, before) in ["node-dot", "node-arrow", "node-mem"].iter().zip(others) {
        assert_eq!(harness.node_pos(id), before);
    }
}

#[test]
fn test_press_on_body_or_canvas_starts_nothing() {
    let mut harness = ExerciseHarness::new();

    // Node body below the header, then bare canvas.
    for (x, y) in [(100.0, 220.0), (800.0, 600.0)] {
        harness.ctrl.pointer_down(x, y);
        assert_eq!(harness.ctrl.mode(), &Mode::Idle);
        harness.ctrl.pointer_up(x, y);
    }
}

#[test]
fn test_second_press_during_drag_is_ignored() {
    let mut harness = ExerciseHarness::new();
    harness.ctrl.pointer_down(30.0, 155.0);
    let mode = harness.ctrl.mode().clone();

    // Press over node-dot's header mid-gesture.
    harness.ctrl.pointer_down(300.0, 60.0);
    assert_eq!(harness.ctrl.mode(), &mode);

    // The original drag still tracks.
    harness.ctrl.pointer_move(60.0, 185.0);
    assert_eq!(harness.node_pos("node-var"), (50.0, 180.0));
    harness.ctrl.pointer_up(60.0, 185.0);
}

#[test]
fn test_pins_follow_the_dragged_node() {
    let mut harness = ExerciseHarness::new();
    harness.drag_node_to("node-var", 300.0, 320.0);

    let node = harness.node("node-var");
    let (px, py) = pin_position(node, "out", PinDirection::Output).unwrap();
    // Output pin sits on the right edge, first pin row.
    assert_eq!((px, py), (300.0 + 192.0, 320.0 + 100.0 + 12.0));
}

#[test]
fn test_dragging_a_wired_node_keeps_the_wire() {
    let mut harness = ExerciseHarness::new();
    harness.drag_wire(
        ("node-var", "out", PinDirection::Output),
        ("node-dot", "in", PinDirection::Input),
    );
    let before = harness.ctrl.connections().to_vec();

    harness.drag_node_to("node-var", 40.0, 400.0);

    // Same wire, new endpoint geometry.
    assert_eq!(harness.ctrl.connections(), before.as_slice());
    let (_, path) = harness.ctrl.wire_paths().remove(0);
    let start = harness.pin("node-var", "out", PinDirection::Output);
    assert!(path.starts_with(&format!("M {} {}", start.0, start.1)));
}

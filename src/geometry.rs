//! Pin geometry resolution.
//!
//! Maps (node position, pin index, side) to an absolute canvas coordinate.
//! The same function backs both wire rendering and release hit-testing; if
//! the two ever diverged, wires would stop lining up with their interactive
//! targets.

use crate::graph::{Node, PinDirection};

/// Fixed node body width.
pub const NODE_WIDTH: f32 = 192.0;
/// Height of the draggable header strip.
pub const HEADER_HEIGHT: f32 = 32.0;
/// Vertical offset from the node origin to the first pin row
/// (header + padding + payload box).
pub const CONTENT_OFFSET_Y: f32 = 100.0;
/// Height of one pin row.
pub const PIN_HEIGHT: f32 = 24.0;
/// Vertical gap between consecutive pin rows.
pub const PIN_GAP: f32 = 16.0;

/// Absolute position of a pin's center.
///
/// Input pins sit on the node's left edge, output pins on the right edge.
/// Vertically, pins stack from [`CONTENT_OFFSET_Y`] in rows of
/// [`PIN_HEIGHT`] separated by [`PIN_GAP`], and the returned y is the row
/// center. Returns `None` when the node has no such pin on that side.
pub fn pin_position(node: &Node, pin_id: &str, direction: PinDirection) -> Option<(f32, f32)> {
    let index = node.pin_index(pin_id, direction)?;

    let x = match direction {
        PinDirection::Input => node.x,
        PinDirection::Output => node.x + NODE_WIDTH,
    };
    let y = node.y + CONTENT_OFFSET_Y + index as f32 * (PIN_HEIGHT + PIN_GAP) + PIN_HEIGHT / 2.0;

    Some((x, y))
}

/// The draggable header rectangle of a node as (x, y, width, height).
pub fn header_rect(node: &Node) -> (f32, f32, f32, f32) {
    (node.x, node.y, NODE_WIDTH, HEADER_HEIGHT)
}

/// Whether a point falls inside a rectangle given as (x, y, width, height).
pub fn point_in_rect(px: f32, py: f32, rect: (f32, f32, f32, f32)) -> bool {
    let (x, y, w, h) = rect;
    px >= x && px <= x + w && py >= y && py <= y + h
}

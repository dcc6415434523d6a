//! Wire path command generation.
//!
//! Wires render as horizontal-biased cubic beziers between pin centers. The
//! presentation layer consumes these as SVG-style command strings; the
//! engine itself never draws.

/// Offset used for the free end of an in-progress wire, where no settled
/// endpoint exists to derive a curve width from.
const DRAG_CTRL_OFFSET: f32 = 100.0;

/// Path command for a settled wire between two pin centers.
///
/// Control points extend horizontally from each end by half the horizontal
/// distance, which keeps short wires gently curved and long wires sweeping.
///
/// # Returns
/// SVG path command string (e.g., "M 10 20 C 60 20 90 80 140 80")
pub fn wire_path(start_x: f32, start_y: f32, end_x: f32, end_y: f32) -> String {
    let reach = (end_x - start_x).abs() * 0.5;
    let ctrl1_x = start_x + reach;
    let ctrl2_x = end_x - reach;

    format!(
        "M {} {} C {} {} {} {} {} {}",
        start_x, start_y, ctrl1_x, start_y, ctrl2_x, end_y, end_x, end_y
    )
}

/// Path command for the in-progress wire from a pin anchor to the pointer.
///
/// Uses fixed horizontal control offsets so the curve stays readable while
/// the free end chases the pointer.
pub fn drag_wire_path(anchor_x: f32, anchor_y: f32, pointer_x: f32, pointer_y: f32) -> String {
    format!(
        "M {} {} C {} {} {} {} {} {}",
        anchor_x,
        anchor_y,
        anchor_x + DRAG_CTRL_OFFSET,
        anchor_y,
        pointer_x - DRAG_CTRL_OFFSET,
        pointer_y,
        pointer_x,
        pointer_y
    )
}

//! Collision, scoring and bounds tests
//!
//! The bird is a circle but every test here uses its bounding box. Against
//! axis-aligned bars that is what makes a graze near a bar corner count.

use super::state::{Bird, Gate};

/// Check whether the bird overlaps either bar of a gate
///
/// Horizontal overlap is strict on both sides, so touching edges do not
/// collide. Vertically the bird collides as soon as its top edge rises above
/// the top bar's bottom or its bottom edge sinks below the bottom bar's top.
pub fn bird_hits_gate(bird: &Bird, gate: &Gate, viewport_height: f32) -> bool {
    let overlaps_x = bird.right() > gate.x && bird.left() < gate.right();
    let outside_gap = bird.top() < gate.top || bird.bottom() > gate.bottom_bar_y(viewport_height);
    overlaps_x && outside_gap
}

/// The gate's trailing edge is fully behind the bird's leading edge
pub fn gate_cleared_bird(bird: &Bird, gate: &Gate) -> bool {
    gate.right() < bird.left()
}

/// The gate has fully left the viewport on the left side
pub fn gate_off_screen(gate: &Gate) -> bool {
    gate.right() < 0.0
}

/// The bird poked out of the top or bottom of the viewport
pub fn bird_out_of_bounds(bird: &Bird, viewport_height: f32) -> bool {
    bird.bottom() > viewport_height || bird.top() < 0.0
}

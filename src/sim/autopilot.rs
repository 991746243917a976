//! Idle/demo mode - a simple controller that plays the game
//!
//! Flies toward the middle of the next gap and flaps whenever the bird sinks
//! too far below it. Used by the native headless run and the browser's idle
//! toggle.

use super::state::GameState;
use super::tick::TickInput;

/// How far below the gap center the bird may sink before flapping
const FLAP_MARGIN: f32 = 30.0;

/// Only flap once the previous flap has mostly worn off
const FLAP_MIN_VEL: f32 = -1.0;

/// Y the autopilot is aiming for
///
/// Center of the gap of the first gate the bird has not cleared yet, or the
/// middle of the screen when no gate is ahead.
pub fn target_y(state: &GameState) -> f32 {
    let bird = state.bird();
    let half_gap = state.config().gap / 2.0;
    state
        .gates()
        .iter()
        .find(|gate| gate.right() >= bird.left())
        .map(|gate| gate.top + half_gap)
        .unwrap_or(state.viewport().size().y / 2.0)
}

/// Input the autopilot would give this tick
pub fn autopilot_input(state: &GameState) -> TickInput {
    let bird = state.bird();
    TickInput {
        jump: bird.pos.y > target_y(state) + FLAP_MARGIN && bird.vel > FLAP_MIN_VEL,
    }
}

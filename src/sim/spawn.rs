//! Gate generator
//!
//! Decides when a gate enters and where its gap sits.

use rand::Rng;

use super::config::{Viewport, WorldConfig};
use super::state::Gate;
use crate::consts::{MAX_TOP_RATIO, MIN_TOP_RATIO};

/// A gate is due on every multiple of the cadence, starting at frame 0
#[inline]
pub fn should_spawn(frame: u64, cadence: u64) -> bool {
    // WorldConfig never yields 0; treat it as "every frame" rather than panic
    frame % cadence.max(1) == 0
}

/// Build a gate just off the right edge with a random gap position
///
/// The top bar is sampled uniformly from `[0.1, 0.6) × height`, so the gap
/// never touches the viewport edges.
pub fn spawn_gate<R: Rng + ?Sized>(config: &WorldConfig, viewport: Viewport, rng: &mut R) -> Gate {
    let size = viewport.size();
    let min_top = size.y * MIN_TOP_RATIO;
    let max_top = size.y * MAX_TOP_RATIO;
    let top = rng.random::<f32>() * (max_top - min_top) + min_top;

    Gate {
        x: size.x,
        width: config.gate_width,
        top,
        bottom: size.y - (top + config.gap),
        speed: config.gate_speed,
        passed: false,
    }
}

/// Spawn a gate if `frame` is on the cadence
pub fn maybe_spawn<R: Rng + ?Sized>(
    frame: u64,
    config: &WorldConfig,
    viewport: Viewport,
    rng: &mut R,
) -> Option<Gate> {
    should_spawn(frame, config.spawn_cadence).then(|| spawn_gate(config, viewport, rng))
}

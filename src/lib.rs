//! Gate Flap - a one-button arcade game
//!
//! Core modules:
//! - `sim`: Tick-driven simulation (physics, gates, collisions, scoring)
//! - `session`: Start / game over / restart lifecycle around the simulation
//! - `settings`: Viewport policy and user preferences
//! - `platform`: Browser/native platform glue (logging)

pub mod platform;
pub mod session;
pub mod settings;
pub mod sim;

pub use session::{Session, SessionPhase};
pub use settings::Settings;

/// Game configuration constants
///
/// Everything size-related is a ratio of the viewport so the game plays the
/// same on a phone and on the fixed desktop canvas.
pub mod consts {
    /// Bird horizontal position (fraction of viewport width)
    pub const BIRD_X_RATIO: f32 = 0.1;
    /// Bird radius (fraction of viewport width)
    pub const BIRD_RADIUS_RATIO: f32 = 0.03;

    /// Gravity per tick (fraction of viewport height)
    pub const GRAVITY_RATIO: f32 = 0.000_15;
    /// Jump impulse (fraction of viewport height, applied upward)
    pub const JUMP_RATIO: f32 = 0.007;

    /// Gate dimensions
    pub const GATE_WIDTH_RATIO: f32 = 0.15;
    pub const GATE_GAP_RATIO: f32 = 0.35;
    /// Gate horizontal speed per tick (fraction of viewport width)
    pub const GATE_SPEED_RATIO: f32 = 0.002;
    /// Ticks between gate spawns (fraction of viewport width)
    pub const SPAWN_CADENCE_RATIO: f32 = 0.5;

    /// Bounds for the top bar height (fraction of viewport height)
    pub const MIN_TOP_RATIO: f32 = 0.1;
    pub const MAX_TOP_RATIO: f32 = 0.6;

    /// Smallest accepted viewport dimension
    pub const MIN_VIEWPORT_DIM: u32 = 1;
}

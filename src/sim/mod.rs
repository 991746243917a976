//! Tick-driven simulation module
//!
//! All gameplay logic lives here. This module must stay renderer-agnostic:
//! - One call to `tick` per display refresh
//! - Seeded RNG only
//! - Stable iteration order (gate insertion order)
//! - No rendering or platform dependencies

pub mod autopilot;
pub mod collision;
pub mod config;
pub mod spawn;
pub mod state;
pub mod tick;
pub mod view;

pub use autopilot::{autopilot_input, target_y};
pub use collision::{bird_hits_gate, bird_out_of_bounds, gate_cleared_bird, gate_off_screen};
pub use config::{Viewport, WorldConfig};
pub use spawn::{maybe_spawn, should_spawn, spawn_gate};
pub use state::{Bird, GameEvent, GamePhase, GameState, Gate};
pub use tick::{TickInput, tick};
pub use view::{BirdView, FrameView, GateView};

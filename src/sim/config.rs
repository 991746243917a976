//! Viewport and the world constants derived from it
//!
//! Every physical constant of a session is a fixed ratio of the viewport,
//! computed once at reset. Nothing here changes while a session runs.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Drawable area in pixels (or logical units)
///
/// Dimensions are clamped to at least [`MIN_VIEWPORT_DIM`] so that no
/// derivation below can divide by zero or produce a zero spawn cadence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Viewport {
    width: u32,
    height: u32,
}

impl Viewport {
    /// Create a viewport, clamping zero or negative dimensions
    pub fn new(width: i32, height: i32) -> Self {
        let clamp = |dim: i32, name: &str| -> u32 {
            let min = MIN_VIEWPORT_DIM as i32;
            if dim < min {
                log::warn!("Viewport {} {} clamped to {}", name, dim, min);
                MIN_VIEWPORT_DIM
            } else {
                dim as u32
            }
        };
        Self {
            width: clamp(width, "width"),
            height: clamp(height, "height"),
        }
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Dimensions as floats for the simulation
    #[inline]
    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width as f32, self.height as f32)
    }
}

impl Default for Viewport {
    /// The fixed desktop canvas
    fn default() -> Self {
        Self {
            width: 400,
            height: 600,
        }
    }
}

/// Per-session constants derived from the viewport
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WorldConfig {
    /// Fixed horizontal position of the bird's center
    pub bird_x: f32,
    pub bird_radius: f32,
    /// Downward acceleration per tick
    pub gravity: f32,
    /// Vertical velocity set by a jump (negative = up)
    pub jump_impulse: f32,
    pub gate_width: f32,
    /// Vertical opening between the top and bottom bars
    pub gap: f32,
    /// Leftward gate movement per tick
    pub gate_speed: f32,
    /// Ticks between spawns, never zero
    pub spawn_cadence: u64,
}

impl WorldConfig {
    pub fn from_viewport(viewport: Viewport) -> Self {
        let size = viewport.size();
        let cadence = (size.x * SPAWN_CADENCE_RATIO).floor() as u64;
        Self {
            bird_x: size.x * BIRD_X_RATIO,
            bird_radius: size.x * BIRD_RADIUS_RATIO,
            gravity: size.y * GRAVITY_RATIO,
            jump_impulse: -size.y * JUMP_RATIO,
            gate_width: size.x * GATE_WIDTH_RATIO,
            gap: size.y * GATE_GAP_RATIO,
            gate_speed: size.x * GATE_SPEED_RATIO,
            spawn_cadence: cadence.max(1),
        }
    }
}

//! Read-only snapshot for renderers and HUDs
//!
//! The simulation never draws. Once per frame the platform asks for a
//! `FrameView` and paints it however it likes.

use serde::{Deserialize, Serialize};

use super::state::{GameState, Gate};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BirdView {
    pub x: f32,
    pub y: f32,
    pub radius: f32,
}

/// Gate as a renderer needs it: top bar from y=0, bottom bar up from the floor
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GateView {
    pub x: f32,
    pub width: f32,
    pub top: f32,
    pub bottom: f32,
}

impl From<&Gate> for GateView {
    fn from(gate: &Gate) -> Self {
        Self {
            x: gate.x,
            width: gate.width,
            top: gate.top,
            bottom: gate.bottom,
        }
    }
}

/// Everything visible after a tick
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FrameView {
    pub width: u32,
    pub height: u32,
    pub bird: BirdView,
    /// In spawn order (oldest / leftmost first)
    pub gates: Vec<GateView>,
    pub score: u32,
    pub game_over: bool,
}

impl GameState {
    /// Snapshot the current state for drawing
    pub fn view(&self) -> FrameView {
        let viewport = self.viewport();
        let bird = self.bird();
        FrameView {
            width: viewport.width(),
            height: viewport.height(),
            bird: BirdView {
                x: bird.pos.x,
                y: bird.pos.y,
                radius: bird.radius,
            },
            gates: self.gates().iter().map(GateView::from).collect(),
            score: self.score(),
            game_over: self.is_terminal(),
        }
    }
}

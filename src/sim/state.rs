//! Game state and core simulation types
//!
//! One `GameState` is one play session. There are no globals: every
//! operation takes the state explicitly, so any number of sessions can run
//! side by side.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::config::{Viewport, WorldConfig};

/// Whether the session is still advancing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Active gameplay
    Running,
    /// Collision or out-of-bounds happened; only `reset` leaves this phase
    GameOver,
}

/// Things that happened during a tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// A new gate entered on the right edge
    GateSpawned,
    /// The bird cleared a gate; carries the new score
    GatePassed { score: u32 },
    /// The bird touched a gate bar
    GateCollision,
    /// The bird left the top or bottom of the viewport
    OutOfBounds,
    /// The session ended this tick
    GameOver { score: u32 },
}

/// The player-controlled entity
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bird {
    /// Center; x never changes after reset
    pub pos: Vec2,
    /// Vertical velocity per tick (positive = down)
    pub vel: f32,
    pub radius: f32,
}

impl Bird {
    /// Bird at its starting spot: fixed x, half the viewport height, at rest
    pub fn new(config: &WorldConfig, viewport: Viewport) -> Self {
        Self {
            pos: Vec2::new(config.bird_x, viewport.size().y / 2.0),
            vel: 0.0,
            radius: config.bird_radius,
        }
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.pos.x - self.radius
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.pos.x + self.radius
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.pos.y - self.radius
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.pos.y + self.radius
    }

    /// Semi-implicit Euler step: velocity first, then position
    pub fn integrate(&mut self, gravity: f32) {
        self.vel += gravity;
        self.pos.y += self.vel;
    }
}

/// A pair of bars with a passable gap, sliding left
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Gate {
    /// Left edge
    pub x: f32,
    pub width: f32,
    /// Height of the bar hanging from the top edge
    pub top: f32,
    /// Height of the bar standing on the bottom edge
    pub bottom: f32,
    /// Leftward movement per tick
    pub speed: f32,
    /// Already counted toward the score
    pub passed: bool,
}

impl Gate {
    /// Right (trailing) edge
    #[inline]
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    /// Y coordinate where the bottom bar starts
    #[inline]
    pub fn bottom_bar_y(&self, viewport_height: f32) -> f32 {
        viewport_height - self.bottom
    }

    pub fn advance(&mut self) {
        self.x -= self.speed;
    }
}

/// Complete state of one play session
#[derive(Debug, Clone)]
pub struct GameState {
    pub(crate) viewport: Viewport,
    pub(crate) config: WorldConfig,
    pub(crate) bird: Bird,
    /// Active gates in spawn order
    pub(crate) gates: Vec<Gate>,
    pub(crate) score: u32,
    /// Ticks since reset, used for spawn cadence
    pub(crate) frame: u64,
    pub(crate) phase: GamePhase,
    /// Carried across resets so consecutive sessions differ
    pub(crate) rng: Pcg32,
}

impl GameState {
    /// Create a running session for the given viewport
    pub fn new(viewport: Viewport, seed: u64) -> Self {
        let config = WorldConfig::from_viewport(viewport);
        Self {
            viewport,
            config,
            bird: Bird::new(&config, viewport),
            gates: Vec::new(),
            score: 0,
            frame: 0,
            phase: GamePhase::Running,
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    /// Start a fresh session, re-deriving every constant from `viewport`
    pub fn reset(&mut self, viewport: Viewport) {
        self.viewport = viewport;
        self.config = WorldConfig::from_viewport(viewport);
        self.bird = Bird::new(&self.config, viewport);
        self.gates.clear();
        self.score = 0;
        self.frame = 0;
        self.phase = GamePhase::Running;
        log::debug!(
            "Session reset for {}x{} viewport",
            viewport.width(),
            viewport.height()
        );
    }

    /// Jump signal: overrides the current vertical velocity
    ///
    /// Ignored once the session is over.
    pub fn apply_jump(&mut self) {
        if self.is_terminal() {
            return;
        }
        self.bird.vel = self.config.jump_impulse;
    }

    /// Flag the session as over (one-way)
    pub(crate) fn end(&mut self) {
        self.phase = GamePhase::GameOver;
    }

    #[inline]
    pub fn is_terminal(&self) -> bool {
        self.phase == GamePhase::GameOver
    }

    #[inline]
    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    #[inline]
    pub fn score(&self) -> u32 {
        self.score
    }

    #[inline]
    pub fn frame(&self) -> u64 {
        self.frame
    }

    #[inline]
    pub fn bird(&self) -> &Bird {
        &self.bird
    }

    #[inline]
    pub fn gates(&self) -> &[Gate] {
        &self.gates
    }

    #[inline]
    pub fn config(&self) -> &WorldConfig {
        &self.config
    }

    #[inline]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }
}

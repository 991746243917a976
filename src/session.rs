//! Session lifecycle around the simulation
//!
//! Mirrors the page flow: a start screen, a running game, a game-over
//! screen with the final score, and a restart button. The platform feeds
//! window sizes, jumps and animation frames in; the session decides what the
//! simulation sees.

use serde::{Deserialize, Serialize};

use crate::settings::Settings;
use crate::sim::{FrameView, GameEvent, GameState, TickInput, Viewport, autopilot_input, tick};

/// Which screen the player is looking at
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionPhase {
    /// Start screen, nothing ticking yet
    Ready,
    /// Frames are being simulated
    Playing,
    /// Game-over screen showing the final score
    GameOver,
}

/// One player's game plus the screen they are on
pub struct Session {
    settings: Settings,
    state: GameState,
    phase: SessionPhase,
    /// Jump received since the last frame
    pending_jump: bool,
    /// Set on start, cleared on game over; gates resize handling
    started: bool,
    /// Score of the run that just ended
    final_score: Option<u32>,
    /// Demo mode: the autopilot flies
    idle_mode: bool,
}

impl Session {
    pub fn new(settings: Settings, window_width: i32, window_height: i32, seed: u64) -> Self {
        let viewport = settings.viewport_for_window(window_width, window_height);
        let seed = settings.seed.unwrap_or(seed);
        log::info!(
            "New session: {}x{} viewport, seed {}",
            viewport.width(),
            viewport.height(),
            seed
        );
        Self {
            settings,
            state: GameState::new(viewport, seed),
            phase: SessionPhase::Ready,
            pending_jump: false,
            started: false,
            final_score: None,
            idle_mode: false,
        }
    }

    /// Leave the start screen and begin playing
    pub fn start(&mut self) {
        self.begin();
    }

    /// Leave the game-over screen and play again
    pub fn restart(&mut self) {
        self.begin();
    }

    fn begin(&mut self) {
        self.state.reset(self.state.viewport());
        self.phase = SessionPhase::Playing;
        self.pending_jump = false;
        self.started = true;
        self.final_score = None;
        log::info!("Session started");
    }

    /// Jump input (click/tap/key); only counts while playing
    pub fn jump(&mut self) {
        if self.phase == SessionPhase::Playing {
            self.pending_jump = true;
        }
    }

    /// Run one animation frame
    ///
    /// Returns the tick's events and whether another frame should be
    /// requested.
    pub fn advance(&mut self) -> (Vec<GameEvent>, bool) {
        if self.phase != SessionPhase::Playing {
            return (Vec::new(), false);
        }

        let jump = std::mem::take(&mut self.pending_jump);
        let input = if self.idle_mode {
            autopilot_input(&self.state)
        } else {
            TickInput { jump }
        };
        let events = tick(&mut self.state, &input);

        if self.state.is_terminal() {
            self.phase = SessionPhase::GameOver;
            self.started = false;
            self.final_score = Some(self.state.score());
            log::info!("Final score: {}", self.state.score());
        }

        (events, self.phase == SessionPhase::Playing)
    }

    /// Window resized; returns the viewport now in effect
    ///
    /// Constants are only re-derived while no game is in progress. A running
    /// game keeps its original viewport.
    pub fn resize(&mut self, window_width: i32, window_height: i32) -> Viewport {
        let viewport = self
            .settings
            .viewport_for_window(window_width, window_height);
        if !self.started {
            self.state.reset(viewport);
        } else {
            log::debug!("Resize ignored while playing");
        }
        self.state.viewport()
    }

    /// Toggle demo mode; returns the new setting
    pub fn toggle_idle_mode(&mut self) -> bool {
        self.idle_mode = !self.idle_mode;
        log::info!("Idle mode: {}", self.idle_mode);
        self.idle_mode
    }

    #[inline]
    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    /// Score to show on the game-over screen
    ///
    /// Survives a resize on the game-over screen, which resets the state
    /// behind it.
    #[inline]
    pub fn final_score(&self) -> Option<u32> {
        self.final_score
    }

    #[inline]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    #[inline]
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn view(&self) -> FrameView {
        self.state.view()
    }
}

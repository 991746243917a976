//! Per-frame simulation tick
//!
//! Core game loop step. The caller invokes `tick` once per display refresh
//! and stops asking for frames once the state is terminal.

use super::collision::{bird_hits_gate, bird_out_of_bounds, gate_cleared_bird, gate_off_screen};
use super::spawn::maybe_spawn;
use super::state::{GameEvent, GameState};

/// Input gathered since the previous tick
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Jump (click/tap/space)
    pub jump: bool,
}

/// Advance the game state by one tick
///
/// Order within a tick:
/// 1. apply a pending jump
/// 2. integrate gravity
/// 3. spawn a gate when the cadence is due
/// 4. sweep every gate: move, collide, score, mark off-screen ones
/// 5. bounds check
/// 6. advance the frame counter
///
/// A collision does not cut the sweep short. The remaining gates still move,
/// score and get removed, and the session ends once the tick completes.
/// Ticking a terminal state changes nothing and returns no events.
pub fn tick(state: &mut GameState, input: &TickInput) -> Vec<GameEvent> {
    let mut events = Vec::new();

    if state.is_terminal() {
        return events;
    }

    if input.jump {
        state.apply_jump();
    }

    state.bird.integrate(state.config.gravity);

    if let Some(gate) = maybe_spawn(state.frame, &state.config, state.viewport, &mut state.rng) {
        log::debug!(
            "Frame {}: gate spawned (top {:.1}, bottom {:.1})",
            state.frame,
            gate.top,
            gate.bottom
        );
        state.gates.push(gate);
        events.push(GameEvent::GateSpawned);
    }

    let height = state.viewport.size().y;
    let bird = state.bird;
    let mut collided = false;

    for gate in &mut state.gates {
        gate.advance();

        if bird_hits_gate(&bird, gate, height) {
            collided = true;
        }

        if !gate.passed && gate_cleared_bird(&bird, gate) {
            gate.passed = true;
            state.score += 1;
            log::debug!("Frame {}: gate passed, score {}", state.frame, state.score);
            events.push(GameEvent::GatePassed { score: state.score });
        }
    }

    // Compact after the sweep so no gate is skipped or visited twice
    state.gates.retain(|gate| !gate_off_screen(gate));

    if collided {
        events.push(GameEvent::GateCollision);
    }

    let out_of_bounds = bird_out_of_bounds(&bird, height);
    if out_of_bounds {
        events.push(GameEvent::OutOfBounds);
    }

    state.frame += 1;

    if collided || out_of_bounds {
        state.end();
        log::info!(
            "Game over at frame {} with score {}",
            state.frame,
            state.score
        );
        events.push(GameEvent::GameOver { score: state.score });
    }

    events
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::config::Viewport;
    use crate::sim::state::{GamePhase, Gate};
    use proptest::prelude::*;

    fn desktop_state(seed: u64) -> GameState {
        GameState::new(Viewport::new(400, 600), seed)
    }

    /// Desktop-sized gate: top=100, gap=210, bottom=290
    fn gate_at(x: f32) -> Gate {
        Gate {
            x,
            width: 60.0,
            top: 100.0,
            bottom: 290.0,
            speed: 0.8,
            passed: false,
        }
    }

    #[test]
    fn test_free_fall_matches_closed_form() {
        let mut state = desktop_state(1);
        let gravity = state.config().gravity;
        let radius = state.bird().radius;
        let input = TickInput::default();

        let mut terminal_tick = None;
        for n in 1..=200u32 {
            tick(&mut state, &input);
            let n_f = n as f32;
            let expected = 300.0 + gravity * n_f * (n_f + 1.0) / 2.0;
            assert!(
                (state.bird().pos.y - expected).abs() < 5e-2,
                "tick {}: y={} expected {}",
                n,
                state.bird().pos.y,
                expected
            );
            if state.is_terminal() {
                assert!(expected + radius > 600.0);
                terminal_tick = Some(n);
                break;
            }
            assert!(expected + radius <= 600.0);
        }

        assert_eq!(terminal_tick, Some(80));
    }

    #[test]
    fn test_first_gate_spawns_on_frame_zero() {
        let mut state = desktop_state(1);
        let events = tick(&mut state, &TickInput::default());
        assert!(events.contains(&GameEvent::GateSpawned));
        assert_eq!(state.gates().len(), 1);
        // Spawned at the right edge, then moved with the rest this tick
        assert!((state.gates()[0].x - 399.2).abs() < 1e-3);
        assert_eq!(state.frame(), 1);
    }

    #[test]
    fn test_gate_moves_by_speed_each_tick() {
        let mut state = desktop_state(1);
        state.frame = 1;
        state.gates.push(gate_at(300.0));
        let input = TickInput::default();

        let mut last_x = state.gates()[0].x;
        for _ in 0..30 {
            tick(&mut state, &input);
            let x = state.gates()[0].x;
            assert!(x < last_x);
            assert!((last_x - x - 0.8).abs() < 1e-3);
            last_x = x;
        }
    }

    #[test]
    fn test_bird_in_gap_survives() {
        let mut state = desktop_state(1);
        state.frame = 1;
        state.bird.pos.y = 200.0;
        state.gates.push(gate_at(30.8));

        let events = tick(&mut state, &TickInput::default());
        assert!(!state.is_terminal());
        assert!(!events.contains(&GameEvent::GateCollision));
    }

    #[test]
    fn test_bird_above_gap_collides() {
        let mut state = desktop_state(1);
        state.frame = 1;
        state.bird.pos.y = 50.0;
        state.gates.push(gate_at(30.8));

        let events = tick(&mut state, &TickInput::default());
        assert!(state.is_terminal());
        assert_eq!(state.phase(), GamePhase::GameOver);
        assert!(events.contains(&GameEvent::GateCollision));
        assert!(events.contains(&GameEvent::GameOver { score: 0 }));
    }

    #[test]
    fn test_gate_scores_exactly_once() {
        let mut state = desktop_state(1);
        state.frame = 1;
        // Right edge lands at 27.5 after one tick, left of the bird (28)
        state.gates.push(gate_at(-31.7));

        let events = tick(&mut state, &TickInput::default());
        assert_eq!(state.score(), 1);
        assert!(state.gates()[0].passed);
        assert!(events.contains(&GameEvent::GatePassed { score: 1 }));

        for _ in 0..10 {
            let events = tick(&mut state, &TickInput::default());
            assert!(!events.iter().any(|e| matches!(e, GameEvent::GatePassed { .. })));
        }
        assert_eq!(state.score(), 1);
    }

    #[test]
    fn test_collision_completes_sweep() {
        let mut state = desktop_state(1);
        state.frame = 1;
        state.bird.pos.y = 50.0;

        let colliding = gate_at(30.8);
        let clearing = gate_at(-31.7);
        let leaving = Gate {
            passed: true,
            ..gate_at(-60.0)
        };
        state.gates.extend([colliding, clearing, leaving]);

        let events = tick(&mut state, &TickInput::default());

        assert!(state.is_terminal());
        // Gates after the colliding one were still scored and removed
        assert_eq!(state.score(), 1);
        assert_eq!(state.gates().len(), 2);
        assert!((state.gates()[0].x - 30.0).abs() < 1e-3);
        assert!(state.gates()[1].passed);
        assert_eq!(state.frame(), 2);
        assert_eq!(
            events,
            vec![
                GameEvent::GatePassed { score: 1 },
                GameEvent::GateCollision,
                GameEvent::GameOver { score: 1 },
            ]
        );
    }

    #[test]
    fn test_off_screen_gates_are_dropped() {
        let mut state = desktop_state(1);
        state.frame = 1;
        state.gates.extend([
            Gate { passed: true, ..gate_at(-59.5) },
            Gate { passed: true, ..gate_at(-59.0) },
            gate_at(200.0),
        ]);

        tick(&mut state, &TickInput::default());
        // -60.3 is gone, -59.8 survives, the far gate survives
        assert_eq!(state.gates().len(), 2);
        assert!((state.gates()[0].x + 59.8).abs() < 1e-3);
        assert!((state.gates()[1].x - 199.2).abs() < 1e-3);
    }

    #[test]
    fn test_jump_input_applies_before_gravity() {
        let mut state = desktop_state(1);
        tick(&mut state, &TickInput { jump: true });
        // -4.2 + 0.09
        assert!((state.bird().vel + 4.11).abs() < 1e-3);
        assert!((state.bird().pos.y - 295.89).abs() < 1e-3);
    }

    #[test]
    fn test_tick_after_game_over_is_noop() {
        let mut state = desktop_state(3);
        let input = TickInput::default();
        while !state.is_terminal() {
            tick(&mut state, &input);
        }

        let bird = *state.bird();
        let gates = state.gates().to_vec();
        let score = state.score();
        let frame = state.frame();

        for _ in 0..50 {
            let events = tick(&mut state, &TickInput { jump: true });
            assert!(events.is_empty());
        }
        assert!(state.is_terminal());
        assert_eq!(*state.bird(), bird);
        assert_eq!(state.gates(), gates.as_slice());
        assert_eq!(state.score(), score);
        assert_eq!(state.frame(), frame);
    }

    #[test]
    fn test_reset_after_game_over_runs_again() {
        let mut state = desktop_state(5);
        while !state.is_terminal() {
            tick(&mut state, &TickInput::default());
        }
        state.reset(Viewport::new(400, 600));
        assert!(!state.is_terminal());
        let events = tick(&mut state, &TickInput::default());
        assert!(events.contains(&GameEvent::GateSpawned));
        assert_eq!(state.frame(), 1);
    }

    #[test]
    fn test_sessions_are_independent() {
        let mut a = desktop_state(11);
        let mut b = desktop_state(11);
        let jump = TickInput { jump: true };
        let idle = TickInput::default();

        tick(&mut a, &jump);
        tick(&mut b, &idle);
        assert_ne!(a.bird().pos.y, b.bird().pos.y);

        // Same seed and inputs produce the same gates
        let mut c = desktop_state(11);
        tick(&mut c, &jump);
        assert_eq!(a.gates(), c.gates());
    }

    proptest! {
        #[test]
        fn prop_score_monotonic_and_terminal_sticky(
            seed in any::<u64>(),
            jumps in proptest::collection::vec(any::<bool>(), 1..800),
        ) {
            let mut state = desktop_state(seed);
            let mut was_terminal = false;

            for jump in jumps {
                let gates_before = state.gates().len() as u32;
                let score_before = state.score();
                let bird_before = *state.bird();

                tick(&mut state, &TickInput { jump });

                prop_assert!(state.score() >= score_before);
                // At most one point per gate alive this tick (+1 for a fresh spawn)
                prop_assert!(state.score() - score_before <= gates_before + 1);

                if was_terminal {
                    prop_assert!(state.is_terminal());
                    prop_assert_eq!(state.score(), score_before);
                    prop_assert_eq!(*state.bird(), bird_before);
                }
                was_terminal = state.is_terminal();
            }
        }

        #[test]
        fn prop_spawned_gates_fill_viewport(
            width in -10i32..2000,
            height in -10i32..2000,
            seed in any::<u64>(),
        ) {
            let viewport = Viewport::new(width, height);
            let mut state = GameState::new(viewport, seed);
            tick(&mut state, &TickInput::default());

            let h = viewport.size().y;
            prop_assert!(state.config().spawn_cadence >= 1);
            for gate in state.gates() {
                let total = gate.top + state.config().gap + gate.bottom;
                prop_assert!((total - h).abs() <= h * 1e-5 + 1e-3);
                prop_assert!(gate.top >= h * 0.1 - 1e-3);
                prop_assert!(gate.top <= h * 0.6 + 1e-3);
            }
        }
    }
}

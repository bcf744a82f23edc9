//! Fixed timestep simulation tick and input handling
//!
//! One `tick` call advances the whole simulation by 16 ms, in a fixed order:
//! clock, spawner streams, player physics, world movement and scoring, then
//! collision. Input events arrive between ticks and mutate state immediately;
//! their effect shows up on the next tick's physics step.

use super::collision::player_hit;
use super::physics::{jump, step_player, step_world};
use super::spawn::{maybe_spawn_cloud, maybe_spawn_obstacle, maybe_spawn_tree};
use super::state::{GamePhase, GameState, PlayerState};

/// Abstract input events; key decoding happens outside the core
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// Space/up: begin the game from the title screen, or jump
    BeginOrJump,
    /// Start a fresh run, from GameOver or mid-run
    Restart,
    /// Request teardown; the core only records the observation
    Quit,
}

/// Apply an input event to the session
///
/// Events outside their applicable state are silent no-ops; the state machine
/// only reacts to defined transitions.
pub fn apply_input(state: &mut GameState, event: InputEvent) {
    match event {
        InputEvent::BeginOrJump => match state.phase {
            GamePhase::Start => {
                log::info!("Session start (seed {})", state.seed);
                state.phase = GamePhase::Playing;
            }
            GamePhase::Playing => jump(state),
            GamePhase::GameOver => {}
        },
        InputEvent::Restart => match state.phase {
            GamePhase::Playing | GamePhase::GameOver => {
                log::info!("Restart at score {}", state.score);
                state.reset_run();
                state.phase = GamePhase::Playing;
            }
            GamePhase::Start => {}
        },
        InputEvent::Quit => {
            state.quit_requested = true;
        }
    }
}

/// Advance the simulation by one fixed tick
///
/// Ticks delivered in Start or GameOver are no-ops; rendering may still
/// happen outside, but nothing here moves.
pub fn tick(state: &mut GameState) {
    if state.phase != GamePhase::Playing {
        return;
    }

    state.time_ticks += 1;

    maybe_spawn_obstacle(state);
    maybe_spawn_cloud(state);
    maybe_spawn_tree(state);

    step_player(state);
    step_world(state);

    // Collision is checked against post-move positions
    if player_hit(&state.player, &state.obstacles, &state.tuning) {
        enter_game_over(state);
    }
}

/// Playing -> GameOver: the tick driver freezes and the high score is
/// reconciled exactly once per session
fn enter_game_over(state: &mut GameState) {
    state.player.state = PlayerState::Dead;
    state.phase = GamePhase::GameOver;
    if state.score > state.high_score {
        state.high_score = state.score;
        state.new_high_score = true;
        log::info!("Game over: new high score {}", state.score);
    } else {
        log::info!("Game over at score {}", state.score);
    }
}

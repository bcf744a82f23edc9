//! Per-tick physics: player jump arc and world scrolling
//!
//! y grows downward, so gravity is a positive per-tick velocity increment and
//! the jump impulse is negative. All deltas are pixels/tick at 16 ms.

use super::state::{GameState, PlayerState};

/// Advance the player one tick: cosmetic animation always, gravity while
/// airborne, clamped landing at the ground baseline
pub fn step_player(state: &mut GameState) {
    let player = &mut state.player;
    player.anim_phase += state.tuning.anim_step;

    if player.state == PlayerState::Jumping {
        player.velocity += state.tuning.gravity;
        player.pos.y += player.velocity;

        if player.pos.y >= player.base_y {
            player.pos.y = player.base_y;
            player.velocity = 0.0;
            player.state = PlayerState::Running;
        }
    }
}

/// Begin a jump. Only accepted while Running; mid-air requests are no-ops.
pub fn jump(state: &mut GameState) {
    if state.player.state == PlayerState::Running {
        state.player.state = PlayerState::Jumping;
        state.player.velocity = state.tuning.jump_velocity;
    }
}

/// Scroll every non-player entity, drop the ones that left the playfield,
/// and score one point per departed obstacle
pub fn step_world(state: &mut GameState) {
    let obstacle_dx = state.speed * state.tuning.obstacle_speed_factor;
    let tree_dx = state.speed * state.tuning.tree_speed_factor;

    for obstacle in &mut state.obstacles {
        obstacle.pos.x -= obstacle_dx;
    }
    for cloud in &mut state.clouds {
        cloud.pos.x -= cloud.speed;
    }
    for tree in &mut state.trees {
        tree.pos.x -= tree_dx;
    }

    // Removal happens the same tick the trailing edge crosses the left
    // boundary; each removed obstacle is worth exactly one point.
    let mut passed = 0u32;
    state.obstacles.retain(|o| {
        let live = o.pos.x + o.size.x >= 0.0;
        if !live {
            passed += 1;
        }
        live
    });
    for _ in 0..passed {
        award_point(state);
    }

    state.clouds.retain(|c| c.pos.x + 80.0 * c.scale >= 0.0);
    state.trees.retain(|t| t.pos.x + t.size.x >= 0.0);
}

/// Increment the score and bump scroll speed at each crossing of the
/// configured score step, saturating at the ceiling
fn award_point(state: &mut GameState) {
    state.score += 1;
    if state.score % state.tuning.speed_step_score == 0 && state.speed < state.tuning.max_speed {
        state.speed = (state.speed + state.tuning.speed_increment).min(state.tuning.max_speed);
        log::debug!("Score {}: speed up to {:.1}", state.score, state.speed);
    }
}

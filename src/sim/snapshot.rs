//! Read-only view of the simulation for the rendering collaborator

use super::state::{Cloud, GamePhase, GameState, Mountain, Obstacle, PlayerState, Tree};
use crate::consts::MOUNTAIN_COUNT;

/// Everything a renderer needs for one frame, borrowed from the session
///
/// The core exposes no mutation through this view; the renderer reads
/// geometry and type tags and draws.
#[derive(Debug)]
pub struct Snapshot<'a> {
    pub phase: GamePhase,
    pub score: u32,
    pub high_score: u32,
    pub new_high_score: bool,
    pub speed: f32,
    pub quit_requested: bool,

    pub player_pos: glam::Vec2,
    pub player_size: glam::Vec2,
    pub player_state: PlayerState,
    pub player_frame: u32,

    pub obstacles: &'a [Obstacle],
    pub clouds: &'a [Cloud],
    pub trees: &'a [Tree],
    pub mountains: &'a [Mountain; MOUNTAIN_COUNT],
}

impl GameState {
    /// Capture the current frame's render view
    pub fn snapshot(&self) -> Snapshot<'_> {
        Snapshot {
            phase: self.phase,
            score: self.score,
            high_score: self.high_score,
            new_high_score: self.new_high_score,
            speed: self.speed,
            quit_requested: self.quit_requested,
            player_pos: self.player.pos,
            player_size: self.player.size,
            player_state: self.player.state,
            player_frame: self.player.frame(),
            obstacles: &self.obstacles,
            clouds: &self.clouds,
            trees: &self.trees,
            mountains: &self.mountains,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn snapshot_mirrors_session() {
        let state = GameState::new(5);
        let snap = state.snapshot();
        assert_eq!(snap.phase, GamePhase::Start);
        assert_eq!(snap.score, 0);
        assert_eq!(snap.player_pos, state.player.pos);
        assert_eq!(snap.clouds.len(), state.clouds.len());
        assert_eq!(snap.mountains.len(), MOUNTAIN_COUNT);
    }
}

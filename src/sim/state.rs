//! Game state and core simulation types
//!
//! One flat struct per entity kind with an enum discriminator where variants
//! differ only by dimensions; the per-tick loops iterate plain `Vec`s.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use crate::consts::*;
use crate::tuning::Tuning;

/// Current phase of the session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// Title screen, no simulation runs
    Start,
    /// Active gameplay
    Playing,
    /// Run ended on a collision
    GameOver,
}

/// Player lifecycle state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerState {
    Running,
    Jumping,
    /// Declared for sprite parity; no input currently maps to it
    Ducking,
    Dead,
}

/// The player character. Horizontal position is fixed; the world scrolls.
#[derive(Debug, Clone)]
pub struct Player {
    pub pos: Vec2,
    pub size: Vec2,
    /// Ground baseline for the top of the sprite
    pub base_y: f32,
    /// Vertical velocity, pixels/tick, y grows downward
    pub velocity: f32,
    pub state: PlayerState,
    /// Cosmetic run-cycle accumulator, no gameplay effect
    pub anim_phase: f32,
}

impl Player {
    pub fn new() -> Self {
        let size = Vec2::new(PLAYER_WIDTH, PLAYER_HEIGHT);
        let base_y = ground_y() - size.y;
        Self {
            pos: Vec2::new(PLAYER_X, base_y),
            size,
            base_y,
            velocity: 0.0,
            state: PlayerState::Running,
            anim_phase: 0.0,
        }
    }

    /// Two-frame sprite cycle derived from the animation accumulator
    #[inline]
    pub fn frame(&self) -> u32 {
        self.anim_phase as u32 % 2
    }

    /// Whether the player is standing on the ground
    #[inline]
    pub fn on_ground(&self) -> bool {
        self.pos.y >= self.base_y
    }
}

impl Default for Player {
    fn default() -> Self {
        Self::new()
    }
}

/// Obstacle variants, each with fixed dimensions from the tuning table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ObstacleKind {
    Small,
    Medium,
    Large,
    Cluster,
}

impl ObstacleKind {
    pub const ALL: [ObstacleKind; 4] = [
        ObstacleKind::Small,
        ObstacleKind::Medium,
        ObstacleKind::Large,
        ObstacleKind::Cluster,
    ];

    /// (width, height) for this variant
    pub fn dims(&self, tuning: &Tuning) -> (f32, f32) {
        match self {
            ObstacleKind::Small => tuning.obstacle_small,
            ObstacleKind::Medium => tuning.obstacle_medium,
            ObstacleKind::Large => tuning.obstacle_large,
            ObstacleKind::Cluster => tuning.obstacle_cluster,
        }
    }
}

/// A ground obstacle scrolling toward the player
#[derive(Debug, Clone)]
pub struct Obstacle {
    pub kind: ObstacleKind,
    pub pos: Vec2,
    pub size: Vec2,
}

/// A cosmetic cloud with its own drift speed, independent of scroll speed
#[derive(Debug, Clone)]
pub struct Cloud {
    pub pos: Vec2,
    pub scale: f32,
    pub speed: f32,
}

/// A cosmetic midground tree, scrolling slower than the ground for parallax
#[derive(Debug, Clone)]
pub struct Tree {
    pub pos: Vec2,
    pub size: Vec2,
    pub big: bool,
}

/// A fixed background mountain, built once per session
#[derive(Debug, Clone)]
pub struct Mountain {
    pub x: f32,
    pub size: Vec2,
    pub big: bool,
}

fn build_mountains() -> [Mountain; MOUNTAIN_COUNT] {
    let spacing = GAME_WIDTH / MOUNTAIN_COUNT as f32;
    std::array::from_fn(|i| {
        let big = i % 2 == 0;
        let size = if big {
            Vec2::new(260.0, 180.0)
        } else {
            Vec2::new(180.0, 120.0)
        };
        Mountain {
            x: i as f32 * spacing + 40.0,
            size,
            big,
        }
    })
}

/// Complete session state (deterministic for a given seed and input sequence)
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    pub tuning: Tuning,
    pub phase: GamePhase,
    pub score: u32,
    /// Horizontal world velocity, pixels/tick; grows with score up to a ceiling
    pub speed: f32,
    /// Best score seen across sessions; never decreases
    pub high_score: u32,
    /// Set on the transition into GameOver if this run beat the high score
    pub new_high_score: bool,
    /// Observation only; teardown is the window layer's job
    pub quit_requested: bool,
    /// Simulation tick counter; the session clock is derived from it
    pub time_ticks: u64,

    // Per-category last-spawn timestamps (ms of session clock)
    pub last_obstacle_ms: u64,
    pub last_cloud_ms: u64,
    pub last_tree_ms: u64,

    pub player: Player,
    pub obstacles: Vec<Obstacle>,
    pub clouds: Vec<Cloud>,
    pub trees: Vec<Tree>,
    pub mountains: [Mountain; MOUNTAIN_COUNT],

    pub rng: Pcg32,
}

impl GameState {
    /// Create a new session in the Start phase with the given seed
    pub fn new(seed: u64) -> Self {
        Self::with_tuning(seed, Tuning::default())
    }

    pub fn with_tuning(seed: u64, tuning: Tuning) -> Self {
        let initial_speed = tuning.initial_speed;
        let mut state = Self {
            seed,
            tuning,
            phase: GamePhase::Start,
            score: 0,
            speed: initial_speed,
            high_score: 0,
            new_high_score: false,
            quit_requested: false,
            time_ticks: 0,
            last_obstacle_ms: 0,
            last_cloud_ms: 0,
            last_tree_ms: 0,
            player: Player::new(),
            obstacles: Vec::new(),
            clouds: Vec::new(),
            trees: Vec::new(),
            mountains: build_mountains(),
            rng: Pcg32::seed_from_u64(seed),
        };
        super::spawn::populate_decorations(&mut state);
        state
    }

    /// Milliseconds of session clock, derived from the fixed tick counter
    #[inline]
    pub fn elapsed_ms(&self) -> u64 {
        self.time_ticks * TICK_MS
    }

    /// Reinitialize for a fresh run: new player, cleared stores, score and
    /// speed back to their initial values, spawn stamps re-seeded to now.
    ///
    /// Used by construction and by RESTART from either Playing or GameOver.
    /// Calling it twice without an intervening tick yields the same state.
    pub fn reset_run(&mut self) {
        self.player = Player::new();
        self.obstacles.clear();
        self.clouds.clear();
        self.trees.clear();
        self.score = 0;
        self.speed = self.tuning.initial_speed;
        self.new_high_score = false;
        let now = self.elapsed_ms();
        self.last_obstacle_ms = now;
        self.last_cloud_ms = now;
        self.last_tree_ms = now;
        super::spawn::populate_decorations(self);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_session_starts_idle() {
        let state = GameState::new(7);
        assert_eq!(state.phase, GamePhase::Start);
        assert_eq!(state.score, 0);
        assert_eq!(state.player.state, PlayerState::Running);
        assert!(state.player.on_ground());
        assert!(state.obstacles.is_empty());
    }

    #[test]
    fn mountains_are_fixed_count() {
        let state = GameState::new(7);
        assert_eq!(state.mountains.len(), MOUNTAIN_COUNT);
    }

    #[test]
    fn initial_decorations_sit_off_screen_right() {
        let state = GameState::new(7);
        assert_eq!(state.clouds.len(), INITIAL_CLOUDS);
        assert_eq!(state.trees.len(), INITIAL_TREES);
        for cloud in &state.clouds {
            assert!(cloud.pos.x >= GAME_WIDTH);
        }
        for tree in &state.trees {
            assert!(tree.pos.x >= GAME_WIDTH);
        }
    }

    #[test]
    fn same_seed_same_world() {
        let a = GameState::new(99);
        let b = GameState::new(99);
        assert_eq!(a.clouds.len(), b.clouds.len());
        for (ca, cb) in a.clouds.iter().zip(&b.clouds) {
            assert_eq!(ca.pos, cb.pos);
            assert_eq!(ca.speed, cb.speed);
        }
    }

    #[test]
    fn player_frame_cycles() {
        let mut p = Player::new();
        assert_eq!(p.frame(), 0);
        p.anim_phase = 1.05;
        assert_eq!(p.frame(), 1);
        p.anim_phase = 2.4;
        assert_eq!(p.frame(), 0);
    }
}

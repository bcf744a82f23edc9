//! Dino Dash - an endless side-scrolling runner
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, spawning, collisions, game state)
//! - `tuning`: Data-driven game balance
//! - `highscores`: Best-effort high score persistence
//!
//! Rendering, input decoding, and the window lifecycle are external
//! collaborators: they feed [`sim::InputEvent`]s and fixed-rate ticks in, and
//! read a [`sim::Snapshot`] back out. Nothing in this crate draws.

pub mod highscores;
pub mod sim;
pub mod tuning;

pub use highscores::HighScoreFile;
pub use tuning::Tuning;

/// Fixed playfield geometry and timing
///
/// Gameplay numbers that vary between balance passes live in [`Tuning`];
/// these are the structural constants everything is calibrated against.
pub mod consts {
    /// Fixed simulation tick period in milliseconds (~60 Hz)
    pub const TICK_MS: u64 = 16;

    /// Playfield dimensions (pixels, y grows downward)
    pub const GAME_WIDTH: f32 = 1200.0;
    pub const GAME_HEIGHT: f32 = 400.0;
    /// Height of the ground strip at the bottom of the playfield
    pub const GROUND_HEIGHT: f32 = 40.0;

    /// Fixed horizontal position of the player; the world scrolls past it
    pub const PLAYER_X: f32 = 80.0;
    /// Player sprite bounding box
    pub const PLAYER_WIDTH: f32 = 70.0;
    pub const PLAYER_HEIGHT: f32 = 80.0;

    /// Background mountains, created once per session and never destroyed
    pub const MOUNTAIN_COUNT: usize = 4;

    /// Decorations re-populated on every run start
    pub const INITIAL_CLOUDS: usize = 3;
    pub const INITIAL_TREES: usize = 2;

    /// Vertical coordinate of standing level
    #[inline]
    pub fn ground_y() -> f32 {
        GAME_HEIGHT - GROUND_HEIGHT
    }
}

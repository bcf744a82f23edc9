//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only, injected at construction
//! - No rendering, input-device, or platform dependencies
//!
//! One `tick` drives: spawner -> player physics -> world movement/scoring ->
//! collision -> session update. A `Snapshot` is the only thing rendering sees.

pub mod collision;
pub mod physics;
pub mod snapshot;
pub mod spawn;
pub mod state;
pub mod tick;

pub use collision::{Rect, player_hit};
pub use snapshot::Snapshot;
pub use state::{
    Cloud, GamePhase, GameState, Mountain, Obstacle, ObstacleKind, Player, PlayerState, Tree,
};
pub use tick::{InputEvent, apply_input, tick};

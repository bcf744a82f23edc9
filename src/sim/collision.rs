//! Axis-aligned bounding-box collision
//!
//! Hit-regions are insets of the visual bounding boxes: sprites carry
//! transparent padding, so the collision rectangle is shrunk by fixed margins
//! per side. Detection is a pure function of current positions.

use glam::Vec2;

use super::state::{Obstacle, Player};
use crate::tuning::{Insets, Tuning};

/// An axis-aligned rectangle (top-left origin, y grows downward)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub pos: Vec2,
    pub size: Vec2,
}

impl Rect {
    pub fn new(pos: Vec2, size: Vec2) -> Self {
        Self { pos, size }
    }

    /// Shrink by per-side margins to form a hit-region
    pub fn inset(&self, insets: &Insets) -> Rect {
        Rect {
            pos: self.pos + Vec2::new(insets.left, insets.top),
            size: Vec2::new(
                (self.size.x - insets.left - insets.right).max(0.0),
                (self.size.y - insets.top - insets.bottom).max(0.0),
            ),
        }
    }

    /// Overlap test; touching edges do not count
    pub fn intersects(&self, other: &Rect) -> bool {
        self.pos.x < other.pos.x + other.size.x
            && other.pos.x < self.pos.x + self.size.x
            && self.pos.y < other.pos.y + other.size.y
            && other.pos.y < self.pos.y + self.size.y
    }
}

/// The player's hit-region for the current tick
pub fn player_hitbox(player: &Player, tuning: &Tuning) -> Rect {
    Rect::new(player.pos, player.size).inset(&tuning.player_insets)
}

/// An obstacle's hit-region
pub fn obstacle_hitbox(obstacle: &Obstacle, tuning: &Tuning) -> Rect {
    Rect::new(obstacle.pos, obstacle.size).inset(&tuning.obstacle_insets)
}

/// Whether the player currently intersects any live obstacle
///
/// Short-circuits on the first hit; only existence matters.
pub fn player_hit(player: &Player, obstacles: &[Obstacle], tuning: &Tuning) -> bool {
    let hitbox = player_hitbox(player, tuning);
    obstacles
        .iter()
        .any(|o| hitbox.intersects(&obstacle_hitbox(o, tuning)))
}

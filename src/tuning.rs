//! Data-driven game balance
//!
//! The source history carried three near-identical balance passes with
//! slightly different constants; they are collapsed into this single table.
//! Defaults are the canonical set; a JSON file can override any field.

use serde::{Deserialize, Serialize};
use std::path::Path;

/// Margins stripped from each side of a bounding box to form a hit-region
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Insets {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

/// Inclusive-exclusive range for uniform draws
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Span {
    pub min: f32,
    pub max: f32,
}

impl Span {
    pub const fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }
}

/// All gameplay balance numbers, calibrated for 16 ms ticks
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    // === Jump physics (pixels/tick, y grows downward) ===
    /// Added to vertical velocity every tick while airborne
    pub gravity: f32,
    /// Initial upward impulse on jump (negative = up)
    pub jump_velocity: f32,
    /// Animation phase step per tick (cosmetic cycling only)
    pub anim_step: f32,

    // === Scroll speed progression ===
    pub initial_speed: f32,
    pub max_speed: f32,
    pub speed_increment: f32,
    /// Speed bumps once each time score crosses a multiple of this
    pub speed_step_score: u32,

    // === Parallax factors applied to scroll speed ===
    pub obstacle_speed_factor: f32,
    pub tree_speed_factor: f32,

    // === Spawn intervals (milliseconds): base + uniform [0, jitter) ===
    pub obstacle_interval_ms: u64,
    pub obstacle_jitter_ms: u64,
    pub cloud_interval_ms: u64,
    pub cloud_jitter_ms: u64,
    pub tree_interval_ms: u64,
    pub tree_jitter_ms: u64,

    // === Hit-regions ===
    pub player_insets: Insets,
    pub obstacle_insets: Insets,

    // === Obstacle variant dimensions (width, height) ===
    pub obstacle_small: (f32, f32),
    pub obstacle_medium: (f32, f32),
    pub obstacle_large: (f32, f32),
    pub obstacle_cluster: (f32, f32),

    // === Cloud draw ranges ===
    pub cloud_speed: Span,
    pub cloud_scale: Span,
    pub cloud_y: Span,

    // === Tree size-class ranges ===
    pub tree_big_width: Span,
    pub tree_big_height: Span,
    pub tree_small_width: Span,
    pub tree_small_height: Span,
    /// Horizontal jitter past the right edge at spawn
    pub tree_x_jitter: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            gravity: 1.2,
            jump_velocity: -20.0,
            anim_step: 0.15,

            initial_speed: 8.0,
            max_speed: 18.0,
            speed_increment: 0.3,
            speed_step_score: 100,

            obstacle_speed_factor: 0.8,
            tree_speed_factor: 0.15,

            obstacle_interval_ms: 1200,
            obstacle_jitter_ms: 1800,
            cloud_interval_ms: 3000,
            cloud_jitter_ms: 3000,
            tree_interval_ms: 4000,
            tree_jitter_ms: 2000,

            player_insets: Insets {
                left: 15.0,
                top: 10.0,
                right: 15.0,
                bottom: 5.0,
            },
            obstacle_insets: Insets {
                left: 5.0,
                top: 5.0,
                right: 5.0,
                bottom: 5.0,
            },

            obstacle_small: (26.0, 50.0),
            obstacle_medium: (34.0, 68.0),
            obstacle_large: (44.0, 84.0),
            obstacle_cluster: (78.0, 56.0),

            cloud_speed: Span::new(1.0, 3.0),
            cloud_scale: Span::new(0.5, 1.5),
            cloud_y: Span::new(40.0, 160.0),

            tree_big_width: Span::new(40.0, 60.0),
            tree_big_height: Span::new(90.0, 130.0),
            tree_small_width: Span::new(24.0, 40.0),
            tree_small_height: Span::new(50.0, 90.0),
            tree_x_jitter: 100.0,
        }
    }
}

impl Tuning {
    /// Load a tuning override from a JSON file, falling back to defaults
    ///
    /// Missing or unreadable files are not errors; the sim always has a
    /// usable table.
    pub fn load(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(json) => match serde_json::from_str(&json) {
                Ok(tuning) => {
                    log::info!("Loaded tuning overrides from {}", path.display());
                    tuning
                }
                Err(e) => {
                    log::warn!("Ignoring malformed tuning file {}: {e}", path.display());
                    Self::default()
                }
            },
            Err(_) => Self::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_canonical() {
        let t = Tuning::default();
        assert_eq!(t.gravity, 1.2);
        assert_eq!(t.jump_velocity, -20.0);
        assert_eq!(t.initial_speed, 8.0);
        assert_eq!(t.max_speed, 18.0);
        assert_eq!(t.speed_step_score, 100);
    }

    #[test]
    fn partial_override_keeps_defaults() {
        let t: Tuning = serde_json::from_str(r#"{"gravity": 2.0}"#).unwrap();
        assert_eq!(t.gravity, 2.0);
        assert_eq!(t.jump_velocity, Tuning::default().jump_velocity);
    }

    #[test]
    fn load_missing_file_falls_back() {
        let t = Tuning::load(Path::new("/nonexistent/tuning.json"));
        assert_eq!(t, Tuning::default());
    }
}

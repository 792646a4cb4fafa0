use glam::{IVec2, UVec2};
use serde::{Deserialize, Serialize};

use crate::core::geometry::Rgb;
use crate::error::Result;

/// What the collision engine reports once the sampled grid is exhausted
/// without a hit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CollisionVerdict {
    /// A sampled pixel must be solid in both masks.
    #[default]
    PerPixel,
    /// Any bounding-box overlap counts as a collision; no sampling is done.
    BoundingBox,
}

/// Which pixels count as solid during sampling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CollisionPredicate {
    /// Exactly `(0, 0, 0)`.
    #[default]
    Black,
    /// Anything that was not keyed out by the chroma key.
    Opaque,
}

/// Configuration for the engine. Every field has a default, so a JSON file
/// only needs to name what it overrides.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Viewport width in pixels (default: 800).
    pub viewport_width: u32,
    /// Viewport height in pixels (default: 600).
    pub viewport_height: u32,
    /// Background colour treated as transparent when loading sheets.
    pub chroma_key: Rgb,
    /// Sampling stride of the per-pixel collision phase (default: 30).
    pub pixel_step: u32,
    pub collision_verdict: CollisionVerdict,
    pub collision_predicate: CollisionPredicate,
    /// Pixels per tick per held direction key (default: 5).
    pub player_speed: i32,
    /// A hostile spawns when a 1..=100 roll is below this (default: 4).
    pub spawn_threshold: u32,
    /// Added to both spawn coordinates after the jitter roll (default: 100).
    pub spawn_offset: i32,
    /// Upper bound of the 1..=N jitter roll for spawn coordinates (default: 100).
    pub spawn_jitter: u32,
    pub hostile_velocity: IVec2,
    pub starting_health: i32,
    pub seed: u64,
    /// Fixed timestep in seconds (default: 1/60).
    pub fixed_dt: f32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            viewport_width: 800,
            viewport_height: 600,
            chroma_key: Rgb::GREEN,
            pixel_step: 30,
            collision_verdict: CollisionVerdict::default(),
            collision_predicate: CollisionPredicate::default(),
            player_speed: 5,
            spawn_threshold: 4,
            spawn_offset: 100,
            spawn_jitter: 100,
            hostile_velocity: IVec2::new(-1, 0),
            starting_health: 100,
            seed: 42,
            fixed_dt: 1.0 / 60.0,
        }
    }
}

impl GameConfig {
    /// Parse a config from a JSON string.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn viewport(&self) -> UVec2 {
        UVec2::new(self.viewport_width, self.viewport_height)
    }
}

use glam::UVec2;
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Describes the sprite sheets a game draws from.
/// Loaded from a JSON file at runtime.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SheetManifest {
    #[serde(default)]
    pub player: SheetDescriptor,
    #[serde(default)]
    pub hostile: SheetDescriptor,
}

/// A horizontal strip of equally sized animation frames.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SheetDescriptor {
    /// Path relative to the asset root (e.g., "graphics/ship.png").
    pub path: String,
    pub frame_width: u32,
    pub frame_height: u32,
    /// Number of frames in the strip (default: 1).
    #[serde(default = "default_frames")]
    pub frames: u32,
}

fn default_frames() -> u32 {
    1
}

impl Default for SheetDescriptor {
    fn default() -> Self {
        Self {
            path: "graphics/ship.png".to_string(),
            frame_width: 128,
            frame_height: 64,
            frames: 2,
        }
    }
}

impl SheetDescriptor {
    pub fn frame_size(&self) -> UVec2 {
        UVec2::new(self.frame_width, self.frame_height)
    }
}

impl Default for SheetManifest {
    fn default() -> Self {
        Self {
            player: SheetDescriptor::default(),
            hostile: SheetDescriptor::default(),
        }
    }
}

impl SheetManifest {
    /// Parse a manifest from a JSON string.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

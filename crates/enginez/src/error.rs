use std::path::PathBuf;

use glam::UVec2;
use thiserror::Error;

/// Everything that can go wrong inside the engine core.
///
/// `ResourceLoad` and `ShapeMismatch` are raised while constructing an entity
/// and are recoverable by the caller (a spawn is simply aborted).
/// `InvalidAnimationState` and `OutOfRange` indicate a misconfigured entity or
/// a bug in the caller and are propagated out of the tick as fatal.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("failed to load image {path}: {reason}")]
    ResourceLoad { path: PathBuf, reason: String },

    #[error("cannot animate a sheet with zero frames")]
    InvalidAnimationState,

    #[error("pixel ({x}, {y}) is outside a {width}x{height} mask")]
    OutOfRange { x: i32, y: i32, width: u32, height: u32 },

    #[error("mask is {actual}, expected {expected}")]
    ShapeMismatch { expected: UVec2, actual: UVec2 },

    #[error("invalid configuration: {0}")]
    Config(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, EngineError>;

impl EngineError {
    pub fn resource_load(path: impl Into<PathBuf>, reason: impl ToString) -> Self {
        Self::ResourceLoad {
            path: path.into(),
            reason: reason.to_string(),
        }
    }

    /// Whether the error only aborts the construction that raised it.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Self::ResourceLoad { .. } | Self::ShapeMismatch { .. })
    }
}

//! Sprite-sheet frame cycling.
//!
//! Sheets are horizontal strips: frame `i` lives at `x = i * width`. The
//! animation advances one frame per tick and wraps around.

use glam::UVec2;

use crate::core::geometry::Rect;
use crate::error::{EngineError, Result};

/// Animation state for an entity's sprite sheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameAnimation {
    frame_count: u32,
    current: u32,
}

impl FrameAnimation {
    /// A zero `frame_count` is accepted here and reported on the first
    /// attempt to animate, so the misconfiguration surfaces loudly.
    pub fn new(frame_count: u32) -> Self {
        Self { frame_count, current: 0 }
    }

    pub fn frame_count(&self) -> u32 {
        self.frame_count
    }

    pub fn current_frame(&self) -> u32 {
        self.current
    }

    /// Advance to `to` (or the next frame when `None`), modulo the frame count.
    pub fn advance(&mut self, to: Option<u32>) -> Result<u32> {
        if self.frame_count == 0 {
            return Err(EngineError::InvalidAnimationState);
        }
        let target = to.unwrap_or_else(|| self.current.wrapping_add(1));
        self.current = target % self.frame_count;
        Ok(self.current)
    }

    /// Source rectangle of the current frame inside the sheet.
    pub fn source_rect(&self, frame_size: UVec2) -> Rect {
        Rect::new(
            (self.current * frame_size.x) as i32,
            0,
            frame_size.x as i32,
            frame_size.y as i32,
        )
    }
}

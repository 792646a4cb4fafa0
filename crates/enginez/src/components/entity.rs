use glam::{IVec2, UVec2};

use crate::api::types::{EntityId, SheetId};
use crate::components::animation::FrameAnimation;
use crate::components::mask::{Mask, PixelMask};
use crate::core::geometry::Rect;
use crate::error::{EngineError, Result};

/// Health every entity starts with unless configured otherwise.
pub const DEFAULT_HEALTH: i32 = 100;

/// Which side an entity is on. The two kinds share one data shape and only
/// differ in defaults and in how the world treats them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Player,
    Hostile,
}

impl EntityKind {
    /// Velocity an entity of this kind is born with.
    pub fn default_velocity(self) -> IVec2 {
        match self {
            EntityKind::Player => IVec2::ZERO,
            EntityKind::Hostile => IVec2::new(-1, 0),
        }
    }

    /// Players are kept on screen; hostiles may leave and get pruned.
    pub fn is_boundary_clamped(self) -> bool {
        matches!(self, EntityKind::Player)
    }

    pub fn sheet(self) -> SheetId {
        match self {
            EntityKind::Player => SheetId::PLAYER,
            EntityKind::Hostile => SheetId::HOSTILE,
        }
    }
}

/// A sprite with position, velocity, animation, health and a collision mask.
///
/// The mask is owned exclusively and is immutable after construction.
#[derive(Debug, Clone)]
pub struct Entity {
    pub id: EntityId,
    pub kind: EntityKind,
    /// Top-left corner of the bounding box, in screen pixels.
    pub pos: IVec2,
    /// Pixels added to `pos` by each call to `integrate`.
    pub vel: IVec2,
    size: UVec2,
    animation: FrameAnimation,
    health: i32,
    mask: Mask,
}

impl Entity {
    /// Create an entity at the origin with its kind's default velocity.
    ///
    /// Fails with `ShapeMismatch` when `size` is empty or the mask does not
    /// have exactly `size` pixels on each axis.
    pub fn new(
        id: EntityId,
        kind: EntityKind,
        size: UVec2,
        frame_count: u32,
        mask: Mask,
    ) -> Result<Self> {
        if size.x == 0 || size.y == 0 || mask.size() != size {
            return Err(EngineError::ShapeMismatch {
                expected: size,
                actual: mask.size(),
            });
        }
        Ok(Self {
            id,
            kind,
            pos: IVec2::ZERO,
            vel: kind.default_velocity(),
            size,
            animation: FrameAnimation::new(frame_count),
            health: DEFAULT_HEALTH,
            mask,
        })
    }

    // -- Builder pattern --

    pub fn with_pos(mut self, pos: IVec2) -> Self {
        self.pos = pos;
        self
    }

    pub fn with_velocity(mut self, vel: IVec2) -> Self {
        self.vel = vel;
        self
    }

    pub fn with_health(mut self, health: i32) -> Self {
        self.health = health;
        self
    }

    // -- Movement --

    /// Shift by `(dx, dy)` with no bounds check.
    pub fn move_by(&mut self, dx: i32, dy: i32) {
        self.pos = self.pos.saturating_add(IVec2::new(dx, dy));
    }

    pub fn set_velocity(&mut self, vx: i32, vy: i32) {
        self.vel = IVec2::new(vx, vy);
    }

    pub fn set_velocity_x(&mut self, vx: i32) {
        self.vel.x = vx;
    }

    pub fn set_velocity_y(&mut self, vy: i32) {
        self.vel.y = vy;
    }

    /// One step of `pos += vel`, each axis with its own component.
    /// Saturates at the `i32` limits.
    pub fn integrate(&mut self) {
        self.pos = self.pos.saturating_add(self.vel);
    }

    /// Clamp so the whole sprite stays inside `[0, w) x [0, h)`.
    ///
    /// A sprite larger than the viewport is pinned to the origin on that axis.
    pub fn enforce_boundary(&mut self, viewport_width: u32, viewport_height: u32) {
        let max_x = (viewport_width as i32 - self.size.x as i32).max(0);
        let max_y = (viewport_height as i32 - self.size.y as i32).max(0);
        self.pos.x = self.pos.x.clamp(0, max_x);
        self.pos.y = self.pos.y.clamp(0, max_y);
    }

    // -- Animation --

    pub fn advance_frame(&mut self, to: Option<u32>) -> Result<u32> {
        self.animation.advance(to)
    }

    pub fn current_frame(&self) -> u32 {
        self.animation.current_frame()
    }

    pub fn frame_count(&self) -> u32 {
        self.animation.frame_count()
    }

    /// Where the current frame sits in the sprite sheet.
    pub fn source_rect(&self) -> Rect {
        self.animation.source_rect(self.size)
    }

    // -- Health --

    pub fn health(&self) -> i32 {
        self.health
    }

    /// Store `health` as-is and report whether it is now depleted (`< 0`).
    /// The stored value is not clamped.
    pub fn set_health(&mut self, health: i32) -> bool {
        self.health = health;
        self.health < 0
    }

    // -- Collision surface --

    pub fn size(&self) -> UVec2 {
        self.size
    }

    pub fn bounds(&self) -> Rect {
        Rect::from_pos_size(self.pos, self.size)
    }

    pub fn mask(&self) -> &Mask {
        &self.mask
    }
}
